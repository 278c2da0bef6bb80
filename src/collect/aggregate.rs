//! Asset aggregation over a traversal

use crate::model::{Asset, AssetKind, PageNode};

/// Gather the assets of `kind` attached to each node of `nodes`, in
/// traversal order. Each node contributes its assets in attachment order;
/// assets of other kinds are ignored.
pub fn aggregate<'a, N, I>(nodes: I, kind: AssetKind) -> Vec<&'a Asset>
where
    N: PageNode + 'a,
    I: IntoIterator<Item = &'a N>,
{
    let mut out = Vec::new();
    for node in nodes {
        out.extend(node.assets().iter().filter(|a| a.kind == kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::walk;
    use crate::model::Page;

    #[test]
    fn test_aggregate_filters_by_kind() {
        let page = Page::new("p")
            .with_asset(Asset::new("logo.png", AssetKind::Image))
            .with_asset(Asset::new("brochure.pdf", AssetKind::Document))
            .with_asset(Asset::new("banner.jpg", AssetKind::Image));

        let images = aggregate(walk(&page, false), AssetKind::Image);
        let names: Vec<_> = images.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["logo", "banner"]);

        let docs = aggregate(walk(&page, false), AssetKind::Document);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "brochure");
    }

    #[test]
    fn test_aggregate_preserves_traversal_then_attachment_order() {
        let tree = Page::new("root")
            .with_asset(Asset::new("r2.png", AssetKind::Image))
            .with_asset(Asset::new("r1.png", AssetKind::Image))
            .with_child(Page::new("child").with_asset(Asset::new("c1.png", AssetKind::Image)));

        let images = aggregate(walk(&tree, false), AssetKind::Image);
        let names: Vec<_> = images.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["r2", "r1", "c1"]);
    }

    #[test]
    fn test_aggregate_empty_nodes() {
        let images = aggregate(std::iter::empty::<&Page>(), AssetKind::Image);
        assert!(images.is_empty());
    }
}
