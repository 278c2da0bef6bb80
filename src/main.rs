//! CLI entry point for gleaner

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use gleaner::{
    AssetKind, Collector, CollectorConfig, Direction, ListFormatter, OutputConfig, PageNode,
    Preset, ScanConfig, Scanner, SortKey, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum DirectionArg {
    #[default]
    Asc,
    Desc,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => Direction::Ascending,
            DirectionArg::Desc => Direction::Descending,
        }
    }
}

/// Asset kind to collect
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum KindArg {
    #[default]
    Image,
    Document,
    Video,
    Audio,
    Other,
}

impl From<KindArg> for AssetKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Image => AssetKind::Image,
            KindArg::Document => AssetKind::Document,
            KindArg::Video => AssetKind::Video,
            KindArg::Audio => AssetKind::Audio,
            KindArg::Other => AssetKind::Other,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(about = "Collect, dedupe, and sort image assets across a page tree")]
#[command(version)]
struct Args {
    /// Content directory to collect from
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Sort key: name, filename, modified, size
    /// (unrecognized keys fall back to name with a warning)
    #[arg(short = 's', long = "sort", default_value = "name")]
    sort: String,

    /// Sort direction
    #[arg(long = "direction", value_name = "DIR", default_value = "asc")]
    direction: DirectionArg,

    /// Also collect from descendants beyond direct child pages
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Treat the top-level pages of PATH as independent site roots
    /// (full subtrees are always walked in this mode)
    #[arg(long = "site", conflicts_with = "recursive")]
    site: bool,

    /// Use a named preset: page-images, page-images-recursive, site-images
    #[arg(
        long = "preset",
        value_name = "NAME",
        conflicts_with_all = ["recursive", "site"]
    )]
    preset: Option<String>,

    /// Kind of asset to collect
    #[arg(short = 'k', long = "kind", default_value = "image")]
    kind: KindArg,

    /// Include hidden files and directories
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Descend only N levels deep while scanning
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Show size and modification time columns
    #[arg(short = 'l', long = "long")]
    long: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    // Unknown sort keys fall back to name; make the fallback visible
    let key = match SortKey::parse(&args.sort) {
        Some(key) => key,
        None => {
            eprintln!(
                "gleaner: warning: unknown sort key '{}', sorting by name",
                args.sort
            );
            SortKey::default()
        }
    };

    let preset = args.preset.as_deref().map(|name| {
        Preset::parse(name).unwrap_or_else(|| {
            eprintln!(
                "gleaner: unknown preset '{}' (expected one of: page-images, page-images-recursive, site-images)",
                name
            );
            process::exit(1);
        })
    });

    let config = match preset {
        Some(preset) => CollectorConfig {
            key,
            direction: args.direction.into(),
            kind: args.kind.into(),
            ..preset.config()
        },
        None => CollectorConfig {
            key,
            direction: args.direction.into(),
            recursive: args.recursive || args.site,
            kind: args.kind.into(),
        },
    };
    let site_wide = args.site || preset.is_some_and(|p| p.site_wide());

    let scan_config = ScanConfig {
        include_hidden: args.all,
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
    };

    let root = match Scanner::new(scan_config).scan(&args.path) {
        Some(page) => page,
        None => {
            eprintln!(
                "gleaner: cannot access '{}': No such file or directory",
                args.path.display()
            );
            process::exit(1);
        }
    };

    let collector = Collector::new(config);
    let collection = if site_wide {
        collector.collect_forest(root.children())
    } else {
        collector.collect(&root)
    };

    let result = if args.json {
        print_json(&collection)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            long: args.long,
        };
        ListFormatter::new(output_config).print(&collection, args.kind.into())
    };

    if let Err(e) = result {
        eprintln!("gleaner: error writing output: {}", e);
        process::exit(1);
    }
}
