//! Mosaic CLI - run masonry layouts from the command line.

#![allow(clippy::needless_pass_by_value, clippy::uninlined_format_args)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use clap::{Parser, Subcommand, ValueEnum};
use mosaic_core::LayoutItem;
use mosaic_layout::{LayoutConfig, LayoutResult, MasonryLayout};
use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Responsive masonry layout engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a JSON list of items
    Layout {
        /// JSON file with `[{id, width, height}, ...]` (`-` for stdin)
        #[arg(default_value = "-")]
        items: PathBuf,

        /// Container width in pixels
        #[arg(short, long)]
        width: f32,

        /// Breakpoint configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Show the column count, gap and column width for a container width
    Breakpoints {
        /// Container width in pixels
        #[arg(short, long)]
        width: f32,

        /// Breakpoint configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a breakpoint configuration file
    Check {
        /// Path to configuration file
        #[arg(default_value = "mosaic.yaml")]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Layout result with item rectangles, as JSON
    Json,
    /// Per-column summary
    Text,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            items,
            width,
            config,
            format,
        } => {
            run_layout(&items, width, config.as_deref(), format);
        }
        Commands::Breakpoints { width, config } => {
            show_breakpoints(width, config.as_deref());
        }
        Commands::Check { config } => {
            check_config(&config);
        }
    }
}

fn load_engine(config: Option<&Path>) -> MasonryLayout {
    let config = match config {
        Some(path) => match mosaic_yaml::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Config invalid: {}", e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    match MasonryLayout::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Config invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_items(path: &Path) -> Vec<LayoutItem> {
    let read = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    let content = match read {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read items: {}", e);
            std::process::exit(1);
        }
    };

    match parse_items(&content) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Items invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn parse_items(json: &str) -> Result<Vec<LayoutItem>, serde_json::Error> {
    serde_json::from_str(json)
}

fn run_layout(items_path: &Path, width: f32, config: Option<&Path>, format: OutputFormat) {
    let engine = load_engine(config);
    let items = read_items(items_path);
    tracing::info!(items = items.len(), width, "running layout");

    let result = engine.layout(&items, width);
    let dropped = items.len() - result.placed_count();
    if dropped > 0 {
        tracing::warn!(dropped, "items without positive dimensions were not placed");
    }

    match format {
        OutputFormat::Json => match render_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize layout: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Text => print!("{}", render_text(&result, items.len())),
    }
}

fn render_json(result: &LayoutResult) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "column_count": result.column_count,
        "column_width": result.column_width,
        "gap": result.gap,
        "content_height": result.content_height(),
        "columns": result.columns,
        "placements": result.placements(),
    });
    serde_json::to_string_pretty(&value)
}

fn render_text(result: &LayoutResult, input_count: usize) -> String {
    let mut out = String::new();
    let placed = result.placed_count();

    let _ = writeln!(
        out,
        "{} columns × {:.1}px (gap {}px), {} placed, {} dropped",
        result.column_count,
        result.column_width,
        result.gap,
        placed,
        input_count - placed
    );

    let heights = result.column_heights();
    for (column, height) in result.columns.iter().zip(heights) {
        let ids: Vec<String> = column.ids().map(|id| id.to_string()).collect();
        let _ = writeln!(
            out,
            "  column {} @ x={:.1}, height {:.1}: [{}]",
            column.index,
            result.column_offset(column.index),
            height,
            ids.join(", ")
        );
    }

    out
}

fn show_breakpoints(width: f32, config: Option<&Path>) {
    let engine = load_engine(config);
    println!("Width:        {:.1}px", width);
    println!("Columns:      {}", engine.column_count(width));
    println!("Gap:          {}px", engine.gap(width));
    println!("Column width: {:.1}px", engine.column_width(width));
}

fn check_config(path: &Path) {
    println!("Checking config: {}", path.display());

    match mosaic_yaml::load(path) {
        Ok(config) => {
            println!("Config valid!");
            println!("  Column steps: {}", config.columns.steps.len());
            println!("  Gap steps: {}", config.gaps.steps.len());
        }
        Err(e) => {
            eprintln!("Config invalid: {}", e);
            std::process::exit(1);
        }
    }
}
