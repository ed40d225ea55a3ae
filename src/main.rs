//! Flamelay CLI
//!
//! Renders flamegraphs and layout profiles from weighted call trees.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use flamelay::commands::{execute_render, validate_args, RenderArgs};
use flamelay::layout::SiblingLayout;
use flamelay::parser::read_tree;
use flamelay::utils::config::{DEFAULT_LEVEL_HEIGHT, DEFAULT_RENDER_WIDTH, SCHEMA_VERSION};

/// Flamelay - flamegraph layout and rendering for weighted call trees
#[derive(Parser, Debug)]
#[command(name = "flamelay")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a profile and render SVG and/or JSON output
    Render {
        /// Input profile: a .json frame tree or collapsed stack text
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the SVG flamegraph
        #[arg(short, long)]
        svg: Option<PathBuf>,

        /// Output path for the JSON layout profile
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Sibling layout: as-given, weight-descending or alphabetical
        #[arg(short, long, default_value = "as-given")]
        layout: SiblingLayout,

        /// Rendered width in pixels
        #[arg(long, default_value_t = DEFAULT_RENDER_WIDTH)]
        width: f64,

        /// Row height in pixels
        #[arg(long, default_value_t = DEFAULT_LEVEL_HEIGHT)]
        level_height: f64,

        /// Cull bars narrower than this many pixels
        #[arg(long)]
        min_bar_size: Option<f64>,

        /// Cull rows deeper than this
        #[arg(long)]
        max_depth: Option<usize>,

        /// Re-root at a frame addressed by child names, e.g. "main;execute"
        #[arg(long)]
        focus: Option<String>,

        /// Flamegraph title (defaults to the root frame's name)
        #[arg(long)]
        title: Option<String>,

        /// Print a text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON frame tree file
    Validate {
        /// Path to the frame tree JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Render {
            input,
            svg,
            json,
            layout,
            width,
            level_height,
            min_bar_size,
            max_depth,
            focus,
            title,
            summary,
        } => {
            let args = RenderArgs {
                input,
                output_svg: svg,
                output_json: json,
                layout,
                width,
                level_height,
                minimum_bar_size: min_bar_size,
                max_depth,
                focus,
                title,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_tree_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a frame tree JSON file
///
/// **Private** - internal command implementation
fn validate_tree_file(file_path: PathBuf) -> Result<()> {
    use flamelay::layout::{build, LayoutConfig};

    println!("Validating frame tree: {}", file_path.display());

    let tree = read_tree(&file_path)?;
    let entries = build(&tree, &LayoutConfig::default())?;

    let max_row = entries.iter().map(|e| e.row_number).max().unwrap_or(0);

    println!("✓ Valid frame tree");
    println!("  Root: {}", tree.name);
    println!("  Total Weight: {}", tree.value);
    println!("  Frames: {}", entries.len());
    println!("  Depth: {max_row}");

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Flamelay Layout Profile Schema");
    println!("Current Version: {SCHEMA_VERSION}");
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string        - Schema version (e.g., '1.0.0')");
        println!("  title: string          - Flamegraph heading");
        println!("  strategy: string       - Sibling layout strategy");
        println!("  total_weight: number   - Weight of the root frame");
        println!("  frame_count: number    - Number of laid-out frames");
        println!("  frames: array          - Positioned frames, index-table order");
        println!("    index: number        - Position in the index table");
        println!("    name: string         - Frame name");
        println!("    value: number        - Frame weight");
        println!("    row: number          - Depth below the current root");
        println!("    left_ratio: number   - Left edge / rendered width");
        println!("    width_ratio: number  - Width / rendered width");
        println!("    children: array?     - Index-table positions of children");
        println!("  generated_at: string   - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Flamelay v{}", env!("CARGO_PKG_VERSION"));
    println!("Profile Schema: v{SCHEMA_VERSION}");
    println!();
    println!("A flamegraph layout engine for weighted call trees.");
}
