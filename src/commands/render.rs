//! Render command implementation.
//!
//! The render command:
//! 1. Reads profile input (JSON tree or collapsed stacks)
//! 2. Builds the layout
//! 3. Optionally re-roots at a focus path
//! 4. Writes SVG and/or JSON output
//! 5. Optionally prints a terminal summary

use crate::flamegraph::{generate_svg, generate_text_summary, SvgConfig};
use crate::layout::{build, reroot, LayoutConfig, LayoutEntry, SiblingLayout};
use crate::output::{write_profile, write_svg};
use crate::parser::{build_tree, parse_collapsed, read_tree, to_profile, FrameNode};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RenderArgs {
    /// Input profile: a `.json` frame tree or collapsed stack text
    pub input: PathBuf,

    /// Output path for the SVG flamegraph (optional)
    pub output_svg: Option<PathBuf>,

    /// Output path for the JSON layout profile (optional)
    pub output_json: Option<PathBuf>,

    /// Sibling layout strategy
    pub layout: SiblingLayout,

    /// Rendered width in pixels
    pub width: f64,

    /// Row height in pixels
    pub level_height: f64,

    /// Cull bars narrower than this many pixels
    pub minimum_bar_size: Option<f64>,

    /// Cull rows deeper than this
    pub max_depth: Option<usize>,

    /// Re-root at the frame reached by these child names, e.g. "main;execute"
    pub focus: Option<String>,

    /// Flamegraph title
    pub title: Option<String>,

    /// Print a text summary to stdout
    pub print_summary: bool,
}

/// Validate render arguments before doing any work
///
/// **Public** - called from main.rs
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.output_svg.is_none() && args.output_json.is_none() && !args.print_summary {
        bail!("nothing to do: pass at least one of --svg, --json or --summary");
    }
    if args.width <= 0.0 {
        bail!("--width must be positive, got {}", args.width);
    }
    if args.level_height <= 0.0 {
        bail!("--level-height must be positive, got {}", args.level_height);
    }
    if let Some(size) = args.minimum_bar_size {
        if size < 0.0 {
            bail!("--min-bar-size must be >= 0, got {size}");
        }
    }
    Ok(())
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or parse failures
/// * Invalid frame weights
/// * Unknown focus path
/// * File write errors
pub fn execute_render(args: RenderArgs) -> Result<()> {
    info!("Rendering profile: {}", args.input.display());

    // Step 1: Read input
    let tree = load_input(&args.input).context("Failed to read profile input")?;
    debug!(
        "Loaded tree: root '{}', weight {}",
        tree.name, tree.value
    );

    // Step 2: Build layout
    let config = LayoutConfig::new()
        .with_layout(args.layout)
        .with_render_width(args.width)
        .with_minimum_bar_size(args.minimum_bar_size)
        .with_max_depth(args.max_depth);

    let mut entries = build(&tree, &config).context("Failed to compute layout")?;
    info!("Laid out {} frames", entries.len());

    // Step 3: Optional re-root
    if let Some(path) = &args.focus {
        let target = find_entry(&entries, path)
            .with_context(|| format!("No frame matches focus path '{path}'"))?;
        entries = reroot(&entries, target, &config).context("Failed to re-root layout")?;
        info!("Re-rooted at '{path}': {} frames visible", entries.len());
    }

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| entries[0].original.name.clone());

    // Step 4: Write outputs
    if let Some(svg_path) = &args.output_svg {
        let svg_config = SvgConfig::new()
            .with_title(title.clone())
            .with_width(args.width)
            .with_level_height(args.level_height);
        let svg = generate_svg(&entries, &svg_config).context("Failed to generate SVG")?;
        write_svg(&svg, svg_path).context("Failed to write SVG output")?;
    }

    if let Some(json_path) = &args.output_json {
        let profile = to_profile(&entries, &title, args.layout.as_str());
        write_profile(&profile, json_path).context("Failed to write JSON output")?;
    }

    // Step 5: Terminal summary
    if args.print_summary {
        println!("{}", generate_text_summary(&entries, 15));
    }

    Ok(())
}

/// Read a frame tree, picking the codec by file extension.
fn load_input(path: &PathBuf) -> Result<FrameNode> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        return Ok(read_tree(path)?);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let lines = parse_collapsed(&text)?;
    let root_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("all");
    Ok(build_tree(&lines, root_name))
}

/// Walk the index table from the root along child names.
///
/// The path is a semicolon-joined list of frame names below the root,
/// matching the collapsed stack notation.
fn find_entry(entries: &[LayoutEntry<'_>], path: &str) -> Option<usize> {
    let mut index = 0;
    for segment in path.split(';').filter(|s| !s.is_empty()) {
        index = *entries[index]
            .children
            .iter()
            .find(|&&child| entries[child].original.name == segment)?;
    }
    Some(index)
}
