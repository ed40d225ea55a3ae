//! SVG flamegraph generation.
//!
//! A manual SVG generator over the flat entry list: one rect per entry,
//! drawn in index-table order, with each rect carrying its index as a
//! `data-idx` attribute so an interactive host can resolve hits back
//! through the index table.

use crate::flamegraph::geometry::frame_rect;
use crate::layout::LayoutEntry;
use crate::utils::config::{LABEL_CHAR_WIDTH, MIN_LABEL_WIDTH};
use crate::utils::error::FlamegraphError;
use log::info;

/// Flamegraph rendering configuration
#[derive(Debug, Clone)]
pub struct SvgConfig {
    pub title: String,
    pub width: f64,
    pub level_height: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            title: "Flamegraph".to_string(),
            width: crate::utils::config::DEFAULT_RENDER_WIDTH,
            level_height: crate::utils::config::DEFAULT_LEVEL_HEIGHT,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_level_height(mut self, level_height: f64) -> Self {
        self.level_height = level_height;
        self
    }
}

/// Generate an SVG flamegraph from a built layout
///
/// **Public** - main entry point for SVG generation
///
/// # Arguments
/// * `entries` - Flat layout from the builder, in index-table order
/// * `config` - Title and pixel dimensions
///
/// # Errors
/// * `FlamegraphError::EmptyEntries` - nothing to render
pub fn generate_svg(
    entries: &[LayoutEntry<'_>],
    config: &SvgConfig,
) -> Result<String, FlamegraphError> {
    if entries.is_empty() {
        return Err(FlamegraphError::EmptyEntries);
    }

    info!("Generating flamegraph with {} frames", entries.len());

    let max_row = entries.iter().map(|e| e.row_number).max().unwrap_or(0);
    let title_height = 30.0;
    // rows plus the 1px gap per row
    let graph_height = (max_row + 1) as f64 * config.level_height + max_row as f64;
    let total_height = title_height + graph_height;

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        config.width, total_height, config.width, total_height
    ));

    // Styles
    svg.push_str(
        r#"<style>.frame { font: 12px sans-serif; } .frame:hover { stroke: black; stroke-width: 1; cursor: pointer; opacity: 0.9; }</style>"#,
    );

    // Title
    svg.push_str(&format!(
        r#"<text x="{:.0}" y="20" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2.0,
        escape_text(&config.title)
    ));

    for (index, entry) in entries.iter().enumerate() {
        let rect = frame_rect(entry, config.width, config.level_height);
        if rect.width < 0.5 {
            continue; // invisible at this width
        }

        let top = rect.top + title_height;
        let color = heat_color(entry.width_ratio);
        let name = escape_text(&entry.original.name);

        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="frame" data-idx="{}"><title>{} ({})</title></rect>"#,
            rect.left, top, rect.width, rect.height, color, index, name, entry.original.value
        ));

        if let Some(label) = truncated_label(&entry.original.name, rect.width) {
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}" dx="4" dy="14" font-size="12" pointer-events="none">{}</text>"#,
                rect.left,
                top,
                escape_text(&label)
            ));
        }
    }

    svg.push_str("</svg>");

    info!("Flamegraph generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Warm heat ramp keyed on the frame's share of the rendered width:
/// narrow frames render yellow-orange, the root renders deep red.
pub fn heat_color(width_ratio: f64) -> String {
    let ratio = width_ratio.clamp(0.0, 1.0);
    let hue = 50.0 - ratio * 50.0;
    format!("hsl({hue:.0}, 84%, 58%)")
}

/// Fit a frame name into `bar_width` pixels, or decide it does not fit.
///
/// Returns `None` when the bar is too narrow to label at all, the full
/// name when it fits, and a `...`-suffixed prefix otherwise.
pub fn truncated_label(name: &str, bar_width: f64) -> Option<String> {
    if bar_width <= MIN_LABEL_WIDTH {
        return None;
    }

    let max_chars = (bar_width / LABEL_CHAR_WIDTH) as usize;
    if name.chars().count() <= max_chars {
        return Some(name.to_string());
    }
    if max_chars <= 3 {
        return None;
    }

    let prefix: String = name.chars().take(max_chars - 3).collect();
    Some(format!("{prefix}..."))
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Plain-text summary of the widest frames, for terminal output
///
/// **Public** - used by the render command's `--summary` flag
pub fn generate_text_summary(entries: &[LayoutEntry<'_>], max_lines: usize) -> String {
    let mut lines = Vec::new();

    let total = entries
        .first()
        .map(|e| e.original.value)
        .unwrap_or(0.0)
        .max(f64::MIN_POSITIVE);

    // Widest frames first, root excluded (it is always 100%).
    let mut widest: Vec<&LayoutEntry<'_>> = entries.iter().skip(1).collect();
    widest.sort_by(|a, b| {
        b.width_ratio
            .partial_cmp(&a.width_ratio)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    lines.push("  WIDEST FRAMES".to_string());
    lines.push(format!(
        "  {:<40} {:>12} {:>7}",
        "Frame", "Weight", "%"
    ));

    for entry in widest.iter().take(max_lines) {
        let percentage = entry.original.value / total * 100.0;
        let bar_width = (entry.width_ratio * 30.0).round() as usize;
        lines.push(format!(
            "  {:<40} {:>12} {:>6.1}% {}",
            display_name(&entry.original.name, 40),
            entry.original.value,
            percentage,
            "█".repeat(bar_width)
        ));
    }

    if widest.len() > max_lines {
        lines.push(format!(
            "  (showing top {} of {} frames)",
            max_lines,
            widest.len()
        ));
    }

    lines.join("\n")
}

fn display_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let tail: String = name
        .chars()
        .rev()
        .take(max - 3)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{tail}")
}
