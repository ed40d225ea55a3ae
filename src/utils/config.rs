//! Configuration and constants for the CLI.

/// Current layout profile schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default rendered width in pixels, also the pixel context
/// the minimum-bar-size cull evaluates against
pub const DEFAULT_RENDER_WIDTH: f64 = 1200.0;

/// Default height of one flamegraph row in pixels
pub const DEFAULT_LEVEL_HEIGHT: f64 = 20.0;

// Label rendering metrics for the SVG generator.
// Approximate glyph width for a 12px sans-serif font.
pub const LABEL_CHAR_WIDTH: f64 = 7.0;
pub const MIN_LABEL_WIDTH: f64 = 35.0;

/// Tolerance for sibling-width conservation checks.
/// Child ratios drift from their parent by a few ULPs per level;
/// this bound holds for trees up to depth 1000.
pub const WIDTH_TOLERANCE: f64 = 1e-9;
