//! The rendering collaborator: pixel geometry and SVG generation over a
//! built layout.

pub mod generator;
pub mod geometry;

pub use generator::{generate_svg, generate_text_summary, truncated_label, SvgConfig};
pub use geometry::{frame_rect, FrameRect};
