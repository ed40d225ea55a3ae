//! File output: SVG flamegraphs and JSON layout profiles.

pub mod json;
pub mod svg;

pub use json::{read_profile, write_profile};
pub use svg::write_svg;
