//! CLI command implementations.

pub mod render;

pub use render::{execute_render, validate_args, RenderArgs};
