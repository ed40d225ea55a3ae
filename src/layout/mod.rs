//! The layout engine: sibling ordering, the builder, zoom and hit-test
//! resolution.

pub mod builder;
pub mod order;

pub use builder::{build, reroot, resolve, LayoutConfig, LayoutEntry};
pub use order::SiblingLayout;
