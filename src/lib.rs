//! Flamelay
//!
//! A flamegraph layout engine for weighted call trees.
//!
//! The core is a pure transformation: a raw weighted tree goes in, a flat
//! list of positioned rectangles comes out, with depth mapped to row and
//! width proportional to weight. On top of that the crate provides
//! re-rooting (zoom), pluggable sibling ordering, index-based hit-test
//! resolution, a framework-agnostic interaction surface, and an SVG
//! renderer plus CLI built on the engine.
//!
//! ## Getting Started
//!
//! ```ignore
//! use flamelay::layout::{build, LayoutConfig};
//! use flamelay::parser::FrameNode;
//!
//! let tree = FrameNode::new("root", 10.0).with_children(vec![
//!     FrameNode::new("work", 6.0),
//!     FrameNode::new("idle", 4.0),
//! ]);
//! let entries = build(&tree, &LayoutConfig::default())?;
//! ```

pub mod commands;
pub mod flamegraph;
pub mod interaction;
pub mod layout;
pub mod output;
pub mod parser;
pub mod utils;
