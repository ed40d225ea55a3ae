//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while computing a layout
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid weight {value} on frame '{name}': weights must be finite and >= 0")]
    InvalidWeight { name: String, value: f64 },

    #[error("no layout entry at index {0}")]
    UnknownEntry(usize),
}

/// Errors that can occur while parsing profile input
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("malformed collapsed stack on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("input contains no stacks")]
    EmptyInput,
}

/// Errors that can occur during SVG flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("no layout entries to render")]
    EmptyEntries,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
