//! CLI support for piglet
//!
//! Provides programmatic access to the `piglet` command so other tools can
//! render JSON-described statements without shelling out.

mod convert;
mod render;

pub use convert::{json_to_field, json_to_statement};
pub use render::{RenderOptions, execute_render, storage_overview};

use std::io;

use crate::error::{BuildError, ResolveError};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An expression or statement was rejected at construction
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// A storage function could not be resolved
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Input is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Valid JSON that does not describe an expression or statement
    #[error("Unexpected document shape: {0}")]
    Shape(String),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,
}
