//! Error types for txt2link.

use thiserror::Error;

/// Result type for txt2link operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the crate's outer surfaces.
///
/// The [`linkify`](crate::linkify) transformation itself is total and never
/// fails; errors only arise from file I/O and template rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error occurred while rendering a Handlebars template.
    #[error("Template render error: {0}")]
    Template(#[from] handlebars::RenderError),
}
