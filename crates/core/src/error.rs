//! Error types for the starfield core.

use thiserror::Error;

/// Errors produced by field operations.
///
/// The simulation itself is total arithmetic and cannot fail; errors only
/// arise at the edges (color parsing, snapshot I/O).
#[derive(Debug, Error)]
pub enum FieldError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing a rendered frame.
    #[error("io error: {0}")]
    Io(String),
}
