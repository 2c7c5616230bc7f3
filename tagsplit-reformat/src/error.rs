//! Error types for the reformatter.

use std::path::PathBuf;

/// Errors that can occur while reformatting a file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input path has no usable file name to derive an output path from.
    #[error("Input path has no usable file name: {0}")]
    InvalidInputPath(PathBuf),
}
