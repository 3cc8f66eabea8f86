//! Error types for coverage reporting.

use std::path::PathBuf;

/// Result type for coverage reporting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a coverage report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A block definition line did not match the Blocks.txt shape.
    #[error("Malformed block definition at line {line}: {message}")]
    ParseBlocks { line: usize, message: String },

    /// Failed to read a font file.
    #[error("Failed to read font file '{path}': {source}")]
    ReadFont {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a font file.
    #[error("Failed to parse font '{path}': {message}")]
    ParseFont { path: PathBuf, message: String },

    /// Font has neither a (3,1) nor a (3,10) cmap subtable.
    #[error("Font '{path}' has no usable character map (cmap 3,1 or 3,10)")]
    MissingCharacterMap { path: PathBuf },

    /// Font has no decodable full-name record (name ID 4).
    #[error("Font '{path}' has no full name record (name ID 4)")]
    MissingFullName { path: PathBuf },

    /// Table-level read error.
    #[error("Font read error: {0}")]
    Read(#[from] read_fonts::ReadError),
}
