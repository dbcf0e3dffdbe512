//! Extraction error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the extraction of a single document
///
/// Missing optional data (no title, no author, an unparsable date) is never
/// an error: those fields fall back to defaults when the article is finalized.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source could not be opened or read
    #[error("{}: {source}", path.display())]
    Io {
        /// Path of the document being extracted
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The tokenizer rejected the document as not well-formed
    ///
    /// Formats as `path:line:col: message`, the diagnostic line written for
    /// every failed document.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Xml {
        /// Path of the document being extracted
        path: PathBuf,
        /// 1-based line of the offending token
        line: usize,
        /// 0-based byte column of the offending token
        column: usize,
        /// Tokenizer error message
        message: String,
    },

    /// The file's metadata did not carry a usable change time to fall back on
    #[error("{}: no usable file change time", path.display())]
    Timestamp {
        /// Path of the document being extracted
        path: PathBuf,
    },
}

/// Result type alias using ExtractError
pub type Result<T> = std::result::Result<T, ExtractError>;
