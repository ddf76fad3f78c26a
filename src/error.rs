//! Error types for blockcheck
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for blockcheck operations
pub type BlockcheckResult<T> = Result<T, BlockcheckError>;

/// Main error type for blockcheck operations
#[derive(Error, Debug)]
pub enum BlockcheckError {
    /// The configured source file does not exist
    #[error("{} does not exist.", .path.display())]
    MissingSourceFile { path: PathBuf },

    /// The source file exists but could not be read as text
    #[error("failed to read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
