use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error types for MAC address generation and output.
#[derive(Error, Debug)]
pub enum MacGenError {
    /// Invalid or missing argument (count, output path, format).
    #[error("{0}")]
    ConfigurationError(String),

    /// The directory that should hold the output files does not exist.
    #[error("Output directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// Creating, writing or reading an output file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error encoding or decoding CSV.
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error serializing or deserializing JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A token that is not six hex octets joined by `:` or `-`.
    #[error("Invalid MAC address: {0}")]
    InvalidMacAddress(String),
}

impl MacGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MacGenError::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for MAC address generation operations.
pub type MacGenResult<T> = Result<T, MacGenError>;
