//! Error types for the fallible `try_*` variants of the extension traits
//!
//! Most helpers in this crate report soft failures as `None`. Their `try_*`
//! counterparts return this error instead, so callers can tell a parse failure
//! apart from an empty result.

use thiserror::Error;

/// Errors that can occur in the extension helpers
#[derive(Error, Debug)]
pub enum Error {
    /// A chunk size of zero was requested
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// A regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A hex string contained a non-hex digit
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] ::hex::FromHexError),

    /// A hex string had an odd number of digits
    #[error("Odd number of hex digits: {0}")]
    OddHexLength(usize),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value did not serialize into a JSON object
    #[error("JSON value is not an object")]
    NotAnObject,

    /// No cloud-synced container is available to this process
    #[error("No cloud container configured; set {0} or enable iCloud Drive")]
    NoCloudContainer(&'static str),
}

/// Result type for the fallible extension helpers
pub type Result<T> = std::result::Result<T, Error>;
