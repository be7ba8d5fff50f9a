//! Error types for lambda-bakery.
//!
//! Callbacks handed to the invoker keep their own error types; the crate
//! error only covers what the demo itself can get wrong.

use thiserror::Error;

/// A unified error type for the demo.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the transcript failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Demo settings are unusable.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for lambda-bakery operations.
pub type Result<T> = std::result::Result<T, Error>;
