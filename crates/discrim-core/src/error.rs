//! Error types for discrim-core

use thiserror::Error;

/// Result type alias for discrim-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for calculator operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input stream closed before three valid coefficients were read
    #[error("input ended before a valid coefficient was supplied")]
    EndOfInput,

    /// Reading or writing a console stream failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
