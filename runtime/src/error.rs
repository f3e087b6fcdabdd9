//! Error types for the runtime crate.

use thiserror::Error;

use crate::encoder::EncodeError;

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by encoding wrappers and the converter.
#[derive(Debug, Error)]
pub enum Error {
    /// A value that only produces bytes was asked to consume them.
    #[error("{target} cannot be unmarshalled")]
    Unsupported { target: &'static str },

    /// The injected encoder failed. Display and source are the encoder's own.
    #[error(transparent)]
    Encode(EncodeError),

    #[error("no conversion registered from {from} to {to}")]
    ConversionNotFound {
        from: &'static str,
        to: &'static str,
    },

    #[error("conversion from {from} to {to} is already registered")]
    DuplicateConversion {
        from: &'static str,
        to: &'static str,
    },
}
