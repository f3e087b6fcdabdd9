use thiserror::Error;

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing kind and version descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The string is not `version` or `group/version`
    #[error("unexpected group version string: {0:?}")]
    InvalidGroupVersion(String),
}
