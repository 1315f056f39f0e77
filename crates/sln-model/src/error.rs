//! Error types for sln-model

/// Result type for sln-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Value-level conversion errors: a token matched its expected shape but
/// failed semantic conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unrecognized build configuration: {0:?}")]
    UnknownConfiguration(String),

    #[error("Unrecognized platform target: {0:?}")]
    UnknownPlatform(String),

    #[error("Unrecognized configuration indicator: {0:?}")]
    UnknownIndicator(String),

    #[error("Unrecognized section scope marker: {0:?}")]
    UnknownScope(String),

    #[error("Malformed solution configuration (expected Name|Platform): {0:?}")]
    MalformedConfiguration(String),

    #[error("Malformed version number: {0:?}")]
    MalformedVersion(String),

    #[error("Malformed GUID: {0}")]
    MalformedGuid(#[from] uuid::Error),
}
