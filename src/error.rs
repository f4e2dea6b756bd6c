use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// The core has few invalid-input paths: bad body parameters and broken
/// scenario files are rejected up front, everything downstream is
/// deterministic math.
#[derive(Debug, Error)]
pub enum Error {
    /// Body construction with a non-positive mass or radius.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Scenario configuration that deserialized fine but is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed scenario YAML.
    #[error("scenario parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Propagated I/O errors from scenario loading.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
