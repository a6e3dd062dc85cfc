//! Configuration error types.

/// Errors raised while loading, saving, or validating plaza settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A value parsed fine but would put the simulation in a nonsensical state.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
