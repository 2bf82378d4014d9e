//! Error types for faceswap-launcher.

use crate::constants::exit_code;

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for faceswap-launcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize configuration")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Service identifier is not of the form `module:Class`.
    #[error("invalid service identifier '{value}': {reason}")]
    InvalidServiceId {
        /// The rejected identifier.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A process could not be started.
    #[error("failed to start '{program}'")]
    ProcessSpawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Waiting for a started process failed.
    #[error("failed to wait for '{program}'")]
    ProcessWait {
        /// Program being waited on.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Process exit code the launcher reports for this error.
    ///
    /// Spawn failures use the codes a shell reports for the same condition:
    /// 127 for a missing executable and 126 for one that cannot be executed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ProcessSpawn { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => exit_code::NOT_FOUND,
                std::io::ErrorKind::PermissionDenied => exit_code::NOT_EXECUTABLE,
                _ => exit_code::FAILURE,
            },
            _ => exit_code::FAILURE,
        }
    }
}
