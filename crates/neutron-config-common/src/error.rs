//! Error types for loading parameters and writing configuration.
//!
//! Validation failures are service specific and live with each generator;
//! this module only covers the I/O around them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for config I/O operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while reading overrides or writing config files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a parameter file.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Failed to write a config file.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Parameter overrides are not valid YAML for the target type.
    #[error("Invalid parameter overrides in {origin}: {source}")]
    Yaml {
        /// Where the YAML came from (file path or "<inline>").
        origin: String,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Creates a read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a YAML error.
    pub fn yaml(origin: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            origin: origin.into(),
            source,
        }
    }
}
