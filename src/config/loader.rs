//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::schema::{NewConfig, OldConfig};

/// Error type for configuration loading.
///
/// Both variants display the same message; callers that need the cause can
/// match on the variant or walk [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse the expected config")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the expected config")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io { path, .. } | ConfigError::Decode { path, .. } => path,
        }
    }
}

/// Load a configuration in the current format.
pub fn load_new_config(path: &Path) -> Result<NewConfig, ConfigError> {
    load_json(path)
}

/// Load a configuration in the legacy format.
pub fn load_old_config(path: &Path) -> Result<OldConfig, ConfigError> {
    load_json(path)
}

/// Read `path` and decode it as JSON into `T`.
///
/// The raw cause of a failure is logged before the error is returned.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let result = fs::read(path)
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|bytes| {
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::Decode {
                path: path.to_path_buf(),
                source,
            })
        });

    match &result {
        Ok(_) => tracing::debug!(path = %path.display(), "Configuration loaded"),
        Err(ConfigError::Io { source, .. }) => {
            tracing::error!(path = %path.display(), error = %source, "Failed to read config file")
        }
        Err(ConfigError::Decode { source, .. }) => {
            tracing::error!(path = %path.display(), error = %source, "Failed to decode config file")
        }
    }

    result
}
