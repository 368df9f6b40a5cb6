//! Error types for configuration loading.

use mosaic_layout::BreakpointError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Tables parsed but are not usable
    #[error("Invalid breakpoints: {0}")]
    Validation(#[from] BreakpointError),
}
