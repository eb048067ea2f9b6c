//! Error types for copygate-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by corpus store implementations.
///
/// The analysis pipeline recovers from all of these at the matcher boundary;
/// they reach callers only when a store is used directly (e.g. loading a
/// corpus file in the CLI).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("corpus store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the query failed.
    #[error("corpus query failed: {0}")]
    Query(String),

    /// A corpus file could not be read.
    #[error("failed to read corpus file {path}")]
    File {
        /// Path of the corpus file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A corpus file was read but is not a valid entry list.
    #[error("failed to parse corpus file {path}")]
    Parse {
        /// Path of the corpus file.
        path: Utf8PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;
