//! Error types raised while loading or persisting a learned predictor.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing a predictor file.
#[derive(Debug, Error)]
pub enum PredictorFileError {
    /// Reading the predictor artefact failed.
    #[error("failed to read predictor file at {path}")]
    ReadFile {
        /// Path to the predictor artefact.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Decoding the predictor artefact failed.
    #[error("failed to decode predictor file at {path}")]
    Decode {
        /// Path to the predictor artefact.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
    /// Creating the parent directory of the output file failed.
    #[error("failed to create directory {path}")]
    CreateParent {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing the predictor artefact failed.
    #[error("failed to write predictor file at {path}")]
    WriteFile {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the predictor to `bincode` failed.
    #[error("failed to serialise predictor into {path}")]
    Serialise {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `bincode`.
        #[source]
        source: bincode::Error,
    },
}
