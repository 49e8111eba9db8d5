use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T, E = TdkError> = std::result::Result<T, E>;

/// Boxed low-level cause carried by [`TdkError::Network`].
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum TdkError {
    #[error("connection failed: {url}")]
    Network {
        url: String,
        #[source]
        source: Cause,
    },
    #[error("'{0}' is not found in the dictionary")]
    WordNotFound(String),
    #[error("no audio files for '{0}' were found in the dictionary")]
    NoAudio(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load config file {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("failed to run audio player '{program}': {source}")]
    PlayerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("audio player '{program}' exited with {status}")]
    PlayerFailed { program: String, status: ExitStatus },
}

impl TdkError {
    pub(crate) fn network(url: &str, source: impl Into<Cause>) -> Self {
        Self::Network {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
