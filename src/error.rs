use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to {action} {}: {source}", path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} file(s) could not be processed")]
    PartialFailure(usize),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PomError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PomError::FileIo {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PomError::FileIo {
            action: "write",
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PomError>;
