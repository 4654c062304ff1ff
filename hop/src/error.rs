use std::path::PathBuf;

use hop_launch::LaunchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HopError {
    #[error("{0}")]
    Usage(String),

    #[error("unknown alias: {0}")]
    UnknownAlias(String),

    #[error("couldn't determine the home directory")]
    NoHomeDir,

    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("alias defined more than once: {0}")]
    DuplicateAlias(String),
}

impl HopError {
    pub fn exit_code(&self) -> u8 {
        match self {
            HopError::Usage(_) => 2,
            _ => 1,
        }
    }
}
