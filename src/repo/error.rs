use std::path::PathBuf;

use thiserror::Error;

/// Describes the error conditions that can arise from repository
/// discovery, creation, and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// No metadata directory was found anywhere on the upward search path.
    #[error("no repository found in {0} or any parent directory")]
    NotFound(PathBuf),

    /// The metadata directory exists but holds no config file.
    #[error("no config file in repository at {0}")]
    MissingConfig(PathBuf),

    /// The config file names a format version this implementation does
    /// not support.
    #[error("unsupported repository format version `{0}`")]
    UnsupportedVersion(String),

    /// A path that must be a directory exists but is something else.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A new repository was requested at a path whose metadata directory
    /// already has contents.
    #[error("metadata directory {0} is not empty")]
    MetaDirNotEmpty(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
