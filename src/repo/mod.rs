//! Locates and describes a repository on the local file system.
//!
//! A repository is a working directory with a `.rvc` metadata directory
//! at its root. The metadata directory holds the object store, refs, and
//! the configuration file; every path inside it is constructed through
//! the helpers on [`Repository`] rather than by ad-hoc joining.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

/// Name of the metadata directory at a repository's root.
pub const META_DIR_NAME: &str = ".rvc";

const DESCRIPTION_TXT: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";
const HEAD_TXT: &str = "ref: refs/heads/master\n";

/// A handle to one repository: its working-tree root, its metadata
/// directory, and the configuration parsed at discovery time.
///
/// The handle is an explicit value passed to every operation that needs
/// it; there is no process-wide current repository. Configuration is
/// loaded once when the handle is constructed and never reloaded.
#[derive(Debug)]
pub struct Repository {
    work_dir: PathBuf,
    meta_dir: PathBuf,
    config: Config,
}

impl Repository {
    /// Open the repository whose working tree is at `work_dir`.
    ///
    /// Loads and validates the configuration: the file must exist and
    /// must name a supported `core.repoformatversion`.
    pub fn open(work_dir: &Path) -> Result<Repository> {
        let work_dir = work_dir.to_path_buf();
        let meta_dir = work_dir.join(META_DIR_NAME);

        let config_path = meta_dir.join("config");
        if !config_path.is_file() {
            return Err(Error::MissingConfig(work_dir));
        }

        let config = Config::parse(&fs::read_to_string(&config_path)?);
        match config.get("core", "repoformatversion") {
            Some("0") => (),
            Some(other) => return Err(Error::UnsupportedVersion(other.to_string())),
            None => return Err(Error::UnsupportedVersion("<unset>".to_string())),
        }

        Ok(Repository {
            work_dir,
            meta_dir,
            config,
        })
    }

    /// Locate a repository by walking upward from `start`.
    ///
    /// Checks each ancestor of the absolute form of `start` for a
    /// metadata directory and opens the first match. If the filesystem
    /// root is reached without one: an error when `required`, `Ok(None)`
    /// otherwise.
    pub fn discover(start: &Path, required: bool) -> Result<Option<Repository>> {
        let start = absolute(start)?;

        let mut path = start.as_path();
        loop {
            if path.join(META_DIR_NAME).is_dir() {
                return Repository::open(path).map(Some);
            }

            match path.parent() {
                Some(parent) => path = parent,
                None => break,
            }
        }

        if required {
            Err(Error::NotFound(start))
        } else {
            Ok(None)
        }
    }

    /// Create a new, empty repository at `work_dir`.
    ///
    /// If the path exists it must be a directory whose metadata
    /// directory is empty or absent; otherwise the path is created.
    /// Writes the fixed skeleton (`branches/`, `objects/`, `refs/tags/`,
    /// `refs/heads/`, `description`, `HEAD`, `config`). A failure partway
    /// through aborts with the underlying error; directories already
    /// created are not rolled back.
    pub fn init(work_dir: &Path) -> Result<Repository> {
        // Bootstrap handle: config validation is skipped because the
        // config file is about to be written by this very call.
        let repo = Repository {
            work_dir: work_dir.to_path_buf(),
            meta_dir: work_dir.join(META_DIR_NAME),
            config: Config::initial(),
        };

        if repo.work_dir.exists() {
            if !repo.work_dir.is_dir() {
                return Err(Error::NotADirectory(repo.work_dir));
            }
            if !meta_dir_is_empty(&repo.meta_dir)? {
                return Err(Error::MetaDirNotEmpty(repo.meta_dir));
            }
        } else {
            fs::create_dir(&repo.work_dir)?;
        }

        for parts in &[
            &["branches"][..],
            &["objects"][..],
            &["refs", "tags"][..],
            &["refs", "heads"][..],
        ] {
            let _ = repo.state_dir(true, parts)?;
        }

        fs::write(repo.state_path(&["description"]), DESCRIPTION_TXT)?;
        fs::write(repo.state_path(&["HEAD"]), HEAD_TXT)?;
        fs::write(repo.state_path(&["config"]), repo.config.to_string())?;

        Ok(repo)
    }

    /// The working-tree root.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The metadata directory (`<work_dir>/.rvc`).
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// The configuration loaded at discovery time.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Join path components under the metadata directory.
    pub fn state_path(&self, parts: &[&str]) -> PathBuf {
        let mut path = self.meta_dir.clone();
        for part in parts {
            path.push(part);
        }
        path
    }

    /// Resolve a directory under the metadata directory.
    ///
    /// An existing directory is returned as-is; an existing
    /// non-directory is an error. A missing directory is created (with
    /// any missing parents) when `mkdir` is set, and reported as
    /// `Ok(None)` otherwise.
    pub fn state_dir(&self, mkdir: bool, parts: &[&str]) -> Result<Option<PathBuf>> {
        let path = self.state_path(parts);

        if path.exists() {
            if path.is_dir() {
                return Ok(Some(path));
            }
            return Err(Error::NotADirectory(path));
        }

        if mkdir {
            fs::create_dir_all(&path)?;
            return Ok(Some(path));
        }

        Ok(None)
    }

    /// Resolve a file path under the metadata directory, ensuring its
    /// parent directory exists when `mkdir` is set.
    pub fn state_file(&self, mkdir: bool, parts: &[&str]) -> Result<PathBuf> {
        match parts.split_last() {
            Some((_, dirs)) => {
                let _ = self.state_dir(mkdir, dirs)?;
                Ok(self.state_path(parts))
            }
            None => Err(Error::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no path components provided",
            ))),
        }
    }
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn meta_dir_is_empty(meta_dir: &Path) -> Result<bool> {
    if !meta_dir.exists() {
        return Ok(true);
    }
    if !meta_dir.is_dir() {
        return Err(Error::NotADirectory(meta_dir.to_path_buf()));
    }

    Ok(fs::read_dir(meta_dir)?.next().is_none())
}
