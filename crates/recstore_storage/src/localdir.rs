//! Local directory destination for persistent storage.

use crate::destination::{Destination, EntryIter};
use crate::error::{DestinationError, DestinationResult};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A destination that keeps one file per record in a local directory.
///
/// The record identifier is the file name; the serialized data is the
/// file content, written whole on every store. Data survives process
/// restarts.
///
/// # Concurrency
///
/// No locks are taken. Two stores pointed at the same directory see
/// each other's entries, and concurrent writers race at the filesystem
/// level; last write wins.
///
/// # Example
///
/// ```no_run
/// use recstore_storage::{Destination, LocalDirDestination};
///
/// let dest = LocalDirDestination::new("./records");
/// dest.init().unwrap();
/// dest.store("alpha", "{\"name\":\"Ada\"}").unwrap();
/// assert_eq!(dest.retrieve("alpha").unwrap(), "{\"name\":\"Ada\"}");
/// ```
#[derive(Debug)]
pub struct LocalDirDestination {
    root: PathBuf,
}

impl LocalDirDestination {
    /// Registry name of this destination.
    pub const NAME: &'static str = "localdir";

    /// Configuration template: parameter names paired with example
    /// values.
    pub const CONF: &'static [(&'static str, &'static str)] = &[("path", "./records")];

    /// Create a destination rooted at `path`.
    ///
    /// The directory is not touched until [`Destination::init`] runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    /// Create a destination from a configuration parameter map.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError::MissingParameter`] if `path` is
    /// absent.
    pub fn from_conf(conf: &BTreeMap<String, String>) -> DestinationResult<Self> {
        let path = conf.get("path").ok_or_else(|| DestinationError::MissingParameter {
            key: "path".to_string(),
        })?;
        Ok(Self::new(path))
    }

    /// Returns the directory this destination stores entries in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, identifier: &str) -> PathBuf {
        self.root.join(identifier)
    }
}

impl Destination for LocalDirDestination {
    fn init(&self) -> DestinationResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|err| DestinationError::Setup {
                message: format!("cannot create directory {}: {err}", self.root.display()),
            })?;
        } else if !self.root.is_dir() {
            return Err(DestinationError::Setup {
                message: format!("{} exists but is not a directory", self.root.display()),
            });
        }

        // Prove the directory is readable.
        fs::read_dir(&self.root).map_err(|err| DestinationError::Setup {
            message: format!("directory {} is not readable: {err}", self.root.display()),
        })?;

        // Coarse writability check; a failure the mode bits don't show
        // still surfaces later as a write error.
        let metadata = fs::metadata(&self.root).map_err(|err| DestinationError::Setup {
            message: format!("cannot inspect directory {}: {err}", self.root.display()),
        })?;
        if metadata.permissions().readonly() {
            return Err(DestinationError::Setup {
                message: format!("directory {} is not writable", self.root.display()),
            });
        }

        Ok(())
    }

    fn store(&self, identifier: &str, data: &str) -> DestinationResult<()> {
        let path = self.entry_path(identifier);
        fs::write(&path, data).map_err(|err| DestinationError::Write {
            context: path.display().to_string(),
            source: err,
        })
    }

    fn retrieve(&self, identifier: &str) -> DestinationResult<String> {
        let path = self.entry_path(identifier);
        fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DestinationError::NotFound {
                identifier: identifier.to_string(),
            },
            _ => DestinationError::Read {
                context: path.display().to_string(),
                source: err,
            },
        })
    }

    fn delete(&self, identifier: &str) -> DestinationResult<()> {
        let path = self.entry_path(identifier);
        fs::remove_file(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DestinationError::NotFound {
                identifier: identifier.to_string(),
            },
            _ => DestinationError::Write {
                context: path.display().to_string(),
                source: err,
            },
        })
    }

    fn exists(&self, identifier: &str) -> DestinationResult<bool> {
        let path = self.entry_path(identifier);
        path.try_exists().map_err(|err| DestinationError::Read {
            context: path.display().to_string(),
            source: err,
        })
    }

    fn retrieve_all(&self) -> DestinationResult<EntryIter<'_>> {
        let entries = fs::read_dir(&self.root).map_err(|err| DestinationError::Read {
            context: self.root.display().to_string(),
            source: err,
        })?;

        let root = self.root.clone();
        let iter = entries.map(move |entry| {
            let entry = entry.map_err(|err| DestinationError::Read {
                context: root.display().to_string(),
                source: err,
            })?;
            let identifier =
                entry
                    .file_name()
                    .into_string()
                    .map_err(|name| DestinationError::Read {
                        context: root.display().to_string(),
                        source: io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("file name is not valid UTF-8: {name:?}"),
                        ),
                    })?;
            // Reading a subdirectory fails here, which fails the
            // enumeration for the caller.
            let data =
                fs::read_to_string(entry.path()).map_err(|err| DestinationError::Read {
                    context: entry.path().display().to_string(),
                    source: err,
                })?;
            Ok((identifier, data))
        });

        Ok(Box::new(iter))
    }
}
