//! Persistence sinks for encoded identicons.
//!
//! A sink receives a file name and the encoded bytes and stores them
//! somewhere. [`FileSink`] writes to a directory with a single blocking
//! write; [`MemorySink`] keeps everything in memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::info;

/// Errors that can occur while persisting encoded bytes.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Writing the file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Target path of the failed write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Destination for encoded image bytes.
pub trait ImageSink {
    /// Store `bytes` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the bytes could not be stored. No retry
    /// or cleanup of partial output is attempted.
    fn persist(&mut self, name: &str, bytes: &[u8]) -> Result<(), SinkError>;
}

/// Writes each image to `<dir>/<name>`.
///
/// The name is joined onto the directory as-is; it is not sanitized,
/// so separators in the name create (or require) sub-directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`. The directory must exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path an image with `name` is written to.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl Default for FileSink {
    /// Writes into the current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ImageSink for FileSink {
    fn persist(&mut self, name: &str, bytes: &[u8]) -> Result<(), SinkError> {
        let path = self.path_for(name);
        std::fs::write(&path, bytes).map_err(|source| SinkError::Io {
            path: path.clone(),
            source,
        })?;
        info!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Keeps persisted images in memory, keyed by name.
///
/// Persisting the same name twice replaces the earlier bytes.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Number of stored images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over stored names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl ImageSink for MemorySink {
    fn persist(&mut self, name: &str, bytes: &[u8]) -> Result<(), SinkError> {
        self.files.insert(name.to_owned(), bytes.to_vec());
        Ok(())
    }
}
