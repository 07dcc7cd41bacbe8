//! Storage backends for the persistent record.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{MaskError, MaskResult};

/// Somewhere a single serialized record can be read from and written to.
pub trait SaveBackend {
    /// Read the stored record, or `None` if nothing has been saved yet.
    fn read(&self) -> MaskResult<Option<String>>;

    /// Replace the stored record.
    fn write(&mut self, contents: &str) -> MaskResult<()>;

    /// Short description for log output.
    fn describe(&self) -> String;
}

/// Stores the record as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Back the record with `<dir>/<key>.json`.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::at(dir.as_ref().join(format!("{key}.json")))
    }

    /// Back the record with an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file holding the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl SaveBackend for FileBackend {
    fn read(&self) -> MaskResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> MaskResult<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        // Temp file in the same directory so the final rename stays atomic.
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.as_file_mut().write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| MaskError::Io(e.error))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the record in memory. Used for tests and ephemeral profiles.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBackend {
    /// An empty backend, as if the game had never been played.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with saved contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The last successfully written contents.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SaveBackend for MemoryBackend {
    fn read(&self) -> MaskResult<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> MaskResult<()> {
        if self.fail_writes {
            return Err(MaskError::WriteRejected);
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
