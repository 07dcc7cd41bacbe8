//! Load and save of the persistent record over a [`SaveBackend`].

use tracing::{debug, warn};

use super::backend::SaveBackend;
use super::record::PersistentRecord;
use crate::error::MaskResult;

/// Reads and writes the [`PersistentRecord`] through a backend.
#[derive(Debug)]
pub struct PersistentStore<B> {
    backend: B,
}

impl<B: SaveBackend> PersistentStore<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the record, falling back to defaults on any problem.
    ///
    /// A save written by an older version is merged field by field over the
    /// defaults. Unreadable or unparseable data is logged and discarded.
    pub fn load(&self) -> PersistentRecord {
        let text = match self.backend.read() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(backend = %self.backend.describe(), "no save found, starting fresh profile");
                return PersistentRecord::default();
            }
            Err(e) => {
                warn!(backend = %self.backend.describe(), error = %e, "failed to read save, using defaults");
                return PersistentRecord::default();
            }
        };

        match PersistentRecord::from_json(&text) {
            Ok(record) => {
                debug!(play_count = record.play_count, "loaded save");
                record
            }
            Err(e) => {
                warn!(backend = %self.backend.describe(), error = %e, "failed to parse save, using defaults");
                PersistentRecord::default()
            }
        }
    }

    /// Serialize and write the record.
    pub fn save(&mut self, record: &PersistentRecord) -> MaskResult<()> {
        let json = record.to_json()?;
        self.backend.write(&json)
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwrap the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }
}
