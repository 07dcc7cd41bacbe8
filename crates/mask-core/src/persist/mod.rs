//! Durable profile record and the storage it lives in.
//!
//! The record is loaded once per process, merged over defaults, and written
//! back after every mutation. Read problems never escape [`PersistentStore`]:
//! a missing or corrupt save simply yields a fresh profile.

mod backend;
mod record;
mod store;

pub use backend::{FileBackend, MemoryBackend, SaveBackend};
pub use record::{CompletedPaths, PersistentRecord};
pub use store::PersistentStore;
