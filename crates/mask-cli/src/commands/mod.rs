pub mod clear;
pub mod commit;
pub mod endings;
pub mod resolve;
pub mod show;

use std::path::Path;

use mask_core::{
    EngineConfig, FileBackend, MaskError, PathId, PersistentRecord, RunController, SaveBackend,
};

/// Open the profile stored under `dir` with the given storage key.
fn open(dir: &Path, key: &str) -> RunController<FileBackend> {
    let config = EngineConfig::default().with_storage_key(key);
    let backend = FileBackend::new(dir, &config.storage_key);
    RunController::open(backend, config)
}

/// Why the stored save cannot be loaded, if one exists and is unusable.
fn save_problem(backend: &FileBackend) -> Option<String> {
    match backend.read() {
        Ok(None) => None,
        Ok(Some(text)) => PersistentRecord::from_json(&text).err().map(|e| e.to_string()),
        Err(e) => Some(e.to_string()),
    }
}

fn parse_path(name: &str) -> Result<PathId, String> {
    PathId::parse(name).ok_or_else(|| MaskError::UnknownPath(name.to_string()).to_string())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
