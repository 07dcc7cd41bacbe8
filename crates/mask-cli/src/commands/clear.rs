use std::path::Path;

use colored::Colorize;
use mask_core::{EngineConfig, FileBackend, PersistentRecord, PersistentStore};

pub fn run(dir: &Path, key: &str) -> Result<(), String> {
    let config = EngineConfig::default().with_storage_key(key);
    let mut store = PersistentStore::new(FileBackend::new(dir, &config.storage_key));
    store
        .save(&PersistentRecord::default())
        .map_err(|e| format!("failed to clear save: {e}"))?;

    println!(
        "  {} {}",
        "Cleared".green().bold(),
        store.backend().path().display()
    );
    Ok(())
}
