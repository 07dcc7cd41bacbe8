//! Configuration for the state engine.

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "maskexe_save";

/// Configuration for a [`RunController`](crate::RunController).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Name of the durable record (file stem for the file backend).
    pub storage_key: String,
    /// Play count at which script-break endings start auto-looping.
    pub auto_loop_after: u32,
    /// Play count at which the opening switches to the veteran narration.
    pub veteran_after: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            auto_loop_after: 2,
            veteran_after: 3,
        }
    }
}

impl EngineConfig {
    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the auto-loop threshold (minimum 1).
    pub fn with_auto_loop_after(mut self, plays: u32) -> Self {
        self.auto_loop_after = plays.max(1);
        self
    }

    /// Set the veteran-opening threshold (minimum 1).
    pub fn with_veteran_after(mut self, plays: u32) -> Self {
        self.veteran_after = plays.max(1);
        self
    }
}
