//! Narrative state engine for mask.exe.
//!
//! Holds the durable profile record and the per-run session flags, evaluates
//! mask-unlock conditions, resolves the terminal choice into an ending, and
//! commits each run exactly once. Presentation code (scenes, tweens, audio)
//! lives elsewhere and talks to this crate through [`RunController`].

/// Engine configuration.
pub mod config;
/// Ending identifiers and the terminal-choice resolver.
pub mod ending;
/// Error types used throughout the crate.
pub mod error;
/// Story path identifiers.
pub mod path;
/// Durable profile record and storage backends.
pub mod persist;
/// Run lifecycle: commit-once, reset, and persistence of session results.
pub mod run;
/// Ephemeral per-run session flags.
pub mod session;
/// Derived unlock conditions.
pub mod unlock;

pub use config::EngineConfig;
pub use ending::{EndingId, FinalChoice, resolve};
pub use error::{MaskError, MaskResult};
pub use path::PathId;
pub use persist::{FileBackend, MemoryBackend, PersistentRecord, PersistentStore, SaveBackend};
pub use run::{CommitReceipt, RunController};
pub use session::{FlagValue, SessionFlag, SessionRecord};
pub use unlock::{HiddenPathGate, OpeningVariant, UnlockEvaluator};
