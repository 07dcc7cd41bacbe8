//! Run lifecycle: commit-once, reset, and persistence of session results.
//!
//! `RunController` owns the profile record, the current session, and the
//! storage backend. Presentation code calls its methods from event handlers;
//! each mutation runs to completion and flushes the profile immediately, so
//! closing the game at any point loses at most the in-flight event.
//!
//! A run is either active or committed. Only [`RunController::reset_run`]
//! starts a new active run.

use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::ending::{EndingId, FinalChoice, resolve};
use crate::error::{MaskError, MaskResult};
use crate::path::PathId;
use crate::persist::{PersistentRecord, PersistentStore, SaveBackend};
use crate::session::{FlagValue, SessionFlag, SessionRecord};
use crate::unlock::{HiddenPathGate, OpeningVariant, UnlockEvaluator};

/// What a successful commit changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// The committed ending.
    pub ending: EndingId,
    /// Play count after the commit.
    pub play_count: u32,
    /// Paths completed for the first time on this profile.
    pub newly_completed: Vec<PathId>,
    /// Whether the profile reached durable storage.
    pub persisted: bool,
}

/// Owns the profile and the current run.
#[derive(Debug)]
pub struct RunController<B> {
    store: PersistentStore<B>,
    persistent: PersistentRecord,
    session: SessionRecord,
    config: EngineConfig,
}

impl<B: SaveBackend> RunController<B> {
    /// Load the profile from `backend` and start a fresh run.
    pub fn open(backend: B, config: EngineConfig) -> Self {
        let store = PersistentStore::new(backend);
        let persistent = store.load();
        debug!(
            play_count = persistent.play_count,
            returning = persistent.has_played_before,
            "run controller opened"
        );
        Self {
            store,
            persistent,
            session: SessionRecord::new(),
            config,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current run's session record.
    pub fn session(&self) -> &SessionRecord {
        &self.session
    }

    /// The in-memory profile record.
    pub fn persistent(&self) -> &PersistentRecord {
        &self.persistent
    }

    /// The storage backend.
    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    /// Mutable access to the storage backend.
    pub fn backend_mut(&mut self) -> &mut B {
        self.store.backend_mut()
    }

    /// Shut down and hand back the storage backend.
    pub fn into_backend(self) -> B {
        self.store.into_inner()
    }

    /// Unlock queries over the current state.
    pub fn evaluator(&self) -> UnlockEvaluator<'_> {
        UnlockEvaluator::new(&self.session, &self.persistent)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether any run has been committed on this profile.
    pub fn is_returning_player(&self) -> bool {
        self.persistent.has_played_before
    }

    /// Number of committed runs.
    pub fn play_count(&self) -> u32 {
        self.persistent.play_count
    }

    /// Whether a path was completed on an earlier run.
    pub fn was_path_used_before(&self, path: PathId) -> bool {
        self.evaluator().was_path_used_before(path)
    }

    /// See [`UnlockEvaluator::should_unlock_hidden_path`].
    pub fn should_unlock_hidden_path(&self) -> bool {
        self.evaluator().should_unlock_hidden_path()
    }

    /// See [`UnlockEvaluator::can_offer_mercy_choice`].
    pub fn can_offer_mercy_choice(&self) -> bool {
        self.evaluator().can_offer_mercy_choice()
    }

    /// Whether the early script break ever happened on this profile.
    pub fn is_script_deleted(&self) -> bool {
        self.persistent.script_deleted_once
    }

    /// Whether an ending is one of the script-break branches.
    pub fn is_script_break_ending(&self, ending: EndingId) -> bool {
        ending.is_script_break()
    }

    /// Whether the credits should loop straight back into a new run.
    pub fn should_auto_loop(&self, ending: EndingId) -> bool {
        ending.is_script_break() && self.persistent.play_count >= self.config.auto_loop_after
    }

    /// See [`UnlockEvaluator::hidden_path_gate`].
    pub fn hidden_path_gate(&self) -> HiddenPathGate {
        self.evaluator().hidden_path_gate()
    }

    /// Opening narration for this profile.
    pub fn opening_variant(&self) -> OpeningVariant {
        self.evaluator().opening_variant(self.config.veteran_after)
    }

    /// Terminal options to offer, in display order.
    pub fn final_choices(&self) -> Vec<FinalChoice> {
        self.evaluator().final_choices()
    }

    /// Resolve the ending from the current final choice and last mask.
    pub fn resolve_ending(&self) -> EndingId {
        resolve(self.session.final_choice, self.session.last_mask_used)
    }

    // -----------------------------------------------------------------------
    // Session mutations
    // -----------------------------------------------------------------------

    /// Assign a session flag by name. See [`SessionRecord::set`].
    pub fn set(&mut self, name: &str, value: impl Into<FlagValue>) {
        self.session.set(name, value);
    }

    /// Assign a known session flag.
    pub fn set_flag(&mut self, flag: SessionFlag, value: bool) {
        self.session.set_flag(flag, value);
    }

    /// Record the path picked at the hub.
    pub fn select_path(&mut self, path: PathId) {
        self.session.select_path(path);
    }

    /// Record the final choice.
    pub fn choose(&mut self, choice: FinalChoice) {
        self.session.choose(choice);
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Commit the run's ending.
    ///
    /// Succeeds once per run. A second call is refused with
    /// [`MaskError::AlreadyCommitted`] and changes nothing. A storage failure
    /// does not fail the commit; it is reported through
    /// [`CommitReceipt::persisted`].
    pub fn commit_ending(&mut self, ending: EndingId) -> MaskResult<CommitReceipt> {
        if self.session.ending_committed {
            let first = self.session.ending_id.unwrap_or(ending);
            warn!(ending = %ending, committed = %first, "commit blocked: ending already committed");
            return Err(MaskError::AlreadyCommitted { ending: first });
        }

        info!(ending = %ending, "committing ending");
        self.session.ending_id = Some(ending);
        self.session.ending_committed = true;

        self.persistent.last_ending_id = Some(ending);
        if ending == EndingId::ScriptBreakEarly {
            self.persistent.script_deleted_once = true;
            info!("script deleted, stage enters improvisation mode");
        }
        let newly_completed = self
            .persistent
            .fold_completed(self.session.completed_paths());
        self.persistent.play_count = self.persistent.play_count.saturating_add(1);
        self.persistent.has_played_before = true;

        let persisted = self.flush();
        info!(play_count = self.persistent.play_count, persisted, "ending committed");

        Ok(CommitReceipt {
            ending,
            play_count: self.persistent.play_count,
            newly_completed,
            persisted,
        })
    }

    /// Start a new run.
    ///
    /// With `keep_memory`, the profile's Hunger unlock carries into the new
    /// session and the run is marked as a replay with memory.
    pub fn reset_run(&mut self, keep_memory: bool) {
        self.session.reset();
        if keep_memory {
            self.session.hunger.unlocked = self.persistent.hunger_unlocked;
            self.session.replay_with_memory = true;
        }
        info!(keep_memory, "run state reset");
    }

    /// Record the Hunger unlock on the profile.
    ///
    /// Returns true if this call granted it for the first time.
    pub fn unlock_hidden_path(&mut self) -> bool {
        self.session.hunger.unlocked = true;
        if self.persistent.hunger_unlocked {
            return false;
        }
        self.persistent.hunger_unlocked = true;
        self.flush();
        info!("hunger mask unlocked");
        true
    }

    /// Evaluate the hub gate and persist the unlock the first time it opens.
    pub fn reveal_hidden_path(&mut self) -> HiddenPathGate {
        let gate = self.hidden_path_gate();
        if gate.is_open() && !self.persistent.hunger_unlocked {
            self.unlock_hidden_path();
        }
        gate
    }

    /// Fold this run's completed paths into the profile without committing.
    ///
    /// Called when a path scene finishes so progress survives a closed
    /// window. Returns the paths completed for the first time.
    pub fn sync_completed_paths(&mut self) -> Vec<PathId> {
        let newly = self
            .persistent
            .fold_completed(self.session.completed_paths());
        self.flush();
        newly
    }

    /// Finish the run without recording an ending.
    ///
    /// Syncs completed paths, then counts the run once. Returns false if the
    /// run was already committed.
    pub fn mark_game_completed(&mut self) -> bool {
        self.sync_completed_paths();
        if self.session.ending_committed {
            warn!("play count increment blocked: ending already committed");
            return false;
        }
        self.session.ending_committed = true;
        self.persistent.play_count = self.persistent.play_count.saturating_add(1);
        self.persistent.has_played_before = true;
        self.flush();
        info!(play_count = self.persistent.play_count, "play count incremented");
        true
    }

    /// Reset the profile to defaults. Debug tooling only.
    pub fn clear_persistent_data(&mut self) {
        self.persistent = PersistentRecord::default();
        self.flush();
        info!("persistent data cleared");
    }

    fn flush(&mut self) -> bool {
        match self.store.save(&self.persistent) {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    backend = %self.store.backend().describe(),
                    error = %e,
                    "failed to save profile, continuing in memory"
                );
                false
            }
        }
    }
}
