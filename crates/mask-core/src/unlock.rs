//! Derived unlock conditions.
//!
//! Everything here is a pure function of the current session and the
//! persistent profile. The evaluator borrows both and never mutates.

use crate::ending::FinalChoice;
use crate::path::PathId;
use crate::persist::PersistentRecord;
use crate::session::SessionRecord;

/// How the hub should present the Hunger mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenPathGate {
    /// The mask is revealed and selectable.
    Open,
    /// The unlock rule passes but neither Joy was removed nor the name lost.
    MissingSecondary,
    /// Truth or Silence has not been completed this run.
    SeekTruthAndSilence,
    /// Some other requirement is missing.
    NotYet,
}

impl HiddenPathGate {
    /// Whether the mask can be selected.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// The hint shown under a locked mask.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Open => None,
            Self::MissingSecondary => Some("Something is still missing."),
            Self::SeekTruthAndSilence => Some("Seek truth. Embrace silence."),
            Self::NotYet => Some("Not yet."),
        }
    }
}

/// Which opening narration to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningVariant {
    /// First time on the stage.
    FirstRun,
    /// Has finished at least one run.
    Returning,
    /// Has replayed often enough for the final meta message.
    Veteran,
    /// The early script break happened; the stage improvises.
    ScriptDeleted,
}

/// Read-only view over the session and profile that answers unlock queries.
#[derive(Debug, Clone, Copy)]
pub struct UnlockEvaluator<'a> {
    session: &'a SessionRecord,
    persistent: &'a PersistentRecord,
}

impl<'a> UnlockEvaluator<'a> {
    /// Borrow the two records.
    pub fn new(session: &'a SessionRecord, persistent: &'a PersistentRecord) -> Self {
        Self {
            session,
            persistent,
        }
    }

    /// Whether the path was completed on an earlier run.
    pub fn was_path_used_before(&self, path: PathId) -> bool {
        self.persistent.was_used(path)
    }

    /// Truth + Silence + at least two of Joy, Rage, Sorrow.
    ///
    /// Once the profile has the unlock, this stays true whatever the session
    /// holds.
    pub fn should_unlock_hidden_path(&self) -> bool {
        if self.persistent.hunger_unlocked {
            return true;
        }
        if !self.truth_and_silence() {
            return false;
        }
        let lesser = PathId::lesser()
            .iter()
            .filter(|p| self.session.completed(**p))
            .count();
        lesser >= 2
    }

    /// Whether "give the mask away" is offered.
    ///
    /// Needs only Truth and Silence, independent of the hidden-path rule.
    pub fn can_offer_mercy_choice(&self) -> bool {
        self.truth_and_silence()
    }

    /// The hub's reveal decision for the Hunger mask.
    pub fn hidden_path_gate(&self) -> HiddenPathGate {
        let rule = self.should_unlock_hidden_path();
        let secondary = self.session.joy.removed || self.session.name_lost;

        if rule && secondary {
            HiddenPathGate::Open
        } else if rule {
            HiddenPathGate::MissingSecondary
        } else if !self.truth_and_silence() {
            HiddenPathGate::SeekTruthAndSilence
        } else {
            HiddenPathGate::NotYet
        }
    }

    /// Terminal options in display order.
    pub fn final_choices(&self) -> Vec<FinalChoice> {
        let mut choices = vec![FinalChoice::Wear, FinalChoice::Destroy];
        if self.can_offer_mercy_choice() {
            choices.push(FinalChoice::Give);
        }
        choices
    }

    /// Opening narration for this profile.
    pub fn opening_variant(&self, veteran_after: u32) -> OpeningVariant {
        if self.persistent.script_deleted_once {
            OpeningVariant::ScriptDeleted
        } else if self.persistent.play_count >= veteran_after {
            OpeningVariant::Veteran
        } else if self.persistent.has_played_before {
            OpeningVariant::Returning
        } else {
            OpeningVariant::FirstRun
        }
    }

    fn truth_and_silence(&self) -> bool {
        self.session.truth.completed && self.session.silence.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionFlag;

    fn session_with(paths: &[PathId]) -> SessionRecord {
        let mut session = SessionRecord::new();
        for path in paths {
            session.set_flag(SessionFlag::completed(*path), true);
        }
        session
    }

    #[test]
    fn hidden_path_needs_truth_silence_and_two_lesser() {
        let persistent = PersistentRecord::default();

        let s = session_with(&[PathId::Truth, PathId::Silence, PathId::Joy, PathId::Rage]);
        assert!(UnlockEvaluator::new(&s, &persistent).should_unlock_hidden_path());

        let s = session_with(&[PathId::Truth, PathId::Silence, PathId::Sorrow]);
        assert!(!UnlockEvaluator::new(&s, &persistent).should_unlock_hidden_path());

        let s = session_with(&[PathId::Truth, PathId::Joy, PathId::Rage, PathId::Sorrow]);
        assert!(!UnlockEvaluator::new(&s, &persistent).should_unlock_hidden_path());
    }

    #[test]
    fn persistent_unlock_short_circuits() {
        let persistent = PersistentRecord {
            hunger_unlocked: true,
            ..Default::default()
        };
        let blank = SessionRecord::new();
        assert!(UnlockEvaluator::new(&blank, &persistent).should_unlock_hidden_path());
    }

    #[test]
    fn mercy_choice_is_independent_of_lesser_paths() {
        let persistent = PersistentRecord::default();
        let s = session_with(&[PathId::Truth, PathId::Silence]);
        let eval = UnlockEvaluator::new(&s, &persistent);
        assert!(eval.can_offer_mercy_choice());
        assert!(!eval.should_unlock_hidden_path());

        let s = session_with(&[PathId::Truth, PathId::Joy, PathId::Rage, PathId::Sorrow]);
        assert!(!UnlockEvaluator::new(&s, &persistent).can_offer_mercy_choice());
    }

    #[test]
    fn final_choices_include_give_only_with_mercy() {
        let persistent = PersistentRecord::default();
        let s = session_with(&[PathId::Joy]);
        assert_eq!(
            UnlockEvaluator::new(&s, &persistent).final_choices(),
            vec![FinalChoice::Wear, FinalChoice::Destroy]
        );
        let s = session_with(&[PathId::Truth, PathId::Silence]);
        assert_eq!(
            UnlockEvaluator::new(&s, &persistent).final_choices(),
            vec![FinalChoice::Wear, FinalChoice::Destroy, FinalChoice::Give]
        );
    }

    #[test]
    fn used_before_reads_profile() {
        let mut persistent = PersistentRecord::default();
        persistent.fold_completed([PathId::Rage]);
        let s = SessionRecord::new();
        let eval = UnlockEvaluator::new(&s, &persistent);
        assert!(eval.was_path_used_before(PathId::Rage));
        assert!(!eval.was_path_used_before(PathId::Joy));
    }

    #[test]
    fn gate_hints() {
        let persistent = PersistentRecord::default();

        let s = session_with(&[PathId::Joy]);
        let gate = UnlockEvaluator::new(&s, &persistent).hidden_path_gate();
        assert_eq!(gate, HiddenPathGate::SeekTruthAndSilence);
        assert_eq!(gate.hint(), Some("Seek truth. Embrace silence."));

        let s = session_with(&[PathId::Truth, PathId::Silence, PathId::Joy]);
        let gate = UnlockEvaluator::new(&s, &persistent).hidden_path_gate();
        assert_eq!(gate, HiddenPathGate::NotYet);
        assert_eq!(gate.hint(), Some("Not yet."));

        let mut s = session_with(&[PathId::Truth, PathId::Silence, PathId::Joy, PathId::Sorrow]);
        let gate = UnlockEvaluator::new(&s, &persistent).hidden_path_gate();
        assert_eq!(gate, HiddenPathGate::MissingSecondary);
        assert_eq!(gate.hint(), Some("Something is still missing."));

        s.set_flag(SessionFlag::NameLost, true);
        let gate = UnlockEvaluator::new(&s, &persistent).hidden_path_gate();
        assert!(gate.is_open());
        assert_eq!(gate.hint(), None);
    }

    #[test]
    fn persistent_unlock_still_needs_secondary_at_hub() {
        let persistent = PersistentRecord {
            hunger_unlocked: true,
            ..Default::default()
        };
        let mut s = SessionRecord::new();
        assert_eq!(
            UnlockEvaluator::new(&s, &persistent).hidden_path_gate(),
            HiddenPathGate::MissingSecondary
        );
        s.set_flag(SessionFlag::JoyRemoved, true);
        assert!(UnlockEvaluator::new(&s, &persistent).hidden_path_gate().is_open());
    }

    #[test]
    fn opening_variants() {
        let s = SessionRecord::new();
        let mut persistent = PersistentRecord::default();
        let variant = |p: &PersistentRecord| UnlockEvaluator::new(&s, p).opening_variant(3);

        assert_eq!(variant(&persistent), OpeningVariant::FirstRun);

        persistent.has_played_before = true;
        persistent.play_count = 1;
        assert_eq!(variant(&persistent), OpeningVariant::Returning);

        persistent.play_count = 3;
        assert_eq!(variant(&persistent), OpeningVariant::Veteran);

        persistent.script_deleted_once = true;
        assert_eq!(variant(&persistent), OpeningVariant::ScriptDeleted);
    }
}
