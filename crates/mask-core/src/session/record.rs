use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::flags::SessionFlag;
use super::value::FlagValue;
use crate::ending::{EndingId, FinalChoice};
use crate::path::PathId;

/// Flags set inside the Joy path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoyFlags {
    /// `joy_eg`
    pub easter_egg: bool,
    /// `joy_questioned`
    pub questioned: bool,
    /// `joy_removed`
    pub removed: bool,
    /// `joy_idle_eg`
    pub idle_easter_egg: bool,
    /// `joy_completed`
    pub completed: bool,
}

/// Flags set inside the Rage path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RageFlags {
    /// `rage_fought`
    pub fought: bool,
    /// `rage_refused`
    pub refused: bool,
    /// `rage_attacked`
    pub attacked: bool,
    /// `rage_hint`
    pub hint: bool,
    /// `rage_completed`
    pub completed: bool,
}

/// Flags set inside the Sorrow path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SorrowFlags {
    /// `sorrow_photo_seen`
    pub photo_seen: bool,
    /// `sorrow_closed_eyes`
    pub closed_eyes: bool,
    /// `sorrow_idle_eg`
    pub idle_easter_egg: bool,
    /// `sorrow_completed`
    pub completed: bool,
}

/// Flags set inside the Truth path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruthFlags {
    /// `truth_code_seen`
    pub code_seen: bool,
    /// `truth_name_checked`
    pub name_checked: bool,
    /// `truth_dev_room`
    pub dev_room: bool,
    /// `truth_idle_eg`
    pub idle_easter_egg: bool,
    /// `truth_completed`
    pub completed: bool,
}

/// Flags set inside the Silence path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilenceFlags {
    /// `silence_failed`
    pub failed: bool,
    /// `silence_idle_eg`
    pub idle_easter_egg: bool,
    /// `silence_completed`
    pub completed: bool,
}

/// Flags for the hidden Hunger path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HungerFlags {
    /// `hunger_unlocked`: Hunger is available in this run.
    pub unlocked: bool,
    /// `hunger_completed`
    pub completed: bool,
}

/// Working state of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionRecord {
    /// Joy path flags.
    pub joy: JoyFlags,
    /// Rage path flags.
    pub rage: RageFlags,
    /// Sorrow path flags.
    pub sorrow: SorrowFlags,
    /// Truth path flags.
    pub truth: TruthFlags,
    /// Silence path flags.
    pub silence: SilenceFlags,
    /// Hunger path flags.
    pub hunger: HungerFlags,
    /// The player's name was lost in Sorrow.
    pub name_lost: bool,
    /// The ending plays with glitch effects.
    pub ending_glitch: bool,
    /// Credits easter egg found.
    pub final_easter_egg: bool,
    /// The run was started with "replay with memory".
    pub replay_with_memory: bool,
    /// The opening narration has played this run.
    pub opening_seen: bool,
    /// Last non-Hunger path entered from the hub.
    pub last_mask_used: Option<PathId>,
    /// The decision taken at the Hunger confrontation.
    pub final_choice: Option<FinalChoice>,
    /// Ending recorded for this run.
    pub ending_id: Option<EndingId>,
    /// Set once by the commit; only a fresh record clears it.
    pub(crate) ending_committed: bool,
    /// Flags with names this version does not know.
    pub extra: BTreeMap<String, FlagValue>,
}

impl SessionRecord {
    /// A fresh record: every flag false, no mask, no choice, not committed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything and start over as a fresh record.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether this run already committed an ending.
    pub fn ending_committed(&self) -> bool {
        self.ending_committed
    }

    /// Whether a known flag is set.
    pub fn is_set(&self, flag: SessionFlag) -> bool {
        *self.slot(flag)
    }

    /// Set a known flag.
    pub fn set_flag(&mut self, flag: SessionFlag, value: bool) {
        let slot = self.slot_mut(flag);
        if *slot != value {
            debug!(flag = %flag, value, "flag set");
        }
        *slot = value;
    }

    /// Whether a path was completed during this run.
    pub fn completed(&self, path: PathId) -> bool {
        self.is_set(SessionFlag::completed(path))
    }

    /// Paths completed during this run, in hub order.
    pub fn completed_paths(&self) -> impl Iterator<Item = PathId> + '_ {
        PathId::all().iter().copied().filter(|p| self.completed(*p))
    }

    /// Record the path picked at the hub.
    ///
    /// Entering Hunger does not overwrite the last mask, which the resolver
    /// needs.
    pub fn select_path(&mut self, path: PathId) {
        if path.is_hidden() {
            debug!("entering hunger, keeping last mask {:?}", self.last_mask_used);
            return;
        }
        debug!(path = %path, "last mask set");
        self.last_mask_used = Some(path);
    }

    /// Record the final choice.
    pub fn choose(&mut self, choice: FinalChoice) {
        debug!(choice = %choice, "final choice set");
        self.final_choice = Some(choice);
    }

    /// Assign a flag by name.
    ///
    /// Known boolean flags, `last_mask`, `final_choice` and `ending` map onto
    /// typed fields. Any other name is kept in [`extra`](Self::extra).
    pub fn set(&mut self, name: &str, value: impl Into<FlagValue>) {
        let value = value.into();
        debug!(flag = name, value = %value, "set flag by name");

        match name {
            "last_mask" => self.set_last_mask_text(&value),
            "final_choice" => {
                self.final_choice = text_or_warn(name, &value).and_then(|s| {
                    let choice = FinalChoice::parse(s);
                    if choice.is_none() {
                        warn!(choice = s, "unrecognized final choice, clearing");
                    }
                    choice
                });
            }
            "ending" => {
                self.ending_id = text_or_warn(name, &value).and_then(|s| {
                    let ending = EndingId::parse(s);
                    if ending.is_none() {
                        warn!(ending = s, "unrecognized ending id, clearing");
                    }
                    ending
                });
            }
            "ending_committed" => {
                warn!("ending_committed is managed by the commit, ignoring");
            }
            _ => match SessionFlag::parse(name) {
                Some(flag) => match value.as_bool() {
                    Some(b) => self.set_flag(flag, b),
                    None => warn!(flag = name, value = %value, "text value for boolean flag, ignoring"),
                },
                None => {
                    debug!(flag = name, "storing unknown flag");
                    self.extra.insert(name.to_string(), value);
                }
            },
        }
    }

    /// Read a flag by name, as [`set`](Self::set) would have written it.
    pub fn get(&self, name: &str) -> Option<FlagValue> {
        match name {
            "last_mask" => Some(FlagValue::from(
                self.last_mask_used.map_or("none", |p| p.as_str()),
            )),
            "final_choice" => self.final_choice.map(|c| FlagValue::from(c.as_str())),
            "ending" => self.ending_id.map(|e| FlagValue::from(e.as_str())),
            "ending_committed" => Some(FlagValue::Bool(self.ending_committed)),
            _ => match SessionFlag::parse(name) {
                Some(flag) => Some(FlagValue::Bool(self.is_set(flag))),
                None => self.extra.get(name).cloned(),
            },
        }
    }

    fn set_last_mask_text(&mut self, value: &FlagValue) {
        let Some(text) = text_or_warn("last_mask", value) else {
            return;
        };
        if text == "none" {
            self.last_mask_used = None;
            return;
        }
        match PathId::parse(text) {
            Some(path) => self.select_path(path),
            None => {
                warn!(path = text, "unrecognized last mask, clearing");
                self.last_mask_used = None;
            }
        }
    }

    fn slot(&self, flag: SessionFlag) -> &bool {
        match flag {
            SessionFlag::JoyEasterEgg => &self.joy.easter_egg,
            SessionFlag::JoyQuestioned => &self.joy.questioned,
            SessionFlag::JoyRemoved => &self.joy.removed,
            SessionFlag::JoyIdleEasterEgg => &self.joy.idle_easter_egg,
            SessionFlag::JoyCompleted => &self.joy.completed,
            SessionFlag::RageFought => &self.rage.fought,
            SessionFlag::RageRefused => &self.rage.refused,
            SessionFlag::RageAttacked => &self.rage.attacked,
            SessionFlag::RageHint => &self.rage.hint,
            SessionFlag::RageCompleted => &self.rage.completed,
            SessionFlag::SorrowPhotoSeen => &self.sorrow.photo_seen,
            SessionFlag::SorrowClosedEyes => &self.sorrow.closed_eyes,
            SessionFlag::SorrowIdleEasterEgg => &self.sorrow.idle_easter_egg,
            SessionFlag::SorrowCompleted => &self.sorrow.completed,
            SessionFlag::TruthCodeSeen => &self.truth.code_seen,
            SessionFlag::TruthNameChecked => &self.truth.name_checked,
            SessionFlag::TruthDevRoom => &self.truth.dev_room,
            SessionFlag::TruthIdleEasterEgg => &self.truth.idle_easter_egg,
            SessionFlag::TruthCompleted => &self.truth.completed,
            SessionFlag::SilenceFailed => &self.silence.failed,
            SessionFlag::SilenceIdleEasterEgg => &self.silence.idle_easter_egg,
            SessionFlag::SilenceCompleted => &self.silence.completed,
            SessionFlag::HungerUnlocked => &self.hunger.unlocked,
            SessionFlag::HungerCompleted => &self.hunger.completed,
            SessionFlag::NameLost => &self.name_lost,
            SessionFlag::EndingGlitch => &self.ending_glitch,
            SessionFlag::FinalEasterEgg => &self.final_easter_egg,
            SessionFlag::ReplayWithMemory => &self.replay_with_memory,
            SessionFlag::OpeningSeen => &self.opening_seen,
        }
    }

    fn slot_mut(&mut self, flag: SessionFlag) -> &mut bool {
        match flag {
            SessionFlag::JoyEasterEgg => &mut self.joy.easter_egg,
            SessionFlag::JoyQuestioned => &mut self.joy.questioned,
            SessionFlag::JoyRemoved => &mut self.joy.removed,
            SessionFlag::JoyIdleEasterEgg => &mut self.joy.idle_easter_egg,
            SessionFlag::JoyCompleted => &mut self.joy.completed,
            SessionFlag::RageFought => &mut self.rage.fought,
            SessionFlag::RageRefused => &mut self.rage.refused,
            SessionFlag::RageAttacked => &mut self.rage.attacked,
            SessionFlag::RageHint => &mut self.rage.hint,
            SessionFlag::RageCompleted => &mut self.rage.completed,
            SessionFlag::SorrowPhotoSeen => &mut self.sorrow.photo_seen,
            SessionFlag::SorrowClosedEyes => &mut self.sorrow.closed_eyes,
            SessionFlag::SorrowIdleEasterEgg => &mut self.sorrow.idle_easter_egg,
            SessionFlag::SorrowCompleted => &mut self.sorrow.completed,
            SessionFlag::TruthCodeSeen => &mut self.truth.code_seen,
            SessionFlag::TruthNameChecked => &mut self.truth.name_checked,
            SessionFlag::TruthDevRoom => &mut self.truth.dev_room,
            SessionFlag::TruthIdleEasterEgg => &mut self.truth.idle_easter_egg,
            SessionFlag::TruthCompleted => &mut self.truth.completed,
            SessionFlag::SilenceFailed => &mut self.silence.failed,
            SessionFlag::SilenceIdleEasterEgg => &mut self.silence.idle_easter_egg,
            SessionFlag::SilenceCompleted => &mut self.silence.completed,
            SessionFlag::HungerUnlocked => &mut self.hunger.unlocked,
            SessionFlag::HungerCompleted => &mut self.hunger.completed,
            SessionFlag::NameLost => &mut self.name_lost,
            SessionFlag::EndingGlitch => &mut self.ending_glitch,
            SessionFlag::FinalEasterEgg => &mut self.final_easter_egg,
            SessionFlag::ReplayWithMemory => &mut self.replay_with_memory,
            SessionFlag::OpeningSeen => &mut self.opening_seen,
        }
    }
}

fn text_or_warn<'a>(name: &str, value: &'a FlagValue) -> Option<&'a str> {
    let text = value.as_text();
    if text.is_none() {
        warn!(flag = name, value = %value, "expected text value");
    }
    text
}
