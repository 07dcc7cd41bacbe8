use std::fmt;

use crate::path::PathId;

/// Every boolean flag the scenes are known to set.
///
/// Each variant has a canonical wire name (`joy_completed`, `rage_hint`, ...)
/// used by the name-based setter and in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionFlag {
    /// Found the Joy easter egg.
    JoyEasterEgg,
    /// Questioned the party in Joy.
    JoyQuestioned,
    /// Took the Joy mask off.
    JoyRemoved,
    /// Idle easter egg fired in Joy.
    JoyIdleEasterEgg,
    /// Finished the Joy path.
    JoyCompleted,
    /// Fought in the arena.
    RageFought,
    /// Refused to fight.
    RageRefused,
    /// Attacked the crowd.
    RageAttacked,
    /// Idle hint shown in Rage.
    RageHint,
    /// Finished the Rage path.
    RageCompleted,
    /// Looked at the photograph in Sorrow.
    SorrowPhotoSeen,
    /// Closed the eyes in Sorrow.
    SorrowClosedEyes,
    /// Idle easter egg fired in Sorrow.
    SorrowIdleEasterEgg,
    /// Finished the Sorrow path.
    SorrowCompleted,
    /// Saw the source code in Truth.
    TruthCodeSeen,
    /// Checked the player name in Truth.
    TruthNameChecked,
    /// Entered the developer room.
    TruthDevRoom,
    /// Idle easter egg fired in Truth.
    TruthIdleEasterEgg,
    /// Finished the Truth path.
    TruthCompleted,
    /// Broke the silence.
    SilenceFailed,
    /// Idle easter egg fired in Silence.
    SilenceIdleEasterEgg,
    /// Finished the Silence path.
    SilenceCompleted,
    /// Hunger is available in this run.
    HungerUnlocked,
    /// Reached the Hunger confrontation.
    HungerCompleted,
    /// The player's name was lost in Sorrow.
    NameLost,
    /// The ending plays with glitch effects.
    EndingGlitch,
    /// Found the credits easter egg.
    FinalEasterEgg,
    /// The run was started with "replay with memory".
    ReplayWithMemory,
    /// The opening narration has played this run.
    OpeningSeen,
}

impl SessionFlag {
    /// All known flags.
    pub fn all() -> &'static [Self] {
        use SessionFlag::*;
        &[
            JoyEasterEgg,
            JoyQuestioned,
            JoyRemoved,
            JoyIdleEasterEgg,
            JoyCompleted,
            RageFought,
            RageRefused,
            RageAttacked,
            RageHint,
            RageCompleted,
            SorrowPhotoSeen,
            SorrowClosedEyes,
            SorrowIdleEasterEgg,
            SorrowCompleted,
            TruthCodeSeen,
            TruthNameChecked,
            TruthDevRoom,
            TruthIdleEasterEgg,
            TruthCompleted,
            SilenceFailed,
            SilenceIdleEasterEgg,
            SilenceCompleted,
            HungerUnlocked,
            HungerCompleted,
            NameLost,
            EndingGlitch,
            FinalEasterEgg,
            ReplayWithMemory,
            OpeningSeen,
        ]
    }

    /// The `<path>_completed` flag for a path.
    pub fn completed(path: PathId) -> Self {
        match path {
            PathId::Joy => Self::JoyCompleted,
            PathId::Rage => Self::RageCompleted,
            PathId::Sorrow => Self::SorrowCompleted,
            PathId::Truth => Self::TruthCompleted,
            PathId::Silence => Self::SilenceCompleted,
            PathId::Hunger => Self::HungerCompleted,
        }
    }

    /// Look a flag up by its wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }

    /// Canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::JoyEasterEgg => "joy_eg",
            Self::JoyQuestioned => "joy_questioned",
            Self::JoyRemoved => "joy_removed",
            Self::JoyIdleEasterEgg => "joy_idle_eg",
            Self::JoyCompleted => "joy_completed",
            Self::RageFought => "rage_fought",
            Self::RageRefused => "rage_refused",
            Self::RageAttacked => "rage_attacked",
            Self::RageHint => "rage_hint",
            Self::RageCompleted => "rage_completed",
            Self::SorrowPhotoSeen => "sorrow_photo_seen",
            Self::SorrowClosedEyes => "sorrow_closed_eyes",
            Self::SorrowIdleEasterEgg => "sorrow_idle_eg",
            Self::SorrowCompleted => "sorrow_completed",
            Self::TruthCodeSeen => "truth_code_seen",
            Self::TruthNameChecked => "truth_name_checked",
            Self::TruthDevRoom => "truth_dev_room",
            Self::TruthIdleEasterEgg => "truth_idle_eg",
            Self::TruthCompleted => "truth_completed",
            Self::SilenceFailed => "silence_failed",
            Self::SilenceIdleEasterEgg => "silence_idle_eg",
            Self::SilenceCompleted => "silence_completed",
            Self::HungerUnlocked => "hunger_unlocked",
            Self::HungerCompleted => "hunger_completed",
            Self::NameLost => "name_lost",
            Self::EndingGlitch => "ending_glitch",
            Self::FinalEasterEgg => "final_eg",
            Self::ReplayWithMemory => "replay_memory",
            Self::OpeningSeen => "opening_seen",
        }
    }
}

impl fmt::Display for SessionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
