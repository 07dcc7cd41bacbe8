//! Ending identifiers and the terminal-choice resolver.
//!
//! The resolver table is deliberately asymmetric: wearing the Hunger mask only
//! specializes for Joy and Rage, destroying it only for Truth and Sorrow.
//! Every other combination falls through to the generic ending of that choice.

use std::fmt;

use serde::Serialize;

use crate::path::PathId;

/// Identifier of a committed ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EndingId {
    /// Eternal Smile: wear after Joy.
    #[serde(rename = "A1")]
    A1,
    /// Arena Loop: wear after Rage.
    #[serde(rename = "A2")]
    A2,
    /// Wear after any other path.
    #[serde(rename = "A_generic")]
    AGeneric,
    /// Forgotten Name: destroy after Sorrow.
    #[serde(rename = "B1")]
    B1,
    /// Script Breaker: destroy after Truth.
    #[serde(rename = "B2")]
    B2,
    /// Destroy after any other path.
    #[serde(rename = "B_generic")]
    BGeneric,
    /// True Release: give the mask away.
    #[serde(rename = "C")]
    C,
    /// Early script break, triggered inside the Truth path.
    #[serde(rename = "T0_SCRIPT_BREAK_EARLY")]
    ScriptBreakEarly,
}

impl EndingId {
    /// All endings, in credits order.
    pub fn all() -> &'static [Self] {
        &[
            Self::A1,
            Self::A2,
            Self::AGeneric,
            Self::B1,
            Self::B2,
            Self::BGeneric,
            Self::C,
            Self::ScriptBreakEarly,
        ]
    }

    /// Parse the wire identifier (`"A1"`, `"A_generic"`, ...).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.as_str() == s.trim())
    }

    /// The wire identifier stored in saves.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::AGeneric => "A_generic",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::BGeneric => "B_generic",
            Self::C => "C",
            Self::ScriptBreakEarly => "T0_SCRIPT_BREAK_EARLY",
        }
    }

    /// Human-readable title shown in the credits.
    pub fn title(&self) -> &'static str {
        match self {
            Self::A1 => "Eternal Smile",
            Self::A2 => "Arena Loop",
            Self::AGeneric => "Stay Masked",
            Self::B1 => "Forgotten Name",
            Self::B2 => "Script Breaker",
            Self::BGeneric => "Unmasked",
            Self::C => "True Release",
            Self::ScriptBreakEarly => "Early Script Break",
        }
    }

    /// Whether the ending is one of the "the game breaks" branches.
    ///
    /// Both share follow-on behavior in the credits (auto-loop).
    pub fn is_script_break(&self) -> bool {
        matches!(self, Self::ScriptBreakEarly | Self::B2)
    }
}

impl fmt::Display for EndingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The player's decision when confronted with the Hunger mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalChoice {
    /// Put the mask on.
    Wear,
    /// Break the mask.
    Destroy,
    /// Give the mask away (the mercy choice).
    Give,
}

impl FinalChoice {
    /// Parse `wear`, `destroy` or `give`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "wear" => Some(Self::Wear),
            "destroy" => Some(Self::Destroy),
            "give" => Some(Self::Give),
            _ => None,
        }
    }

    /// Wire name of the choice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wear => "wear",
            Self::Destroy => "destroy",
            Self::Give => "give",
        }
    }
}

impl fmt::Display for FinalChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map the final choice and the last mask worn to an ending.
///
/// A missing choice cannot happen through the hub flow; it resolves to
/// [`EndingId::AGeneric`] and is logged so the narrative still terminates.
pub fn resolve(choice: Option<FinalChoice>, last_mask: Option<PathId>) -> EndingId {
    match (choice, last_mask) {
        (Some(FinalChoice::Wear), Some(PathId::Joy)) => EndingId::A1,
        (Some(FinalChoice::Wear), Some(PathId::Rage)) => EndingId::A2,
        (Some(FinalChoice::Wear), _) => EndingId::AGeneric,
        (Some(FinalChoice::Destroy), Some(PathId::Truth)) => EndingId::B2,
        (Some(FinalChoice::Destroy), Some(PathId::Sorrow)) => EndingId::B1,
        (Some(FinalChoice::Destroy), _) => EndingId::BGeneric,
        (Some(FinalChoice::Give), _) => EndingId::C,
        (None, _) => {
            tracing::warn!(
                last_mask = ?last_mask,
                "resolving ending without a final choice, falling back to A_generic"
            );
            EndingId::AGeneric
        }
    }
}
