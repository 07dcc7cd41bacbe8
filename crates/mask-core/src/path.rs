//! Story path identifiers.
//!
//! Five thematic paths branch off the hub; the sixth, Hunger, is hidden until
//! the unlock rule in [`crate::unlock`] admits it.

use std::fmt;

use serde::Serialize;

/// One of the six story paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathId {
    /// The Joy mask.
    Joy,
    /// The Rage mask.
    Rage,
    /// The Sorrow mask.
    Sorrow,
    /// The Truth mask.
    Truth,
    /// The Silence mask.
    Silence,
    /// The hidden Hunger mask.
    Hunger,
}

impl PathId {
    /// All paths in hub order, Hunger last.
    pub fn all() -> &'static [Self] {
        &[
            Self::Joy,
            Self::Rage,
            Self::Sorrow,
            Self::Truth,
            Self::Silence,
            Self::Hunger,
        ]
    }

    /// The three paths counted by the "two of three" unlock rule.
    pub fn lesser() -> &'static [Self] {
        &[Self::Joy, Self::Rage, Self::Sorrow]
    }

    /// Parse a path name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "joy" => Some(Self::Joy),
            "rage" => Some(Self::Rage),
            "sorrow" => Some(Self::Sorrow),
            "truth" => Some(Self::Truth),
            "silence" => Some(Self::Silence),
            "hunger" => Some(Self::Hunger),
            _ => None,
        }
    }

    /// Lowercase name, also used as the flag-name prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Rage => "rage",
            Self::Sorrow => "sorrow",
            Self::Truth => "truth",
            Self::Silence => "silence",
            Self::Hunger => "hunger",
        }
    }

    /// Whether this is the hidden terminal path.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hunger)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(PathId::parse("joy"), Some(PathId::Joy));
        assert_eq!(PathId::parse("SILENCE"), Some(PathId::Silence));
        assert_eq!(PathId::parse(" Hunger "), Some(PathId::Hunger));
        assert_eq!(PathId::parse("envy"), None);
    }

    #[test]
    fn display_matches_parse() {
        for path in PathId::all() {
            assert_eq!(PathId::parse(&path.to_string()), Some(*path));
        }
    }

    #[test]
    fn only_hunger_is_hidden() {
        let hidden: Vec<_> = PathId::all().iter().filter(|p| p.is_hidden()).collect();
        assert_eq!(hidden, vec![&PathId::Hunger]);
    }

    #[test]
    fn serializes_as_lowercase_name() {
        for path in PathId::all() {
            let json = serde_json::to_string(path).unwrap();
            assert_eq!(json, format!("\"{}\"", path.as_str()));
        }
    }
}
