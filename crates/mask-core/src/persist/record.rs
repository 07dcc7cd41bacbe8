//! The durable profile record and its schema-tolerant JSON form.
//!
//! Saves are written in camelCase. Loading merges a save over the defaults
//! one field at a time, so a single malformed field never costs the rest of
//! the profile. Older builds wrote snake_case keys; both spellings are read
//! and folded together.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::ending::EndingId;
use crate::error::{MaskError, MaskResult};
use crate::path::PathId;

/// Which paths have ever been completed on this profile.
///
/// Always exactly the six fixed keys; unknown keys in a save are dropped and
/// missing ones read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletedPaths {
    /// Joy completed.
    pub joy: bool,
    /// Rage completed.
    pub rage: bool,
    /// Sorrow completed.
    pub sorrow: bool,
    /// Truth completed.
    pub truth: bool,
    /// Silence completed.
    pub silence: bool,
    /// Hunger completed.
    pub hunger: bool,
}

impl CompletedPaths {
    /// Whether a path is marked completed.
    pub fn get(&self, path: PathId) -> bool {
        match path {
            PathId::Joy => self.joy,
            PathId::Rage => self.rage,
            PathId::Sorrow => self.sorrow,
            PathId::Truth => self.truth,
            PathId::Silence => self.silence,
            PathId::Hunger => self.hunger,
        }
    }

    /// Mark a path completed. Returns true if it was not completed before.
    pub fn mark(&mut self, path: PathId) -> bool {
        let slot = match path {
            PathId::Joy => &mut self.joy,
            PathId::Rage => &mut self.rage,
            PathId::Sorrow => &mut self.sorrow,
            PathId::Truth => &mut self.truth,
            PathId::Silence => &mut self.silence,
            PathId::Hunger => &mut self.hunger,
        };
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Completed paths in hub order.
    pub fn iter(&self) -> impl Iterator<Item = PathId> + '_ {
        PathId::all().iter().copied().filter(|p| self.get(*p))
    }

    /// Number of completed paths.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Everything that survives between runs for one player profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentRecord {
    /// Set by the first committed run.
    pub has_played_before: bool,
    /// Number of committed runs.
    pub play_count: u32,
    /// Per-path completion, folded in on every commit.
    pub completed_paths: CompletedPaths,
    /// Legacy membership list of completed paths; no duplicates.
    pub masks_used: Vec<PathId>,
    /// The Hunger mask has been revealed at the hub at least once.
    pub hunger_unlocked: bool,
    /// The early script-break ending has happened at least once.
    pub script_deleted_once: bool,
    /// The most recently committed ending.
    pub last_ending_id: Option<EndingId>,
    /// Top-level fields this version does not know about, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersistentRecord {
    /// Parse a saved record, merging it field by field over the defaults.
    ///
    /// Each field is looked up under its camelCase key and its legacy
    /// snake_case key. A value that does not fit is logged and skipped.
    /// When both spellings are present, flags and paths are OR-ed, the play
    /// count takes the larger value, and the camelCase ending id wins.
    /// Only text that is not a JSON object is an error.
    pub fn from_json(text: &str) -> MaskResult<Self> {
        match serde_json::from_str(text)? {
            Value::Object(map) => Ok(Self::merge(map)),
            _ => Err(MaskError::NotAnObject),
        }
    }

    /// Serialize the record for storage.
    pub fn to_json(&self) -> MaskResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether a path was completed on any earlier run.
    pub fn was_used(&self, path: PathId) -> bool {
        self.completed_paths.get(path) || self.masks_used.contains(&path)
    }

    /// Fold completed paths into the record with logical OR.
    ///
    /// Previously completed paths are never cleared. Each path is appended
    /// to the legacy list at most once. Returns the paths that were not yet
    /// marked in `completed_paths`.
    pub fn fold_completed(&mut self, paths: impl IntoIterator<Item = PathId>) -> Vec<PathId> {
        let mut newly = Vec::new();
        for path in paths {
            if self.completed_paths.mark(path) {
                newly.push(path);
            }
            if !self.masks_used.contains(&path) {
                self.masks_used.push(path);
            }
        }
        newly
    }

    fn merge(mut map: Map<String, Value>) -> Self {
        let has_played_before = any_true(
            "hasPlayedBefore",
            take(&mut map, "hasPlayedBefore", "has_played_before"),
        );
        let play_count = fitting::<u32>("playCount", take(&mut map, "playCount", "play_count"))
            .into_iter()
            .max()
            .unwrap_or_default();
        let completed_paths =
            completed_paths(take(&mut map, "completedPaths", "completed_masks"));
        let masks_used = legacy_paths(take(&mut map, "masksUsed", "masks_used"));
        let hunger_unlocked = any_true(
            "hungerUnlocked",
            take(&mut map, "hungerUnlocked", "hunger_unlocked"),
        );
        let script_deleted_once = any_true(
            "scriptDeletedOnce",
            take(&mut map, "scriptDeletedOnce", "script_deleted_once"),
        );
        let last_ending_id = last_ending(take(&mut map, "lastEndingId", "last_ending_id"));

        Self {
            has_played_before,
            play_count,
            completed_paths,
            masks_used,
            hunger_unlocked,
            script_deleted_once,
            last_ending_id,
            extra: map,
        }
    }
}

/// Remove both spellings of a field; non-null values, camelCase first.
fn take(map: &mut Map<String, Value>, key: &str, legacy: &str) -> Vec<Value> {
    let found: Vec<Value> = [key, legacy]
        .into_iter()
        .filter_map(|k| map.remove(k))
        .filter(|v| !v.is_null())
        .collect();
    if found.len() > 1 {
        debug!(field = key, "save holds both key spellings, merging");
    }
    found
}

fn fitting<T: DeserializeOwned>(field: &str, candidates: Vec<Value>) -> Vec<T> {
    candidates
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(field, error = %e, "ignoring malformed save field");
                None
            }
        })
        .collect()
}

fn any_true(field: &str, candidates: Vec<Value>) -> bool {
    fitting::<bool>(field, candidates).into_iter().any(|b| b)
}

fn completed_paths(candidates: Vec<Value>) -> CompletedPaths {
    let mut paths = CompletedPaths::default();
    for value in candidates {
        let Value::Object(entries) = value else {
            warn!(field = "completedPaths", "ignoring malformed save field");
            continue;
        };
        for (key, flag) in entries {
            let Some(path) = PathId::parse(&key) else {
                debug!(path = %key, "dropping unknown completed path");
                continue;
            };
            match flag {
                Value::Bool(true) => {
                    paths.mark(path);
                }
                Value::Bool(false) | Value::Null => {}
                other => warn!(path = %key, value = %other, "ignoring malformed completed flag"),
            }
        }
    }
    paths
}

fn legacy_paths(candidates: Vec<Value>) -> Vec<PathId> {
    let mut paths = Vec::new();
    for value in candidates {
        let Value::Array(items) = value else {
            warn!(field = "masksUsed", "ignoring malformed save field");
            continue;
        };
        for item in items {
            match item.as_str().and_then(PathId::parse) {
                Some(path) if !paths.contains(&path) => paths.push(path),
                Some(_) => {}
                None => warn!(path = %item, "dropping unknown path from legacy list"),
            }
        }
    }
    paths
}

fn last_ending(candidates: Vec<Value>) -> Option<EndingId> {
    candidates.into_iter().find_map(|value| {
        let ending = value.as_str().and_then(EndingId::parse);
        if ending.is_none() {
            warn!(ending = %value, "dropping unknown last ending id");
        }
        ending
    })
}
