//! Session state: string-keyed JSON values with shallow merge and
//! reset-to-default.

use serde_json::{Map, Value};

/// Transient session facts (active channels, current track, queue, ...).
///
/// The construction-time snapshot is stored separately from the live map, so
/// no sequence of merges can corrupt what [`BotState::reset`] restores.
#[derive(Debug, Clone)]
pub struct BotState {
    values: Map<String, Value>,
    default: Map<String, Value>,
}

impl BotState {
    /// Empty state with an empty default snapshot.
    pub fn new() -> Self {
        Self::with_default(Map::new())
    }

    /// State starting from `default`, which is also the snapshot that
    /// `reset` restores.
    pub fn with_default(default: Map<String, Value>) -> Self {
        Self {
            values: default.clone(),
            default,
        }
    }

    /// Current mapping. Read-only view contract: callers must not expect
    /// isolation from subsequent mutation.
    pub fn get(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Shallow merge: patch values win on key conflict, keys absent from the
    /// patch are preserved.
    pub fn set(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            self.values.insert(key, value);
        }
    }

    /// Replaces the current state with a copy of the initial default.
    pub fn reset(&mut self) {
        self.values = self.default.clone();
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}
