//! Preference catalog: symbolic keys to scalar configuration values.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::{BotError, Result};

pub const COMMAND_PREFIX: &str = "COMMAND_PREFIX";
pub const HELP_ENTRY_SEPARATOR: &str = "HELP_ENTRY_SEPARATOR";

/// Key to scalar mapping; lookup of an unknown key is fatal.
#[derive(Debug, Clone)]
pub struct PreferenceCatalog {
    entries: HashMap<String, Value>,
}

impl PreferenceCatalog {
    /// Catalog with the built-in preferences.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        entries.insert(COMMAND_PREFIX.to_string(), json!("!"));
        entries.insert(HELP_ENTRY_SEPARATOR.to_string(), json!("\n"));
        Self { entries }
    }

    /// The value for `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| BotError::PreferenceLookup {
                key: key.to_string(),
            })
    }

    /// Inserts or replaces a preference (catalog override surface).
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// The command prefix as a string. Fails if the entry is missing or not
    /// a string.
    pub fn command_prefix(&self) -> Result<String> {
        self.get(COMMAND_PREFIX)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| BotError::PreferenceLookup {
                key: COMMAND_PREFIX.to_string(),
            })
    }
}

impl Default for PreferenceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
