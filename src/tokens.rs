//! The resolved token table consumed by substitution.
//! Values are collected once before materialization starts and stay
//! immutable for the duration of a run.

use crate::constants::TOKEN_NAMES;
use indexmap::IndexMap;

/// Immutable mapping from placeholder name to replacement value.
///
/// The table always covers the full token vocabulary: a name that was never
/// supplied a value resolves to the empty string, so substitution is total.
/// Names outside the vocabulary are not in the table and their markers
/// survive substitution verbatim.
#[derive(Debug, Clone)]
pub struct TokenTable {
    values: IndexMap<String, String>,
}

impl TokenTable {
    /// Creates a table with every vocabulary token resolved to "".
    pub fn new() -> Self {
        let values =
            TOKEN_NAMES.iter().map(|name| (name.to_string(), String::new())).collect();
        Self { values }
    }

    /// Sets a token's value; names outside the vocabulary are ignored.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        } else {
            log::debug!("Ignoring unknown token '{}'", name);
        }
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks up a token's resolved value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        TokenTable::new()
    }
}
