// envsource: environment-variable aggregation for CI build hosts
//
// SPDX-FileCopyrightText: 2026 envsource contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable map container.
//!
//! ```text
//! VarMap (BTreeMap<String, String>)
//! Ops: set/get/merge/remove/iter
//! merge: bulk override, last writer wins
//! ```
//!
//! - **Case-sensitive keys**: `NODE_NAME` and `node_name` are distinct
//! - **Deterministic order**: sorted iteration via `BTreeMap`
//! - **No merge policy beyond override**: later sources win per key

use std::collections::BTreeMap;

/// A set of environment variables with last-writer-wins merge semantics.
///
/// Keys are case-sensitive and unique. The only ordering guarantee consumers
/// get is that later merges override earlier ones for the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    vars: BTreeMap<String, String>,
}

impl VarMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates a variable map from a plain map.
    #[must_use]
    pub const fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Sets a variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Removes a variable.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Merges another map into this one; values from `other` win on
    /// key collisions.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        for (k, v) in &other.vars {
            self.vars.insert(k.clone(), v.clone());
        }
        self
    }

    /// Consuming variant of [`merge`](Self::merge) for freshly built maps.
    pub fn merge_owned(&mut self, other: Self) -> &mut Self {
        self.vars.extend(other.vars);
        self
    }

    /// Returns an iterator over variables in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns all variables as a plain map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VarMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for VarMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.vars
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
