// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Component snapshot model.
//!
//! A [`ComponentSnapshot`] is the last reported enabled/disabled state of one
//! component; [`ComponentStates`] is the full collection as pushed by the
//! server. Reads are non-mutating and total: querying a kind that is absent
//! from the collection simply yields `false`.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::types::ComponentKind;

/// Enabled/disabled state of one component as last reported by the server.
///
/// The wire shape is `{"name": "SMOOTHING", "enabled": true}`. An absent
/// `enabled` field defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    /// The component this entry describes.
    pub name: ComponentKind,
    /// Whether the component is currently enabled.
    #[serde(default)]
    pub enabled: bool,
}

impl ComponentSnapshot {
    /// Creates a snapshot entry.
    #[must_use]
    pub const fn new(name: ComponentKind, enabled: bool) -> Self {
        Self { name, enabled }
    }
}

/// The server's current component state, unique by component kind.
///
/// Ordering of entries is irrelevant. Applying an entry for a kind that is
/// already present replaces it.
///
/// # Examples
///
/// ```
/// use hyperhdr_lib::state::{ComponentSnapshot, ComponentStates};
/// use hyperhdr_lib::types::ComponentKind;
///
/// let mut states = ComponentStates::new();
/// states.apply(ComponentSnapshot::new(ComponentKind::Smoothing, true));
///
/// assert!(states.is_enabled(ComponentKind::Smoothing));
/// assert!(!states.is_enabled(ComponentKind::Forwarder));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentStates {
    entries: Vec<ComponentSnapshot>,
}

impl ComponentStates {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns whether the given component is reported as enabled.
    ///
    /// Total over any collection: a kind with no entry is `false`.
    #[must_use]
    pub fn is_enabled(&self, kind: ComponentKind) -> bool {
        self.get(kind).is_some_and(|entry| entry.enabled)
    }

    /// Returns the entry for the given component, if present.
    #[must_use]
    pub fn get(&self, kind: ComponentKind) -> Option<&ComponentSnapshot> {
        self.entries.iter().find(|entry| entry.name == kind)
    }

    /// Inserts or replaces the entry for the snapshot's component.
    pub fn apply(&mut self, snapshot: ComponentSnapshot) {
        match self.entries.iter_mut().find(|entry| entry.name == snapshot.name) {
            Some(entry) => *entry = snapshot,
            None => self.entries.push(snapshot),
        }
    }

    /// Returns the number of components present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no component state has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in reported order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentSnapshot> {
        self.entries.iter()
    }
}

impl FromIterator<ComponentSnapshot> for ComponentStates {
    fn from_iter<I: IntoIterator<Item = ComponentSnapshot>>(iter: I) -> Self {
        let mut states = Self::new();
        for snapshot in iter {
            states.apply(snapshot);
        }
        states
    }
}

impl<'a> IntoIterator for &'a ComponentStates {
    type Item = &'a ComponentSnapshot;
    type IntoIter = std::slice::Iter<'a, ComponentSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for ComponentStates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Raw wire entry, parsed before the component key is validated.
#[derive(Deserialize)]
struct RawSnapshot {
    name: String,
    #[serde(default)]
    enabled: bool,
}

impl<'de> Deserialize<'de> for ComponentStates {
    /// Deserializes the server's `components` array.
    ///
    /// Entries naming a component outside the fixed registry are logged and
    /// skipped rather than failing the whole payload.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawSnapshot>::deserialize(deserializer)?;
        let mut states = Self::new();

        for entry in raw {
            match ComponentKind::from_key(&entry.name) {
                Ok(name) => states.apply(ComponentSnapshot::new(name, entry.enabled)),
                Err(_) => {
                    tracing::warn!(key = %entry.name, "Skipping unknown component in snapshot");
                }
            }
        }

        Ok(states)
    }
}
