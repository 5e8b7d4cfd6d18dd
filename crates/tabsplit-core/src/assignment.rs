//! # Assignments
//!
//! Which people share which receipt item.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Assignment Map                                    │
//! │                                                                         │
//! │   item id                 person ids                                   │
//! │   ───────                 ──────────                                   │
//! │   "pizza"      ──────►    { "alice" }                                  │
//! │   "wine"       ──────►    { "alice", "bob" }                           │
//! │   "espresso"   ──────►    { }            ◄── nobody claimed it         │
//! │                                                                         │
//! │   An empty set is a valid entry: the item is simply not split.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Sets are `BTreeSet` so iteration (and therefore floating-point summation
//! order in the engine) is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use ts_rs::TS;

use crate::types::Item;

/// Mapping from item id to the set of person ids sharing that item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Assignments(BTreeMap<String, BTreeSet<String>>);

impl Assignments {
    /// Creates an empty assignment map.
    pub fn new() -> Self {
        Assignments(BTreeMap::new())
    }

    /// Returns the people assigned to an item.
    ///
    /// Unknown item ids yield an empty set rather than `None`; callers never
    /// need to distinguish "no entry" from "nobody assigned".
    pub fn assignees(&self, item_id: &str) -> impl Iterator<Item = &str> + '_ {
        self.0
            .get(item_id)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of people assigned to an item.
    pub fn count(&self, item_id: &str) -> usize {
        self.0.get(item_id).map_or(0, BTreeSet::len)
    }

    /// Checks whether `person_id` shares `item_id`.
    pub fn is_assigned(&self, item_id: &str, person_id: &str) -> bool {
        self.0
            .get(item_id)
            .is_some_and(|set| set.contains(person_id))
    }

    /// Checks whether the map has an entry (possibly empty) for an item.
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.0.contains_key(item_id)
    }

    /// Adds a person to an item. Returns `false` if already assigned.
    pub fn assign(&mut self, item_id: &str, person_id: &str) -> bool {
        self.entry(item_id).insert(person_id.to_string())
    }

    /// Flips a person's membership on an item.
    ///
    /// A missing entry is treated as an empty set. Returns whether the person
    /// is assigned after the call.
    pub fn toggle(&mut self, item_id: &str, person_id: &str) -> bool {
        let set = self.entry(item_id);
        if set.remove(person_id) {
            false
        } else {
            set.insert(person_id.to_string());
            true
        }
    }

    /// Removes a person from every item.
    pub fn remove_person(&mut self, person_id: &str) {
        for set in self.0.values_mut() {
            set.remove(person_id);
        }
    }

    /// Re-keys the map against the current item list.
    ///
    /// ## Postcondition
    /// - every item in `items` has an entry (new ones empty)
    /// - entries for ids not in `items` are gone
    pub fn rekey(&mut self, items: &[Item]) {
        let current: BTreeSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        self.0.retain(|item_id, _| current.contains(item_id.as_str()));
        for item in items {
            self.0.entry(item.id.clone()).or_default();
        }
    }

    /// Removes every person id not accepted by `keep`.
    pub fn retain_people(&mut self, mut keep: impl FnMut(&str) -> bool) {
        for set in self.0.values_mut() {
            set.retain(|person_id| keep(person_id));
        }
    }

    /// Iterates `(item id, assignees)` in item id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of item entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if there are no item entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn entry(&mut self, item_id: &str) -> &mut BTreeSet<String> {
        self.0.entry(item_id.to_string()).or_default()
    }
}

impl<I, P, S> FromIterator<(I, P)> for Assignments
where
    I: Into<String>,
    P: IntoIterator<Item = S>,
    S: Into<String>,
{
    /// Builds a map from `(item id, person ids)` pairs.
    fn from_iter<T: IntoIterator<Item = (I, P)>>(iter: T) -> Self {
        Assignments(
            iter.into_iter()
                .map(|(item, people)| (item.into(), people.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
