//! # Receipt Store
//!
//! Owns the people, items and assignments of the bill being split.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Store Operations                             │
//! │                                                                         │
//! │  User Action              Store Method             State Change         │
//! │  ───────────              ────────────             ────────────         │
//! │                                                                         │
//! │  Add diner ──────────────► add_person() ─────────► people.push()       │
//! │                                                                         │
//! │  Remove diner ───────────► remove_person() ──────► people.remove()     │
//! │                                                    + pruned from items │
//! │                                                                         │
//! │  Add line ───────────────► add_item() ───────────► items.push()        │
//! │                                                    + empty assignment  │
//! │                                                                         │
//! │  Remove line ────────────► remove_item() ────────► items.remove()      │
//! │                                                    + entry dropped     │
//! │                                                                         │
//! │  Tap diner on item ──────► toggle_assignment() ──► set flip            │
//! │                                                                         │
//! │  View summary ───────────► compute() ────────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Person and item ids are unique
//! - Every item has an assignment entry, and there are no others
//! - Every assigned person id belongs to a current person
//!
//! Rejected input returns `Err` and leaves the store untouched.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::assignment::Assignments;
use crate::error::{CoreError, CoreResult};
use crate::split::{compute_splits, Breakdown};
use crate::tip::TipPolicy;
use crate::types::{new_id, Item, Person};
use crate::validation::{
    parse_price, validate_item_name, validate_person_name, validate_price, ValidationResult,
};

/// The bill being split: people at the table, receipt lines, and who
/// shares what.
///
/// Deserializing goes through [`ReceiptStore::from_parts`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptStore {
    people: Vec<Person>,
    items: Vec<Item>,
    assignments: Assignments,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Builds a store from data produced upstream (scanner, saved state).
    ///
    /// The assignment map is re-keyed against `items` and pruned of unknown
    /// person ids, so the store invariants hold whatever was passed in.
    /// Duplicate ids keep their first occurrence. Items with a negative or
    /// non-finite price are dropped.
    pub fn from_parts(people: Vec<Person>, items: Vec<Item>, assignments: Assignments) -> Self {
        let mut seen = BTreeSet::new();
        let people: Vec<Person> = people
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect();

        let mut seen = BTreeSet::new();
        let items: Vec<Item> = items
            .into_iter()
            .filter(|i| match validate_price(i.price.value()) {
                Ok(()) => true,
                Err(err) => {
                    warn!(item_id = %i.id, name = %i.name, %err, "dropping item");
                    false
                }
            })
            .filter(|i| seen.insert(i.id.clone()))
            .collect();

        let mut store = ReceiptStore {
            people,
            items,
            assignments,
        };
        store.assignments.rekey(&store.items);
        let known: BTreeSet<String> = store.people.iter().map(|p| p.id.clone()).collect();
        store
            .assignments
            .retain_people(|person_id| known.contains(person_id));
        store
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// People in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The assignment map.
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Whether `person_id` is sharing `item_id` (the selected state of a
    /// diner's chip on the assignment screen).
    pub fn is_assigned(&self, item_id: &str, person_id: &str) -> bool {
        self.assignments.is_assigned(item_id, person_id)
    }

    /// People sharing an item, in people order.
    pub fn assignees(&self, item_id: &str) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|p| self.assignments.is_assigned(item_id, &p.id))
            .collect()
    }

    /// Checks if the store has neither people nor items.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.items.is_empty()
    }

    // -------------------------------------------------------------------------
    // People
    // -------------------------------------------------------------------------

    /// Adds a diner and returns their new id.
    ///
    /// ## Errors
    /// Blank names are rejected; nothing is added.
    pub fn add_person(&mut self, name: &str) -> ValidationResult<String> {
        let name = validate_person_name(name)?;
        let person = Person::new(new_id(), name);
        let id = person.id.clone();
        debug!(person_id = %id, name = %person.name, "person added");
        self.people.push(person);
        Ok(id)
    }

    /// Removes a diner and unassigns them from every item.
    ///
    /// Items they were the only assignee of become unassigned.
    pub fn remove_person(&mut self, id: &str) -> Option<Person> {
        let index = self.people.iter().position(|p| p.id == id)?;
        let person = self.people.remove(index);
        self.assignments.remove_person(id);
        debug!(person_id = %id, "person removed");
        Some(person)
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Adds a receipt line from the text of the name and price fields.
    ///
    /// ## Errors
    /// - blank name
    /// - price text that is blank, not a number, infinite or negative
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::ReceiptStore;
    ///
    /// let mut store = ReceiptStore::new();
    /// let id = store.add_item("Tiramisu", "8.99").unwrap();
    /// assert_eq!(store.item(&id).unwrap().price.value(), 8.99);
    ///
    /// assert!(store.add_item("Tiramisu", "eight").is_err());
    /// assert_eq!(store.items().len(), 1);
    /// ```
    pub fn add_item(&mut self, name: &str, price_text: &str) -> ValidationResult<String> {
        let name = validate_item_name(name)?;
        let price = parse_price(price_text)?;
        Ok(self.push_item(name, price))
    }

    /// Adds a receipt line whose price is already a number.
    pub fn add_item_with_price(&mut self, name: &str, price: f64) -> ValidationResult<String> {
        let name = validate_item_name(name)?;
        validate_price(price)?;
        Ok(self.push_item(name, price))
    }

    fn push_item(&mut self, name: String, price: f64) -> String {
        let item = Item::new(new_id(), name, price);
        let id = item.id.clone();
        debug!(item_id = %id, name = %item.name, price, "item added");
        self.items.push(item);
        self.assignments.rekey(&self.items);
        id
    }

    /// Removes a receipt line and its assignment entry.
    pub fn remove_item(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(index);
        self.assignments.rekey(&self.items);
        debug!(item_id = %id, "item removed");
        Some(item)
    }

    // -------------------------------------------------------------------------
    // Assignments
    // -------------------------------------------------------------------------

    /// Flips whether a diner shares an item.
    ///
    /// Returns whether the diner is assigned afterwards. Unknown item or
    /// person ids leave the store unchanged and return `false`.
    pub fn toggle_assignment(&mut self, item_id: &str, person_id: &str) -> bool {
        if self.item(item_id).is_none() || self.person(person_id).is_none() {
            debug!(item_id, person_id, "toggle ignored: unknown id");
            return false;
        }
        let assigned = self.assignments.toggle(item_id, person_id);
        debug!(item_id, person_id, assigned, "assignment toggled");
        assigned
    }

    /// Assigns a diner to an item (idempotent).
    ///
    /// Strict counterpart of [`ReceiptStore::toggle_assignment`] for callers
    /// that build a receipt programmatically and want unknown ids reported.
    pub fn assign(&mut self, item_id: &str, person_id: &str) -> CoreResult<()> {
        if self.item(item_id).is_none() {
            return Err(CoreError::ItemNotFound(item_id.to_string()));
        }
        if self.person(person_id).is_none() {
            return Err(CoreError::PersonNotFound(person_id.to_string()));
        }
        self.assignments.assign(item_id, person_id);
        Ok(())
    }

    /// Assigns an item to every diner currently at the table.
    pub fn assign_all(&mut self, item_id: &str) -> CoreResult<()> {
        if self.item(item_id).is_none() {
            return Err(CoreError::ItemNotFound(item_id.to_string()));
        }
        for person in &self.people {
            self.assignments.assign(item_id, &person.id);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Split
    // -------------------------------------------------------------------------

    /// Runs the split engine over the current state.
    pub fn compute(&self, tip: &TipPolicy) -> Breakdown {
        compute_splits(&self.items, &self.people, &self.assignments, tip)
    }
}

/// Wire shape of a [`ReceiptStore`] before its invariants are restored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreParts {
    #[serde(default)]
    people: Vec<Person>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    assignments: Assignments,
}

impl<'de> Deserialize<'de> for ReceiptStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = StoreParts::deserialize(deserializer)?;
        Ok(ReceiptStore::from_parts(
            parts.people,
            parts.items,
            parts.assignments,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> (ReceiptStore, Vec<String>) {
        let mut store = ReceiptStore::new();
        let ids = names
            .iter()
            .map(|n| store.add_person(n).unwrap())
            .collect();
        (store, ids)
    }

    #[test]
    fn test_add_person_trims_and_keeps_order() {
        let (store, ids) = store_with(&["  Alice ", "Bob", "Charlie"]);

        let names: Vec<&str> = store.people().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(store.person(&ids[0]).unwrap().name, "Alice");
    }

    #[test]
    fn test_add_person_blank_is_rejected() {
        let (mut store, _) = store_with(&["Alice"]);
        let before = store.clone();

        assert!(store.add_person("   ").is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_person_ids_are_unique() {
        let (store, ids) = store_with(&["Sam", "Sam"]);
        assert_eq!(store.people().len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_add_item_creates_empty_assignment() {
        let mut store = ReceiptStore::new();
        let id = store.add_item(" Sparkling Water ", "4.5").unwrap();

        assert_eq!(store.item(&id).unwrap().name, "Sparkling Water");
        assert!(store.assignments().contains_item(&id));
        assert_eq!(store.assignments().count(&id), 0);
    }

    #[test]
    fn test_add_item_rejections_leave_store_unchanged() {
        let mut store = ReceiptStore::new();
        store.add_item("Espresso", "3").unwrap();
        let before = store.clone();

        assert!(store.add_item("", "3").is_err());
        assert!(store.add_item("Water", "").is_err());
        assert!(store.add_item("Water", "free").is_err());
        assert!(store.add_item("Water", "-1").is_err());
        assert!(store.add_item_with_price("Water", f64::NAN).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_item_drops_assignment_entry() {
        let (mut store, people) = store_with(&["Alice"]);
        let bread = store.add_item("Garlic Bread", "7.99").unwrap();
        assert!(store.toggle_assignment(&bread, &people[0]));

        let removed = store.remove_item(&bread).unwrap();

        assert_eq!(removed.name, "Garlic Bread");
        assert!(!store.assignments().contains_item(&bread));
        assert!(store.assignments().is_empty());
        assert!(store.remove_item(&bread).is_none());
    }

    #[test]
    fn test_remove_person_prunes_assignments() {
        let (mut store, people) = store_with(&["Alice", "Bob"]);
        let pizza = store.add_item("Pizza", "13.99").unwrap();
        let wine = store.add_item("Wine", "34.99").unwrap();
        store.toggle_assignment(&pizza, &people[0]);
        store.toggle_assignment(&wine, &people[0]);
        store.toggle_assignment(&wine, &people[1]);

        store.remove_person(&people[0]).unwrap();

        assert_eq!(store.assignments().count(&pizza), 0);
        assert!(!store.is_assigned(&wine, &people[0]));
        assert!(store.is_assigned(&wine, &people[1]));
        assert!(store.remove_person(&people[0]).is_none());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (mut store, people) = store_with(&["Alice", "Bob"]);
        let wine = store.add_item("Wine", "34.99").unwrap();
        store.toggle_assignment(&wine, &people[0]);
        let before = store.clone();

        assert!(store.toggle_assignment(&wine, &people[1]));
        assert!(!store.toggle_assignment(&wine, &people[1]));
        assert_eq!(store, before);
    }

    #[test]
    fn test_toggle_unknown_ids_is_noop() {
        let (mut store, people) = store_with(&["Alice"]);
        let wine = store.add_item("Wine", "34.99").unwrap();
        let before = store.clone();

        assert!(!store.toggle_assignment("missing-item", &people[0]));
        assert!(!store.toggle_assignment(&wine, "missing-person"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_assign_is_strict_and_idempotent() {
        let (mut store, people) = store_with(&["Alice"]);
        let wine = store.add_item("Wine", "34.99").unwrap();

        store.assign(&wine, &people[0]).unwrap();
        store.assign(&wine, &people[0]).unwrap();
        assert_eq!(store.assignments().count(&wine), 1);

        assert!(matches!(
            store.assign("nope", &people[0]),
            Err(CoreError::ItemNotFound(_))
        ));
        assert!(matches!(
            store.assign(&wine, "nobody"),
            Err(CoreError::PersonNotFound(_))
        ));
    }

    #[test]
    fn test_assign_all_and_assignees_order() {
        let (mut store, people) = store_with(&["Charlie", "Alice", "Bob"]);
        let bread = store.add_item("Bread", "6").unwrap();

        store.assign_all(&bread).unwrap();

        let names: Vec<&str> = store
            .assignees(&bread)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
        assert_eq!(store.assignments().count(&bread), people.len());
    }

    #[test]
    fn test_from_parts_restores_invariants() {
        let people = vec![
            Person::new("1", "Alice"),
            Person::new("2", "Bob"),
            Person::new("1", "Alice again"),
        ];
        let items = vec![Item::new("a", "Pizza", 13.99), Item::new("b", "Wine", 34.99)];
        let assignments: Assignments = [
            ("a", vec!["1", "ghost"]),
            ("zzz", vec!["2"]),
        ]
        .into_iter()
        .collect();

        let store = ReceiptStore::from_parts(people, items, assignments);

        assert_eq!(store.people().len(), 2);
        assert_eq!(store.assignments().len(), 2);
        assert!(!store.assignments().contains_item("zzz"));
        assert_eq!(store.assignments().assignees("a").collect::<Vec<_>>(), vec!["1"]);
        assert_eq!(store.assignments().count("b"), 0);
    }

    #[test]
    fn test_from_parts_drops_unusable_prices() {
        let people = vec![Person::new("1", "Alice")];
        let items = vec![
            Item::new("a", "Refund", -10.0),
            Item::new("b", "Mystery", f64::NAN),
            Item::new("c", "Soup", 6.5),
        ];
        let assignments: Assignments = [("a", vec!["1"]), ("b", vec!["1"]), ("c", vec!["1"])]
            .into_iter()
            .collect();

        let store = ReceiptStore::from_parts(people, items, assignments);
        let split = store.compute(&TipPolicy::percentage(10.0));

        assert_eq!(store.items().len(), 1);
        assert!(!store.assignments().contains_item("a"));
        assert!(!store.assignments().contains_item("b"));
        assert!((split.grand_total.value() - 7.15).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_restores_invariants() {
        let json = r#"{
            "people": [{ "id": "1", "name": "Alice" }],
            "items": [
                { "id": "a", "name": "Pizza", "price": 12 },
                { "id": "b", "name": "Refund", "price": -5 }
            ],
            "assignments": { "ghost": ["zz"], "a": ["1", "zz"] }
        }"#;

        let store: ReceiptStore = serde_json::from_str(json).unwrap();

        assert_eq!(store.items().len(), 1);
        assert!(store.assignments().contains_item("a"));
        assert!(!store.assignments().contains_item("ghost"));
        assert_eq!(store.assignments().assignees("a").collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn test_deserialize_fills_missing_entries() {
        let json = r#"{ "items": [{ "id": "a", "name": "Pizza", "price": 12 }] }"#;
        let store: ReceiptStore = serde_json::from_str(json).unwrap();

        assert!(store.assignments().contains_item("a"));
        assert_eq!(store.assignments().count("a"), 0);
    }

    #[test]
    fn test_serialized_store_loads_back_equal() {
        let (mut store, people) = store_with(&["Alice", "Bob"]);
        let wine = store.add_item("Wine", "34.99").unwrap();
        store.toggle_assignment(&wine, &people[1]);

        let json = serde_json::to_string(&store).unwrap();
        let loaded: ReceiptStore = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_serializes_camel_case() {
        let (mut store, people) = store_with(&["Alice"]);
        let pizza = store.add_item("Pizza", "13.99").unwrap();
        store.toggle_assignment(&pizza, &people[0]);

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["people"][0]["name"], "Alice");
        assert_eq!(json["assignments"][&pizza][0], people[0].as_str());
    }
}
