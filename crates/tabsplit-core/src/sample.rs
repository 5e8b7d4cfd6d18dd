//! # Sample Receipt
//!
//! A ready-made dinner for five, used by tests and the CLI's demo mode.
//!
//! Ids are short fixed strings (`"1"`..`"5"` for people, `"a"`..`"i"` for
//! items) so tests and demo output can refer to them directly.

use crate::assignment::Assignments;
use crate::store::ReceiptStore;
use crate::types::{Item, Person};

/// Diners at the sample table.
const PEOPLE: &[(&str, &str)] = &[
    ("1", "Alice"),
    ("2", "Bob"),
    ("3", "Charlie"),
    ("4", "Derik"),
    ("5", "Emma"),
];

/// Receipt lines: entrees, shared appetizers, drinks, dessert.
const ITEMS: &[(&str, &str, f64)] = &[
    ("a", "Margherita Pizza", 13.99),
    ("b", "Spaghetti Carbonara", 15.99),
    ("c", "Fettuccine Alfredo", 16.5),
    ("d", "Garlic Bread (Shared Appetizer)", 7.99),
    ("e", "Bruschetta (Shared Appetizer)", 9.99),
    ("f", "Bottle of House Red Wine (Shared)", 34.99),
    ("g", "Sparkling Water", 4.5),
    ("h", "Tiramisu (Shared Dessert)", 8.99),
    ("i", "Espresso", 3.0),
];

/// Returns the sample receipt with nobody assigned to anything.
pub fn sample_receipt() -> ReceiptStore {
    let people = PEOPLE
        .iter()
        .map(|&(id, name)| Person::new(id, name))
        .collect();
    let items = ITEMS
        .iter()
        .map(|&(id, name, price)| Item::new(id, name, price))
        .collect();
    ReceiptStore::from_parts(people, items, Assignments::new())
}

/// Returns the sample receipt with a typical evening's assignments:
/// one entree each for Alice, Bob and Charlie, shared starters, wine for
/// the three of them, water for Derik, dessert for Emma and Derik, and an
/// espresso nobody claimed.
pub fn sample_assigned_receipt() -> ReceiptStore {
    let mut store = sample_receipt();
    let plan: &[(&str, &[&str])] = &[
        ("a", &["1"]),
        ("b", &["2"]),
        ("c", &["3"]),
        ("d", &["1", "2", "3", "4", "5"]),
        ("e", &["1", "2", "3", "4", "5"]),
        ("f", &["1", "2", "3"]),
        ("g", &["4"]),
        ("h", &["4", "5"]),
    ];
    for (item_id, person_ids) in plan {
        for person_id in person_ids.iter() {
            store.toggle_assignment(item_id, person_id);
        }
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TipPolicy;

    #[test]
    fn test_sample_receipt_is_unassigned() {
        let store = sample_receipt();
        assert_eq!(store.people().len(), 5);
        assert_eq!(store.items().len(), 9);
        assert!(store.assignments().iter().all(|(_, set)| set.is_empty()));

        let split = store.compute(&TipPolicy::percentage(20.0));
        assert_eq!(split.grand_total.value(), 0.0);
    }

    #[test]
    fn test_sample_assigned_receipt() {
        let store = sample_assigned_receipt();
        assert!(store.is_assigned("f", "3"));
        assert!(!store.is_assigned("i", "1"));

        let split = store.compute(&TipPolicy::percentage(18.0));
        // Everything except the 3.00 espresso
        assert!((split.subtotal.value() - 112.94).abs() < 1e-9);
        assert!((split.unassigned_total.value() - 3.0).abs() < 1e-9);
        assert!(split.distributed_total().approx_eq(split.grand_total));
    }
}
