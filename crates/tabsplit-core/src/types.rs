//! # Domain Types
//!
//! Core domain types used throughout tabsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Person      │   │      Item       │   │    Assignments      │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  item id ──► {ids}  │   │
//! │  │  name           │   │  name           │   │  (see assignment.rs)│   │
//! │  └─────────────────┘   │  price          │   └─────────────────────┘   │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are opaque strings. Fresh ids are UUID v4, but ids supplied by an
//! upstream producer (a receipt scanner, the sample data) are kept as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Amount;

/// Generates a fresh, globally unique id for a person or item.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Person
// =============================================================================

/// A diner at the table who may be assigned items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Person {
    /// Unique identifier.
    pub id: String,

    /// Display name (trimmed, never empty when created through the store).
    pub name: String,
}

impl Person {
    /// Creates a person with an explicit id.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Person {
            id: id.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single priced line on the receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique identifier.
    pub id: String,

    /// Line description as printed on the receipt.
    pub name: String,

    /// Full price of the line, in major currency units. Always >= 0.
    pub price: Amount,
}

impl Item {
    /// Creates an item with an explicit id.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            price: Amount::new(price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique_uuid() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_item_serializes_price_as_number() {
        let item = Item::new("a", "Margherita Pizza", 13.99);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["price"], serde_json::json!(13.99));
        assert_eq!(json["name"], "Margherita Pizza");
    }
}
