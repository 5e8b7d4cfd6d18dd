//! # tabsplit-core: Pure Business Logic for tabsplit
//!
//! This crate is the **heart** of tabsplit. It holds the bill being split
//! and computes who owes what, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tabsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Front ends (mobile app, `tabsplit` CLI)                │   │
//! │  │   Camera/OCR ──► Items ──► People ──► Assign ──► Summary       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ items, people, taps                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tabsplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   store   │  │   split    │  │    tip    │  │  summary  │   │   │
//! │  │   │ People    │  │ Breakdown  │  │ TipPolicy │  │ share text│   │   │
//! │  │   │ Items     │  │ PersonShare│  │ TipMode   │  │           │   │   │
//! │  │   │ Assign.   │  │            │  │           │  │           │   │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Person and Item
//! - [`assignment`] - Item → people map
//! - [`store`] - ReceiptStore: the mutation API that keeps all three consistent
//! - [`split`] - The split engine and its Breakdown
//! - [`tip`] - Tip policy
//! - [`money`] - Amount type
//! - [`summary`] - Human-readable share text
//! - [`validation`] - Name and price checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::{ReceiptStore, TipPolicy};
//!
//! let mut store = ReceiptStore::new();
//! let alice = store.add_person("Alice").unwrap();
//! let bob = store.add_person("Bob").unwrap();
//! let pizza = store.add_item("Pizza", "13.99").unwrap();
//! let wine = store.add_item("Wine", "34.99").unwrap();
//!
//! store.toggle_assignment(&pizza, &alice);
//! store.toggle_assignment(&wine, &alice);
//! store.toggle_assignment(&wine, &bob);
//!
//! let split = store.compute(&TipPolicy::percentage(15.0));
//! assert_eq!(split.subtotal.to_string(), "$48.98");
//! assert_eq!(split.grand_total.to_string(), "$56.33");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assignment;
pub mod error;
pub mod money;
pub mod split;
pub mod store;
pub mod summary;
pub mod tip;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "sample-data"))]
pub mod sample;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use assignment::Assignments;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Amount;
pub use split::{compute_splits, Breakdown, ItemShare, PersonShare};
pub use store::ReceiptStore;
pub use summary::{render_detail_text, render_share_text, CurrencyFormat};
pub use tip::{TipMode, TipPolicy};
pub use types::*;
