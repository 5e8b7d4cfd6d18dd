//! # Split Engine
//!
//! Turns a receipt snapshot and a tip policy into who owes what.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        compute_splits()                                 │
//! │                                                                         │
//! │  1. owed[p] = 0 for every person                                       │
//! │                                                                         │
//! │  2. for each item with assignees A (|A| > 0):                          │
//! │        share = price / |A|                                             │
//! │        owed[a] += share   for a in A                                   │
//! │        subtotal += price                                               │
//! │     items nobody claimed are skipped entirely                          │
//! │                                                                         │
//! │  3. tip_total = TipPolicy::tip_for(subtotal)                           │
//! │        tip[p] = tip_total × owed[p] / Σ owed     (pre-tip snapshot)    │
//! │        Σ owed = 0  →  tip computed, nobody charged                     │
//! │                                                                         │
//! │  4. total[p] = owed[p] + tip[p]                                        │
//! │     grand_total = subtotal + tip_total ≈ Σ total[p]                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//! - Pure: no mutation, no I/O, same input gives the same output
//! - Never fails and never divides by zero
//! - Shares are divided by assignee count, never by table size
//! - Nothing is rounded here; see [`crate::summary`] for display
//!
//! ## Tolerated Inconsistencies
//! - assignment entries for items not in `items` are ignored
//! - items with no entry count as unassigned
//! - assignee ids not in `people` are ignored (not counted in `|A|`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::assignment::Assignments;
use crate::money::Amount;
use crate::tip::TipPolicy;
use crate::types::{Item, Person};

// =============================================================================
// Breakdown
// =============================================================================

/// One person's portion of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemShare {
    pub item_id: String,
    pub item_name: String,
    /// Price of the whole line.
    pub full_price: Amount,
    /// Number of people splitting the line.
    pub share_count: usize,
    /// `full_price / share_count`.
    pub share_amount: Amount,
    /// Names of the other people on this line, in people order.
    pub co_sharers: Vec<String>,
}

impl ItemShare {
    /// Whether anyone else shares this line.
    pub fn is_shared(&self) -> bool {
        self.share_count > 1
    }
}

/// Everything one person owes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonShare {
    pub person_id: String,
    pub name: String,
    /// Sum of item shares, before tip.
    pub subtotal: Amount,
    /// This person's part of the tip.
    pub tip: Amount,
    /// `subtotal + tip`: the amount to pay.
    pub total: Amount,
    /// Items this person is assigned to, in receipt order.
    pub items: Vec<ItemShare>,
}

/// Result of a split. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Breakdown {
    /// One entry per person, in people order (including people owing 0).
    pub shares: Vec<PersonShare>,
    /// Sum of prices of assigned items.
    pub subtotal: Amount,
    /// Tip computed by the policy.
    pub tip_total: Amount,
    /// `subtotal + tip_total`.
    pub grand_total: Amount,
    /// Sum of prices of items nobody claimed (excluded from everything).
    pub unassigned_total: Amount,
}

impl Breakdown {
    /// Final amount owed by a person, tip included.
    pub fn owed_by(&self, person_id: &str) -> Option<Amount> {
        self.share_of(person_id).map(|s| s.total)
    }

    /// Full share record for a person.
    pub fn share_of(&self, person_id: &str) -> Option<&PersonShare> {
        self.shares.iter().find(|s| s.person_id == person_id)
    }

    /// The `person id → amount owed` view of the breakdown.
    pub fn per_person(&self) -> BTreeMap<&str, Amount> {
        self.shares
            .iter()
            .map(|s| (s.person_id.as_str(), s.total))
            .collect()
    }

    /// Sum of every person's final amount. Equals `grand_total` up to
    /// float rounding whenever somebody was assigned something.
    pub fn distributed_total(&self) -> Amount {
        self.shares.iter().map(|s| s.total).sum()
    }

    /// Serializes to pretty JSON for export.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Computes each person's share of the bill.
///
/// ## Example
/// ```rust
/// use tabsplit_core::{compute_splits, Assignments, Item, Person, TipPolicy};
///
/// let people = vec![Person::new("alice", "Alice"), Person::new("bob", "Bob")];
/// let items = vec![Item::new("pizza", "Pizza", 20.0), Item::new("wine", "Wine", 10.0)];
/// let assignments: Assignments = [
///     ("pizza", vec!["alice"]),
///     ("wine", vec!["alice", "bob"]),
/// ]
/// .into_iter()
/// .collect();
///
/// let split = compute_splits(&items, &people, &assignments, &TipPolicy::percentage(10.0));
///
/// assert_eq!(split.subtotal.value(), 30.0);
/// assert!(split.tip_total.approx_eq(3.0.into()));
/// assert!(split.owed_by("alice").unwrap().approx_eq(27.5.into()));
/// assert!(split.owed_by("bob").unwrap().approx_eq(5.5.into()));
/// ```
pub fn compute_splits(
    items: &[Item],
    people: &[Person],
    assignments: &Assignments,
    tip_policy: &TipPolicy,
) -> Breakdown {
    let mut shares: Vec<PersonShare> = people
        .iter()
        .map(|p| PersonShare {
            person_id: p.id.clone(),
            name: p.name.clone(),
            subtotal: Amount::ZERO,
            tip: Amount::ZERO,
            total: Amount::ZERO,
            items: Vec::new(),
        })
        .collect();

    let mut subtotal = Amount::ZERO;
    let mut unassigned_total = Amount::ZERO;

    for item in items {
        // Indices into `people`, in people order
        let sharers: Vec<usize> = people
            .iter()
            .enumerate()
            .filter(|(_, p)| assignments.is_assigned(&item.id, &p.id))
            .map(|(index, _)| index)
            .collect();

        if sharers.is_empty() {
            unassigned_total += item.price;
            continue;
        }

        let share_amount = item.price / sharers.len();
        subtotal += item.price;

        for &index in &sharers {
            let co_sharers = sharers
                .iter()
                .filter(|&&other| other != index)
                .map(|&other| people[other].name.clone())
                .collect();

            let share = &mut shares[index];
            share.subtotal += share_amount;
            share.items.push(ItemShare {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                full_price: item.price,
                share_count: sharers.len(),
                share_amount,
                co_sharers,
            });
        }
    }

    let tip_total = tip_policy.tip_for(subtotal);
    distribute_tip(&mut shares, tip_total);

    Breakdown {
        shares,
        subtotal,
        tip_total,
        grand_total: subtotal + tip_total,
        unassigned_total,
    }
}

/// Splits `tip_total` in proportion to each pre-tip subtotal.
fn distribute_tip(shares: &mut [PersonShare], tip_total: Amount) {
    // Snapshot first: allocations must not see each other's tip
    let owed_sum: Amount = shares.iter().map(|s| s.subtotal).sum();

    for share in shares.iter_mut() {
        share.tip = tip_total.allocate(share.subtotal, owed_sum);
        share.total = share.subtotal + share.tip;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
