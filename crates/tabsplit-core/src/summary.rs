//! # Share Text
//!
//! Renders a [`Breakdown`] as the plain text sent from the summary screen's
//! "Finalize & Share" action.
//!
//! ```text
//! Alice: $36.21
//! Bob: $20.12
//! Subtotal: $48.98
//! Tip: $7.35
//! Total: $56.33
//! ```
//!
//! This is the only place amounts get rounded.

use crate::money::Amount;
use crate::split::Breakdown;

/// Currency display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimals: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, decimals: usize) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Formats an amount, e.g. `$12.34`.
    pub fn format(&self, amount: Amount) -> String {
        amount.format(&self.symbol, self.decimals)
    }
}

/// One `"<name>: <amount>"` line per person, then subtotal, tip and total.
pub fn render_share_text(breakdown: &Breakdown, currency: &CurrencyFormat) -> String {
    let mut lines: Vec<String> = breakdown
        .shares
        .iter()
        .map(|s| format!("{}: {}", s.name, currency.format(s.total)))
        .collect();
    push_totals(&mut lines, breakdown, currency);
    lines.join("\n")
}

/// Like [`render_share_text`], with each person's items listed under them.
///
/// ```text
/// Alice: $36.21
///   Pizza: $13.99
///   Wine (1/2, with Bob): $17.50
///   Tip: $4.72
/// ```
pub fn render_detail_text(breakdown: &Breakdown, currency: &CurrencyFormat) -> String {
    let mut lines = Vec::new();

    for share in &breakdown.shares {
        lines.push(format!("{}: {}", share.name, currency.format(share.total)));
        for item in &share.items {
            let label = if item.is_shared() {
                format!(
                    "{} (1/{}, with {})",
                    item.item_name,
                    item.share_count,
                    item.co_sharers.join(", ")
                )
            } else {
                item.item_name.clone()
            };
            lines.push(format!("  {}: {}", label, currency.format(item.share_amount)));
        }
        if share.tip.is_positive() {
            lines.push(format!("  Tip: {}", currency.format(share.tip)));
        }
    }

    push_totals(&mut lines, breakdown, currency);
    if breakdown.unassigned_total.is_positive() {
        lines.push(format!(
            "Unassigned (not split): {}",
            currency.format(breakdown.unassigned_total)
        ));
    }
    lines.join("\n")
}

fn push_totals(lines: &mut Vec<String>, breakdown: &Breakdown, currency: &CurrencyFormat) {
    lines.push(format!("Subtotal: {}", currency.format(breakdown.subtotal)));
    lines.push(format!("Tip: {}", currency.format(breakdown.tip_total)));
    lines.push(format!("Total: {}", currency.format(breakdown.grand_total)));
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_splits, Assignments, Item, Person, TipPolicy};

    fn dinner() -> Breakdown {
        let items = vec![
            Item::new("pizza", "Pizza", 13.99),
            Item::new("wine", "Wine", 34.99),
            Item::new("espresso", "Espresso", 3.0),
        ];
        let people = vec![
            Person::new("alice", "Alice"),
            Person::new("bob", "Bob"),
            Person::new("charlie", "Charlie"),
        ];
        let assignments: Assignments = [
            ("pizza", vec!["alice"]),
            ("wine", vec!["alice", "bob"]),
        ]
        .into_iter()
        .collect();
        compute_splits(&items, &people, &assignments, &TipPolicy::percentage(15.0))
    }

    #[test]
    fn test_share_text() {
        let text = render_share_text(&dinner(), &CurrencyFormat::default());
        assert_eq!(
            text,
            "Alice: $36.21\nBob: $20.12\nCharlie: $0.00\nSubtotal: $48.98\nTip: $7.35\nTotal: $56.33"
        );
    }

    #[test]
    fn test_detail_text() {
        let text = render_detail_text(&dinner(), &CurrencyFormat::new("€", 2));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Alice: €36.21");
        assert_eq!(lines[1], "  Pizza: €13.99");
        assert!(lines[2].starts_with("  Wine (1/2, with Bob): €17."));
        assert_eq!(lines[3], "  Tip: €4.72");
        assert!(lines.contains(&"Charlie: €0.00"));
        assert_eq!(lines.last(), Some(&"Unassigned (not split): €3.00"));
    }

    #[test]
    fn test_share_text_rounds_half_cents_up() {
        let items = vec![Item::new("gum", "Gum", 0.25)];
        let people = vec![Person::new("a", "A"), Person::new("b", "B")];
        let assignments: Assignments = [("gum", vec!["a", "b"])].into_iter().collect();
        let split = compute_splits(&items, &people, &assignments, &TipPolicy::default());

        assert_eq!(
            render_share_text(&split, &CurrencyFormat::default()),
            "A: $0.13\nB: $0.13\nSubtotal: $0.25\nTip: $0.00\nTotal: $0.25"
        );
    }

    #[test]
    fn test_currency_format() {
        let yen = CurrencyFormat::new("¥", 0);
        assert_eq!(yen.format(Amount::new(1234.4)), "¥1234");
    }
}
