//! # Tip Policy
//!
//! How gratuity is calculated and whether it is already in the prices.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tip Policy Behavior                              │
//! │                                                                         │
//! │  included_in_subtotal = true                                           │
//! │  ───────────────────────────                                           │
//! │  • Gratuity already folded into item prices                            │
//! │  • tip = 0, whatever `value` says                                      │
//! │                                                                         │
//! │  mode = Percentage                                                     │
//! │  ─────────────────                                                     │
//! │  • tip = subtotal × value / 100                                        │
//! │                                                                         │
//! │  mode = Fixed                                                          │
//! │  ────────────                                                          │
//! │  • tip = value (currency amount)                                       │
//! │                                                                         │
//! │  Switching mode keeps `value` as entered: "15" is 15% or $15.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Amount;

// =============================================================================
// Tip Mode
// =============================================================================

/// How `TipPolicy::value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TipMode {
    /// `value` is a percentage of the subtotal.
    #[default]
    Percentage,

    /// `value` is a currency amount.
    Fixed,
}

impl fmt::Display for TipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipMode::Percentage => write!(f, "percentage"),
            TipMode::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for TipMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage" | "percent" | "%" => Ok(TipMode::Percentage),
            "fixed" | "amount" => Ok(TipMode::Fixed),
            _ => Err(ValidationError::NotAllowed {
                field: "tip mode".to_string(),
                allowed: vec!["percentage".to_string(), "fixed".to_string()],
            }),
        }
    }
}

// =============================================================================
// Tip Policy
// =============================================================================

/// Gratuity configuration for one split.
///
/// ## Invariant
/// `value` is always finite and >= 0. Construct through [`TipPolicy::new`]
/// or [`TipPolicy::from_input`]; deserialized values are sanitized by the
/// engine through [`TipPolicy::value`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TipPolicy {
    /// Interpretation of `value`.
    #[serde(default)]
    pub mode: TipMode,

    /// Prices already include gratuity; no extra tip is computed.
    #[serde(default)]
    pub included_in_subtotal: bool,

    /// Percentage or currency amount, depending on `mode`.
    #[serde(default)]
    value: f64,
}

impl Default for TipPolicy {
    /// No tip: 0%.
    fn default() -> Self {
        TipPolicy::new(TipMode::Percentage, 0.0)
    }
}

impl TipPolicy {
    /// Creates a tip added on top of the subtotal.
    ///
    /// Non-finite and negative values become `0`.
    pub fn new(mode: TipMode, value: f64) -> Self {
        TipPolicy {
            mode,
            included_in_subtotal: false,
            value: sanitize(value),
        }
    }

    /// Percentage tip on top of the subtotal.
    pub fn percentage(value: f64) -> Self {
        TipPolicy::new(TipMode::Percentage, value)
    }

    /// Fixed-amount tip on top of the subtotal.
    pub fn fixed(value: f64) -> Self {
        TipPolicy::new(TipMode::Fixed, value)
    }

    /// Gratuity already included in prices.
    pub fn included() -> Self {
        TipPolicy {
            included_in_subtotal: true,
            ..TipPolicy::default()
        }
    }

    /// Builds a policy from the raw text of the tip field.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::tip::{TipMode, TipPolicy};
    ///
    /// assert_eq!(TipPolicy::from_input(TipMode::Percentage, "18").value(), 18.0);
    /// assert_eq!(TipPolicy::from_input(TipMode::Fixed, "").value(), 0.0);
    /// assert_eq!(TipPolicy::from_input(TipMode::Fixed, "lots").value(), 0.0);
    /// ```
    pub fn from_input(mode: TipMode, text: &str) -> Self {
        TipPolicy::new(mode, TipPolicy::parse_value(text))
    }

    /// Parses tip field text. Never fails: anything unusable is `0`.
    pub fn parse_value(text: &str) -> f64 {
        text.trim().parse::<f64>().map(sanitize).unwrap_or(0.0)
    }

    /// Returns the sanitized tip value.
    pub fn value(&self) -> f64 {
        sanitize(self.value)
    }

    /// Replaces the value, sanitizing it.
    pub fn set_value(&mut self, value: f64) {
        self.value = sanitize(value);
    }

    /// Switches the mode. The value is NOT rescaled.
    pub fn with_mode(self, mode: TipMode) -> Self {
        TipPolicy { mode, ..self }
    }

    /// Marks the gratuity as included in (or added on top of) the prices.
    pub fn with_included(self, included_in_subtotal: bool) -> Self {
        TipPolicy {
            included_in_subtotal,
            ..self
        }
    }

    /// Computes the tip owed on top of `subtotal`.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Amount;
    /// use tabsplit_core::tip::TipPolicy;
    ///
    /// let subtotal = Amount::new(100.0);
    /// assert_eq!(TipPolicy::percentage(15.0).tip_for(subtotal).value(), 15.0);
    /// assert_eq!(TipPolicy::fixed(5.0).tip_for(subtotal).value(), 5.0);
    /// assert_eq!(TipPolicy::included().tip_for(subtotal).value(), 0.0);
    /// ```
    pub fn tip_for(&self, subtotal: Amount) -> Amount {
        if self.included_in_subtotal {
            return Amount::ZERO;
        }

        match self.mode {
            TipMode::Percentage => subtotal * (self.value() / 100.0),
            TipMode::Fixed => Amount::new(self.value()),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
