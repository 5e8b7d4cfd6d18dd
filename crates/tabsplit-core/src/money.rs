//! # Money Module
//!
//! Provides the `Amount` type for monetary values in a split.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SPLITTING IS DIVISION                                                  │
//! │                                                                         │
//! │  A $34.99 bottle shared by 3 people is $11.663333... each.             │
//! │  Rounding each share to cents would make the shares stop summing to    │
//! │  the bill, and rounding again on every recompute would drift.          │
//! │                                                                         │
//! │  OUR APPROACH: f64 all the way through the engine                      │
//! │    • shares stay exact fractions (up to f64 precision)                 │
//! │    • rounding happens ONCE, at formatting time                         │
//! │    • recomputing the same receipt always yields the same numbers      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::money::Amount;
//!
//! let dessert = Amount::new(10.0);
//! let share = dessert / 3;
//! assert_eq!(share.to_string(), "$3.33"); // rounded only for display
//! assert!((share.value() * 3.0 - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul};
use ts_rs::TS;

/// Tolerance used when comparing amounts produced by the engine.
pub const AMOUNT_EPSILON: f64 = 1e-9;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in major currency units (dollars, euros).
///
/// ## Design Decisions
/// - **f64**: shares are fractions of a price, see module docs
/// - **Transparent serde**: serializes as a bare JSON number
/// - **No rounding in arithmetic**: only `Display`/`format` round
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Amount(f64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Amount = Amount(0.0);

    /// Creates an amount from a value in major units.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Compares two amounts within [`AMOUNT_EPSILON`].
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Amount;
    ///
    /// let a = Amount::new(0.1) + Amount::new(0.2);
    /// assert!(a.approx_eq(Amount::new(0.3)));
    /// ```
    #[inline]
    pub fn approx_eq(&self, other: Amount) -> bool {
        (self.0 - other.0).abs() <= AMOUNT_EPSILON
    }

    /// Returns `self * part / whole`, or zero when `whole` is zero.
    ///
    /// This is the proportional allocation used for tip distribution:
    /// a person's tip is `tip_total * owed / total_owed`.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Amount;
    ///
    /// let tip = Amount::new(3.0);
    /// assert_eq!(tip.allocate(Amount::new(20.0), Amount::new(30.0)).value(), 2.0);
    /// assert_eq!(tip.allocate(Amount::new(20.0), Amount::ZERO), Amount::ZERO);
    /// ```
    pub fn allocate(&self, part: Amount, whole: Amount) -> Amount {
        if whole.0 == 0.0 {
            return Amount::ZERO;
        }
        Amount(self.0 * (part.0 / whole.0))
    }

    /// Formats the amount with the given symbol and number of decimals.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Amount;
    ///
    /// assert_eq!(Amount::new(4.5).format("€", 2), "€4.50");
    /// assert_eq!(Amount::new(1234.0).format("¥", 0), "¥1234");
    /// ```
    ///
    /// Exact ties round away from zero: `0.125` is `$0.13`, `2.5` with no
    /// decimals is `3`.
    pub fn format(&self, symbol: &str, decimals: usize) -> String {
        let digits = round_half_up(self.0.abs(), decimals);
        // "-$0.00" for leftovers like -1e-12 reads as a debt
        let shows_nonzero = digits.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let sign = if self.0 < 0.0 && shows_nonzero { "-" } else { "" };
        format!("{sign}{symbol}{digits}")
    }
}

/// Fixed-point text for a non-negative value, ties rounded up.
///
/// `{:.N}` rounds the exact binary value, so only exact ties need care, and
/// those it resolves to even. A value can only sit exactly on a tie if it
/// has at most `decimals + 1` fractional bits.
fn round_half_up(value: f64, decimals: usize) -> String {
    let next = decimals + 1;
    let dyadic = (value * 2f64.powi(next as i32)).fract() == 0.0;
    if dyadic {
        let wide = format!("{value:.next$}");
        if let Some(truncated) = wide.strip_suffix('5') {
            return increment_last_digit(truncated.trim_end_matches('.'));
        }
    }
    format!("{value:.decimals$}")
}

/// Adds one unit in the last place of a decimal string, carrying as needed.
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => continue,
            '9' => *c = '0',
            _ => {
                *c = (*c as u8 + 1) as char;
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as dollars with two decimals.
///
/// ## Note
/// Applications with a configured currency use [`Amount::format`].
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("$", 2))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Division by a head count (splitting a price between assignees).
impl Div<usize> for Amount {
    type Output = Self;

    #[inline]
    fn div(self, count: usize) -> Self {
        Amount(self.0 / count as f64)
    }
}

/// Scaling by a factor (percentage tips).
impl Mul<f64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Amount(self.0 * factor)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + *a)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
