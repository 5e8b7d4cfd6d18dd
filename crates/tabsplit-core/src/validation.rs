//! # Validation Module
//!
//! Input validation for everything a diner types into the app.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input field (frontend / bill file)                           │
//! │  └── raw text: "  Garlic Bread ", "7.99", ""                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── names: trimmed, must not be blank                                 │
//! │  └── prices: finite, >= 0                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ReceiptStore                                                 │
//! │  └── only validated values are ever stored                            │
//! │                                                                         │
//! │  On error nothing is stored and the field keeps what the user typed.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tip input is deliberately NOT validated here: it never fails, see
//! [`crate::tip::TipPolicy::parse_value`].

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a person's name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use tabsplit_core::validation::validate_person_name;
///
/// assert_eq!(validate_person_name("  Alice ").unwrap(), "Alice");
/// assert!(validate_person_name("   ").is_err());
/// ```
pub fn validate_person_name(name: &str) -> ValidationResult<String> {
    required("name", name)
}

/// Validates a receipt item name and returns it trimmed.
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    required("item name", name)
}

fn required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Parses price text typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must not be blank
/// - Must parse as a number, be finite and be >= 0
/// - Zero is allowed (comped items)
///
/// ## Example
/// ```rust
/// use tabsplit_core::validation::parse_price;
///
/// assert_eq!(parse_price(" 13.99 ").unwrap(), 13.99);
/// assert_eq!(parse_price("0").unwrap(), 0.0);
/// assert!(parse_price("").is_err());
/// assert!(parse_price("twelve").is_err());
/// assert!(parse_price("-1").is_err());
/// ```
pub fn parse_price(text: &str) -> ValidationResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field: "price".to_string(),
            input: trimmed.to_string(),
        })?;

    validate_price(price)?;
    Ok(price)
}

/// Validates an already-numeric price.
///
/// ## Example
/// ```rust
/// use tabsplit_core::validation::validate_price;
///
/// assert!(validate_price(4.5).is_ok());
/// assert!(validate_price(f64::NAN).is_err());
/// assert!(validate_price(-0.01).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_person_name() {
        assert_eq!(validate_person_name("Bob").unwrap(), "Bob");
        assert_eq!(validate_person_name("\tDerik\n").unwrap(), "Derik");
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name(" \t ").is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert_eq!(
            validate_item_name(" Espresso ").unwrap(),
            "Espresso".to_string()
        );
        assert_eq!(
            validate_item_name("").unwrap_err(),
            ValidationError::Required {
                field: "item name".to_string()
            }
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("34.99").unwrap(), 34.99);
        assert_eq!(parse_price("3").unwrap(), 3.0);
        assert_eq!(parse_price(" 4.5 ").unwrap(), 4.5);
        assert_eq!(parse_price("0.00").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_price_rejections() {
        assert!(matches!(
            parse_price("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_price("12,50"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_price("$5"),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_price("inf"),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_price("NaN"),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_price("-2.50"),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
    }
}
