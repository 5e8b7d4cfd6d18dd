//! # Error Types
//!
//! Domain-specific error types for tabsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabsplit-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Rejected user input (name, price, tip)         │
//! │                                                                         │
//! │  tabsplit CLI errors (separate crate)                                  │
//! │  └── CliError         - Config, bill file and I/O failures             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The split engine never fails. Assignment entries that point at a
//! removed item or person are pruned by the store, and anything that still
//! slips through is treated as "nobody assigned" by the engine.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Person id is not part of the current receipt.
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Item id is not part of the current receipt.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// A validation error means the requested mutation was NOT applied. The
/// caller keeps its input field as typed so the user can correct it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Text could not be read as a number.
    #[error("{field} is not a number: '{input}'")]
    InvalidNumber { field: String, input: String },

    /// Value parsed but is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
