//! # CLI Error Type
//!
//! Everything that can stop a `tabsplit` run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in tabsplit                               │
//! │                                                                         │
//! │  config file ──► toml::de::Error ──────┐                               │
//! │  bill file ────► io / json / toml ─────┼──► CliError ──► stderr, exit 1│
//! │  bill content ─► ValidationError ──────┤                               │
//! │                  unknown diner name ───┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bill file is not an input field the user is still typing into, so a
//! rejected item is reported instead of being silently skipped.

use std::path::PathBuf;

use tabsplit_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is neither `.json` nor `.toml`.
    #[error("Unsupported bill format for {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Two diners with the same name make `sharedBy` ambiguous.
    #[error("Duplicate person name in bill: {0}")]
    DuplicatePerson(String),

    /// An item's `sharedBy` names somebody not in `people`.
    #[error("Item '{item}' is shared by unknown person '{person}'")]
    UnknownPerson { item: String, person: String },

    /// An item or person in the bill was rejected.
    #[error("Invalid entry '{entry}' in bill: {source}")]
    InvalidEntry {
        entry: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing JSON output failed.
    #[error("Cannot serialize breakdown: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
