//! # Bill Files
//!
//! A bill file is the CLI's stand-in for the app's input screens: the
//! people at the table, the receipt lines and who shared what.
//!
//! ```json
//! {
//!   "people": ["Alice", "Bob"],
//!   "items": [
//!     { "name": "Pizza", "price": 13.99, "sharedBy": ["Alice"] },
//!     { "name": "Wine",  "price": "34.99", "sharedBy": ["Alice", "Bob"] },
//!     { "name": "Bread", "price": 4.5, "sharedBy": ["*"] }
//!   ],
//!   "tip": { "mode": "percentage", "value": 15 }
//! }
//! ```
//!
//! `"*"` in `sharedBy` means everyone. The same shape is accepted as TOML.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tabsplit_core::{ReceiptStore, TipPolicy};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// `sharedBy` entry meaning every person in the bill.
pub const EVERYONE: &str = "*";

/// Price as written in the file: a number, or the text a user would type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub name: String,
    pub price: PriceInput,

    /// Names from `people`, or `"*"`.
    #[serde(default, alias = "shared_by")]
    pub shared_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BillFile {
    #[serde(default)]
    pub people: Vec<String>,

    #[serde(default)]
    pub items: Vec<BillItem>,

    /// Overrides the configured default tip.
    #[serde(default)]
    pub tip: Option<TipPolicy>,
}

impl BillFile {
    /// Reads a `.json` or `.toml` bill.
    pub fn load(path: &Path) -> CliResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let bill: BillFile = match extension.as_deref() {
            Some("json") => serde_json::from_str(&contents).map_err(|source| CliError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            Some("toml") => toml::from_str(&contents).map_err(|source| CliError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(
            path = %path.display(),
            people = bill.people.len(),
            items = bill.items.len(),
            "bill loaded"
        );
        Ok(bill)
    }

    /// Replays the bill through the store's mutation API.
    ///
    /// ## Errors
    /// - blank or duplicate person names
    /// - items the store rejects (blank name, bad price)
    /// - `sharedBy` names that are not in `people`
    pub fn to_store(&self) -> CliResult<ReceiptStore> {
        let mut store = ReceiptStore::new();
        let mut ids_by_name: HashMap<String, String> = HashMap::new();

        for name in &self.people {
            let id = store
                .add_person(name)
                .map_err(|source| CliError::InvalidEntry {
                    entry: name.clone(),
                    source,
                })?;
            let key = name.trim().to_string();
            if ids_by_name.insert(key.clone(), id).is_some() {
                return Err(CliError::DuplicatePerson(key));
            }
        }

        for item in &self.items {
            let added = match &item.price {
                PriceInput::Number(price) => store.add_item_with_price(&item.name, *price),
                PriceInput::Text(text) => store.add_item(&item.name, text),
            };
            let item_id = added.map_err(|source| CliError::InvalidEntry {
                entry: item.name.clone(),
                source,
            })?;

            for sharer in &item.shared_by {
                let sharer = sharer.trim();
                if sharer == EVERYONE {
                    store.assign_all(&item_id)?;
                    continue;
                }
                let person_id =
                    ids_by_name
                        .get(sharer)
                        .ok_or_else(|| CliError::UnknownPerson {
                            item: item.name.clone(),
                            person: sharer.to_string(),
                        })?;
                store.assign(&item_id, person_id)?;
            }
            debug!(item = %item.name, sharers = item.shared_by.len(), "bill item replayed");
        }

        Ok(store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
