use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::Result;

/// A store the user is willing to buy from
#[derive(Debug, Clone, PartialEq)]
pub struct StoreEntry {
    /// Canonical (upper-cased) store name as shown on the marketplace
    pub name: String,
    /// Base URL of the store's own site
    pub url: String,
    /// Discount the store grants, as a fraction (0.1 = 10%)
    pub discount_fraction: f64,
}

#[derive(Debug, Deserialize)]
struct StoreRecord {
    name: String,
    #[serde(default)]
    url: String,
    discount: Option<f64>,
}

/// Known stores by upper-cased name
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory {
    entries: HashMap<String, StoreEntry>,
}

impl StoreDirectory {
    /// Load the directory from a `name,url,discount` CSV file.
    ///
    /// `discount` is a percentage; an empty cell means no discount.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading store directory from: {}", path.display());

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let mut entries = Vec::new();
        for result in rdr.deserialize() {
            let record: StoreRecord = result?;
            if record.name.trim().is_empty() {
                continue;
            }
            let discount_percent = record.discount.filter(|d| d.is_finite()).unwrap_or(0.0);
            entries.push(StoreEntry {
                name: normalize_identity(&record.name),
                url: record.url,
                discount_fraction: discount_percent / 100.0,
            });
        }

        let directory = Self::from_entries(entries);
        info!("Loaded {} known stores", directory.len());
        Ok(directory)
    }

    pub fn from_entries<I: IntoIterator<Item = StoreEntry>>(entries: I) -> Self {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                entry.name = normalize_identity(&entry.name);
                (entry.name.clone(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Look up a store by the identity shown on the marketplace
    pub fn lookup(&self, store_identity: &str) -> Option<&StoreEntry> {
        let entry = self.entries.get(&normalize_identity(store_identity));
        if entry.is_none() {
            debug!("Store '{store_identity}' is not in the directory");
        }
        entry
    }

    pub fn is_known(&self, store_identity: &str) -> bool {
        self.entries.contains_key(&normalize_identity(store_identity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_identity(name: &str) -> String {
    name.trim().to_uppercase()
}
