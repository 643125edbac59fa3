use std::collections::HashSet;

use crate::condition::ConditionTier;
use crate::listing_parser::{parse_listing, ParsedListing};

/// Which market price the survey is reading for each edition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceChannel {
    Minimum,
    Average,
}

impl PriceChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceChannel::Minimum => "MIN",
            PriceChannel::Average => "AVG",
        }
    }
}

/// One price sample for one printing of a card. Zero or negative means the
/// edition is not for sale.
#[derive(Debug, Clone, PartialEq)]
pub struct EditionPriceObservation {
    pub edition: String,
    pub price: f64,
}

impl EditionPriceObservation {
    pub fn new(edition: impl Into<String>, price: f64) -> Self {
        Self {
            edition: edition.into(),
            price,
        }
    }
}

/// Market-wide prices for a card across all of its editions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSurvey {
    pub minimum_price: f64,
    pub average_price: f64,
}

/// A store listing as the page presents it, before eligibility is known
#[derive(Debug, Clone, PartialEq)]
pub struct StoreListing {
    pub store_identity: String,
    pub quality: ConditionTier,
    pub language: String,
}

/// A store listing with its presentation position and directory status
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOfferSummary {
    /// Zero-based index in the page's presentation order
    pub position: usize,
    pub store_identity: String,
    pub quality: ConditionTier,
    pub language: String,
    pub is_known_store: bool,
}

/// Raw text of one inventory row at a store, plus the language shown next to it
#[derive(Debug, Clone, PartialEq)]
pub struct RawStoreRow {
    pub text: String,
    pub language: String,
}

impl RawStoreRow {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}

/// A store row with its parsed fields
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRowListing {
    pub text: String,
    pub language: String,
    pub parsed: ParsedListing,
}

impl From<RawStoreRow> for StoreRowListing {
    fn from(row: RawStoreRow) -> Self {
        let parsed = parse_listing(&row.text);
        Self {
            text: row.text,
            language: row.language,
            parsed,
        }
    }
}

/// Cheapest qualifying price at a store and the stock available at that price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestOffer {
    pub unit_price: f64,
    pub total_stock: u32,
}

/// Accepted language codes, compared trimmed and upper-cased
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageSet {
    codes: HashSet<String>,
}

impl LanguageSet {
    /// Parse a comma-separated list (e.g., "EN,pt, jp")
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    pub fn contains(&self, language: &str) -> bool {
        self.codes.contains(&language.trim().to_uppercase())
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}

impl<'a> FromIterator<&'a str> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let codes = iter
            .into_iter()
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .collect();
        Self { codes }
    }
}
