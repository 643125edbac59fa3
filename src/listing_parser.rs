//! Field extraction for store listing rows.
//!
//! A store row arrives as one free-text blob, usually shaped like
//! `"MP\n-\n0 unid. R$ 3,00\nAvise quando chegar."`. Each extractor is
//! independent and returns `None` instead of failing, so one malformed row
//! never aborts a scan.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::condition::ConditionTier;

lazy_static! {
    static ref QUALITY_RE: Regex = Regex::new(r"^[^A-Za-z0-9]*([A-Z]+)").unwrap();
    static ref STOCK_RE: Regex = Regex::new(r"\d+").unwrap();
    static ref PRICE_RE: Regex = Regex::new(r"R\$ \d+(?:\.\d+)*,\d{2}").unwrap();
}

/// Structured fields pulled from one listing row
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParsedListing {
    pub quality: Option<ConditionTier>,
    pub unit_price: Option<f64>,
    pub stock: Option<u32>,
}

/// Parses all fields of a listing row at once.
pub fn parse_listing(text: &str) -> ParsedListing {
    let parsed = ParsedListing {
        quality: parse_quality(text),
        unit_price: parse_unit_price(text),
        stock: parse_stock(text),
    };
    debug!("Parsed listing {text:?} -> {parsed:?}");
    parsed
}

/// Extracts the condition from the leading run of uppercase letters.
///
/// Quotes or whitespace in front of the run are skipped. A run that is not a
/// known condition label yields `None`.
pub fn parse_quality(text: &str) -> Option<ConditionTier> {
    let label = QUALITY_RE.captures(text)?.get(1)?.as_str();
    ConditionTier::from_label(label).ok()
}

/// Extracts the first run of decimal digits as the stock count.
pub fn parse_stock(text: &str) -> Option<u32> {
    STOCK_RE.find(text)?.as_str().parse().ok()
}

/// Extracts the first `R$ 1.234,56` price in the text.
pub fn parse_unit_price(text: &str) -> Option<f64> {
    strip_price(PRICE_RE.find(text)?.as_str())
}

/// Converts a Brazilian-formatted price string ("R$ 1.234,56" or "5,50") to f64.
pub fn strip_price(price_text: &str) -> Option<f64> {
    price_text
        .replace("R$ ", "")
        .replace('.', "")
        .replace(',', ".")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

#[cfg(test)]
#[path = "listing_parser_tests.rs"]
mod tests;
