//! Error types for liga_offers

use thiserror::Error;

/// Unified error type for offer discovery operations
#[derive(Debug, Error)]
pub enum OfferError {
    /// Condition label or rank outside the known scale
    #[error("Unknown card condition '{value}'. Accepted conditions: {}", accepted.join(", "))]
    InvalidCondition {
        value: String,
        accepted: Vec<String>,
    },
    /// Market survey found no usable price for the card
    #[error("No price found for card: {0}")]
    NoPriceFound(String),
    /// Page data source could not provide the requested data
    #[error("Page data unavailable: {0}")]
    SourceUnavailable(String),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to parse a JSON document
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for liga_offers operations
pub type Result<T> = std::result::Result<T, OfferError>;
