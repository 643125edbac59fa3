use serde::Serialize;

use crate::models::{BestOffer, MarketSurvey, StoreOfferSummary};

/// How a card's search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Found,
    NotFound,
    TooExpensive,
    NoPrice,
    Unavailable,
}

/// One output row. Field order is the column order of the output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardReport {
    pub card_name: String,
    pub store_name: Option<String>,
    pub card_quality: Option<String>,
    pub stock: u32,
    /// Position of the chosen store in the card page's store list
    pub cheaper_cards_amount: Option<usize>,
    pub min_value: Option<f64>,
    pub avg_value: Option<f64>,
    pub store_value: Option<f64>,
    pub premium_discount_on_min_value: f64,
    pub premium_discount_on_avg_value: f64,
    pub discounted_store_value: Option<f64>,
    pub status: ReportStatus,
}

/// The chosen store and what it offers
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedOffer {
    pub summary: StoreOfferSummary,
    pub offer: BestOffer,
    pub discount_fraction: f64,
}

/// Strip commas and line breaks so the name is safe as a CSV cell.
pub fn display_name(raw_card_line: &str) -> String {
    raw_card_line
        .chars()
        .filter(|&c| !matches!(c, ',' | '\n' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

impl CardReport {
    fn empty(raw_card_line: &str, status: ReportStatus) -> Self {
        Self {
            card_name: display_name(raw_card_line),
            store_name: None,
            card_quality: None,
            stock: 0,
            cheaper_cards_amount: None,
            min_value: None,
            avg_value: None,
            store_value: None,
            premium_discount_on_min_value: 0.0,
            premium_discount_on_avg_value: 0.0,
            discounted_store_value: None,
            status,
        }
    }

    /// Compose the report for a fully surveyed card.
    ///
    /// Without a match the offer fields stay empty and both ratios are 0.
    pub fn build(raw_card_line: &str, survey: &MarketSurvey, matched: Option<&MatchedOffer>) -> Self {
        let mut report = Self::empty(raw_card_line, ReportStatus::NotFound);
        report.min_value = Some(survey.minimum_price);
        report.avg_value = Some(survey.average_price);

        if let Some(matched) = matched {
            let price = matched.offer.unit_price;
            report.store_name = Some(matched.summary.store_identity.clone());
            report.card_quality = Some(matched.summary.quality.label().to_string());
            report.stock = matched.offer.total_stock;
            report.cheaper_cards_amount = Some(matched.summary.position);
            report.store_value = Some(price);
            report.premium_discount_on_min_value = price / survey.minimum_price - 1.0;
            report.premium_discount_on_avg_value = price / survey.average_price - 1.0;
            report.discounted_store_value = Some(price * (1.0 - matched.discount_fraction));
            report.status = ReportStatus::Found;
        }
        report
    }

    /// Market minimum is above the configured ceiling; no store was searched.
    pub fn too_expensive(raw_card_line: &str, minimum_price: f64) -> Self {
        let mut report = Self::empty(raw_card_line, ReportStatus::TooExpensive);
        report.min_value = Some(minimum_price);
        report
    }

    /// No edition of the card had a usable price.
    pub fn no_price(raw_card_line: &str) -> Self {
        Self::empty(raw_card_line, ReportStatus::NoPrice)
    }

    /// The page data source failed for this card.
    pub fn unavailable(raw_card_line: &str) -> Self {
        Self::empty(raw_card_line, ReportStatus::Unavailable)
    }
}
