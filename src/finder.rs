//! Per-card pipeline: market survey, store selection, offer aggregation and
//! report, one card at a time.

use log::{error, info, warn};

use crate::config::SearchConfig;
use crate::error::{OfferError, Result};
use crate::io::ReportSink;
use crate::models::{MarketSurvey, PriceChannel, StoreRowListing};
use crate::offer_aggregation::best_offer;
use crate::price_survey::survey_channel;
use crate::report::{CardReport, MatchedOffer, ReportStatus};
use crate::source::PageDataSource;
use crate::store_directory::StoreDirectory;
use crate::store_selection::select_store;

/// Counts of report outcomes for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub found: usize,
    pub not_found: usize,
    pub too_expensive: usize,
    pub no_price: usize,
    pub unavailable: usize,
}

impl RunSummary {
    fn record(&mut self, status: ReportStatus) {
        match status {
            ReportStatus::Found => self.found += 1,
            ReportStatus::NotFound => self.not_found += 1,
            ReportStatus::TooExpensive => self.too_expensive += 1,
            ReportStatus::NoPrice => self.no_price += 1,
            ReportStatus::Unavailable => self.unavailable += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.found + self.not_found + self.too_expensive + self.no_price + self.unavailable
    }
}

pub struct OfferFinder {
    config: SearchConfig,
    directory: StoreDirectory,
}

impl OfferFinder {
    pub fn new(config: SearchConfig, directory: StoreDirectory) -> Self {
        Self { config, directory }
    }

    /// Resolve one card into its report.
    ///
    /// A card without any usable market price still yields a report. Errors
    /// from the page data source are returned as-is.
    pub fn find_card<S: PageDataSource + ?Sized>(
        &self,
        source: &mut S,
        card_name: &str,
    ) -> Result<CardReport> {
        let minimum = survey_channel(source, card_name, PriceChannel::Minimum);
        let Some(minimum_price) = surveyed(minimum)? else {
            warn!("No market price found for {card_name}");
            return Ok(CardReport::no_price(card_name));
        };

        if self.config.exceeds_ceiling(minimum_price) {
            warn!("{card_name} is too expensive (minimum {minimum_price:.2})");
            return Ok(CardReport::too_expensive(card_name, minimum_price));
        }

        let average = survey_channel(source, card_name, PriceChannel::Average);
        let Some(average_price) = surveyed(average)? else {
            warn!("No average market price found for {card_name}");
            return Ok(CardReport::no_price(card_name));
        };

        let survey = MarketSurvey {
            minimum_price,
            average_price,
        };
        let matched = self.find_offer(source, card_name)?;
        if matched.is_none() {
            warn!("Card not found at any eligible store: {card_name}");
        }

        Ok(CardReport::build(card_name, &survey, matched.as_ref()))
    }

    /// First eligible store and its best offer, if any row there qualifies.
    pub fn find_offer<S: PageDataSource + ?Sized>(
        &self,
        source: &mut S,
        card_name: &str,
    ) -> Result<Option<MatchedOffer>> {
        let listings = source.store_offers(card_name)?;
        let Some(summary) = select_store(listings, &self.config, &self.directory) else {
            return Ok(None);
        };
        let Some(entry) = self.directory.lookup(&summary.store_identity) else {
            return Ok(None);
        };
        info!(
            "Selected store {} at position {} ({}, {})",
            entry.name, summary.position, summary.quality, summary.language
        );

        let rows = source.store_rows(card_name, entry)?;
        let rows = rows.into_iter().map(StoreRowListing::from);
        let Some(offer) = best_offer(rows, &self.config) else {
            warn!("Store {} has no acceptable row for {card_name}", entry.name);
            return Ok(None);
        };

        Ok(Some(MatchedOffer {
            summary,
            offer,
            discount_fraction: entry.discount_fraction,
        }))
    }

    /// Process every card in order, writing each report as soon as it is built.
    ///
    /// On a fatal error the failing card still gets a row before the run stops.
    pub fn run<S, W>(&self, cards: &[String], source: &mut S, sink: &mut W) -> Result<RunSummary>
    where
        S: PageDataSource + ?Sized,
        W: ReportSink + ?Sized,
    {
        let mut summary = RunSummary::default();

        for (i, card_name) in cards.iter().enumerate() {
            info!("Searching card {}/{}: {card_name}", i + 1, cards.len());

            match self.find_card(source, card_name) {
                Ok(report) => {
                    sink.write(&report)?;
                    summary.record(report.status);
                }
                Err(e) => {
                    error!("Aborting at {card_name}: {e}");
                    sink.write(&CardReport::unavailable(card_name))?;
                    return Err(e);
                }
            }
        }

        info!(
            "Processed {} cards: {} found, {} not found, {} too expensive, {} without price",
            summary.total(),
            summary.found,
            summary.not_found,
            summary.too_expensive,
            summary.no_price
        );
        Ok(summary)
    }
}

/// Turns `NoPriceFound` into `None` and passes other errors through.
fn surveyed(result: Result<f64>) -> Result<Option<f64>> {
    match result {
        Ok(price) => Ok(Some(price)),
        Err(OfferError::NoPriceFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
