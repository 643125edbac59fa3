use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::condition::ConditionTier;
use crate::error::{OfferError, Result};
use crate::models::{EditionPriceObservation, PriceChannel, RawStoreRow, StoreListing};
use crate::source::PageDataSource;
use crate::store_directory::StoreEntry;

/// Prices shown for one edition of a card
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditionPrices {
    #[serde(default)]
    pub edition: String,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub avg: f64,
}

impl EditionPrices {
    fn observe(&self, channel: PriceChannel) -> EditionPriceObservation {
        let price = match channel {
            PriceChannel::Minimum => self.min,
            PriceChannel::Average => self.avg,
        };
        EditionPriceObservation::new(self.edition.clone(), price)
    }
}

/// One store line on the card page. `quality` is the marketplace condition code.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreLine {
    pub store: String,
    pub quality: u8,
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RowLine {
    pub text: String,
    pub language: String,
}

/// Everything captured from the pages of one card
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CardPage {
    #[serde(default)]
    pub editions: Vec<EditionPrices>,
    pub direct: Option<EditionPrices>,
    #[serde(default)]
    pub stores: Vec<StoreLine>,
    #[serde(default)]
    pub rows: HashMap<String, Vec<RowLine>>,
}

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    cards: HashMap<String, CardPage>,
}

/// Page data source backed by a captured JSON snapshot of the card pages.
#[derive(Debug, Default)]
pub struct SnapshotSource {
    cards: HashMap<String, CardPage>,
}

impl SnapshotSource {
    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading page snapshot from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let source = Self::from_json(&content)?;

        log::info!("Loaded pages for {} cards", source.cards.len());
        Ok(source)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(content)?;
        Ok(Self::from_pages(file.cards))
    }

    pub fn from_pages<I: IntoIterator<Item = (String, CardPage)>>(pages: I) -> Self {
        let cards = pages
            .into_iter()
            .map(|(name, page)| (page_key(&name), page))
            .collect();
        Self { cards }
    }

    fn page(&self, card_name: &str) -> Result<&CardPage> {
        self.cards.get(&page_key(card_name)).ok_or_else(|| {
            OfferError::SourceUnavailable(format!("no page captured for card '{card_name}'"))
        })
    }
}

impl PageDataSource for SnapshotSource {
    fn edition_prices(
        &mut self,
        card_name: &str,
        channel: PriceChannel,
    ) -> Result<Box<dyn Iterator<Item = EditionPriceObservation>>> {
        let observations: Vec<_> = self
            .page(card_name)?
            .editions
            .iter()
            .map(|edition| edition.observe(channel))
            .collect();
        Ok(Box::new(observations.into_iter()))
    }

    fn direct_price(
        &mut self,
        card_name: &str,
        channel: PriceChannel,
    ) -> Result<Option<EditionPriceObservation>> {
        Ok(self
            .page(card_name)?
            .direct
            .as_ref()
            .map(|prices| prices.observe(channel)))
    }

    fn store_offers(&mut self, card_name: &str) -> Result<Vec<StoreListing>> {
        self.page(card_name)?
            .stores
            .iter()
            .map(|line| -> Result<StoreListing> {
                Ok(StoreListing {
                    store_identity: line.store.trim().to_uppercase(),
                    quality: ConditionTier::from_rank(line.quality)?,
                    language: line.language.trim().to_uppercase(),
                })
            })
            .collect()
    }

    fn store_rows(&mut self, card_name: &str, store: &StoreEntry) -> Result<Vec<RawStoreRow>> {
        let page = self.page(card_name)?;
        let rows = page
            .rows
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(store.name.trim()))
            .map(|(_, rows)| rows)
            .ok_or_else(|| {
                OfferError::SourceUnavailable(format!(
                    "no rows captured for '{card_name}' at store {} ({})",
                    store.name, store.url
                ))
            })?;

        Ok(rows
            .iter()
            .map(|row| RawStoreRow::new(row.text.clone(), row.language.trim().to_uppercase()))
            .collect())
    }
}

fn page_key(card_name: &str) -> String {
    card_name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "cards": {
            "Lightning Bolt": {
                "editions": [
                    {"edition": "M10", "min": 2.5, "avg": 4.0},
                    {"edition": "A25", "min": 0.0, "avg": 3.0}
                ],
                "stores": [
                    {"store": "Loja do Mago", "quality": 2, "language": "en"}
                ],
                "rows": {
                    "LOJA DO MAGO": [
                        {"text": "NM\n-\n3 unid. R$ 2,50", "language": "en"}
                    ]
                }
            },
            "Sol Ring": {
                "direct": {"min": 10.0, "avg": 12.0}
            }
        }
    }"#;

    fn store(name: &str) -> StoreEntry {
        StoreEntry {
            name: name.to_string(),
            url: "https://example.com/".to_string(),
            discount_fraction: 0.0,
        }
    }

    #[test]
    fn test_edition_prices_per_channel() {
        let mut source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        let mins: Vec<f64> = source
            .edition_prices("Lightning Bolt", PriceChannel::Minimum)
            .unwrap()
            .map(|o| o.price)
            .collect();
        assert_eq!(mins, vec![2.5, 0.0]);

        let avgs: Vec<f64> = source
            .edition_prices("lightning bolt", PriceChannel::Average)
            .unwrap()
            .map(|o| o.price)
            .collect();
        assert_eq!(avgs, vec![4.0, 3.0]);
    }

    #[test]
    fn test_card_without_editions_has_direct_price() {
        let mut source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        assert_eq!(
            source
                .edition_prices("Sol Ring", PriceChannel::Minimum)
                .unwrap()
                .count(),
            0
        );
        let direct = source
            .direct_price("Sol Ring", PriceChannel::Average)
            .unwrap()
            .unwrap();
        assert_eq!(direct.price, 12.0);
    }

    #[test]
    fn test_store_offers_are_normalized() {
        let mut source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        let offers = source.store_offers("Lightning Bolt").unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].store_identity, "LOJA DO MAGO");
        assert_eq!(offers[0].quality, ConditionTier::NearMint);
        assert_eq!(offers[0].language, "EN");
    }

    #[test]
    fn test_store_offers_with_unknown_quality_code_fail() {
        let mut source = SnapshotSource::from_json(
            r#"{"cards": {"X": {"stores": [{"store": "A", "quality": 9, "language": "EN"}]}}}"#,
        )
        .unwrap();
        assert!(matches!(
            source.store_offers("X"),
            Err(OfferError::InvalidCondition { .. })
        ));
    }

    #[test]
    fn test_store_rows_lookup() {
        let mut source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        let rows = source
            .store_rows("Lightning Bolt", &store("LOJA DO MAGO"))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].language, "EN");

        assert!(matches!(
            source.store_rows("Lightning Bolt", &store("OTHER")),
            Err(OfferError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn test_unknown_card_is_unavailable() {
        let mut source = SnapshotSource::from_json(SNAPSHOT).unwrap();
        assert!(matches!(
            source.store_offers("Black Lotus"),
            Err(OfferError::SourceUnavailable(_))
        ));
    }
}
