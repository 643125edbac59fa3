use log::debug;

use crate::config::SearchConfig;
use crate::models::{StoreListing, StoreOfferSummary};
use crate::store_directory::StoreDirectory;

/// Attach presentation positions and directory status to the page's listings.
pub fn summarize<I>(listings: I, directory: &StoreDirectory) -> Vec<StoreOfferSummary>
where
    I: IntoIterator<Item = StoreListing>,
{
    listings
        .into_iter()
        .enumerate()
        .map(|(position, listing)| StoreOfferSummary {
            position,
            is_known_store: directory.is_known(&listing.store_identity),
            store_identity: listing.store_identity,
            quality: listing.quality,
            language: listing.language,
        })
        .collect()
}

pub fn is_eligible(summary: &StoreOfferSummary, config: &SearchConfig) -> bool {
    summary.is_known_store
        && config.accepts_language(&summary.language)
        && config.accepts_condition(summary.quality)
}

/// First eligible summary in presentation order. Later summaries are never
/// considered once one matches, even if they look cheaper.
pub fn first_eligible<I>(summaries: I, config: &SearchConfig) -> Option<StoreOfferSummary>
where
    I: IntoIterator<Item = StoreOfferSummary>,
{
    summaries.into_iter().find(|summary| {
        let eligible = is_eligible(summary, config);
        if !eligible {
            debug!(
                "Skipping store #{} {} ({} / {}): known={}",
                summary.position,
                summary.store_identity,
                summary.quality,
                summary.language,
                summary.is_known_store
            );
        }
        eligible
    })
}

/// Pick the store to buy from for one card.
pub fn select_store<I>(
    listings: I,
    config: &SearchConfig,
    directory: &StoreDirectory,
) -> Option<StoreOfferSummary>
where
    I: IntoIterator<Item = StoreListing>,
{
    first_eligible(summarize(listings, directory), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionTier;
    use crate::store_directory::StoreEntry;

    fn listing(store: &str, quality: ConditionTier, language: &str) -> StoreListing {
        StoreListing {
            store_identity: store.to_string(),
            quality,
            language: language.to_string(),
        }
    }

    fn directory(names: &[&str]) -> StoreDirectory {
        StoreDirectory::from_entries(names.iter().map(|name| StoreEntry {
            name: name.to_string(),
            url: String::new(),
            discount_fraction: 0.0,
        }))
    }

    fn config() -> SearchConfig {
        SearchConfig::new("SP", "EN,PT", None).unwrap()
    }

    #[test]
    fn test_returns_first_eligible_with_page_position() {
        let listings = vec![
            listing("UNKNOWN", ConditionTier::NearMint, "EN"),
            listing("LOJA A", ConditionTier::HeavilyPlayed, "EN"),
            listing("LOJA A", ConditionTier::NearMint, "DE"),
            listing("LOJA B", ConditionTier::SlightlyPlayed, "PT"),
            listing("LOJA A", ConditionTier::Mint, "EN"),
        ];
        let dir = directory(&["LOJA A", "LOJA B"]);
        let selected = select_store(listings, &config(), &dir).unwrap();
        assert_eq!(selected.position, 3);
        assert_eq!(selected.store_identity, "LOJA B");
        assert_eq!(selected.quality, ConditionTier::SlightlyPlayed);
        assert!(selected.is_known_store);
    }

    #[test]
    fn test_boundary_condition_is_eligible() {
        let listings = vec![listing("LOJA A", ConditionTier::SlightlyPlayed, "EN")];
        let selected = select_store(listings, &config(), &directory(&["LOJA A"]));
        assert_eq!(selected.map(|s| s.position), Some(0));
    }

    #[test]
    fn test_no_eligible_store() {
        let listings = vec![
            listing("LOJA A", ConditionTier::Damaged, "EN"),
            listing("LOJA C", ConditionTier::NearMint, "EN"),
        ];
        assert!(select_store(listings, &config(), &directory(&["LOJA A"])).is_none());
        assert!(select_store(Vec::new(), &config(), &directory(&["LOJA A"])).is_none());
    }

    #[test]
    fn test_summarize_marks_known_stores() {
        let listings = vec![
            listing("LOJA A", ConditionTier::NearMint, "EN"),
            listing("LOJA Z", ConditionTier::NearMint, "EN"),
        ];
        let dir = directory(&["loja a"]);
        let summaries = summarize(listings, &dir);
        assert_eq!(summaries[0].position, 0);
        assert!(summaries[0].is_known_store);
        assert_eq!(summaries[1].position, 1);
        assert!(!summaries[1].is_known_store);
    }
}
