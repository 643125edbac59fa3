//! Page data sources feeding the offer pipeline.
//!
//! The pipeline never looks at markup or navigation. It only consumes the
//! three sequences a [`PageDataSource`] hands out. Polling, retries and
//! browser state all live behind this trait.

pub mod snapshot;

pub use snapshot::SnapshotSource;

use crate::error::Result;
use crate::models::{EditionPriceObservation, PriceChannel, RawStoreRow, StoreListing};
use crate::store_directory::StoreEntry;

/// Access to the marketplace pages of one card.
pub trait PageDataSource {
    /// Price per edition of the card on the given channel.
    ///
    /// The iterator ends when editions run out. An empty iterator means the
    /// card has no edition list.
    fn edition_prices(
        &mut self,
        card_name: &str,
        channel: PriceChannel,
    ) -> Result<Box<dyn Iterator<Item = EditionPriceObservation>>>;

    /// Single price read straight off the card page, for cards without an
    /// edition list.
    fn direct_price(
        &mut self,
        card_name: &str,
        channel: PriceChannel,
    ) -> Result<Option<EditionPriceObservation>>;

    /// Store listings for the card in the order the page presents them.
    fn store_offers(&mut self, card_name: &str) -> Result<Vec<StoreListing>>;

    /// Inventory rows for the card at one store, in page order.
    fn store_rows(&mut self, card_name: &str, store: &StoreEntry) -> Result<Vec<RawStoreRow>>;
}
