pub mod condition;
pub mod config;
pub mod error;
pub mod finder;
pub mod io;
pub mod listing_parser;
pub mod models;
pub mod offer_aggregation;
pub mod price_survey;
pub mod report;
pub mod source;
pub mod store_directory;
pub mod store_selection;

// Re-export commonly used items
pub use condition::{is_acceptable, label_of, rank_of, ConditionTier};
pub use config::SearchConfig;
pub use error::{OfferError, Result};
pub use finder::{OfferFinder, RunSummary};
pub use io::{read_cardlist, ReportSink, ReportWriter};
pub use listing_parser::{parse_listing, strip_price, ParsedListing};
pub use models::{
    BestOffer, EditionPriceObservation, LanguageSet, MarketSurvey, PriceChannel, RawStoreRow,
    StoreListing, StoreOfferSummary, StoreRowListing,
};
pub use offer_aggregation::best_offer;
pub use price_survey::{lowest_price, survey_market};
pub use report::{CardReport, MatchedOffer, ReportStatus};
pub use source::{PageDataSource, SnapshotSource};
pub use store_directory::{StoreDirectory, StoreEntry};
pub use store_selection::select_store;
