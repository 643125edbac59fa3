//! Market price survey across all editions of a card.

use log::debug;

use crate::error::{OfferError, Result};
use crate::models::{EditionPriceObservation, MarketSurvey, PriceChannel};
use crate::source::PageDataSource;

/// Lowest strictly positive price in `observations`.
///
/// When the sequence yields nothing (a card with a single printing has no
/// edition list), `direct` is consulted for one observation instead. Fails
/// with `NoPriceFound` when no positive price turns up either way.
pub fn lowest_price<I, F>(card_name: &str, observations: I, direct: F) -> Result<f64>
where
    I: IntoIterator<Item = EditionPriceObservation>,
    F: FnOnce() -> Result<Option<EditionPriceObservation>>,
{
    let mut lowest = f64::INFINITY;
    let mut seen_any = false;

    for observation in observations {
        seen_any = true;
        lowest = fold_lowest(lowest, &observation);
    }

    if !seen_any {
        debug!("No edition list for '{card_name}', taking a direct observation");
        if let Some(observation) = direct()? {
            lowest = fold_lowest(lowest, &observation);
        }
    }

    if lowest.is_infinite() {
        return Err(OfferError::NoPriceFound(card_name.to_string()));
    }
    Ok(lowest)
}

fn fold_lowest(lowest: f64, observation: &EditionPriceObservation) -> f64 {
    if observation.price > 0.0 && observation.price < lowest {
        debug!(
            "New lowest price {:.2} from edition '{}'",
            observation.price, observation.edition
        );
        observation.price
    } else {
        lowest
    }
}

/// Runs one survey channel against the page data source.
pub fn survey_channel<S: PageDataSource + ?Sized>(
    source: &mut S,
    card_name: &str,
    channel: PriceChannel,
) -> Result<f64> {
    debug!("Surveying {} prices for '{card_name}'", channel.as_str());
    let observations = source.edition_prices(card_name, channel)?;
    lowest_price(card_name, observations, || source.direct_price(card_name, channel))
}

/// Surveys both the minimum and the average channel for a card.
pub fn survey_market<S: PageDataSource + ?Sized>(
    source: &mut S,
    card_name: &str,
) -> Result<MarketSurvey> {
    let minimum_price = survey_channel(source, card_name, PriceChannel::Minimum)?;
    let average_price = survey_channel(source, card_name, PriceChannel::Average)?;
    Ok(MarketSurvey {
        minimum_price,
        average_price,
    })
}
