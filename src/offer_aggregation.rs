use log::debug;

use crate::config::SearchConfig;
use crate::models::{BestOffer, StoreRowListing};

/// Price and stock of a row that passes every filter, or `None`.
fn qualifying(row: &StoreRowListing, config: &SearchConfig) -> Option<(f64, u32)> {
    let quality = row.parsed.quality?;
    let price = row.parsed.unit_price?;
    let stock = row.parsed.stock?;

    if !config.accepts_language(&row.language)
        || !config.accepts_condition(quality)
        || stock == 0
    {
        return None;
    }
    Some((price, stock))
}

/// Cheapest qualifying price in a store's rows, with the stock summed over
/// every qualifying row at exactly that price.
///
/// Rows are scanned in page order. A strictly cheaper row resets the stock
/// total, and rows above the running best never contribute.
pub fn best_offer<I>(rows: I, config: &SearchConfig) -> Option<BestOffer>
where
    I: IntoIterator<Item = StoreRowListing>,
{
    let mut best_price = f64::INFINITY;
    let mut total_stock: u32 = 0;

    for row in rows {
        let Some((price, stock)) = qualifying(&row, config) else {
            debug!("Skipping row {:?} ({})", row.text, row.language);
            continue;
        };

        if price < best_price {
            total_stock = 0;
            best_price = price;
        }
        if price <= best_price {
            total_stock = total_stock.saturating_add(stock);
        }
    }

    if best_price.is_infinite() {
        return None;
    }
    Some(BestOffer {
        unit_price: best_price,
        total_stock,
    })
}
