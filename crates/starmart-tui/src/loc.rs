//! English display strings behind the core's `Localizer` seam.
//!
//! The engine only ever hands us keys; the mapping to user-facing text
//! (and the currency formatting baked into amount strings) lives here.

use starmart_core::Localizer;
use starmart_core::localize;

use crate::widgets::price_fmt;

/// Built-in English string table.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Localizer for English {
    fn localize(&self, key: &str) -> String {
        match key {
            localize::OUT_OF_STOCK => "Out of stock.".to_owned(),
            localize::CATEGORY_ALL => "All".to_owned(),
            localize::LISTING_FREE => "FREE".to_owned(),
            // Category keys double as display strings; unknown keys echo
            // through so missing table entries degrade visibly, not fatally.
            other => other.to_owned(),
        }
    }

    fn localize_amount(&self, key: &str, amount: u64) -> String {
        match key {
            localize::LISTING_AMOUNT => price_fmt::fmt_price(amount),
            localize::BALANCE_AMOUNT => {
                format!("Balance: {}", price_fmt::fmt_price(amount))
            }
            other => format!("{other}: {amount}"),
        }
    }
}
