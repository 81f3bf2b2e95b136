// ── Localization seam ──
//
// The engine never hardcodes display strings; it asks an injected
// Localizer. Keys live here so both storefront panels and the front-end
// agree on them. The lookup itself is an opaque pure function.

/// Key → display-string lookup, injected into the panels.
pub trait Localizer {
    /// Resolve a bare key to its display string.
    fn localize(&self, key: &str) -> String;

    /// Resolve a key that interpolates a single amount.
    fn localize_amount(&self, key: &str, amount: u64) -> String;
}

/// Sentinel row text when a storefront has nothing loaded at all.
pub const OUT_OF_STOCK: &str = "storefront-out-of-stock";

/// Synthetic category at index 0 that clears the category filter.
pub const CATEGORY_ALL: &str = "storefront-category-all";

/// Shipyard price label when listings are free of charge.
pub const LISTING_FREE: &str = "shipyard-listing-free";

/// Shipyard price label interpolating a credit amount.
pub const LISTING_AMOUNT: &str = "shipyard-listing-amount";

/// Wallet balance label interpolating a credit amount.
pub const BALANCE_AMOUNT: &str = "storefront-balance-amount";

/// Identity-less localizer that echoes keys back. Useful in tests and as
/// a last-resort fallback; real front-ends supply a proper table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Localizer for KeyEcho {
    fn localize(&self, key: &str) -> String {
        key.to_owned()
    }

    fn localize_amount(&self, key: &str, amount: u64) -> String {
        format!("{key}: {amount}")
    }
}
