// ── Shipyard panel ──
//
// The category-style storefront: vessels are sorted by name, filtered
// by search or category, and priced from a single stored field. No
// sample cache here -- vessel listings carry their display data
// statically.

use crate::filter::{self, CategoryEntry, FilterState};
use crate::localize::{LISTING_AMOUNT, LISTING_FREE, Localizer};
use crate::model::{KindId, ShipyardState};
use crate::pricing::{self, VesselPrice};

/// One rendered vessel listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselRow {
    pub id: KindId,
    pub name: String,
    pub price_text: String,
    pub tooltip: String,
}

pub struct ShipyardPanel {
    filter: FilterState,
    categories: Vec<CategoryEntry>,
    selected_category: usize,
    rows: Vec<VesselRow>,
}

impl Default for ShipyardPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipyardPanel {
    pub fn new() -> Self {
        Self {
            filter: FilterState::new(),
            categories: Vec::new(),
            selected_category: 0,
            rows: Vec::new(),
        }
    }

    /// Rebuild the category list from the full (unfiltered) listings.
    /// Keeps the current selection when its category survives; otherwise
    /// degrades to "All".
    pub fn populate_categories(&mut self, state: &ShipyardState, loc: &dyn Localizer) {
        self.categories = filter::discover_categories(&state.listings, loc);
        self.filter.sanitize(&self.categories);
        self.selected_category = match self.filter.category() {
            Some(key) => self
                .categories
                .iter()
                .position(|c| c.key.as_deref() == Some(key))
                .unwrap_or(0),
            None => 0,
        };
    }

    /// Select a category by list index. Index 0 (and anything out of
    /// range) clears the filter.
    pub fn select_category(&mut self, index: usize) {
        match self.categories.get(index) {
            Some(entry) if entry.key.is_some() => {
                self.selected_category = index;
                self.filter.set_category(entry.key.clone());
            }
            _ => {
                self.selected_category = 0;
                self.filter.set_category(None);
            }
        }
    }

    pub fn set_search(&mut self, raw: impl AsRef<str>) {
        self.filter.set_search(raw);
    }

    pub fn search(&self) -> &str {
        self.filter.search()
    }

    /// Derive the sorted, filtered, priced listing view.
    pub fn populate(&mut self, state: &ShipyardState, loc: &dyn Localizer) {
        self.rows = filter::apply_sorted(&state.listings, &self.filter)
            .into_iter()
            .map(|vessel| {
                let price_text = match pricing::vessel_price(vessel.price, state.free_listings) {
                    VesselPrice::Free => loc.localize(LISTING_FREE),
                    VesselPrice::Credits(amount) => loc.localize_amount(LISTING_AMOUNT, amount),
                };
                VesselRow {
                    id: vessel.id.clone(),
                    name: vessel.name.clone(),
                    price_text,
                    tooltip: vessel.description.clone(),
                }
            })
            .collect();
    }

    pub fn rows(&self) -> &[VesselRow] {
        &self.rows
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }

    pub fn selected_category(&self) -> usize {
        self.selected_category
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::localize::{CATEGORY_ALL, KeyEcho};
    use crate::model::VesselListing;

    fn listing(name: &str, category: &str, price: u64) -> VesselListing {
        VesselListing {
            id: KindId::from(name),
            name: name.to_owned(),
            description: format!("{name} description"),
            category: Some(category.to_owned()),
            price,
        }
    }

    fn state() -> ShipyardState {
        ShipyardState {
            listings: vec![
                listing("Pequod", "Civilian", 8000),
                listing("Ambition", "Civilian", 4500),
                listing("Bounty", "Salvage", 12000),
            ],
            free_listings: false,
            balance: 20000,
            ship_sell_value: 0,
            ship_deed_title: None,
        }
    }

    #[test]
    fn populate_sorts_by_name_and_prices_rows() {
        let mut panel = ShipyardPanel::new();
        panel.populate(&state(), &KeyEcho);

        let names: Vec<&str> = panel.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ambition", "Bounty", "Pequod"]);
        assert_eq!(panel.rows()[0].price_text, format!("{LISTING_AMOUNT}: 4500"));
        assert_eq!(panel.rows()[0].tooltip, "Ambition description");
    }

    #[test]
    fn free_listings_replace_price_with_label() {
        let mut panel = ShipyardPanel::new();
        let state = ShipyardState {
            free_listings: true,
            ..state()
        };
        panel.populate(&state, &KeyEcho);
        assert!(panel.rows().iter().all(|r| r.price_text == LISTING_FREE));
    }

    #[test]
    fn category_selection_filters_and_index_zero_clears() {
        let mut panel = ShipyardPanel::new();
        let state = state();
        panel.populate_categories(&state, &KeyEcho);

        let labels: Vec<&str> = panel.categories().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![CATEGORY_ALL, "Civilian", "Salvage"]);

        panel.select_category(2);
        panel.populate(&state, &KeyEcho);
        assert_eq!(panel.rows().len(), 1);
        assert_eq!(panel.rows()[0].name, "Bounty");

        panel.select_category(0);
        panel.populate(&state, &KeyEcho);
        assert_eq!(panel.rows().len(), 3);
    }

    #[test]
    fn search_beats_category() {
        let mut panel = ShipyardPanel::new();
        let state = state();
        panel.populate_categories(&state, &KeyEcho);
        panel.select_category(1); // Civilian
        panel.set_search("bounty");
        panel.populate(&state, &KeyEcho);

        assert_eq!(panel.rows().len(), 1);
        assert_eq!(panel.rows()[0].name, "Bounty");
    }

    #[test]
    fn stale_category_degrades_to_all() {
        let mut panel = ShipyardPanel::new();
        let state = state();
        panel.populate_categories(&state, &KeyEcho);
        panel.select_category(2); // Salvage

        // catalog changes: Salvage disappears
        let reduced = ShipyardState {
            listings: vec![listing("Pequod", "Civilian", 8000)],
            ..state
        };
        panel.populate_categories(&reduced, &KeyEcho);
        assert_eq!(panel.selected_category(), 0);

        panel.populate(&reduced, &KeyEcho);
        assert_eq!(panel.rows().len(), 1);
    }

    #[test]
    fn out_of_range_selection_is_all() {
        let mut panel = ShipyardPanel::new();
        let state = state();
        panel.populate_categories(&state, &KeyEcho);
        panel.select_category(99);
        panel.populate(&state, &KeyEcho);
        assert_eq!(panel.rows().len(), 3);
        assert_eq!(panel.selected_category(), 0);
    }
}
