// ── Vending panel ──
//
// Orchestrates one vending storefront view: sample cache, filter state,
// display list, adaptive size. Populate is synchronous and runs to
// completion; a later call simply supersedes the view. Slot order is
// authoritative -- survivors keep their original inventory index so
// purchases address the right slot.

use std::sync::Arc;

use crate::filter::FilterState;
use crate::localize::{Localizer, OUT_OF_STOCK};
use crate::model::{Catalog, VendingState};
use crate::pricing;
use crate::reconcile::{DisplayList, DisplayRow, PanelSize, adaptive_size};
use crate::sample::{CatalogSampleSource, IdentityResolver, SampleCache};

pub struct VendingPanel {
    catalog: Arc<Catalog>,
    samples: SampleCache<CatalogSampleSource>,
    filter: FilterState,
    rows: DisplayList,
    /// Original inventory index of each surviving row, in row order.
    filtered_slots: Vec<usize>,
    size: PanelSize,
    sold_out: bool,
}

impl VendingPanel {
    pub fn new(catalog: Arc<Catalog>, identity: Arc<dyn IdentityResolver>) -> Self {
        let samples = SampleCache::new(CatalogSampleSource::new(Arc::clone(&catalog), identity));
        Self {
            catalog,
            samples,
            filter: FilterState::new(),
            rows: DisplayList::new(),
            filtered_slots: Vec::new(),
            size: PanelSize::default(),
            sold_out: false,
        }
    }

    /// Swap in a fresh catalog snapshot. Cached samples stay warm; a
    /// sample for a kind that left the catalog is simply never asked
    /// for again.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.samples.source_mut().set_catalog(Arc::clone(&catalog));
        self.catalog = catalog;
    }

    pub fn set_search(&mut self, raw: impl AsRef<str>) {
        self.filter.set_search(raw);
    }

    pub fn search(&self) -> &str {
        self.filter.search()
    }

    /// Derive the full display view from raw storefront state.
    pub fn populate(&mut self, state: &VendingState, loc: &dyn Localizer) {
        self.filtered_slots.clear();

        if state.inventory.is_empty() {
            let text = loc.localize(OUT_OF_STOCK);
            self.size = adaptive_size(text.chars().count(), 1);
            self.rows.show_sold_out(text);
            self.sold_out = true;
            return;
        }
        self.sold_out = false;

        self.rows.reconcile(state.inventory.len());

        let mut longest_name = 0usize;
        let mut removed = 0usize;
        for (slot, entry) in state.inventory.iter().enumerate() {
            let row_index = slot - removed;
            let sample = self.samples.get_or_create(&entry.kind);
            let name = sample.display_name.clone();

            if !self.filter.keeps(&name, None) {
                self.rows.remove_row(row_index);
                removed += 1;
                continue;
            }

            let price =
                pricing::resolve(&sample.facets, state.price_modifier, self.catalog.as_ref());
            longest_name = longest_name.max(name.chars().count());

            self.rows.set_row(
                row_index,
                DisplayRow {
                    kind: Some(entry.kind.clone()),
                    text: format!("[${price}] {name} [{}]", entry.amount),
                    icon: sample.icon.clone(),
                    tooltip: None,
                },
            );
            self.filtered_slots.push(slot);
        }

        self.size = adaptive_size(longest_name, self.rows.len());
    }

    pub fn rows(&self) -> &[DisplayRow] {
        self.rows.rows()
    }

    /// Original inventory slot behind a row, or `None` for the sold-out
    /// sentinel and out-of-range rows.
    pub fn slot_for_row(&self, row: usize) -> Option<usize> {
        self.filtered_slots.get(row).copied()
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold_out
    }

    pub fn cached_samples(&self) -> usize {
        self.samples.len()
    }

    /// True teardown: release every cached sample. Hiding the view must
    /// NOT call this -- a hidden view keeps its cache warm.
    pub fn dispose(&mut self) {
        self.samples.dispose_all();
    }
}
