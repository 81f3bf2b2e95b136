// ── Catalog domain types ──
//
// A Catalog is the full set of listable kinds plus the reagent price
// table, snapshotted at load time. Items are immutable once loaded;
// refreshing the catalog replaces the whole snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::kind::{KindId, ReagentId};

/// A reagent-quantity pair inside a kind's contents (e.g. 30 units of
/// Cola inside a can). Quantities are fractional units, not item counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReagentQuantity {
    pub reagent: ReagentId,
    pub quantity: f32,
}

/// Optional pricing metadata attached to a kind.
///
/// Every field may be absent; absence is a typed "not present" state and
/// is always priced as zero/unset, never treated as an error. `base_price`
/// and `vend_override_price` use 0 as their unset sentinel, matching the
/// catalog file format where omitting the field and writing 0 mean the
/// same thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingFacets {
    /// Flat price. 0 = unset.
    pub base_price: u32,

    /// Per-unit price of a stackable kind. Only meaningful together
    /// with `stack_count`.
    pub stack_price: Option<u32>,

    /// Units per stack. Only meaningful together with `stack_price`.
    pub stack_count: Option<u32>,

    /// Author-forced advertised price. 0 = unset. Acts as a cap: it only
    /// applies when it undercuts the computed price.
    pub vend_override_price: u32,

    /// Contents priced per reagent unit on top of the base cost.
    pub content_reagents: Vec<ReagentQuantity>,
}

impl PricingFacets {
    /// Whether any facet is actually set.
    pub fn is_present(&self) -> bool {
        self.base_price != 0
            || self.stack_price.is_some()
            || self.stack_count.is_some()
            || self.vend_override_price != 0
            || !self.content_reagents.is_empty()
    }
}

/// One listable kind: identity, display metadata, and pricing facets.
/// Read-only to the engine; owned by whatever loaded the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: KindId,

    /// Human-readable name. The sample cache may refine this through
    /// identity resolution; this is the static fallback.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Display category. `None` groups the item under "all" only.
    #[serde(default)]
    pub category: Option<String>,

    /// Display glyph for list rows.
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub facets: PricingFacets,
}

/// Looks up per-unit reagent prices during price resolution.
///
/// Injected into the resolver rather than reached for globally, so tests
/// and alternate backends can supply their own tables.
pub trait ReagentPriceIndex {
    /// Per-unit price for a reagent, or `None` if the reagent is not in
    /// the active set. Missing reagents are skipped by the resolver.
    fn price_per_unit(&self, reagent: &ReagentId) -> Option<f32>;
}

/// Full catalog snapshot: every listable kind in load order, indexed by
/// id, plus the reagent price table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    #[serde(skip)]
    by_id: HashMap<KindId, usize>,
    reagent_prices: HashMap<ReagentId, f32>,
}

impl Catalog {
    pub fn new(
        items: Vec<CatalogItem>,
        reagent_prices: HashMap<ReagentId, f32>,
    ) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();
        Self {
            items,
            by_id,
            reagent_prices,
        }
    }

    /// All items in load order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: &KindId) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild the id index after deserialization (`by_id` is skipped by
    /// serde). Called by catalog loaders.
    pub fn reindex(&mut self) {
        self.by_id = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();
    }
}

impl ReagentPriceIndex for Catalog {
    fn price_per_unit(&self, reagent: &ReagentId) -> Option<f32> {
        self.reagent_prices.get(reagent).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: KindId::from(id),
            name: name.to_owned(),
            description: String::new(),
            category: None,
            icon: None,
            facets: PricingFacets::default(),
        }
    }

    #[test]
    fn catalog_indexes_by_id() {
        let catalog = Catalog::new(
            vec![item("cola", "Cola"), item("chips", "Chips")],
            HashMap::new(),
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&KindId::from("chips")).unwrap().name, "Chips");
        assert!(catalog.get(&KindId::from("absent")).is_none());
    }

    #[test]
    fn missing_reagent_is_none_not_error() {
        let catalog = Catalog::new(vec![], HashMap::new());
        assert!(catalog.price_per_unit(&ReagentId::from("Sugar")).is_none());
    }

    #[test]
    fn default_facets_are_absent() {
        let facets = PricingFacets::default();
        assert!(!facets.is_present());
        assert_eq!(facets.base_price, 0);
        assert!(facets.stack_price.is_none());
    }

    #[test]
    fn reindex_restores_lookup() {
        let mut catalog = Catalog::new(vec![item("cola", "Cola")], HashMap::new());
        catalog.by_id.clear();
        assert!(catalog.get(&KindId::from("cola")).is_none());
        catalog.reindex();
        assert!(catalog.get(&KindId::from("cola")).is_some());
    }
}
