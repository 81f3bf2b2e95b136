// ── Filter / sort engine ──
//
// Pure view derivation: (catalog, search, category) -> ordered filtered
// view. Search beats category: whenever search text is present the
// category selection is ignored. That precedence is deliberate UX (the
// search box is the more specific instrument) and is part of the
// storefront contract -- do not "fix" it.

use crate::localize::{CATEGORY_ALL, Localizer};

/// Anything the engine can filter and sort: a display name plus an
/// optional category.
pub trait Listable {
    fn display_name(&self) -> &str;
    fn category(&self) -> Option<&str>;
}

impl Listable for crate::model::CatalogItem {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl Listable for crate::model::VesselListing {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Current search text and category selection. Persists across populate
/// calls until the user changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    category: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed, lowercased search needle. Empty = no search filter.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, raw: impl AsRef<str>) {
        self.search = raw.as_ref().trim().to_lowercase();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// `None` selects "all".
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Drop a category that is no longer in the discovered set (the
    /// catalog changed underneath us). Degrades to "all", never fails.
    pub fn sanitize(&mut self, known: &[CategoryEntry]) {
        if let Some(current) = &self.category {
            if !known.iter().any(|c| c.key.as_deref() == Some(current)) {
                tracing::debug!(category = %current, "stale category selection cleared");
                self.category = None;
            }
        }
    }

    /// The keep/drop predicate, applied to a name+category pair.
    ///
    /// Keep when: nothing is filtered; OR search text matches the name
    /// (case-insensitive substring); OR there is no search and the
    /// category matches exactly.
    pub fn keeps(&self, name: &str, category: Option<&str>) -> bool {
        let search = self.search.as_str();
        (search.is_empty() && self.category.is_none())
            || (!search.is_empty() && name.to_lowercase().contains(search))
            || (search.is_empty()
                && self
                    .category
                    .as_deref()
                    .is_some_and(|want| category == Some(want)))
    }

    fn keeps_item<T: Listable>(&self, item: &T) -> bool {
        self.keeps(item.display_name(), item.category())
    }
}

/// Category-style listing: filter, then order lexicographically by
/// case-folded display name.
pub fn apply_sorted<'a, T: Listable>(items: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let mut kept: Vec<&T> = items.iter().filter(|it| state.keeps_item(*it)).collect();
    kept.sort_by(|a, b| {
        a.display_name()
            .to_lowercase()
            .cmp(&b.display_name().to_lowercase())
    });
    kept
}

/// Inventory-style listing: catalog order preserved, filtering only
/// removes. Survivors carry their original index so callers can address
/// position-correlated external state (purchase slots).
///
/// Names come through `name_of` because inventory entries carry no
/// display name of their own -- resolution goes through the sample
/// cache.
pub fn apply_preserving<'a, T, F>(
    items: &'a [T],
    state: &FilterState,
    mut name_of: F,
) -> Vec<(usize, &'a T)>
where
    F: FnMut(&T) -> String,
{
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            let name = name_of(item);
            state.keeps(&name, None)
        })
        .collect()
}

/// One selectable category: the raw key the predicate compares against,
/// and the localized label the UI shows. The synthetic "All" entry has
/// no key -- selecting it clears the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub key: Option<String>,
    pub label: String,
}

/// Discover the category list for a catalog: distinct categories,
/// localized, deduplicated, sorted by label, with the synthetic "All"
/// entry prepended at index 0. Selecting index 0 clears the filter.
pub fn discover_categories<T: Listable>(items: &[T], loc: &dyn Localizer) -> Vec<CategoryEntry> {
    let mut entries: Vec<CategoryEntry> = Vec::new();
    for item in items {
        if let Some(category) = item.category() {
            if !entries.iter().any(|e| e.key.as_deref() == Some(category)) {
                entries.push(CategoryEntry {
                    key: Some(category.to_owned()),
                    label: loc.localize(category),
                });
            }
        }
    }
    entries.sort_by(|a, b| a.label.cmp(&b.label));
    entries.insert(
        0,
        CategoryEntry {
            key: None,
            label: loc.localize(CATEGORY_ALL),
        },
    );
    entries
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::localize::KeyEcho;
    use crate::model::{CatalogItem, KindId, PricingFacets, VesselListing};

    fn vessel(name: &str, category: Option<&str>) -> VesselListing {
        VesselListing {
            id: KindId::from(name),
            name: name.to_owned(),
            description: String::new(),
            category: category.map(str::to_owned),
            price: 1000,
        }
    }

    fn item(name: &str, category: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: KindId::from(name),
            name: name.to_owned(),
            description: String::new(),
            category: category.map(str::to_owned),
            icon: None,
            facets: PricingFacets::default(),
        }
    }

    #[test]
    fn unfiltered_sorted_view_is_whole_catalog_by_name() {
        let items = vec![
            vessel("Pequod", Some("Civilian")),
            vessel("ambition", Some("Civilian")),
            vessel("Bounty", Some("Salvage")),
        ];
        let view = apply_sorted(&items, &FilterState::new());
        let names: Vec<&str> = view.iter().map(|v| v.display_name()).collect();
        assert_eq!(names, vec!["ambition", "Bounty", "Pequod"]);
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let items = vec![vessel("Pequod", None), vessel("Bounty", None)];
        let mut state = FilterState::new();
        state.set_search("  QUO ");
        let view = apply_sorted(&items, &state);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "Pequod");
    }

    #[test]
    fn search_overrides_category() {
        let items = vec![
            vessel("Pequod", Some("Civilian")),
            vessel("Bounty", Some("Salvage")),
        ];
        let mut state = FilterState::new();
        state.set_category(Some("Civilian".into()));
        state.set_search("bounty");
        // search wins: the Salvage vessel survives despite the Civilian filter
        let view = apply_sorted(&items, &state);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "Bounty");
    }

    #[test]
    fn category_applies_only_without_search() {
        let items = vec![
            vessel("Pequod", Some("Civilian")),
            vessel("Bounty", Some("Salvage")),
        ];
        let mut state = FilterState::new();
        state.set_category(Some("Salvage".into()));
        let view = apply_sorted(&items, &state);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].display_name(), "Bounty");
    }

    #[test]
    fn uncategorized_items_only_show_under_all() {
        let items = vec![vessel("Pequod", None)];
        let mut state = FilterState::new();
        state.set_category(Some("Civilian".into()));
        assert!(apply_sorted(&items, &state).is_empty());
        state.set_category(None);
        assert_eq!(apply_sorted(&items, &state).len(), 1);
    }

    #[test]
    fn preserving_keeps_catalog_order_and_indices() {
        let items = vec![item("Cola", None), item("Chips", None), item("Candy", None)];
        let mut state = FilterState::new();
        state.set_search("c");
        let view = apply_preserving(&items, &state, |it| it.name.clone());
        let indices: Vec<usize> = view.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        state.set_search("ca");
        let view = apply_preserving(&items, &state, |it| it.name.clone());
        let indices: Vec<usize> = view.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let items = vec![item("Cola", None), item("Chips", None)];
        let view = apply_preserving(&items, &FilterState::new(), |it| it.name.clone());
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].0, 0);
        assert_eq!(view[1].0, 1);
    }

    #[test]
    fn categories_are_distinct_sorted_with_all_first() {
        let items = vec![
            vessel("A", Some("Tools")),
            vessel("B", Some("Food")),
            vessel("C", Some("Tools")),
            vessel("D", None),
        ];
        let categories = discover_categories(&items, &KeyEcho);
        let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec![CATEGORY_ALL, "Food", "Tools"]);
        assert_eq!(categories[0].key, None);
        assert_eq!(categories[1].key.as_deref(), Some("Food"));
    }

    #[test]
    fn sanitize_clears_unknown_category() {
        let known = vec![
            CategoryEntry {
                key: None,
                label: "All".into(),
            },
            CategoryEntry {
                key: Some("Food".into()),
                label: "Food".into(),
            },
        ];

        let mut state = FilterState::new();
        state.set_category(Some("Ghost".into()));
        state.sanitize(&known);
        assert_eq!(state.category(), None);

        state.set_category(Some("Food".into()));
        state.sanitize(&known);
        assert_eq!(state.category(), Some("Food"));
    }
}
