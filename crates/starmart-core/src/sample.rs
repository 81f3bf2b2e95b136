// ── Sample cache ──
//
// Some queries (resolved display name, facet presence) are only
// answerable from an instantiated representative of a kind, not from
// static metadata. Instantiation is cheap but not free, so the cache
// memoizes one sample per kind for the lifetime of the owning view.
// Single-owner: the cache is never shared, never locked.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Catalog, CatalogItem, KindId, PricingFacets};

/// Resolves the display name of an instantiated representative.
///
/// The static catalog name is only a fallback -- identity systems may
/// rename an instance (e.g. brand variants, seasonal skins).
pub trait IdentityResolver: Send + Sync {
    fn resolved_name(&self, item: &CatalogItem) -> String;
}

/// Identity resolution that just trusts the catalog name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogIdentity;

impl IdentityResolver for CatalogIdentity {
    fn resolved_name(&self, item: &CatalogItem) -> String {
        item.name.clone()
    }
}

/// An instantiated, non-persistent representative of a kind. Holds the
/// derived values the listing pipeline needs; nothing else about the
/// instance survives.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub kind: KindId,
    pub display_name: String,
    pub icon: Option<String>,
    pub facets: PricingFacets,
}

/// Creates and releases samples. The paired `release` exists so backends
/// with real instance lifecycles (entity pools, handles into a game
/// state) can reclaim them; the catalog-backed source has nothing to
/// reclaim and ignores it.
pub trait SampleSource {
    /// Instantiate a representative of `kind`. Unknown kinds degrade to
    /// a sample named after the raw id with absent facets -- never an
    /// error.
    fn instantiate(&self, kind: &KindId) -> Sample;

    /// Release a previously instantiated sample.
    fn release(&self, sample: &Sample);
}

/// Sample source backed by a catalog snapshot plus an identity resolver.
pub struct CatalogSampleSource {
    catalog: Arc<Catalog>,
    identity: Arc<dyn IdentityResolver>,
}

impl CatalogSampleSource {
    pub fn new(catalog: Arc<Catalog>, identity: Arc<dyn IdentityResolver>) -> Self {
        Self { catalog, identity }
    }

    /// Swap in a fresh catalog snapshot. Existing samples are NOT
    /// invalidated; a sample outliving its kind is harmless because
    /// nothing resolves it again.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }
}

impl SampleSource for CatalogSampleSource {
    fn instantiate(&self, kind: &KindId) -> Sample {
        match self.catalog.get(kind) {
            Some(item) => Sample {
                kind: kind.clone(),
                display_name: self.identity.resolved_name(item),
                icon: item.icon.clone(),
                facets: item.facets.clone(),
            },
            None => {
                tracing::debug!(kind = %kind, "sampling unknown kind, degrading to id");
                Sample {
                    kind: kind.clone(),
                    display_name: kind.to_string(),
                    icon: None,
                    facets: PricingFacets::default(),
                }
            }
        }
    }

    fn release(&self, _sample: &Sample) {}
}

/// Lazily instantiates and memoizes one sample per kind.
///
/// `get_or_create` never re-instantiates within the cache's lifetime;
/// `dispose_all` releases every sample exactly once and is an idempotent
/// no-op on an empty cache. Hiding the owning view must NOT dispose --
/// recreating samples on a pure filter change is exactly the waste this
/// cache exists to avoid. Drop disposes as a backstop.
pub struct SampleCache<S: SampleSource> {
    source: S,
    samples: HashMap<KindId, Sample>,
}

impl<S: SampleSource> SampleCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            samples: HashMap::new(),
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get the memoized sample for `kind`, instantiating on first use.
    pub fn get_or_create(&mut self, kind: &KindId) -> &Sample {
        self.samples
            .entry(kind.clone())
            .or_insert_with(|| self.source.instantiate(kind))
    }

    /// Release every cached sample. Safe to call repeatedly.
    pub fn dispose_all(&mut self) {
        if self.samples.is_empty() {
            return;
        }
        tracing::debug!(count = self.samples.len(), "disposing cached samples");
        for sample in self.samples.values() {
            self.source.release(sample);
        }
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<S: SampleSource> Drop for SampleCache<S> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}
