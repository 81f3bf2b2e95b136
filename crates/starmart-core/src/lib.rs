//! Storefront listing engine for the starmart workspace.
//!
//! Two structurally identical storefront pipelines (vending machines and
//! shipyard listings) share the machinery in this crate:
//!
//! - **[`StorefrontStore`]** — whole-snapshot reactive storage
//!   (`tokio::sync::watch`). The depot writes, front-ends subscribe and
//!   re-derive views from each snapshot.
//!
//! - **[`Depot`]** — settles typed [`Command`]s (dispense, purchase,
//!   sell) against the store and answers on oneshot channels. Stands in
//!   for the network state-sync layer a deployed storefront would have.
//!
//! - **Panels** ([`panel`]) — per-view orchestration. A panel owns its
//!   [`FilterState`](filter::FilterState), display rows, and (vending
//!   only) the [`SampleCache`](sample::SampleCache), and derives a
//!   fresh view on every populate call: filter → price → reconcile.
//!
//! - **Pure machinery** — [`pricing`] (the fallback resolution chain),
//!   [`filter`] (search/category predicate plus ordering rules),
//!   [`reconcile`] (minimal-churn row adjustment and adaptive sizing),
//!   [`sample`] (lazy instantiate-to-query with single-owner lifetime).
//!
//! Everything here is synchronous and allocation-light: catalogs are
//! hundreds of items, re-derived per keystroke, not an indexed search
//! problem.

pub mod command;
pub mod depot;
pub mod error;
pub mod filter;
pub mod localize;
pub mod model;
pub mod panel;
pub mod pricing;
pub mod reconcile;
pub mod sample;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{Command, CommandEnvelope, Receipt};
pub use depot::{Depot, DepotHandle};
pub use error::CoreError;
pub use filter::{CategoryEntry, FilterState};
pub use localize::Localizer;
pub use panel::{ShipyardPanel, VendingPanel, VesselRow};
pub use reconcile::{DisplayRow, PanelSize};
pub use sample::{CatalogIdentity, IdentityResolver, SampleCache};
pub use store::StorefrontStore;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Catalog,
    CatalogItem,
    InventoryEntry,
    KindId,
    PricingFacets,
    ReagentId,
    ShipyardState,
    VendingState,
    VesselListing,
};
