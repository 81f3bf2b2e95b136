//! Domain model: identity types, catalog snapshots, storefront state.

mod catalog;
mod kind;
mod storefront;

pub use catalog::{Catalog, CatalogItem, PricingFacets, ReagentPriceIndex, ReagentQuantity};
pub use kind::{KindId, ReagentId};
pub use storefront::{InventoryEntry, ShipyardState, VendingState, VesselListing};
