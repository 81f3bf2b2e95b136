//! Per-storefront view orchestration: each panel owns its filter state,
//! display rows, and (for vending) the sample cache, and derives a fresh
//! view from raw depot state on every populate call.

mod shipyard;
mod vending;

pub use shipyard::{ShipyardPanel, VesselRow};
pub use vending::VendingPanel;
