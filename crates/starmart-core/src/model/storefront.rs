// ── Storefront state types ──
//
// Raw per-storefront state as supplied by the depot. These are the
// inputs to a populate pass; the engine never mutates them.

use serde::{Deserialize, Serialize};

use super::kind::KindId;

/// One vending machine slot: which kind it vends and how many are left.
/// Slot order is authoritative -- purchase commands address slots by
/// their original index, so filtered views must carry indices along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub kind: KindId,
    pub amount: u32,
}

/// Complete vending storefront state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendingState {
    /// Slots in catalog order.
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,

    /// Regional/economic price multiplier applied during resolution.
    #[serde(default = "default_modifier")]
    pub price_modifier: f32,

    /// Wallet balance of the current user, in credits.
    #[serde(default)]
    pub balance: u64,
}

fn default_modifier() -> f32 {
    1.0
}

impl Default for VendingState {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            price_modifier: 1.0,
            balance: 0,
        }
    }
}

/// A purchasable vessel listing. Unlike vending kinds, a vessel has a
/// single stored price -- no fallback chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselListing {
    pub id: KindId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: u64,
}

/// Complete shipyard storefront state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipyardState {
    pub listings: Vec<VesselListing>,

    /// When set, listings advertise as free of charge and the ship sell
    /// value displays as zero.
    pub free_listings: bool,

    pub balance: u64,

    /// Appraised value of the currently deeded ship.
    pub ship_sell_value: u64,

    /// Title on the current ship deed. `None` disables selling.
    pub ship_deed_title: Option<String>,
}
