// ── Command API ──
//
// All write operations flow through a unified `Command` enum. The depot
// settles each one against the store and answers on a oneshot channel.
// Reads never go through here -- consumers take store snapshots.

use tokio::sync::oneshot;

use crate::error::CoreError;
use crate::model::KindId;

/// A command envelope sent through the command channel.
/// Contains the command and a oneshot response channel.
pub struct CommandEnvelope {
    pub command: Command,
    pub response_tx: oneshot::Sender<Result<Receipt, CoreError>>,
}

/// All possible write operations against a storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Vend one item out of an inventory slot. The slot index is the
    /// ORIGINAL inventory index, not the filtered row index.
    Dispense { slot: usize, kind: KindId },

    /// Buy a vessel off the shipyard listing.
    PurchaseVessel { kind: KindId },

    /// Sell the currently deeded ship at its appraised value.
    SellShip,
}

/// Successful settlement of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Dispensed {
        kind: KindId,
        price: u64,
        balance: u64,
    },
    VesselPurchased {
        title: String,
        price: u64,
        balance: u64,
    },
    ShipSold {
        proceeds: u64,
        balance: u64,
    },
}
