// ── Depot ──
//
// The state-sync collaborator behind both storefronts. Owns command
// settlement: every purchase mutates the store, and subscribers see the
// fresh snapshot. Settlement is synchronous; the async surface is just
// the command channel.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::command::{Command, CommandEnvelope, Receipt};
use crate::error::CoreError;
use crate::model::{KindId, PricingFacets};
use crate::pricing;
use crate::store::StorefrontStore;

/// Fraction of list price a purchased vessel appraises back at.
const APPRAISAL_NUM: u64 = 3;
const APPRAISAL_DEN: u64 = 4;

/// Cheap cloneable handle for submitting commands to a running depot.
#[derive(Clone)]
pub struct DepotHandle {
    tx: mpsc::UnboundedSender<CommandEnvelope>,
}

impl DepotHandle {
    /// Submit a command and await its settlement.
    pub async fn execute(&self, command: Command) -> Result<Receipt, CoreError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.tx
            .send(CommandEnvelope {
                command,
                response_tx,
            })
            .map_err(|_| CoreError::ChannelClosed)?;
        response_rx.await.map_err(|_| CoreError::ChannelClosed)?
    }
}

pub struct Depot {
    store: Arc<StorefrontStore>,
}

impl Depot {
    pub fn new(store: Arc<StorefrontStore>) -> Self {
        Self { store }
    }

    /// Spawn the command loop; returns the submission handle. The loop
    /// ends when every handle is dropped.
    pub fn spawn(self) -> DepotHandle {
        let (tx, mut rx) = mpsc::unbounded_channel::<CommandEnvelope>();
        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                let result = self.settle(envelope.command);
                // Receiver may have given up; settlement already happened.
                let _ = envelope.response_tx.send(result);
            }
            debug!("depot command loop shut down");
        });
        DepotHandle { tx }
    }

    /// Settle one command against the store.
    pub fn settle(&self, command: Command) -> Result<Receipt, CoreError> {
        match command {
            Command::Dispense { slot, kind } => self.dispense(slot, &kind),
            Command::PurchaseVessel { kind } => self.purchase_vessel(&kind),
            Command::SellShip => self.sell_ship(),
        }
    }

    fn dispense(&self, slot: usize, kind: &KindId) -> Result<Receipt, CoreError> {
        let vending = self.store.vending();
        let entry = vending
            .inventory
            .get(slot)
            .filter(|entry| &entry.kind == kind)
            .ok_or_else(|| CoreError::SlotMismatch {
                slot,
                kind: kind.clone(),
            })?;

        if entry.amount == 0 {
            return Err(CoreError::OutOfStock { slot });
        }

        let catalog = self.store.catalog();
        let default_facets = PricingFacets::default();
        let facets = catalog
            .get(kind)
            .map_or(&default_facets, |item| &item.facets);
        let price = u64::from(pricing::resolve(
            facets,
            vending.price_modifier,
            catalog.as_ref(),
        ));

        if vending.balance < price {
            return Err(CoreError::InsufficientFunds {
                price,
                balance: vending.balance,
            });
        }

        let balance = vending.balance - price;
        self.store.update_vending(|v| {
            if let Some(entry) = v.inventory.get_mut(slot) {
                entry.amount = entry.amount.saturating_sub(1);
            }
            v.balance = balance;
        });

        info!(kind = %kind, slot, price, "dispensed");
        Ok(Receipt::Dispensed {
            kind: kind.clone(),
            price,
            balance,
        })
    }

    fn purchase_vessel(&self, kind: &KindId) -> Result<Receipt, CoreError> {
        let shipyard = self.store.shipyard();
        let listing = shipyard
            .listings
            .iter()
            .find(|l| &l.id == kind)
            .ok_or_else(|| CoreError::UnknownKind { kind: kind.clone() })?;

        let price = if shipyard.free_listings {
            0
        } else {
            listing.price
        };
        if shipyard.balance < price {
            return Err(CoreError::InsufficientFunds {
                price,
                balance: shipyard.balance,
            });
        }

        let title = listing.name.clone();
        let appraisal = listing.price * APPRAISAL_NUM / APPRAISAL_DEN;
        let balance = shipyard.balance - price;
        self.store.update_shipyard(|s| {
            s.balance = balance;
            s.ship_deed_title = Some(title.clone());
            s.ship_sell_value = appraisal;
        });

        info!(kind = %kind, price, "vessel purchased");
        Ok(Receipt::VesselPurchased {
            title,
            price,
            balance,
        })
    }

    fn sell_ship(&self) -> Result<Receipt, CoreError> {
        let shipyard = self.store.shipyard();
        if shipyard.ship_deed_title.is_none() {
            return Err(CoreError::NoDeed);
        }

        let proceeds = if shipyard.free_listings {
            0
        } else {
            shipyard.ship_sell_value
        };
        let balance = shipyard.balance + proceeds;
        self.store.update_shipyard(|s| {
            s.balance = balance;
            s.ship_deed_title = None;
            s.ship_sell_value = 0;
        });

        info!(proceeds, "ship sold");
        Ok(Receipt::ShipSold { proceeds, balance })
    }
}
