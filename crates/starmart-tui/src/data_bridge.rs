//! Data bridge — connects [`StorefrontStore`] snapshots to TUI actions.
//!
//! Runs as a background task: pushes the initial snapshots so screens
//! have data immediately, then forwards every store change as an
//! [`Action`] through the TUI's action channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use starmart_core::StorefrontStore;

use crate::action::Action;

/// Forward store snapshots to the TUI until cancelled.
pub async fn spawn_data_bridge(
    store: Arc<StorefrontStore>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut catalog = store.subscribe_catalog();
    let mut vending = store.subscribe_vending();
    let mut shipyard = store.subscribe_shipyard();

    // Push initial snapshots so screens have data immediately
    let _ = action_tx.send(Action::CatalogUpdated(store.catalog()));
    let _ = action_tx.send(Action::VendingUpdated(store.vending()));
    let _ = action_tx.send(Action::ShipyardUpdated(store.shipyard()));

    // Change loop — forward every snapshot until cancelled
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = catalog.changed() => {
                let snap = catalog.borrow_and_update().clone();
                let _ = action_tx.send(Action::CatalogUpdated(snap));
            }
            Ok(()) = vending.changed() => {
                let snap = vending.borrow_and_update().clone();
                let _ = action_tx.send(Action::VendingUpdated(snap));
            }
            Ok(()) = shipyard.changed() => {
                let snap = shipyard.borrow_and_update().clone();
                let _ = action_tx.send(Action::ShipyardUpdated(snap));
            }

            else => break,
        }
    }

    debug!("data bridge shut down");
}
