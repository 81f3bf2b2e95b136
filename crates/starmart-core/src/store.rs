// ── Reactive storefront store ──
//
// Whole-snapshot storage with push-based change notification via
// `watch` channels. The depot task is the only writer; front-end
// consumers subscribe and re-derive their views from each snapshot.
// Snapshots are `Arc`-shared and immutable for the duration of a
// populate pass.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Catalog, ShipyardState, VendingState};

pub struct StorefrontStore {
    catalog: watch::Sender<Arc<Catalog>>,
    vending: watch::Sender<Arc<VendingState>>,
    shipyard: watch::Sender<Arc<ShipyardState>>,

    /// Bumped on every mutation.
    version: watch::Sender<u64>,
}

impl StorefrontStore {
    pub fn new(catalog: Catalog, vending: VendingState, shipyard: ShipyardState) -> Self {
        let (catalog, _) = watch::channel(Arc::new(catalog));
        let (vending, _) = watch::channel(Arc::new(vending));
        let (shipyard, _) = watch::channel(Arc::new(shipyard));
        let (version, _) = watch::channel(0u64);

        Self {
            catalog,
            vending,
            shipyard,
            version,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.borrow().clone()
    }

    pub fn vending(&self) -> Arc<VendingState> {
        self.vending.borrow().clone()
    }

    pub fn shipyard(&self) -> Arc<ShipyardState> {
        self.shipyard.borrow().clone()
    }

    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_catalog(&self) -> watch::Receiver<Arc<Catalog>> {
        self.catalog.subscribe()
    }

    pub fn subscribe_vending(&self) -> watch::Receiver<Arc<VendingState>> {
        self.vending.subscribe()
    }

    pub fn subscribe_shipyard(&self) -> watch::Receiver<Arc<ShipyardState>> {
        self.shipyard.subscribe()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Replace the whole catalog snapshot.
    pub fn set_catalog(&self, catalog: Catalog) {
        // `send_modify` updates unconditionally, even with zero receivers.
        self.catalog.send_modify(|snap| *snap = Arc::new(catalog));
        self.bump_version();
    }

    /// Mutate a copy of the vending state and publish it.
    pub fn update_vending(&self, mutate: impl FnOnce(&mut VendingState)) {
        let mut next = VendingState::clone(&self.vending.borrow());
        mutate(&mut next);
        self.vending.send_modify(|snap| *snap = Arc::new(next));
        self.bump_version();
    }

    /// Mutate a copy of the shipyard state and publish it.
    pub fn update_shipyard(&self, mutate: impl FnOnce(&mut ShipyardState)) {
        let mut next = ShipyardState::clone(&self.shipyard.borrow());
        mutate(&mut next);
        self.shipyard.send_modify(|snap| *snap = Arc::new(next));
        self.bump_version();
    }

    fn bump_version(&self) {
        self.version.send_modify(|v| *v += 1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{InventoryEntry, KindId};

    fn store() -> StorefrontStore {
        StorefrontStore::new(
            Catalog::default(),
            VendingState::default(),
            ShipyardState::default(),
        )
    }

    #[test]
    fn update_publishes_fresh_snapshot() {
        let store = store();
        let before = store.vending();

        store.update_vending(|v| {
            v.balance = 500;
            v.inventory.push(InventoryEntry {
                kind: KindId::from("cola"),
                amount: 3,
            });
        });

        let after = store.vending();
        assert_eq!(before.balance, 0);
        assert_eq!(after.balance, 500);
        assert_eq!(after.inventory.len(), 1);
    }

    #[test]
    fn version_bumps_on_every_mutation() {
        let store = store();
        assert_eq!(store.version(), 0);
        store.update_vending(|_| {});
        store.update_shipyard(|s| s.balance = 1);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn subscribers_observe_changes() {
        let store = store();
        let mut rx = store.subscribe_shipyard();
        assert!(!rx.has_changed().unwrap());

        store.update_shipyard(|s| s.free_listings = true);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().free_listings);
    }
}
