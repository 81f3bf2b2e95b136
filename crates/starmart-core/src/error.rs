// ── Core error types ──
//
// Errors the engine can actually fail at: settling a purchase command
// against the store, or a depot channel going away. Listing-side
// degradations (missing metadata, unknown reagents, stale filter
// categories) are NOT errors -- they resolve to defaults per the
// storefront contract and never reach this type.

use thiserror::Error;

use crate::model::KindId;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Command settlement ───────────────────────────────────────────
    #[error("Unknown kind: {kind}")]
    UnknownKind { kind: KindId },

    #[error("Slot {slot} does not hold {kind}")]
    SlotMismatch { slot: usize, kind: KindId },

    #[error("Slot {slot} is out of stock")]
    OutOfStock { slot: usize },

    #[error("Insufficient funds: price {price}, balance {balance}")]
    InsufficientFunds { price: u64, balance: u64 },

    #[error("No ship deed on file")]
    NoDeed,

    // ── Plumbing ─────────────────────────────────────────────────────
    #[error("Depot command channel closed")]
    ChannelClosed,
}
