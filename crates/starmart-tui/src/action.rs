//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;
use std::sync::Arc;

use starmart_core::{Catalog, KindId, ShipyardState, VendingState};

use crate::screen::ScreenId;

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Pending confirmation action.
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    Dispense {
        slot: usize,
        kind: KindId,
        name: String,
    },
    PurchaseVessel {
        kind: KindId,
        name: String,
        price_text: String,
    },
    SellShip {
        title: String,
    },
}

impl fmt::Display for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispense { name, .. } => write!(f, "Buy {name}?"),
            Self::PurchaseVessel {
                name, price_text, ..
            } => write!(f, "Purchase {name} for {price_text}?"),
            Self::SellShip { title } => write!(f, "Sell {title}? The deed is surrendered."),
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    GoBack,

    // ── Data Events (from the depot bridge) ───────────────────────
    CatalogUpdated(Arc<Catalog>),
    VendingUpdated(Arc<VendingState>),
    ShipyardUpdated(Arc<ShipyardState>),

    // ── Purchases ─────────────────────────────────────────────────
    RequestDispense(usize, KindId),
    RequestPurchaseVessel(KindId),
    RequestSellShip,

    // ── Confirm Dialog ────────────────────────────────────────────
    ShowConfirm(ConfirmAction),
    ConfirmYes,
    ConfirmNo,

    // ── Search ────────────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchInput(String),
    SearchSubmit,

    // ── Shipyard categories ───────────────────────────────────────
    SelectCategory(usize),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,

    // ── Notifications ─────────────────────────────────────────────
    Notify(Notification),
    DismissNotification,
}
