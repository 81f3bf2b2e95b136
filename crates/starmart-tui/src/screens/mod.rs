//! Screen implementations. Each screen is a top-level Component.

pub mod shipyard;
pub mod vending;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create both storefront screens.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Vending,
            Box::new(vending::VendingScreen::new()) as Box<dyn Component>,
        ),
        (
            ScreenId::Shipyard,
            Box::new(shipyard::ShipyardScreen::new()) as Box<dyn Component>,
        ),
    ]
}
