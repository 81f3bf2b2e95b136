//! Screen trait and screen identifier enum.

use std::fmt;

/// Identifies each storefront screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Vending, // 1
    Shipyard, // 2
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 2] = [Self::Vending, Self::Shipyard];

    /// Numeric key for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Vending => 1,
            Self::Shipyard => 2,
        }
    }

    /// Screen from a numeric key. Returns None for out-of-range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Vending),
            2 => Some(Self::Shipyard),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vending => "Vending",
            Self::Shipyard => "Shipyard",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(screen.number()), Some(screen));
        }
        assert_eq!(ScreenId::from_number(9), None);
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(ScreenId::Vending.next(), ScreenId::Shipyard);
        assert_eq!(ScreenId::Shipyard.next(), ScreenId::Vending);
        assert_eq!(ScreenId::Vending.prev(), ScreenId::Shipyard);
    }
}
