// ── Core identity types ──
//
// KindId and ReagentId are the stable symbolic identifiers that every
// catalog entry, inventory slot, and pricing facet hangs off of. They
// are opaque strings as far as this crate is concerned -- the catalog
// author picks them, the engine only compares and displays them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── KindId ──────────────────────────────────────────────────────────

/// Stable identifier for a listable item kind (a vending product or a
/// vessel class). Two snapshots referring to the same kind always carry
/// the same `KindId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KindId(String);

impl KindId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for KindId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for KindId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KindId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ── ReagentId ───────────────────────────────────────────────────────

/// Identifier for a reagent referenced by a kind's contents. Reagents
/// live in their own namespace; a catalog may reference reagents that
/// are not in the active reagent set, which is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReagentId(String);

impl ReagentId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReagentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReagentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ReagentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_id_round_trips_display() {
        let id = KindId::from("ClothingUniformJumpsuit");
        assert_eq!(id.to_string(), "ClothingUniformJumpsuit");
        assert_eq!(id.as_str(), "ClothingUniformJumpsuit");
    }

    #[test]
    fn kind_id_from_str() {
        let id: KindId = "DrinkColaCan".parse().unwrap();
        assert_eq!(id, KindId::new("DrinkColaCan"));
    }

    #[test]
    fn reagent_id_equality() {
        assert_eq!(ReagentId::from("Sugar"), ReagentId::new("Sugar"));
        assert_ne!(ReagentId::from("Sugar"), ReagentId::from("Caffeine"));
    }
}
