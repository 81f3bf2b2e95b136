//! Catalog file loading.
//!
//! A catalog file bundles everything one storefront deployment needs:
//! the kind definitions, the reagent price table, and the initial
//! vending/shipyard state. TOML is the native format; JSON is accepted
//! for machine-generated catalogs.

use std::collections::HashMap;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use starmart_core::{Catalog, CatalogItem, ReagentId, ShipyardState, VendingState};

/// On-disk catalog layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    kinds: Vec<CatalogItem>,
    reagents: HashMap<ReagentId, f32>,
    vending: VendingState,
    shipyard: ShipyardState,
}

/// Everything loaded from one catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub vending: VendingState,
    pub shipyard: ShipyardState,
}

impl From<CatalogFile> for LoadedCatalog {
    fn from(file: CatalogFile) -> Self {
        Self {
            catalog: Catalog::new(file.kinds, file.reagents),
            vending: file.vending,
            shipyard: file.shipyard,
        }
    }
}

/// Load a catalog from a TOML or JSON file, picked by extension.
pub fn load(path: &Path) -> Result<LoadedCatalog> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading catalog file {}", path.display()))?;

    let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing JSON catalog {}", path.display()))?,
        _ => toml::from_str(&raw)
            .wrap_err_with(|| format!("parsing TOML catalog {}", path.display()))?,
    };

    tracing::info!(
        path = %path.display(),
        kinds = file.kinds.len(),
        slots = file.vending.inventory.len(),
        listings = file.shipyard.listings.len(),
        "catalog loaded"
    );
    Ok(file.into())
}

/// The built-in demo catalog, for running without a deployment file.
pub fn demo() -> LoadedCatalog {
    let file: CatalogFile = toml::from_str(include_str!("../data/demo.toml"))
        .expect("embedded demo catalog is valid");
    file.into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use starmart_core::KindId;

    #[test]
    fn demo_catalog_parses_and_cross_references() {
        let loaded = demo();
        assert!(!loaded.catalog.is_empty());
        // every vending slot points at a defined kind
        for entry in &loaded.vending.inventory {
            assert!(
                loaded.catalog.get(&entry.kind).is_some(),
                "undefined kind {} in demo inventory",
                entry.kind
            );
        }
        assert!(!loaded.shipyard.listings.is_empty());
    }

    #[test]
    fn toml_round_trip_through_tempfile() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"
[[kinds]]
id = "cola"
name = "Cola"

[kinds.facets]
base_price = 10

[vending]
balance = 42
inventory = [{{ kind = "cola", amount = 2 }}]
"#
        )
        .unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.vending.balance, 42);
        assert_eq!(loaded.vending.inventory[0].kind, KindId::from("cola"));
        assert_eq!(
            loaded.catalog.get(&KindId::from("cola")).unwrap().facets.base_price,
            10
        );
        // omitted sections default
        assert!(loaded.shipyard.listings.is_empty());
        assert!((loaded.vending.price_modifier - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn json_catalog_is_accepted() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"{{"kinds": [{{"id": "cola", "name": "Cola"}}], "vending": {{"inventory": [{{"kind": "cola", "amount": 1}}]}}}}"#
        )
        .unwrap();

        let loaded = load(file.path()).unwrap();
        assert_eq!(loaded.vending.inventory.len(), 1);
        assert!(loaded.catalog.get(&KindId::from("cola")).is_some());
    }

    #[test]
    fn missing_file_is_a_readable_error() {
        let err = load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("reading catalog file"));
    }
}
