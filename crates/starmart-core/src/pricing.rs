// ── Price resolution ──
//
// Vending kinds have no live entity to appraise, so their advertised
// price is derived from static facets through an ordered fallback
// chain. The chain and its quirks (truncating multiplication, the
// asymmetric override comparison) are part of the storefront contract:
// catalogs in the wild are authored against exactly this arithmetic.

use crate::model::{PricingFacets, ReagentPriceIndex};

/// Base cost assumed for kinds with no usable pricing facets.
pub const DEFAULT_BASE_COST: u32 = 20;

/// Resolve the advertised price of a vending kind.
///
/// Resolution order:
/// 1. `base_price` when non-zero, else `stack_price × stack_count` when
///    both are present, else [`DEFAULT_BASE_COST`];
/// 2. the result is scaled by `modifier` and truncated toward zero --
///    in every branch;
/// 3. each content reagent adds `trunc(quantity × per_unit × modifier)`,
///    clamped to never subtract; reagents missing from the index are
///    skipped;
/// 4. a non-zero `vend_override_price` replaces the total when it is
///    less than or equal to it, without scaling. A higher override is
///    ignored: the computed price already undercuts it.
///
/// Pure and deterministic. Degenerate inputs (zero modifier, negative
/// quantities, absent facets) degrade to defaults rather than erroring.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn resolve(facets: &PricingFacets, modifier: f32, reagents: &dyn ReagentPriceIndex) -> u32 {
    let modifier = f64::from(modifier);

    let base = if facets.base_price != 0 {
        f64::from(facets.base_price)
    } else if let (Some(stack_price), Some(stack_count)) =
        (facets.stack_price, facets.stack_count)
    {
        f64::from(stack_price) * f64::from(stack_count)
    } else {
        f64::from(DEFAULT_BASE_COST)
    };

    let mut cost = (base * modifier).trunc().max(0.0) as i64;

    for content in &facets.content_reagents {
        let Some(per_unit) = reagents.price_per_unit(&content.reagent) else {
            continue;
        };
        let term = (f64::from(content.quantity) * f64::from(per_unit) * modifier).trunc() as i64;
        cost += term.max(0);
    }

    let override_price = i64::from(facets.vend_override_price);
    if override_price != 0 && override_price <= cost {
        cost = override_price;
    }

    u32::try_from(cost).unwrap_or(u32::MAX)
}

/// Advertised price of a vessel listing. Vessels carry a single stored
/// price; the only wrinkle is the storefront-wide free-listings flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselPrice {
    /// Free of charge -- rendered as a localized label, not a number.
    Free,
    Credits(u64),
}

pub fn vessel_price(listed: u64, free_listings: bool) -> VesselPrice {
    if free_listings {
        VesselPrice::Free
    } else {
        VesselPrice::Credits(listed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ReagentId, ReagentQuantity};

    struct Table(HashMap<ReagentId, f32>);

    impl ReagentPriceIndex for Table {
        fn price_per_unit(&self, reagent: &ReagentId) -> Option<f32> {
            self.0.get(reagent).copied()
        }
    }

    fn empty_table() -> Table {
        Table(HashMap::new())
    }

    fn facets() -> PricingFacets {
        PricingFacets::default()
    }

    #[test]
    fn no_facets_falls_back_to_default_base() {
        assert_eq!(resolve(&facets(), 1.0, &empty_table()), 20);
    }

    #[test]
    fn base_price_wins_when_set() {
        let f = PricingFacets {
            base_price: 150,
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 150);
    }

    #[test]
    fn stack_fallback_applies_only_when_base_unset() {
        let f = PricingFacets {
            base_price: 0,
            stack_price: Some(5),
            stack_count: Some(4),
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 20);

        // base_price set -> stack fields ignored entirely
        let f = PricingFacets {
            base_price: 7,
            stack_price: Some(5),
            stack_count: Some(4),
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 7);
    }

    #[test]
    fn lone_stack_field_degrades_to_default() {
        let f = PricingFacets {
            stack_price: Some(5),
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 20);
    }

    #[test]
    fn modifier_scales_and_truncates_every_branch() {
        // default branch
        assert_eq!(resolve(&facets(), 1.5, &empty_table()), 30);
        // base branch: 7 * 1.5 = 10.5 -> 10
        let f = PricingFacets {
            base_price: 7,
            ..facets()
        };
        assert_eq!(resolve(&f, 1.5, &empty_table()), 10);
        // stack branch: 5*3 * 0.9 = 13.5 -> 13
        let f = PricingFacets {
            stack_price: Some(5),
            stack_count: Some(3),
            ..facets()
        };
        assert_eq!(resolve(&f, 0.9, &empty_table()), 13);
    }

    #[test]
    fn zero_modifier_prices_at_zero() {
        let f = PricingFacets {
            base_price: 500,
            ..facets()
        };
        assert_eq!(resolve(&f, 0.0, &empty_table()), 0);
    }

    #[test]
    fn reagent_contents_add_on_top() {
        let table = Table(HashMap::from([(ReagentId::from("Cola"), 0.5)]));
        let f = PricingFacets {
            base_price: 10,
            content_reagents: vec![ReagentQuantity {
                reagent: ReagentId::from("Cola"),
                quantity: 30.0,
            }],
            ..facets()
        };
        // 10 + trunc(30 * 0.5) = 25
        assert_eq!(resolve(&f, 1.0, &table), 25);
    }

    #[test]
    fn unknown_reagents_are_skipped_silently() {
        let f = PricingFacets {
            base_price: 10,
            content_reagents: vec![ReagentQuantity {
                reagent: ReagentId::from("Unobtainium"),
                quantity: 10.0,
            }],
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 10);
    }

    #[test]
    fn negative_quantity_contributes_nothing() {
        let table = Table(HashMap::from([(ReagentId::from("Cola"), 2.0)]));
        let f = PricingFacets {
            base_price: 10,
            content_reagents: vec![ReagentQuantity {
                reagent: ReagentId::from("Cola"),
                quantity: -5.0,
            }],
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &table), 10);
    }

    #[test]
    fn override_caps_but_never_raises() {
        let f = PricingFacets {
            stack_price: Some(5),
            stack_count: Some(4),
            vend_override_price: 15,
            ..facets()
        };
        // computed 20, override 15 <= 20 -> 15, unscaled
        assert_eq!(resolve(&f, 1.0, &empty_table()), 15);

        let f = PricingFacets {
            vend_override_price: 25,
            ..facets()
        };
        // computed 20, override 25 > 20 -> ignored
        assert_eq!(resolve(&f, 1.0, &empty_table()), 20);
    }

    #[test]
    fn override_is_not_scaled_by_modifier() {
        let f = PricingFacets {
            base_price: 100,
            vend_override_price: 40,
            ..facets()
        };
        // computed 100 * 2.0 = 200; override 40 applies exactly
        assert_eq!(resolve(&f, 2.0, &empty_table()), 40);
    }

    #[test]
    fn override_equal_to_cost_applies() {
        let f = PricingFacets {
            vend_override_price: 20,
            ..facets()
        };
        assert_eq!(resolve(&f, 1.0, &empty_table()), 20);
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = Table(HashMap::from([(ReagentId::from("Sugar"), 0.3)]));
        let f = PricingFacets {
            base_price: 12,
            content_reagents: vec![ReagentQuantity {
                reagent: ReagentId::from("Sugar"),
                quantity: 15.0,
            }],
            ..facets()
        };
        let first = resolve(&f, 1.25, &table);
        let second = resolve(&f, 1.25, &table);
        assert_eq!(first, second);
    }

    #[test]
    fn vessel_price_respects_free_listings() {
        assert_eq!(vessel_price(4000, false), VesselPrice::Credits(4000));
        assert_eq!(vessel_price(4000, true), VesselPrice::Free);
    }
}
