//! Property-based tests for domain value objects and entities
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    BillOfMaterials, EmissionFactors, LegKind, ProductLineItem, RouteLeg, TransportEstimate,
    Waypoints,
    value_objects::{CellValue, GeoLocation, distance_km},
};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    fn location() -> impl Strategy<Value = GeoLocation> {
        (-90.0f64..=90.0f64, -180.0f64..=180.0f64)
            .prop_map(|(lat, lon)| GeoLocation::new_unchecked(lat, lon))
    }

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon);
            prop_assert!(loc.is_ok());
        }

        #[test]
        fn distance_to_self_is_zero(loc in location()) {
            prop_assert!(loc.distance_km(&loc).abs() < 0.001);
        }

        #[test]
        fn distance_is_symmetric(a in location(), b in location()) {
            prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-6);
        }

        #[test]
        fn distance_is_bounded_by_half_circumference(a in location(), b in location()) {
            let d = distance_km(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * 6371.0 + 1e-6);
        }
    }
}

// ============================================================================
// Transport Estimate Property Tests
// ============================================================================

mod transport_estimate_tests {
    use super::*;

    proptest! {
        #[test]
        fn totals_equal_sum_of_legs(
            distances in prop::collection::vec(0.0f64..5000.0f64, 0..4),
            road_factor in 0.0f64..1.0f64,
            cargo in 0.1f64..=100.0f64
        ) {
            let here = GeoLocation::new_unchecked(57.7, 11.9);
            let factors = EmissionFactors::new(road_factor, cargo).unwrap();
            let mut estimate = TransportEstimate::new(Waypoints::direct(here, here), factors);
            for d in &distances {
                estimate.push_leg(LegKind::Direct, RouteLeg::road(Vec::new(), *d));
            }

            let distance_sum: f64 = distances.iter().sum();
            let co2_sum: f64 = distances.iter().map(|d| d * road_factor * cargo).sum();
            prop_assert!((estimate.total_distance_km() - distance_sum).abs() < 1e-6);
            prop_assert!((estimate.total_co2_kg() - co2_sum).abs() < 1e-6);
        }

        #[test]
        fn co2_scales_linearly_with_cargo(
            distance in 0.0f64..5000.0f64,
            cargo in 0.1f64..=50.0f64
        ) {
            let leg = RouteLeg::road(Vec::new(), distance);
            let single = EmissionFactors::new(0.679, cargo).unwrap().co2_kg(&leg);
            let double = EmissionFactors::new(0.679, cargo * 2.0).unwrap().co2_kg(&leg);
            prop_assert!((double - 2.0 * single).abs() < 1e-6);
        }
    }
}

// ============================================================================
// Bill Of Materials Property Tests
// ============================================================================

mod bill_of_materials_tests {
    use super::*;

    fn line_item() -> impl Strategy<Value = ProductLineItem> {
        (0.0f64..500.0f64, 0.1f64..100.0f64, 1u32..50u32).prop_map(|(factor, length, qty)| {
            ProductLineItem::new("Single", "1", "100", length, qty, factor).unwrap()
        })
    }

    proptest! {
        #[test]
        fn total_is_sum_of_items(items in prop::collection::vec(line_item(), 0..10)) {
            let mut bill = BillOfMaterials::new();
            for item in &items {
                bill.add(item.clone());
            }
            let sum: f64 = items.iter().map(ProductLineItem::total_co2_kg).sum();
            prop_assert!((bill.total_co2_kg() - sum).abs() < 1e-6);
        }

        #[test]
        fn line_totals_are_whole_kilograms(item in line_item()) {
            prop_assert!((item.total_co2_kg() - item.total_co2_kg().round()).abs() < f64::EPSILON);
        }

        #[test]
        fn removing_keeps_total_consistent(
            items in prop::collection::vec(line_item(), 1..10),
            index in 0usize..10usize
        ) {
            let mut bill = BillOfMaterials::new();
            for item in &items {
                bill.add(item.clone());
            }
            let before = bill.total_co2_kg();
            match bill.remove(index) {
                Ok(removed) => {
                    prop_assert!((before - removed.total_co2_kg() - bill.total_co2_kg()).abs() < 1e-6);
                },
                Err(_) => prop_assert!(index >= items.len()),
            }
        }
    }
}

// ============================================================================
// CellValue Property Tests
// ============================================================================

mod cell_value_tests {
    use super::*;

    proptest! {
        #[test]
        fn whole_numbers_match_integer_keys(n in -100_000i64..100_000i64) {
            #[allow(clippy::cast_precision_loss)]
            let cell = CellValue::Number(n as f64);
            prop_assert!(cell.matches_key(&n.to_string()));
        }

        #[test]
        fn numeric_text_parses(n in -1.0e6f64..1.0e6f64) {
            let cell = CellValue::Text(n.to_string());
            prop_assert_eq!(cell.as_f64(), Some(n));
        }
    }
}
