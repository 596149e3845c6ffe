//! Shipment scenarios for the default solver

use std::collections::BTreeMap;

use testresult::TestResult;

use packwise::prelude::*;

type Plan = BTreeMap<PackSize, u64>;

fn ship(sizes: &[PackSize], quantity: u64) -> Result<Plan, Box<dyn std::error::Error>> {
    let sizes = PackSizes::try_from(sizes)?;

    Ok(compute_shipment(quantity, &sizes)?.into_inner())
}

#[test]
fn exact_match_on_smallest_size() -> TestResult {
    assert_eq!(ship(&[100, 200, 1000], 100)?, BTreeMap::from([(100, 1)]));

    Ok(())
}

#[test]
fn exact_match_on_middle_size() -> TestResult {
    assert_eq!(ship(&[100, 200, 1000], 200)?, BTreeMap::from([(200, 1)]));

    Ok(())
}

#[test]
fn exact_match_on_largest_size() -> TestResult {
    assert_eq!(ship(&[100, 200, 1000], 1000)?, BTreeMap::from([(1000, 1)]));

    Ok(())
}

#[test]
fn order_below_smallest_size_ships_one_smallest_pack() -> TestResult {
    assert_eq!(ship(&[100, 200, 1000], 1)?, BTreeMap::from([(100, 1)]));

    Ok(())
}

#[test]
fn order_between_sizes_prefers_one_bigger_pack() -> TestResult {
    // 200 items either way, one pack beats two.
    assert_eq!(ship(&[100, 200, 1000], 101)?, BTreeMap::from([(200, 1)]));

    Ok(())
}

#[test]
fn order_above_largest_size() -> TestResult {
    assert_eq!(
        ship(&[100, 200, 1000], 1001)?,
        BTreeMap::from([(1000, 1), (100, 1)])
    );

    Ok(())
}

#[test]
fn mixed_sizes_minimise_surplus_then_packs() -> TestResult {
    assert_eq!(
        ship(&[250, 500, 1000, 2000, 5000], 12_001)?,
        BTreeMap::from([(5000, 2), (2000, 1), (250, 1)])
    );

    Ok(())
}

#[test]
fn large_order_uses_bulk_largest_packs() -> TestResult {
    assert_eq!(
        ship(&[250, 500, 1000, 2000, 5000], 500_001)?,
        BTreeMap::from([(5000, 100), (250, 1)])
    );

    Ok(())
}

#[test]
fn large_order_with_coprime_sizes_is_exact() -> TestResult {
    let plan = ship(&[23, 31, 53], 500_000)?;

    assert_eq!(plan, BTreeMap::from([(23, 2), (31, 7), (53, 9429)]));
    assert_eq!(plan.iter().map(|(size, count)| size * count).sum::<u64>(), 500_000);

    Ok(())
}

#[test]
fn unordered_and_duplicate_sizes_give_the_same_plan() -> TestResult {
    assert_eq!(
        ship(&[5000, 250, 2000, 250, 1000, 500, 5000], 12_001)?,
        ship(&[250, 500, 1000, 2000, 5000], 12_001)?
    );

    Ok(())
}

#[test]
fn single_unit_pack_ships_the_order_exactly() -> TestResult {
    assert_eq!(ship(&[1], 37)?, BTreeMap::from([(1, 37)]));
    assert_eq!(ship(&[1], 1234)?, BTreeMap::from([(1, 1234)]));

    Ok(())
}

#[test]
fn zero_quantity_ships_nothing() -> TestResult {
    assert!(ship(&[250, 500], 0)?.is_empty());

    Ok(())
}

#[test]
fn largest_allowed_pack_size_is_searchable() -> TestResult {
    assert_eq!(
        ship(&[MAX_PACK_SIZE], 1)?,
        BTreeMap::from([(MAX_PACK_SIZE, 1)])
    );

    Ok(())
}

#[test]
fn oversized_pack_is_rejected_before_searching() {
    let result = PackSizes::new([250, 1 << 40]);

    assert_eq!(result, Err(PackSizesError::TooLarge { size: 1 << 40 }));
}

#[test]
fn no_packs_configured_is_an_error() -> TestResult {
    for quantity in [0, 1, 500_001] {
        let result = compute_shipment(quantity, &PackSizes::empty());

        assert_eq!(result, Err(PackingError::NoPacksConfigured));
    }

    assert_eq!(PackingError::NoPacksConfigured.to_string(), "no packs configured");

    Ok(())
}

#[test]
fn plan_summary_reports_surplus_and_pack_count() -> TestResult {
    let sizes = PackSizes::new([250, 500, 1000, 2000, 5000])?;

    let plan = compute_shipment(12_001, &sizes)?;

    assert_eq!(plan.total_items(), 12_250);
    assert_eq!(plan.surplus(12_001), 249);
    assert_eq!(plan.pack_count(), 4);

    Ok(())
}

#[test]
fn plan_serializes_as_size_to_count_object() -> TestResult {
    let sizes = PackSizes::new([250, 500, 1000, 2000, 5000])?;

    let plan = compute_shipment(12_001, &sizes)?;
    let json = serde_json::to_string(&plan)?;

    assert_eq!(json, r#"{"250":1,"2000":1,"5000":2}"#);
    assert_eq!(serde_json::from_str::<ShipmentPlan>(&json)?, plan);

    Ok(())
}
