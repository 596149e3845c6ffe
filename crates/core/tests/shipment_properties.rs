//! Property tests for the default solver.
//!
//! Orders inside the exact search window are checked against a brute-force
//! enumeration of every pack combination. Larger orders go through the bulk
//! reduction, which is only checked for coverage and well-formedness.

use proptest::prelude::*;

use packwise::prelude::*;

/// Smallest reachable total at or above `quantity`, and the fewest packs reaching it.
fn brute_force(sizes: &[PackSize], quantity: u64) -> Option<(u64, u64)> {
    fn walk(
        sizes: &[PackSize],
        total: u64,
        packs: u64,
        quantity: u64,
        limit: u64,
        best: &mut Option<(u64, u64)>,
    ) {
        let Some((&size, rest)) = sizes.split_first() else {
            if total >= quantity && best.is_none_or(|current| (total, packs) < current) {
                *best = Some((total, packs));
            }

            return;
        };

        let (mut total, mut packs) = (total, packs);

        while total <= limit {
            walk(rest, total, packs, quantity, limit, best);

            total += size;
            packs += 1;
        }
    }

    let largest = sizes.iter().copied().max()?;
    let mut best = None;

    walk(sizes, 0, 0, quantity, quantity + largest, &mut best);

    best
}

fn pack_sizes(sizes: Vec<PackSize>) -> Result<PackSizes, TestCaseError> {
    PackSizes::new(sizes).map_err(|error| TestCaseError::fail(error.to_string()))
}

fn solve(quantity: u64, sizes: &PackSizes) -> Result<ShipmentPlan, TestCaseError> {
    compute_shipment(quantity, sizes).map_err(|error| TestCaseError::fail(error.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_searched_orders_are_optimal(
        sizes in prop::collection::vec(1_u64..=15, 1..=3),
        quantity in 0_u64..=150,
    ) {
        let sizes = pack_sizes(sizes)?;
        let largest = sizes.largest().unwrap_or(1);

        prop_assume!(quantity <= largest * LARGE_ORDER_BUFFER);

        let plan = solve(quantity, &sizes)?;
        let expected = brute_force(sizes.as_slice(), quantity);

        prop_assert_eq!(Some((plan.total_items(), plan.pack_count())), expected);
    }

    #[test]
    fn prop_plans_only_use_configured_sizes(
        sizes in prop::collection::vec(1_u64..=40, 1..=4),
        quantity in 0_u64..=20_000,
    ) {
        let sizes = pack_sizes(sizes)?;
        let plan = solve(quantity, &sizes)?;

        for (size, count) in plan.iter() {
            prop_assert!(sizes.contains(size), "size {} is not configured", size);
            prop_assert!(count > 0, "size {} has a zero count", size);
        }
    }

    #[test]
    fn prop_plans_never_under_ship(
        sizes in prop::collection::vec(1_u64..=40, 1..=4),
        quantity in 0_u64..=20_000,
    ) {
        let sizes = pack_sizes(sizes)?;
        let plan = solve(quantity, &sizes)?;
        let largest = sizes.largest().unwrap_or(1);

        prop_assert!(plan.total_items() >= quantity);
        prop_assert!(plan.surplus(quantity) < largest);
    }

    #[test]
    fn prop_plans_are_deterministic(
        sizes in prop::collection::vec(1_u64..=40, 1..=4),
        quantity in 0_u64..=20_000,
    ) {
        let first = solve(quantity, &pack_sizes(sizes.clone())?)?;

        let mut reversed = sizes;
        reversed.reverse();

        let second = solve(quantity, &pack_sizes(reversed)?)?;

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_empty_sizes_always_fail(quantity in any::<u64>()) {
        prop_assert_eq!(
            compute_shipment(quantity, &PackSizes::empty()),
            Err(PackingError::NoPacksConfigured)
        );
    }
}
