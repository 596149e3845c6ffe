//! Shipment Plans

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::packs::PackSize;

/// How many packs of each size to ship.
///
/// Sizes with a zero count are never stored. Serializes as a map of size to count,
/// e.g. `{"250":1,"5000":2}` in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentPlan {
    packs: BTreeMap<PackSize, u64>,
}

impl ShipmentPlan {
    /// An empty plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` packs of `size` to the plan.
    pub fn add(&mut self, size: PackSize, count: u64) {
        if count == 0 {
            return;
        }

        let entry = self.packs.entry(size).or_insert(0);

        *entry = entry.saturating_add(count);
    }

    /// Merge another plan into this one, summing counts of matching sizes.
    pub fn merge(&mut self, other: ShipmentPlan) {
        for (size, count) in other.packs {
            self.add(size, count);
        }
    }

    /// Number of packs of `size` in the plan
    pub fn count_for(&self, size: PackSize) -> u64 {
        self.packs.get(&size).copied().unwrap_or(0)
    }

    /// Total number of items shipped, i.e. the sum of size × count.
    pub fn total_items(&self) -> u64 {
        self.packs.iter().fold(0_u64, |total, (size, count)| {
            total.saturating_add(size.saturating_mul(*count))
        })
    }

    /// Total number of packs shipped
    pub fn pack_count(&self) -> u64 {
        self.packs
            .values()
            .fold(0_u64, |total, count| total.saturating_add(*count))
    }

    /// Items shipped beyond `ordered`
    pub fn surplus(&self, ordered: u64) -> u64 {
        self.total_items().saturating_sub(ordered)
    }

    /// Number of distinct sizes used
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Whether the plan ships nothing
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Iterate `(size, count)` pairs, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (PackSize, u64)> + '_ {
        self.packs.iter().map(|(size, count)| (*size, *count))
    }

    /// Consume the plan, returning the underlying size → count map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<PackSize, u64> {
        self.packs
    }
}

impl FromIterator<(PackSize, u64)> for ShipmentPlan {
    fn from_iter<T: IntoIterator<Item = (PackSize, u64)>>(iter: T) -> Self {
        let mut plan = Self::new();

        for (size, count) in iter {
            plan.add(size, count);
        }

        plan
    }
}

impl IntoIterator for ShipmentPlan {
    type Item = (PackSize, u64);
    type IntoIter = btree_map::IntoIter<PackSize, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.packs.into_iter()
    }
}

impl From<ShipmentPlan> for BTreeMap<PackSize, u64> {
    fn from(plan: ShipmentPlan) -> Self {
        plan.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_not_stored() {
        let mut plan = ShipmentPlan::new();

        plan.add(250, 0);

        assert!(plan.is_empty());
        assert_eq!(plan.count_for(250), 0);
    }

    #[test]
    fn adding_same_size_sums_counts() {
        let mut plan = ShipmentPlan::new();

        plan.add(5000, 2);
        plan.add(250, 1);
        plan.add(5000, 98);

        assert_eq!(plan.count_for(5000), 100);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.pack_count(), 101);
        assert_eq!(plan.total_items(), 500_250);
        assert_eq!(plan.surplus(500_001), 249);
    }

    #[test]
    fn merge_combines_plans() {
        let mut bulk: ShipmentPlan = [(53, 9383)].into_iter().collect();
        let residual: ShipmentPlan = [(53, 46), (31, 7), (23, 2)].into_iter().collect();

        bulk.merge(residual);

        assert_eq!(
            bulk.iter().collect::<Vec<_>>(),
            vec![(23, 2), (31, 7), (53, 9429)]
        );
    }

    #[test]
    fn surplus_never_underflows() {
        let plan: ShipmentPlan = [(100, 1)].into_iter().collect();

        assert_eq!(plan.surplus(250), 0);
    }
}
