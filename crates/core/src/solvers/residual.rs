//! Residual Search Solver
//!
//! Large orders are shipped mostly in the largest pack. The solver allocates that
//! bulk up front and runs an exact fewest-packs search only over the residual: the
//! remainder plus at most [`LARGE_ORDER_BUFFER`] largest packs. This keeps the
//! search table bounded by the largest pack size rather than by the order size.
//!
//! The exact search fills a table over every total from zero to `target + largest`
//! with the fewest packs that sum to that total exactly, then takes the first
//! reachable total at or above `target`. Any order can be covered within one
//! largest pack of surplus, so the table always contains an answer.
//!
//! The bulk reduction assumes the best plan for a large order is "as many largest
//! packs as possible, plus the best residual". That holds for typical pack
//! catalogues but is not proven for arbitrary size sets.

use smallvec::SmallVec;

use crate::{
    packs::{PackSize, PackSizes},
    shipment::ShipmentPlan,
    solvers::{PackingError, Solver},
};

/// Number of largest packs kept in the residual for large orders.
pub const LARGE_ORDER_BUFFER: u64 = 50;

const NO_REACHABLE_TOTAL: PackingError = PackingError::InvariantViolation {
    message: "no reachable total within the residual search window",
};

const BROKEN_TRACE: PackingError = PackingError::InvariantViolation {
    message: "pack trace does not lead back to zero",
};

/// Bulk reduction followed by an exact search over the residual.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidualSearchSolver;

impl Solver for ResidualSearchSolver {
    fn solve(quantity: u64, sizes: &PackSizes) -> Result<ShipmentPlan, PackingError> {
        let Some(largest) = sizes.largest() else {
            return Err(PackingError::NoPacksConfigured);
        };

        let reduction = Reduction::for_order(quantity, largest)?;

        let (target, len) = reduction
            .target_index()
            .zip(reduction.table_len(largest))
            .ok_or(PackingError::Overflow { quantity, largest })?;

        let table = ResidualTable::build(len, sizes)?;

        let mut plan = table.reconstruct(table.best_total(target)?)?;

        plan.add(largest, reduction.bulk_count);

        Ok(plan)
    }
}

/// Split of an order into largest packs shipped outright and a residual to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    /// Items left for the exact search
    pub target: u64,

    /// Largest packs shipped without searching
    pub bulk_count: u64,
}

impl Reduction {
    /// Reduce an order against the largest pack size.
    ///
    /// Orders up to `largest × LARGE_ORDER_BUFFER` are searched in full. Larger orders
    /// keep `quantity mod largest` plus [`LARGE_ORDER_BUFFER`] largest packs as the
    /// residual and ship everything else as largest packs.
    ///
    /// # Errors
    ///
    /// Returns [`PackingError::Overflow`] if the buffer window does not fit in `u64`,
    /// or if `largest` is zero while `quantity` is not.
    pub fn for_order(quantity: u64, largest: PackSize) -> Result<Self, PackingError> {
        let window = largest
            .checked_mul(LARGE_ORDER_BUFFER)
            .ok_or(PackingError::Overflow { quantity, largest })?;

        if quantity <= window {
            return Ok(Self {
                target: quantity,
                bulk_count: 0,
            });
        }

        let remainder = quantity
            .checked_rem(largest)
            .ok_or(PackingError::Overflow { quantity, largest })?;

        let target = remainder
            .checked_add(window)
            .ok_or(PackingError::Overflow { quantity, largest })?;

        let bulk_count = quantity
            .checked_sub(target)
            .map(|bulk| bulk / largest)
            .ok_or(PackingError::InvariantViolation {
                message: "residual target exceeds the ordered quantity",
            })?;

        Ok(Self { target, bulk_count })
    }

    /// Whether any largest packs were allocated outside the search.
    pub fn is_reduced(&self) -> bool {
        self.bulk_count > 0
    }

    fn target_index(self) -> Option<usize> {
        usize::try_from(self.target).ok()
    }

    /// One slot for every total in `0..=target + largest`.
    fn table_len(self, largest: PackSize) -> Option<usize> {
        self.target
            .checked_add(largest)
            .and_then(|limit| usize::try_from(limit).ok())
            .and_then(|limit| limit.checked_add(1))
    }
}

#[derive(Debug)]
struct ResidualTable {
    /// Fewest packs summing exactly to each total, `None` when unreachable.
    min_packs: Vec<Option<u64>>,

    /// Last pack added on the best path to each total.
    last_used: Vec<PackSize>,
}

impl ResidualTable {
    fn build(len: usize, sizes: &PackSizes) -> Result<Self, PackingError> {
        // Sizes that don't fit `usize` can never be subtracted from a total.
        let steps: SmallVec<[(PackSize, usize); 8]> = sizes
            .iter()
            .filter_map(|size| usize::try_from(size).ok().map(|step| (size, step)))
            .collect();

        let mut min_packs: Vec<Option<u64>> = Vec::new();
        let mut last_used: Vec<PackSize> = Vec::new();

        min_packs
            .try_reserve_exact(len)
            .and_then(|()| last_used.try_reserve_exact(len))
            .map_err(|source| PackingError::Allocation {
                totals: len,
                source,
            })?;

        min_packs.resize(len, None);
        last_used.resize(len, 0);

        if let Some(zero) = min_packs.first_mut() {
            *zero = Some(0);
        }

        for total in 1..len {
            let mut best: Option<(u64, PackSize)> = None;

            // Largest first, and only a strict improvement replaces the current best,
            // so the larger size wins ties.
            for &(size, step) in &steps {
                let Some(previous) = total
                    .checked_sub(step)
                    .and_then(|rest| min_packs.get(rest).copied().flatten())
                else {
                    continue;
                };

                let packs = previous.saturating_add(1);

                if best.is_none_or(|(fewest, _)| packs < fewest) {
                    best = Some((packs, size));
                }
            }

            if let Some((packs, size)) = best
                && let (Some(slot), Some(trace)) =
                    (min_packs.get_mut(total), last_used.get_mut(total))
            {
                *slot = Some(packs);
                *trace = size;
            }
        }

        Ok(Self {
            min_packs,
            last_used,
        })
    }

    /// First reachable total at or above `target`.
    fn best_total(&self, target: usize) -> Result<usize, PackingError> {
        self.min_packs
            .iter()
            .enumerate()
            .skip(target)
            .find_map(|(total, packs)| packs.is_some().then_some(total))
            .ok_or(NO_REACHABLE_TOTAL)
    }

    fn reconstruct(&self, total: usize) -> Result<ShipmentPlan, PackingError> {
        let mut plan = ShipmentPlan::new();
        let mut current = total;

        while current > 0 {
            let size = self
                .last_used
                .get(current)
                .copied()
                .filter(|size| *size > 0)
                .ok_or(BROKEN_TRACE)?;

            current = usize::try_from(size)
                .ok()
                .and_then(|step| current.checked_sub(step))
                .ok_or(BROKEN_TRACE)?;

            plan.add(size, 1);
        }

        Ok(plan)
    }
}
