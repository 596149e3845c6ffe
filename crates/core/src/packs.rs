//! Pack Sizes

use smallvec::SmallVec;
use thiserror::Error;

/// Number of items a single pack holds.
pub type PackSize = u64;

/// Largest pack size accepted.
///
/// The residual search keeps a table entry for every total up to roughly 51 of the
/// largest pack, so this bounds the memory a single order can ask for.
pub const MAX_PACK_SIZE: PackSize = 100_000;

/// Errors raised while building a [`PackSizes`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackSizesError {
    /// A pack must hold at least one item.
    #[error("pack size must be greater than zero")]
    ZeroSize,

    /// The pack is larger than [`MAX_PACK_SIZE`].
    #[error("pack size {size} exceeds the maximum of {MAX_PACK_SIZE}")]
    TooLarge {
        /// Rejected size
        size: PackSize,
    },
}

/// Distinct, positive pack sizes, held largest first.
///
/// The set owns its sizes, so building one never touches the caller's collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackSizes {
    sizes: SmallVec<[PackSize; 8]>,
}

impl PackSizes {
    /// Build a pack size set from any collection of sizes.
    ///
    /// Duplicates are dropped and the result is ordered largest first.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizesError::ZeroSize`] if any size is zero, or
    /// [`PackSizesError::TooLarge`] if any size exceeds [`MAX_PACK_SIZE`].
    pub fn new<I>(sizes: I) -> Result<Self, PackSizesError>
    where
        I: IntoIterator<Item = PackSize>,
    {
        let mut sizes: SmallVec<[PackSize; 8]> = sizes.into_iter().collect();

        if sizes.contains(&0) {
            return Err(PackSizesError::ZeroSize);
        }

        if let Some(&size) = sizes.iter().find(|&&size| size > MAX_PACK_SIZE) {
            return Err(PackSizesError::TooLarge { size });
        }

        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();

        Ok(Self { sizes })
    }

    /// An empty set, i.e. no packs configured.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The largest configured size
    pub fn largest(&self) -> Option<PackSize> {
        self.sizes.first().copied()
    }

    /// The smallest configured size
    pub fn smallest(&self) -> Option<PackSize> {
        self.sizes.last().copied()
    }

    /// Number of distinct sizes
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no sizes are configured
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Whether `size` is one of the configured sizes
    pub fn contains(&self, size: PackSize) -> bool {
        self.sizes.contains(&size)
    }

    /// Iterate sizes, largest first.
    pub fn iter(&self) -> impl Iterator<Item = PackSize> + '_ {
        self.sizes.iter().copied()
    }

    /// Sizes as a slice, largest first.
    pub fn as_slice(&self) -> &[PackSize] {
        &self.sizes
    }
}

impl TryFrom<&[PackSize]> for PackSizes {
    type Error = PackSizesError;

    fn try_from(sizes: &[PackSize]) -> Result<Self, Self::Error> {
        Self::new(sizes.iter().copied())
    }
}

impl TryFrom<Vec<PackSize>> for PackSizes {
    type Error = PackSizesError;

    fn try_from(sizes: Vec<PackSize>) -> Result<Self, Self::Error> {
        Self::new(sizes)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sizes_are_sorted_largest_first() -> TestResult {
        let sizes = PackSizes::new([250, 5000, 500, 2000, 1000])?;

        assert_eq!(sizes.as_slice(), &[5000, 2000, 1000, 500, 250]);
        assert_eq!(sizes.largest(), Some(5000));
        assert_eq!(sizes.smallest(), Some(250));

        Ok(())
    }

    #[test]
    fn duplicate_sizes_are_dropped() -> TestResult {
        let sizes = PackSizes::new([53, 23, 53, 31, 23])?;

        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes.as_slice(), &[53, 31, 23]);

        Ok(())
    }

    #[test]
    fn zero_size_is_rejected() {
        let result = PackSizes::new([100, 0, 200]);

        assert_eq!(result, Err(PackSizesError::ZeroSize));
    }

    #[test]
    fn sizes_above_the_maximum_are_rejected() -> TestResult {
        let result = PackSizes::new([250, 1 << 40]);

        assert_eq!(result, Err(PackSizesError::TooLarge { size: 1 << 40 }));
        assert_eq!(
            PackSizes::new([MAX_PACK_SIZE])?.largest(),
            Some(MAX_PACK_SIZE)
        );

        Ok(())
    }

    #[test]
    fn empty_input_builds_empty_set() -> TestResult {
        let sizes = PackSizes::new(Vec::new())?;

        assert!(sizes.is_empty());
        assert_eq!(sizes, PackSizes::empty());
        assert_eq!(sizes.largest(), None);

        Ok(())
    }

    #[test]
    fn building_from_slice_leaves_input_untouched() -> TestResult {
        let input = vec![100, 1000, 200, 100];

        let sizes = PackSizes::try_from(input.as_slice())?;

        assert_eq!(input, vec![100, 1000, 200, 100]);
        assert!(sizes.contains(200));
        assert!(!sizes.contains(300));

        Ok(())
    }
}
