use fixedbitset::FixedBitSet;

use crate::Sample;


/// The set of attribute indices still available for splitting.
/// Iteration is in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    bits: FixedBitSet,
}


impl AttributeSet {
    /// Construct a set of `indices`, each less than `width`.
    pub fn from_indices<I>(width: usize, indices: I) -> Self
        where I: IntoIterator<Item = usize>
    {
        let mut bits = FixedBitSet::with_capacity(width);
        indices.into_iter()
            .for_each(|i| { bits.insert(i); });

        Self { bits }
    }


    /// Returns the set of all non-target attributes of `sample`.
    pub fn features_of(sample: &Sample) -> Self {
        let width = sample.shape().1;
        Self::from_indices(width, sample.feature_indices())
    }


    /// Returns the number of attributes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }


    /// Returns `true` if no attribute is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns `true` if `attribute` is in the set.
    #[inline]
    pub fn contains(&self, attribute: usize) -> bool {
        self.bits.contains(attribute)
    }


    /// Iterate the attribute indices in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }


    /// Returns a copy of `self` without `attribute`.
    pub fn without(&self, attribute: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.set(attribute, false);
        Self { bits }
    }
}
