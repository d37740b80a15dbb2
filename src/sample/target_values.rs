use std::collections::HashSet;
use std::slice::Iter;


/// The set of distinct values the target attribute takes
/// over a whole sample.
/// Values are kept in the order they are first observed.
///
/// This set is computed once per sample and passed,
/// read-only, into every entropy computation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetValues {
    values: Vec<String>,
}


impl TargetValues {
    /// Collect the distinct values of column `target` of `instances`.
    pub fn collect<S>(instances: &[Vec<S>], target: usize) -> Self
        where S: AsRef<str>
    {
        let mut seen = HashSet::new();
        let values = instances.iter()
            .map(|row| row[target].as_ref())
            .filter(|value| seen.insert(*value))
            .map(str::to_string)
            .collect::<Vec<_>>();

        Self { values }
    }


    /// Returns the number of distinct target values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no value is observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns `true` if `value` is one of the target values.
    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }


    /// Iterate the values in first-seen order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.values.iter()
    }
}


impl<'a> IntoIterator for &'a TargetValues {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
