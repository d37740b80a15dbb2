//! Frequency counting, entropy, and information gain.
//!
//! Every function here works on a subset of a [`Sample`],
//! given as a slice of row indices.
//! The set of target values is passed explicitly,
//! so that each computation can be checked in isolation.
use std::collections::HashMap;

use crate::{Sample, TargetValues};


/// Gains at or below this value are treated as zero.
/// Rounding leaves the gain of an uninformative attribute
/// within a few ulps of zero, on either side.
pub const GAIN_TOLERANCE: f64 = 1e-12;


/// Counts of the values of an attribute over a subset of instances.
/// Values are kept in the order they are first observed.
/// Absent values have no entry.
#[derive(Debug, Clone, Default)]
pub struct Frequency<'a> {
    counts: Vec<(&'a str, usize)>,
    position: HashMap<&'a str, usize>,
}


impl<'a> Frequency<'a> {
    /// Count one occurrence of `value`.
    #[inline]
    fn add(&mut self, value: &'a str) {
        match self.position.get(value) {
            Some(&k) => { self.counts[k].1 += 1; },
            None => {
                self.position.insert(value, self.counts.len());
                self.counts.push((value, 1));
            },
        }
    }


    /// Returns the count of `value`,
    /// or `None` if no instance holds it.
    #[inline]
    pub fn get(&self, value: &str) -> Option<usize> {
        self.position.get(value).map(|&k| self.counts[k].1)
    }


    /// Returns the number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if nothing is counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Returns the number of counted instances.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }


    /// Iterate `(value, count)` pairs in first-seen order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().copied()
    }


    /// Returns the value with the largest count.
    /// A later value replaces the current one
    /// only if its count is strictly larger,
    /// so ties go to the value seen first.
    pub fn most_frequent(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for &(value, count) in self.counts.iter() {
            match best {
                Some((_, top)) if count <= top => {},
                _ => { best = Some((value, count)); },
            }
        }
        best.map(|(value, _)| value)
    }
}


/// Count the values of `attribute` over the rows `indices` of `sample`.
pub fn frequency<'a>(sample: &'a Sample, indices: &[usize], attribute: usize)
    -> Frequency<'a>
{
    let mut freq = Frequency::default();
    for &i in indices {
        freq.add(sample.value(i, attribute));
    }
    freq
}


/// Returns the Shannon entropy (base 2) of the target distribution
/// described by `target_frequency`.
/// The sum runs over `universe`;
/// a value with no count contributes nothing.
/// The entropy of an empty distribution is `0`.
pub fn entropy(target_frequency: &Frequency<'_>, universe: &TargetValues)
    -> f64
{
    let total = target_frequency.total();
    if total == 0 { return 0f64; }
    let total = total as f64;

    universe.iter()
        .filter_map(|value| target_frequency.get(value))
        .fold(0f64, |acc, count| {
            let p = count as f64 / total;
            acc - p * p.log2()
        })
}


/// Returns the entropy of the target attribute
/// over the rows of `indices` whose `attribute` equals `value`.
/// If no row matches, the entropy is `0`.
pub fn restricted_entropy(
    sample: &Sample,
    indices: &[usize],
    attribute: usize,
    value: &str,
    universe: &TargetValues,
) -> f64
{
    let target = sample.target_index();
    let mut freq = Frequency::default();
    indices.iter()
        .copied()
        .filter(|&i| sample.value(i, attribute) == value)
        .for_each(|i| freq.add(sample.value(i, target)));

    entropy(&freq, universe)
}


/// Returns the information gain of splitting the rows `indices`
/// on `attribute`, where `prior` is the entropy of those rows.
///
/// ```text
/// gain = prior - Σ_v (|S_v| / |S|) * entropy(S_v)
/// ```
pub fn information_gain(
    sample: &Sample,
    indices: &[usize],
    attribute: usize,
    prior: f64,
    universe: &TargetValues,
) -> f64
{
    if indices.is_empty() { return 0f64; }
    let n_instance = indices.len() as f64;

    let conditional = frequency(sample, indices, attribute)
        .iter()
        .map(|(value, count)| {
            let weight = count as f64 / n_instance;
            weight * restricted_entropy(
                sample, indices, attribute, value, universe
            )
        })
        .sum::<f64>();

    prior - conditional
}
