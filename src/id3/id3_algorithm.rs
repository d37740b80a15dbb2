use colored::Colorize;

use crate::Sample;
use crate::common::checker;
use crate::error::Result;


use super::{
    node::*,
    criterion::*,
    partition::partition,
    attribute_set::AttributeSet,
    decision_tree::DecisionTree,
};


use std::fmt;


/// The ID3 algorithm.
/// Given a sample of categorical instances,
/// [`ID3`] grows a [`DecisionTree`] top-down,
/// splitting each node on the attribute of the highest information gain.
///
/// The code is based on:
/// J. R. Quinlan, [Induction of Decision
/// Trees](https://doi.org/10.1007/BF00116251),
/// Machine Learning 1, 81–106 (1986).
///
/// Each attribute is used at most once along a path,
/// so the depth of the tree is bounded by the number of attributes.
/// The tree is not pruned.
///
/// Ties are broken deterministically:
/// - among attributes of equal gain,
///   the one with the largest index wins;
/// - among labels of equal frequency,
///   the one that appears first in the subset wins.
///
/// [`ID3`] is constructed by [`ID3Builder`](super::ID3Builder).
///
/// # Example
/// ```no_run
/// use miniid3::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::new()
///     .file(file)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = ID3Builder::new(&sample)
///     .verbose(true)
///     .build()
///     .fit()
///     .unwrap();
///
/// println!("{tree}");
/// let accuracy = tree.accuracy(&sample).unwrap();
/// println!("accuracy (train) is: {accuracy}");
/// ```
pub struct ID3<'a> {
    sample: &'a Sample,
    verbose: bool,
}


impl<'a> ID3<'a> {
    /// Initialize [`ID3`].
    /// This method is called only via `ID3Builder::build`.
    #[inline]
    pub(super) fn from_components(sample: &'a Sample, verbose: bool)
        -> Self
    {
        Self { sample, verbose, }
    }


    /// Grow a decision tree over the whole sample.
    /// Returns `Error::EmptySample` if the sample has no instance.
    pub fn fit(&self) -> Result<DecisionTree> {
        checker::check_sample(self.sample)?;

        let n_sample = self.sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<usize>>();
        let attributes = AttributeSet::features_of(self.sample);

        let root = self.induce(&attributes, indices, 0);

        let tree = DecisionTree::from_components(
            root,
            self.sample.attributes().to_vec(),
            self.sample.target_index(),
        );
        Ok(tree)
    }


    /// Construct the sub-tree for the rows `indices`,
    /// splitting only on `attributes`.
    fn induce(
        &self,
        attributes: &AttributeSet,
        indices: Vec<usize>,
        depth: usize,
    ) -> Node
    {
        let sample = self.sample;
        let universe = sample.target_values();
        let target_frequency = frequency(
            sample, &indices[..], sample.target_index()
        );


        // No attribute is left to split on.
        if attributes.is_empty() {
            return self.majority_leaf(&target_frequency, depth);
        }


        // Every instance has the same label.
        if target_frequency.len() == 1 {
            return self.majority_leaf(&target_frequency, depth);
        }


        let prior = entropy(&target_frequency, universe);


        // A later attribute replaces the current best on ties.
        let best = attributes.iter()
            .map(|attribute| {
                let gain = information_gain(
                    sample, &indices[..], attribute, prior, universe
                );
                (attribute, gain)
            })
            .fold(None, |best, (attribute, gain)| match best {
                Some((_, top)) if gain < top => best,
                _ => Some((attribute, gain)),
            });

        let Some((attribute, gain)) = best else {
            return self.majority_leaf(&target_frequency, depth);
        };


        // No attribute reduces the entropy.
        if gain <= GAIN_TOLERANCE {
            return self.majority_leaf(&target_frequency, depth);
        }


        if self.verbose {
            println!(
                "{}    {}    {}",
                format!("  [depth {: >3}]", depth).bold().red(),
                format!(
                    "[SPLIT {}]", sample.attributes()[attribute]
                ).bold().green(),
                format!(
                    "[GAIN {gain:.4} | {} instances]", indices.len()
                ).bold().yellow(),
            );
        }


        let remaining = attributes.without(attribute);
        let children = partition(sample, indices, attribute)
            .into_iter()
            .map(|(value, part)| {
                let child = self.induce(&remaining, part, depth + 1);
                (value.to_string(), child)
            })
            .collect::<Vec<_>>();

        Node::branch(attribute, children)
    }


    /// Construct a leaf labeled by the most frequent target value.
    fn majority_leaf(&self, target_frequency: &Frequency<'_>, depth: usize)
        -> Node
    {
        let label = target_frequency.most_frequent()
            .unwrap_or_default();

        if self.verbose {
            println!(
                "{}    {}",
                format!("  [depth {: >3}]", depth).bold().red(),
                format!("[LEAF {label}]").bold().cyan(),
            );
        }

        Node::leaf(label)
    }
}


impl fmt::Display for ID3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_sample, n_attribute) = self.sample.shape();
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - # of instances: {n_sample}\n\
            - # of attributes: {n_attribute}\n\
            - # of classes: {n_class}\n\
            - Verbose: {verbose}\
            ",
            n_class = self.sample.target_values().len(),
            verbose = self.verbose,
        )?;
        writeln!(f, "{}", self.sample)?;

        write!(f, "----------")
    }
}
