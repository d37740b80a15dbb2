//! The ID3 decision tree.
//!
//! [`ID3`] grows a [`DecisionTree`] over a [`Sample`](crate::Sample)
//! of categorical instances,
//! choosing each split by information gain.

/// Defines the builder of `ID3`.
pub mod builder;
/// Defines the ID3 algorithm.
pub mod id3_algorithm;
/// Defines the classifier produced by `ID3`.
pub mod decision_tree;
/// Frequency, entropy, and information gain.
pub mod criterion;
/// Splits a subset of instances by an attribute value.
pub mod partition;

/// Defines the set of attributes available for splitting.
mod attribute_set;
/// Defines the inner representations of `DecisionTree`.
mod node;


pub use builder::ID3Builder;
pub use id3_algorithm::ID3;
pub use decision_tree::DecisionTree;
pub use attribute_set::AttributeSet;
pub use node::{Node, BranchNode, LeafNode};
pub use criterion::Frequency;
