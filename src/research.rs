//! This directory provides some features for research.
//! Estimate the accuracy of trees on held-out instances.

/// Provides a train/test sample generator.
pub mod cross_validation;

pub use cross_validation::CrossValidation;
