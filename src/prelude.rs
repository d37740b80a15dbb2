//! Exports the standard structs and traits.
//!
pub use crate::sample::{
    Sample,
    SampleReader,
    TargetValues,
};


pub use crate::id3::{
    // Algorithm
    ID3,
    ID3Builder,


    // Tree
    DecisionTree,
    Node,
};


pub use crate::classifier::Classifier;


pub use crate::error::{Error, Result};
