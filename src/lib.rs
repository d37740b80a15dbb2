#![warn(missing_docs)]

//!
//! A crate that grows classification decision trees
//! over categorical data with the ID3 algorithm.
//!
//! The workflow is as follows.
//!
//! - Read a [`Sample`]
//!     Each line of the input names one value per attribute;
//!     the first line names the attributes.
//!     One attribute is chosen as the target (class) attribute.
//!
//! - Grow a [`DecisionTree`]
//!     [`ID3`] splits each node on the attribute
//!     of the highest information gain,
//!     until the node is pure, no attribute is left,
//!     or no attribute reduces the entropy.
//!
//! - Classify
//!     [`DecisionTree`] implements [`Classifier`].
//!     An instance whose value was never observed at a decision node
//!     is reported as [`Error::UnseenValue`].
//!
//! ```no_run
//! use miniid3::prelude::*;
//!
//! let sample = Sample::from_csv("/path/to/zoo.csv", "name").unwrap();
//! println!("{sample}");
//!
//! let tree = ID3Builder::new(&sample)
//!     .build()
//!     .fit()
//!     .unwrap();
//! println!("{tree}");
//! ```

pub mod error;
pub mod sample;
pub mod id3;
pub mod classifier;
pub mod research;
pub mod prelude;

mod common;


pub use error::{Error, Result};

pub use sample::{Sample, SampleReader, TargetValues};

pub use id3::{
    ID3,
    ID3Builder,
    DecisionTree,
    Node,
    BranchNode,
    LeafNode,
    AttributeSet,
};

pub use classifier::Classifier;

pub use research::CrossValidation;
