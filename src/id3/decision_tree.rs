//! Defines the decision tree classifier.
use crate::Classifier;
use crate::error::{Error, Result};


use super::node::*;
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier produced by [`ID3`](super::ID3).
/// Besides the root node, the tree keeps the attribute names
/// and the target index of the sample it was grown on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    attributes: Vec<String>,
    target: usize,
}


impl DecisionTree {
    #[inline]
    pub(super) fn from_components(
        root: Node,
        attributes: Vec<String>,
        target: usize,
    ) -> Self
    {
        Self { root, attributes, target, }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the attribute names of the training sample.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the index of the target attribute.
    #[inline]
    pub fn target_index(&self) -> usize {
        self.target
    }


    /// Returns the name of the target attribute.
    #[inline]
    pub fn target_name(&self) -> &str {
        &self.attributes[self.target]
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0, &self.attributes).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTree {
    fn predict<S>(&self, instance: &[S]) -> Result<&str>
        where S: AsRef<str>
    {
        let expected = self.attributes.len();
        let found = instance.len();
        if found != expected {
            return Err(Error::MalformedInstance { expected, found });
        }
        self.root.predict(instance, &self.attributes)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_indented(f, &self.attributes, 0)
    }
}
