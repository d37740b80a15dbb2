//! Defines the inner representation
//! of the decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{Error, Result};


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests an attribute.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the decision nodes of the tree.
/// A `BranchNode` has one child per value of its attribute
/// observed in the instances that reached it while training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) attribute: usize,
    pub(super) children: Vec<(String, Node)>,
}


impl BranchNode {
    /// Returns the index of the attribute this node tests.
    #[inline]
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// Returns the `(value, child)` pairs in training order.
    #[inline]
    pub fn children(&self) -> &[(String, Node)] {
        &self.children[..]
    }


    /// Returns the child for `value`, if any.
    #[inline]
    pub fn child(&self, value: &str) -> Option<&Node> {
        self.children.iter()
            .find(|(v, _)| v == value)
            .map(|(_, node)| node)
    }
}


/// Represents the leaf nodes of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) label: String,
}


impl LeafNode {
    /// Returns the class label this leaf predicts.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl Node {
    /// Construct a leaf node that predicts `label`.
    #[inline]
    pub(super) fn leaf<T: ToString>(label: T) -> Self {
        Node::Leaf(LeafNode { label: label.to_string() })
    }


    /// Construct a branch node on `attribute`.
    #[inline]
    pub(super) fn branch(
        attribute: usize,
        children: Vec<(String, Node)>,
    ) -> Self
    {
        Node::Branch(BranchNode { attribute, children })
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Branch(_) => false,
            Node::Leaf(_) => true,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                node.children.iter()
                    .map(|(_, child)| child.leaves())
                    .sum()
            },
            Node::Leaf(_) => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node) => {
                node.children.iter()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0)
                    + 1
            },
            Node::Leaf(_) => 0_usize,
        }
    }


    /// Walk from `self` down to a leaf along the values of `instance`
    /// and returns the label of the leaf.
    /// `attributes` names the columns of `instance`.
    pub(super) fn predict<'a, S>(
        &'a self,
        instance: &[S],
        attributes: &[String],
    ) -> Result<&'a str>
        where S: AsRef<str>
    {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => { return Ok(leaf.label()); },
                Node::Branch(branch) => {
                    let value = instance[branch.attribute].as_ref();
                    node = branch.child(value)
                        .ok_or_else(|| Error::UnseenValue {
                            attribute: attributes[branch.attribute].clone(),
                            value: value.to_string(),
                        })?;
                },
            }
        }
    }


    /// Write the indented rendering of this sub-tree.
    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        attributes: &[String],
        depth: usize,
    ) -> fmt::Result
    {
        let indent = depth * 4;
        match self {
            Node::Leaf(leaf) => {
                writeln!(f, "{:indent$}-> {}", "", leaf.label)
            },
            Node::Branch(branch) => {
                let name = &attributes[branch.attribute];
                for (value, child) in branch.children.iter() {
                    match child {
                        Node::Leaf(leaf) => {
                            writeln!(
                                f,
                                "{:indent$}{name} = {value} -> {}",
                                "", leaf.label
                            )?;
                        },
                        Node::Branch(_) => {
                            writeln!(f, "{:indent$}{name} = {value}", "")?;
                            child.write_indented(f, attributes, depth + 1)?;
                        },
                    }
                }
                Ok(())
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize, attributes: &[String])
        -> (Vec<String>, usize)
    {
        match self {
            Node::Branch(b) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} ?\" ];\n",
                    feat = attributes[b.attribute],
                )];

                let mut next_id = id + 1;
                for (value, child) in b.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(
                        child_id, attributes
                    );
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n"
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"{p}\", \
                     shape = box, \
                     ];\n",
                    p = l.label
                );

                (vec![info], id + 1)
            }
        }
    }
}
