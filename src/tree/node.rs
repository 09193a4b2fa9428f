//! Defines the inner representation of the decision tree.
use serde::{Serialize, Deserialize};

use crate::sample::Metadata;
use super::criterion::ClassCounter;
use super::split_rule::{LR, Splitter};


/// Enumeration of `BranchNode` and `LeafNode`.
/// A node owns its children outright; a fitted tree is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has two children.
    Branch(BranchNode),

    /// A node that has no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of a decision tree.
/// Each `BranchNode` owns exactly two children:
/// `left` receives the rows satisfying the rule,
/// `right` the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of a decision tree.
/// A leaf holds the class distribution of the training rows that
/// reached it. The counter is empty only for a tree fitted on zero
/// rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) counts: ClassCounter,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self { rule, left, right }
    }


    /// The rule this branch tests.
    pub fn rule(&self) -> &Splitter {
        &self.rule
    }
}


impl LeafNode {
    /// Returns a `LeafNode` holding the given class distribution.
    #[inline]
    pub(super) fn from_raw(counts: ClassCounter) -> Self {
        Self { counts }
    }


    /// The class distribution stored in this leaf.
    pub fn counts(&self) -> &ClassCounter {
        &self.counts
    }
}


impl Node {
    /// Construct a branch node over two already-grown children.
    #[inline]
    pub(super) fn branch(rule: Splitter, left: Node, right: Node) -> Self {
        Self::Branch(
            BranchNode::from_raw(rule, Box::new(left), Box::new(right))
        )
    }


    /// Construct a leaf node from a class distribution.
    #[inline]
    pub(super) fn leaf(counts: ClassCounter) -> Self {
        Self::Leaf(LeafNode::from_raw(counts))
    }


    /// Route `row` to its leaf and return the class distribution
    /// stored there. Pure traversal, `O(depth)`.
    #[inline]
    pub fn classify(&self, row: &[i64]) -> &ClassCounter {
        match self {
            Node::Branch(ref node) => match node.rule.split(row) {
                LR::Left => node.left.classify(row),
                LR::Right => node.right.classify(row),
            },
            Node::Leaf(ref node) => &node.counts,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => node.left.leaves() + node.right.leaves(),
            Node::Leaf(_) => 1_usize,
        }
    }


    /// The longest root-to-leaf path of this sub-tree, in edges.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(ref node)
                => 1 + node.left.depth().max(node.right.depth()),
            Node::Leaf(_) => 0_usize,
        }
    }


    /// Append the indented text rendering of this sub-tree to `out`.
    /// Branch lines show the rule; the two sub-trees follow under
    /// `--> True:` / `--> False:` headers at increased indent.
    /// Leaf lines show the class distribution in ascending code order.
    pub(super) fn write_text(
        &self,
        meta: &Metadata,
        spacing: &str,
        out: &mut String,
    )
    {
        match self {
            Node::Leaf(ref node) => {
                let counts = node.counts.iter()
                    .map(|(&label, &count)| {
                        format!("{}: {}", meta.label_name(label), count)
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!("{spacing}Predict: {{{counts}}}\n"));
            },
            Node::Branch(ref node) => {
                let deeper = format!("{spacing}   ");

                out.push_str(
                    &format!("{spacing}{}\n", node.rule.describe(meta))
                );
                out.push_str(&format!("{spacing}--> True:\n"));
                node.left.write_text(meta, &deeper, out);
                out.push_str(&format!("{spacing}--> False:\n"));
                node.right.write_text(meta, &deeper, out);
            },
        }
    }
}
