//! The files in `tree/` directory define the decision tree learner.

/// Defines impurity measures and the split search.
pub mod criterion;
/// Defines the decision tree learner and the classifier it produces.
pub mod dtree;

// Defines the inner representation of `DecisionTreeClassifier`.
mod node;
// Defines split rules.
mod split_rule;


pub use criterion::{
    BestSplit,
    ClassCounter,
    best_label,
    class_counts,
    find_best_split,
    gini,
    partition,
};
pub use dtree::{DecisionTree, DecisionTreeClassifier};
pub use node::{BranchNode, LeafNode, Node};
pub use split_rule::{LR, Splitter};
