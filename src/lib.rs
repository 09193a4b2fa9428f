#![warn(missing_docs)]

//!
//! A crate that provides a CART decision-tree classifier and a
//! bootstrap-aggregation ("bagging") ensemble built on top of it.
//!
//! Training data is a [`Sample`]: integer-encoded rows described by a
//! [`Metadata`] schema of numeric and categorical columns, with the
//! label code in the trailing slot of every row.
//!
//! This crate includes two learners.
//!
//! - Decision tree
//!     [`DecisionTree`] grows a binary tree by recursive partitioning.
//!     Every node picks the feature/threshold pair minimizing the
//!     weighted Gini impurity of the two sides, and recursion stops
//!     only where a node is pure or no feature improves it.
//!     The resulting [`DecisionTreeClassifier`] predicts by routing a
//!     row to a leaf and reading its class distribution.
//!
//! - Bagging
//!     [`Bagging`] draws bootstrap samples of the training set, grows
//!     one tree per sample, and aggregates their predictions by
//!     majority vote. The whole build is reproducible from its seed.
//!

pub mod classifier;
pub mod ensemble;
pub mod error;
pub mod prelude;
pub mod research;
pub mod sample;
pub mod tree;

mod common;


pub use classifier::Classifier;

pub use error::{ModelError, Result};

pub use sample::{
    Attribute,
    FeatureType,
    Metadata,
    Row,
    Sample,
    SampleReader,
};

pub use tree::{DecisionTree, DecisionTreeClassifier};

pub use ensemble::{Bagging, BaggingClassifier};
