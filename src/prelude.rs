//! Exports the standard learners and traits of this crate.
//!
pub use crate::classifier::Classifier;

pub use crate::error::{ModelError, Result};

pub use crate::sample::{
    Attribute,
    FeatureType,
    Metadata,
    Row,
    Sample,
    SampleReader,
};

pub use crate::tree::{
    DecisionTree,
    DecisionTreeClassifier,
};

pub use crate::ensemble::{
    Bagging,
    BaggingClassifier,
};
