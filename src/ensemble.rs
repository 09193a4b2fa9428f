//! The files in `ensemble/` directory define bootstrap aggregation.

/// Defines the bagging trainer.
pub mod bagging;
/// Defines the classifier produced by `Bagging`.
pub mod bagging_classifier;


pub use bagging::Bagging;
pub use bagging_classifier::BaggingClassifier;
