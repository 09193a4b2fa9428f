//! Struct `Sample` represents an encoded batch sample.

// Provides attribute metadata.
pub(crate) mod attribute;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute::{Attribute, FeatureType};
pub use sample_reader::SampleReader;
pub use sample_struct::{Metadata, Row, Sample};
