//! This file defines split rules for decision trees.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::sample::{FeatureType, Metadata};


/// The output of the function `split` of `Splitter`.
/// `Left` means the row satisfies the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The row satisfies the test.
    Left,
    /// The row does not satisfy the test.
    Right,
}


/// A test on a single feature column.
/// Numeric columns test `value >= threshold`;
/// categorical columns test `value == threshold`,
/// where the threshold is a category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Splitter {
    column: usize,
    threshold: i64,
    ftype: FeatureType,
}


impl Splitter {
    /// Construct a splitter on `column` of the schema described by
    /// `meta`. The feature type is resolved once, at construction;
    /// the splitter does not retain the metadata.
    /// Fails when `column` falls outside the schema.
    #[inline]
    pub fn new(column: usize, threshold: i64, meta: &Metadata)
        -> Result<Self>
    {
        let ftype = meta.attribute(column)?.feature_type();
        Ok(Self { column, threshold, ftype })
    }


    /// The column index this splitter tests.
    pub fn column(&self) -> usize {
        self.column
    }


    /// The threshold value, a category code for categorical columns.
    pub fn threshold(&self) -> i64 {
        self.threshold
    }


    /// The type of the tested column.
    pub fn feature_type(&self) -> FeatureType {
        self.ftype
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, row: &[i64]) -> LR {
        let value = row[self.column];

        let holds = match self.ftype {
            FeatureType::Numeric => value >= self.threshold,
            FeatureType::Categorical => value == self.threshold,
        };

        if holds { LR::Left } else { LR::Right }
    }


    /// Render this test as `<name> <op> <value>`,
    /// decoding the category name through `meta` where one is known.
    pub fn describe(&self, meta: &Metadata) -> String {
        let op = match self.ftype {
            FeatureType::Numeric => ">=",
            FeatureType::Categorical => "==",
        };

        match meta.attributes().get(self.column) {
            Some(attribute) => format!(
                "{} {} {}",
                attribute.name(),
                op,
                attribute.decode(self.threshold),
            ),
            None => format!("Feat. [{}] {} {}", self.column, op, self.threshold),
        }
    }
}
