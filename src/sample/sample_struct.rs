//! Defines the encoded sample and its schema.
use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::error::{ModelError, Result};
use super::attribute::Attribute;


/// A single encoded example:
/// one value per feature column, followed by the label code.
pub type Row = Vec<i64>;


/// Ordered schema of a sample:
/// one [`Attribute`] per feature column (the label column excluded)
/// plus the decoded label names, label code = index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    attributes: Vec<Attribute>,
    labels: Vec<String>,
}


impl Metadata {
    /// Construct a schema from its feature columns.
    /// Label codes render as raw numbers until
    /// [`label_names`](Metadata::label_names) is called.
    #[inline]
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            labels: Vec::new(),
        }
    }


    /// Set the decoded label names. Code `k` decodes to the `k`-th name.
    pub fn label_names<S: ToString>(mut self, names: &[S]) -> Self {
        self.labels = names.iter()
            .map(|name| name.to_string())
            .collect();
        self
    }


    /// Number of feature columns.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.attributes.len()
    }


    /// The feature columns, in schema order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// The attribute of the `column`-th feature.
    /// Fails with [`ModelError::InvalidColumnIndex`] when `column`
    /// falls outside the schema.
    #[inline]
    pub fn attribute(&self, column: usize) -> Result<&Attribute> {
        self.attributes.get(column)
            .ok_or(ModelError::InvalidColumnIndex {
                column,
                n_feature: self.attributes.len(),
            })
    }


    /// The decoded label names.
    pub fn labels(&self) -> &[String] {
        &self.labels[..]
    }


    /// Decode a label code for display.
    /// Unknown codes render as the number itself.
    pub fn label_name(&self, code: i64) -> String {
        usize::try_from(code).ok()
            .and_then(|k| self.labels.get(k))
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }


    /// Return the code of `label`, appending it to the label table
    /// on first appearance.
    pub(crate) fn intern_label(&mut self, label: &str) -> i64 {
        match self.labels.iter().position(|l| l == label) {
            Some(code) => code as i64,
            None => {
                self.labels.push(label.to_string());
                (self.labels.len() - 1) as i64
            },
        }
    }
}


/// Struct `Sample` holds an encoded batch sample:
/// a [`Metadata`] schema plus the rows it describes.
/// Row widths are validated once, on construction,
/// so every consumer may index columns without re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    meta: Metadata,
    rows: Vec<Row>,
}


impl Sample {
    /// Construct a sample from a schema and its rows.
    /// Every row must carry `meta.n_feature() + 1` values;
    /// fails with [`ModelError::RowLengthMismatch`] otherwise.
    pub fn new(meta: Metadata, rows: Vec<Row>) -> Result<Self> {
        checker::check_rows(&meta, &rows[..])?;
        Ok(Self { meta, rows })
    }


    /// The schema of this sample.
    pub fn meta(&self) -> &Metadata {
        &self.meta
    }


    /// The encoded rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.meta.n_feature())
    }


    /// Returns `true` if the sample holds no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (&[i64], i64) {
        let row = &self.rows[idx];
        let n_feature = self.meta.n_feature();

        (&row[..n_feature], row[n_feature])
    }


    /// The label code of the `idx`-th row.
    #[inline]
    pub fn label_of(&self, idx: usize) -> i64 {
        self.rows[idx][self.meta.n_feature()]
    }


    /// Clone the rows at `indices` into a new sample over the same
    /// schema. An index may appear any number of times, so a bootstrap
    /// draw is one `bootstrap(&draw)` call.
    /// Panics when an index is out of range.
    pub fn bootstrap(&self, indices: &[usize]) -> Self {
        let rows = indices.iter()
            .map(|&i| self.rows[i].clone())
            .collect::<Vec<_>>();

        Self {
            meta: self.meta.clone(),
            rows,
        }
    }
}
