//! Attribute metadata for encoded samples.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{ModelError, Result};


/// The type of a feature column.
/// The type decides the comparison a split rule performs on the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// Ordered values, split by a `>=` threshold.
    Numeric,
    /// Discrete codes, split by an `==` test on one category.
    Categorical,
}


impl FeatureType {
    /// Parse a declared type string, case-insensitively.
    /// Any declaration other than `NUMERIC`/`CATEGORICAL` is rejected
    /// with [`ModelError::UnsupportedFeatureType`].
    pub fn parse(name: &str, declared: &str) -> Result<Self> {
        match declared.trim().to_ascii_uppercase().as_str() {
            "NUMERIC" => Ok(Self::Numeric),
            "CATEGORICAL" => Ok(Self::Categorical),
            _ => Err(ModelError::UnsupportedFeatureType {
                name: name.to_string(),
                declared: declared.to_string(),
            }),
        }
    }
}


impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
        };

        write!(f, "{name}")
    }
}


/// A feature column of the schema:
/// its name, its [`FeatureType`], and, for categorical columns,
/// the decoded category names indexed by code.
/// Category names may be absent when a sample is built
/// programmatically; rendering then falls back to the raw code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    ftype: FeatureType,
    categories: Vec<String>,
}


impl Attribute {
    /// Construct a numeric attribute named `name`.
    #[inline]
    pub fn numeric<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            ftype: FeatureType::Numeric,
            categories: Vec::new(),
        }
    }


    /// Construct a categorical attribute named `name`,
    /// without category names.
    #[inline]
    pub fn categorical<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            ftype: FeatureType::Categorical,
            categories: Vec::new(),
        }
    }


    /// Construct an attribute from a declared type string,
    /// e.g. parsed out of a dataset header.
    pub fn declared(name: &str, declared: &str) -> Result<Self> {
        let ftype = FeatureType::parse(name, declared)?;
        let attribute = match ftype {
            FeatureType::Numeric => Self::numeric(name),
            FeatureType::Categorical => Self::categorical(name),
        };
        Ok(attribute)
    }


    /// Set the category names of this attribute.
    /// Code `k` decodes to the `k`-th name.
    pub fn categories<S: ToString>(mut self, names: &[S]) -> Self {
        self.categories = names.iter()
            .map(|name| name.to_string())
            .collect();
        self
    }


    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// The attribute type.
    #[inline]
    pub fn feature_type(&self) -> FeatureType {
        self.ftype
    }


    /// Decode an encoded value for display.
    /// Unknown codes and numeric values render as the number itself.
    pub fn decode(&self, value: i64) -> String {
        usize::try_from(value).ok()
            .and_then(|code| self.categories.get(code))
            .cloned()
            .unwrap_or_else(|| value.to_string())
    }


    /// Return the code of `value`, appending it to the category table
    /// on first appearance.
    pub(crate) fn intern(&mut self, value: &str) -> i64 {
        match self.categories.iter().position(|c| c == value) {
            Some(code) => code as i64,
            None => {
                self.categories.push(value.to_string());
                (self.categories.len() - 1) as i64
            },
        }
    }
}
