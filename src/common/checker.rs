//! This file defines some functions that check pre-conditions.
//! E.g., width of the encoded rows.

use crate::error::{ModelError, Result};
use crate::sample::{Metadata, Row};


/// Check that every row carries one value per feature column
/// plus the trailing label.
#[inline(always)]
pub(crate) fn check_rows(meta: &Metadata, rows: &[Row]) -> Result<()> {
    let expected = meta.n_feature() + 1;

    for (i, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(ModelError::RowLengthMismatch {
                row: i,
                expected,
                got: row.len(),
            });
        }
    }

    Ok(())
}
