//! Spreadsheet column letter mapping
//!
//! The NBI delimited files are published as spreadsheets, and the ingest
//! column configuration names fields by spreadsheet column letter ("A",
//! "T", "AA", ...). The CSV reader hands back positional records, so the
//! letters must be mapped to zero-based indices.

use crate::{Error, Result};

/// Convert a spreadsheet column letter label to a zero-based index.
///
/// Single letters map `A -> 0` through `Z -> 25`; wider labels follow
/// bijective base-26 (`AA -> 26`, `AB -> 27`, ...). Case-insensitive.
/// Empty labels and non-alphabetic characters are errors.
pub fn column_index(label: &str) -> Result<usize> {
    if label.is_empty() {
        return Err(Error::InvalidInput("empty column label".to_string()));
    }

    let mut index: usize = 0;
    for ch in label.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_uppercase() {
            return Err(Error::InvalidInput(format!(
                "invalid column label {:?}",
                label
            )));
        }
        index = index
            .checked_mul(26)
            .and_then(|v| v.checked_add(ch as usize - 'A' as usize + 1))
            .ok_or_else(|| {
                Error::InvalidInput(format!("column label {:?} out of range", label))
            })?;
    }

    Ok(index - 1)
}
