//! Stateless helper utilities used by the table write kernel.

use std::collections::BTreeSet;

use crate::conf::N_LEN_COLUMN_ALPHABET;

////////////////////////////////////////////////////////////////////////////////
// #region ColumnLetterCodec

/// Convert a 1-based column index to its letter label (`1` -> `A`, `27` -> `AA`).
pub fn derive_column_label(col_idx_1based: usize) -> Result<String, String> {
    if col_idx_1based < 1 {
        return Err("Column index must be a positive 1-based integer.".to_string());
    }

    let mut l_letters: Vec<char> = Vec::new();
    let mut n_current = col_idx_1based;
    while n_current > 0 {
        let n_remainder = (n_current - 1) % N_LEN_COLUMN_ALPHABET;
        l_letters.push((b'A' + n_remainder as u8) as char);
        n_current = (n_current - 1) / N_LEN_COLUMN_ALPHABET;
    }

    l_letters.reverse();
    Ok(l_letters.into_iter().collect())
}

/// Convert a letter label back to its 1-based column index.
///
/// Surrounding whitespace is trimmed and case is ignored; anything other than
/// ASCII letters is rejected.
pub fn derive_column_index(label: &str) -> Result<usize, String> {
    let c_label = label.trim().to_ascii_uppercase();
    if c_label.is_empty() {
        return Err("Column label must not be empty.".to_string());
    }

    let mut n_result = 0usize;
    for chr in c_label.chars() {
        if !chr.is_ascii_uppercase() {
            return Err(format!(
                "Invalid column label {label:?}: unexpected character {chr:?}."
            ));
        }
        n_result = n_result
            .checked_mul(N_LEN_COLUMN_ALPHABET)
            .and_then(|val| val.checked_add(chr as usize - 'A' as usize + 1))
            .ok_or_else(|| format!("Invalid column label {label:?}: index overflow."))?;
    }

    Ok(n_result)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellReferences

/// Format a 1-based `(column, row)` pair as an `A1`-style reference.
pub fn derive_cell_reference(
    col_idx_1based: usize,
    row_idx_1based: usize,
) -> Result<String, String> {
    if row_idx_1based < 1 {
        return Err("Row index must be a positive 1-based integer.".to_string());
    }
    Ok(format!(
        "{}{row_idx_1based}",
        derive_column_label(col_idx_1based)?
    ))
}

/// Parse an `A1`-style reference into a 1-based `(column, row)` pair.
pub fn parse_cell_reference(cell_ref: &str) -> Result<(usize, usize), String> {
    let c_ref = cell_ref.trim();
    let n_letters = c_ref
        .chars()
        .take_while(|chr| chr.is_ascii_alphabetic())
        .count();
    let (c_letters, c_digits) = c_ref.split_at(n_letters);

    if c_letters.is_empty() || c_digits.is_empty() {
        return Err(format!(
            "Invalid cell reference {cell_ref:?}: expected `<letters><row number>`."
        ));
    }

    let n_col = derive_column_index(c_letters)?;
    let n_row = c_digits.parse::<usize>().map_err(|_| {
        format!("Invalid cell reference {cell_ref:?}: bad row number {c_digits:?}.")
    })?;
    if n_row < 1 {
        return Err(format!(
            "Invalid cell reference {cell_ref:?}: row must be >= 1."
        ));
    }

    Ok((n_col, n_row))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region OccupiedRegionTracking

/// Check whether any coordinate of the `n_rows x n_cols` rectangle anchored
/// at `(row_idx, col_idx)` is already present in `occupied`.
pub fn check_region_overlap(
    occupied: &BTreeSet<(usize, usize)>,
    row_idx: usize,
    col_idx: usize,
    n_rows: usize,
    n_cols: usize,
) -> bool {
    for n_row in row_idx..row_idx + n_rows {
        for n_col in col_idx..col_idx + n_cols {
            if occupied.contains(&(n_row, n_col)) {
                return true;
            }
        }
    }
    false
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
