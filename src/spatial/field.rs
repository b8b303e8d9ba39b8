//! Sample field construction, validation and reorientation
//!
//! A field is an `Array2` of shape `(n2, n1)` indexed `[[i2, i1]]`: rows run
//! along the slow axis and columns along the fast axis, so each row is one
//! contiguous trace of `n1` samples.

use ndarray::{Array2, ArrayView2, s};

use crate::io::error::{BurgError, Result, invalid_field};

/// Dimensions of a field as `(n1, n2)`, fast axis first
pub fn dimensions<T>(field: &ArrayView2<'_, T>) -> (usize, usize) {
    let (n2, n1) = field.dim();
    (n1, n2)
}

/// Reject fields the lattice recursion cannot operate on
///
/// # Errors
///
/// Returns `InvalidField` if either dimension is zero
pub fn validate_field<T>(field: &ArrayView2<'_, T>) -> Result<()> {
    let (n1, n2) = dimensions(field);
    if n1 == 0 || n2 == 0 {
        return Err(invalid_field(&format!(
            "field dimensions must be positive (n1={n1}, n2={n2})"
        )));
    }
    Ok(())
}

/// Build a field from rows of samples along the fast axis
///
/// Row `i2` supplies the samples `x[[i2, 0..n1]]`.
///
/// # Errors
///
/// Returns an error if:
/// - There are no rows or the first row is empty
/// - Any row length differs from the first
pub fn field_from_rows<T: Clone>(rows: &[Vec<T>]) -> Result<Array2<T>> {
    let n2 = rows.len();
    let n1 = rows.first().map_or(0, Vec::len);
    if n1 == 0 || n2 == 0 {
        return Err(invalid_field(&format!(
            "field dimensions must be positive (n1={n1}, n2={n2})"
        )));
    }

    let mut samples = Vec::with_capacity(n1 * n2);
    for (row, trace) in rows.iter().enumerate() {
        if trace.len() != n1 {
            return Err(BurgError::RaggedRows {
                row,
                expected: n1,
                found: trace.len(),
            });
        }
        samples.extend_from_slice(trace);
    }

    Array2::from_shape_vec((n2, n1), samples)
        .map_err(|e| invalid_field(&format!("cannot shape samples as {n2}x{n1}: {e}")))
}

/// Quarter-turn reorientation mapping `x[[i2, i1]]` to `g[[i1, n2 - 1 - i2]]`
///
/// The result has `n2` samples on its fast axis and `n1` on its slow axis.
/// Under this map the south-west lattice on `x` is the north-west lattice
/// on `g`.
pub fn rotate_quarter<T: Clone>(field: &ArrayView2<'_, T>) -> Array2<T> {
    field.t().slice(s![.., ..;-1]).to_owned()
}

/// Inverse of [`rotate_quarter`]
pub fn unrotate_quarter<T: Clone>(field: &ArrayView2<'_, T>) -> Array2<T> {
    field.slice(s![.., ..;-1]).t().to_owned()
}
