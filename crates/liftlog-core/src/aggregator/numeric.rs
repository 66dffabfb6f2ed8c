//! Order-independent floating point reductions.
//!
//! Float addition is not associative, so summing the same values in a
//! different order can change the last bits. Both reducers accumulate in
//! a canonical order (ascending by `f64::total_cmp`) so that any
//! permutation of the input produces identical bits.

use std::cmp::Ordering;

/// Sum `values` in canonical order
pub(crate) fn canonical_sum(mut values: Vec<f64>) -> f64 {
    values.sort_unstable_by(f64::total_cmp);
    values.into_iter().fold(0.0, |acc, v| acc + v)
}

/// Maximum under the IEEE total order
///
/// Unlike `f64::max`, ties between `0.0` and `-0.0` (and NaNs) resolve the
/// same way regardless of iteration order.
pub(crate) fn canonical_max(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().fold(None, |acc, v| match acc {
        Some(current) if v.total_cmp(&current) != Ordering::Greater => Some(current),
        _ => Some(v),
    })
}

/// Mean of an integer sum over `count` items, `None` when nothing was counted
pub(crate) fn integer_mean(sum: u64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}
