#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is considered as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether two floats are equal within absolute or relative tolerance.
#[inline]
pub fn is_close(a: Float, b: Float, tolerance: Float) -> bool {
    if compare_floats(a, b) == Ordering::Equal {
        return true;
    }

    let diff = (a - b).abs();

    diff <= tolerance || diff <= tolerance * a.abs().max(b.abs())
}
