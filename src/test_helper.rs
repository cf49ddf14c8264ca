use crate::Float;
#[cfg(feature = "single")]
use std::f32::{EPSILON, MAX};
#[cfg(not(feature = "single"))]
use std::f64::{EPSILON, MAX};

pub fn equal_floats(a: Float, b: Float) -> bool {
    if a == 0. && b == 0. {
        return true;
    }

    let diff = (a - b).abs();

    if a == 0. || b == 0. {
        return diff < EPSILON;
    }

    diff / (a.abs() + b.abs()).min(MAX) < EPSILON
}

/// Bitwise equality, so that NaN payloads produced by quickcheck compare equal
/// to themselves.
pub fn identical_floats(a: Float, b: Float) -> bool {
    a.to_bits() == b.to_bits()
}
