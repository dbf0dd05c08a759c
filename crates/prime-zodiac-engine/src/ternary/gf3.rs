//! GF(3) field operations on modular digits.
//!
//! All operations take and return digits in `{0, 1, 2}`. Inputs outside
//! that set are corrected by floored modulo first, so every function is
//! total and closed over the field.

/// Field addition: `(a + b) mod 3`.
#[inline]
pub fn add(a: i8, b: i8) -> i8 {
    (a + b).rem_euclid(3)
}

/// Field subtraction: `(a - b) mod 3`, floored so the result stays in
/// `{0, 1, 2}` even when `a < b`.
#[inline]
pub fn subtract(a: i8, b: i8) -> i8 {
    (a - b).rem_euclid(3)
}

/// Field multiplication: `(a * b) mod 3`.
#[inline]
pub fn multiply(a: i8, b: i8) -> i8 {
    (a * b).rem_euclid(3)
}

/// Additive inverse: the digit `n` with `add(a, n) == 0`.
#[inline]
pub fn negate(a: i8) -> i8 {
    (-a).rem_euclid(3)
}
