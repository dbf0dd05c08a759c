//! Operations on balanced digits `{-1, 0, 1}`.
//!
//! Arithmetic shifts the digit into the modular form, applies the plain
//! mod-3 operation there, and shifts back. `xor` and `not` are defined
//! directly on the balanced digits.

use super::gf3;

/// Shift a balanced digit into the modular form.
#[inline]
fn to_modular(a: i8) -> i8 {
    a + 1
}

/// Shift a modular digit back to balanced.
#[inline]
fn to_balanced(m: i8) -> i8 {
    m - 1
}

/// Balanced addition: modular sum mod 3, shifted back.
///
/// Note this is the shifted digit sum of the documented algebra, not
/// carry-propagating balanced ternary addition.
#[inline]
pub fn add(a: i8, b: i8) -> i8 {
    to_balanced(gf3::add(to_modular(a), to_modular(b)))
}

/// Balanced multiplication: modular product mod 3, shifted back.
#[inline]
pub fn multiply(a: i8, b: i8) -> i8 {
    to_balanced(gf3::multiply(to_modular(a), to_modular(b)))
}

/// Cyclic rotation by `steps mod 3` through the balanced digit cycle
/// `-1 → 0 → 1 → -1`. Negative steps rotate backwards.
#[inline]
pub fn rotate(a: i8, steps: i32) -> i8 {
    let rotated = (i64::from(to_modular(a)) + i64::from(steps)).rem_euclid(3);
    to_balanced(rotated as i8)
}

/// The ad-hoc balanced exclusive-or.
///
/// Equal inputs yield 0; a zero operand yields the other operand; two
/// distinct non-zero operands yield 0.
#[inline]
pub fn xor(a: i8, b: i8) -> i8 {
    if a == b {
        0
    } else if a == 0 {
        b
    } else if b == 0 {
        a
    } else {
        0
    }
}

/// Balanced negation: the arithmetic sign flip.
#[inline]
pub fn not(a: i8) -> i8 {
    -a
}
