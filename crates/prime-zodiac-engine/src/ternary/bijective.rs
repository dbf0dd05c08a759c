//! Bijective base-3 encoding: the zeroless numeral system over `{1, 2, 3}`.
//!
//! Every positive integer has exactly one digit string in this system;
//! there is no zero digit and no leading-zero ambiguity. Non-positive
//! input collapses to the single digit `1`, a documented degenerate
//! convention that downstream resonance labels depend on; callers must not
//! rely on distinguishing 0 from negative inputs.

use serde::{Deserialize, Serialize};

/// Information capacity of a ternary symbol string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TernaryDensity {
    /// Bits-equivalent carried by the symbols: `count * log2(3)`.
    pub bits: f64,

    /// Per-symbol efficiency gain of base 3 over base 2, in percent.
    ///
    /// `(log2(3) - 1) * 100`, a constant ≈ 58.5 independent of the count.
    pub efficiency_gain_pct: f64,
}

/// Encode a positive integer in bijective base 3.
///
/// Digits come out most significant first. `n <= 0` encodes as `[1]`.
///
/// # Example
///
/// ```
/// use prime_zodiac_engine::ternary::bijective;
///
/// assert_eq!(bijective::encode(1), vec![1]);
/// assert_eq!(bijective::encode(3), vec![3]);
/// assert_eq!(bijective::encode(13), vec![1, 1, 1]);
/// assert_eq!(bijective::encode(0), vec![1]);
/// assert_eq!(bijective::encode(-7), vec![1]);
/// ```
pub fn encode(n: i64) -> Vec<u8> {
    if n <= 0 {
        return vec![1];
    }

    let mut n = n;
    let mut digits = Vec::new();
    while n > 0 {
        let r = n % 3;
        if r == 0 {
            digits.push(3);
            n = n / 3 - 1;
        } else {
            digits.push(r as u8);
            n /= 3;
        }
    }
    digits.reverse();
    digits
}

/// Decode a bijective base-3 digit string, most significant digit first.
///
/// The left fold `acc * 3 + digit`; digits are expected in `{1, 2, 3}`.
/// `decode(encode(n)) == n` for all `n > 0`.
pub fn decode(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |acc, &digit| acc * 3 + i64::from(digit))
}

/// Encode `n` and render the digits as a label string, e.g. `13 → "111"`.
pub fn encode_label(n: i64) -> String {
    encode(n).iter().map(|d| d.to_string()).collect()
}

/// Information capacity of `count` ternary symbols.
pub fn information_density(count: u32) -> TernaryDensity {
    let log2_3 = 3.0_f64.log2();
    TernaryDensity {
        bits: f64::from(count) * log2_3,
        efficiency_gain_pct: (log2_3 - 1.0) * 100.0,
    }
}
