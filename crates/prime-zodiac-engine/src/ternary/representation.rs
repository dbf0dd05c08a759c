//! Tagged ternary digits and total conversion between representations.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The three digit representations of one ternary residue.
///
/// A closed set of tagged variants: the compiler enforces that every pair
/// conversion exists, which is what makes [`TernaryValue::convert`] total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// Tag `A`: digits `{-1, 0, 1}`.
    Balanced,
    /// Tag `B`: digits `{0, 1, 2}`; the GF(3) working form.
    Modular,
    /// Tag `C`: digits `{1, 2, 3}`; the zeroless numeral form.
    Bijective,
}

impl Representation {
    /// Digit shift relative to the modular form.
    ///
    /// `digit = modular_digit + offset`, which makes every pair conversion
    /// a single subtraction and addition: A→B is +1, B→C is +1, A→C is +2,
    /// the inverses negate, and same-to-same is the identity.
    #[inline]
    pub fn offset(&self) -> i8 {
        match self {
            Representation::Balanced => -1,
            Representation::Modular => 0,
            Representation::Bijective => 1,
        }
    }

    /// The valid digit range for this representation.
    pub fn digit_range(&self) -> RangeInclusive<i8> {
        let offset = self.offset();
        offset..=offset + 2
    }

    /// The single-letter tag used in serialized material.
    pub fn tag(&self) -> char {
        match self {
            Representation::Balanced => 'A',
            Representation::Modular => 'B',
            Representation::Bijective => 'C',
        }
    }

    /// Parse a representation tag.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRepresentation`] for anything but
    /// `A`/`B`/`C` (case-insensitive).
    pub fn from_tag(tag: char) -> EngineResult<Self> {
        match tag.to_ascii_uppercase() {
            'A' => Ok(Representation::Balanced),
            'B' => Ok(Representation::Modular),
            'C' => Ok(Representation::Bijective),
            other => Err(EngineError::InvalidRepresentation {
                reason: format!("unrecognized representation tag '{other}'"),
            }),
        }
    }
}

/// A single ternary digit tagged with its representation.
///
/// # Example
///
/// ```
/// use prime_zodiac_engine::ternary::{Representation, TernaryValue};
///
/// let v = TernaryValue::new(2, Representation::Modular).unwrap();
/// assert_eq!(v.convert(Representation::Balanced).digit, 1);
/// assert_eq!(v.convert(Representation::Bijective).digit, 3);
///
/// // Digit outside the representation's range is a contract violation
/// assert!(TernaryValue::new(3, Representation::Modular).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TernaryValue {
    /// The digit, within `representation.digit_range()`.
    pub digit: i8,

    /// Which representation the digit is written in.
    pub representation: Representation,
}

impl TernaryValue {
    /// Construct a value, validating the digit against its representation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRepresentation`] when the digit falls
    /// outside the representation's range.
    pub fn new(digit: i8, representation: Representation) -> EngineResult<Self> {
        if !representation.digit_range().contains(&digit) {
            return Err(EngineError::InvalidRepresentation {
                reason: format!(
                    "digit {digit} outside range {:?} of representation {}",
                    representation.digit_range(),
                    representation.tag()
                ),
            });
        }
        Ok(Self {
            digit,
            representation,
        })
    }

    /// Convert to another representation. Total; same-to-same is identity.
    #[inline]
    pub fn convert(self, to: Representation) -> Self {
        Self {
            digit: self.digit - self.representation.offset() + to.offset(),
            representation: to,
        }
    }

    /// The digit written in the modular form, the GF(3) working digit.
    #[inline]
    pub fn modular_digit(self) -> i8 {
        self.digit - self.representation.offset()
    }
}
