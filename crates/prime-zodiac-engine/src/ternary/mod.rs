//! The three-representation balanced ternary algebra over GF(3).
//!
//! One ternary digit can be written three ways, shifted copies of the same
//! residue class:
//!
//! - **Balanced** (tag `A`): digits `{-1, 0, 1}`
//! - **Modular** (tag `B`): digits `{0, 1, 2}`, the GF(3) working form
//! - **Bijective** (tag `C`): digits `{1, 2, 3}`, the zeroless numeral form
//!
//! Conversion between representations is a total bijection (a digit
//! shift); arithmetic happens in the modular form and shifts back.
//! The [`bijective`] submodule additionally provides whole-number encoding
//! in bijective base 3, the labeling scheme the space/time bridge uses.
//!
//! # Example
//!
//! ```
//! use prime_zodiac_engine::ternary::{balanced, bijective, gf3, Representation, TernaryValue};
//!
//! let v = TernaryValue::new(-1, Representation::Balanced).unwrap();
//! let w = v.convert(Representation::Bijective);
//! assert_eq!(w.digit, 1);
//!
//! assert_eq!(gf3::add(2, 2), 1);
//! assert_eq!(balanced::not(1), -1);
//! assert_eq!(bijective::decode(&bijective::encode(13)), 13);
//! ```

pub mod balanced;
pub mod bijective;
pub mod gf3;

mod representation;


pub use bijective::TernaryDensity;
pub use representation::{Representation, TernaryValue};
