//! # fxpoint
//!
//! Bit-accurate fixed-point values for shadowing a floating-point model of a
//! DSP or radio datapath with the integer widths the hardware will use.
//!
//! A [`Value`] pairs a number with a [`Descriptor`]: integer and fractional
//! widths, a [`Kind`] (signed/unsigned integer, signed/unsigned fixed-point,
//! float), a width-inference [`Mode`], and saturation and rounding policies.
//! Construction quantizes the input exactly the way a register of that
//! layout would; arithmetic promotes kinds and infers result widths, then
//! quantizes again.
//!
//! ```
//! use fxpoint::{Descriptor, Kind, Mode, Value};
//!
//! let q9_5 = Descriptor::new(9, 5, Kind::SignedFixed, Mode::FixedFrac, false, false);
//! let q7_1 = Descriptor::new(7, 1, Kind::SignedFixed, Mode::FixedFrac, false, false);
//!
//! let a: Value = Value::new(-11.123456789, q9_5);
//! let b: Value = Value::new(39.987654321, q7_1);
//! assert_eq!(a.decoded_value(), -11.125);
//!
//! let sum = a + b;
//! assert_eq!(sum.descriptor().integer_width, 10);
//! assert_eq!(sum.descriptor().fractional_width, 1);
//! assert_eq!(sum.to_binary_string(), "00000011100.0");
//! ```
//!
//! Values default to the [`Checked`] policy, which reports descriptor and
//! operand mistakes as [`PreconditionViolation`]s. [`Unchecked`] values skip
//! those checks.

pub mod checking;
pub mod descriptor;
pub mod error;
mod format;
pub mod ops;
mod quantize;
pub mod value;

pub use checking::{Checked, Checking, Unchecked};
pub use descriptor::{Bounds, Descriptor, Kind, Mode, MAX_TOTAL_WIDTH};
pub use error::PreconditionViolation;
pub use ops::{infer_widths, promote, Op, ResultSpec};
pub use value::Value;
