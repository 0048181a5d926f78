//! Precondition policy for [`Value`](crate::Value).
//!
//! The policy is a type parameter rather than a build flag, so whether a
//! value validates its inputs is part of its type:
//!
//! ```
//! use fxpoint::{Descriptor, Kind, Mode, Unchecked, Value};
//!
//! let d = Descriptor::new(3, 0, Kind::SignedInt, Mode::FixedFrac, false, false);
//! // 8 does not fit in 3+1 signed bits; unchecked values wrap silently.
//! let wrapped = Value::<Unchecked>::new(8.0, d);
//! assert_eq!(wrapped.decoded_value(), -8.0);
//! ```

use std::fmt::Debug;

pub trait Checking: Copy + Debug + Default + Send + Sync + 'static {
    /// Whether preconditions are validated
    const ENABLED: bool;
    const NAME: &'static str;
}

/// Validate every precondition; violations are reported as
/// [`PreconditionViolation`](crate::PreconditionViolation)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Checked;

/// Skip validation. Faulty descriptor setups produce wrong numbers
/// instead of errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unchecked;

impl Checking for Checked {
    const ENABLED: bool = true;
    const NAME: &'static str = "checked";
}

impl Checking for Unchecked {
    const ENABLED: bool = false;
    const NAME: &'static str = "unchecked";
}
