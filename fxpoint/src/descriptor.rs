use crate::error::PreconditionViolation;
use std::fmt;

/// Largest `integer_width + fractional_width` the quantizer accepts. Signed
/// kinds spend one more bit on the sign, which must still fit in 63 bits.
pub const MAX_TOTAL_WIDTH: u32 = 62;

/// Below this per-field width the saturation limits are computed exactly
const EXACT_LIMIT_WIDTH: u32 = 31;

/// Numeric domain of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    SignedInt,
    UnsignedInt,
    SignedFixed,
    UnsignedFixed,
    Float,
}

impl Kind {
    pub fn is_unsigned(self) -> bool {
        match self {
            Kind::UnsignedInt | Kind::UnsignedFixed => true,
            Kind::SignedInt | Kind::SignedFixed | Kind::Float => false,
        }
    }

    /// Integer kinds carry no fractional bits
    pub fn is_integer(self) -> bool {
        match self {
            Kind::SignedInt | Kind::UnsignedInt => true,
            Kind::SignedFixed | Kind::UnsignedFixed | Kind::Float => false,
        }
    }

    pub fn is_fixed(self) -> bool {
        match self {
            Kind::SignedFixed | Kind::UnsignedFixed => true,
            Kind::SignedInt | Kind::UnsignedInt | Kind::Float => false,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float)
    }

    /// Same domain with a sign bit; signed kinds and floats map to themselves
    pub fn to_signed(self) -> Kind {
        match self {
            Kind::UnsignedInt => Kind::SignedInt,
            Kind::UnsignedFixed => Kind::SignedFixed,
            Kind::SignedInt | Kind::SignedFixed | Kind::Float => self,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::SignedInt => "int",
            Kind::UnsignedInt => "uint",
            Kind::SignedFixed => "fxp",
            Kind::UnsignedFixed => "ufxp",
            Kind::Float => "float",
        };
        f.write_str(name)
    }
}

/// Result-width inference policy for arithmetic
///
/// - **Full**: widths grow so the exact result always fits
/// - **FixedFrac**: integer width grows, fractional width tracks the significant bits
/// - **FixedWidth**: integer width stays at the wider operand's
/// - **Manual**: the caller picks the result widths (see [`ResultSpec`](crate::ResultSpec))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Full,
    FixedFrac,
    FixedWidth,
    Manual,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Full => "FULL",
            Mode::FixedFrac => "FIXEDFRAC",
            Mode::FixedWidth => "FIXEDWIDTH",
            Mode::Manual => "MANUAL",
        };
        f.write_str(name)
    }
}

/// Bit layout and arithmetic policy of a fixed-point value.
///
/// ```
/// use fxpoint::{Descriptor, Kind, Mode};
///
/// let q9_5 = Descriptor::new(9, 5, Kind::SignedFixed, Mode::FixedFrac, false, false);
/// let unsigned = q9_5.with_kind(Kind::UnsignedFixed);
/// assert_eq!(unsigned.bounds().neg_limit, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub integer_width: u32,
    pub fractional_width: u32,
    pub kind: Kind,
    pub mode: Mode,
    /// Clamp out-of-range results instead of wrapping
    pub saturate: bool,
    /// Round to nearest (ties away from zero) instead of flooring
    pub round: bool,
}

impl Descriptor {
    pub const fn new(
        integer_width: u32,
        fractional_width: u32,
        kind: Kind,
        mode: Mode,
        saturate: bool,
        round: bool,
    ) -> Self {
        Self {
            integer_width,
            fractional_width,
            kind,
            mode,
            saturate,
            round,
        }
    }

    pub fn with_widths(self, integer_width: u32, fractional_width: u32) -> Self {
        Self {
            integer_width,
            fractional_width,
            ..self
        }
    }

    pub fn with_kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }

    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_saturate(self, saturate: bool) -> Self {
        Self { saturate, ..self }
    }

    pub fn with_round(self, round: bool) -> Self {
        Self { round, ..self }
    }

    pub fn total_width(&self) -> u32 {
        self.integer_width.saturating_add(self.fractional_width)
    }

    /// Layout preconditions that hold regardless of the quantized input
    pub fn validate(&self) -> Result<(), PreconditionViolation> {
        if self.total_width() > MAX_TOTAL_WIDTH {
            return Err(PreconditionViolation::WidthTooLarge {
                integer_width: self.integer_width,
                fractional_width: self.fractional_width,
            });
        }
        if self.kind.is_integer() && self.fractional_width != 0 {
            return Err(PreconditionViolation::FractionalInteger {
                kind: self.kind,
                fractional_width: self.fractional_width,
            });
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self)
    }
}

/// Range and scale derived from a [`Descriptor`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// 2^fractional_width
    pub shift: f64,
    /// Size of the wraparound ring in raw units
    pub modulus: i128,
    /// Offset that centres the ring on zero for signed kinds, 0 otherwise
    pub half: i128,
    pub pos_limit: f64,
    pub neg_limit: f64,
}

impl Bounds {
    pub fn new(descriptor: &Descriptor) -> Self {
        let width = descriptor.total_width();
        let shift = exp2(descriptor.fractional_width);
        let unsigned = descriptor.kind.is_unsigned();

        let (modulus, half) = if unsigned {
            (pow2(width), 0)
        } else {
            (pow2(width.saturating_add(1)), pow2(width))
        };

        let (pos_limit, neg_limit) = match descriptor.kind {
            Kind::Float => (f64::INFINITY, f64::NEG_INFINITY),
            Kind::SignedInt | Kind::UnsignedInt | Kind::SignedFixed | Kind::UnsignedFixed => {
                if descriptor.integer_width < EXACT_LIMIT_WIDTH
                    && descriptor.fractional_width < EXACT_LIMIT_WIDTH
                {
                    let pos = (pow2(width) - 1) as f64 / shift;
                    let neg = if unsigned { 0.0 } else { -(pow2(width) as f64) / shift };
                    (pos, neg)
                } else {
                    // Whole-number limits keep wide descriptors clear of f64 rounding
                    let span = pow2(descriptor.integer_width);
                    let neg = if unsigned { 0.0 } else { -(span as f64) };
                    ((span - 1) as f64, neg)
                }
            }
        };

        Self {
            shift,
            modulus,
            half,
            pos_limit,
            neg_limit,
        }
    }

    /// Value of one least-significant bit
    pub fn unit(&self) -> f64 {
        1.0 / self.shift
    }
}

pub(crate) fn exp2(bits: u32) -> f64 {
    2f64.powi(bits.min(i32::MAX as u32) as i32)
}

/// 2^bits in the quantization domain, pinned at `i128::MAX` past its range
fn pow2(bits: u32) -> i128 {
    1i128
        .checked_shl(bits)
        .filter(|v| *v > 0)
        .unwrap_or(i128::MAX)
}
