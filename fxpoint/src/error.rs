use crate::descriptor::{Kind, Mode};
use thiserror::Error;

/// A caller-side programming error in descriptor setup or operand pairing.
///
/// Only reported under the [`Checked`](crate::Checked) policy. Under
/// [`Unchecked`](crate::Unchecked) the same conditions go undetected and the
/// computation carries on with whatever the arithmetic produces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreconditionViolation {
    #[error("Combined width {integer_width}+{fractional_width} does not fit the 63-bit quantization domain")]
    WidthTooLarge {
        integer_width: u32,
        fractional_width: u32,
    },
    #[error("Integer kind {kind} must have zero fractional width, got {fractional_width}")]
    FractionalInteger { kind: Kind, fractional_width: u32 },
    #[error("Unsigned kind {kind} cannot hold negative input {input}")]
    NegativeUnsigned { kind: Kind, input: f64 },
    #[error("Quantizing {input} produced {decoded}: sign flipped by wraparound")]
    SignFlip { input: f64, decoded: f64 },
    #[error("Operands disagree on mode: {0} vs {1}")]
    ModeMismatch(Mode, Mode),
    #[error("Operands disagree on saturation: {0} vs {1}")]
    SaturateMismatch(bool, bool),
    #[error("Operands disagree on rounding: {0} vs {1}")]
    RoundMismatch(bool, bool),
    #[error("Cannot combine float with fixed-point: {0} vs {1}")]
    FloatMix(Kind, Kind),
    #[error("Manual mode needs caller-supplied result widths")]
    ManualWidthsRequired,
}

/// Log a violation on its way out to the caller
pub(crate) fn report(violation: PreconditionViolation) -> PreconditionViolation {
    log::debug!("precondition violated: {}", violation);
    violation
}
