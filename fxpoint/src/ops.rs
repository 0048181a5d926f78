//! Binary arithmetic: kind promotion, width inference and the operator traits.

use crate::checking::Checking;
use crate::descriptor::{exp2, Descriptor, Kind, Mode};
use crate::error::{report, PreconditionViolation};
use crate::value::{enforce, Value};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

/// Caller overrides for the result of a binary operation.
///
/// Fields left `None` are inferred from the operands. Setting `mode`,
/// `saturate` or `round` also waives the check that both operands agree on
/// that field. Manual-mode operands need both widths set, unless the result
/// is a float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultSpec {
    pub integer_width: Option<u32>,
    pub fractional_width: Option<u32>,
    pub kind: Option<Kind>,
    pub mode: Option<Mode>,
    pub saturate: Option<bool>,
    pub round: Option<bool>,
}

impl ResultSpec {
    pub fn widths(integer_width: u32, fractional_width: u32) -> Self {
        Self {
            integer_width: Some(integer_width),
            fractional_width: Some(fractional_width),
            ..Self::default()
        }
    }

    pub fn kind(self, kind: Kind) -> Self {
        Self {
            kind: Some(kind),
            ..self
        }
    }

    pub fn mode(self, mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..self
        }
    }

    pub fn saturate(self, saturate: bool) -> Self {
        Self {
            saturate: Some(saturate),
            ..self
        }
    }

    pub fn round(self, round: bool) -> Self {
        Self {
            round: Some(round),
            ..self
        }
    }
}

/// Result kind of `a op b`.
///
/// Addition and multiplication share one table; subtraction can go negative,
/// so unsigned pairs promote to the signed kind. Mixing float with anything
/// else is rejected by checked values and lands on `SignedFixed` otherwise.
pub fn promote(op: Op, a: Kind, b: Kind) -> Kind {
    use Kind::*;
    let subtract = op == Op::Sub;
    match (a, b) {
        (Float, Float) => Float,
        (UnsignedInt, UnsignedInt) => {
            if subtract {
                SignedInt
            } else {
                UnsignedInt
            }
        }
        (UnsignedInt, SignedInt) | (SignedInt, UnsignedInt) => SignedInt,
        (UnsignedInt, UnsignedFixed) | (UnsignedFixed, UnsignedInt) => {
            if subtract {
                SignedFixed
            } else {
                UnsignedFixed
            }
        }
        (SignedInt, SignedInt | SignedFixed | UnsignedFixed)
        | (SignedFixed, SignedInt | UnsignedInt | SignedFixed | UnsignedFixed)
        | (UnsignedFixed, SignedInt | SignedFixed | UnsignedFixed)
        | (UnsignedInt, SignedFixed) => SignedFixed,
        (Float, SignedInt | UnsignedInt | SignedFixed | UnsignedFixed)
        | (SignedInt | UnsignedInt | SignedFixed | UnsignedFixed, Float) => SignedFixed,
    }
}

/// Result `(integer_width, fractional_width)` of `a op b` under `mode`, or
/// `None` for [`Mode::Manual`], which has no inference rule.
pub fn infer_widths(op: Op, mode: Mode, a: &Descriptor, b: &Descriptor) -> Option<(u32, u32)> {
    let widest = a.integer_width.max(b.integer_width);
    let grown = match op {
        Op::Add | Op::Sub => widest.saturating_add(1),
        Op::Mul => a.integer_width.saturating_add(b.integer_width),
    };
    match mode {
        Mode::Full => {
            let fractional = match op {
                Op::Add | Op::Sub => a.fractional_width.max(b.fractional_width),
                Op::Mul => a.fractional_width.saturating_add(b.fractional_width),
            };
            Some((grown, fractional))
        }
        Mode::FixedFrac => Some((grown, significant_fraction(a, b))),
        Mode::FixedWidth => Some((widest, significant_fraction(a, b))),
        Mode::Manual => None,
    }
}

/// An integer operand contributes no fractional precision, so the fixed
/// operand's fraction is kept; otherwise the coarser of the two.
fn significant_fraction(a: &Descriptor, b: &Descriptor) -> u32 {
    if a.kind.is_integer() && b.kind.is_fixed() {
        b.fractional_width
    } else if b.kind.is_integer() && a.kind.is_fixed() {
        a.fractional_width
    } else {
        a.fractional_width.min(b.fractional_width)
    }
}

/// Exact (up to f64) result of `a op b` before re-quantization
fn combine_raw<C: Checking>(op: Op, a: &Value<C>, b: &Value<C>) -> f64 {
    if a.kind().is_float() && b.kind().is_float() {
        return match op {
            Op::Add => a.raw() + b.raw(),
            Op::Sub => a.raw() - b.raw(),
            Op::Mul => a.raw() * b.raw(),
        };
    }

    let fa = a.descriptor().fractional_width;
    let fb = b.descriptor().fractional_width;
    match op {
        Op::Add | Op::Sub => {
            // Align binary points on the finer operand before summing raw integers
            let (lhs, rhs, shift) = if fa >= fb {
                (a.raw(), b.raw() * exp2(fa - fb), a.bounds().shift)
            } else {
                (a.raw() * exp2(fb - fa), b.raw(), b.bounds().shift)
            };
            let sum = if op == Op::Add { lhs + rhs } else { lhs - rhs };
            sum / shift
        }
        Op::Mul => a.raw() * b.raw() / exp2(fa.saturating_add(fb)),
    }
}

fn agree<T: PartialEq + Copy>(
    check: bool,
    a: T,
    b: T,
    mismatch: fn(T, T) -> PreconditionViolation,
) -> Result<T, PreconditionViolation> {
    if check && a != b {
        return Err(report(mismatch(a, b)));
    }
    Ok(a)
}

impl<C: Checking> Value<C> {
    /// `self op rhs`, with any result field the caller wants to pin set in `spec`
    pub fn try_combine(
        &self,
        op: Op,
        rhs: &Self,
        spec: ResultSpec,
    ) -> Result<Self, PreconditionViolation> {
        let a = self.descriptor();
        let b = rhs.descriptor();

        let mode = match spec.mode {
            Some(mode) => mode,
            None => agree(C::ENABLED, a.mode, b.mode, PreconditionViolation::ModeMismatch)?,
        };
        let saturate = match spec.saturate {
            Some(saturate) => saturate,
            None => agree(
                C::ENABLED,
                a.saturate,
                b.saturate,
                PreconditionViolation::SaturateMismatch,
            )?,
        };
        let round = match spec.round {
            Some(round) => round,
            None => agree(C::ENABLED, a.round, b.round, PreconditionViolation::RoundMismatch)?,
        };
        if C::ENABLED && a.kind.is_float() != b.kind.is_float() {
            return Err(report(PreconditionViolation::FloatMix(a.kind, b.kind)));
        }

        let kind = spec.kind.unwrap_or_else(|| promote(op, a.kind, b.kind));
        let (integer_width, fractional_width) = match infer_widths(op, mode, &a, &b) {
            Some((iw, fw)) => (
                spec.integer_width.unwrap_or(iw),
                spec.fractional_width.unwrap_or(fw),
            ),
            None => match (spec.integer_width, spec.fractional_width) {
                (Some(iw), Some(fw)) => (iw, fw),
                // Float results carry no layout to pick
                _ if C::ENABLED && !kind.is_float() => {
                    return Err(report(PreconditionViolation::ManualWidthsRequired))
                }
                (iw, fw) => (iw.unwrap_or(0), fw.unwrap_or(0)),
            },
        };

        let result = Descriptor::new(integer_width, fractional_width, kind, mode, saturate, round);
        Self::try_new(combine_raw(op, self, rhs), result)
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, PreconditionViolation> {
        self.try_combine(Op::Add, rhs, ResultSpec::default())
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, PreconditionViolation> {
        self.try_combine(Op::Sub, rhs, ResultSpec::default())
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, PreconditionViolation> {
        self.try_combine(Op::Mul, rhs, ResultSpec::default())
    }

    pub fn add_with(&self, rhs: &Self, spec: ResultSpec) -> Self {
        enforce(self.try_combine(Op::Add, rhs, spec))
    }

    pub fn sub_with(&self, rhs: &Self, spec: ResultSpec) -> Self {
        enforce(self.try_combine(Op::Sub, rhs, spec))
    }

    pub fn mul_with(&self, rhs: &Self, spec: ResultSpec) -> Self {
        enforce(self.try_combine(Op::Mul, rhs, spec))
    }

    /// Smallest zero-fraction operand holding `n`, sharing this value's policy
    fn scalar_operand(&self, n: i64) -> Result<Self, PreconditionViolation> {
        let d = self.descriptor();
        let kind = match d.kind {
            Kind::Float => Kind::Float,
            Kind::SignedInt | Kind::UnsignedInt | Kind::SignedFixed | Kind::UnsignedFixed => {
                if n > 0 {
                    Kind::UnsignedInt
                } else {
                    Kind::SignedInt
                }
            }
        };
        let magnitude_bits = u64::BITS - n.unsigned_abs().leading_zeros();
        let operand = Descriptor::new(magnitude_bits, 0, kind, d.mode, d.saturate, d.round);
        Self::try_new(n as f64, operand)
    }

    /// `self + n`. The scalar is held in `bits(|n|)` integer bits, so
    /// `i64::MIN` needs a 64-bit operand and is rejected as
    /// [`WidthTooLarge`](PreconditionViolation::WidthTooLarge) by checked values.
    pub fn try_add_int(&self, n: i64) -> Result<Self, PreconditionViolation> {
        if n == 0 {
            return Ok(*self);
        }
        self.try_add(&self.scalar_operand(n)?)
    }

    /// `self - n`, with the same operand width limit as [`try_add_int`](Self::try_add_int)
    pub fn try_sub_int(&self, n: i64) -> Result<Self, PreconditionViolation> {
        if n == 0 {
            return Ok(*self);
        }
        self.try_sub(&self.scalar_operand(n)?)
    }

    /// `self * n`. Powers of two (either sign) become exact shifts; a negative
    /// one moves unsigned values to the signed kind before negating.
    ///
    /// `i64::MIN` shifts by 63 bits, past the 62-bit quantization domain, so
    /// checked values report
    /// [`WidthTooLarge`](PreconditionViolation::WidthTooLarge).
    pub fn try_mul_int(&self, n: i64) -> Result<Self, PreconditionViolation> {
        if n == 0 {
            return Self::try_new(0.0, self.descriptor());
        }
        let magnitude = n.unsigned_abs();
        if magnitude.is_power_of_two() {
            let shifted = self.try_shl(magnitude.trailing_zeros())?;
            if n > 0 {
                return Ok(shifted);
            }
            let d = shifted.descriptor();
            let signed = if d.kind.is_unsigned() {
                shifted.try_convert(d.with_kind(d.kind.to_signed()))?
            } else {
                shifted
            };
            return signed.try_neg();
        }
        self.try_mul(&self.scalar_operand(n)?)
    }
}

macro_rules! impl_binary_ops {
    ($($trait:ident, $method:ident, $try_value:ident, $try_int:ident;)*) => {
        $(
            impl<C: Checking> $trait for Value<C> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    enforce(self.$try_value(&rhs))
                }
            }

            impl<C: Checking> $trait<i64> for Value<C> {
                type Output = Self;

                fn $method(self, rhs: i64) -> Self {
                    enforce(self.$try_int(rhs))
                }
            }
        )*
    };
}

impl_binary_ops! {
    Add, add, try_add, try_add_int;
    Sub, sub, try_sub, try_sub_int;
    Mul, mul, try_mul, try_mul_int;
}

impl<C: Checking> Add<Value<C>> for i64 {
    type Output = Value<C>;

    fn add(self, rhs: Value<C>) -> Value<C> {
        rhs + self
    }
}

impl<C: Checking> Sub<Value<C>> for i64 {
    type Output = Value<C>;

    /// `n - v` is computed as `-v + n`
    fn sub(self, rhs: Value<C>) -> Value<C> {
        enforce(rhs.try_neg().and_then(|neg| neg.try_add_int(self)))
    }
}

impl<C: Checking> Mul<Value<C>> for i64 {
    type Output = Value<C>;

    fn mul(self, rhs: Value<C>) -> Value<C> {
        rhs * self
    }
}

macro_rules! impl_assign_ops {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<C: Checking> $trait for Value<C> {
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<C: Checking> $trait<i64> for Value<C> {
                fn $method(&mut self, rhs: i64) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign_ops! {
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checking::{Checked, Unchecked};

    fn desc(iw: u32, fw: u32, kind: Kind, mode: Mode) -> Descriptor {
        Descriptor::new(iw, fw, kind, mode, false, false)
    }

    fn val(x: f64, iw: u32, fw: u32, kind: Kind, mode: Mode) -> Value<Checked> {
        Value::new(x, desc(iw, fw, kind, mode))
    }

    #[test]
    fn test_promotion_table() {
        use Kind::*;
        assert_eq!(promote(Op::Add, UnsignedInt, UnsignedInt), UnsignedInt);
        assert_eq!(promote(Op::Sub, UnsignedInt, UnsignedInt), SignedInt);
        assert_eq!(promote(Op::Mul, SignedInt, UnsignedInt), SignedInt);
        assert_eq!(promote(Op::Add, UnsignedFixed, UnsignedInt), UnsignedFixed);
        assert_eq!(promote(Op::Sub, UnsignedInt, UnsignedFixed), SignedFixed);
        assert_eq!(promote(Op::Add, SignedInt, SignedInt), SignedFixed);
        assert_eq!(promote(Op::Mul, UnsignedFixed, UnsignedFixed), SignedFixed);
        assert_eq!(promote(Op::Mul, Float, Float), Float);
    }

    #[test]
    fn test_width_inference() {
        let a = desc(9, 5, Kind::SignedFixed, Mode::Full);
        let b = desc(7, 1, Kind::SignedFixed, Mode::Full);
        let i = desc(3, 0, Kind::SignedInt, Mode::Full);

        assert_eq!(infer_widths(Op::Add, Mode::Full, &a, &b), Some((10, 5)));
        assert_eq!(infer_widths(Op::Mul, Mode::Full, &a, &b), Some((16, 6)));
        assert_eq!(infer_widths(Op::Sub, Mode::FixedFrac, &a, &b), Some((10, 1)));
        assert_eq!(infer_widths(Op::Mul, Mode::FixedFrac, &a, &b), Some((16, 1)));
        assert_eq!(infer_widths(Op::Add, Mode::FixedWidth, &a, &b), Some((9, 1)));
        assert_eq!(infer_widths(Op::Mul, Mode::FixedWidth, &i, &b), Some((7, 1)));
        assert_eq!(infer_widths(Op::Add, Mode::FixedFrac, &i, &a), Some((10, 5)));
        assert_eq!(infer_widths(Op::Add, Mode::Manual, &a, &b), None);
    }

    #[test]
    fn test_add_aligns_binary_points() {
        let a = val(-11.123456789, 9, 5, Kind::SignedFixed, Mode::FixedFrac);
        let b = val(39.987654321, 7, 1, Kind::SignedFixed, Mode::FixedFrac);
        let c = a + b;
        let d = c.descriptor();
        assert_eq!((d.integer_width, d.fractional_width, d.kind), (10, 1, Kind::SignedFixed));
        // -11.125 + 39.5 = 28.375, truncated to one fractional bit
        assert_eq!(c.decoded_value(), 28.0);
        assert_eq!((b + a).decoded_value(), 28.0);
    }

    #[test]
    fn test_sub_and_mul() {
        let a = val(-11.123456789, 9, 5, Kind::SignedFixed, Mode::FixedFrac);
        let b = val(39.987654321, 7, 1, Kind::SignedFixed, Mode::FixedFrac);
        assert_eq!((a - b).decoded_value(), -51.0);
        let p = a * b;
        assert_eq!(p.decoded_value(), -439.5);
        assert_eq!(p.descriptor().integer_width, 16);
    }

    #[test]
    fn test_full_mode_is_exact() {
        let a = val(-11.125, 9, 5, Kind::SignedFixed, Mode::Full);
        let b = val(39.5, 7, 1, Kind::SignedFixed, Mode::Full);
        assert_eq!((a + b).decoded_value(), 28.375);
        assert_eq!((a - b).decoded_value(), -50.625);
        assert_eq!((a * b).decoded_value(), -439.4375);
    }

    #[test]
    fn test_unsigned_difference_is_signed() {
        let a = val(2.0, 3, 0, Kind::UnsignedInt, Mode::Full);
        let b = val(5.0, 3, 0, Kind::UnsignedInt, Mode::Full);
        let d = a - b;
        assert_eq!(d.kind(), Kind::SignedInt);
        assert_eq!(d.decoded_value(), -3.0);
        assert_eq!((a + b).kind(), Kind::UnsignedInt);
    }

    #[test]
    fn test_float_arithmetic() {
        let a = val(1.1, 7, 1, Kind::Float, Mode::FixedFrac);
        let b = val(2.2, 7, 1, Kind::Float, Mode::FixedFrac);
        assert_eq!((a + b).decoded_value(), 1.1 + 2.2);
        assert_eq!((a * b).decoded_value(), 1.1 * 2.2);
        assert_eq!((a * 3).decoded_value(), 1.1 * 3.0);
        assert_eq!((a + b).kind(), Kind::Float);
    }

    #[test]
    fn test_checked_operand_faults() {
        let a = val(1.0, 4, 2, Kind::SignedFixed, Mode::FixedFrac);
        let b = val(1.0, 4, 2, Kind::SignedFixed, Mode::Full);
        assert_eq!(
            a.try_add(&b),
            Err(PreconditionViolation::ModeMismatch(Mode::FixedFrac, Mode::Full))
        );

        let saturating = desc(4, 2, Kind::SignedFixed, Mode::FixedFrac).with_saturate(true);
        let s = Value::<Checked>::new(1.0, saturating);
        assert_eq!(
            a.try_mul(&s),
            Err(PreconditionViolation::SaturateMismatch(false, true))
        );

        let f = val(1.0, 4, 2, Kind::Float, Mode::FixedFrac);
        assert_eq!(
            a.try_sub(&f),
            Err(PreconditionViolation::FloatMix(Kind::SignedFixed, Kind::Float))
        );
    }

    #[test]
    fn test_spec_overrides_waive_agreement() {
        let a = val(1.0, 4, 2, Kind::SignedFixed, Mode::FixedFrac);
        let b = val(1.0, 4, 2, Kind::SignedFixed, Mode::Full);
        let c = a.add_with(&b, ResultSpec::default().mode(Mode::Full));
        assert_eq!(c.descriptor().mode, Mode::Full);
        assert_eq!(c.descriptor().integer_width, 5);
        assert_eq!(c.decoded_value(), 2.0);
    }

    #[test]
    fn test_manual_mode_needs_widths() {
        let a = val(1.5, 4, 2, Kind::SignedFixed, Mode::Manual);
        let b = val(2.25, 4, 2, Kind::SignedFixed, Mode::Manual);
        assert_eq!(a.try_add(&b), Err(PreconditionViolation::ManualWidthsRequired));

        let c = a.mul_with(&b, ResultSpec::widths(6, 3));
        let d = c.descriptor();
        assert_eq!((d.integer_width, d.fractional_width, d.mode), (6, 3, Mode::Manual));
        assert_eq!(c.decoded_value(), 3.375);

        // Unchecked values fall back to a zero-width result
        let ua = a.try_with_policy::<Unchecked>().unwrap();
        let ub = b.try_with_policy::<Unchecked>().unwrap();
        let z = ua + ub;
        assert_eq!(z.descriptor().total_width(), 0);
    }

    #[test]
    fn test_manual_mode_float_needs_no_widths() {
        let a = val(1.5, 7, 1, Kind::Float, Mode::Manual);
        let b = val(2.25, 7, 1, Kind::Float, Mode::Manual);
        let c = a.try_mul(&b).map(|v| (v.decoded_value(), v.kind()));
        assert_eq!(c, Ok((3.375, Kind::Float)));
    }

    #[test]
    fn test_scalar_add_sub() {
        let a = val(-11.125, 9, 5, Kind::SignedFixed, Mode::FixedFrac);
        let c = a + 2;
        assert_eq!(c.decoded_value(), -9.125);
        assert_eq!(c.descriptor().integer_width, 10);
        assert_eq!(c.descriptor().fractional_width, 5);

        assert_eq!((a + 0).descriptor(), a.descriptor());
        assert_eq!((a - 0).decoded_value(), a.decoded_value());
        assert_eq!((a - 3).decoded_value(), -14.125);
        assert_eq!((a + -3).decoded_value(), -14.125);
        assert_eq!((3i64 - a).decoded_value(), 14.125);
        assert_eq!((2i64 + a).decoded_value(), -9.125);
    }

    #[test]
    fn test_scalar_operand_widths() {
        let a = val(1.0, 4, 0, Kind::UnsignedInt, Mode::Full);
        // 5 becomes a 3-bit operand; max(4, 3) + 1 under Full
        assert_eq!((a + 5).descriptor().integer_width, 5);
        assert_eq!((a + 5).kind(), Kind::UnsignedInt);
        let s = a + -5;
        assert_eq!(s.kind(), Kind::SignedInt);
        assert_eq!(s.decoded_value(), -4.0);
    }

    #[test]
    fn test_scalar_mul() {
        let a = val(-11.125, 9, 5, Kind::SignedFixed, Mode::FixedFrac);

        let five = a * 5;
        assert_eq!(five.decoded_value(), -55.625);
        assert_eq!(five.descriptor().integer_width, 12);
        assert_eq!(five.descriptor().fractional_width, 5);
        assert_eq!((5i64 * a).decoded_value(), -55.625);

        let zero = a * 0;
        assert_eq!(zero.decoded_value(), 0.0);
        assert_eq!(zero.descriptor(), a.descriptor());

        let four = a * 4;
        assert_eq!(four.decoded_value(), -44.5);
        assert_eq!(four.descriptor().integer_width, 11);
        assert_eq!(four.descriptor().fractional_width, 3);

        let minus_four = a * -4;
        assert_eq!(minus_four.decoded_value(), 44.5);
        assert_eq!(minus_four.descriptor(), four.descriptor());

        let minus_three = a * -3;
        assert_eq!(minus_three.decoded_value(), 33.375);
        assert_eq!(minus_three.kind(), Kind::SignedFixed);

        // Negative powers of two on unsigned values land on the signed kind,
        // like any other negative multiplier
        let u = val(3.0, 4, 2, Kind::UnsignedFixed, Mode::FixedFrac);
        for (n, product) in [(-3, -9.0), (-1, -3.0), (-2, -6.0)] {
            let p = u.try_mul_int(n).map(|v| (v.decoded_value(), v.kind()));
            assert_eq!(p, Ok((product, Kind::SignedFixed)), "3 * {}", n);
        }
        let n = val(3.0, 3, 0, Kind::UnsignedInt, Mode::FixedFrac);
        let minus_four = n * -4;
        assert_eq!(minus_four.decoded_value(), -12.0);
        assert_eq!(minus_four.kind(), Kind::SignedInt);
        assert_eq!(minus_four.descriptor().integer_width, 5);
    }

    #[test]
    fn test_unchecked_unsigned_negative_power_of_two() {
        let u = Value::<Unchecked>::new(3.0, desc(4, 2, Kind::UnsignedFixed, Mode::FixedFrac));
        assert_eq!((u * -1).decoded_value(), -3.0);
        assert_eq!((u * -2).decoded_value(), -6.0);
        assert_eq!((u * -2).kind(), Kind::SignedFixed);

        let n = Value::<Unchecked>::new(3.0, desc(3, 0, Kind::UnsignedInt, Mode::FixedFrac));
        assert_eq!((n * -4).decoded_value(), -12.0);
        assert_eq!((n * -4).kind(), Kind::SignedInt);
    }

    #[test]
    fn test_scalar_beyond_domain() {
        let a = val(1.0, 9, 5, Kind::SignedFixed, Mode::FixedFrac);
        assert!(matches!(
            a.try_add_int(i64::MIN),
            Err(PreconditionViolation::WidthTooLarge { integer_width: 64, .. })
        ));
        assert!(matches!(
            a.try_mul_int(i64::MIN),
            Err(PreconditionViolation::WidthTooLarge { .. })
        ));
    }

    #[test]
    fn test_assign_ops() {
        let mut acc = val(0.5, 4, 2, Kind::SignedFixed, Mode::FixedWidth);
        let step = val(0.25, 4, 2, Kind::SignedFixed, Mode::FixedWidth);
        acc += step;
        acc -= 1;
        acc *= 2;
        assert_eq!(acc.decoded_value(), -0.5);
        assert_eq!(acc.descriptor().integer_width, 5);
    }
}
