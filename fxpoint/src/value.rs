use crate::checking::{Checked, Checking};
use crate::descriptor::{exp2, Bounds, Descriptor, Kind};
use crate::error::PreconditionViolation;
use crate::quantize::{decode, quantize};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Neg, Shl, Shr};

/// A number held the way a fixed-width register would hold it.
///
/// For non-float kinds `raw` is the scaled integer (value × 2^fractional_width),
/// stored in an `f64`; for [`Kind::Float`] it is the number itself. Every
/// operation returns a fresh `Value`; values are `Copy`, so there is no
/// aliasing between handles.
///
/// `C` selects the precondition policy. The non-`try` methods and the operator
/// traits panic on a [`PreconditionViolation`] under [`Checked`]; under
/// [`Unchecked`](crate::Unchecked) they never fail.
#[derive(Debug, Clone, Copy)]
pub struct Value<C: Checking = Checked> {
    descriptor: Descriptor,
    bounds: Bounds,
    raw: f64,
    policy: PhantomData<C>,
}

impl<C: Checking> Value<C> {
    /// Quantize `input` against `descriptor`
    pub fn try_new(input: f64, descriptor: Descriptor) -> Result<Self, PreconditionViolation> {
        let bounds = descriptor.bounds();
        let raw = quantize::<C>(input, &descriptor, &bounds)?;
        Ok(Self {
            descriptor,
            bounds,
            raw,
            policy: PhantomData,
        })
    }

    pub fn new(input: f64, descriptor: Descriptor) -> Self {
        enforce(Self::try_new(input, descriptor))
    }

    /// Quantize `input` using `template`'s descriptor. Only the layout of
    /// `template` is read, never its value.
    pub fn try_with_template(input: f64, template: &Self) -> Result<Self, PreconditionViolation> {
        Self::try_new(input, template.descriptor)
    }

    pub fn with_template(input: f64, template: &Self) -> Self {
        enforce(Self::try_with_template(input, template))
    }

    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn kind(&self) -> Kind {
        self.descriptor.kind
    }

    /// Stored representation: scaled integer, or the number for floats
    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn decoded_value(&self) -> f64 {
        decode(self.raw, self.descriptor.kind, &self.bounds)
    }

    /// Re-quantize the decoded value under a new descriptor. Narrower layouts
    /// may saturate or wrap.
    pub fn try_convert(&self, descriptor: Descriptor) -> Result<Self, PreconditionViolation> {
        Self::try_new(self.decoded_value(), descriptor)
    }

    pub fn convert(&self, descriptor: Descriptor) -> Self {
        enforce(self.try_convert(descriptor))
    }

    pub fn try_convert_like(&self, template: &Self) -> Result<Self, PreconditionViolation> {
        self.try_convert(template.descriptor)
    }

    pub fn convert_like(&self, template: &Self) -> Self {
        enforce(self.try_convert_like(template))
    }

    /// Carry this value over to another precondition policy, re-validating it
    /// if the target policy checks.
    pub fn try_with_policy<D: Checking>(&self) -> Result<Value<D>, PreconditionViolation> {
        Value::<D>::try_new(self.decoded_value(), self.descriptor)
    }

    pub fn try_neg(&self) -> Result<Self, PreconditionViolation> {
        Self::try_new(-self.decoded_value(), self.descriptor)
    }

    pub fn try_abs(&self) -> Result<Self, PreconditionViolation> {
        Self::try_new(self.decoded_value().abs(), self.descriptor)
    }

    pub fn abs(&self) -> Self {
        enforce(self.try_abs())
    }

    /// The larger of the two by decoded value; ties go to `other`
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// The smaller of the two by decoded value; ties go to `other`
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// Multiply by 2^`amount`, moving bits from the fractional to the
    /// integer part.
    pub fn try_shl(&self, amount: u32) -> Result<Self, PreconditionViolation> {
        let d = self.descriptor;
        let shifted = d.with_widths(
            d.integer_width.saturating_add(amount),
            d.fractional_width.saturating_sub(amount),
        );
        Self::try_new(self.decoded_value() * exp2(amount), shifted)
    }

    /// Divide by 2^`amount`, dropping integer bits.
    ///
    /// The fractional width is left as is, so bits shifted below the binary
    /// point are lost to truncation or rounding. Widen with
    /// [`convert`](Self::convert) first to keep them.
    pub fn try_shr(&self, amount: u32) -> Result<Self, PreconditionViolation> {
        let d = self.descriptor;
        let shifted = d.with_widths(d.integer_width.saturating_sub(amount), d.fractional_width);
        Self::try_new(self.decoded_value() / exp2(amount), shifted)
    }
}

/// Unwrap a result whose error is fatal under the checked policy
pub(crate) fn enforce<T>(result: Result<T, PreconditionViolation>) -> T {
    match result {
        Ok(value) => value,
        Err(violation) => panic!("fixed-point precondition violated: {}", violation),
    }
}

impl<C: Checking> Neg for Value<C> {
    type Output = Self;

    fn neg(self) -> Self {
        enforce(self.try_neg())
    }
}

impl<C: Checking> Shl<u32> for Value<C> {
    type Output = Self;

    fn shl(self, amount: u32) -> Self {
        enforce(self.try_shl(amount))
    }
}

impl<C: Checking> Shr<u32> for Value<C> {
    type Output = Self;

    fn shr(self, amount: u32) -> Self {
        enforce(self.try_shr(amount))
    }
}

// Comparisons look at decoded values only, so equal numbers held at
// different widths compare equal.

impl<C: Checking, D: Checking> PartialEq<Value<D>> for Value<C> {
    fn eq(&self, other: &Value<D>) -> bool {
        self.decoded_value() == other.decoded_value()
    }
}

impl<C: Checking, D: Checking> PartialOrd<Value<D>> for Value<C> {
    fn partial_cmp(&self, other: &Value<D>) -> Option<Ordering> {
        self.decoded_value().partial_cmp(&other.decoded_value())
    }
}

impl<C: Checking> PartialEq<f64> for Value<C> {
    fn eq(&self, other: &f64) -> bool {
        self.decoded_value() == *other
    }
}

impl<C: Checking> PartialOrd<f64> for Value<C> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.decoded_value().partial_cmp(other)
    }
}
