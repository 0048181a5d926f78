use crate::checking::Checking;
use crate::descriptor::{Bounds, Descriptor, Kind};
use crate::error::{report, PreconditionViolation};
use log::trace;

/// Map `input` onto the raw representation of `descriptor`.
///
/// Infinities become the descriptor's limits, saturation clamps, then the
/// scaled value is rounded (or floored) and reduced modulo the ring size the
/// way a two's-complement register would. Float kinds keep the number itself.
pub(crate) fn quantize<C: Checking>(
    input: f64,
    descriptor: &Descriptor,
    bounds: &Bounds,
) -> Result<f64, PreconditionViolation> {
    if C::ENABLED {
        descriptor.validate().map_err(report)?;
    }

    let mut val = input;
    if val == f64::INFINITY {
        val = bounds.pos_limit;
    } else if val == f64::NEG_INFINITY {
        val = bounds.neg_limit;
    }

    if val > bounds.pos_limit || val < bounds.neg_limit {
        let limit = if val > bounds.pos_limit {
            bounds.pos_limit
        } else {
            bounds.neg_limit
        };
        if descriptor.saturate {
            trace!(
                "saturation: {} clamped to {} ({}.{} {})",
                val,
                limit,
                descriptor.integer_width,
                descriptor.fractional_width,
                descriptor.kind
            );
            val = limit;
        } else {
            trace!(
                "overflow: {} beyond {} wraps ({}.{} {})",
                val,
                limit,
                descriptor.integer_width,
                descriptor.fractional_width,
                descriptor.kind
            );
        }
    }

    if C::ENABLED && descriptor.kind.is_unsigned() && val < 0.0 {
        return Err(report(PreconditionViolation::NegativeUnsigned {
            kind: descriptor.kind,
            input,
        }));
    }

    let raw = match descriptor.kind {
        Kind::Float => val,
        Kind::SignedInt | Kind::SignedFixed => {
            let scaled = scale(val, descriptor.round, bounds);
            (scaled.wrapping_add(bounds.half).rem_euclid(bounds.modulus) - bounds.half) as f64
        }
        Kind::UnsignedInt | Kind::UnsignedFixed => {
            scale(val, descriptor.round, bounds).rem_euclid(bounds.modulus) as f64
        }
    };

    if C::ENABLED && input * raw < 0.0 {
        return Err(report(PreconditionViolation::SignFlip {
            input,
            decoded: decode(raw, descriptor.kind, bounds),
        }));
    }

    Ok(raw)
}

pub(crate) fn decode(raw: f64, kind: Kind, bounds: &Bounds) -> f64 {
    match kind {
        Kind::Float => raw,
        Kind::SignedInt | Kind::UnsignedInt | Kind::SignedFixed | Kind::UnsignedFixed => {
            raw / bounds.shift
        }
    }
}

/// Scale to raw units; ties round away from zero, truncation floors
fn scale(val: f64, round: bool, bounds: &Bounds) -> i128 {
    let scaled = val * bounds.shift;
    let whole = if round { scaled.round() } else { scaled.floor() };
    // `as` saturates out-of-range floats and maps NaN to zero
    whole as i128
}
