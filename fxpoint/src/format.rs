use crate::checking::Checking;
use crate::descriptor::Kind;
use crate::value::Value;
use std::fmt;

const FLOAT_MARKER: &str = "float";

impl<C: Checking> Value<C> {
    /// Register contents with the binary point marked.
    ///
    /// Signed kinds show the sign bit followed by the integer bits
    /// (-12.75 as `(4, 2)` is `10011.01`); unsigned kinds have no sign bit
    /// (10.75 as `(4, 2)` is `1010.11`). Floats render as `float`.
    pub fn to_binary_string(&self) -> String {
        let d = self.descriptor();
        let (width, point) = match d.kind {
            Kind::Float => return FLOAT_MARKER.to_string(),
            Kind::SignedInt | Kind::SignedFixed => {
                (d.total_width().saturating_add(1), d.integer_width.saturating_add(1))
            }
            Kind::UnsignedInt | Kind::UnsignedFixed => (d.total_width(), d.integer_width),
        };
        let bits = bit_pattern(self.raw() as i128, width);
        let (whole, fraction) = bits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    }

    /// Register contents as upper-case hex, padded on the left to whole
    /// nibbles over `integer_width + fractional_width + 1` bits.
    pub fn to_hex_string(&self) -> String {
        let d = self.descriptor();
        match d.kind {
            Kind::Float => FLOAT_MARKER.to_string(),
            Kind::SignedInt | Kind::UnsignedInt | Kind::SignedFixed | Kind::UnsignedFixed => {
                let nibbles = d.total_width().saturating_add(4) / 4;
                let raw = self.raw() as i128;
                (0..nibbles)
                    .rev()
                    .map(|n| {
                        let digit = (raw >> n.saturating_mul(4).min(127)) & 0xF;
                        std::char::from_digit(digit as u32, 16)
                            .unwrap_or('0')
                            .to_ascii_uppercase()
                    })
                    .collect()
            }
        }
    }

    /// `[iw, fw, bits, kind, mode, saturate, round] = value`
    pub fn to_display_string(&self) -> String {
        let d = self.descriptor();
        format!(
            "[{}, {}, {}, {}, {}, {}, {}] = {}",
            d.integer_width,
            d.fractional_width,
            self.to_binary_string(),
            d.kind,
            d.mode,
            d.saturate,
            d.round,
            self.decoded_value()
        )
    }
}

impl<C: Checking> fmt::Display for Value<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

/// Two's-complement bits of `raw`, most significant first
fn bit_pattern(raw: i128, width: u32) -> String {
    (0..width)
        .rev()
        .map(|i| if (raw >> i.min(127)) & 1 == 1 { '1' } else { '0' })
        .collect()
}
