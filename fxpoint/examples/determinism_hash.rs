use fxpoint::{Descriptor, Kind, Mode, Value};
use sha2::{Digest, Sha256};

/// Digest of the raw register contents of a fixed set of quantizations and
/// products. Two builds that print the same hash agree bit for bit.
fn main() {
    let inputs: [f64; 13] = [
        0.0, 1.0, -1.0, 0.5, -0.5, 0.25, -0.25, 0.75, -0.75, 1.25, -1.25, 127.0, -128.0,
    ];
    let q8_23 = Descriptor::new(8, 23, Kind::SignedFixed, Mode::FixedWidth, true, true);
    let q3_12 = Descriptor::new(3, 12, Kind::SignedFixed, Mode::FixedWidth, true, true);
    let gain: Value = Value::new(0.70710678118, q3_12);

    let mut registers = Sha256::new();
    for &x in &inputs {
        let v: Value = Value::new(x, q8_23);
        let scaled = v * gain;
        for raw in [v.raw(), scaled.raw()] {
            registers.update((raw as i64).to_le_bytes());
        }
    }
    println!("FXP_HASH {}", hex::encode(registers.finalize()));
}
