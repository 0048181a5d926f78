use anyhow::{Context, Result};
use clap::Parser;
use fxpoint::{Checked, Checking, Descriptor, Kind, Mode, Unchecked, Value};

/// Print reference fixed-point sample values and arithmetic results
///
/// Run with RUST_LOG=trace to see saturation and overflow events.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Skip precondition checks (faulty layouts produce wrong numbers instead of errors)
    #[arg(long, default_value_t = false)]
    unchecked: bool,

    /// Print the full layout of every value, not just its decoded number
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// First sample input
    #[arg(long, default_value_t = -11.123456789, allow_hyphen_values = true)]
    number1: f64,

    /// Second sample input
    #[arg(long, default_value_t = 39.987654321, allow_hyphen_values = true)]
    number2: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.unchecked {
        run::<Unchecked>(&args)
    } else {
        run::<Checked>(&args)
    }
}

fn show<C: Checking>(label: &str, v: &Value<C>, verbose: bool) {
    if verbose {
        println!(" {:<14} = {}", label, v);
    } else {
        println!(" {:<14} = {}", label, v.decoded_value());
    }
}

fn run<C: Checking>(args: &Args) -> Result<()> {
    log::info!("sample values under the {} policy", C::NAME);
    let d = |iw, fw, kind, mode| Descriptor::new(iw, fw, kind, mode, false, false);

    let var_1 = Value::<C>::try_new(args.number1, d(30, 10, Kind::SignedFixed, Mode::Full))
        .context("var_1")?;
    let var_2 = Value::<C>::try_new(args.number1, d(10, 10, Kind::SignedFixed, Mode::Full))
        .context("var_2")?;
    let var_3 = Value::<C>::try_new(args.number1, d(9, 5, Kind::SignedFixed, Mode::FixedFrac))
        .context("var_3")?;
    let var_4 = Value::<C>::try_new(args.number2, d(7, 1, Kind::SignedFixed, Mode::FixedFrac))
        .context("var_4")?;
    let var_5 = Value::try_with_template(args.number2, &var_4).context("var_5")?;
    let int_1 = Value::<C>::try_new(-3.0, d(3, 0, Kind::SignedInt, Mode::FixedFrac))
        .context("int_1")?;
    let uint_1 = Value::<C>::try_new(3.0, d(3, 0, Kind::UnsignedInt, Mode::FixedFrac))
        .context("uint_1")?;
    let var_inf = Value::<C>::try_new(f64::INFINITY, d(7, 1, Kind::Float, Mode::FixedFrac))
        .context("var_inf")?;

    for (label, v) in [
        ("var_1", &var_1),
        ("var_2", &var_2),
        ("var_3", &var_3),
        ("var_4", &var_4),
        ("var_5", &var_5),
        ("int_1", &int_1),
        ("uint_1", &uint_1),
        ("var_inf", &var_inf),
    ] {
        show(label, v, args.verbose);
    }
    println!();

    show("var_1 + var_2", &var_1.try_add(&var_2).context("var_1 + var_2")?, args.verbose);
    show("var_3 + var_4", &var_3.try_add(&var_4).context("var_3 + var_4")?, args.verbose);
    show("var_3 - var_4", &var_3.try_sub(&var_4).context("var_3 - var_4")?, args.verbose);
    show("var_3 * var_4", &var_3.try_mul(&var_4).context("var_3 * var_4")?, args.verbose);
    println!();

    let three_minus = var_3
        .try_neg()
        .and_then(|neg| neg.try_add_int(3))
        .context("3 - var_3")?;
    show("var_3 + 2", &var_3.try_add_int(2).context("var_3 + 2")?, args.verbose);
    show("3 - var_3", &three_minus, args.verbose);
    show("5 * var_3", &var_3.try_mul_int(5).context("5 * var_3")?, args.verbose);

    Ok(())
}
