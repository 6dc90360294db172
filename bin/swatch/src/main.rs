//! swatch - print a color in every space stimcolor knows about.

use anyhow::{bail, Context, Result};
use clap::Parser;
use stimcolor::{space, AdvancedColor, CalibrationMatrix, Component, RawValue, Space};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(version, about = "Print a color in every color space")]
#[command(long_about = "
Print a color in every color space.

Examples:
  swatch red                            # A named color
  swatch '#F2545B'                      # Hex, space detected
  swatch 0.89,-0.35,-0.28 --space rgb   # Canonical RGB
  swatch 0,90,1 --space dkl             # DKL with the default matrix
  swatch 0.5,0.5,0.5 --candidates       # Every space the value fits
")]
struct Cli {
    /// The color: a name, a hex string or comma separated channels
    value: String,

    /// Space the value is in, detected when not given
    #[arg(short, long)]
    space: Option<String>,

    /// Only list the spaces the value is valid in
    #[arg(long)]
    candidates: bool,

    /// Contrast applied to the rendered values
    #[arg(short, long, default_value = "1.0")]
    contrast: Component,

    /// Calibration matrix of the display, nine comma separated values in
    /// row order
    #[arg(short, long, value_delimiter = ',', num_args = 9, allow_hyphen_values = true)]
    matrix: Option<Vec<Component>>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let raw = parse_value(&cli.value);

    if cli.candidates {
        for space in space::detect_candidates(&raw) {
            println!("{}", space);
        }
        return Ok(());
    }

    let declared = cli
        .space
        .as_deref()
        .map(str::parse::<Space>)
        .transpose()
        .context("Invalid --space")?;

    let calibration = cli.matrix.as_deref().map(calibration_from).transpose()?;
    let mut color = AdvancedColor::try_new(raw, declared, calibration)
        .with_context(|| format!("Could not read {:?}", cli.value))?;
    color.set_contrast(cli.contrast);

    println!("{}", color);
    for space in Space::ALL {
        let value = color
            .try_convert(space)
            .map(|values| values.to_string())
            .unwrap_or_else(|err| {
                debug!("{}: {}", space, err);
                "-".to_string()
            });
        println!("{:>10}  {}", space.name(), value);
    }

    if cli.contrast != 1.0 {
        if let Some(rendered) = color.render(Space::Rgb) {
            println!("{:>10}  {}", "rendered", rendered);
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read comma separated numbers as channels and anything else as text.
fn parse_value(text: &str) -> RawValue {
    let channels: Result<Vec<Component>, _> =
        text.split(',').map(|part| part.trim().parse()).collect();
    match channels {
        Ok(channels) => RawValue::from(channels),
        Err(_) => RawValue::from(text),
    }
}

fn calibration_from(values: &[Component]) -> Result<CalibrationMatrix> {
    let [a, b, c, d, e, f, g, h, i] = values else {
        bail!("A calibration matrix needs 9 values, got {}", values.len());
    };
    Ok(CalibrationMatrix::from_rows([
        [*a, *b, *c],
        [*d, *e, *f],
        [*g, *h, *i],
    ]))
}
