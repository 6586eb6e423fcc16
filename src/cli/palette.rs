//! Palette command implementation.
//!
//! Prints swatch lines for a brand's colours (hex, RGB, CMYK, HSL) and
//! optionally the full 50-900 scales. Swatches go to stderr-free stdout so
//! the output can be piped into other tools.

use std::path::PathBuf;

use clap::Args;
use palette::{Hsl, IntoColor, Srgb};

use crate::discovery::load_brand;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::resolve::resolve_tokens;
use crate::types::Colour;

/// Inspect a brand's colours
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Brand definition file (YAML)
    #[arg(required = true)]
    pub brand: PathBuf,

    /// Also print the 50-900 tint/shade scale per colour
    #[arg(long)]
    pub steps: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let loaded = load_brand(&args.brand)?;
    for warning in &loaded.warnings {
        printer.warning("Normalized", warning);
    }

    let tokens = resolve_tokens(&loaded.brand);
    let entries = tokens.colors.entries();
    let total = entries.len() + tokens.colors.palette.len();
    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(total, "colour", "colours"),
            display_path(&args.brand)
        ),
    );

    for (name, colour) in entries {
        print_swatch(printer, name, colour);
        if args.steps {
            for (step, tint) in colour.scale().iter() {
                println!("    {:>4}  {}  {}", step, printer.swatch(tint.r, tint.g, tint.b), tint.to_hex());
            }
        }
    }
    for extra in &tokens.colors.palette {
        print_swatch(printer, &extra.name, extra.value);
    }

    Ok(())
}

fn print_swatch(printer: &Printer, name: &str, colour: Colour) {
    let srgb = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    let hsl: Hsl = srgb.into_color();
    let cmyk = colour.to_cmyk();

    println!(
        "{} {:<14} {}  rgb({}, {}, {})  cmyk({})  hsl({:.0}, {:.0}%, {:.0}%)",
        printer.swatch(colour.r, colour.g, colour.b),
        name,
        colour.to_hex(),
        colour.r,
        colour.g,
        colour.b,
        cmyk,
        hsl.hue.into_positive_degrees(),
        hsl.saturation * 100.0,
        hsl.lightness * 100.0,
    );
}
