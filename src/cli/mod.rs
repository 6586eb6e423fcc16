pub mod check;
pub mod completions;
pub mod export;
pub mod init;
pub mod list;
pub mod palette;

use clap::{Parser, Subcommand};

/// bx - Brand token and collateral pipeline generator
#[derive(Parser, Debug)]
#[command(name = "bx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export design tokens and collateral from a brand definition
    Export(export::ExportArgs),

    /// Check brand colours against the WCAG contrast battery
    Check(check::CheckArgs),

    /// Inspect a brand's colours (swatches, CMYK, HSL, scales)
    Palette(palette::PaletteArgs),

    /// Initialize a bx project (generates starter definition files)
    Init(init::InitArgs),

    /// List discovered definition files and known export formats
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
