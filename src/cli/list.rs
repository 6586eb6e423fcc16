//! List command implementation.
//!
//! Discovers definition files and prints an organized inventory, plus the
//! known export formats.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::output::{display_path, Printer};

/// List discovered definition files and known export formats
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Files or directories to scan (default: current directory)
    pub files: Vec<PathBuf>,

    /// Only list the known export formats
    #[arg(long)]
    pub formats: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    if args.formats {
        print_formats(printer);
        return Ok(());
    }

    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };

    if discovery.scan.is_empty() {
        printer.info("Found", "no definition files");
        print_formats(printer);
        return Ok(());
    }

    let project = discovery.into_project()?;

    if !project.brands.is_empty() {
        printer.info("Brands", "");
        for loaded in &project.brands {
            println!(
                "  {}  ({})",
                loaded.brand.name,
                display_path(&loaded.path)
            );
            for warning in &loaded.warnings {
                println!("    {}: {}", printer.severity("warning", false), warning);
            }
        }
    }

    if !project.contents.is_empty() {
        printer.info("Contents", "");
        for loaded in &project.contents {
            let kind = loaded
                .content
                .asset
                .map(|k| format!("{:?}", k).to_lowercase())
                .unwrap_or_else(|| "generic".to_string());
            println!(
                "  {} field(s), {}  ({})",
                loaded.content.fields.len(),
                kind,
                display_path(&loaded.path)
            );
        }
    }

    print_formats(printer);
    Ok(())
}

fn print_formats(printer: &Printer) {
    printer.info("Formats", "");
    for format in ExportFormat::ALL {
        println!("  {:<18} .{}", format.id(), format.extension());
    }
}
