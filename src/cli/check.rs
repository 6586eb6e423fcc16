//! Check command implementation.
//!
//! Runs the WCAG contrast battery against a brand definition and prints
//! the scored report. Status lines go to stderr; the report itself goes to
//! stdout so it can be piped.

use std::path::PathBuf;

use clap::Args;

use crate::contrast::{check_contrast, Severity, WcagLevel};
use crate::discovery::load_brand;
use crate::error::{BxError, Result};
use crate::output::{display_path, plural, Printer};

/// Check brand colours against the WCAG contrast battery
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Brand definition file (YAML)
    #[arg(required = true)]
    pub brand: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero on warnings too, not just errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&args.brand));

    let loaded = load_brand(&args.brand)?;
    for warning in &loaded.warnings {
        printer.warning("Normalized", warning);
    }

    let report = check_contrast(&loaded.brand);

    if args.json {
        // serde_json::to_string_pretty on the report cannot fail.
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        for check in &report.checks {
            let level = match check.level {
                WcagLevel::AAA => "AAA ",
                WcagLevel::AA => "AA  ",
                WcagLevel::Fail => "FAIL",
            };
            let size_tag = if check.large_text { "groß" } else { "normal" };
            println!(
                "{}  {:>6.2}:1  {} ({} auf {}, {})",
                level,
                check.ratio,
                check.label,
                check.foreground.to_hex(),
                check.background.to_hex(),
                size_tag
            );
        }
        println!();
        for diagnostic in &report.diagnostics {
            let label = printer.severity(
                &diagnostic.severity.to_string(),
                diagnostic.severity == Severity::Error,
            );
            println!("{}: {}", label, diagnostic.message);
            if let Some(help) = &diagnostic.help {
                println!("  help: {}", help);
            }
        }
        println!(
            "Score: {}/100 ({}) - {} bestanden, {}",
            report.score,
            report.grade,
            plural(report.passed_count(), "Prüfung", "Prüfungen"),
            plural(report.aaa_count(), "AAA-Treffer", "AAA-Treffer"),
        );
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || (args.strict && warnings > 0) {
        printer.error(
            "Failed",
            &format!(
                "{}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
        );
        return Err(BxError::Validation {
            message: format!("contrast check failed with {} error(s)", errors),
            help: Some("Run `bx palette` to inspect the colours".to_string()),
        });
    }

    printer.success("Passed", &format!("score {}/100", report.score));
    Ok(())
}
