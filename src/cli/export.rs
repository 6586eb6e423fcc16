//! Export command implementation.
//!
//! Loads a brand definition (plus optional content), resolves tokens and
//! writes the requested artifacts to the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{load_brand, load_content, resolve_logo};
use crate::error::{BxError, Result};
use crate::export::{export, ExportFormat, ExportOptions, PageSize};
use crate::output::{display_path, plural, Printer};
use crate::resolve::resolve_tokens;
use crate::types::Content;

/// Export design tokens and collateral from a brand definition
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Brand definition file (YAML)
    #[arg(required = true)]
    pub brand: PathBuf,

    /// Content definition file (YAML)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Export format identifiers (repeatable)
    #[arg(long = "format", short = 'f')]
    pub formats: Vec<String>,

    /// Export every known format
    #[arg(long, conflicts_with = "formats")]
    pub all: bool,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Flyer page size
    #[arg(long, value_parser = parse_page_size, default_value = "a4")]
    pub page_size: PageSize,
}

fn parse_page_size(s: &str) -> std::result::Result<PageSize, String> {
    match s {
        "a4" => Ok(PageSize::A4),
        "a5" => Ok(PageSize::A5),
        "din-long" => Ok(PageSize::DinLong),
        other => Err(format!(
            "unknown page size '{}', expected a4, a5 or din-long",
            other
        )),
    }
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let formats = resolve_formats(&args)?;

    let loaded = load_brand(&args.brand)?;
    for warning in &loaded.warnings {
        printer.warning("Normalized", warning);
    }

    let content = match &args.content {
        Some(path) => load_content(path)?.content,
        None => Content::empty(),
    };

    let brand_dir = args
        .brand
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let logo = resolve_logo(&loaded.brand, &brand_dir);
    if loaded.brand.logo.is_some() && logo.is_none() {
        printer.warning("Degraded", "logo could not be resolved, exports use placeholders");
    }

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| BxError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let tokens = resolve_tokens(&loaded.brand);
    let options = ExportOptions {
        page_size: args.page_size,
        logo,
    };

    let mut written = 0;
    for format in formats {
        printer.status(
            "Exporting",
            &format!("{} ({})", tokens.brand_name, format.id()),
        );
        let artifact = export(format, &tokens, &content, &options)?;
        let path = args.output.join(&artifact.filename);
        fs::write(&path, &artifact.bytes).map_err(|e| BxError::Io {
            path: path.clone(),
            message: format!("Failed to write artifact: {}", e),
        })?;
        written += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(written, "artifact", "artifacts"),
            display_path(&args.output)
        ),
    );
    Ok(())
}

/// Resolve CLI flags into a concrete format list.
fn resolve_formats(args: &ExportArgs) -> Result<Vec<ExportFormat>> {
    if args.all {
        return Ok(ExportFormat::ALL.to_vec());
    }
    if args.formats.is_empty() {
        return Err(BxError::Validation {
            message: "no export format given".to_string(),
            help: Some("Pass --format <id> (repeatable) or --all".to_string()),
        });
    }
    args.formats.iter().map(|id| id.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> ExportArgs {
        ExportArgs {
            brand: PathBuf::from("brand.yaml"),
            content: None,
            formats: vec![],
            all: false,
            output: PathBuf::from("dist"),
            page_size: PageSize::A4,
        }
    }

    #[test]
    fn test_resolve_formats_all() {
        let mut args = base_args();
        args.all = true;
        assert_eq!(resolve_formats(&args).unwrap().len(), ExportFormat::ALL.len());
    }

    #[test]
    fn test_resolve_formats_rejects_empty() {
        assert!(resolve_formats(&base_args()).is_err());
    }

    #[test]
    fn test_resolve_formats_unknown_id() {
        let mut args = base_args();
        args.formats = vec!["tokens-css".to_string(), "nope".to_string()];
        let err = resolve_formats(&args).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("a5").unwrap(), PageSize::A5);
        assert!(parse_page_size("letter").is_err());
    }
}
