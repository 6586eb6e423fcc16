//! Init command implementation.
//!
//! Scaffolds a starter `brand.yaml` and `website.content.yaml` in the
//! target directory.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{BxError, Result};
use crate::output::{display_path, Printer};

const BRAND_FILENAME: &str = "brand.yaml";
const CONTENT_FILENAME: &str = "website.content.yaml";

/// Initialize a bx project by generating starter definition files
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing definition files
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| BxError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let brand_path = args.path.join(BRAND_FILENAME);
    if brand_path.exists() && !args.force {
        return Err(BxError::Validation {
            message: format!("{} already exists", BRAND_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    // Built by hand for stable key order and comments.
    let brand_yaml = "\
# bx brand definition
name: Meine Marke

colors:
  primary: \"#2563eb\"
  secondary: \"#1e40af\"
  accent: \"#f59e0b\"
  background: \"#ffffff\"
  text: \"#1f2937\"
  # palette:
  #   - name: Himmel
  #     hex: \"#38bdf8\"

fonts:
  heading: \"'Helvetica Neue', Helvetica, Arial, sans-serif\"
  body: \"'Helvetica Neue', Helvetica, Arial, sans-serif\"

voice:
  tone: professional      # professional | friendly | innovative | premium | playful | trustworthy
  formality: sie          # du | sie | wir
  tagline: \"\"
  dos: \"klar, direkt\"
  donts: \"floskelhaft\"

# logo: logo.png          # local path or data: URI
";

    let content_yaml = "\
# bx content definition (website)
asset: website
fields:
  headline: \"Ihre Marke. Ihr Auftritt.\"
  subline: \"Ein starker Auftritt beginnt mit klaren Worten.\"
  cta: \"Jetzt entdecken\"
  body: \"Hier steht Ihr Text.\"
";

    fs::write(&brand_path, brand_yaml).map_err(|e| BxError::Io {
        path: brand_path.clone(),
        message: format!("Failed to write file: {}", e),
    })?;
    printer.status("Created", &display_path(&brand_path));

    let content_path = args.path.join(CONTENT_FILENAME);
    if !content_path.exists() || args.force {
        fs::write(&content_path, content_yaml).map_err(|e| BxError::Io {
            path: content_path.clone(),
            message: format!("Failed to write file: {}", e),
        })?;
        printer.status("Created", &display_path(&content_path));
    }

    printer.success("Finished", "run `bx export brand.yaml --all` to export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::load_brand;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_brand() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let loaded = load_brand(&dir.path().join("brand.yaml")).unwrap();
        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.brand.colors.primary, "#2563eb");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let again = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(again, &Printer::new()).is_err());
    }
}
