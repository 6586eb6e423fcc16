//! Definition loader: parses discovered files into typed values.
//!
//! Brand files are normalized after parsing; per-file warnings are kept so
//! the CLI can surface them without failing the load. Logo references are
//! resolved here too (local paths and `data:` URIs), never fetched.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::{BxError, Result};
use crate::types::{Brand, Content};

use super::scanner::ScanResult;

/// One parsed brand definition.
#[derive(Debug)]
pub struct LoadedBrand {
    pub path: PathBuf,
    pub brand: Brand,
    /// Normalization warnings (repaired roles, dropped palette entries).
    pub warnings: Vec<String>,
}

/// One parsed content definition.
#[derive(Debug)]
pub struct LoadedContent {
    pub path: PathBuf,
    pub content: Content,
}

/// All definitions of a project.
#[derive(Debug, Default)]
pub struct LoadedProject {
    pub brands: Vec<LoadedBrand>,
    pub contents: Vec<LoadedContent>,
}

/// Parse a single brand definition file.
pub fn load_brand(path: &Path) -> Result<LoadedBrand> {
    let source = fs::read_to_string(path).map_err(|e| BxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    let mut brand: Brand = serde_yaml::from_str(&source).map_err(|e| BxError::Parse {
        message: format!("{}: {}", path.display(), e),
        help: Some("Expected a brand definition with colors, fonts and voice".to_string()),
    })?;
    let warnings = brand.normalize();
    Ok(LoadedBrand {
        path: path.to_path_buf(),
        brand,
        warnings,
    })
}

/// Parse a single content definition file.
pub fn load_content(path: &Path) -> Result<LoadedContent> {
    let source = fs::read_to_string(path).map_err(|e| BxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    let content: Content = serde_yaml::from_str(&source).map_err(|e| BxError::Parse {
        message: format!("{}: {}", path.display(), e),
        help: Some("Expected a content definition with a fields map".to_string()),
    })?;
    Ok(LoadedContent {
        path: path.to_path_buf(),
        content,
    })
}

/// Load every discovered definition.
///
/// Fails on the first unreadable or unparsable file; discovery is explicit
/// enough that a broken definition should stop the run.
pub fn load_project(scan: &ScanResult) -> Result<LoadedProject> {
    let mut project = LoadedProject::default();
    for path in &scan.brands {
        project.brands.push(load_brand(path)?);
    }
    for path in &scan.contents {
        project.contents.push(load_content(path)?);
    }
    Ok(project)
}

/// Resolve a brand's logo reference into raw bytes.
///
/// Supports `data:` URIs (base64 payloads) and local file paths relative
/// to the brand file. Remote URLs are not fetched; `None` lets the
/// exporters degrade to their placeholder rendering.
pub fn resolve_logo(brand: &Brand, brand_dir: &Path) -> Option<Vec<u8>> {
    let reference = brand.logo.as_deref()?.trim();
    if reference.is_empty() {
        return None;
    }

    if let Some(data_uri) = reference.strip_prefix("data:") {
        let payload = data_uri.split_once("base64,")?.1;
        return BASE64.decode(payload.trim()).ok();
    }

    if reference.starts_with("http://") || reference.starts_with("https://") {
        return None;
    }

    let path = Path::new(reference);
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        brand_dir.join(path)
    };
    fs::read(resolved).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_brand_with_warning() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("acme.brand.yaml");
        fs::write(
            &path,
            "name: Acme\ncolors:\n  primary: \"kaputt\"\n",
        )
        .unwrap();

        let loaded = load_brand(&path).unwrap();
        assert_eq!(loaded.brand.name, "Acme");
        assert_eq!(loaded.brand.colors.primary, "#2563eb");
        assert_eq!(loaded.warnings.len(), 1);
    }

    #[test]
    fn test_load_brand_rejects_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.brand.yaml");
        fs::write(&path, "colors: [not, a, map").unwrap();
        assert!(load_brand(&path).is_err());
    }

    #[test]
    fn test_resolve_logo_data_uri() {
        let mut brand = Brand::default();
        brand.logo = Some("data:image/png;base64,aGFsbG8=".to_string());
        let bytes = resolve_logo(&brand, Path::new(".")).unwrap();
        assert_eq!(bytes, b"hallo");
    }

    #[test]
    fn test_resolve_logo_relative_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"png-bytes").unwrap();
        let mut brand = Brand::default();
        brand.logo = Some("logo.png".to_string());
        let bytes = resolve_logo(&brand, dir.path()).unwrap();
        assert_eq!(bytes, b"png-bytes");
    }

    #[test]
    fn test_resolve_logo_remote_url_is_skipped() {
        let mut brand = Brand::default();
        brand.logo = Some("https://example.com/logo.png".to_string());
        assert!(resolve_logo(&brand, Path::new(".")).is_none());
    }
}
