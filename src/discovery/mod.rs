//! File discovery and definition loading for bx projects.
//!
//! Finds brand and content definition files by filename convention
//! (`*.brand.yaml`, `*.content.yaml`) and parses them into typed values.
//!
//! # Example
//!
//! ```ignore
//! use bx::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! let project = result.into_project()?;
//! ```

mod loader;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{load_brand, load_content, resolve_logo, LoadedBrand, LoadedContent, LoadedProject};
pub use scanner::{detect_definition_kind, scan_directory, DefinitionKind, ScanResult};

/// Result of discovering definitions in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Load all discovered definitions.
    pub fn into_project(self) -> Result<LoadedProject> {
        loader::load_project(&self.scan)
    }
}

/// Discover definition files under a project directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let scan = scan_directory(&root);
    Ok(DiscoveryResult { root, scan })
}

/// Discover definition files across explicit files and directories.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let mut scan = ScanResult::new();
    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path));
        } else if let Some(kind) = detect_definition_kind(path) {
            match kind {
                DefinitionKind::Brand => scan.brands.push(path.clone()),
                DefinitionKind::Content => scan.contents.push(path.clone()),
            }
        }
    }
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(DiscoveryResult { root, scan })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_and_load() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("acme.brand.yaml"),
            "name: Acme\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("website.content.yaml"),
            "fields:\n  headline: Hallo\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let result = discover(dir.path()).unwrap();
        assert_eq!(result.scan.brands.len(), 1);
        assert_eq!(result.scan.contents.len(), 1);

        let project = result.into_project().unwrap();
        assert_eq!(project.brands[0].brand.name, "Acme");
        assert_eq!(
            project.contents[0].content.field("headline"),
            Some("Hallo")
        );
    }
}
