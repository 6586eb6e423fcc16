//! File system scanner for discovering brand definition files.
//!
//! Recursively scans directories to find brand and content definition
//! files (`*.brand.yaml`, `*.content.yaml`).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The kind of definition file a path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Brand,
    Content,
}

/// Result of scanning for definition files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered brand definition files.
    pub brands: Vec<PathBuf>,
    /// Discovered content definition files.
    pub contents: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered files.
    pub fn total(&self) -> usize {
        self.brands.len() + self.contents.len()
    }

    /// Check if no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.brands.extend(other.brands);
        self.contents.extend(other.contents);
    }
}

/// Classify a path by filename convention.
///
/// `acme.brand.yaml`, `brand.yml` → brand; `website.content.yaml`,
/// `content.yaml` → content. Everything else is ignored.
pub fn detect_definition_kind(path: &Path) -> Option<DefinitionKind> {
    let name = path.file_name()?.to_str()?;
    let lowered = name.to_ascii_lowercase();
    if !lowered.ends_with(".yaml") && !lowered.ends_with(".yml") {
        return None;
    }
    if lowered.contains(".brand.") || lowered == "brand.yaml" || lowered == "brand.yml" {
        Some(DefinitionKind::Brand)
    } else if lowered.contains(".content.") || lowered == "content.yaml" || lowered == "content.yml"
    {
        Some(DefinitionKind::Content)
    } else {
        None
    }
}

/// Scan a directory tree for definition files.
pub fn scan_directory(root: &Path) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        match detect_definition_kind(path) {
            Some(DefinitionKind::Brand) => result.brands.push(path.to_path_buf()),
            Some(DefinitionKind::Content) => result.contents.push(path.to_path_buf()),
            None => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_brand_file() {
        assert_eq!(
            detect_definition_kind(Path::new("acme.brand.yaml")),
            Some(DefinitionKind::Brand)
        );
        assert_eq!(
            detect_definition_kind(Path::new("brand.yml")),
            Some(DefinitionKind::Brand)
        );
    }

    #[test]
    fn test_detect_content_file() {
        assert_eq!(
            detect_definition_kind(Path::new("website.content.yaml")),
            Some(DefinitionKind::Content)
        );
    }

    #[test]
    fn test_other_files_ignored() {
        assert_eq!(detect_definition_kind(Path::new("notes.md")), None);
        assert_eq!(detect_definition_kind(Path::new("brand.json")), None);
        assert_eq!(detect_definition_kind(Path::new("theme.yaml")), None);
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let result = scan_directory(Path::new("/nonexistent/bx-project"));
        assert!(result.is_empty());
    }
}
