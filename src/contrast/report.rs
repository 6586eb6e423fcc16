//! Report types for the contrast checker.

use std::fmt;

use serde::Serialize;

use crate::types::Colour;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single contrast diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable diagnostic code (e.g. "bx::contrast::fail").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// WCAG conformance level reached by one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WcagLevel {
    Fail,
    AA,
    AAA,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WcagLevel::Fail => write!(f, "Fail"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// Result of one foreground/background pair.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastCheck {
    /// Display label, e.g. "Text auf Hintergrund".
    pub label: &'static str,
    pub foreground: Colour,
    pub background: Colour,
    pub ratio: f64,
    /// Large text uses the relaxed WCAG thresholds.
    pub large_text: bool,
    pub level: WcagLevel,
    pub required_aa: f64,
    pub required_aaa: f64,
}

impl ContrastCheck {
    pub fn passed(&self) -> bool {
        self.level != WcagLevel::Fail
    }
}

/// The full accessibility report for a brand.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastReport {
    pub checks: Vec<ContrastCheck>,
    pub diagnostics: Vec<Diagnostic>,
    /// 0-100.
    pub score: u8,
    /// German grade band: "Exzellent", "Gut", "Ausreichend" or "Kritisch".
    pub grade: &'static str,
}

impl ContrastReport {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed()).count()
    }

    pub fn aaa_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.level == WcagLevel::AAA)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
