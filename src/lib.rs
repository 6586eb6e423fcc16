//! bx - Brand token and collateral pipeline generator
//!
//! A library for resolving brand definition files into design tokens and
//! exporting them as CSS, Tailwind, JSON, HTML, PPTX and print-ready PDF
//! collateral.

pub mod cli;
pub mod contrast;
pub mod discovery;
pub mod error;
pub mod export;
pub mod output;
pub mod resolve;
pub mod types;

pub use contrast::{check_contrast, ContrastCheck, ContrastReport, Diagnostic, Severity, WcagLevel};
pub use discovery::{discover, discover_paths, DiscoveryResult, LoadedProject, ScanResult};
pub use error::{BxError, Result};
pub use export::{export, Artifact, ExportFormat, ExportOptions, PageSize};
pub use resolve::resolve_tokens;
pub use types::{
    AssetKind, Brand, BrandColors, BrandFonts, BrandVoice, Cmyk, Colour, ColourScale, Content,
    DesignTokens, Formality, Tone,
};
