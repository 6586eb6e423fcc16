//! Export pipeline: `DesignTokens` + `Content` → artifacts.
//!
//! Every exporter is a pure function `(tokens, content, options) -> Artifact`
//! that never mutates its inputs and performs no I/O; writing artifacts to
//! disk is the CLI's job. Asset-level failures (an undecodable logo) degrade
//! the artifact visually instead of failing it; only unknown formats and
//! document-assembly failures surface as errors.

mod css;
mod html;
mod json;
mod pdf;
mod pptx;
mod print;
mod tailwind;

use std::fmt;
use std::str::FromStr;

use crate::error::{BxError, Result};
use crate::types::{Content, DesignTokens};

pub use pdf::PageSize;

/// One export format identifier, as accepted on the wire and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    TokensCss,
    TokensTailwind,
    TokensJson,
    FigmaVariables,
    Pptx,
    PdfFlyer,
    PdfBusinessCard,
    PdfGuidelines,
    PrintSpecs,
    HtmlEmail,
    HtmlHero,
}

impl ExportFormat {
    /// All known format identifiers, in dispatch order.
    pub const ALL: [ExportFormat; 11] = [
        ExportFormat::TokensCss,
        ExportFormat::TokensTailwind,
        ExportFormat::TokensJson,
        ExportFormat::FigmaVariables,
        ExportFormat::Pptx,
        ExportFormat::PdfFlyer,
        ExportFormat::PdfBusinessCard,
        ExportFormat::PdfGuidelines,
        ExportFormat::PrintSpecs,
        ExportFormat::HtmlEmail,
        ExportFormat::HtmlHero,
    ];

    /// The identifiers matching [`ExportFormat::ALL`].
    pub const ALL_IDS: [&'static str; 11] = [
        "tokens-css",
        "tokens-tailwind",
        "tokens-json",
        "figma-variables",
        "pptx",
        "pdf-flyer",
        "pdf-businesscard",
        "pdf-guidelines",
        "print-specs",
        "html-email",
        "html-hero",
    ];

    /// The wire identifier for this format.
    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::TokensCss => "tokens-css",
            ExportFormat::TokensTailwind => "tokens-tailwind",
            ExportFormat::TokensJson => "tokens-json",
            ExportFormat::FigmaVariables => "figma-variables",
            ExportFormat::Pptx => "pptx",
            ExportFormat::PdfFlyer => "pdf-flyer",
            ExportFormat::PdfBusinessCard => "pdf-businesscard",
            ExportFormat::PdfGuidelines => "pdf-guidelines",
            ExportFormat::PrintSpecs => "print-specs",
            ExportFormat::HtmlEmail => "html-email",
            ExportFormat::HtmlHero => "html-hero",
        }
    }

    /// File extension of the produced artifact.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::TokensCss => "css",
            ExportFormat::TokensTailwind => "js",
            ExportFormat::TokensJson | ExportFormat::FigmaVariables | ExportFormat::PrintSpecs => {
                "json"
            }
            ExportFormat::Pptx => "pptx",
            ExportFormat::PdfFlyer | ExportFormat::PdfBusinessCard | ExportFormat::PdfGuidelines => {
                "pdf"
            }
            ExportFormat::HtmlEmail | ExportFormat::HtmlHero => "html",
        }
    }

    /// MIME type of the produced artifact.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::TokensCss => "text/css",
            ExportFormat::TokensTailwind => "text/javascript",
            ExportFormat::TokensJson | ExportFormat::FigmaVariables | ExportFormat::PrintSpecs => {
                "application/json"
            }
            ExportFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            ExportFormat::PdfFlyer | ExportFormat::PdfBusinessCard | ExportFormat::PdfGuidelines => {
                "application/pdf"
            }
            ExportFormat::HtmlEmail | ExportFormat::HtmlHero => "text/html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = BxError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .iter()
            .find(|f| f.id() == s)
            .copied()
            .ok_or_else(|| BxError::unsupported_format(s))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An export result: an opaque payload plus filename and MIME type.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Build a text artifact.
    pub fn text(filename: String, content_type: &'static str, text: String) -> Self {
        Self {
            filename,
            content_type,
            bytes: text.into_bytes(),
        }
    }

    /// Payload as UTF-8, for text artifacts.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Options shared by all exporters.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Page size for the flyer export.
    pub page_size: PageSize,
    /// Raw bytes of the brand logo (PNG or JPEG), when the caller resolved
    /// one. Exporters that cannot decode it fall back to a placeholder.
    pub logo: Option<Vec<u8>>,
}

/// Slug used in generated artifact filenames.
fn file_slug(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed: Vec<&str> = slug.split('-').filter(|s| !s.is_empty()).collect();
    if trimmed.is_empty() {
        "brand".to_string()
    } else {
        trimmed.join("-")
    }
}

fn artifact_filename(tokens: &DesignTokens, format: ExportFormat) -> String {
    format!("{}-{}.{}", file_slug(&tokens.brand_name), format.id(), format.extension())
}

/// Run one exporter.
///
/// Pure with respect to its inputs; the returned artifact is complete or
/// the call fails atomically.
pub fn export(
    format: ExportFormat,
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Artifact> {
    let filename = artifact_filename(tokens, format);
    let content_type = format.content_type();

    let artifact = match format {
        ExportFormat::TokensCss => {
            Artifact::text(filename, content_type, css::export_css(tokens))
        }
        ExportFormat::TokensTailwind => {
            Artifact::text(filename, content_type, tailwind::export_tailwind(tokens))
        }
        ExportFormat::TokensJson => {
            Artifact::text(filename, content_type, json::export_tokens_json(tokens))
        }
        ExportFormat::FigmaVariables => {
            Artifact::text(filename, content_type, json::export_figma_variables(tokens))
        }
        ExportFormat::Pptx => Artifact {
            filename,
            content_type,
            bytes: pptx::export_deck(tokens, content, options)?,
        },
        ExportFormat::PdfFlyer => Artifact {
            filename,
            content_type,
            bytes: pdf::export_flyer(tokens, content, options)?,
        },
        ExportFormat::PdfBusinessCard => Artifact {
            filename,
            content_type,
            bytes: pdf::export_business_card(tokens, content, options)?,
        },
        ExportFormat::PdfGuidelines => Artifact {
            filename,
            content_type,
            bytes: pdf::export_guidelines(tokens, content, options)?,
        },
        ExportFormat::PrintSpecs => {
            Artifact::text(filename, content_type, print::export_print_specs(tokens))
        }
        ExportFormat::HtmlEmail => {
            Artifact::text(filename, content_type, html::export_email(tokens, content))
        }
        ExportFormat::HtmlHero => {
            Artifact::text(filename, content_type, html::export_hero(tokens, content))
        }
    };

    Ok(artifact)
}

/// Parse a format identifier, failing with the identifier in the message.
pub fn parse_format(id: &str) -> Result<ExportFormat> {
    id.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;

    #[test]
    fn test_unknown_format_names_identifier() {
        let err = parse_format("unknown-format").unwrap_err();
        match err {
            BxError::UnsupportedFormat { format, .. } => assert_eq!(format, "unknown-format"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
        let msg = parse_format("unknown-format").unwrap_err().to_string();
        assert!(msg.contains("unknown-format"));
    }

    #[test]
    fn test_all_ids_roundtrip() {
        for (format, id) in ExportFormat::ALL.iter().zip(ExportFormat::ALL_IDS) {
            assert_eq!(format.id(), id);
            assert_eq!(parse_format(id).unwrap(), *format);
        }
    }

    #[test]
    fn test_filenames_are_slugged() {
        let mut brand = Brand::default();
        brand.name = "Müller & Söhne GmbH".to_string();
        let tokens = resolve_tokens(&brand);
        let artifact = export(
            ExportFormat::TokensCss,
            &tokens,
            &Content::empty(),
            &ExportOptions::default(),
        )
        .unwrap();
        assert_eq!(artifact.filename, "m-ller-s-hne-gmbh-tokens-css.css");
        assert_eq!(artifact.content_type, "text/css");
    }
}
