//! PDF export: flyer, business card and brand guidelines.
//!
//! All documents are synthesized with absolute text/shape placement via
//! the lopdf-backed `DocBuilder`. Logo embedding is best-effort: if the
//! bytes fail to decode the document still renders, with the logo region
//! left blank.

mod card;
mod flyer;
mod guidelines;
mod writer;

use crate::error::Result;
use crate::types::{Content, DesignTokens};

use super::ExportOptions;
use writer::{decode_image, DocBuilder};

pub use writer::{mm, Font, PageBuilder};

/// Flyer page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    DinLong,
}

impl PageSize {
    /// CLI identifier.
    pub fn id(self) -> &'static str {
        match self {
            PageSize::A4 => "a4",
            PageSize::A5 => "a5",
            PageSize::DinLong => "din-long",
        }
    }

    /// Trim size in millimetres, portrait.
    pub fn size_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::DinLong => (105.0, 210.0),
        }
    }
}

/// Register the logo with the builder if the bytes decode.
///
/// Returns the XObject name plus pixel size, or `None` to degrade.
fn try_embed_logo(
    builder: &mut DocBuilder,
    options: &ExportOptions,
) -> Option<(String, u32, u32)> {
    let bytes = options.logo.as_ref()?;
    let image = decode_image(bytes)?;
    let (w, h) = (image.width, image.height);
    Some((builder.add_image(image), w, h))
}

/// Fit an image into a box, preserving aspect ratio and centering.
fn fit_into(
    width: u32,
    height: u32,
    bx: f64,
    by: f64,
    bw: f64,
    bh: f64,
) -> (f64, f64, f64, f64) {
    if width == 0 || height == 0 {
        return (bx, by, bw, bh);
    }
    let scale = (bw / width as f64).min(bh / height as f64);
    let w = width as f64 * scale;
    let h = height as f64 * scale;
    (bx + (bw - w) / 2.0, by + (bh - h) / 2.0, w, h)
}

/// Export the flyer document.
pub fn export_flyer(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    flyer::build(tokens, content, options)
}

/// Export the two-page business card (front and back).
pub fn export_business_card(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    card::build(tokens, content, options)
}

/// Export the four-section brand guidelines document.
pub fn export_guidelines(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    guidelines::build(tokens, content, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;

    fn tokens() -> DesignTokens {
        resolve_tokens(&Brand::default())
    }

    #[test]
    fn test_page_sizes() {
        assert_eq!(PageSize::A4.size_mm(), (210.0, 297.0));
        assert_eq!(PageSize::default(), PageSize::A4);
    }

    #[test]
    fn test_flyer_is_single_page_pdf() {
        let bytes = export_flyer(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_business_card_has_front_and_back_with_empty_content() {
        let bytes =
            export_business_card(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_guidelines_have_four_pages() {
        let bytes =
            export_guidelines(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn test_broken_logo_does_not_fail_export() {
        let options = ExportOptions {
            logo: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        let bytes = export_flyer(&tokens(), &Content::empty(), &options).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_flyer_page_sizes_differ() {
        let a4 = export_flyer(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let a5 = export_flyer(
            &tokens(),
            &Content::empty(),
            &ExportOptions {
                page_size: PageSize::A5,
                ..Default::default()
            },
        )
        .unwrap();
        // Different media boxes produce different documents.
        assert_ne!(a4, a5);
    }
}
