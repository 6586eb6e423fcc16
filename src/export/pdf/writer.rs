//! Low-level PDF assembly on top of lopdf.
//!
//! `DocBuilder` collects pages of absolute-coordinate operations and
//! assembles the final document: base-14 Helvetica fonts with WinAnsi
//! encoding, shared resources, image XObjects. Coordinates are PDF points
//! with the origin at the bottom-left corner of each page.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::error::{BxError, Result};
use crate::types::Colour;

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to points.
pub fn mm(value: f64) -> f64 {
    value * PT_PER_MM
}

/// The base-14 faces every document can use without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Oblique];

    fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Oblique => "F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Oblique => "Helvetica-Oblique",
        }
    }

    /// Approximate advance width of a string, in points.
    ///
    /// Good enough for centering and right-alignment of short labels;
    /// body text is wrapped with a safety margin.
    pub fn text_width(self, text: &str, size: f64) -> f64 {
        let factor = match self {
            Font::Regular | Font::Oblique => 0.50,
            Font::Bold => 0.54,
        };
        text.chars().count() as f64 * size * factor
    }
}

/// A float content-stream operand.
fn real(value: f64) -> Object {
    Object::Real(value as _)
}

/// Encode text as WinAnsi bytes; unmapped characters become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// A decoded image ready to become an XObject.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    stream: Stream,
}

/// Decode PNG/JPEG bytes for embedding.
///
/// JPEG data is passed through with a `DCTDecode` filter; anything else the
/// `image` crate can decode is embedded as raw RGB. Returns `None` on
/// undecodable input so callers can degrade instead of failing the export.
pub fn decode_image(bytes: &[u8]) -> Option<DecodedImage> {
    let format = image::guess_format(bytes).ok()?;
    let img = image::load_from_memory(bytes).ok()?;
    let (width, height) = (img.width(), img.height());

    let stream = match format {
        image::ImageFormat::Jpeg => Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode"
            },
            bytes.to_vec(),
        ),
        _ => {
            // Alpha is dropped; the logo sits on solid page fills anyway.
            let rgb = img.to_rgb8();
            Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => width as i64,
                    "Height" => height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8
                },
                rgb.into_raw(),
            )
        }
    };

    Some(DecodedImage {
        width,
        height,
        stream,
    })
}

/// One page under construction: size plus a list of content operations.
pub struct PageBuilder {
    width: f64,
    height: f64,
    ops: Vec<Operation>,
}

impl PageBuilder {
    /// A page of `width` × `height` points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, colour: Colour) {
        self.set_fill(colour);
        self.ops
            .push(Operation::new("re", vec![real(x), real(y), real(w), real(h)]));
        self.ops.push(Operation::new("f", vec![]));
    }

    /// A thin horizontal rule.
    pub fn hline(&mut self, x: f64, y: f64, w: f64, thickness: f64, colour: Colour) {
        self.fill_rect(x, y, w, thickness, colour);
    }

    /// Place a single line of text with its baseline at `(x, y)`.
    pub fn text(&mut self, font: Font, size: f64, colour: Colour, x: f64, y: f64, text: &str) {
        self.set_fill(colour);
        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![font.resource_name().into(), real(size)],
        ));
        self.ops.push(Operation::new("Td", vec![real(x), real(y)]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Place text centered on `center_x`.
    pub fn text_centered(
        &mut self,
        font: Font,
        size: f64,
        colour: Colour,
        center_x: f64,
        y: f64,
        text: &str,
    ) {
        let x = center_x - font.text_width(text, size) / 2.0;
        self.text(font, size, colour, x, y, text);
    }

    /// Place text with its right edge at `right_x`.
    pub fn text_right(
        &mut self,
        font: Font,
        size: f64,
        colour: Colour,
        right_x: f64,
        y: f64,
        text: &str,
    ) {
        let x = right_x - font.text_width(text, size);
        self.text(font, size, colour, x, y, text);
    }

    /// Draw a previously registered image XObject.
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![real(w), real(0.0), real(0.0), real(h), real(x), real(y)],
        ));
        self.ops.push(Operation::new("Do", vec![name.into()]));
        self.ops.push(Operation::new("Q", vec![]));
    }

    fn set_fill(&mut self, colour: Colour) {
        self.ops.push(Operation::new(
            "rg",
            vec![
                real(colour.r as f64 / 255.0),
                real(colour.g as f64 / 255.0),
                real(colour.b as f64 / 255.0),
            ],
        ));
    }
}

/// Greedy word wrap against an estimated line width.
pub fn wrap_text(font: Font, size: f64, max_width: f64, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if font.text_width(&candidate, size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Collects pages and images, then assembles the document.
pub struct DocBuilder {
    format_id: &'static str,
    doc: Document,
    pages_id: ObjectId,
    image_ids: Vec<(String, ObjectId)>,
    pages: Vec<PageBuilder>,
}

impl DocBuilder {
    /// `format_id` names the export format in assembly errors.
    pub fn new(format_id: &'static str) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            format_id,
            doc,
            pages_id,
            image_ids: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Register an image XObject; returns its resource name.
    pub fn add_image(&mut self, image: DecodedImage) -> String {
        let id = self.doc.add_object(image.stream);
        let name = format!("Im{}", self.image_ids.len() + 1);
        self.image_ids.push((name.clone(), id));
        name
    }

    /// Append a finished page.
    pub fn push_page(&mut self, page: PageBuilder) {
        self.pages.push(page);
    }

    /// Assemble and serialize the document.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let format_id = self.format_id;
        let err = |message: String| BxError::Export {
            format: format_id.to_string(),
            message,
        };

        let mut font_dict = Dictionary::new();
        for font in Font::ALL {
            let id = self.doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding"
            });
            font_dict.set(font.resource_name(), id);
        }

        let mut resources = dictionary! { "Font" => font_dict };
        if !self.image_ids.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &self.image_ids {
                xobjects.set(name.as_bytes(), *id);
            }
            resources.set("XObject", xobjects);
        }
        let resources_id = self.doc.add_object(resources);

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for page in std::mem::take(&mut self.pages) {
            let encoded = Content {
                operations: page.ops,
            }
            .encode()
            .map_err(|e| err(e.to_string()))?;
            let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = self.doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => self.pages_id,
                "MediaBox" => vec![real(0.0), real(0.0), real(page.width), real(page.height)],
                "Contents" => content_id,
                "Resources" => resources_id
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        self.doc
            .save_to(&mut bytes)
            .map_err(|e| err(e.to_string()))?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_conversion() {
        assert!((mm(25.4) - 72.0).abs() < 1e-9);
        // A business card is 85mm wide: just over 240pt.
        assert!((mm(85.0) - 240.94).abs() < 0.01);
    }

    #[test]
    fn test_win_ansi_umlauts_and_euro() {
        let bytes = win_ansi("Größe 5€");
        assert_eq!(bytes, vec![b'G', b'r', 0xf6, 0xdf, b'e', b' ', b'5', 0x80]);
    }

    #[test]
    fn test_win_ansi_unmapped_becomes_question_mark() {
        assert_eq!(win_ansi("→"), vec![b'?']);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text(Font::Regular, 10.0, 100.0, "eins zwei drei vier fünf sechs");
        assert!(lines.len() > 1);
        for line in &lines {
            // A single word may overflow, multi-word lines may not.
            if line.contains(' ') {
                assert!(Font::Regular.text_width(line, 10.0) <= 100.0);
            }
        }
    }

    #[test]
    fn test_wrap_text_keeps_explicit_breaks() {
        let lines = wrap_text(Font::Regular, 10.0, 10_000.0, "a\nb");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_document_roundtrip() {
        let mut builder = DocBuilder::new("pdf-flyer");
        builder.push_page(PageBuilder::new(100.0, 200.0));
        let bytes = builder.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_two_page_document_with_content() {
        let mut builder = DocBuilder::new("pdf-businesscard");
        let mut front = PageBuilder::new(mm(85.0), mm(55.0));
        front.fill_rect(0.0, 0.0, mm(18.0), mm(55.0), Colour::from_hex_lossy("#2563eb"));
        front.text(
            Font::Bold,
            11.0,
            Colour::BLACK,
            mm(22.0),
            mm(30.0),
            "Vor- und Nachname",
        );
        builder.push_page(front);
        builder.push_page(PageBuilder::new(mm(85.0), mm(55.0)));
        let bytes = builder.finish().unwrap();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
