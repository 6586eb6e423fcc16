//! PPTX deck export.
//!
//! Synthesizes a fixed five-slide 16:9 deck (title, bullets, two-column,
//! image, closing) from tokens and content. Each slide is stamped with
//! brand colour bars and fonts; the theme carries the brand colour scheme.
//! A logo that fails to decode degrades to a dashed placeholder shape, the
//! export itself never fails over assets.

mod xml;

use std::io::{Cursor, Write as IoWrite};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{BxError, Result};
use crate::types::{Content, DesignTokens};

use super::ExportOptions;
use xml::{emu, Align, Para};

/// A logo ready for embedding: original container bytes plus pixel size.
struct EmbeddedLogo {
    ext: &'static str,
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

/// Try to prepare the logo for embedding. `None` means "degrade to
/// placeholder": undecodable bytes must not fail the deck.
fn prepare_logo(options: &ExportOptions) -> Option<EmbeddedLogo> {
    let bytes = options.logo.as_ref()?;
    let format = image::guess_format(bytes).ok()?;
    let img = image::load_from_memory(bytes).ok()?;
    let (width, height) = (img.width(), img.height());

    match format {
        image::ImageFormat::Png => Some(EmbeddedLogo {
            ext: "png",
            bytes: bytes.clone(),
            width,
            height,
        }),
        image::ImageFormat::Jpeg => Some(EmbeddedLogo {
            ext: "jpeg",
            bytes: bytes.clone(),
            width,
            height,
        }),
        // Anything else image can decode gets re-encoded as PNG.
        _ => {
            let mut buf = Cursor::new(Vec::new());
            img.write_to(&mut buf, image::ImageFormat::Png).ok()?;
            Some(EmbeddedLogo {
                ext: "png",
                bytes: buf.into_inner(),
                width,
                height,
            })
        }
    }
}

/// Fit an image into a box, preserving aspect ratio and centering.
fn fit_into(width: u32, height: u32, bx: i64, by: i64, bcx: i64, bcy: i64) -> (i64, i64, i64, i64) {
    if width == 0 || height == 0 {
        return (bx, by, bcx, bcy);
    }
    let iw = width as f64;
    let ih = height as f64;
    let scale = (bcx as f64 / iw).min(bcy as f64 / ih);
    let cx = (iw * scale).round() as i64;
    let cy = (ih * scale).round() as i64;
    (bx + (bcx - cx) / 2, by + (bcy - cy) / 2, cx, cy)
}

/// Build the deck and return the zipped OpenXML package bytes.
pub fn export_deck(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let logo = prepare_logo(options);
    let slides = build_slides(tokens, content, logo.as_ref());
    let slide_count = slides.len();

    let mut parts: Vec<(String, Vec<u8>)> = Vec::new();
    parts.push((
        "[Content_Types].xml".to_string(),
        xml::content_types(slide_count, logo.as_ref().map(|l| l.ext)).into_bytes(),
    ));
    parts.push(("_rels/.rels".to_string(), xml::root_rels().into_bytes()));
    parts.push((
        "docProps/core.xml".to_string(),
        xml::core_props(&tokens.brand_name).into_bytes(),
    ));
    parts.push(("docProps/app.xml".to_string(), xml::app_props().into_bytes()));
    parts.push((
        "ppt/presentation.xml".to_string(),
        xml::presentation(slide_count).into_bytes(),
    ));
    parts.push((
        "ppt/_rels/presentation.xml.rels".to_string(),
        xml::presentation_rels(slide_count).into_bytes(),
    ));
    parts.push((
        "ppt/slideMasters/slideMaster1.xml".to_string(),
        xml::slide_master().into_bytes(),
    ));
    parts.push((
        "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
        xml::slide_master_rels().into_bytes(),
    ));
    parts.push((
        "ppt/slideLayouts/slideLayout1.xml".to_string(),
        xml::slide_layout().into_bytes(),
    ));
    parts.push((
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels".to_string(),
        xml::slide_layout_rels().into_bytes(),
    ));
    parts.push((
        "ppt/theme/theme1.xml".to_string(),
        xml::theme(tokens).into_bytes(),
    ));

    for (i, slide) in slides.iter().enumerate() {
        parts.push((
            format!("ppt/slides/slide{}.xml", i + 1),
            xml::slide(&slide.shapes).into_bytes(),
        ));
        let image_target = if slide.has_image {
            logo.as_ref().map(|l| format!("../media/image1.{}", l.ext))
        } else {
            None
        };
        parts.push((
            format!("ppt/slides/_rels/slide{}.xml.rels", i + 1),
            xml::slide_rels(image_target.as_deref()).into_bytes(),
        ));
    }

    if let Some(logo) = &logo {
        parts.push((format!("ppt/media/image1.{}", logo.ext), logo.bytes.clone()));
    }

    write_zip(&parts)
}

fn write_zip(parts: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let zip_err = |e: zip::result::ZipError| BxError::Export {
        format: "pptx".to_string(),
        message: e.to_string(),
    };

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, data) in parts {
        let file_options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name.as_str(), file_options).map_err(zip_err)?;
        writer.write_all(data).map_err(|e| BxError::Export {
            format: "pptx".to_string(),
            message: e.to_string(),
        })?;
    }

    Ok(writer.finish().map_err(zip_err)?.into_inner())
}

struct Slide {
    shapes: String,
    has_image: bool,
}

/// Deterministic deck synthesis: five layouts in fixed order.
fn build_slides(tokens: &DesignTokens, content: &Content, logo: Option<&EmbeddedLogo>) -> Vec<Slide> {
    vec![
        title_slide(tokens, content, logo),
        bullets_slide(tokens, content),
        two_column_slide(tokens, content),
        image_slide(tokens, content, logo),
        closing_slide(tokens, content),
    ]
}

fn heading_font(tokens: &DesignTokens) -> String {
    tokens.typography.heading.family.clone()
}

fn body_font(tokens: &DesignTokens) -> String {
    tokens.typography.body.family.clone()
}

fn title_slide(tokens: &DesignTokens, content: &Content, logo: Option<&EmbeddedLogo>) -> Slide {
    let c = &tokens.colors;
    let mut shapes = String::new();
    let mut id = 2;

    let title = content.field_or("title", &tokens.brand_name).to_string();
    let subtitle = content.field_or_default("subtitle").to_string();
    let tagline = tokens.voice.tagline.clone();

    shapes.push_str(&xml::text_box(
        id,
        "Titel",
        emu(0.9),
        emu(2.2),
        emu(11.5),
        emu(1.3),
        &[Para {
            text: title,
            size: 44,
            bold: true,
            color: c.text.to_ooxml(),
            font: heading_font(tokens),
            align: Align::Left,
            bullet: false,
        }],
    ));
    id += 1;

    // Accent underline below the title.
    shapes.push_str(&xml::rect(
        id,
        "Akzentlinie",
        emu(0.95),
        emu(3.45),
        emu(2.0),
        emu(0.08),
        &c.accent.to_ooxml(),
    ));
    id += 1;

    let mut sub_paras = vec![Para {
        text: subtitle,
        size: 24,
        bold: false,
        color: c.primary.to_ooxml(),
        font: body_font(tokens),
        align: Align::Left,
        bullet: false,
    }];
    if !tagline.is_empty() {
        sub_paras.push(Para {
            text: tagline,
            size: 16,
            bold: false,
            color: c.text.to_ooxml(),
            font: body_font(tokens),
            align: Align::Left,
            bullet: false,
        });
    }
    shapes.push_str(&xml::text_box(
        id,
        "Untertitel",
        emu(0.9),
        emu(3.8),
        emu(11.5),
        emu(1.4),
        &sub_paras,
    ));
    id += 1;

    // Brand band along the bottom edge.
    shapes.push_str(&xml::rect(
        id,
        "Markenband",
        0,
        emu(7.1),
        xml::CANVAS_CX,
        emu(0.4),
        &c.primary.to_ooxml(),
    ));
    id += 1;

    let has_image = logo.is_some();
    if let Some(logo) = logo {
        let (x, y, cx, cy) = fit_into(
            logo.width,
            logo.height,
            emu(11.2),
            emu(0.5),
            emu(1.6),
            emu(1.6),
        );
        shapes.push_str(&xml::picture(id, x, y, cx, cy));
    }

    Slide { shapes, has_image }
}

fn bullets_slide(tokens: &DesignTokens, content: &Content) -> Slide {
    let c = &tokens.colors;
    let mut shapes = String::new();

    shapes.push_str(&header_shapes(tokens, "Agenda"));

    let bullets: Vec<Para> = content
        .list("bullets")
        .into_iter()
        .map(|text| Para {
            text,
            size: 20,
            bold: false,
            color: c.text.to_ooxml(),
            font: body_font(tokens),
            align: Align::Left,
            bullet: true,
        })
        .collect();
    shapes.push_str(&xml::text_box(
        5,
        "Aufzählung",
        emu(0.9),
        emu(1.9),
        emu(11.5),
        emu(4.8),
        &bullets,
    ));

    Slide {
        shapes,
        has_image: false,
    }
}

fn two_column_slide(tokens: &DesignTokens, content: &Content) -> Slide {
    let c = &tokens.colors;
    let mut shapes = String::new();

    shapes.push_str(&header_shapes(tokens, "Im Überblick"));

    let column = |id: u32, name: &str, x_in: f64, heading: String, body: String| {
        xml::text_box(
            id,
            name,
            emu(x_in),
            emu(1.9),
            emu(5.6),
            emu(4.6),
            &[
                Para {
                    text: heading,
                    size: 20,
                    bold: true,
                    color: c.primary.to_ooxml(),
                    font: heading_font(tokens),
                    align: Align::Left,
                    bullet: false,
                },
                Para {
                    text: body,
                    size: 16,
                    bold: false,
                    color: c.text.to_ooxml(),
                    font: body_font(tokens),
                    align: Align::Left,
                    bullet: false,
                },
            ],
        )
    };

    shapes.push_str(&column(
        5,
        "Spalte links",
        0.9,
        content.field_or_default("left").to_string(),
        content.field_or_default("body").to_string(),
    ));
    shapes.push_str(&column(
        6,
        "Spalte rechts",
        6.9,
        content.field_or_default("right").to_string(),
        content.field_or_default("subline").to_string(),
    ));

    Slide {
        shapes,
        has_image: false,
    }
}

fn image_slide(tokens: &DesignTokens, content: &Content, logo: Option<&EmbeddedLogo>) -> Slide {
    let c = &tokens.colors;
    let mut shapes = String::new();

    shapes.push_str(&header_shapes(
        tokens,
        content.field_or("headline", "Unsere Marke"),
    ));

    let (bx, by, bcx, bcy) = (emu(4.2), emu(2.1), emu(5.0), emu(4.0));
    let has_image = logo.is_some();
    match logo {
        Some(logo) => {
            let (x, y, cx, cy) = fit_into(logo.width, logo.height, bx, by, bcx, bcy);
            shapes.push_str(&xml::picture(5, x, y, cx, cy));
        }
        None => {
            // Missing image degrades to a dashed outline, not an error.
            shapes.push_str(&xml::image_placeholder(
                5,
                bx,
                by,
                bcx,
                bcy,
                &c.secondary.to_ooxml(),
                &body_font(tokens),
            ));
        }
    }

    Slide { shapes, has_image }
}

fn closing_slide(tokens: &DesignTokens, content: &Content) -> Slide {
    let c = &tokens.colors;
    let mut shapes = String::new();

    // Full-bleed primary background.
    shapes.push_str(&xml::rect(
        2,
        "Hintergrund",
        0,
        0,
        xml::CANVAS_CX,
        xml::CANVAS_CY,
        &c.primary.to_ooxml(),
    ));
    shapes.push_str(&xml::rect(
        3,
        "Akzentband",
        0,
        emu(7.1),
        xml::CANVAS_CX,
        emu(0.4),
        &c.accent.to_ooxml(),
    ));

    let mut paras = vec![Para {
        text: content.field_or_default("closing").to_string(),
        size: 40,
        bold: true,
        color: "FFFFFF".to_string(),
        font: heading_font(tokens),
        align: Align::Center,
        bullet: false,
    }];
    if !tokens.voice.tagline.is_empty() {
        paras.push(Para {
            text: tokens.voice.tagline.clone(),
            size: 18,
            bold: false,
            color: c.primary_light.to_ooxml(),
            font: body_font(tokens),
            align: Align::Center,
            bullet: false,
        });
    }
    paras.push(Para {
        text: content.field_or_default("contact").to_string(),
        size: 16,
        bold: false,
        color: "FFFFFF".to_string(),
        font: body_font(tokens),
        align: Align::Center,
        bullet: false,
    });

    shapes.push_str(&xml::text_box(
        4,
        "Abschluss",
        emu(1.7),
        emu(2.6),
        emu(10.0),
        emu(2.4),
        &paras,
    ));

    Slide {
        shapes,
        has_image: false,
    }
}

/// Slide title plus accent underline and left brand bar, shared by the
/// inner layouts.
fn header_shapes(tokens: &DesignTokens, title: &str) -> String {
    let c = &tokens.colors;
    let mut shapes = String::new();

    shapes.push_str(&xml::rect(
        2,
        "Markenleiste",
        0,
        0,
        emu(0.25),
        xml::CANVAS_CY,
        &c.primary.to_ooxml(),
    ));
    shapes.push_str(&xml::text_box(
        3,
        "Folientitel",
        emu(0.9),
        emu(0.55),
        emu(11.5),
        emu(0.9),
        &[Para {
            text: title.to_string(),
            size: 28,
            bold: true,
            color: c.text.to_ooxml(),
            font: tokens.typography.heading.family.clone(),
            align: Align::Left,
            bullet: false,
        }],
    ));
    shapes.push_str(&xml::rect(
        4,
        "Akzentlinie",
        emu(0.95),
        emu(1.5),
        emu(1.5),
        emu(0.06),
        &c.accent.to_ooxml(),
    ));

    shapes
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
    fn test_deck_is_a_zip_with_five_slides() {
        let bytes = export_deck(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        // Local file header magic.
        assert_eq!(&bytes[0..4], b"PK\x03\x04");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for i in 1..=5 {
            assert!(archive
                .by_name(&format!("ppt/slides/slide{}.xml", i))
                .is_ok());
        }
        assert!(archive.by_name("ppt/slides/slide6.xml").is_err());
        assert!(archive.by_name("ppt/theme/theme1.xml").is_ok());
    }

    #[test]
    fn test_missing_logo_yields_placeholder() {
        let bytes = export_deck(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut slide4 = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/slides/slide4.xml").unwrap(),
            &mut slide4,
        )
        .unwrap();
        assert!(slide4.contains("Bildplatzhalter"));
        assert!(slide4.contains("prstDash val=\"dash\""));
        assert!(archive.by_name("ppt/media/image1.png").is_err());
    }

    #[test]
    fn test_undecodable_logo_degrades_not_fails() {
        let options = ExportOptions {
            logo: Some(vec![0xde, 0xad, 0xbe, 0xef]),
            ..Default::default()
        };
        let bytes = export_deck(&tokens(), &Content::empty(), &options).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("ppt/media/image1.png").is_err());
    }

    #[test]
    fn test_theme_carries_brand_colours() {
        let bytes = export_deck(&tokens(), &Content::empty(), &ExportOptions::default()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut theme = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/theme/theme1.xml").unwrap(),
            &mut theme,
        )
        .unwrap();
        assert!(theme.contains("<a:accent1><a:srgbClr val=\"2563EB\"/></a:accent1>"));
    }

    #[test]
    fn test_png_logo_is_embedded() {
        // 1x1 white PNG.
        let mut png = Cursor::new(Vec::new());
        image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]))
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();
        let options = ExportOptions {
            logo: Some(png.into_inner()),
            ..Default::default()
        };
        let bytes = export_deck(&tokens(), &Content::empty(), &options).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("ppt/media/image1.png").is_ok());

        let mut slide1 = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/slides/slide1.xml").unwrap(),
            &mut slide1,
        )
        .unwrap();
        assert!(slide1.contains("r:embed=\"rId2\""));
    }
}
