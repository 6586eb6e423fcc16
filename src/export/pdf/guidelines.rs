//! Brand guidelines synthesis: cover, colours, typography and voice, A4.

use crate::error::Result;
use crate::types::{Colour, Content, DesignTokens};

use super::writer::{mm, wrap_text, DocBuilder, Font, PageBuilder};
use super::{fit_into, try_embed_logo, ExportOptions};

const PAGE_W_MM: f64 = 210.0;
const PAGE_H_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;

pub fn build(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let mut builder = DocBuilder::new("pdf-guidelines");
    let logo = try_embed_logo(&mut builder, options);

    builder.push_page(cover_page(tokens, logo.as_ref()));
    builder.push_page(colors_page(tokens, 2));
    builder.push_page(typography_page(tokens, 3));
    builder.push_page(voice_page(tokens, content, 4));

    builder.finish()
}

fn page_size() -> (f64, f64) {
    (mm(PAGE_W_MM), mm(PAGE_H_MM))
}

fn cover_page(tokens: &DesignTokens, logo: Option<&(String, u32, u32)>) -> PageBuilder {
    let (w, h) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;
    let mut page = PageBuilder::new(w, h);

    let band_h = mm(110.0);
    page.fill_rect(0.0, h - band_h, w, band_h, c.primary);
    page.fill_rect(0.0, h - band_h - mm(3.0), w, mm(3.0), c.accent);

    page.text(
        Font::Bold,
        34.0,
        Colour::WHITE,
        margin,
        h - mm(55.0),
        &tokens.brand_name,
    );
    page.text(
        Font::Regular,
        16.0,
        c.primary_light,
        margin,
        h - mm(68.0),
        "Brand Guidelines",
    );
    if !tokens.voice.tagline.is_empty() {
        page.text(
            Font::Oblique,
            12.0,
            Colour::WHITE,
            margin,
            h - mm(80.0),
            &tokens.voice.tagline,
        );
    }

    if let Some((name, lw, lh)) = logo {
        let box_w = mm(30.0);
        let (x, y, bw, bh) = fit_into(*lw, *lh, w - margin - box_w, h - mm(50.0), box_w, box_w);
        page.draw_image(name, x, y, bw, bh);
    }

    // Section index on the lower half.
    let sections = [
        ("01", "Farben"),
        ("02", "Typografie"),
        ("03", "Markenstimme"),
    ];
    let mut y = h - band_h - mm(40.0);
    for (number, title) in sections {
        page.text(Font::Bold, 13.0, c.accent, margin, y, number);
        page.text(Font::Regular, 13.0, c.text, margin + mm(12.0), y, title);
        y -= mm(12.0);
    }

    footer(&mut page, tokens, 1);
    page
}

fn colors_page(tokens: &DesignTokens, page_no: u32) -> PageBuilder {
    let (w, h) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;
    let mut page = PageBuilder::new(w, h);

    section_header(&mut page, tokens, "01", "Farben");

    let mut y = h - mm(60.0);
    for (role, colour) in c.entries() {
        // The muted variant is screen-only and stays out of the print sheet.
        if role == "text-muted" {
            continue;
        }
        let swatch_h = mm(16.0);
        page.fill_rect(margin, y - swatch_h, mm(34.0), swatch_h, colour);
        if colour == Colour::WHITE {
            // Keep a white swatch visible on the white page.
            page.hline(margin, y - swatch_h, mm(34.0), 0.6, c.text);
        }

        let text_x = margin + mm(42.0);
        page.text(Font::Bold, 11.0, c.text, text_x, y - mm(5.0), role);
        page.text(
            Font::Regular,
            9.0,
            c.text,
            text_x,
            y - mm(10.0),
            &format!("HEX {}", colour.to_hex()),
        );
        let cmyk = colour.to_cmyk();
        page.text(
            Font::Regular,
            9.0,
            c.text,
            text_x,
            y - mm(14.5),
            &format!(
                "RGB {} / {} / {}   CMYK {}",
                colour.r, colour.g, colour.b, cmyk
            ),
        );
        y -= mm(24.0);
    }

    y -= mm(4.0);
    page.text(
        Font::Bold,
        10.0,
        c.text,
        margin,
        y,
        "Schwarz im Druck",
    );
    y -= mm(6.0);
    for line in [
        "Text: reines Schwarz 0/0/0/100",
        "Flächen: Tiefschwarz 40/40/40/100, nicht für Text unter 12 pt",
    ] {
        page.text(Font::Regular, 9.0, c.text, margin, y, line);
        y -= mm(5.0);
    }

    footer(&mut page, tokens, page_no);
    page
}

fn typography_page(tokens: &DesignTokens, page_no: u32) -> PageBuilder {
    let (w, h) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;
    let typo = &tokens.typography;
    let mut page = PageBuilder::new(w, h);

    section_header(&mut page, tokens, "02", "Typografie");

    let mut y = h - mm(60.0);
    page.text(
        Font::Bold,
        12.0,
        c.text,
        margin,
        y,
        &format!("Überschriften: {}", typo.heading.family),
    );
    y -= mm(7.0);
    page.text(
        Font::Regular,
        12.0,
        c.text,
        margin,
        y,
        &format!("Fließtext: {}", typo.body.family),
    );
    y -= mm(7.0);
    page.text(
        Font::Regular,
        9.0,
        c.secondary,
        margin,
        y,
        "Darstellung hier in Helvetica, Maße gelten für die Markenschrift.",
    );
    y -= mm(14.0);

    for (name, style) in typo.scale.entries() {
        let sample_size = f64::from(style.size).min(30.0) * 0.75;
        let font = if style.weight >= 600 {
            Font::Bold
        } else {
            Font::Regular
        };
        page.text(font, sample_size, c.text, margin, y - sample_size, "Beispieltext");
        page.text_right(
            Font::Regular,
            9.0,
            c.secondary,
            w - margin,
            y - sample_size,
            &format!(
                "{}  ·  {} px / {} / {}",
                name, style.size, style.line_height, style.weight
            ),
        );
        y -= sample_size + mm(9.0);
    }

    footer(&mut page, tokens, page_no);
    page
}

fn voice_page(tokens: &DesignTokens, content: &Content, page_no: u32) -> PageBuilder {
    let (w, h) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;
    let voice = &tokens.voice;
    let mut page = PageBuilder::new(w, h);

    section_header(&mut page, tokens, "03", "Markenstimme");

    let mut y = h - mm(60.0);
    page.text(
        Font::Regular,
        11.0,
        c.text,
        margin,
        y,
        &format!("Tonalität: {}", voice.tone.label()),
    );
    y -= mm(7.0);
    page.text(
        Font::Regular,
        11.0,
        c.text,
        margin,
        y,
        &format!("Ansprache: {}", voice.formality.label()),
    );
    y -= mm(10.0);

    if !voice.tagline.is_empty() {
        page.text(Font::Oblique, 14.0, c.primary, margin, y, &voice.tagline);
        y -= mm(12.0);
    }

    let keyword_block = |page: &mut PageBuilder, y: &mut f64, title: &str, colour, items: &[String]| {
        page.text(Font::Bold, 11.0, colour, margin, *y, title);
        *y -= mm(6.5);
        if items.is_empty() {
            page.text(Font::Regular, 10.0, c.secondary, margin, *y, "Keine Vorgaben");
            *y -= mm(6.0);
        }
        for item in items {
            page.text(Font::Regular, 10.0, c.text, margin + mm(4.0), *y, &format!("• {}", item));
            *y -= mm(6.0);
        }
        *y -= mm(4.0);
    };

    keyword_block(&mut page, &mut y, "So klingen wir", c.primary, &voice.dos);
    keyword_block(&mut page, &mut y, "So klingen wir nicht", c.accent, &voice.donts);

    // Sample copy rendered in the brand voice, if the caller provided any.
    let sample = content.field_or("body", "");
    if !sample.is_empty() {
        page.text(Font::Bold, 11.0, c.text, margin, y, "Beispieltext");
        y -= mm(7.0);
        for line in wrap_text(Font::Regular, 10.0, w - 2.0 * margin, sample) {
            page.text(Font::Regular, 10.0, c.text, margin, y, &line);
            y -= mm(5.5);
        }
    }

    footer(&mut page, tokens, page_no);
    page
}

/// Section title with number, accent rule and top brand bar.
fn section_header(page: &mut PageBuilder, tokens: &DesignTokens, number: &str, title: &str) {
    let (w, h) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;

    page.fill_rect(0.0, h - mm(8.0), w, mm(8.0), c.primary);
    page.text(Font::Bold, 13.0, c.accent, margin, h - mm(28.0), number);
    page.text(Font::Bold, 22.0, c.text, margin + mm(12.0), h - mm(28.0), title);
    page.hline(margin, h - mm(33.0), mm(40.0), 1.2, c.accent);
}

/// Footer with brand name and page number.
fn footer(page: &mut PageBuilder, tokens: &DesignTokens, page_no: u32) {
    let (w, _) = page_size();
    let margin = mm(MARGIN_MM);
    let c = &tokens.colors;

    page.hline(margin, mm(14.0), w - 2.0 * margin, 0.6, c.primary_light);
    page.text(
        Font::Regular,
        8.0,
        c.secondary,
        margin,
        mm(9.0),
        &tokens.brand_name,
    );
    page.text_right(
        Font::Regular,
        8.0,
        c.secondary,
        w - margin,
        mm(9.0),
        &format!("Seite {}", page_no),
    );
}
