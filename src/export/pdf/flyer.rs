//! Flyer synthesis.
//!
//! Single portrait page (A4, A5 or DIN lang): primary header band with
//! headline and subline, body copy with bullets, accent CTA block and a
//! footer band with contact details.

use crate::error::Result;
use crate::types::{Colour, Content, DesignTokens};

use super::writer::{mm, wrap_text, DocBuilder, Font, PageBuilder};
use super::{fit_into, try_embed_logo, ExportOptions};

pub fn build(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let (width_mm, height_mm) = options.page_size.size_mm();
    let (w, h) = (mm(width_mm), mm(height_mm));
    let margin = mm(15.0);
    let c = &tokens.colors;
    let white = Colour::WHITE;

    let mut builder = DocBuilder::new("pdf-flyer");
    let logo = try_embed_logo(&mut builder, options);
    let mut page = PageBuilder::new(w, h);

    // Header band: top third in primary with an accent rule beneath.
    let band_h = h * 0.30;
    let band_y = h - band_h;
    page.fill_rect(0.0, band_y, w, band_h, c.primary);
    page.fill_rect(0.0, band_y - mm(2.0), w, mm(2.0), c.accent);

    let headline_size = if width_mm < 150.0 { 20.0 } else { 28.0 };
    let headline_lines = wrap_text(
        Font::Bold,
        headline_size,
        w - 2.0 * margin,
        content.field_or_default("headline"),
    );
    let mut y = h - mm(18.0) - headline_size;
    for line in &headline_lines {
        page.text(Font::Bold, headline_size, white, margin, y, line);
        y -= headline_size * 1.2;
    }

    y -= 4.0;
    for line in wrap_text(
        Font::Regular,
        12.0,
        w - 2.0 * margin,
        content.field_or_default("subline"),
    ) {
        page.text(Font::Regular, 12.0, c.primary_light, margin, y, &line);
        y -= 12.0 * 1.4;
    }

    if let Some((name, lw, lh)) = &logo {
        let box_w = mm(22.0);
        let (x, y, bw, bh) = fit_into(
            *lw,
            *lh,
            w - margin - box_w,
            h - margin - box_w,
            box_w,
            box_w,
        );
        page.draw_image(name, x, y, bw, bh);
    }

    // Body copy below the band.
    let mut y = band_y - mm(14.0);
    for line in wrap_text(
        Font::Regular,
        11.0,
        w - 2.0 * margin,
        content.field_or_default("body"),
    ) {
        page.text(Font::Regular, 11.0, c.text, margin, y, &line);
        y -= 11.0 * 1.5;
    }

    // Bullet list.
    y -= mm(4.0);
    for item in content.list("bullets") {
        page.text(Font::Bold, 11.0, c.accent, margin, y, "•");
        for (i, line) in wrap_text(Font::Regular, 11.0, w - 2.0 * margin - mm(6.0), &item)
            .iter()
            .enumerate()
        {
            if i > 0 {
                y -= 11.0 * 1.4;
            }
            page.text(Font::Regular, 11.0, c.text, margin + mm(6.0), y, line);
        }
        y -= 11.0 * 1.6;
    }

    // CTA block above the footer.
    let cta = content.field_or_default("cta");
    let cta_h = mm(14.0);
    let cta_y = mm(32.0);
    page.fill_rect(margin, cta_y, w - 2.0 * margin, cta_h, c.accent);
    page.text_centered(
        Font::Bold,
        13.0,
        white,
        w / 2.0,
        cta_y + cta_h / 2.0 - 4.5,
        cta,
    );

    // Footer band with contact details.
    let footer_h = mm(16.0);
    page.fill_rect(0.0, 0.0, w, footer_h, c.secondary);
    let footer = format!(
        "{} · {} · {}",
        tokens.brand_name,
        content.field_or_default("website"),
        content.field_or_default("contact"),
    );
    page.text_centered(
        Font::Regular,
        8.5,
        white,
        w / 2.0,
        footer_h / 2.0 - 3.0,
        &footer,
    );

    builder.push_page(page);
    builder.finish()
}
