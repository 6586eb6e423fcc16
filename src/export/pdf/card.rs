//! Business card synthesis: front and back, 85 × 55 mm.

use crate::error::Result;
use crate::types::{Colour, Content, DesignTokens};

use super::writer::{mm, DocBuilder, Font, PageBuilder};
use super::{fit_into, try_embed_logo, ExportOptions};

const CARD_W_MM: f64 = 85.0;
const CARD_H_MM: f64 = 55.0;

pub fn build(
    tokens: &DesignTokens,
    content: &Content,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let (w, h) = (mm(CARD_W_MM), mm(CARD_H_MM));
    let c = &tokens.colors;
    let white = Colour::WHITE;

    let mut builder = DocBuilder::new("pdf-businesscard");
    let logo = try_embed_logo(&mut builder, options);

    // Front: white card with a primary bar on the left edge.
    let mut front = PageBuilder::new(w, h);
    let bar_w = mm(18.0);
    front.fill_rect(0.0, 0.0, bar_w, h, c.primary);
    front.fill_rect(bar_w, 0.0, mm(1.2), h, c.accent);

    if let Some((name, lw, lh)) = &logo {
        let (x, y, bw, bh) = fit_into(*lw, *lh, mm(3.0), h - mm(17.0), mm(12.0), mm(12.0));
        front.draw_image(name, x, y, bw, bh);
    }

    let text_x = bar_w + mm(6.0);
    front.text(
        Font::Bold,
        11.0,
        c.text,
        text_x,
        h - mm(18.0),
        content.field_or_default("person"),
    );
    front.text(
        Font::Regular,
        8.0,
        c.secondary,
        text_x,
        h - mm(24.0),
        content.field_or_default("role"),
    );
    front.hline(text_x, h - mm(28.0), mm(28.0), 0.8, c.accent);
    front.text(
        Font::Bold,
        9.0,
        c.primary,
        text_x,
        h - mm(35.0),
        &tokens.brand_name,
    );
    front.text(
        Font::Regular,
        6.5,
        c.text,
        text_x,
        mm(11.0),
        content.field_or_default("contact"),
    );
    front.text(
        Font::Regular,
        6.5,
        c.text,
        text_x,
        mm(7.0),
        content.field_or_default("phone"),
    );
    builder.push_page(front);

    // Back: full primary fill, centered brand block.
    let mut back = PageBuilder::new(w, h);
    back.fill_rect(0.0, 0.0, w, h, c.primary);
    back.fill_rect(0.0, 0.0, w, mm(3.0), c.accent);

    back.text_centered(
        Font::Bold,
        13.0,
        white,
        w / 2.0,
        h / 2.0 + mm(4.0),
        &tokens.brand_name,
    );
    let tagline = if tokens.voice.tagline.is_empty() {
        content.field_or_default("subline").to_string()
    } else {
        tokens.voice.tagline.clone()
    };
    back.text_centered(
        Font::Oblique,
        7.5,
        c.primary_light,
        w / 2.0,
        h / 2.0 - mm(3.0),
        &tagline,
    );
    back.text_centered(
        Font::Regular,
        6.5,
        white,
        w / 2.0,
        mm(8.0),
        content.field_or_default("website"),
    );
    builder.push_page(back);

    builder.finish()
}
