//! HTML export: email and hero-section variants.
//!
//! The email variant is table-based with inline styles only, so it renders
//! in clients that strip `<style>` blocks. The hero variant is a
//! self-contained `<section>` plus `<style>` block. Every dynamic value
//! comes from `content.fields` with the documented fallback.

use crate::types::{Content, DesignTokens};

/// Escape text for HTML body and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the table-based, email-safe variant.
pub fn export_email(tokens: &DesignTokens, content: &Content) -> String {
    let colors = &tokens.colors;
    let heading = &tokens.typography.heading.stack;
    let body_font = &tokens.typography.body.stack;

    let subject = escape(content.field_or_default("subject"));
    let greeting = escape(content.field_or(
        "greeting",
        tokens.voice.formality.greeting(),
    ));
    let body = escape(content.field_or_default("body"));
    let cta = escape(content.field_or_default("cta"));
    let website = escape(content.field_or_default("website"));
    let tagline = escape(if tokens.voice.tagline.is_empty() {
        "Ihre Marke, klar und konsistent."
    } else {
        &tokens.voice.tagline
    });
    let brand = escape(&tokens.brand_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{subject}</title>
</head>
<body style="margin:0; padding:0; background-color:#f4f4f4;">
<table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background-color:#f4f4f4;">
<tr><td align="center" style="padding:24px 8px;">
<table role="presentation" width="600" cellpadding="0" cellspacing="0" style="width:600px; max-width:100%; background-color:{background}; border-radius:8px; overflow:hidden;">
<tr>
<td style="background-color:{primary}; padding:32px 40px;" align="center">
<span style="font-family:{heading}; font-size:28px; font-weight:700; color:#ffffff;">{brand}</span><br>
<span style="font-family:{body_font}; font-size:14px; color:#ffffff;">{tagline}</span>
</td>
</tr>
<tr>
<td style="padding:40px;">
<p style="font-family:{body_font}; font-size:16px; line-height:1.5; color:{text}; margin:0 0 16px 0;">{greeting},</p>
<p style="font-family:{body_font}; font-size:16px; line-height:1.5; color:{text}; margin:0 0 24px 0;">{body}</p>
<table role="presentation" cellpadding="0" cellspacing="0">
<tr>
<td style="background-color:{accent}; border-radius:8px;" align="center">
<a href="https://{website}" style="display:inline-block; padding:12px 32px; font-family:{heading}; font-size:16px; font-weight:600; color:#ffffff; text-decoration:none;">{cta}</a>
</td>
</tr>
</table>
</td>
</tr>
<tr>
<td style="padding:24px 40px; border-top:1px solid {primary_light};" align="center">
<span style="font-family:{body_font}; font-size:12px; color:{text_muted};">{brand} · {website}</span>
</td>
</tr>
</table>
</td></tr>
</table>
</body>
</html>
"#,
        subject = subject,
        brand = brand,
        tagline = tagline,
        greeting = greeting,
        body = body,
        cta = cta,
        website = website,
        heading = heading,
        body_font = body_font,
        primary = colors.primary,
        primary_light = colors.primary_light,
        accent = colors.accent,
        background = colors.background,
        text = colors.text,
        text_muted = colors.text_muted.to_css_rgb(),
    )
}

/// Render the hero-section variant.
pub fn export_hero(tokens: &DesignTokens, content: &Content) -> String {
    let colors = &tokens.colors;

    let headline = escape(content.field_or_default("headline"));
    let subline = escape(content.field_or_default("subline"));
    let cta = escape(content.field_or_default("cta"));

    format!(
        r##"<section class="hero">
  <div class="hero-inner">
    <h1>{headline}</h1>
    <p>{subline}</p>
    <a class="hero-cta" href="#kontakt">{cta}</a>
  </div>
</section>
<style>
.hero {{
  background: linear-gradient(135deg, {primary} 0%, {primary_dark} 100%);
  color: #ffffff;
  padding: 96px 24px;
}}
.hero-inner {{
  max-width: 960px;
  margin: 0 auto;
  text-align: center;
}}
.hero h1 {{
  font-family: {heading};
  font-size: {h1_size}px;
  line-height: {h1_leading};
  font-weight: {h1_weight};
  margin: 0 0 16px 0;
}}
.hero p {{
  font-family: {body_font};
  font-size: {body_size}px;
  line-height: {body_leading};
  margin: 0 auto 32px auto;
  max-width: 640px;
  opacity: 0.9;
}}
.hero-cta {{
  display: inline-block;
  background: {accent};
  color: #ffffff;
  font-family: {heading};
  font-weight: 600;
  padding: 14px 36px;
  border-radius: {radius}px;
  text-decoration: none;
}}
.hero-cta:hover {{
  background: {primary_light};
}}
</style>
"##,
        headline = headline,
        subline = subline,
        cta = cta,
        heading = tokens.typography.heading.stack,
        body_font = tokens.typography.body.stack,
        h1_size = tokens.typography.scale.h1.size,
        h1_leading = tokens.typography.scale.h1.line_height,
        h1_weight = tokens.typography.scale.h1.weight,
        body_size = tokens.typography.scale.body.size,
        body_leading = tokens.typography.scale.body.line_height,
        primary = colors.primary,
        primary_dark = colors.primary_dark,
        primary_light = colors.primary_light,
        accent = colors.accent,
        radius = tokens.radius.md,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;

    fn tokens() -> DesignTokens {
        let mut brand = Brand::default();
        brand.name = "Acme".to_string();
        resolve_tokens(&brand)
    }

    #[test]
    fn test_email_has_no_style_block() {
        let html = export_email(&tokens(), &Content::empty());
        assert!(!html.contains("<style>"));
        assert!(html.contains("<table"));
        assert!(html.contains("background-color:#2563eb"));
    }

    #[test]
    fn test_email_placeholders_on_empty_content() {
        let html = export_email(&tokens(), &Content::empty());
        assert!(html.contains("Guten Tag,"));
        assert!(html.contains("Jetzt entdecken"));
    }

    #[test]
    fn test_email_escapes_content() {
        let content = Content::from_pairs([("body", "<script>alert(1)</script>")]);
        let html = export_email(&tokens(), &content);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_hero_structure() {
        let html = export_hero(&tokens(), &Content::empty());
        assert!(html.starts_with("<section class=\"hero\">"));
        assert!(html.contains("<style>"));
        assert!(html.contains("font-size: 48px;"));
        assert!(html.contains("Ihre Marke. Ihr Auftritt."));
    }

    #[test]
    fn test_hero_uses_content_fields() {
        let content = Content::from_pairs([("headline", "Bau auf uns")]);
        let html = export_hero(&tokens(), &content);
        assert!(html.contains("<h1>Bau auf uns</h1>"));
    }
}
