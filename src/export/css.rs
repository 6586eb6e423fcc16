//! CSS custom-property export.
//!
//! Emits one `:root` block with a fixed variable order so output is
//! byte-stable for identical tokens.

use std::fmt::Write;

use crate::types::DesignTokens;

/// Render the `:root` custom-property block.
pub fn export_css(tokens: &DesignTokens) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "/* Design Tokens: {} */", tokens.brand_name);
    out.push_str(":root {\n");

    out.push_str("  /* Farben */\n");
    for (name, colour) in tokens.colors.entries() {
        let _ = writeln!(out, "  --color-{}: {};", name, colour);
    }
    for extra in &tokens.colors.palette {
        let _ = writeln!(
            out,
            "  --color-{}: {};",
            super::file_slug(&extra.name),
            extra.value
        );
    }

    out.push_str("\n  /* Schriften */\n");
    let _ = writeln!(out, "  --font-heading: {};", tokens.typography.heading.stack);
    let _ = writeln!(out, "  --font-body: {};", tokens.typography.body.stack);

    out.push_str("\n  /* Schriftskala */\n");
    for (name, style) in tokens.typography.scale.entries() {
        let _ = writeln!(out, "  --text-{}: {}px;", name, style.size);
        let _ = writeln!(out, "  --leading-{}: {};", name, style.line_height);
        let _ = writeln!(out, "  --weight-{}: {};", name, style.weight);
    }

    out.push_str("\n  /* Abstände */\n");
    for (name, px) in tokens.spacing.entries() {
        let _ = writeln!(out, "  --space-{}: {}px;", name, px);
    }

    out.push_str("\n  /* Radien */\n");
    for (name, px) in tokens.radius.entries() {
        let _ = writeln!(out, "  --radius-{}: {}px;", name, px);
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;

    fn sample_tokens() -> DesignTokens {
        let mut brand = Brand::default();
        brand.name = "Acme".to_string();
        resolve_tokens(&brand)
    }

    #[test]
    fn test_contains_primary_line_verbatim() {
        let css = export_css(&sample_tokens());
        assert!(css.contains("--color-primary: #2563eb;"));
    }

    #[test]
    fn test_byte_stable() {
        let tokens = sample_tokens();
        assert_eq!(export_css(&tokens), export_css(&tokens));
    }

    #[test]
    fn test_single_root_block() {
        let css = export_css(&sample_tokens());
        assert_eq!(css.matches(":root {").count(), 1);
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn test_muted_text_carries_alpha() {
        let css = export_css(&sample_tokens());
        assert!(css.contains("--color-text-muted: #1f293799;"));
    }

    #[test]
    fn test_scales_present() {
        let css = export_css(&sample_tokens());
        assert!(css.contains("--text-h1: 48px;"));
        assert!(css.contains("--leading-body: 1.5;"));
        assert!(css.contains("--space-md: 16px;"));
        assert!(css.contains("--space-xxxl: 64px;"));
        assert!(css.contains("--radius-full: 9999px;"));
    }
}
