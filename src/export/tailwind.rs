//! Tailwind config export.
//!
//! Emits a `module.exports` object literal mapping token values into
//! `theme.extend.colors` and `theme.extend.fontFamily`.

use std::fmt::Write;

use crate::types::DesignTokens;

/// Render the Tailwind config module.
pub fn export_tailwind(tokens: &DesignTokens) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "// Tailwind-Konfiguration: {}", tokens.brand_name);
    out.push_str("module.exports = {\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");

    out.push_str("      colors: {\n");
    out.push_str("        brand: {\n");
    let _ = writeln!(out, "          DEFAULT: '{}',", tokens.colors.primary);
    let _ = writeln!(out, "          light: '{}',", tokens.colors.primary_light);
    let _ = writeln!(out, "          dark: '{}',", tokens.colors.primary_dark);
    out.push_str("        },\n");
    let _ = writeln!(out, "        secondary: '{}',", tokens.colors.secondary);
    let _ = writeln!(out, "        accent: '{}',", tokens.colors.accent);
    let _ = writeln!(out, "        surface: '{}',", tokens.colors.background);
    out.push_str("        content: {\n");
    let _ = writeln!(out, "          DEFAULT: '{}',", tokens.colors.text);
    let _ = writeln!(out, "          muted: '{}',", tokens.colors.text_muted);
    out.push_str("        },\n");
    for extra in &tokens.colors.palette {
        let _ = writeln!(
            out,
            "        '{}': '{}',",
            super::file_slug(&extra.name),
            extra.value
        );
    }
    out.push_str("      },\n");

    out.push_str("      fontFamily: {\n");
    let _ = writeln!(
        out,
        "        heading: [{}],",
        stack_array(&tokens.typography.heading.stack)
    );
    let _ = writeln!(
        out,
        "        body: [{}],",
        stack_array(&tokens.typography.body.stack)
    );
    out.push_str("      },\n");

    out.push_str("    },\n");
    out.push_str("  },\n");
    out.push_str("};\n");
    out
}

/// Turn a CSS font stack into a JS array literal body.
///
/// `'Inter', sans-serif` → `'Inter', 'sans-serif'`
fn stack_array(stack: &str) -> String {
    stack
        .split(',')
        .map(|part| part.trim().trim_matches(&['\'', '"'][..]))
        .filter(|part| !part.is_empty())
        .map(|part| format!("'{}'", part))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;

    #[test]
    fn test_structure_and_values() {
        let tokens = resolve_tokens(&Brand::default());
        let js = export_tailwind(&tokens);
        assert!(js.contains("module.exports = {"));
        assert!(js.contains("DEFAULT: '#2563eb',"));
        assert!(js.contains("accent: '#f59e0b',"));
        assert!(js.contains("fontFamily: {"));
    }

    #[test]
    fn test_stack_array_quotes_every_entry() {
        assert_eq!(
            stack_array("'Helvetica Neue', Helvetica, Arial, sans-serif"),
            "'Helvetica Neue', 'Helvetica', 'Arial', 'sans-serif'"
        );
    }

    #[test]
    fn test_byte_stable() {
        let tokens = resolve_tokens(&Brand::default());
        assert_eq!(export_tailwind(&tokens), export_tailwind(&tokens));
    }

    #[test]
    fn test_default_brand_snapshot() {
        let tokens = resolve_tokens(&Brand::default());
        insta::assert_snapshot!(export_tailwind(&tokens), @r###"
        // Tailwind-Konfiguration: Marke
        module.exports = {
          theme: {
            extend: {
              colors: {
                brand: {
                  DEFAULT: '#2563eb',
                  light: '#5182ef',
                  dark: '#1e4fbc',
                },
                secondary: '#1e40af',
                accent: '#f59e0b',
                surface: '#ffffff',
                content: {
                  DEFAULT: '#1f2937',
                  muted: '#1f293799',
                },
              },
              fontFamily: {
                heading: ['Helvetica Neue', 'Helvetica', 'Arial', 'sans-serif'],
                body: ['Helvetica Neue', 'Helvetica', 'Arial', 'sans-serif'],
              },
            },
          },
        };
        "###);
    }
}
