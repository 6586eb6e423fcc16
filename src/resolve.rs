//! Token resolution: `Brand` → `DesignTokens`.
//!
//! Resolution is a total, deterministic function. It assumes a normalized
//! `Brand` (see `Brand::normalize`); colour parsing is still lossy so a
//! value that slipped through degrades to black instead of failing.

use crate::types::{
    Brand, Colour, ColourTokens, DesignTokens, FontToken, NamedColour, RadiusScale, SpacingScale,
    TypeScale, Typography, VoiceTokens,
};

/// Blend factor for the derived primary-light/primary-dark variants.
const VARIANT_BLEND: f64 = 0.2;

/// Alpha applied to the text colour for the muted variant (60%).
const MUTED_ALPHA: u8 = 0x99;

/// Resolve a brand into the canonical token structure.
///
/// Pure: identical input yields identical output, and the result is
/// treated as read-only by every exporter.
pub fn resolve_tokens(brand: &Brand) -> DesignTokens {
    let primary = Colour::from_hex_lossy(&brand.colors.primary);
    let text = Colour::from_hex_lossy(&brand.colors.text);

    DesignTokens {
        brand_name: brand.name.clone(),
        colors: ColourTokens {
            primary,
            primary_light: primary.lighten(VARIANT_BLEND),
            primary_dark: primary.darken(VARIANT_BLEND),
            secondary: Colour::from_hex_lossy(&brand.colors.secondary),
            accent: Colour::from_hex_lossy(&brand.colors.accent),
            background: Colour::from_hex_lossy(&brand.colors.background),
            text,
            text_muted: text.with_alpha(MUTED_ALPHA),
            palette: brand
                .colors
                .palette
                .iter()
                .map(|entry| NamedColour {
                    name: entry.name.clone(),
                    value: Colour::from_hex_lossy(&entry.hex),
                })
                .collect(),
        },
        typography: Typography {
            heading: font_token(&brand.fonts.heading),
            body: font_token(&brand.fonts.body),
            scale: TypeScale::DEFAULT,
        },
        spacing: SpacingScale::DEFAULT,
        radius: RadiusScale::DEFAULT,
        voice: VoiceTokens {
            tone: brand.voice.tone,
            formality: brand.voice.formality,
            tagline: brand.voice.tagline.trim().to_string(),
            dos: parse_keywords(&brand.voice.dos),
            donts: parse_keywords(&brand.voice.donts),
        },
    }
}

fn font_token(stack: &str) -> FontToken {
    FontToken {
        stack: stack.to_string(),
        family: clean_family(stack),
    }
}

/// Extract the canonical family name from a CSS font-stack string.
///
/// Takes the first quoted substring; falls back to the text before the
/// first comma.
pub fn clean_family(stack: &str) -> String {
    for quote in ['\'', '"'] {
        if let Some(start) = stack.find(quote) {
            if let Some(len) = stack[start + 1..].find(quote) {
                let name = stack[start + 1..start + 1 + len].trim();
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }
    stack
        .split(',')
        .next()
        .unwrap_or(stack)
        .trim()
        .to_string()
}

/// Split a comma-separated keyword string into trimmed, non-empty entries.
pub fn parse_keywords(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brand, PaletteEntry};
    use pretty_assertions::assert_eq;

    fn sample_brand() -> Brand {
        let mut brand = Brand::default();
        brand.name = "Acme".to_string();
        brand.colors.primary = "#2563eb".to_string();
        brand.colors.secondary = "#1e40af".to_string();
        brand.colors.accent = "#f59e0b".to_string();
        brand.colors.background = "#ffffff".to_string();
        brand.colors.text = "#1f2937".to_string();
        brand.fonts.heading = "'Inter', sans-serif".to_string();
        brand.fonts.body = "Georgia, serif".to_string();
        brand.voice.tagline = "Einfach machen.".to_string();
        brand.voice.dos = "klar, direkt , ehrlich".to_string();
        brand.voice.donts = "floskelhaft".to_string();
        brand
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let brand = sample_brand();
        let a = resolve_tokens(&brand);
        let b = resolve_tokens(&brand);
        assert_eq!(a, b);
    }

    #[test]
    fn test_primary_variants() {
        let tokens = resolve_tokens(&sample_brand());
        // 20% toward white: 37 + 218*0.2 = 81 (0x51)
        assert_eq!(tokens.colors.primary_light.to_hex(), "#5182ef");
        // 20% toward black: channels * 0.8
        assert_eq!(tokens.colors.primary_dark.to_hex(), "#1e4fbc");
    }

    #[test]
    fn test_text_muted_alpha() {
        let tokens = resolve_tokens(&sample_brand());
        assert_eq!(tokens.colors.text_muted.a, 0x99);
        assert_eq!(tokens.colors.text_muted.to_string(), "#1f293799");
    }

    #[test]
    fn test_clean_family_quoted() {
        assert_eq!(clean_family("'Helvetica Neue', Arial, sans-serif"), "Helvetica Neue");
        assert_eq!(clean_family("\"Open Sans\", sans-serif"), "Open Sans");
    }

    #[test]
    fn test_clean_family_unquoted() {
        assert_eq!(clean_family("Georgia, serif"), "Georgia");
        assert_eq!(clean_family("sans-serif"), "sans-serif");
    }

    #[test]
    fn test_keywords_parsed_and_trimmed() {
        let tokens = resolve_tokens(&sample_brand());
        assert_eq!(tokens.voice.dos, vec!["klar", "direkt", "ehrlich"]);
        assert_eq!(tokens.voice.donts, vec!["floskelhaft"]);
    }

    #[test]
    fn test_empty_keywords_yield_empty_list() {
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }

    #[test]
    fn test_palette_extras_carried_over() {
        let mut brand = sample_brand();
        brand.colors.palette.push(PaletteEntry {
            name: "Himmel".to_string(),
            hex: "#38bdf8".to_string(),
        });
        let tokens = resolve_tokens(&brand);
        assert_eq!(tokens.colors.palette.len(), 1);
        assert_eq!(tokens.colors.palette[0].name, "Himmel");
        assert_eq!(tokens.colors.palette[0].value.to_hex(), "#38bdf8");
    }
}
