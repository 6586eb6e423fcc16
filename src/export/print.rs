//! Print production specs export.
//!
//! Pure computation: per-role colour breakdowns (hex, RGB, CMYK, nearest
//! Pantone), physical format tables and black-handling guidance, emitted as
//! pretty-printed JSON for the print shop.

use serde_json::{json, Value};

use crate::types::{Colour, DesignTokens};

/// Exact-match hex → Pantone lookup.
///
/// Deliberately small and exact-match only: anything not in the table is
/// reported as "Process (CMYK)" rather than guessed with a distance metric.
const PANTONE_TABLE: [(&str, &str); 10] = [
    ("#da291c", "PANTONE 485 C"),
    ("#0032a0", "PANTONE 286 C"),
    ("#005eb8", "PANTONE 300 C"),
    ("#ffd100", "PANTONE 109 C"),
    ("#009639", "PANTONE 355 C"),
    ("#fe5000", "PANTONE Orange 021 C"),
    ("#330072", "PANTONE 2685 C"),
    ("#e10098", "PANTONE Pink C"),
    ("#2d2a26", "PANTONE Black C"),
    ("#ffffff", "Unbedruckt (Papierweiß)"),
];

/// Physical output formats with trim size, bleed, safe zone and resolution.
const FORMATS: [(&str, &str, &str, &str, &str); 6] = [
    ("A4", "210 × 297 mm", "3 mm", "5 mm", "300 dpi"),
    ("A5", "148 × 210 mm", "3 mm", "5 mm", "300 dpi"),
    ("DIN lang", "105 × 210 mm", "3 mm", "4 mm", "300 dpi"),
    ("Visitenkarte", "85 × 55 mm", "3 mm", "3 mm", "300 dpi"),
    ("Poster A3", "297 × 420 mm", "5 mm", "10 mm", "300 dpi"),
    ("Poster A2", "420 × 594 mm", "5 mm", "10 mm", "150 dpi"),
];

/// Usage guidance per colour role.
fn role_usage(role: &str) -> &'static str {
    match role {
        "primary" => "Hauptfarbe für Logo, Headlines und primäre Flächen",
        "primary-light" => "Aufgehellte Variante für Hintergründe und Hover-Zustände",
        "primary-dark" => "Abgedunkelte Variante für Druck auf hellen Flächen",
        "secondary" => "Sekundäre Flächen, Linien und Auszeichnungen",
        "accent" => "Akzente, Call-to-Action und Hervorhebungen, sparsam einsetzen",
        "background" => "Grundfläche, in der Regel unbedruckt",
        "text" => "Fließtext und Beschriftungen",
        "text-muted" => "Abgeschwächter Text, nur für Bildschirm, nicht für Druck",
        _ => "Zusatzfarbe laut Styleguide",
    }
}

/// Nearest Pantone name for a colour: exact table match or "Process (CMYK)".
pub fn pantone_for(colour: Colour) -> &'static str {
    let hex = colour.to_hex();
    PANTONE_TABLE
        .iter()
        .find(|(h, _)| *h == hex)
        .map(|(_, name)| *name)
        .unwrap_or("Process (CMYK)")
}

/// Render the print-spec JSON artifact.
pub fn export_print_specs(tokens: &DesignTokens) -> String {
    let mut colors: Vec<Value> = Vec::new();
    for (role, colour) in tokens.colors.entries() {
        // The muted variant is screen-only; the print sheet skips it.
        if role == "text-muted" {
            continue;
        }
        colors.push(colour_row(role, colour));
    }
    for extra in &tokens.colors.palette {
        colors.push(colour_row(&extra.name, extra.value));
    }

    let formats: Vec<Value> = FORMATS
        .iter()
        .map(|(name, trim, bleed, safe, resolution)| {
            json!({
                "name": name,
                "trim": trim,
                "bleed": bleed,
                "safeZone": safe,
                "resolution": resolution,
            })
        })
        .collect();

    let value = json!({
        "brand": tokens.brand_name,
        "colors": colors,
        "formats": formats,
        "blackHandling": {
            "text": "Reines Schwarz (0/0/0/100) für Text und feine Linien",
            "richBlack": "Tiefschwarz 40/40/40/100 für große Flächen, nicht für Text unter 12 pt",
            "registrationBlack": "Registerschwarz (100/100/100/100) nur für Passermarken, nie für Gestaltung",
        },
        "notes": [
            "CMYK-Werte sind aus sRGB umgerechnet und dienen als Startwert für den Proof",
            "Pantone-Zuordnung nur bei exakter Übereinstimmung, sonst Prozessfarbe",
        ],
    });

    let mut text = serde_json::to_string_pretty(&value).unwrap_or_default();
    text.push('\n');
    text
}

fn colour_row(role: &str, colour: Colour) -> Value {
    let cmyk = colour.to_cmyk();
    json!({
        "role": role,
        "hex": colour.to_hex(),
        "rgb": format!("{} / {} / {}", colour.r, colour.g, colour.b),
        "cmyk": cmyk.to_string(),
        "pantone": pantone_for(colour),
        "usage": role_usage(role),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_tokens;
    use crate::types::Brand;
    use serde_json::Value;

    #[test]
    fn test_pantone_exact_match() {
        let red = Colour::from_hex("#da291c").unwrap();
        assert_eq!(pantone_for(red), "PANTONE 485 C");
    }

    #[test]
    fn test_pantone_fallback_is_process() {
        let blue = Colour::from_hex("#2563eb").unwrap();
        assert_eq!(pantone_for(blue), "Process (CMYK)");
    }

    #[test]
    fn test_specs_shape() {
        let tokens = resolve_tokens(&Brand::default());
        let out = export_print_specs(&tokens);
        let parsed: Value = serde_json::from_str(&out).unwrap();

        let colors = parsed["colors"].as_array().unwrap();
        // Seven rows: eight role entries minus the screen-only muted text.
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[0]["role"], "primary");
        assert_eq!(colors[0]["hex"], "#2563eb");
        assert_eq!(colors[0]["cmyk"], "84 / 58 / 0 / 8");

        let formats = parsed["formats"].as_array().unwrap();
        assert_eq!(formats.len(), 6);
        assert_eq!(formats[3]["name"], "Visitenkarte");
        assert_eq!(formats[3]["trim"], "85 × 55 mm");

        assert!(parsed["blackHandling"]["richBlack"]
            .as_str()
            .unwrap()
            .contains("40/40/40/100"));
    }

    #[test]
    fn test_white_background_maps_to_paper() {
        let tokens = resolve_tokens(&Brand::default());
        let out = export_print_specs(&tokens);
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let colors = parsed["colors"].as_array().unwrap();
        let background = colors
            .iter()
            .find(|row| row["role"] == "background")
            .unwrap();
        assert_eq!(background["pantone"], "Unbedruckt (Papierweiß)");
    }
}
