//! WCAG contrast checking for brand colours.
//!
//! Runs a fixed battery of six foreground/background pairs against the
//! WCAG 2.1 thresholds and produces a scored report. The battery reads the
//! raw `Brand` colours, not resolved tokens, so it can run independently of
//! any export.

mod report;

pub use report::{ContrastCheck, ContrastReport, Diagnostic, Severity, WcagLevel};

use crate::types::{Brand, Colour};

/// AA threshold for normal text.
const AA_NORMAL: f64 = 4.5;
/// AA threshold for large text (>= 18pt, or 14pt bold).
const AA_LARGE: f64 = 3.0;
/// AAA threshold for normal text.
const AAA_NORMAL: f64 = 7.0;
/// AAA threshold for large text.
const AAA_LARGE: f64 = 4.5;

/// Run the fixed six-pair battery against a brand's colours.
pub fn check_contrast(brand: &Brand) -> ContrastReport {
    let primary = Colour::from_hex_lossy(&brand.colors.primary);
    let secondary = Colour::from_hex_lossy(&brand.colors.secondary);
    let accent = Colour::from_hex_lossy(&brand.colors.accent);
    let background = Colour::from_hex_lossy(&brand.colors.background);
    let text = Colour::from_hex_lossy(&brand.colors.text);
    let white = Colour::WHITE;

    // The battery is fixed: order, pairs and large-text flags are part of
    // the report contract.
    let pairs: [(&'static str, Colour, Colour, bool); 6] = [
        ("Text auf Hintergrund", text, background, false),
        ("Primärfarbe auf Hintergrund", primary, background, true),
        ("Weiß auf Primärfarbe", white, primary, true),
        ("Weiß auf Akzentfarbe", white, accent, true),
        ("Weiß auf Primärfarbe (Fließtext)", white, primary, false),
        ("Weiß auf Sekundärfarbe", white, secondary, false),
    ];

    let mut checks = Vec::with_capacity(pairs.len());
    let mut diagnostics = Vec::new();

    for (label, fg, bg, large_text) in pairs {
        let ratio = fg.contrast_ratio(bg);
        let (required_aa, required_aaa) = if large_text {
            (AA_LARGE, AAA_LARGE)
        } else {
            (AA_NORMAL, AAA_NORMAL)
        };

        let level = if ratio >= required_aaa {
            WcagLevel::AAA
        } else if ratio >= required_aa {
            WcagLevel::AA
        } else {
            WcagLevel::Fail
        };

        match level {
            WcagLevel::Fail => diagnostics.push(
                Diagnostic::error(
                    "bx::contrast::fail",
                    format!(
                        "{}: Kontrast {:.2}:1, benötigt mindestens {}:1",
                        label, ratio, required_aa
                    ),
                )
                .with_help(format!(
                    "Farben {} auf {} anpassen",
                    fg.to_hex(),
                    bg.to_hex()
                )),
            ),
            WcagLevel::AA if !large_text => diagnostics.push(Diagnostic::warning(
                "bx::contrast::aa-only",
                format!(
                    "{}: {:.2}:1 erreicht AA, für AAA sind {}:1 nötig",
                    label, ratio, required_aaa
                ),
            )),
            _ => {}
        }

        checks.push(ContrastCheck {
            label,
            foreground: fg,
            background: bg,
            ratio,
            large_text,
            level,
            required_aa,
            required_aaa,
        });
    }

    let total = checks.len() as f64;
    let passed = checks.iter().filter(|c| c.passed()).count() as f64;
    let aaa = checks
        .iter()
        .filter(|c| c.level == WcagLevel::AAA)
        .count() as f64;
    let score = (70.0 * passed / total + 30.0 * aaa / total).round() as u8;

    ContrastReport {
        checks,
        diagnostics,
        score,
        grade: grade_for(score),
    }
}

/// Band a 0-100 score into its German grade label.
fn grade_for(score: u8) -> &'static str {
    match score {
        90..=100 => "Exzellent",
        70..=89 => "Gut",
        50..=69 => "Ausreichend",
        _ => "Kritisch",
    }
}
