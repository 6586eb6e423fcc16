//! Colour type and colour math.
//!
//! All conversions are pure functions. Exporters rely on them being total:
//! malformed input degrades to black instead of failing a whole export.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{BxError, Result};

/// Scale steps produced by [`Colour::scale`], lightest to darkest.
pub const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// An RGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(BxError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
            });
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.as_bytes()[0] as char)?;
                let g = parse_hex_digit(hex.as_bytes()[1] as char)?;
                let b = parse_hex_digit(hex.as_bytes()[2] as char)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(BxError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Parse a hex colour string, falling back to black on malformed input.
    ///
    /// Exporters use this so a bad colour degrades visually instead of
    /// aborting a whole document.
    pub fn from_hex_lossy(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::BLACK)
    }

    /// Replace the alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check whether a string is a strict 6-digit `#RRGGBB` value,
    /// the only form allowed for brand colour roles.
    pub fn is_role_hex(s: &str) -> bool {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }

    /// WCAG 2.1 relative luminance, in `[0, 1]`.
    pub fn luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio against another colour, in `[1, 21]`.
    ///
    /// Symmetric: `a.contrast_ratio(b) == b.contrast_ratio(a)`.
    pub fn contrast_ratio(self, other: Colour) -> f64 {
        let la = self.luminance();
        let lb = other.luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Convert to CMYK percentages.
    ///
    /// Pure black short-circuits to `0/0/0/100` so the division by
    /// `1 - k` never hits zero.
    pub fn to_cmyk(self) -> Cmyk {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Cmyk {
                c: 0,
                m: 0,
                y: 0,
                k: 100,
            };
        }

        let c = (1.0 - r - k) / (1.0 - k);
        let m = (1.0 - g - k) / (1.0 - k);
        let y = (1.0 - b - k) / (1.0 - k);

        Cmyk {
            c: (c * 100.0).round() as u8,
            m: (m * 100.0).round() as u8,
            y: (y * 100.0).round() as u8,
            k: (k * 100.0).round() as u8,
        }
    }

    /// Linear per-channel blend toward another colour.
    ///
    /// `t` is clamped to `[0, 1]`; 0 keeps `self`, 1 yields `other`.
    /// Alpha is taken from `self`.
    pub fn mix(self, other: Colour, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Colour {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: self.a,
        }
    }

    /// Blend toward white by `t`.
    pub fn lighten(self, t: f64) -> Colour {
        self.mix(Colour::WHITE, t)
    }

    /// Blend toward black by `t`.
    pub fn darken(self, t: f64) -> Colour {
        self.mix(Colour::BLACK, t)
    }

    /// Generate the 50-900 tint/shade scale.
    ///
    /// Step 500 is the input colour unchanged. Steps below 500 interpolate
    /// toward white by `1 - step/500`; steps above 500 multiply each channel
    /// by `1 - (step/500 - 1) * 0.5`, so 900 darkens to 60% without ever
    /// reaching black.
    pub fn scale(self) -> ColourScale {
        let mut steps = [(0u16, Colour::BLACK); 10];
        for (slot, &step) in steps.iter_mut().zip(SCALE_STEPS.iter()) {
            let s = step as f64 / 500.0;
            let colour = if step == 500 {
                self
            } else if step < 500 {
                self.lighten(1.0 - s)
            } else {
                let f = 1.0 - (s - 1.0) * 0.5;
                let mul = |c: u8| -> u8 { (c as f64 * f).round().clamp(0.0, 255.0) as u8 };
                Colour::rgb(mul(self.r), mul(self.g), mul(self.b))
            };
            *slot = (step, colour);
        }
        ColourScale { steps }
    }

    /// Lowercase hex without alpha, e.g. `#2563eb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase hex without the `#` prefix, as OOXML `srgbClr` wants it.
    pub fn to_ooxml(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS `rgb()`/`rgba()` form, depending on alpha.
    pub fn to_css_rgb(self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                self.a as f64 / 255.0
            )
        }
    }
}

impl FromStr for Colour {
    type Err = BxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// CMYK percentages, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {} / {}", self.c, self.m, self.y, self.k)
    }
}

/// A 50-900 tint/shade scale generated from a single colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScale {
    steps: [(u16, Colour); 10],
}

impl ColourScale {
    /// Get the colour for a step, if it is one of [`SCALE_STEPS`].
    pub fn get(&self, step: u16) -> Option<Colour> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, c)| *c)
    }

    /// Iterate `(step, colour)` pairs lightest to darkest.
    pub fn iter(&self) -> impl Iterator<Item = (u16, Colour)> + '_ {
        self.steps.iter().copied()
    }
}

fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16).map(|d| d as u8).ok_or_else(|| BxError::Parse {
        message: format!("Invalid hex digit: {}", c),
        help: None,
    })
}

fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| BxError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let c = Colour::from_hex("#2563eb").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x25, 0x63, 0xeb, 255));
    }

    #[test]
    fn test_from_hex_three_digits() {
        let c = Colour::from_hex("#f0a").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xff, 0x00, 0xaa));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Colour::from_hex("not-a-colour").is_err());
        assert!(Colour::from_hex("#12345").is_err());
    }

    #[test]
    fn test_from_hex_lossy_falls_back_to_black() {
        assert_eq!(Colour::from_hex_lossy("oops"), Colour::BLACK);
    }

    #[test]
    fn test_hex_roundtrip() {
        for hex in ["#2563eb", "#f59e0b", "#ffffff", "#000000", "#1f2937"] {
            let c = Colour::from_hex(hex).unwrap();
            let back = Colour::from_hex(&c.to_hex()).unwrap();
            assert_eq!(c, back);
            assert_eq!(c.to_hex(), hex);
        }
    }

    #[test]
    fn test_is_role_hex() {
        assert!(Colour::is_role_hex("#2563eb"));
        assert!(!Colour::is_role_hex("2563eb"));
        assert!(!Colour::is_role_hex("#fff"));
        assert!(!Colour::is_role_hex("#2563eg"));
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(Colour::BLACK.luminance() < 1e-9);
        assert!((Colour::WHITE.luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_black_on_white_is_21() {
        let ratio = Colour::BLACK.contrast_ratio(Colour::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_symmetric() {
        let a = Colour::from_hex("#2563eb").unwrap();
        let b = Colour::from_hex("#f59e0b").unwrap();
        assert_eq!(a.contrast_ratio(b), b.contrast_ratio(a));
    }

    #[test]
    fn test_contrast_identity_is_one() {
        let c = Colour::from_hex("#1f2937").unwrap();
        assert!((c.contrast_ratio(c) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cmyk_pure_black_special_case() {
        let cmyk = Colour::BLACK.to_cmyk();
        assert_eq!(cmyk, Cmyk { c: 0, m: 0, y: 0, k: 100 });
    }

    #[test]
    fn test_cmyk_white() {
        let cmyk = Colour::WHITE.to_cmyk();
        assert_eq!(cmyk, Cmyk { c: 0, m: 0, y: 0, k: 0 });
    }

    #[test]
    fn test_cmyk_primary_blue() {
        let cmyk = Colour::from_hex("#2563eb").unwrap().to_cmyk();
        // r=37 g=99 b=235: k=8, c=84, m=58, y=0
        assert_eq!(cmyk.k, 8);
        assert_eq!(cmyk.c, 84);
        assert_eq!(cmyk.m, 58);
        assert_eq!(cmyk.y, 0);
    }

    #[test]
    fn test_scale_midpoint_identity() {
        let c = Colour::from_hex("#2563eb").unwrap();
        assert_eq!(c.scale().get(500), Some(c));
    }

    #[test]
    fn test_scale_50_is_near_white() {
        let scale = Colour::from_hex("#2563eb").unwrap().scale();
        let lightest = scale.get(50).unwrap();
        assert!(lightest.r > 200 && lightest.g > 200 && lightest.b > 230);
    }

    #[test]
    fn test_scale_900_is_not_black() {
        let scale = Colour::from_hex("#2563eb").unwrap().scale();
        let darkest = scale.get(900).unwrap();
        assert_ne!(darkest, Colour::BLACK);
        // 900 multiplies channels by 0.6
        assert_eq!(darkest.b, (235.0_f64 * 0.6).round() as u8);
    }

    #[test]
    fn test_scale_luminance_decreases() {
        let scale = Colour::from_hex("#f59e0b").unwrap().scale();
        let lums: Vec<f64> = scale.iter().map(|(_, c)| c.luminance()).collect();
        for pair in lums.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_mix_endpoints() {
        let c = Colour::from_hex("#2563eb").unwrap();
        assert_eq!(c.mix(Colour::WHITE, 0.0), c);
        assert_eq!(c.mix(Colour::WHITE, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_display_alpha() {
        let c = Colour::from_hex("#1f2937").unwrap().with_alpha(0x99);
        assert_eq!(c.to_string(), "#1f293799");
    }
}
