//! Derived design tokens.
//!
//! `DesignTokens` is the canonical structure every exporter reads. It is
//! recomputed from a `Brand` on each export call and never mutated in
//! place; see `resolve::resolve_tokens`. The typography, spacing and radius
//! scales are constant across brands, only the colour values and font
//! families vary.

use serde::Serialize;

use super::brand::{Formality, Tone};
use super::colour::Colour;

/// The canonical token structure all exporters consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub brand_name: String,
    pub colors: ColourTokens,
    pub typography: Typography,
    pub spacing: SpacingScale,
    pub radius: RadiusScale,
    pub voice: VoiceTokens,
}

/// Resolved colour roles plus auto-derived variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColourTokens {
    pub primary: Colour,
    pub primary_light: Colour,
    pub primary_dark: Colour,
    pub secondary: Colour,
    pub accent: Colour,
    pub background: Colour,
    pub text: Colour,
    pub text_muted: Colour,
    /// Named extras beyond the five roles, in definition order.
    pub palette: Vec<NamedColour>,
}

impl ColourTokens {
    /// Role/variant pairs in the fixed order exporters emit them.
    pub fn entries(&self) -> [(&'static str, Colour); 8] {
        [
            ("primary", self.primary),
            ("primary-light", self.primary_light),
            ("primary-dark", self.primary_dark),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("background", self.background),
            ("text", self.text),
            ("text-muted", self.text_muted),
        ]
    }
}

/// A named extra colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedColour {
    pub name: String,
    pub value: Colour,
}

/// Typography tokens: resolved families plus the fixed semantic scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading: FontToken,
    pub body: FontToken,
    pub scale: TypeScale,
}

/// A resolved font: the full CSS stack and the extracted clean family name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontToken {
    pub stack: String,
    pub family: String,
}

/// One step of the semantic text scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Pixel size.
    pub size: u16,
    /// Unit-less line height.
    pub line_height: f32,
    /// CSS font weight.
    pub weight: u16,
}

/// The fixed semantic text scale, h1 down to caption.
///
/// Constant across brands; only the font family varies per brand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeScale {
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub body: TextStyle,
    pub small: TextStyle,
    pub caption: TextStyle,
}

impl TypeScale {
    pub const DEFAULT: TypeScale = TypeScale {
        h1: TextStyle {
            size: 48,
            line_height: 1.1,
            weight: 700,
        },
        h2: TextStyle {
            size: 36,
            line_height: 1.2,
            weight: 700,
        },
        h3: TextStyle {
            size: 28,
            line_height: 1.25,
            weight: 600,
        },
        h4: TextStyle {
            size: 22,
            line_height: 1.3,
            weight: 600,
        },
        body: TextStyle {
            size: 16,
            line_height: 1.5,
            weight: 400,
        },
        small: TextStyle {
            size: 14,
            line_height: 1.5,
            weight: 400,
        },
        caption: TextStyle {
            size: 12,
            line_height: 1.4,
            weight: 400,
        },
    };

    /// Name/style pairs in the fixed order exporters emit them.
    pub fn entries(&self) -> [(&'static str, TextStyle); 7] {
        [
            ("h1", self.h1),
            ("h2", self.h2),
            ("h3", self.h3),
            ("h4", self.h4),
            ("body", self.body),
            ("small", self.small),
            ("caption", self.caption),
        ]
    }
}

/// The fixed spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpacingScale {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    pub xxl: u16,
    pub xxxl: u16,
}

impl SpacingScale {
    pub const DEFAULT: SpacingScale = SpacingScale {
        xs: 4,
        sm: 8,
        md: 16,
        lg: 24,
        xl: 32,
        xxl: 48,
        xxxl: 64,
    };

    /// Name/pixel pairs in emit order.
    pub fn entries(&self) -> [(&'static str, u16); 7] {
        [
            ("xs", self.xs),
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("xxl", self.xxl),
            ("xxxl", self.xxxl),
        ]
    }
}

/// The fixed border-radius scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadiusScale {
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub full: u16,
}

impl RadiusScale {
    pub const DEFAULT: RadiusScale = RadiusScale {
        sm: 4,
        md: 8,
        lg: 16,
        full: 9999,
    };

    /// Name/pixel pairs in emit order.
    pub fn entries(&self) -> [(&'static str, u16); 4] {
        [
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("full", self.full),
        ]
    }
}

/// Brand voice passed through with parsed keyword lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceTokens {
    pub tone: Tone,
    pub formality: Formality,
    pub tagline: String,
    pub dos: Vec<String>,
    pub donts: Vec<String>,
}
