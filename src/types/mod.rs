//! Core domain types for bx.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - colour values and colour math (RGB, CMYK, WCAG, scales)
//! - `Brand` - user-owned brand definition (colors, fonts, voice, logo)
//! - `Content` - per-asset text fields with documented fallbacks
//! - `DesignTokens` - the derived, canonical token structure all exporters read

mod brand;
mod colour;
mod content;
mod tokens;

pub use brand::{
    Brand, BrandColors, BrandFonts, BrandVoice, ExtraFont, ExtractedAssets, ExtractedColor,
    ExtractedFont, Formality, PaletteEntry, Tone,
};
pub use colour::{Cmyk, Colour, ColourScale, SCALE_STEPS};
pub use content::{default_field, AssetKind, Content};
pub use tokens::{
    ColourTokens, DesignTokens, FontToken, NamedColour, RadiusScale, SpacingScale, TextStyle,
    TypeScale, Typography, VoiceTokens,
};
