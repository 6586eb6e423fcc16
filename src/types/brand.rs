//! Brand definition types.
//!
//! A `Brand` is user-owned, long-lived input: five colour roles, two font
//! stacks, voice settings and optional logos. Every field carries a serde
//! default so a partially filled definition file still loads; `normalize`
//! then reports and repairs anything an exporter could trip over. The five
//! colour roles are always present and valid after normalization.

use serde::{Deserialize, Serialize};

use super::colour::Colour;

/// Default hex values for the five colour roles.
pub const DEFAULT_PRIMARY: &str = "#2563eb";
pub const DEFAULT_SECONDARY: &str = "#1e40af";
pub const DEFAULT_ACCENT: &str = "#f59e0b";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "#1f2937";

const DEFAULT_HEADING_STACK: &str = "'Helvetica Neue', Helvetica, Arial, sans-serif";
const DEFAULT_BODY_STACK: &str = "'Helvetica Neue', Helvetica, Arial, sans-serif";

/// A complete brand definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Display name, used in artifact copy and generated filenames.
    pub name: String,
    pub colors: BrandColors,
    pub fonts: BrandFonts,
    pub voice: BrandVoice,
    /// Primary logo: a local file path or a `data:` URI.
    pub logo: Option<String>,
    /// Additional logo variants.
    pub logos: Vec<String>,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Marke".to_string(),
            colors: BrandColors::default(),
            fonts: BrandFonts::default(),
            voice: BrandVoice::default(),
            logo: None,
            logos: Vec::new(),
        }
    }
}

impl Brand {
    /// Repair anything that would leave an exporter without a usable value.
    ///
    /// Returns one human-readable warning per repaired field. After this
    /// call every colour role holds a valid 6-digit hex and both font
    /// stacks are non-empty.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut warnings = self.colors.normalize();

        if self.name.trim().is_empty() {
            self.name = "Marke".to_string();
            warnings.push("brand name was empty, using \"Marke\"".to_string());
        }
        if self.fonts.heading.trim().is_empty() {
            self.fonts.heading = DEFAULT_HEADING_STACK.to_string();
            warnings.push(format!(
                "heading font was empty, using {}",
                DEFAULT_HEADING_STACK
            ));
        }
        if self.fonts.body.trim().is_empty() {
            self.fonts.body = DEFAULT_BODY_STACK.to_string();
            warnings.push(format!("body font was empty, using {}", DEFAULT_BODY_STACK));
        }

        warnings
    }
}

/// The five required colour roles plus optional named extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    /// Additional named colours beyond the five roles.
    pub palette: Vec<PaletteEntry>,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            text: DEFAULT_TEXT.to_string(),
            palette: Vec::new(),
        }
    }
}

impl BrandColors {
    /// The five roles as `(name, hex)` pairs, in canonical order.
    pub fn roles(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("accent", self.accent.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
        ]
    }

    /// Replace missing or malformed role values with the documented
    /// defaults, returning one warning per replacement. Invalid palette
    /// extras are dropped.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        let fixes: [(&'static str, &mut String, &'static str); 5] = [
            ("primary", &mut self.primary, DEFAULT_PRIMARY),
            ("secondary", &mut self.secondary, DEFAULT_SECONDARY),
            ("accent", &mut self.accent, DEFAULT_ACCENT),
            ("background", &mut self.background, DEFAULT_BACKGROUND),
            ("text", &mut self.text, DEFAULT_TEXT),
        ];

        for (role, value, fallback) in fixes {
            if !Colour::is_role_hex(value) {
                warnings.push(format!(
                    "colour role '{}' has invalid value '{}', using {}",
                    role, value, fallback
                ));
                *value = fallback.to_string();
            }
        }

        self.palette.retain(|entry| {
            let ok = Colour::is_role_hex(&entry.hex);
            if !ok {
                warnings.push(format!(
                    "palette colour '{}' has invalid value '{}', dropped",
                    entry.name, entry.hex
                ));
            }
            ok
        });

        warnings
    }
}

/// An additional named brand colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
}

/// Heading and body font stacks plus optional extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandFonts {
    /// CSS-style font stack; the first quoted token is the canonical family.
    pub heading: String,
    pub body: String,
    pub additional: Vec<ExtraFont>,
}

impl Default for BrandFonts {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING_STACK.to_string(),
            body: DEFAULT_BODY_STACK.to_string(),
            additional: Vec::new(),
        }
    }
}

/// An extra font with a usage tag (e.g. "Code-Beispiele").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraFont {
    pub name: String,
    #[serde(default)]
    pub usage: String,
}

/// Brand voice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandVoice {
    pub tone: Tone,
    pub formality: Formality,
    pub tagline: String,
    /// Comma-separated keywords the copy should lean on.
    pub dos: String,
    /// Comma-separated keywords the copy should avoid.
    pub donts: String,
}

impl Default for BrandVoice {
    fn default() -> Self {
        Self {
            tone: Tone::Professional,
            formality: Formality::Sie,
            tagline: String::new(),
            dos: String::new(),
            donts: String::new(),
        }
    }
}

/// Overall tone of the brand voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Innovative,
    Premium,
    Playful,
    Trustworthy,
}

impl Tone {
    /// Parse a lowercase tone identifier, as the extraction service emits it.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professional" => Some(Tone::Professional),
            "friendly" => Some(Tone::Friendly),
            "innovative" => Some(Tone::Innovative),
            "premium" => Some(Tone::Premium),
            "playful" => Some(Tone::Playful),
            "trustworthy" => Some(Tone::Trustworthy),
            _ => None,
        }
    }

    /// German display label used in generated artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professionell",
            Tone::Friendly => "Freundlich",
            Tone::Innovative => "Innovativ",
            Tone::Premium => "Premium",
            Tone::Playful => "Verspielt",
            Tone::Trustworthy => "Vertrauenswürdig",
        }
    }
}

/// Form of address used in generated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Du,
    Sie,
    Wir,
}

impl Formality {
    /// Greeting placeholder matching the form of address.
    pub fn greeting(self) -> &'static str {
        match self {
            Formality::Du => "Hallo!",
            Formality::Sie => "Guten Tag",
            Formality::Wir => "Willkommen",
        }
    }

    /// German display label used in generated artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Formality::Du => "Du",
            Formality::Sie => "Sie",
            Formality::Wir => "Wir",
        }
    }
}

/// Output shape of the external asset-extraction service.
///
/// The service itself is an external boundary; bx only consumes its JSON to
/// seed a `Brand`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedAssets {
    #[serde(default)]
    pub colors: Vec<ExtractedColor>,
    #[serde(default)]
    pub fonts: Vec<ExtractedFont>,
    #[serde(default)]
    pub tone_of_voice: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// One extracted colour, optionally tagged with a role.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedColor {
    pub hex: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One extracted font with a usage tag.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedFont {
    pub name: String,
    #[serde(default)]
    pub usage: String,
}

impl From<ExtractedAssets> for Brand {
    /// Seed a brand from extraction output. Role-tagged colours land on
    /// their role; untagged colours fill remaining roles in canonical
    /// order, then the palette. Fonts map by usage tag ("heading"/"body"),
    /// untagged fonts fill heading first.
    fn from(extracted: ExtractedAssets) -> Self {
        let mut brand = Brand::default();

        let mut untagged = Vec::new();
        for color in &extracted.colors {
            match color.role.as_deref() {
                Some("primary") => brand.colors.primary = color.hex.clone(),
                Some("secondary") => brand.colors.secondary = color.hex.clone(),
                Some("accent") => brand.colors.accent = color.hex.clone(),
                Some("background") => brand.colors.background = color.hex.clone(),
                Some("text") => brand.colors.text = color.hex.clone(),
                _ => untagged.push(color.hex.clone()),
            }
        }
        let mut open_roles = vec![
            &mut brand.colors.primary,
            &mut brand.colors.secondary,
            &mut brand.colors.accent,
        ]
        .into_iter();
        for (i, hex) in untagged.into_iter().enumerate() {
            match open_roles.next() {
                Some(slot) => *slot = hex,
                None => brand.colors.palette.push(PaletteEntry {
                    name: format!("extracted-{}", i + 1),
                    hex,
                }),
            }
        }

        let mut heading_set = false;
        for font in &extracted.fonts {
            let stack = format!("'{}', sans-serif", font.name);
            match font.usage.as_str() {
                "heading" => {
                    brand.fonts.heading = stack;
                    heading_set = true;
                }
                "body" => brand.fonts.body = stack,
                _ if !heading_set => {
                    brand.fonts.heading = stack;
                    heading_set = true;
                }
                _ => brand.fonts.additional.push(ExtraFont {
                    name: font.name.clone(),
                    usage: font.usage.clone(),
                }),
            }
        }

        if let Some(tone) = extracted.tone_of_voice.as_deref().and_then(Tone::parse) {
            brand.voice.tone = tone;
        }
        if let Some(tagline) = extracted.additional_notes {
            brand.voice.tagline = tagline;
        }
        brand.normalize();
        brand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_brand_roles_are_valid() {
        let brand = Brand::default();
        for (_, hex) in brand.colors.roles() {
            assert!(Colour::is_role_hex(hex));
        }
    }

    #[test]
    fn test_normalize_repairs_invalid_role() {
        let mut brand = Brand::default();
        brand.colors.primary = "blue".to_string();
        let warnings = brand.normalize();
        assert_eq!(brand.colors.primary, DEFAULT_PRIMARY);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("primary"));
    }

    #[test]
    fn test_normalize_drops_invalid_palette_entry() {
        let mut brand = Brand::default();
        brand.colors.palette = vec![
            PaletteEntry {
                name: "ok".to_string(),
                hex: "#aabbcc".to_string(),
            },
            PaletteEntry {
                name: "broken".to_string(),
                hex: "#xyz".to_string(),
            },
        ];
        let warnings = brand.normalize();
        assert_eq!(brand.colors.palette.len(), 1);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_yaml_roundtrip_with_defaults() {
        let yaml = r##"
name: Acme
colors:
  primary: "#0f62fe"
voice:
  tone: friendly
  formality: du
"##;
        let brand: Brand = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(brand.name, "Acme");
        assert_eq!(brand.colors.primary, "#0f62fe");
        // Unspecified roles keep their documented defaults
        assert_eq!(brand.colors.background, DEFAULT_BACKGROUND);
        assert_eq!(brand.voice.tone, Tone::Friendly);
        assert_eq!(brand.voice.formality, Formality::Du);
    }

    #[test]
    fn test_from_extracted_assets() {
        let json = r##"{
            "colors": [
                {"hex": "#112233", "role": "primary"},
                {"hex": "#445566"},
                {"hex": "#778899"},
                {"hex": "#aabbcc"},
                {"hex": "#ddeeff"}
            ],
            "fonts": [
                {"name": "Inter", "usage": "heading"},
                {"name": "Lora", "usage": "body"}
            ],
            "toneOfVoice": "professional",
            "additionalNotes": "Einfach machen."
        }"##;
        let extracted: ExtractedAssets = serde_json::from_str(json).unwrap();
        let brand = Brand::from(extracted);
        assert_eq!(brand.colors.primary, "#112233");
        // Untagged colours fill secondary and accent, the rest go to the palette
        assert_eq!(brand.colors.secondary, "#445566");
        assert_eq!(brand.colors.accent, "#778899");
        assert_eq!(brand.colors.palette.len(), 2);
        assert_eq!(brand.fonts.heading, "'Inter', sans-serif");
        assert_eq!(brand.voice.tagline, "Einfach machen.");
    }
}
