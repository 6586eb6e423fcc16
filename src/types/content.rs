//! Content fields per brand and asset type.
//!
//! `Content` is a typed mapping from field key to text value. Exporters
//! never index it directly; they go through `field_or` / `field_or_default`
//! so a missing key resolves to a documented placeholder instead of failing
//! the export.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The asset type a content set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    Website,
    Flyer,
    SocialPost,
    Email,
    Presentation,
    BusinessCard,
}

/// Text content for one brand × asset type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub asset: Option<AssetKind>,
    /// Field key → value. BTreeMap keeps serialization order stable.
    pub fields: BTreeMap<String, String>,
}

impl Content {
    /// Content with no fields; every lookup resolves to a placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            asset: None,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a field, treating blank values as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    /// Look up a field with an explicit fallback.
    pub fn field_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.field(key).unwrap_or(fallback)
    }

    /// Look up a field, falling back to the documented placeholder for the
    /// key (empty string for unknown keys).
    pub fn field_or_default(&self, key: &str) -> &str {
        self.field_or(key, default_field(key))
    }

    /// Split a field into list items on newlines and commas.
    ///
    /// Used for bullet-style fields (`bullets`, `features`).
    pub fn list(&self, key: &str) -> Vec<String> {
        self.field_or_default(key)
            .split(&['\n', ','][..])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// The documented placeholder for a known field key.
///
/// Unknown keys resolve to an empty string; exporters that accept free-form
/// keys must provide their own fallback via `field_or`.
pub fn default_field(key: &str) -> &'static str {
    match key {
        "headline" => "Ihre Marke. Ihr Auftritt.",
        "subline" => "Ein starker Auftritt beginnt mit klaren Worten.",
        "cta" => "Jetzt entdecken",
        "subject" => "Neuigkeiten von Ihrer Marke",
        "greeting" => "Guten Tag",
        "body" => "Hier steht Ihr Text. Ersetzen Sie diesen Platzhalter durch Ihre Botschaft.",
        "bullets" => "Klarer Markenauftritt\nKonsistente Farben und Schriften\nExport in alle Formate",
        "title" => "Markenpräsentation",
        "subtitle" => "Überblick und Leitlinien",
        "left" => "Wofür wir stehen",
        "right" => "Wie wir arbeiten",
        "closing" => "Vielen Dank!",
        "contact" => "hallo@example.com",
        "website" => "www.example.com",
        "phone" => "+49 30 000000",
        "person" => "Vor- und Nachname",
        "role" => "Position",
        "address" => "Musterstraße 1, 10115 Berlin",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_resolves_to_placeholder() {
        let content = Content::empty();
        assert_eq!(content.field_or_default("cta"), "Jetzt entdecken");
    }

    #[test]
    fn test_blank_field_treated_as_absent() {
        let content = Content::from_pairs([("headline", "   ")]);
        assert_eq!(
            content.field_or_default("headline"),
            "Ihre Marke. Ihr Auftritt."
        );
    }

    #[test]
    fn test_present_field_wins() {
        let content = Content::from_pairs([("headline", "Hallo Welt")]);
        assert_eq!(content.field_or_default("headline"), "Hallo Welt");
    }

    #[test]
    fn test_unknown_key_is_empty_not_panic() {
        let content = Content::empty();
        assert_eq!(content.field_or_default("nonexistent"), "");
    }

    #[test]
    fn test_list_splits_newlines_and_commas() {
        let content = Content::from_pairs([("bullets", "eins\nzwei, drei")]);
        assert_eq!(content.list("bullets"), vec!["eins", "zwei", "drei"]);
    }

    #[test]
    fn test_list_falls_back_to_placeholder_items() {
        let content = Content::empty();
        assert_eq!(content.list("bullets").len(), 3);
    }

    #[test]
    fn test_yaml_shape() {
        let yaml = r#"
asset: social-post
fields:
  headline: "Neu bei uns"
  cta: "Mehr erfahren"
"#;
        let content: Content = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(content.asset, Some(AssetKind::SocialPost));
        assert_eq!(content.field("headline"), Some("Neu bei uns"));
    }
}
