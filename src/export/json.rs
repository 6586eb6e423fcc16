//! JSON token export.
//!
//! Two variants: the plain token tree (the serialized `DesignTokens` plus
//! voice/meta), and a W3C-design-tokens-flavored tree with `$type`/`$value`
//! wrapper keys for the Figma variables import.

use serde_json::{json, Map, Value};

use crate::types::DesignTokens;

/// Serialize the full token tree as pretty-printed JSON.
pub fn export_tokens_json(tokens: &DesignTokens) -> String {
    let value = json!({
        "meta": {
            "brand": tokens.brand_name,
            "generator": "bx",
        },
        "tokens": tokens,
    });
    pretty(&value)
}

/// Serialize the W3C `$type`/`$value` variant for Figma import.
pub fn export_figma_variables(tokens: &DesignTokens) -> String {
    let mut colors = Map::new();
    for (name, colour) in tokens.colors.entries() {
        colors.insert(
            name.to_string(),
            json!({ "$type": "color", "$value": colour.to_hex() }),
        );
    }
    for extra in &tokens.colors.palette {
        colors.insert(
            super::file_slug(&extra.name),
            json!({ "$type": "color", "$value": extra.value.to_hex() }),
        );
    }

    let mut font_family = Map::new();
    font_family.insert(
        "heading".to_string(),
        json!({ "$type": "fontFamily", "$value": tokens.typography.heading.family }),
    );
    font_family.insert(
        "body".to_string(),
        json!({ "$type": "fontFamily", "$value": tokens.typography.body.family }),
    );

    let mut font_size = Map::new();
    for (name, style) in tokens.typography.scale.entries() {
        font_size.insert(
            name.to_string(),
            json!({ "$type": "dimension", "$value": format!("{}px", style.size) }),
        );
    }

    let mut spacing = Map::new();
    for (name, px) in tokens.spacing.entries() {
        spacing.insert(
            name.to_string(),
            json!({ "$type": "dimension", "$value": format!("{}px", px) }),
        );
    }

    let mut radius = Map::new();
    for (name, px) in tokens.radius.entries() {
        radius.insert(
            name.to_string(),
            json!({ "$type": "dimension", "$value": format!("{}px", px) }),
        );
    }

    let value = json!({
        "color": colors,
        "fontFamily": font_family,
        "fontSize": font_size,
        "spacing": spacing,
        "radius": radius,
    });
    pretty(&value)
}

fn pretty(value: &Value) -> String {
    // serde_json::to_string_pretty on a Value cannot fail.
    let mut text = serde_json::to_string_pretty(value).unwrap_or_default();
    text.push('\n');
    text
}
