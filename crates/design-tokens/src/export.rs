//! JSON export of the token set for tooling outside Rust.

use serde_json::{json, Map, Value};

use crate::colors::PALETTES;
use crate::map::TokenMap;
use crate::scales::{BORDER_RADIUS, BORDER_WIDTH, SHADOWS, SIZES, SPACING, TRANSITIONS};
use crate::semantic::{SemanticPalette, DARK, LIGHT};
use crate::typography::TYPOGRAPHY;

fn map_value(map: TokenMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect::<Map<_, _>>(),
    )
}

fn palette_value(palette: &SemanticPalette) -> Value {
    json!({
        "colors": map_value(palette.colors),
        "radius": palette.radius,
    })
}

/// The complete token tree as a JSON value.
pub fn to_value() -> Value {
    let colors: Map<String, Value> = PALETTES
        .iter()
        .map(|scale| {
            let shades: Map<String, Value> = scale
                .iter()
                .map(|(step, hex)| (step.to_string(), Value::String(hex.to_string())))
                .collect();
            (scale.name.to_string(), Value::Object(shades))
        })
        .collect();

    json!({
        "colors": colors,
        "spacing": map_value(SPACING),
        "sizes": map_value(SIZES),
        "shadows": map_value(SHADOWS),
        "borderRadius": map_value(BORDER_RADIUS),
        "borderWidth": map_value(BORDER_WIDTH),
        "transitions": {
            "duration": map_value(TRANSITIONS.duration),
            "easing": map_value(TRANSITIONS.easing),
        },
        "typography": {
            "fontFamily": map_value(TYPOGRAPHY.font_family),
            "fontSize": map_value(TYPOGRAPHY.font_size),
            "lineHeight": map_value(TYPOGRAPHY.line_height),
            "fontWeight": map_value(TYPOGRAPHY.font_weight),
            "letterSpacing": map_value(TYPOGRAPHY.letter_spacing),
        },
        "themes": {
            "light": palette_value(&LIGHT),
            "dark": palette_value(&DARK),
        },
    })
}

/// Pretty-printed JSON document of [`to_value`].
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_contains_top_level_groups() {
        let value = to_value();
        for group in [
            "colors",
            "spacing",
            "sizes",
            "shadows",
            "borderRadius",
            "borderWidth",
            "transitions",
            "typography",
            "themes",
        ] {
            assert!(value.get(group).is_some(), "missing {group}");
        }
    }

    #[test]
    fn export_nests_color_steps() {
        let value = to_value();
        assert_eq!(value["colors"]["blue"]["500"], "#3b82f6");
        assert_eq!(value["themes"]["dark"]["colors"]["background"], "#020617");
    }

    #[test]
    fn json_parses_back() {
        let text = to_json().expect("serializes");
        let parsed: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(parsed, to_value());
    }
}
