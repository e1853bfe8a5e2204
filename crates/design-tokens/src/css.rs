//! CSS custom property rendering.

use std::fmt::Write;

use crate::colors::PALETTES;
use crate::map::TokenMap;
use crate::scales::{BORDER_RADIUS, BORDER_WIDTH, SHADOWS, SIZES, SPACING, TRANSITIONS};
use crate::semantic::{SemanticPalette, DARK, LIGHT};
use crate::typography::TYPOGRAPHY;

/// Attribute selector the dark palette is scoped to.
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Custom property name for a token.
///
/// `.` is not a valid identifier character, so `spacing.0.5` becomes
/// `--spacing-0_5`. The `default` key maps to the bare prefix.
pub fn var_name(prefix: &str, key: &str) -> String {
    if key == "default" {
        format!("--{prefix}")
    } else {
        format!("--{prefix}-{}", key.replace('.', "_"))
    }
}

/// `var(--name)` reference for a token.
pub fn var_ref(prefix: &str, key: &str) -> String {
    format!("var({})", var_name(prefix, key))
}

fn push_map(out: &mut String, map: TokenMap) {
    for (key, value) in map.iter() {
        let _ = writeln!(out, "  {}: {value};", var_name(map.name(), key));
    }
}

fn push_semantic(out: &mut String, palette: &SemanticPalette) {
    for (role, value) in palette.colors.iter() {
        let _ = writeln!(out, "  --{role}: {value};");
    }
    let _ = writeln!(out, "  --radius: {};", palette.radius);
    let _ = writeln!(out, "  color-scheme: {};", palette.theme);
}

/// Every static token as custom properties inside `selector { … }`.
pub fn custom_properties(selector: &str) -> String {
    let mut out = format!("{selector} {{\n");
    for scale in PALETTES {
        for (step, hex) in scale.iter() {
            let _ = writeln!(out, "  --color-{}-{step}: {hex};", scale.name);
        }
    }
    for map in [
        SPACING,
        SIZES,
        SHADOWS,
        BORDER_RADIUS,
        BORDER_WIDTH,
        TRANSITIONS.duration,
        TRANSITIONS.easing,
        TYPOGRAPHY.font_family,
        TYPOGRAPHY.font_size,
        TYPOGRAPHY.line_height,
        TYPOGRAPHY.font_weight,
        TYPOGRAPHY.letter_spacing,
    ] {
        push_map(&mut out, map);
    }
    out.push_str("}\n");
    out
}

/// Semantic role variables for one palette.
pub fn semantic_properties(selector: &str, palette: &SemanticPalette) -> String {
    let mut out = format!("{selector} {{\n");
    push_semantic(&mut out, palette);
    out.push_str("}\n");
    out
}

/// Full stylesheet: static tokens and the light palette on `:root`, with the
/// dark palette overriding under [`DARK_SELECTOR`].
pub fn theme_stylesheet() -> String {
    let mut css = custom_properties(":root");
    css.push_str(&semantic_properties(":root", &LIGHT));
    css.push_str(&semantic_properties(DARK_SELECTOR, &DARK));
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn var_name_sanitizes_fractional_keys() {
        assert_eq!(var_name("spacing", "0.5"), "--spacing-0_5");
        assert_eq!(var_name("spacing", "4"), "--spacing-4");
    }

    #[test]
    fn var_name_default_is_bare_prefix() {
        assert_eq!(var_name("border-width", "default"), "--border-width");
        assert_eq!(var_ref("radius", "md"), "var(--radius-md)");
    }

    #[test]
    fn custom_properties_include_every_scale() {
        let css = custom_properties(":root");
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-blue-500: #3b82f6;\n"));
        assert!(css.contains("  --spacing-0_5: 0.125rem;\n"));
        assert!(css.contains("  --radius-md: 0.375rem;\n"));
        assert!(css.contains("  --duration-150: 150ms;\n"));
        assert!(css.contains("  --text-sm: 0.875rem;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn semantic_block_renders_roles() {
        let css = semantic_properties(":root", &LIGHT);
        assert_eq!(
            css.lines().take(3).collect::<Vec<_>>(),
            vec![":root {", "  --background: #ffffff;", "  --foreground: #020617;"]
        );
        assert!(css.contains("  color-scheme: light;\n"));
    }

    #[test]
    fn theme_stylesheet_scopes_dark_palette() {
        let css = theme_stylesheet();
        let dark_at = css.find(DARK_SELECTOR).expect("dark block present");
        assert!(css[dark_at..].contains("--background: #020617;"));
        assert!(css[..dark_at].contains("--background: #ffffff;"));
    }
}
