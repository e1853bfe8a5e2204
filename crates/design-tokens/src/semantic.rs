//! Semantic color roles resolved per theme.
//!
//! Components only reference these roles (`bg-primary`, `text-muted-foreground`),
//! never raw scale steps, so switching theme is a matter of swapping the
//! variables emitted for the active palette.

use crate::map::TokenMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPalette {
    pub theme: &'static str,
    pub colors: TokenMap,
    pub radius: &'static str,
}

impl SemanticPalette {
    pub fn color(&self, role: &str) -> Option<&'static str> {
        self.colors.get(role)
    }
}

pub const LIGHT: SemanticPalette = SemanticPalette {
    theme: "light",
    radius: "0.5rem",
    colors: TokenMap::new(
        "color",
        &[
            ("background", "#ffffff"),
            ("foreground", "#020617"),
            ("card", "#ffffff"),
            ("card-foreground", "#020617"),
            ("popover", "#ffffff"),
            ("popover-foreground", "#020617"),
            ("primary", "#0f172a"),
            ("primary-foreground", "#f8fafc"),
            ("secondary", "#f1f5f9"),
            ("secondary-foreground", "#0f172a"),
            ("muted", "#f1f5f9"),
            ("muted-foreground", "#64748b"),
            ("accent", "#f1f5f9"),
            ("accent-foreground", "#0f172a"),
            ("destructive", "#dc2626"),
            ("destructive-foreground", "#f8fafc"),
            ("border", "#e2e8f0"),
            ("input", "#e2e8f0"),
            ("ring", "#94a3b8"),
        ],
    ),
};

pub const DARK: SemanticPalette = SemanticPalette {
    theme: "dark",
    radius: "0.5rem",
    colors: TokenMap::new(
        "color",
        &[
            ("background", "#020617"),
            ("foreground", "#f8fafc"),
            ("card", "#0f172a"),
            ("card-foreground", "#f8fafc"),
            ("popover", "#0f172a"),
            ("popover-foreground", "#f8fafc"),
            ("primary", "#f8fafc"),
            ("primary-foreground", "#0f172a"),
            ("secondary", "#1e293b"),
            ("secondary-foreground", "#f8fafc"),
            ("muted", "#1e293b"),
            ("muted-foreground", "#94a3b8"),
            ("accent", "#1e293b"),
            ("accent-foreground", "#f8fafc"),
            ("destructive", "#ef4444"),
            ("destructive-foreground", "#f8fafc"),
            ("border", "#1e293b"),
            ("input", "#1e293b"),
            ("ring", "#475569"),
        ],
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, PALETTES, WHITE};

    fn from_scales(hex: &str) -> bool {
        hex == WHITE
            || hex == BLACK
            || PALETTES
                .iter()
                .any(|scale| scale.iter().any(|(_, shade)| shade == hex))
    }

    #[test]
    fn light_and_dark_define_the_same_roles() {
        let light: Vec<_> = LIGHT.colors.keys().collect();
        let dark: Vec<_> = DARK.colors.keys().collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn roles_resolve_to_scale_colors() {
        for palette in [LIGHT, DARK] {
            for (role, hex) in palette.colors.iter() {
                assert!(from_scales(hex), "{}:{role} = {hex} is off-scale", palette.theme);
            }
        }
    }

    #[test]
    fn foreground_pairs_exist() {
        for role in ["card", "popover", "primary", "secondary", "muted", "accent", "destructive"] {
            assert!(LIGHT.color(&format!("{role}-foreground")).is_some());
        }
    }
}
