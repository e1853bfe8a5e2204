/// Numeric steps every color scale provides, lightest first.
pub const STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// A named color ramp from `50` (lightest) to `950` (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    pub name: &'static str,
    shades: [&'static str; 11],
}

impl ColorScale {
    pub const fn new(name: &'static str, shades: [&'static str; 11]) -> Self {
        Self { name, shades }
    }

    /// Hex value for a step such as `500`. Steps outside [`STEPS`] are `None`.
    pub fn shade(&self, step: u16) -> Option<&'static str> {
        STEPS
            .iter()
            .position(|s| *s == step)
            .map(|idx| self.shades[idx])
    }

    /// `(step, hex)` pairs, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        STEPS.iter().copied().zip(self.shades.iter().copied())
    }
}

pub const GRAY: ColorScale = ColorScale::new(
    "gray",
    [
        "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
        "#1f2937", "#111827", "#030712",
    ],
);

pub const SLATE: ColorScale = ColorScale::new(
    "slate",
    [
        "#f8fafc", "#f1f5f9", "#e2e8f0", "#cbd5e1", "#94a3b8", "#64748b", "#475569", "#334155",
        "#1e293b", "#0f172a", "#020617",
    ],
);

pub const RED: ColorScale = ColorScale::new(
    "red",
    [
        "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
        "#991b1b", "#7f1d1d", "#450a0a",
    ],
);

pub const ORANGE: ColorScale = ColorScale::new(
    "orange",
    [
        "#fff7ed", "#ffedd5", "#fed7aa", "#fdba74", "#fb923c", "#f97316", "#ea580c", "#c2410c",
        "#9a3412", "#7c2d12", "#431407",
    ],
);

pub const AMBER: ColorScale = ColorScale::new(
    "amber",
    [
        "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706", "#b45309",
        "#92400e", "#78350f", "#451a03",
    ],
);

pub const GREEN: ColorScale = ColorScale::new(
    "green",
    [
        "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
        "#166534", "#14532d", "#052e16",
    ],
);

pub const BLUE: ColorScale = ColorScale::new(
    "blue",
    [
        "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
        "#1e40af", "#1e3a8a", "#172554",
    ],
);

pub const INDIGO: ColorScale = ColorScale::new(
    "indigo",
    [
        "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
        "#3730a3", "#312e81", "#1e1b4b",
    ],
);

pub const VIOLET: ColorScale = ColorScale::new(
    "violet",
    [
        "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
        "#5b21b6", "#4c1d95", "#2e1065",
    ],
);

pub const WHITE: &str = "#ffffff";
pub const BLACK: &str = "#000000";

/// All color scales in display order.
pub const PALETTES: &[ColorScale] = &[GRAY, SLATE, RED, ORANGE, AMBER, GREEN, BLUE, INDIGO, VIOLET];

/// Look up a color scale by name.
pub fn palette(name: &str) -> Option<ColorScale> {
    PALETTES.iter().copied().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_resolves_known_steps() {
        assert_eq!(BLUE.shade(500), Some("#3b82f6"));
        assert_eq!(GRAY.shade(50), Some("#f9fafb"));
        assert_eq!(RED.shade(950), Some("#450a0a"));
    }

    #[test]
    fn shade_outside_scale_is_none() {
        assert_eq!(BLUE.shade(550), None);
        assert_eq!(BLUE.shade(0), None);
    }

    #[test]
    fn palette_lookup_by_name() {
        assert_eq!(palette("green"), Some(GREEN));
        assert_eq!(palette("teal"), None);
    }

    #[test]
    fn every_shade_is_hex() {
        for scale in PALETTES {
            for (step, hex) in scale.iter() {
                assert!(
                    hex.starts_with('#') && hex.len() == 7,
                    "{}-{step} is not a hex color: {hex}",
                    scale.name
                );
            }
        }
    }

    #[test]
    fn palette_names_are_unique() {
        let mut names: Vec<_> = PALETTES.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PALETTES.len());
    }
}
