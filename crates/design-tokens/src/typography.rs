use crate::map::TokenMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typography {
    pub font_family: TokenMap,
    pub font_size: TokenMap,
    pub line_height: TokenMap,
    pub font_weight: TokenMap,
    pub letter_spacing: TokenMap,
}

pub const TYPOGRAPHY: Typography = Typography {
    font_family: TokenMap::new(
        "font",
        &[
            (
                "sans",
                "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\"",
            ),
            ("serif", "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif"),
            (
                "mono",
                "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", monospace",
            ),
        ],
    ),
    font_size: TokenMap::new(
        "text",
        &[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
            ("5xl", "3rem"),
        ],
    ),
    // Keyed like `font_size`; each entry is the paired line height.
    line_height: TokenMap::new(
        "leading",
        &[
            ("xs", "1rem"),
            ("sm", "1.25rem"),
            ("base", "1.5rem"),
            ("lg", "1.75rem"),
            ("xl", "1.75rem"),
            ("2xl", "2rem"),
            ("3xl", "2.25rem"),
            ("4xl", "2.5rem"),
            ("5xl", "1"),
        ],
    ),
    font_weight: TokenMap::new(
        "font-weight",
        &[
            ("normal", "400"),
            ("medium", "500"),
            ("semibold", "600"),
            ("bold", "700"),
            ("extrabold", "800"),
        ],
    ),
    letter_spacing: TokenMap::new(
        "tracking",
        &[
            ("tighter", "-0.05em"),
            ("tight", "-0.025em"),
            ("normal", "0em"),
            ("wide", "0.025em"),
            ("wider", "0.05em"),
        ],
    ),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_font_size_has_a_line_height() {
        for key in TYPOGRAPHY.font_size.keys() {
            assert!(
                TYPOGRAPHY.line_height.contains(key),
                "font size {key} has no line height"
            );
        }
    }

    #[test]
    fn weights_are_numeric() {
        for (_, weight) in TYPOGRAPHY.font_weight.iter() {
            assert!(weight.parse::<u16>().is_ok());
        }
    }
}
