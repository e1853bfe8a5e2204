//! Table-driven variant classes.
//!
//! A [`VariantTable`] maps a selection of named options (`variant`, `size`,
//! …) to a merged class string. Every axis declares a default, and any key
//! the table does not know resolves to that default.

use crate::cn::merge;
use crate::error::UiError;

/// A typed, enumerated option such as `ButtonVariant::Ghost`.
pub trait VariantKey: Sized + Copy + Default + PartialEq + 'static {
    /// Every option in declaration order.
    const ALL: &'static [Self];

    /// Key used in variant tables and `data-*` attributes.
    fn key(&self) -> &'static str;

    /// Parse a key, falling back to the default option.
    fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    /// Strict parse; unknown keys are an error.
    fn parse(key: &str) -> Result<Self, UiError> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.key() == key)
            .ok_or_else(|| UiError::unknown_key(format!("unknown option `{key}`")))
    }
}

/// One independent option axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantAxis {
    pub name: &'static str,
    pub options: &'static [(&'static str, &'static str)],
    pub default: &'static str,
}

impl VariantAxis {
    /// Resolve `key` to a declared option key, or the axis default.
    pub fn resolve_key(&self, key: Option<&str>) -> &'static str {
        key.and_then(|k| self.options.iter().find(|(name, _)| *name == k))
            .map(|(name, _)| *name)
            .unwrap_or(self.default)
    }

    /// Classes for `key` (or the default option).
    pub fn class_for(&self, key: Option<&str>) -> &'static str {
        let key = self.resolve_key(key);
        self.options
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, class)| *class)
            .unwrap_or("")
    }
}

/// Extra classes applied when several axes take specific values together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundVariant {
    pub when: &'static [(&'static str, &'static str)],
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantTable {
    pub base: &'static str,
    pub axes: &'static [VariantAxis],
    pub compounds: &'static [CompoundVariant],
}

impl VariantTable {
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    fn selected<'a>(selection: &[(&str, &'a str)], axis: &str) -> Option<&'a str> {
        selection
            .iter()
            .rev()
            .find(|(name, _)| *name == axis)
            .map(|(_, key)| *key)
    }

    /// The effective option key for every axis, defaults filled in.
    pub fn effective(&self, selection: &[(&str, &str)]) -> Vec<(&'static str, &'static str)> {
        self.axes
            .iter()
            .map(|axis| (axis.name, axis.resolve_key(Self::selected(selection, axis.name))))
            .collect()
    }

    /// Base classes, one option per axis and matching compounds, merged.
    pub fn resolve(&self, selection: &[(&str, &str)]) -> String {
        self.resolve_with(selection, "")
    }

    /// Like [`resolve`](Self::resolve) with caller classes appended last, so
    /// they override conflicting defaults.
    pub fn resolve_with(&self, selection: &[(&str, &str)], extra: &str) -> String {
        let effective = self.effective(selection);
        let mut raw = String::from(self.base);
        for axis in self.axes {
            raw.push(' ');
            raw.push_str(axis.class_for(Self::selected(selection, axis.name)));
        }
        for compound in self.compounds {
            let matches = compound
                .when
                .iter()
                .all(|(axis, key)| effective.iter().any(|(a, k)| a == axis && k == key));
            if matches {
                raw.push(' ');
                raw.push_str(compound.class);
            }
        }
        raw.push(' ');
        raw.push_str(extra);
        merge(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHIP: VariantTable = VariantTable {
        base: "inline-flex rounded-md",
        axes: &[
            VariantAxis {
                name: "tone",
                options: &[("neutral", "bg-muted"), ("danger", "bg-destructive text-white")],
                default: "neutral",
            },
            VariantAxis {
                name: "size",
                options: &[("sm", "h-6 px-2"), ("md", "h-8 px-3")],
                default: "md",
            },
        ],
        compounds: &[CompoundVariant {
            when: &[("tone", "danger"), ("size", "sm")],
            class: "font-semibold",
        }],
    };

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    enum Tone {
        #[default]
        Neutral,
        Danger,
    }

    impl VariantKey for Tone {
        const ALL: &'static [Self] = &[Tone::Neutral, Tone::Danger];

        fn key(&self) -> &'static str {
            match self {
                Tone::Neutral => "neutral",
                Tone::Danger => "danger",
            }
        }
    }

    #[test]
    fn empty_selection_uses_defaults() {
        assert_eq!(CHIP.resolve(&[]), "inline-flex rounded-md bg-muted h-8 px-3");
    }

    #[test]
    fn selected_options_apply() {
        assert_eq!(
            CHIP.resolve(&[("tone", "danger"), ("size", "md")]),
            "inline-flex rounded-md bg-destructive text-white h-8 px-3"
        );
    }

    #[test]
    fn unknown_option_falls_back_to_default() {
        assert_eq!(CHIP.resolve(&[("tone", "sparkly")]), CHIP.resolve(&[]));
        assert_eq!(CHIP.axis("tone").map(|a| a.resolve_key(Some("nope"))), Some("neutral"));
    }

    #[test]
    fn unknown_axis_is_ignored() {
        assert_eq!(CHIP.resolve(&[("shape", "pill")]), CHIP.resolve(&[]));
    }

    #[test]
    fn compound_applies_only_on_full_match() {
        let both = CHIP.resolve(&[("tone", "danger"), ("size", "sm")]);
        assert!(both.ends_with("font-semibold"));
        let one = CHIP.resolve(&[("tone", "danger")]);
        assert!(!one.contains("font-semibold"));
    }

    #[test]
    fn extra_classes_override_conflicts() {
        assert_eq!(
            CHIP.resolve_with(&[("size", "sm")], "px-6"),
            "inline-flex rounded-md bg-muted h-6 px-6"
        );
    }

    #[test]
    fn every_combination_is_free_of_duplicates() {
        for tone in ["neutral", "danger"] {
            for size in ["sm", "md"] {
                let classes = CHIP.resolve(&[("tone", tone), ("size", size)]);
                let mut parts: Vec<_> = classes.split(' ').collect();
                let total = parts.len();
                parts.sort_unstable();
                parts.dedup();
                assert_eq!(parts.len(), total, "{classes}");
            }
        }
    }

    #[test]
    fn variant_key_parsing() {
        assert_eq!(Tone::from_key("danger"), Tone::Danger);
        assert_eq!(Tone::from_key("missing"), Tone::Neutral);
        assert!(Tone::parse("missing").is_err());
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.key()), Ok(*tone));
        }
    }
}
