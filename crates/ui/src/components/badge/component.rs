use dioxus::prelude::*;

use crate::cn::merge_class_attributes;
use crate::variants::{VariantAxis, VariantKey, VariantTable};

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl VariantKey for BadgeVariant {
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    fn key(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

pub const BADGE_VARIANTS: VariantTable = VariantTable {
    base: "inline-flex items-center justify-center rounded-md border px-2 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 gap-1 overflow-hidden transition-colors focus-visible:ring-2 focus-visible:ring-ring",
    axes: &[VariantAxis {
        name: "variant",
        options: &[
            ("default", "border-transparent bg-primary text-primary-foreground"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground"),
            ("destructive", "border-transparent bg-destructive text-white"),
            ("outline", "text-foreground"),
        ],
        default: "default",
    }],
    compounds: &[],
};

pub fn badge_variants(variant: BadgeVariant) -> String {
    BADGE_VARIANTS.resolve(&[("variant", variant.key())])
}

/// A small status label.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] as_child: Option<Callback<Vec<Attribute>, Element>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut merged = merge_class_attributes(&badge_variants(variant), attributes);
    merged.push(Attribute::new("data-variant", variant.key(), None, false));

    if let Some(slot) = as_child {
        return slot.call(merged);
    }

    rsx! {
        span {
            ..merged,
            {children}
        }
    }
}
