use dioxus::prelude::*;

use crate::cn::merge_class_attributes;
use crate::variants::{VariantAxis, VariantKey, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl VariantKey for AlertVariant {
    const ALL: &'static [Self] = &[Self::Default, Self::Destructive];

    fn key(&self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Destructive => "destructive",
        }
    }
}

pub const ALERT_VARIANTS: VariantTable = VariantTable {
    base: "relative w-full rounded-lg border px-4 py-3 text-sm grid grid-cols-[0_1fr] items-start gap-y-0.5 has-[>svg]:grid-cols-[1rem_1fr] has-[>svg]:gap-x-3 [&>svg]:size-4 [&>svg]:translate-y-0.5 [&>svg]:text-current",
    axes: &[VariantAxis {
        name: "variant",
        options: &[
            ("default", "bg-card text-card-foreground"),
            ("destructive", "bg-card text-destructive *:data-[slot=alert-description]:text-destructive/90"),
        ],
        default: "default",
    }],
    compounds: &[],
};

/// A callout for important messages. Place an icon first to get the
/// two-column layout.
#[component]
pub fn Alert(
    #[props(default)] variant: AlertVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = ALERT_VARIANTS.resolve(&[("variant", variant.key())]);
    let merged = merge_class_attributes(&class, attributes);

    rsx! {
        div {
            role: "alert",
            "data-slot": "alert",
            "data-variant": variant.key(),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn AlertTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "col-start-2 line-clamp-1 min-h-4 font-medium tracking-tight",
        attributes,
    );

    rsx! {
        div {
            "data-slot": "alert-title",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn AlertDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        "text-muted-foreground col-start-2 grid justify-items-start gap-1 text-sm [&_p]:leading-relaxed",
        attributes,
    );

    rsx! {
        div {
            "data-slot": "alert-description",
            ..merged,
            {children}
        }
    }
}
