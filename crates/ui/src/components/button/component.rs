use dioxus::prelude::*;

use crate::cn::merge_class_attributes;
use crate::variants::{VariantAxis, VariantKey, VariantTable};

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl VariantKey for ButtonVariant {
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    fn key(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
    IconSm,
    IconLg,
}

impl VariantKey for ButtonSize {
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconSm,
        Self::IconLg,
    ];

    fn key(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
            ButtonSize::IconSm => "icon-sm",
            ButtonSize::IconLg => "icon-lg",
        }
    }
}

pub const BUTTON_VARIANTS: VariantTable = VariantTable {
    base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2",
    axes: &[
        VariantAxis {
            name: "variant",
            options: &[
                ("default", "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"),
                ("destructive", "bg-destructive text-white shadow-xs hover:bg-destructive/90"),
                ("outline", "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground"),
                ("secondary", "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
            default: "default",
        },
        VariantAxis {
            name: "size",
            options: &[
                ("default", "h-9 px-4 py-2"),
                ("sm", "h-8 rounded-md gap-1.5 px-3"),
                ("lg", "h-10 rounded-md px-6"),
                ("icon", "size-9"),
                ("icon-sm", "size-8"),
                ("icon-lg", "size-10"),
            ],
            default: "default",
        },
    ],
    compounds: &[],
};

/// Class string for a button with the given options. Useful for styling
/// links and other elements to look like buttons.
pub fn button_variants(variant: ButtonVariant, size: ButtonSize) -> String {
    BUTTON_VARIANTS.resolve(&[("variant", variant.key()), ("size", size.key())])
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Render the button's attributes onto a caller-chosen element instead
    /// of a `<button>`. The callback must render exactly one element and
    /// spread the attributes onto it.
    #[props(default)]
    pub as_child: Option<Callback<Vec<Attribute>, Element>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    #[props(default)]
    pub children: Element,
}

/// Wrap `forward` so it only runs while the button is enabled.
fn click_guard<E>(disabled: bool, mut forward: impl FnMut(E)) -> impl FnMut(E) {
    move |evt| {
        if !disabled {
            forward(evt);
        }
    }
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_variants(props.variant, props.size);
    let mut merged = merge_class_attributes(&class, props.attributes);
    merged.push(Attribute::new("data-variant", props.variant.key(), None, false));
    merged.push(Attribute::new("data-size", props.size.key(), None, false));

    let disabled = props.disabled;
    let onclick = props.onclick;
    let on_activate = click_guard(disabled, move |evt: MouseEvent| {
        if let Some(handler) = &onclick {
            handler.call(evt);
        }
    });

    if let Some(slot) = props.as_child {
        if disabled {
            merged.push(Attribute::new("aria-disabled", "true", None, false));
            merged.push(Attribute::new("data-disabled", "true", None, false));
        }
        merged.push(dioxus_elements::events::onclick(on_activate));
        return slot.call(merged);
    }

    rsx! {
        button {
            r#type: props.button_type,
            disabled,
            aria_disabled: disabled.then_some("true"),
            onclick: on_activate,
            ..merged,
            {props.children}
        }
    }
}
