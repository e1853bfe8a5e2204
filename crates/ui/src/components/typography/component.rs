use dioxus::prelude::*;

use crate::cn::merge_class_attributes;
use crate::variants::{VariantAxis, VariantKey, VariantTable};

/// Text style. Each variant has a natural element it renders as.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    #[default]
    P,
    Blockquote,
    Code,
    Lead,
    Large,
    Small,
    Muted,
    List,
}

impl VariantKey for TypographyVariant {
    const ALL: &'static [Self] = &[
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::P,
        Self::Blockquote,
        Self::Code,
        Self::Lead,
        Self::Large,
        Self::Small,
        Self::Muted,
        Self::List,
    ];

    fn key(&self) -> &'static str {
        match self {
            TypographyVariant::H1 => "h1",
            TypographyVariant::H2 => "h2",
            TypographyVariant::H3 => "h3",
            TypographyVariant::H4 => "h4",
            TypographyVariant::P => "p",
            TypographyVariant::Blockquote => "blockquote",
            TypographyVariant::Code => "code",
            TypographyVariant::Lead => "lead",
            TypographyVariant::Large => "large",
            TypographyVariant::Small => "small",
            TypographyVariant::Muted => "muted",
            TypographyVariant::List => "list",
        }
    }
}

impl TypographyVariant {
    /// Element rendered when no `as_tag` is given.
    pub fn default_tag(&self) -> TypographyTag {
        match self {
            TypographyVariant::H1 => TypographyTag::H1,
            TypographyVariant::H2 => TypographyTag::H2,
            TypographyVariant::H3 => TypographyTag::H3,
            TypographyVariant::H4 => TypographyTag::H4,
            TypographyVariant::P | TypographyVariant::Lead | TypographyVariant::Muted => {
                TypographyTag::P
            }
            TypographyVariant::Blockquote => TypographyTag::Blockquote,
            TypographyVariant::Code => TypographyTag::Code,
            TypographyVariant::Large => TypographyTag::Div,
            TypographyVariant::Small => TypographyTag::Small,
            TypographyVariant::List => TypographyTag::Ul,
        }
    }
}

/// Elements a Typography can render as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypographyTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Span,
    Div,
    Label,
    Blockquote,
    Code,
    Small,
    Ul,
    Ol,
}

pub const TYPOGRAPHY_VARIANTS: VariantTable = VariantTable {
    base: "",
    axes: &[VariantAxis {
        name: "variant",
        options: &[
            ("h1", "scroll-m-20 text-4xl font-extrabold tracking-tight text-balance"),
            ("h2", "scroll-m-20 border-b pb-2 text-3xl font-semibold tracking-tight first:mt-0"),
            ("h3", "scroll-m-20 text-2xl font-semibold tracking-tight"),
            ("h4", "scroll-m-20 text-xl font-semibold tracking-tight"),
            ("p", "leading-7 [&:not(:first-child)]:mt-6"),
            ("blockquote", "mt-6 border-l-2 pl-6 italic"),
            ("code", "bg-muted relative rounded px-[0.3rem] py-[0.2rem] font-mono text-sm font-semibold"),
            ("lead", "text-muted-foreground text-xl"),
            ("large", "text-lg font-semibold"),
            ("small", "text-sm leading-none font-medium"),
            ("muted", "text-muted-foreground text-sm"),
            ("list", "my-6 ml-6 list-disc [&>li]:mt-2"),
        ],
        default: "p",
    }],
    compounds: &[],
};

/// Styled text. `as_tag` keeps the variant's look on a different element,
/// e.g. an `h2`-styled `h1` for document outline reasons.
#[component]
pub fn Typography(
    #[props(default)] variant: TypographyVariant,
    #[props(default)] as_tag: Option<TypographyTag>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = TYPOGRAPHY_VARIANTS.resolve(&[("variant", variant.key())]);
    let mut merged = merge_class_attributes(&class, attributes);
    merged.push(Attribute::new("data-variant", variant.key(), None, false));

    match as_tag.unwrap_or_else(|| variant.default_tag()) {
        TypographyTag::H1 => rsx! { h1 { ..merged, {children} } },
        TypographyTag::H2 => rsx! { h2 { ..merged, {children} } },
        TypographyTag::H3 => rsx! { h3 { ..merged, {children} } },
        TypographyTag::H4 => rsx! { h4 { ..merged, {children} } },
        TypographyTag::H5 => rsx! { h5 { ..merged, {children} } },
        TypographyTag::H6 => rsx! { h6 { ..merged, {children} } },
        TypographyTag::P => rsx! { p { ..merged, {children} } },
        TypographyTag::Span => rsx! { span { ..merged, {children} } },
        TypographyTag::Div => rsx! { div { ..merged, {children} } },
        TypographyTag::Label => rsx! { label { ..merged, {children} } },
        TypographyTag::Blockquote => rsx! { blockquote { ..merged, {children} } },
        TypographyTag::Code => rsx! { code { ..merged, {children} } },
        TypographyTag::Small => rsx! { small { ..merged, {children} } },
        TypographyTag::Ul => rsx! { ul { ..merged, {children} } },
        TypographyTag::Ol => rsx! { ol { ..merged, {children} } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_variant_has_classes() {
        let axis = TYPOGRAPHY_VARIANTS.axis("variant").expect("variant axis");
        for variant in TypographyVariant::ALL {
            assert!(!axis.class_for(Some(variant.key())).is_empty(), "{variant:?}");
        }
    }

    #[test]
    fn default_tags() {
        assert_eq!(TypographyVariant::Lead.default_tag(), TypographyTag::P);
        assert_eq!(TypographyVariant::Large.default_tag(), TypographyTag::Div);
        assert_eq!(TypographyVariant::List.default_tag(), TypographyTag::Ul);
    }

    #[test]
    fn heading_renders_its_own_element() {
        fn app() -> Element {
            rsx! {
                Typography { variant: TypographyVariant::H1, "Case 24-cv-001" }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<h1"));
        assert!(html.contains("text-4xl"));
    }

    #[test]
    fn as_tag_moves_classes_to_another_element() {
        fn app() -> Element {
            rsx! {
                Typography { variant: TypographyVariant::H2, as_tag: TypographyTag::H1, "Overview" }
            }
        }
        let html = render(app);
        assert!(html.starts_with("<h1"));
        assert!(html.contains("text-3xl"));
        assert!(html.contains("data-variant=\"h2\""));
        assert!(html.ends_with("</h1>"));
    }
}
