//! Class-name merging.
//!
//! [`cn!`](crate::cn!) joins conditional class values, removes duplicates and
//! resolves conflicting utility classes so that the last one wins:
//!
//! ```
//! assert_eq!(ui::cn!("px-2 py-1", "px-4"), "py-1 px-4");
//! assert_eq!(ui::cn!("hover:bg-muted", (false, "hidden"), Some("flex")), "hover:bg-muted flex");
//! ```

use std::collections::HashSet;

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Anything that can contribute class names to [`cn!`](crate::cn!).
pub trait ClassValue {
    fn append_to(self, out: &mut String);
}

impl ClassValue for &str {
    fn append_to(self, out: &mut String) {
        if self.trim().is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(self);
    }
}

impl ClassValue for String {
    fn append_to(self, out: &mut String) {
        self.as_str().append_to(out);
    }
}

impl ClassValue for &String {
    fn append_to(self, out: &mut String) {
        self.as_str().append_to(out);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn append_to(self, out: &mut String) {
        if let Some(value) = self {
            value.append_to(out);
        }
    }
}

/// `(condition, class)` contributes `class` only when `condition` holds.
impl<T: ClassValue> ClassValue for (bool, T) {
    fn append_to(self, out: &mut String) {
        if self.0 {
            self.1.append_to(out);
        }
    }
}

impl<T: ClassValue + Copy> ClassValue for &[T] {
    fn append_to(self, out: &mut String) {
        for value in self {
            value.append_to(out);
        }
    }
}

impl<T: ClassValue> ClassValue for Vec<T> {
    fn append_to(self, out: &mut String) {
        for value in self {
            value.append_to(out);
        }
    }
}

/// Merge class values; see the module docs.
#[macro_export]
macro_rules! cn {
    ($($class:expr),* $(,)?) => {{
        let mut raw = ::std::string::String::new();
        $( $crate::cn::ClassValue::append_to($class, &mut raw); )*
        $crate::cn::merge(&raw)
    }};
}

/// Function form of [`cn!`](crate::cn!) for iterators of class strings.
pub fn cn<I, S>(classes: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut raw = String::new();
    for class in classes {
        class.as_ref().append_to(&mut raw);
    }
    merge(&raw)
}

/// Merge a whitespace separated class list. Later classes override earlier
/// ones in the same utility group; exact duplicates collapse to one.
pub fn merge(raw: &str) -> String {
    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();
    for class in raw.split_whitespace().rev() {
        if seen.insert(conflict_key(class)) {
            kept.push(class);
        }
    }
    kept.reverse();
    kept.join(" ")
}

/// Fold caller-supplied `class` attributes into `base` through [`merge`] and
/// return the attribute list with exactly one leading `class` entry.
pub fn merge_class_attributes(base: &str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let mut classes = String::from(base);
    let mut rest = Vec::with_capacity(attributes.len() + 1);
    for attr in attributes {
        if attr.name == "class" && attr.namespace.is_none() {
            if let AttributeValue::Text(text) = &attr.value {
                text.as_str().append_to(&mut classes);
                continue;
            }
        }
        rest.push(attr);
    }
    rest.insert(0, Attribute::new("class", merge(&classes), None, false));
    rest
}

/// In-place [`merge_class_attributes`] for props structs forwarded to a
/// primitive.
pub fn apply_class(attributes: &mut Vec<Attribute>, base: &str) {
    *attributes = merge_class_attributes(base, std::mem::take(attributes));
}

/// Split `hover:focus:bg-red-500` into (`hover:focus:`, `bg-red-500`),
/// ignoring colons inside arbitrary values such as `bg-[url(a:b)]`.
fn split_modifiers(class: &str) -> (&str, &str) {
    let mut depth = 0i32;
    let mut split = 0;
    for (idx, ch) in class.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            ':' if depth == 0 => split = idx + 1,
            _ => {}
        }
    }
    class.split_at(split)
}

fn conflict_key(class: &str) -> String {
    let (modifiers, utility) = split_modifiers(class);
    let (important, utility) = match utility.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", utility),
    };
    let utility = utility.strip_prefix('-').unwrap_or(utility);
    match utility_group(utility) {
        Some(group) => format!("{modifiers}{important}#{group}"),
        None => class.to_string(),
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "table",
    "table-row",
    "table-cell",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const TEXT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const RADIUS_SIZES: &[&str] = &["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full"];
const BORDER_SIDES: &[&str] = &["t", "r", "b", "l", "x", "y", "s", "e"];
const BG_NON_COLOR: &[&str] = &[
    "fixed", "local", "scroll", "cover", "contain", "auto", "center", "top", "bottom", "left",
    "right", "repeat", "no-repeat", "repeat-x", "repeat-y", "none",
];

/// Prefix → group table, most specific prefix first.
const PREFIX_GROUPS: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("ps-", "ps"),
    ("pe-", "pe"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("ms-", "ms"),
    ("me-", "me"),
    ("m-", "m"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("z-", "z"),
    ("opacity-", "opacity"),
    ("leading-", "leading"),
    ("tracking-", "tracking"),
    ("cursor-", "cursor"),
    ("overflow-x-", "overflow-x"),
    ("overflow-y-", "overflow-y"),
    ("overflow-", "overflow"),
    ("items-", "align-items"),
    ("self-", "align-self"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("inset-x-", "inset-x"),
    ("inset-y-", "inset-y"),
    ("inset-", "inset"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("duration-", "duration"),
    ("ease-", "ease"),
    ("delay-", "delay"),
    ("animate-", "animate"),
    ("line-clamp-", "line-clamp"),
    ("whitespace-", "whitespace"),
    ("underline-offset-", "underline-offset"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("col-span-", "col-span"),
    ("basis-", "basis"),
    ("order-", "order"),
    ("select-", "user-select"),
    ("pointer-events-", "pointer-events"),
];

fn is_length(value: &str) -> bool {
    (!value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == '.'))
        || (value.starts_with('[')
            && ["px]", "rem]", "em]"].iter().any(|unit| value.ends_with(unit)))
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if POSITION.contains(&utility) {
        return Some("position");
    }
    match utility {
        "visible" | "invisible" | "collapse" => return Some("visibility"),
        "underline" | "overline" | "line-through" | "no-underline" => {
            return Some("text-decoration")
        }
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => return Some("text-transform"),
        "italic" | "not-italic" => return Some("font-style"),
        "sr-only" | "not-sr-only" => return Some("sr"),
        "shrink" => return Some("shrink"),
        "grow" => return Some("grow"),
        "transition" => return Some("transition"),
        "shadow" => return Some("shadow"),
        "rounded" => return Some("rounded"),
        "border" => return Some("border-w"),
        "ring" => return Some("ring-w"),
        "outline" => return Some("outline-style"),
        _ => {}
    }

    if let Some((_, group)) = PREFIX_GROUPS
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
    {
        return Some(group);
    }

    let (head, value) = utility.split_once('-')?;
    match head {
        "shrink" => Some("shrink"),
        "grow" => Some("grow"),
        "transition" => Some("transition"),
        "shadow" => Some("shadow"),
        "text" => Some(text_group(value)),
        "font" => Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        }),
        "bg" => {
            if BG_NON_COLOR.contains(&value)
                || value.starts_with("clip-")
                || value.starts_with("origin-")
                || value.starts_with("gradient")
            {
                None
            } else {
                Some("bg-color")
            }
        }
        "rounded" => rounded_group(value),
        "border" => border_group(value),
        "ring" => Some(ring_group(value)),
        "outline" => Some(outline_group(value)),
        "flex" => flex_group(value),
        _ => None,
    }
}

fn text_group(value: &str) -> &'static str {
    // `text-sm/6` carries a line height after the slash.
    let size = value.split_once('/').map_or(value, |(size, _)| size);
    if TEXT_SIZES.contains(&size) || is_length(size) {
        "text-size"
    } else if TEXT_ALIGN.contains(&value) {
        "text-align"
    } else if matches!(value, "wrap" | "nowrap" | "balance" | "pretty") {
        "text-wrap"
    } else if matches!(value, "ellipsis" | "clip") {
        "text-overflow"
    } else {
        "text-color"
    }
}

fn rounded_group(value: &str) -> Option<&'static str> {
    if RADIUS_SIZES.contains(&value) || value.starts_with('[') {
        return Some("rounded");
    }
    let corner = value.split_once('-').map_or(value, |(corner, _)| corner);
    let group = match corner {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "s" => "rounded-s",
        "e" => "rounded-e",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        "ss" => "rounded-ss",
        "se" => "rounded-se",
        "es" => "rounded-es",
        "ee" => "rounded-ee",
        _ => return None,
    };
    Some(group)
}

fn border_group(value: &str) -> Option<&'static str> {
    if is_length(value) {
        return Some("border-w");
    }
    if LINE_STYLES.contains(&value) {
        return Some("border-style");
    }
    if matches!(value, "collapse" | "separate") {
        return Some("border-collapse");
    }
    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    if BORDER_SIDES.contains(&side) {
        // Per-side borders only deduplicate against the same side.
        return match (side, rest.is_empty() || is_length(rest)) {
            ("t", true) => Some("border-w-t"),
            ("r", true) => Some("border-w-r"),
            ("b", true) => Some("border-w-b"),
            ("l", true) => Some("border-w-l"),
            ("x", true) => Some("border-w-x"),
            ("y", true) => Some("border-w-y"),
            ("s", true) => Some("border-w-s"),
            ("e", true) => Some("border-w-e"),
            _ => None,
        };
    }
    Some("border-color")
}

fn ring_group(value: &str) -> &'static str {
    if is_length(value) {
        return "ring-w";
    }
    if value == "inset" {
        return "ring-inset";
    }
    match value.strip_prefix("offset-") {
        Some(offset) if is_length(offset) => "ring-offset-w",
        Some(_) => "ring-offset-color",
        None => "ring-color",
    }
}

fn outline_group(value: &str) -> &'static str {
    if LINE_STYLES.contains(&value) {
        "outline-style"
    } else if is_length(value) {
        "outline-w"
    } else if value.starts_with("offset-") {
        "outline-offset"
    } else {
        "outline-color"
    }
}

fn flex_group(value: &str) -> Option<&'static str> {
    match value {
        "row" | "col" | "row-reverse" | "col-reverse" => Some("flex-direction"),
        "wrap" | "nowrap" | "wrap-reverse" => Some("flex-wrap"),
        "1" | "auto" | "initial" | "none" => Some("flex"),
        v if v.starts_with('[') => Some("flex"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cn;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_and_skips_empty_values() {
        assert_eq!(cn!("a", "", "  ", "b"), "a b");
    }

    #[test]
    fn duplicates_collapse_to_one() {
        assert_eq!(cn!("a b", "a"), "b a");
        assert_eq!(cn!("rounded-md", "rounded-md"), "rounded-md");
    }

    #[test]
    fn merge_is_idempotent() {
        let once = cn!("px-2 py-1 bg-muted", "px-4 hover:bg-accent", "px-4");
        assert_eq!(merge(&once), once);
    }

    #[test]
    fn conditional_values() {
        let active = true;
        assert_eq!(
            cn!("a", Some("b"), None::<&str>, (false, "c"), (active, "d")),
            "a b d"
        );
        let owned = String::from("e");
        assert_eq!(cn!(&owned, vec!["f", "g"]), "e f g");
    }

    #[test]
    fn later_padding_wins_per_axis() {
        assert_eq!(cn!("px-2 py-1", "px-4"), "py-1 px-4");
        assert_eq!(cn!("p-2", "px-4"), "p-2 px-4");
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            cn!("hover:bg-red-500 bg-blue-500", "hover:bg-green-500"),
            "bg-blue-500 hover:bg-green-500"
        );
        assert_eq!(cn!("disabled:opacity-50", "opacity-80"), "disabled:opacity-50 opacity-80");
    }

    #[test]
    fn text_size_and_color_are_separate_groups() {
        assert_eq!(cn!("text-sm text-red-500", "text-lg"), "text-red-500 text-lg");
        assert_eq!(
            cn!("text-primary-foreground", "text-white"),
            "text-white"
        );
        assert_eq!(cn!("text-left text-sm", "text-center"), "text-sm text-center");
    }

    #[test]
    fn size_with_line_height_is_still_a_size() {
        assert_eq!(cn!("text-red-500", "text-sm/6"), "text-red-500 text-sm/6");
        assert_eq!(cn!("text-base/7", "text-lg"), "text-lg");
        assert_eq!(cn!("text-red-500/50", "text-blue-500"), "text-blue-500");
    }

    #[test]
    fn ring_width_and_color_coexist() {
        assert_eq!(
            cn!("focus-visible:ring-2 focus-visible:ring-ring"),
            "focus-visible:ring-2 focus-visible:ring-ring"
        );
        assert_eq!(cn!("ring-2", "ring-4"), "ring-4");
    }

    #[test]
    fn rounded_corners_do_not_clobber_radius() {
        assert_eq!(cn!("rounded-md", "rounded-lg"), "rounded-lg");
        assert_eq!(cn!("rounded-md", "rounded-t-lg"), "rounded-md rounded-t-lg");
        assert_eq!(cn!("rounded", "rounded-none"), "rounded-none");
    }

    #[test]
    fn border_width_style_and_color() {
        assert_eq!(cn!("border", "border-2"), "border-2");
        assert_eq!(cn!("border border-input"), "border border-input");
        assert_eq!(cn!("border-input", "border-destructive"), "border-destructive");
        assert_eq!(cn!("border-b", "border-t"), "border-b border-t");
    }

    #[test]
    fn arbitrary_values_and_negatives() {
        assert_eq!(cn!("bg-[#fff]", "bg-red-500"), "bg-red-500");
        assert_eq!(cn!("w-[200px]", "w-full"), "w-full");
        assert_eq!(cn!("-mt-2", "mt-4"), "mt-4");
        assert_eq!(cn!("bg-[url(a:b)]", "bg-muted"), "bg-muted");
    }

    #[test]
    fn display_and_flex_groups() {
        assert_eq!(cn!("flex", "hidden"), "hidden");
        assert_eq!(cn!("flex flex-col", "flex-row"), "flex flex-row");
        assert_eq!(cn!("flex-1 shrink-0"), "flex-1 shrink-0");
    }

    #[test]
    fn unknown_classes_only_deduplicate() {
        assert_eq!(cn!("data-table", "card", "data-table"), "card data-table");
    }

    #[test]
    fn function_form_matches_macro() {
        assert_eq!(cn(["px-2", "px-3", "m-1"]), cn!("px-2", "px-3", "m-1"));
    }

    #[test]
    fn caller_class_attribute_overrides_base() {
        let attrs = vec![
            Attribute::new("class", "px-8 w-full", None, false),
            Attribute::new("id", "save", None, false),
        ];
        let merged = merge_class_attributes("inline-flex px-4", attrs);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "class");
        match &merged[0].value {
            AttributeValue::Text(text) => assert_eq!(text, "inline-flex px-8 w-full"),
            _ => panic!("class should be text"),
        }
        assert_eq!(merged[1].name, "id");
    }

    #[test]
    fn base_class_present_without_caller_class() {
        let merged = merge_class_attributes("badge", Vec::new());
        match &merged[0].value {
            AttributeValue::Text(text) => assert_eq!(text, "badge"),
            _ => panic!("class should be text"),
        }
    }
}
