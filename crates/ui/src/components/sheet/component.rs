use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

use crate::cn::merge_class_attributes;
use crate::components::button::{button_variants, ButtonSize, ButtonVariant};
use crate::config::ui_config;
use crate::overlay::{OverlayEvent, OverlayKey, OverlayLifecycle, ScriptHost};
use crate::variants::{VariantAxis, VariantKey, VariantTable};

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl VariantKey for SheetSide {
    const ALL: &'static [Self] = &[Self::Top, Self::Right, Self::Bottom, Self::Left];

    fn key(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }
}

pub const SHEET_VARIANTS: VariantTable = VariantTable {
    base: "bg-background fixed z-50 flex flex-col gap-4 shadow-lg outline-none transition ease-in-out",
    axes: &[VariantAxis {
        name: "side",
        options: &[
            ("top", "inset-x-0 top-0 h-auto border-b"),
            ("right", "inset-y-0 right-0 h-full w-3/4 border-l sm:max-w-sm"),
            ("bottom", "inset-x-0 bottom-0 h-auto border-t"),
            ("left", "inset-y-0 left-0 h-full w-3/4 border-r sm:max-w-sm"),
        ],
        default: "right",
    }],
    compounds: &[],
};

const OVERLAY_CLASS: &str = "fixed inset-0 z-50 bg-black/50";

/// Shared with the parts rendered inside an open sheet.
#[derive(Clone, Copy)]
struct SheetContext {
    key: OverlayKey,
    on_open_change: EventHandler<bool>,
}

fn title_id(key: OverlayKey) -> String {
    format!("{}-title", key.backdrop_id())
}

/// A panel that slides over the page from one edge.
///
/// Fully controlled: the owner holds `open` and updates it from
/// `on_open_change`. While open, page scroll is locked, focus moves into the
/// panel, and Escape or a click on the dimmed backdrop requests a close.
/// Focus returns to whatever had it before the sheet opened.
///
/// While open, the backdrop and panel are moved under `document.body` so no
/// transformed or clipping ancestor affects them. Nothing but the portal
/// wrapper is rendered on the server or before the first client paint.
#[component]
pub fn Sheet(
    open: bool,
    on_open_change: EventHandler<bool>,
    #[props(default)] side: Option<SheetSide>,
    #[props(default = true)] show_close: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let key = use_hook(OverlayKey::next);
    let lifecycle = use_hook(|| Rc::new(RefCell::new(OverlayLifecycle::new(key))));
    let listener = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    use_context_provider(|| SheetContext {
        key,
        on_open_change,
    });

    let mut mounted = use_signal(|| false);
    use_effect(move || mounted.set(true));

    {
        let lifecycle = lifecycle.clone();
        let listener = listener.clone();
        use_effect(use_reactive((&open,), move |(open,)| {
            let active = open && mounted();
            let mut host = ScriptHost::new(key);
            if !lifecycle.borrow_mut().sync(active, &mut host) {
                return;
            }
            if let Some(task) = listener.take() {
                task.cancel();
            }
            let mut eval = host.run();
            if !active {
                return;
            }
            let lifecycle = lifecycle.clone();
            listener.set(Some(spawn(async move {
                while let Ok(event) = eval.recv::<OverlayEvent>().await {
                    let reason = lifecycle.borrow().dismissal(&event);
                    if let Some(reason) = reason {
                        tracing::debug!(?key, ?reason, "sheet dismissed");
                        on_open_change.call(false);
                    }
                }
            })));
        }));
    }

    use_drop(move || {
        if let Some(task) = listener.take() {
            task.cancel();
        }
        let mut host = ScriptHost::new(key);
        if lifecycle.borrow_mut().close(&mut host) {
            let _ = host.run();
        }
    });

    let visible = open && mounted();
    let content = if visible {
        let side = side.unwrap_or_else(|| SheetSide::from_key(&ui_config().sheet.side));
        let class = SHEET_VARIANTS.resolve(&[("side", side.key())]);
        let merged = merge_class_attributes(&class, attributes);
        rsx! {
            div {
                id: key.backdrop_id(),
                class: OVERLAY_CLASS,
                "data-slot": "sheet-overlay",
                "data-state": "open",
            }
            div {
                id: key.panel_id(),
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: title_id(key),
                tabindex: "-1",
                "data-slot": "sheet-content",
                "data-state": "open",
                "data-side": side.key(),
                ..merged,
                {children}
                if show_close {
                    SheetClose {}
                }
            }
        }
    } else {
        rsx! {}
    };

    // The hidden markers stay in place while the wrapper between them is
    // portaled, so siblings never anchor on a node living under `body`.
    rsx! {
        span { hidden: true, "data-slot": "sheet-anchor" }
        div {
            id: key.portal_id(),
            class: "contents",
            "data-slot": "sheet-portal",
            {content}
        }
        span { id: key.anchor_id(), hidden: true, "data-slot": "sheet-anchor" }
    }
}

/// Button that asks the owner to open (or close) a sheet.
#[component]
pub fn SheetTrigger(
    open: bool,
    on_open_change: EventHandler<bool>,
    #[props(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes(
        &button_variants(variant, ButtonSize::Default),
        attributes,
    );

    rsx! {
        button {
            r#type: "button",
            "data-slot": "sheet-trigger",
            aria_haspopup: "dialog",
            aria_expanded: if open { "true" } else { "false" },
            onclick: move |_| on_open_change.call(!open),
            ..merged,
            {children}
        }
    }
}

/// Scrollable body area between header and footer.
#[component]
pub fn SheetContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("flex-1 overflow-y-auto px-4", attributes);

    rsx! {
        div {
            "data-slot": "sheet-body",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("flex flex-col gap-1.5 p-4", attributes);

    rsx! {
        div {
            "data-slot": "sheet-header",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("mt-auto flex flex-col gap-2 p-4", attributes);

    rsx! {
        div {
            "data-slot": "sheet-footer",
            ..merged,
            {children}
        }
    }
}

/// Title of the sheet; the dialog is labelled by it.
#[component]
pub fn SheetTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let id = try_use_context::<SheetContext>().map(|ctx| title_id(ctx.key));
    let merged = merge_class_attributes("text-foreground font-semibold", attributes);

    rsx! {
        h2 {
            id,
            "data-slot": "sheet-title",
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SheetDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class_attributes("text-muted-foreground text-sm", attributes);

    rsx! {
        p {
            "data-slot": "sheet-description",
            ..merged,
            {children}
        }
    }
}

/// Close button. Inside a [`Sheet`] it requests a close from the owner;
/// `on_close` overrides that.
#[component]
pub fn SheetClose(
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = try_use_context::<SheetContext>();
    let merged = merge_class_attributes(
        "ring-offset-background focus:ring-ring absolute top-4 right-4 rounded-xs opacity-70 transition-opacity hover:opacity-100 focus:ring-2 focus:ring-offset-2 focus:outline-hidden disabled:pointer-events-none",
        attributes,
    );

    rsx! {
        button {
            r#type: "button",
            "data-slot": "sheet-close",
            aria_label: "Close",
            onclick: move |_| match (&on_close, &ctx) {
                (Some(handler), _) => handler.call(()),
                (None, Some(ctx)) => ctx.on_open_change.call(false),
                (None, None) => tracing::warn!("SheetClose rendered outside a Sheet"),
            },
            ..merged,
            Icon::<LdX> { icon: LdX, width: 16, height: 16, class: "size-4" }
            span { class: "sr-only", "Close" }
        }
    }
}
