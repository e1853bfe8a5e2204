use dioxus::prelude::*;

/// Render a root component to static HTML, the way a server pass would.
pub(crate) fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Value of the first `class="…"` attribute in `html`.
pub(crate) fn first_class(html: &str) -> &str {
    html.split_once("class=\"")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(class, _)| class)
        .unwrap_or("")
}
