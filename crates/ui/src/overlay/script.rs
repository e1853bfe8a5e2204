use std::fmt::Write;

use dioxus::prelude::*;

use super::{ListenerKind, OverlayHost, OverlayKey};

/// Browser [`OverlayHost`] that batches every operation into one script.
///
/// State lives on `window.__dsOverlays[<backdrop id>]` so a teardown script
/// can find what the setup script stored. Listener callbacks report back
/// through the eval channel as JSON [`OverlayEvent`](super::OverlayEvent)s.
pub struct ScriptHost {
    script: String,
}

impl ScriptHost {
    pub fn new(key: OverlayKey) -> Self {
        let id = key.backdrop_id();
        let mut script = String::new();
        let _ = writeln!(
            script,
            "var store = window.__dsOverlays || (window.__dsOverlays = {{}});"
        );
        let _ = writeln!(script, "var r = store[\"{id}\"] || (store[\"{id}\"] = {{}});");
        Self { script }
    }

    /// The accumulated script.
    pub fn script(&self) -> &str {
        &self.script
    }

    fn push(&mut self, line: &str) {
        self.script.push_str(line);
        self.script.push('\n');
    }

    /// Send the script to the page. The returned handle receives listener
    /// events for as long as the listeners stay registered.
    pub fn run(self) -> document::Eval {
        document::eval(&self.script)
    }
}

/// Elements a focus trap cycles through.
const FOCUSABLE: &str =
    "a[href], button, input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Frames to wait for an element the current render has not created yet.
const READY_FRAMES: u32 = 60;

impl OverlayHost for ScriptHost {
    fn remember_focus(&mut self, _key: OverlayKey) {
        self.push("r.focus = document.activeElement;");
    }

    fn mount_portal(&mut self, key: OverlayKey) {
        let portal = key.portal_id();
        let _ = writeln!(
            self.script,
            "r.open = true; (function place(n) {{ if (!r.open) {{ return; }} \
             var w = document.getElementById(\"{portal}\"); \
             if (w) {{ if (w.parentNode !== document.body) {{ document.body.appendChild(w); }} }} \
             else if (n > 0) {{ requestAnimationFrame(function () {{ place(n - 1); }}); }} }})({READY_FRAMES});"
        );
    }

    fn unmount_portal(&mut self, key: OverlayKey) {
        let portal = key.portal_id();
        let anchor = key.anchor_id();
        let _ = writeln!(
            self.script,
            "r.open = false; (function () {{ var w = document.getElementById(\"{portal}\"); \
             var a = document.getElementById(\"{anchor}\"); \
             if (w && a && a.parentNode && w.parentNode === document.body) {{ a.parentNode.insertBefore(w, a); }} }})();"
        );
    }

    fn focus_panel(&mut self, key: OverlayKey) {
        let panel = key.panel_id();
        let _ = writeln!(
            self.script,
            "(function focus(n) {{ if (!r.open) {{ return; }} var p = document.getElementById(\"{panel}\"); \
             if (p) {{ if (!p.contains(document.activeElement)) {{ p.focus({{ preventScroll: true }}); }} }} \
             else if (n > 0) {{ requestAnimationFrame(function () {{ focus(n - 1); }}); }} }})({READY_FRAMES});"
        );
    }

    fn restore_focus(&mut self, _key: OverlayKey) {
        self.push(
            "if (r.focus && typeof r.focus.focus === \"function\") { r.focus.focus(); } r.focus = null;",
        );
    }

    fn lock_scroll(&mut self, _key: OverlayKey) {
        self.push(
            "if (r.overflow === undefined) { r.overflow = document.body.style.overflow; } \
             document.body.style.overflow = \"hidden\";",
        );
    }

    fn unlock_scroll(&mut self, _key: OverlayKey) {
        self.push(
            "if (r.overflow !== undefined) { document.body.style.overflow = r.overflow; delete r.overflow; }",
        );
    }

    fn listen(&mut self, key: OverlayKey, kind: ListenerKind) {
        match kind {
            ListenerKind::EscapeKey => self.push(
                "if (!r.onKey) { r.onKey = function (e) { if (e.key === \"Escape\") { \
                 dioxus.send({ type: \"key\", key: e.key }); } }; \
                 document.addEventListener(\"keydown\", r.onKey); }",
            ),
            ListenerKind::FocusTrap => {
                let id = key.backdrop_id();
                let panel = key.panel_id();
                // Only the most recently opened overlay traps focus.
                let _ = writeln!(
                    self.script,
                    "if (!r.onTrap) {{ var traps = window.__dsTraps || (window.__dsTraps = []); traps.push(\"{id}\"); \
                     r.onTrap = function (e) {{ if (e.key !== \"Tab\" || traps[traps.length - 1] !== \"{id}\") {{ return; }} \
                     var p = document.getElementById(\"{panel}\"); if (!p) {{ return; }} \
                     var items = Array.prototype.filter.call(p.querySelectorAll(\"{FOCUSABLE}\"), \
                     function (el) {{ return !el.disabled && el.getClientRects().length > 0; }}); \
                     e.preventDefault(); if (items.length === 0) {{ p.focus(); return; }} \
                     var i = items.indexOf(document.activeElement); var n = items.length; \
                     var next = i < 0 ? (e.shiftKey ? n - 1 : 0) : (i + (e.shiftKey ? n - 1 : 1)) % n; \
                     items[next].focus(); }}; \
                     document.addEventListener(\"keydown\", r.onTrap); }}"
                );
            }
            ListenerKind::BackdropClick => {
                // Resolved per click so the listener works before the
                // backdrop element has been rendered.
                let id = key.backdrop_id();
                let _ = writeln!(
                    self.script,
                    "if (!r.onClick) {{ r.onClick = function (e) {{ if (e.target && e.target.id === \"{id}\") {{ \
                     dioxus.send({{ type: \"click\", backdrop: true }}); }} }}; \
                     document.addEventListener(\"click\", r.onClick); }}"
                );
            }
        }
    }

    fn unlisten(&mut self, key: OverlayKey, kind: ListenerKind) {
        match kind {
            ListenerKind::EscapeKey => self.push(
                "if (r.onKey) { document.removeEventListener(\"keydown\", r.onKey); r.onKey = null; }",
            ),
            ListenerKind::FocusTrap => {
                let id = key.backdrop_id();
                let _ = writeln!(
                    self.script,
                    "if (r.onTrap) {{ document.removeEventListener(\"keydown\", r.onTrap); r.onTrap = null; \
                     var traps = window.__dsTraps || []; var at = traps.lastIndexOf(\"{id}\"); \
                     if (at >= 0) {{ traps.splice(at, 1); }} }}"
                );
            }
            ListenerKind::BackdropClick => self.push(
                "if (r.onClick) { document.removeEventListener(\"click\", r.onClick); r.onClick = null; }",
            ),
        }
    }
}
