//! Overlay lifecycle: the page bookkeeping behind a modal panel.
//!
//! Opening an overlay remembers the focused element, moves the overlay into
//! a body-level portal, locks page scroll, registers the Escape key, focus
//! trap and backdrop click listeners and moves focus into the panel. Closing
//! undoes exactly that, in reverse. Both directions
//! are idempotent so rapid toggling can never stack listeners or skip a
//! teardown.

mod script;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

pub use script::ScriptHost;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of one overlay instance; scopes all host-side bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayKey(u64);

impl OverlayKey {
    /// Allocate a process-unique key.
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// DOM id of the backdrop element.
    pub fn backdrop_id(&self) -> String {
        format!("ds-overlay-{}", self.0)
    }

    /// DOM id of the focusable panel element.
    pub fn panel_id(&self) -> String {
        format!("ds-overlay-{}-panel", self.0)
    }

    /// DOM id of the wrapper that is moved to `document.body` while open.
    pub fn portal_id(&self) -> String {
        format!("ds-overlay-{}-portal", self.0)
    }

    /// DOM id of the marker the portal wrapper returns in front of.
    pub fn anchor_id(&self) -> String {
        format!("ds-overlay-{}-anchor", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    EscapeKey,
    /// Keeps Tab and Shift+Tab cycling inside the panel.
    FocusTrap,
    BackdropClick,
}

/// Page operations an overlay needs. Implemented over the browser by
/// [`ScriptHost`]; tests use an in-memory document.
pub trait OverlayHost {
    /// Record whatever currently holds keyboard focus.
    fn remember_focus(&mut self, key: OverlayKey);
    /// Move focus into the overlay panel.
    fn focus_panel(&mut self, key: OverlayKey);
    /// Return focus to the element recorded by `remember_focus`.
    fn restore_focus(&mut self, key: OverlayKey);
    /// Re-parent the overlay under `document.body`, outside the subtree it
    /// was declared in.
    fn mount_portal(&mut self, key: OverlayKey);
    /// Put the overlay back where it was declared.
    fn unmount_portal(&mut self, key: OverlayKey);
    /// Suppress page scrolling, saving the previous setting.
    fn lock_scroll(&mut self, key: OverlayKey);
    /// Restore the scroll setting saved by `lock_scroll`.
    fn unlock_scroll(&mut self, key: OverlayKey);
    fn listen(&mut self, key: OverlayKey, kind: ListenerKind);
    fn unlisten(&mut self, key: OverlayKey, kind: ListenerKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Event reported by a registered listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverlayEvent {
    Key { key: String },
    /// `backdrop` is true only when the click target is the backdrop itself.
    Click { backdrop: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    EscapeKey,
    BackdropClick,
}

/// Setup order; teardown walks it backwards.
const LISTENERS: [ListenerKind; 3] = [
    ListenerKind::EscapeKey,
    ListenerKind::FocusTrap,
    ListenerKind::BackdropClick,
];

#[derive(Debug)]
pub struct OverlayLifecycle {
    key: OverlayKey,
    state: OverlayState,
}

impl OverlayLifecycle {
    pub fn new(key: OverlayKey) -> Self {
        Self {
            key,
            state: OverlayState::Closed,
        }
    }

    pub fn key(&self) -> OverlayKey {
        self.key
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Enter `Open`. Returns `false` (and touches nothing) if already open.
    pub fn open<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.is_open() {
            return false;
        }
        host.remember_focus(self.key);
        host.mount_portal(self.key);
        host.lock_scroll(self.key);
        for kind in LISTENERS {
            host.listen(self.key, kind);
        }
        host.focus_panel(self.key);
        self.state = OverlayState::Open;
        tracing::debug!(key = ?self.key, "overlay opened");
        true
    }

    /// Enter `Closed`. Returns `false` (and touches nothing) if already closed.
    pub fn close<H: OverlayHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.is_open() {
            return false;
        }
        for kind in LISTENERS.iter().rev() {
            host.unlisten(self.key, *kind);
        }
        host.unlock_scroll(self.key);
        host.unmount_portal(self.key);
        host.restore_focus(self.key);
        self.state = OverlayState::Closed;
        tracing::debug!(key = ?self.key, "overlay closed");
        true
    }

    /// Drive the lifecycle from the externally supplied `open` flag.
    pub fn sync<H: OverlayHost + ?Sized>(&mut self, open: bool, host: &mut H) -> bool {
        if open {
            self.open(host)
        } else {
            self.close(host)
        }
    }

    /// Whether `event` asks an open overlay to close.
    pub fn dismissal(&self, event: &OverlayEvent) -> Option<DismissReason> {
        if !self.is_open() {
            return None;
        }
        match event {
            OverlayEvent::Key { key } if key == "Escape" => Some(DismissReason::EscapeKey),
            OverlayEvent::Click { backdrop: true } => Some(DismissReason::BackdropClick),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// In-memory page: one focused element, a body overflow value, the
    /// overlays currently portaled to the body and the set of live listeners.
    struct FakeDocument {
        focused: String,
        overflow: String,
        portaled: Vec<OverlayKey>,
        /// Focusable elements of each panel, in tab order.
        panel_focusables: HashMap<OverlayKey, Vec<String>>,
        saved_focus: HashMap<OverlayKey, String>,
        saved_overflow: HashMap<OverlayKey, String>,
        listeners: Vec<(OverlayKey, ListenerKind)>,
    }

    impl FakeDocument {
        fn new(focused: &str) -> Self {
            Self {
                focused: focused.to_string(),
                overflow: "auto".to_string(),
                portaled: Vec::new(),
                panel_focusables: HashMap::new(),
                saved_focus: HashMap::new(),
                saved_overflow: HashMap::new(),
                listeners: Vec::new(),
            }
        }

        fn listener_count(&self, kind: ListenerKind) -> usize {
            self.listeners.iter().filter(|(_, k)| *k == kind).count()
        }

        /// Press Tab (or Shift+Tab) and let a live focus trap redirect it.
        fn tab(&mut self, shift: bool) {
            let trap = self
                .listeners
                .iter()
                .rev()
                .find(|(_, kind)| *kind == ListenerKind::FocusTrap)
                .map(|(key, _)| *key);
            let Some(key) = trap else {
                self.focused = "page".to_string();
                return;
            };
            let items = self.panel_focusables.get(&key).cloned().unwrap_or_default();
            if items.is_empty() {
                self.focused = key.panel_id();
                return;
            }
            let last = items.len() - 1;
            self.focused = match items.iter().position(|i| *i == self.focused) {
                None if shift => items[last].clone(),
                None => items[0].clone(),
                Some(0) if shift => items[last].clone(),
                Some(i) if shift => items[i - 1].clone(),
                Some(i) if i == last => items[0].clone(),
                Some(i) => items[i + 1].clone(),
            };
        }
    }

    impl OverlayHost for FakeDocument {
        fn remember_focus(&mut self, key: OverlayKey) {
            self.saved_focus.insert(key, self.focused.clone());
        }

        fn focus_panel(&mut self, key: OverlayKey) {
            self.focused = key.panel_id();
        }

        fn restore_focus(&mut self, key: OverlayKey) {
            if let Some(previous) = self.saved_focus.remove(&key) {
                self.focused = previous;
            }
        }

        fn mount_portal(&mut self, key: OverlayKey) {
            self.portaled.push(key);
        }

        fn unmount_portal(&mut self, key: OverlayKey) {
            self.portaled.retain(|k| *k != key);
        }

        fn lock_scroll(&mut self, key: OverlayKey) {
            self.saved_overflow.insert(key, self.overflow.clone());
            self.overflow = "hidden".to_string();
        }

        fn unlock_scroll(&mut self, key: OverlayKey) {
            if let Some(previous) = self.saved_overflow.remove(&key) {
                self.overflow = previous;
            }
        }

        fn listen(&mut self, key: OverlayKey, kind: ListenerKind) {
            self.listeners.push((key, kind));
        }

        fn unlisten(&mut self, key: OverlayKey, kind: ListenerKind) {
            if let Some(idx) = self.listeners.iter().position(|l| *l == (key, kind)) {
                self.listeners.remove(idx);
            }
        }
    }

    fn escape() -> OverlayEvent {
        OverlayEvent::Key {
            key: "Escape".to_string(),
        }
    }

    #[test]
    fn open_moves_focus_and_locks_scroll() {
        let key = OverlayKey::from_raw(1);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);

        assert!(overlay.open(&mut doc));
        assert_eq!(overlay.state(), OverlayState::Open);
        assert_eq!(doc.focused, key.panel_id());
        assert_eq!(doc.overflow, "hidden");
        assert_eq!(doc.saved_focus.get(&key).map(String::as_str), Some("trigger"));
        assert_eq!(doc.listener_count(ListenerKind::EscapeKey), 1);
        assert_eq!(doc.listener_count(ListenerKind::FocusTrap), 1);
        assert_eq!(doc.listener_count(ListenerKind::BackdropClick), 1);
        assert_eq!(doc.portaled, vec![key]);
    }

    #[test]
    fn escape_then_close_restores_page() {
        let key = OverlayKey::from_raw(2);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);
        overlay.open(&mut doc);

        assert_eq!(overlay.dismissal(&escape()), Some(DismissReason::EscapeKey));
        // Owner reacts to the request by passing `open = false`.
        assert!(overlay.sync(false, &mut doc));

        assert_eq!(doc.focused, "trigger");
        assert_eq!(doc.overflow, "auto");
        assert!(doc.listeners.is_empty());
        assert!(doc.portaled.is_empty());
    }

    #[test]
    fn backdrop_click_only_counts_on_the_backdrop() {
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(OverlayKey::from_raw(3));
        overlay.open(&mut doc);

        assert_eq!(
            overlay.dismissal(&OverlayEvent::Click { backdrop: true }),
            Some(DismissReason::BackdropClick)
        );
        assert_eq!(overlay.dismissal(&OverlayEvent::Click { backdrop: false }), None);
        assert_eq!(
            overlay.dismissal(&OverlayEvent::Key {
                key: "Enter".to_string()
            }),
            None
        );
    }

    #[test]
    fn closed_overlay_ignores_events() {
        let overlay = OverlayLifecycle::new(OverlayKey::from_raw(4));
        assert_eq!(overlay.dismissal(&escape()), None);
        assert_eq!(overlay.dismissal(&OverlayEvent::Click { backdrop: true }), None);
    }

    #[test]
    fn rapid_toggling_never_duplicates_listeners() {
        let key = OverlayKey::from_raw(5);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);

        for open in [true, true, false, false, true, true, false, true] {
            overlay.sync(open, &mut doc);
            for kind in LISTENERS {
                assert!(doc.listener_count(kind) <= 1);
            }
            assert!(doc.portaled.len() <= 1);
        }
        overlay.sync(false, &mut doc);
        assert!(doc.listeners.is_empty());
        assert_eq!(doc.overflow, "auto");
        assert_eq!(doc.focused, "trigger");
    }

    #[test]
    fn repeated_open_keeps_first_recorded_focus() {
        let key = OverlayKey::from_raw(6);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);
        assert!(overlay.open(&mut doc));
        assert!(!overlay.open(&mut doc));
        overlay.close(&mut doc);
        assert_eq!(doc.focused, "trigger");
    }

    #[test]
    fn close_when_closed_is_a_no_op() {
        let mut doc = FakeDocument::new("body");
        doc.overflow = "scroll".to_string();
        let mut overlay = OverlayLifecycle::new(OverlayKey::from_raw(7));
        assert!(!overlay.close(&mut doc));
        assert_eq!(doc.overflow, "scroll");
        assert_eq!(doc.focused, "body");
    }

    #[test]
    fn open_close_open_is_identical() {
        let key = OverlayKey::from_raw(8);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);

        overlay.open(&mut doc);
        let first = (doc.focused.clone(), doc.overflow.clone(), doc.listeners.clone());
        overlay.close(&mut doc);
        overlay.open(&mut doc);
        let second = (doc.focused.clone(), doc.overflow.clone(), doc.listeners.clone());
        assert_eq!(first, second);
    }

    #[test]
    fn prior_overflow_value_is_restored_verbatim() {
        let mut doc = FakeDocument::new("trigger");
        doc.overflow = "clip".to_string();
        let mut overlay = OverlayLifecycle::new(OverlayKey::from_raw(9));
        overlay.open(&mut doc);
        overlay.close(&mut doc);
        assert_eq!(doc.overflow, "clip");
    }

    #[test]
    fn events_deserialize_from_listener_payloads() {
        let key: OverlayEvent =
            serde_json::from_str(r#"{"type":"key","key":"Escape"}"#).expect("key event");
        assert_eq!(key, escape());
        let click: OverlayEvent =
            serde_json::from_str(r#"{"type":"click","backdrop":false}"#).expect("click event");
        assert_eq!(click, OverlayEvent::Click { backdrop: false });
    }

    #[test]
    fn tab_cycles_inside_the_open_panel() {
        let key = OverlayKey::from_raw(10);
        let mut doc = FakeDocument::new("trigger");
        doc.panel_focusables.insert(
            key,
            vec!["name".to_string(), "save".to_string(), "close".to_string()],
        );
        let mut overlay = OverlayLifecycle::new(key);
        overlay.open(&mut doc);

        // Focus starts on the panel itself, outside the focusable list.
        doc.tab(false);
        assert_eq!(doc.focused, "name");
        doc.tab(false);
        doc.tab(false);
        assert_eq!(doc.focused, "close");
        doc.tab(false);
        assert_eq!(doc.focused, "name");
        doc.tab(true);
        assert_eq!(doc.focused, "close");

        overlay.close(&mut doc);
        assert_eq!(doc.focused, "trigger");
        doc.tab(false);
        assert_eq!(doc.focused, "page");
    }

    #[test]
    fn panel_without_focusables_keeps_focus() {
        let key = OverlayKey::from_raw(11);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);
        overlay.open(&mut doc);
        doc.tab(true);
        assert_eq!(doc.focused, key.panel_id());
    }

    #[test]
    fn portal_is_held_once_per_open() {
        let key = OverlayKey::from_raw(12);
        let mut doc = FakeDocument::new("trigger");
        let mut overlay = OverlayLifecycle::new(key);
        for _ in 0..3 {
            overlay.sync(true, &mut doc);
        }
        assert_eq!(doc.portaled, vec![key]);
        overlay.sync(false, &mut doc);
        overlay.sync(false, &mut doc);
        assert!(doc.portaled.is_empty());
    }

    #[test]
    fn keys_are_unique() {
        let a = OverlayKey::next();
        let b = OverlayKey::next();
        assert_ne!(a, b);
        assert_ne!(a.panel_id(), b.panel_id());
    }
}
