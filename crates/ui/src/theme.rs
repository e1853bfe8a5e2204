use dioxus::prelude::*;

use crate::config::ui_config;
use crate::error::UiError;
use crate::variants::VariantKey;

/// Color scheme selection.
///
/// `System` follows the operating system preference and is resolved in the
/// browser at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl VariantKey for ThemeMode {
    const ALL: &'static [Self] = &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    fn key(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl ThemeMode {
    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolve to the `data-theme` attribute value.
    pub fn resolve(&self, prefers_dark: bool) -> &'static str {
        match (self, prefers_dark) {
            (ThemeMode::Light, _) => "light",
            (ThemeMode::Dark, _) => "dark",
            (ThemeMode::System, true) => "dark",
            (ThemeMode::System, false) => "light",
        }
    }

    /// The opposite explicit mode, used by light/dark toggles.
    pub fn toggled(&self, prefers_dark: bool) -> ThemeMode {
        if self.resolve(prefers_dark) == "dark" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Shared theme state provided as context by [`ThemeProvider`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode.set(mode);
        set_theme(mode);
    }
}

/// Hook to access the theme state.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

/// Injects the design token stylesheet and provides [`ThemeState`].
///
/// The persisted choice (cookie) wins over `mode`, which in turn defaults to
/// the configured theme.
#[component]
pub fn ThemeProvider(#[props(default)] mode: Option<ThemeMode>, children: Element) -> Element {
    let initial = mode.unwrap_or_else(|| ThemeMode::from_key(&ui_config().theme.mode));
    let state = use_context_provider(|| ThemeState {
        mode: Signal::new(initial),
    });
    let css = use_hook(design_tokens::css::theme_stylesheet);

    use_effect(move || {
        let mut mode = state.mode;
        spawn(async move {
            let stored = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                return match ? match[1] : "";
                "#,
            )
            .join::<String>()
            .await;
            match stored {
                Ok(key) => {
                    let resolved = if key.is_empty() {
                        *mode.peek()
                    } else {
                        ThemeMode::from_key(&key)
                    };
                    mode.set(resolved);
                    set_theme(resolved);
                }
                Err(e) => {
                    let err = UiError::script(e.to_string());
                    tracing::warn!(%err, "failed to read theme cookie");
                }
            }
        });
    });

    rsx! {
        style { dangerous_inner_html: "{css}" }
        {children}
    }
}

/// Persist the theme to a cookie and apply it to the document root.
///
/// Uses BroadcastChannel to sync across tabs when available.
pub fn set_theme(mode: ThemeMode) {
    let key = mode.key();
    document::eval(&format!(
        r#"
        (function() {{
            var mode = '{key}';
            var theme = mode === 'system'
                ? (window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light')
                : mode;
            document.cookie = 'theme=' + mode + ';path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', theme);
            try {{
                var bc = new BroadcastChannel('theme-sync');
                bc.postMessage(mode);
                bc.close();
            }} catch(e) {{}}
        }})();
        "#,
    ));
}
