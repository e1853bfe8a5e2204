use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::UiError;
use crate::table::DEFAULT_PAGE_SIZE;

static CONFIG: OnceLock<UiConfig> = OnceLock::new();

/// Library-wide defaults, read once at startup.
///
/// Every field is optional in the file; missing sections take their
/// defaults. Keys are resolved with the same fallback rules as component
/// props, so an unknown `side` or `mode` is not an error.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub sheet: SheetConfig,
    pub table: TableConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `light`, `dark` or `system`.
    pub mode: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "light".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Edge sheets slide in from when a `side` prop is not given.
    pub side: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            side: "right".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl UiConfig {
    /// Parse a TOML document.
    pub fn parse(text: &str) -> Result<Self, UiError> {
        toml::from_str(text).map_err(|e| UiError::config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, UiError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::config(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }
}

/// Load the config file into the global slot. Only the first call has an
/// effect. A missing or unparsable file logs a warning and uses defaults.
pub fn load_ui_config(path: impl AsRef<Path>) -> &'static UiConfig {
    let path = path.as_ref();
    CONFIG.get_or_init(|| match UiConfig::from_path(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), ?config, "ui config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("{e}; using default ui config");
            UiConfig::default()
        }
    })
}

/// The loaded config, or defaults when [`load_ui_config`] has not run.
pub fn ui_config() -> &'static UiConfig {
    static DEFAULT: OnceLock<UiConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(UiConfig::default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_all_defaults() {
        assert_eq!(UiConfig::parse("").expect("parses"), UiConfig::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config = UiConfig::parse(
            r#"
            [theme]
            mode = "dark"

            [table]
            page_size = 25
            "#,
        )
        .expect("parses");
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.sheet, SheetConfig::default());
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = UiConfig::parse("[table]\npage_size = \"many\"").unwrap_err();
        assert_eq!(err.kind, UiErrorKind::Config);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = UiConfig::from_path(Path::new("/nonexistent/ui.toml")).unwrap_err();
        assert_eq!(err.kind, UiErrorKind::Config);
        assert!(err.message.contains("/nonexistent/ui.toml"));
    }

    #[test]
    fn defaults_without_loading() {
        assert_eq!(ui_config().table.page_size, DEFAULT_PAGE_SIZE);
    }
}
