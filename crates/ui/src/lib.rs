//! Component library: class merging, variants, overlays, tables and the
//! styled components built on them.

pub mod cn;
pub mod components;
pub mod config;
pub mod controllable;
pub mod error;
pub mod overlay;
pub mod table;
pub mod theme;
pub mod variants;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{load_ui_config, ui_config, UiConfig};
pub use controllable::use_controllable;
pub use error::{UiError, UiErrorKind};
pub use theme::{set_theme, use_theme, ThemeMode, ThemeProvider, ThemeState};
pub use variants::{VariantKey, VariantTable};
