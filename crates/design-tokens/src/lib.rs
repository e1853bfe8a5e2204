//! Design tokens shared by every component in the `ui` crate.
//!
//! All values are compile-time constants. Components never read them
//! directly; they flow into the stylesheet through [`css::theme_stylesheet`]
//! and from there into utility classes such as `bg-primary`.

pub mod colors;
pub mod css;
pub mod export;
pub mod map;
pub mod scales;
pub mod semantic;
pub mod typography;

pub use colors::{palette, ColorScale, PALETTES, STEPS};
pub use map::TokenMap;
pub use scales::{BORDER_RADIUS, BORDER_WIDTH, SHADOWS, SIZES, SPACING, TRANSITIONS};
pub use semantic::{SemanticPalette, DARK, LIGHT};
pub use typography::TYPOGRAPHY;
