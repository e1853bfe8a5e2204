// Phase 1: Standalone components (no primitives)
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod skeleton;
pub mod table;
pub mod textarea;
pub mod typography;

// Phase 2A: Simple primitive wrappers
pub mod avatar;
pub mod checkbox;
pub mod label;
pub mod progress;
pub mod separator;
pub mod switch;

// Phase 2B: Compound primitive wrappers
pub mod accordion;
pub mod select;
pub mod tooltip;

// Phase 3: Built on the overlay lifecycle and the table engine
pub mod data_table;
pub mod sheet;

// Re-exports for convenience
pub use accordion::*;
pub use alert::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use data_table::*;
pub use input::*;
pub use label::*;
pub use progress::*;
pub use select::*;
pub use separator::*;
pub use sheet::*;
pub use skeleton::*;
pub use switch::*;
pub use table::*;
pub use textarea::*;
pub use tooltip::*;
pub use typography::*;
