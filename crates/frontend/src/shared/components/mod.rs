pub mod filter_panel;

pub use filter_panel::{FilterPanel, FilterTag};
