//! Render module - UI rendering

pub mod grid;
pub mod layout;
pub mod status;

pub use grid::{render_grid, truncate, GridView};
pub use layout::GridLayout;
pub use status::{render_help_popup, render_input_popup, render_status_bar};
