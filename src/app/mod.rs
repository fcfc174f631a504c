//! Application module
//!
//! This module contains the main application logic, configuration,
//! and event loop for bookdash.

mod config;
mod config_file;
mod event_loop;
mod render;

pub use config::{print_help, Command, Config, ExportTarget};
pub use config_file::ConfigFile;
pub use event_loop::{run_app, AppResult};
pub use render::{render_frame, FrameAreas, RenderContext};
