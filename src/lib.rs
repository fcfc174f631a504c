//! bookdash - A personal bookmark dashboard for the terminal
//!
//! Bookmarks are shown as a grid of tiles that can be opened, added,
//! removed and reordered by dragging. The collection persists as JSON in
//! the data directory and can be exported to and imported from backup files.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod render;
