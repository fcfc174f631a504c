//! Rendering helpers for the event loop

use ratatui::prelude::*;

use crate::core::{AppState, Bookmark, BookmarkId, DragPayload};
use crate::render::{
    render_grid, render_help_popup, render_input_popup, render_status_bar, GridLayout, GridView,
};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameAreas {
    /// Grid including its border
    pub grid: Rect,
    pub status: Rect,
}

impl FrameAreas {
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);
        Self {
            grid: chunks[0],
            status: chunks[1],
        }
    }

    /// Grid area inside the border, where tiles are laid out
    pub fn grid_inner(&self) -> Rect {
        self.grid.inner(Margin::new(1, 1))
    }
}

/// Context for rendering a frame
pub struct RenderContext<'a> {
    pub state: &'a AppState,
    pub bookmarks: &'a [Bookmark],
    pub areas: FrameAreas,
    pub layout: &'a GridLayout,
    pub dragged: Option<&'a BookmarkId>,
    pub drag_payload: Option<&'a DragPayload>,
    pub hover: Option<usize>,
    pub over_trash: bool,
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, ctx: RenderContext) {
    let view = GridView {
        bookmarks: ctx.bookmarks,
        focus: ctx.state.focus_index,
        dragged: ctx.dragged,
        hover: ctx.hover,
        over_trash: ctx.over_trash,
        show_urls: ctx.state.show_urls,
    };
    render_grid(frame, &view, ctx.layout, ctx.areas.grid);

    let focused = ctx.bookmarks.get(ctx.state.focus_index);
    render_status_bar(frame, ctx.state, focused, ctx.drag_payload, ctx.areas.status);

    render_input_popup(frame, ctx.state);
    render_help_popup(frame, ctx.state);
}
