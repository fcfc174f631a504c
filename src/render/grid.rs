//! Bookmark tile grid rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::GridLayout;
use crate::core::{Bookmark, BookmarkId};

/// What the grid needs to know about the current frame
pub struct GridView<'a> {
    pub bookmarks: &'a [Bookmark],
    pub focus: usize,
    /// Tile being dragged, if any
    pub dragged: Option<&'a BookmarkId>,
    /// Tile under the pointer while dragging
    pub hover: Option<usize>,
    /// Pointer is over the discard zone while dragging
    pub over_trash: bool,
    pub show_urls: bool,
}

/// Render the grid border, every visible tile and the discard zone
pub fn render_grid(frame: &mut Frame, view: &GridView, layout: &GridLayout, area: Rect) {
    let title = format!(" Bookmarks ({}) ", view.bookmarks.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(block, area);

    if view.bookmarks.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("No bookmarks yet"),
            Line::from(Span::styled(
                "Press a to add one, i to import a backup",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout.area());
    }

    for index in layout.visible_range() {
        let (Some(bookmark), Some(rect)) = (view.bookmarks.get(index), layout.cell_rect(index))
        else {
            continue;
        };
        render_tile(frame, view, bookmark, index, rect);
    }

    if view.dragged.is_some() {
        render_trash(frame, layout.trash_rect(), view.over_trash);
    }
}

fn render_tile(frame: &mut Frame, view: &GridView, bookmark: &Bookmark, index: usize, rect: Rect) {
    let is_dragged = view.dragged == Some(&bookmark.id);
    let is_hover = view.hover == Some(index) && !is_dragged;
    let is_focused = view.dragged.is_none() && view.focus == index;

    let border_style = if is_dragged {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if is_hover {
        Style::default().fg(Color::Magenta)
    } else if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = rect.width.saturating_sub(2) as usize;
    let glyph_style = if is_dragged {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(bookmark.glyph().to_string(), glyph_style)),
        Line::from(truncate(&bookmark.title, inner_width)),
    ];
    if view.show_urls {
        lines.push(Line::from(Span::styled(
            truncate(&bookmark.url, inner_width),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let tile = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(tile, rect);
}

fn render_trash(frame: &mut Frame, rect: Rect, active: bool) {
    let style = if active {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red)
    };
    let trash = Paragraph::new("Remove")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(trash, rect);
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
