//! Status bar, input popup and about popup rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{AppState, Bookmark, DragPayload, PendingAction, ViewMode};

/// Render the status bar
///
/// Left: status message, or the dragged tile while a drag is active.
/// Right: the focused bookmark's URL.
pub fn render_status_bar(
    frame: &mut Frame,
    state: &AppState,
    focused: Option<&Bookmark>,
    drag: Option<&DragPayload>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_content = match drag {
        Some(payload) => Line::from(vec![
            Span::styled(
                " Moving ",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            Span::styled(
                format!(" {} ", payload.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("(from #{})", payload.original_index + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => {
            let message = state.message.as_deref().unwrap_or("? for help");
            Line::from(format!(" {}", message))
        }
    };
    let msg_widget = Paragraph::new(left_content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    let info = focused
        .map(|b| b.url.clone())
        .unwrap_or_else(|| "--".to_string());
    let info_widget = Paragraph::new(info).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);
}

/// Render input or confirmation popup based on current mode
pub fn render_input_popup(frame: &mut Frame, state: &AppState) {
    match &state.mode {
        ViewMode::Input {
            purpose,
            buffer,
            cursor,
        } => {
            draw_input_popup(frame, purpose.prompt(), buffer, *cursor);
        }
        ViewMode::Confirm { action } => {
            draw_confirm_popup(frame, action);
        }
        _ => {}
    }
}

/// Draw a simple input popup with the terminal cursor at `cursor`
///
/// Long input scrolls horizontally so the cursor stays inside the box.
fn draw_input_popup(frame: &mut Frame, title: &str, content: &str, cursor: usize) {
    let area = centered_rect(60, 3, frame.area());
    let inner_width = area.width.saturating_sub(2);
    let cursor = cursor.min(content.chars().count()) as u16;
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .scroll((0, scroll))
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(Clear, area);
    frame.render_widget(input, area);

    if inner_width > 0 {
        let cursor_x = area.x.saturating_add(1).saturating_add(cursor - scroll);
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Draw confirmation popup
fn draw_confirm_popup(frame: &mut Frame, action: &PendingAction) {
    match action {
        PendingAction::Import { path, records } => {
            let content = vec![
                Line::from(vec![Span::styled(
                    format!("Replace all bookmarks with {} imported?", records.len()),
                    Style::default().add_modifier(Modifier::BOLD),
                )]),
                Line::from(Span::styled(
                    format!("  {}", path.display()),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                confirm_hint(),
            ];
            let area = centered_rect(60, (content.len() + 2) as u16, frame.area());
            let popup = Paragraph::new(content).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Confirm Import "),
            );
            frame.render_widget(Clear, area);
            frame.render_widget(popup, area);
        }
    }
}

fn confirm_hint() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to confirm, "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to cancel"),
    ])
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render about/help popup overlay
pub fn render_help_popup(frame: &mut Frame, state: &AppState) {
    if !matches!(state.mode, ViewMode::Help) {
        return;
    }

    let heading = |text: &'static str| {
        Line::from(vec![Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_lines = vec![
        Line::from(Span::styled(
            format!("bookdash {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Your bookmarks persist in the data directory."),
        Line::from("Export a backup before moving machines."),
        Line::from(""),
        heading("Navigation"),
        Line::from("  h/l/\u{2190}/\u{2192}  Previous / next tile"),
        Line::from("  j/k/\u{2193}/\u{2191}  Next / previous row"),
        Line::from("  g/G        First / last tile"),
        Line::from(""),
        heading("Bookmarks"),
        Line::from("  a          Add bookmark"),
        Line::from("  Enter/o    Open"),
        Line::from("  y          Copy URL"),
        Line::from("  d/Del      Remove"),
        Line::from("  </>        Move left / right"),
        Line::from(""),
        heading("Backup"),
        Line::from("  e          Export"),
        Line::from("  i          Import"),
        Line::from(""),
        heading("Mouse"),
        Line::from("  Drag a tile to reorder it"),
        Line::from("  Drop on Remove to delete it"),
        Line::from("  Double-click to open"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let height = (help_lines.len() + 2) as u16; // +2 for border
    let area = centered_rect(50, height, frame.area());

    let popup = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" About ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
