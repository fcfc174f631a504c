//! Main event loop for the application

use std::cell::Cell;
use std::io::Stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::prelude::*;

use crate::app::Config;
use crate::core::{AppState, ViewMode};
use crate::handler::{
    action::{handle_action, handle_input_key, handle_mouse_action, handle_paste, ActionContext},
    key::handle_key_event,
    mouse::{handle_mouse_event, ClickDetector, MouseAction, PointerDrag},
};
use crate::render::GridLayout;

use super::render::{render_frame, FrameAreas, RenderContext};

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut store = config.open_store();
    let mut state = AppState::new();
    state.mouse_enabled = config.mouse_enabled;
    state.show_urls = config.show_urls;

    // Store changes (key, mouse or import) all land here
    let changed = Rc::new(Cell::new(false));
    let subscription = {
        let changed = Rc::clone(&changed);
        store.subscribe(move |snapshot| {
            log::debug!("store: {} bookmark(s)", snapshot.len());
            changed.set(true);
        })
    };

    let mut drag = PointerDrag::new();
    let mut click_detector = ClickDetector::new();

    let action_context = ActionContext {
        icons: config.icons.clone(),
        launcher: config.launcher.clone(),
        export_dir: std::env::current_dir()
            .ok()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| ".".into()),
    };

    log::info!(
        "dashboard: {} bookmark(s) from {}",
        store.len(),
        config.data_dir.display()
    );

    loop {
        if changed.replace(false) {
            state.clamp_focus(store.len());
        }

        // Layout is computed before drawing so mouse events hit the same tiles
        let size = terminal.size()?;
        let areas = FrameAreas::new(Rect::new(0, 0, size.width, size.height));
        let layout = GridLayout::new(
            areas.grid_inner(),
            config.tile_size,
            store.len(),
            state.focus_index,
        );

        let payload = drag.payload(&store);
        let render_context = RenderContext {
            state: &state,
            bookmarks: store.bookmarks(),
            areas,
            layout: &layout,
            dragged: drag.dragged_id(),
            drag_payload: payload.as_ref(),
            hover: drag.hover_index(&layout),
            over_trash: drag.over_trash(&layout),
        };
        terminal.draw(|frame| render_frame(frame, render_context))?;

        // Handle events (60ms timeout balances responsiveness and CPU usage)
        if event::poll(Duration::from_millis(60))? {
            match event::read()? {
                Event::Key(key) => {
                    // Handle input buffer updates first
                    if handle_input_key(&mut state, key) {
                        continue;
                    }
                    let action = handle_key_event(&state, key);
                    let stride = layout.row_stride();
                    handle_action(
                        action,
                        &mut state,
                        &mut store,
                        &mut drag,
                        stride,
                        &action_context,
                    );
                }
                Event::Mouse(mouse) if state.mouse_enabled => {
                    let action = handle_mouse_event(mouse, &mut click_detector, &layout);
                    if matches!(action, MouseAction::Drag { .. }) {
                        click_detector.reset();
                    }
                    handle_mouse_action(
                        action,
                        &mut state,
                        &mut store,
                        &mut drag,
                        &layout,
                        &action_context,
                    );
                }
                Event::Paste(text) => handle_paste(&mut state, &text),
                _ => {}
            }
        }

        // A popup over an active drag would swallow its release
        if state.mode != ViewMode::Browse && drag.cancel() {
            log::debug!("drag: cancelled by popup");
        }

        if state.should_quit {
            store.unsubscribe(subscription);
            return Ok(AppResult {
                exit_code: crate::integrate::exit_code::SUCCESS,
            });
        }
    }
}
