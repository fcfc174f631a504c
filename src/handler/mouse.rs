//! Mouse input handling and pointer drag translation
//!
//! crossterm reports a press, a stream of drag events with the button held,
//! then a release. [`PointerDrag`] turns that stream into calls on the
//! [`DragController`]: the session starts on the first movement after a
//! press on a tile, every movement over a tile is a hover, and the release
//! is the drop.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};

use crate::core::{
    BookmarkId, BookmarkStore, DragController, DragPayload, DropOutcome, DropTarget,
    HoverOutcome,
};
use crate::render::GridLayout;

/// Actions triggered by mouse events
#[derive(Debug, Clone, PartialEq)]
pub enum MouseAction {
    None,
    /// Left button pressed on a tile
    Press { index: usize },
    /// Second press on the same tile within the threshold
    DoubleClick { index: usize },
    /// Pointer moved with the left button held
    Drag { column: u16, row: u16 },
    /// Left button released
    Release { column: u16, row: u16 },
    ScrollUp(usize),
    ScrollDown(usize),
}

/// Detects double-clicks by tracking click timing
pub struct ClickDetector {
    last_click: Option<(Instant, usize)>,
    threshold: Duration,
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ClickDetector {
    pub fn new() -> Self {
        Self {
            last_click: None,
            threshold: Duration::from_millis(500),
        }
    }

    /// Returns true if this click on tile `index` forms a double-click
    pub fn click(&mut self, index: usize) -> bool {
        let now = Instant::now();
        let is_double = self
            .last_click
            .map(|(t, i)| i == index && now.duration_since(t) < self.threshold)
            .unwrap_or(false);

        self.last_click = if is_double { None } else { Some((now, index)) };
        is_double
    }

    /// Forget the last click (a drag in between is not half a double-click)
    pub fn reset(&mut self) {
        self.last_click = None;
    }
}

/// Process a mouse event and return the resulting action
pub fn handle_mouse_event(
    event: MouseEvent,
    click_detector: &mut ClickDetector,
    layout: &GridLayout,
) -> MouseAction {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.hit_test(event.column, event.row) {
                Some(index) if click_detector.click(index) => MouseAction::DoubleClick { index },
                Some(index) => MouseAction::Press { index },
                None => MouseAction::None,
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag {
            column: event.column,
            row: event.row,
        },
        MouseEventKind::Up(MouseButton::Left) => MouseAction::Release {
            column: event.column,
            row: event.row,
        },
        MouseEventKind::ScrollUp => MouseAction::ScrollUp(1),
        MouseEventKind::ScrollDown => MouseAction::ScrollDown(1),
        _ => MouseAction::None,
    }
}

/// Pointer gesture bookkeeping around the drag state machine
#[derive(Debug, Default)]
pub struct PointerDrag {
    controller: DragController,
    /// Tile under the last press, until the button is released
    pressed: Option<BookmarkId>,
    /// Last pointer position while the button is held
    pointer: Option<(u16, u16)>,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn dragged_id(&self) -> Option<&BookmarkId> {
        self.controller.dragged_id()
    }

    /// Remember the pressed tile; the drag starts on the first movement
    pub fn press(&mut self, store: &BookmarkStore, index: usize) {
        self.pressed = store.bookmarks().get(index).map(|b| b.id.clone());
        self.pointer = None;
    }

    /// Pointer moved with the button held
    pub fn drag_to(
        &mut self,
        store: &mut BookmarkStore,
        layout: &GridLayout,
        column: u16,
        row: u16,
    ) -> HoverOutcome {
        let pointer_x = column as f32;
        if !self.controller.is_dragging() {
            let Some(id) = self.pressed.clone() else {
                return HoverOutcome::Ignored;
            };
            if !self.controller.begin(store, &id, pointer_x) {
                self.pressed = None;
                return HoverOutcome::Ignored;
            }
        }
        self.pointer = Some((column, row));

        if layout.in_trash(column, row) {
            return HoverOutcome::Ignored;
        }
        let Some(index) = layout.hit_test(column, row) else {
            return HoverOutcome::Ignored;
        };
        let (Some(candidate), Some(bounds)) = (
            store.bookmarks().get(index).map(|b| b.id.clone()),
            layout.hit_box(index),
        ) else {
            return HoverOutcome::Ignored;
        };
        self.controller.hover(store, &candidate, bounds, pointer_x)
    }

    /// Button released at (`column`, `row`)
    pub fn release(
        &mut self,
        store: &mut BookmarkStore,
        layout: &GridLayout,
        column: u16,
        row: u16,
    ) -> DropOutcome {
        self.pressed = None;
        self.pointer = None;
        let target = if layout.in_trash(column, row) {
            DropTarget::Discard
        } else if layout.in_grid(column, row) {
            DropTarget::Grid
        } else {
            DropTarget::Outside
        };
        self.controller.drop_on(store, target)
    }

    /// Abort any gesture without touching the store
    pub fn cancel(&mut self) -> bool {
        self.pressed = None;
        self.pointer = None;
        self.controller.cancel()
    }

    /// Tile under the pointer while dragging
    pub fn hover_index(&self, layout: &GridLayout) -> Option<usize> {
        if !self.is_dragging() {
            return None;
        }
        let (column, row) = self.pointer?;
        layout.hit_test(column, row)
    }

    /// Pointer is over the discard zone while dragging
    pub fn over_trash(&self, layout: &GridLayout) -> bool {
        self.is_dragging()
            && self
                .pointer
                .is_some_and(|(column, row)| layout.in_trash(column, row))
    }

    pub fn payload(&self, store: &BookmarkStore) -> Option<DragPayload> {
        self.controller.payload(store)
    }
}
