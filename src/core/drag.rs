//! Drag-to-reorder state machine
//!
//! While a pointer drag is active, every pointer move over another tile is
//! fed to [`DragController::hover`]. The controller decides whether the
//! pointer has crossed far enough to reorder, and if so reinserts the dragged
//! bookmark through [`BookmarkStore::move_before`] so that it lands on the
//! candidate's slot. Positions are always resolved from the store at the time
//! of the event; only the anchor index survives between events.
//!
//! Hysteresis: when the dragged tile's anchor is before the candidate, the
//! pointer must be past the candidate's horizontal midpoint; when it is
//! after, the pointer must be before the midpoint. The tile that just moved
//! therefore never flips back on the next pointer event.

use serde::Serialize;

use super::bookmark::BookmarkId;
use super::store::BookmarkStore;

/// Horizontal extent of a tile on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f32,
    pub width: f32,
}

impl HitBox {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn midpoint(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// State kept for the duration of one drag gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub dragged_id: BookmarkId,
    /// Index of the dragged tile when the gesture began
    pub original_index: usize,
    /// Last index used for a reinsertion
    pub anchor_index: usize,
    pub last_pointer_x: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Result of feeding one pointer move to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum HoverOutcome {
    /// Not dragging, hovering the dragged tile itself, or unknown candidate
    Ignored,
    /// Threshold not crossed
    Held,
    /// Dragged tile moved between these indices
    Moved { from: usize, to: usize },
    /// Dragged tile vanished from the store; the session was ended
    Lost,
}

/// Where the pointer was released
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    /// Over a tile (or the grid)
    Grid,
    /// Over the discard zone
    Discard,
    /// Outside any target
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Gesture ended, collection keeps the order built while hovering
    Settled { index: Option<usize> },
    /// Dragged bookmark was removed
    Discarded(BookmarkId),
    /// No drag was active
    NotDragging,
}

/// Data carried by the dragged object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub id: BookmarkId,
    pub url: String,
    pub title: String,
    pub icon_url: String,
    pub original_index: usize,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragged_id(&self) -> Option<&BookmarkId> {
        self.session().map(|s| &s.dragged_id)
    }

    /// Start dragging `id`; returns false when `id` is not in the store
    ///
    /// Starting while already dragging replaces the previous session.
    pub fn begin(&mut self, store: &BookmarkStore, id: &BookmarkId, pointer_x: f32) -> bool {
        let Some(index) = store.index_of(id) else {
            return false;
        };
        log::debug!("drag: begin {} at {}", id, index);
        self.state = DragState::Dragging(DragSession {
            dragged_id: id.clone(),
            original_index: index,
            anchor_index: index,
            last_pointer_x: pointer_x,
        });
        true
    }

    /// Pointer moved over the tile `candidate` occupying `bounds`
    pub fn hover(
        &mut self,
        store: &mut BookmarkStore,
        candidate: &BookmarkId,
        bounds: HitBox,
        pointer_x: f32,
    ) -> HoverOutcome {
        let DragState::Dragging(session) = &mut self.state else {
            return HoverOutcome::Ignored;
        };
        session.last_pointer_x = pointer_x;

        let Some(from) = store.index_of(&session.dragged_id) else {
            log::debug!("drag: {} disappeared, ending session", session.dragged_id);
            self.state = DragState::Idle;
            return HoverOutcome::Lost;
        };
        // Keyboard edits may have moved the dragged tile since the last hover
        if session.anchor_index != from {
            log::debug!("drag: anchor {} resynced to {}", session.anchor_index, from);
            session.anchor_index = from;
        }
        if candidate == &session.dragged_id {
            return HoverOutcome::Ignored;
        }
        let Some(hover_index) = store.index_of(candidate) else {
            return HoverOutcome::Ignored;
        };

        let half = bounds.width / 2.0;
        let offset = pointer_x - bounds.left;
        let anchor = session.anchor_index;
        if anchor == hover_index
            || (anchor < hover_index && offset <= half)
            || (anchor > hover_index && offset >= half)
        {
            return HoverOutcome::Held;
        }

        if hover_index < from {
            store.move_before(&session.dragged_id, candidate);
        } else {
            // Moving forward the dragged tile takes the candidate's slot,
            // i.e. it goes in front of whatever follows the candidate.
            let successor = store.bookmarks().get(hover_index + 1).map(|b| b.id.clone());
            match successor {
                Some(successor) => store.move_before(&session.dragged_id, &successor),
                None => store.move_to_end(&session.dragged_id),
            };
        }
        session.anchor_index = hover_index;

        let to = store.index_of(&session.dragged_id).unwrap_or(from);
        log::debug!("drag: {} moved {} -> {}", session.dragged_id, from, to);
        HoverOutcome::Moved { from, to }
    }

    /// Release the pointer over `target`, ending the gesture
    pub fn drop_on(&mut self, store: &mut BookmarkStore, target: DropTarget) -> DropOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DropOutcome::NotDragging;
        };

        match target {
            DropTarget::Discard => {
                store.remove(&session.dragged_id);
                log::debug!("drag: {} discarded", session.dragged_id);
                DropOutcome::Discarded(session.dragged_id)
            }
            DropTarget::Grid | DropTarget::Outside => {
                let index = store.index_of(&session.dragged_id);
                log::debug!(
                    "drag: {} settled {} -> {:?}",
                    session.dragged_id,
                    session.original_index,
                    index
                );
                DropOutcome::Settled { index }
            }
        }
    }

    /// Abort the gesture without touching the store
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Payload of the dragged bookmark, read fresh from the store
    pub fn payload(&self, store: &BookmarkStore) -> Option<DragPayload> {
        let session = self.session()?;
        let bookmark = store.get(&session.dragged_id)?;
        Some(DragPayload {
            id: bookmark.id.clone(),
            url: bookmark.url.clone(),
            title: bookmark.title.clone(),
            icon_url: bookmark.icon_url.clone(),
            original_index: session.original_index,
        })
    }
}
