//! Core module - Bookmark collection, drag reordering and application state

pub mod bookmark;
pub mod drag;
pub mod mode;
pub mod state;
pub mod storage;
pub mod store;

pub use bookmark::{Bookmark, BookmarkId, IdGenerator};
pub use drag::{
    DragController, DragPayload, DragSession, DragState, DropOutcome, DropTarget, HitBox,
    HoverOutcome,
};
pub use mode::{InputPurpose, PendingAction, ViewMode};
pub use state::AppState;
pub use storage::{FileStorage, MemoryStorage, Storage, STORAGE_KEY};
pub use store::{BookmarkStore, Snapshot, SubscriptionId};
