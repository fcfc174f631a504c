//! Ordered bookmark collection with write-through persistence
//!
//! [`BookmarkStore`] is the single source of truth for the dashboard. Every
//! mutation builds a new immutable [`Snapshot`], writes it to durable storage
//! and notifies subscribers before returning.

use std::collections::HashSet;
use std::sync::Arc;

use super::bookmark::{Bookmark, BookmarkId, IdGenerator};
use super::storage::{Storage, STORAGE_KEY};
use crate::error::Result;

/// Immutable view of the collection at one point in time
pub type Snapshot = Arc<[Bookmark]>;

/// Handle returned by [`BookmarkStore::subscribe`]
pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// Authoritative ordered bookmark collection
pub struct BookmarkStore {
    bookmarks: Snapshot,
    storage: Box<dyn Storage>,
    ids: IdGenerator,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl BookmarkStore {
    /// Open a store over `storage`, reading the persisted collection once
    ///
    /// Missing, unreadable or corrupt data yields an empty collection.
    pub fn load(storage: impl Storage + 'static) -> Self {
        let bookmarks = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Bookmark>>(&raw) {
                Ok(records) => {
                    let count = records.len();
                    let kept = sanitize(records);
                    if kept.len() != count {
                        log::warn!(
                            "load: dropped {} invalid stored bookmark(s)",
                            count - kept.len()
                        );
                    }
                    log::info!("load: {} bookmark(s) restored", kept.len());
                    kept
                }
                Err(e) => {
                    log::warn!("load: stored bookmarks are corrupt ({}), starting empty", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                log::info!("load: no stored bookmarks, starting empty");
                Vec::new()
            }
            Err(e) => {
                log::warn!("load: failed to read storage ({}), starting empty", e);
                Vec::new()
            }
        };

        Self {
            bookmarks: bookmarks.into(),
            storage: Box::new(storage),
            ids: IdGenerator::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot (cheap, shares the allocation)
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.bookmarks)
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn get(&self, id: &BookmarkId) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| &b.id == id)
    }

    /// Current position of `id`
    pub fn index_of(&self, id: &BookmarkId) -> Option<usize> {
        self.bookmarks.iter().position(|b| &b.id == id)
    }

    /// Whether any bookmark already points at `url`
    pub fn contains_url(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    /// Append a new bookmark with a fresh id
    pub fn add(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Bookmark {
        let current = &self.bookmarks;
        let id = self
            .ids
            .next(|candidate| current.iter().any(|b| b.id.as_str() == candidate));
        let bookmark = Bookmark {
            id,
            url: url.into(),
            title: title.into(),
            icon_url: icon_url.into(),
        };

        let mut next = self.bookmarks.to_vec();
        next.push(bookmark.clone());
        self.commit(next);
        log::debug!("add: {} ({})", bookmark.id, bookmark.url);
        bookmark
    }

    /// Delete `id`; unknown ids leave everything untouched
    pub fn remove(&mut self, id: &BookmarkId) -> Snapshot {
        let Some(index) = self.index_of(id) else {
            return self.snapshot();
        };
        let mut next = self.bookmarks.to_vec();
        next.remove(index);
        log::debug!("remove: {}", id);
        self.commit(next)
    }

    /// Reinsert `drag_id` directly in front of `anchor_id`
    ///
    /// `[A,B,C,D]`: moving D before B gives `[A,D,B,C]`, moving A before D
    /// gives `[B,C,A,D]`. No-op when either id is unknown or they are equal.
    pub fn move_before(&mut self, drag_id: &BookmarkId, anchor_id: &BookmarkId) -> Snapshot {
        if drag_id == anchor_id {
            return self.snapshot();
        }
        let (Some(from), Some(_)) = (self.index_of(drag_id), self.index_of(anchor_id)) else {
            return self.snapshot();
        };

        let mut next = self.bookmarks.to_vec();
        let dragged = next.remove(from);
        // anchor is still present after removing a different record
        let to = next
            .iter()
            .position(|b| &b.id == anchor_id)
            .unwrap_or(next.len());
        if to == from {
            // already directly in front of the anchor
            return self.snapshot();
        }
        next.insert(to, dragged);
        log::debug!("move_before: {} -> before {}", drag_id, anchor_id);
        self.commit(next)
    }

    /// Move `id` to the last slot; no-op when unknown or already last
    pub fn move_to_end(&mut self, id: &BookmarkId) -> Snapshot {
        let Some(from) = self.index_of(id) else {
            return self.snapshot();
        };
        if from + 1 == self.bookmarks.len() {
            return self.snapshot();
        }
        let mut next = self.bookmarks.to_vec();
        let moved = next.remove(from);
        next.push(moved);
        log::debug!("move_to_end: {}", id);
        self.commit(next)
    }

    /// Replace the whole collection
    ///
    /// Records with an empty field, or repeating an earlier id, are dropped.
    pub fn replace_all(&mut self, records: Vec<Bookmark>) -> Snapshot {
        let count = records.len();
        let next = sanitize(records);
        if next.len() != count {
            log::info!("replace_all: dropped {} invalid record(s)", count - next.len());
        }
        self.commit(next)
    }

    /// Pretty-printed JSON array, the canonical exchange format
    pub fn snapshot_for_export(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.bookmarks)?)
    }

    /// Register a callback run after every effective mutation
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn commit(&mut self, next: Vec<Bookmark>) -> Snapshot {
        self.bookmarks = next.into();
        self.persist();
        let snapshot = self.snapshot();
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&snapshot);
        }
        snapshot
    }

    /// Write the full collection; failures are logged and swallowed
    fn persist(&mut self) {
        let json = match serde_json::to_string(&*self.bookmarks) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("persist: failed to serialize bookmarks: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(STORAGE_KEY, &json) {
            log::warn!("persist: failed to write bookmarks: {}", e);
        }
    }
}

/// Keep complete records with first-seen ids, in order
fn sanitize(records: Vec<Bookmark>) -> Vec<Bookmark> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|b| b.is_complete() && seen.insert(b.id.clone()))
        .collect()
}
