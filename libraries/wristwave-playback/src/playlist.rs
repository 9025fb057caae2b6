//! Session playlist
//!
//! Ordered entries plus a cursor. Lives in memory for the screen session
//! only; there is no durable playlist storage.

use crate::error::{PlaybackError, Result};
use wristwave_core::types::MediaEntry;

/// Ordered collection of entries with a current-index cursor
///
/// Invariant: the cursor is either `None` or a valid index into `items`.
/// Every mutation below preserves it.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Entries in insertion order (not unique by value)
    items: Vec<MediaEntry>,

    /// Current selection, `None` when nothing is selected
    current: Option<usize>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries at the tail, preserving existing order
    ///
    /// Empty input is a no-op. The cursor is never moved by an append;
    /// auto-selecting the first entry of a previously empty playlist is the
    /// controller's decision.
    pub fn append(&mut self, entries: impl IntoIterator<Item = MediaEntry>) {
        self.items.extend(entries);
    }

    /// Select the entry at `index` and return it
    pub fn select_index(&mut self, index: usize) -> Result<&MediaEntry> {
        if index >= self.items.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        self.current = Some(index);
        Ok(&self.items[index])
    }

    /// Get the selected entry, if any
    pub fn current_entry(&self) -> Option<&MediaEntry> {
        self.current.map(|i| &self.items[i])
    }

    /// Get the cursor position, if any
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Get the entry at `index` without moving the cursor
    pub fn get(&self, index: usize) -> Option<&MediaEntry> {
        self.items.get(index)
    }

    /// Remove the entry at `index` and return it
    ///
    /// The cursor is repaired: a removal before it shifts it left, removing
    /// the selected entry clamps the selection to the same position (or
    /// clears it when the tail was removed).
    pub fn remove(&mut self, index: usize) -> Result<MediaEntry> {
        if index >= self.items.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        let entry = self.items.remove(index);

        self.current = match self.current {
            Some(cur) if index < cur => Some(cur - 1),
            Some(cur) if index == cur => {
                if self.items.is_empty() {
                    None
                } else {
                    Some(cur.min(self.items.len() - 1))
                }
            }
            other => other,
        };

        Ok(entry)
    }

    /// Remove all entries and clear the selection
    pub fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }

    /// All entries in order
    pub fn entries(&self) -> &[MediaEntry] {
        &self.items
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
