//! Playback events
//!
//! Event-based communication for the embedding UI. The controller pushes
//! events onto an internal queue; the embedder drains them with
//! `PlaybackController::take_events` after each command or transport
//! callback.

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};
use wristwave_core::types::EntryId;

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different entry became active
    TrackChanged {
        /// ID of the new active entry
        entry_id: EntryId,
        /// ID of the previously active entry (if any)
        previous_entry_id: Option<EntryId>,
    },

    /// Volume or mute state changed
    VolumeChanged {
        /// Configured level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Entries were added to or removed from the playlist
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Non-fatal error surfaced to the UI
    Error {
        /// Diagnostic message
        message: String,
    },
}
