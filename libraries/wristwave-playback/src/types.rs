//! Core types for the playback state machine

use serde::{Deserialize, Serialize};
use wristwave_core::types::RepeatMode;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No session; no entry loaded
    Idle,

    /// Transport is loading an entry, ready signal pending
    Preparing,

    /// Currently playing
    Playing,

    /// Paused mid-entry
    Paused,

    /// Terminal for the current entry (playlist exhausted or explicit stop)
    Stopped,
}

/// Navigation direction for `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// What caused an `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTrigger {
    /// Explicit next/previous command
    UserRequested,

    /// Transport reported the current entry finished
    PlaybackCompleted,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 50)
    pub volume: u8,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Start the first appended entry when the playlist was empty
    /// (default: true)
    pub auto_play: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 50,
            shuffle: false,
            repeat: RepeatMode::Off,
            auto_play: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 50);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert!(config.auto_play);
    }
}
