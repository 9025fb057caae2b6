//! User preferences
//!
//! Loaded once at session start, applied to the controllers, and saved on
//! session end. Loading never fails: a missing or malformed value falls
//! back to the documented default with a warning, so a corrupted store
//! degrades to factory settings instead of blocking startup.

use crate::error::Result;
use crate::store::SettingsStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;
use wristwave_core::types::{ImageFormat, RecordingFormat, RepeatMode, VideoQuality};
use wristwave_playback::PlaybackConfig;

// Setting key constants
/// Playback volume (0-100)
pub const SETTING_VOLUME: &str = "playback.volume";

/// Shuffle enabled
pub const SETTING_SHUFFLE: &str = "playback.shuffle";

/// Repeat mode ("off", "all", "one")
pub const SETTING_REPEAT: &str = "playback.repeat";

/// Start playing when the first entry joins an empty playlist
pub const SETTING_AUTO_PLAY: &str = "playback.auto_play";

/// Preferred still-image format ("jpg", "png", "webp")
pub const SETTING_IMAGE_FORMAT: &str = "capture.image_format";

/// Preferred video quality ("360p", "720p", "1080p")
pub const SETTING_VIDEO_QUALITY: &str = "capture.video_quality";

/// Encoding for new recordings ("mp3", "wav")
pub const SETTING_RECORDING_FORMAT: &str = "capture.recording_format";

/// The full preference set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Playback volume (0-100, default: 50)
    pub volume: u8,

    /// Shuffle enabled (default: off)
    pub shuffle: bool,

    /// Repeat mode (default: off)
    pub repeat: RepeatMode,

    /// Auto-play on first append (default: on)
    pub auto_play: bool,

    /// Preferred still-image format (default: jpg)
    pub image_format: ImageFormat,

    /// Preferred video quality (default: 720p)
    pub video_quality: VideoQuality,

    /// Encoding for new recordings (default: mp3)
    pub recording_format: RecordingFormat,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 50,
            shuffle: false,
            repeat: RepeatMode::Off,
            auto_play: true,
            image_format: ImageFormat::default(),
            video_quality: VideoQuality::default(),
            recording_format: RecordingFormat::default(),
        }
    }
}

impl PlayerSettings {
    /// Load settings from `store`, falling back per key
    #[must_use]
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            volume: load_volume(store, defaults.volume),
            shuffle: load_bool(store, SETTING_SHUFFLE, defaults.shuffle),
            repeat: load_parsed(store, SETTING_REPEAT, RepeatMode::from_str, defaults.repeat),
            auto_play: load_bool(store, SETTING_AUTO_PLAY, defaults.auto_play),
            image_format: load_parsed(
                store,
                SETTING_IMAGE_FORMAT,
                ImageFormat::from_str,
                defaults.image_format,
            ),
            video_quality: load_parsed(
                store,
                SETTING_VIDEO_QUALITY,
                VideoQuality::from_str,
                defaults.video_quality,
            ),
            recording_format: load_parsed(
                store,
                SETTING_RECORDING_FORMAT,
                RecordingFormat::from_str,
                defaults.recording_format,
            ),
        }
    }

    /// Playback configuration carried by these preferences
    ///
    /// Session start: `PlaybackController::new(transport, settings.playback_config())`.
    #[must_use]
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.volume,
            shuffle: self.shuffle,
            repeat: self.repeat,
            auto_play: self.auto_play,
        }
    }

    /// Absorb the controller's runtime state back into the preferences
    ///
    /// Session end: `settings.absorb_playback(&controller.snapshot_config())`
    /// followed by [`save`](Self::save).
    pub fn absorb_playback(&mut self, config: &PlaybackConfig) {
        self.volume = config.volume;
        self.shuffle = config.shuffle;
        self.repeat = config.repeat;
        self.auto_play = config.auto_play;
    }

    /// Write every setting to `store`
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        store.set(SETTING_VOLUME, json!(self.volume))?;
        store.set(SETTING_SHUFFLE, json!(self.shuffle))?;
        store.set(SETTING_REPEAT, json!(self.repeat.as_str()))?;
        store.set(SETTING_AUTO_PLAY, json!(self.auto_play))?;
        store.set(SETTING_IMAGE_FORMAT, json!(self.image_format.as_str()))?;
        store.set(SETTING_VIDEO_QUALITY, json!(self.video_quality.as_str()))?;
        store.set(
            SETTING_RECORDING_FORMAT,
            json!(self.recording_format.as_str()),
        )?;
        Ok(())
    }
}

fn load_volume(store: &dyn SettingsStore, fallback: u8) -> u8 {
    match raw(store, SETTING_VOLUME) {
        Some(value) => match value.as_u64() {
            Some(level) if level <= 100 => level as u8,
            _ => {
                warn!(key = SETTING_VOLUME, %value, "invalid volume, using default");
                fallback
            }
        },
        None => fallback,
    }
}

fn load_bool(store: &dyn SettingsStore, key: &str, fallback: bool) -> bool {
    match raw(store, key) {
        Some(value) => value.as_bool().unwrap_or_else(|| {
            warn!(key, %value, "invalid boolean, using default");
            fallback
        }),
        None => fallback,
    }
}

fn load_parsed<T: Copy>(
    store: &dyn SettingsStore,
    key: &str,
    parse: fn(&str) -> Option<T>,
    fallback: T,
) -> T {
    match raw(store, key) {
        Some(value) => match value.as_str().and_then(parse) {
            Some(parsed) => parsed,
            None => {
                warn!(key, %value, "unrecognized value, using default");
                fallback
            }
        },
        None => fallback,
    }
}

fn raw(store: &dyn SettingsStore, key: &str) -> Option<serde_json::Value> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "settings read failed, using default");
            None
        }
    }
}
