//! WristWave - Settings Persistence
//!
//! Persistent user preferences for WristWave.
//!
//! Settings are key-value pairs with JSON-serialized values. The typed
//! [`PlayerSettings`] view loads the whole preference set with per-key
//! fallback to defaults and saves it back in one pass.
//!
//! # Example
//!
//! ```rust
//! use wristwave_settings::{MemoryStore, PlayerSettings};
//!
//! let mut store = MemoryStore::new();
//!
//! // First run: everything at factory defaults
//! let mut settings = PlayerSettings::load(&store);
//! assert_eq!(settings.volume, 50);
//!
//! // Session end: persist what the user changed
//! settings.volume = 80;
//! settings.shuffle = true;
//! settings.save(&mut store)?;
//! # Ok::<(), wristwave_settings::SettingsError>(())
//! ```

mod error;
mod settings;
mod store;

// Public exports
pub use error::{Result, SettingsError};
pub use settings::{
    PlayerSettings, SETTING_AUTO_PLAY, SETTING_IMAGE_FORMAT, SETTING_RECORDING_FORMAT,
    SETTING_REPEAT, SETTING_SHUFFLE, SETTING_VIDEO_QUALITY, SETTING_VOLUME,
};
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
