//! WristWave - Playback Management
//!
//! Platform-agnostic playback management for WristWave.
//!
//! This crate provides:
//! - Session playlist with a current-index cursor
//! - Next/previous policy (sequential, shuffle, repeat Off/All/One)
//! - The Idle/Preparing/Playing/Paused/Stopped session state machine
//! - Volume control (linear, 0-100, mute with save/restore)
//! - Fractional seek
//! - Audio capture sessions that feed back into the playlist
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `wristwave-playback` is completely platform-agnostic: no dependency on a
//! concrete media engine or capture device. The platform provides those
//! through the [`Transport`] and [`recording::Recorder`] traits and feeds
//! the engine's asynchronous callbacks back in as [`TransportEvent`]s.
//!
//! # Example: Basic Playback
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wristwave_core::types::{MediaEntry, MediaKind, SourceLocator};
//! use wristwave_playback::{
//!     PlaybackConfig, PlaybackController, Result, Transport, TransportEvent,
//! };
//!
//! // Implement Transport for your platform engine
//! struct MyEngine { /* ... */ }
//!
//! impl Transport for MyEngine {
//!     fn load(&mut self, _locator: &SourceLocator) -> Result<()> { Ok(()) }
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) -> Result<()> { Ok(()) }
//!     fn seek_to(&mut self, _position: Duration) -> Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _gain: f32) -> Result<()> { Ok(()) }
//!     fn release(&mut self) {}
//! }
//!
//! let mut controller =
//!     PlaybackController::new(MyEngine { /* ... */ }, PlaybackConfig::default());
//!
//! let song = MediaEntry::new(
//!     MediaKind::Music,
//!     "My Song",
//!     SourceLocator::new("file:///music/song.mp3"),
//! );
//! controller.append_entries(vec![song])?;
//!
//! // The engine reports readiness asynchronously; forward it
//! controller.handle_transport_event(TransportEvent::Ready {
//!     duration: Duration::from_secs(180),
//! })?;
//!
//! controller.set_volume(80)?;
//! controller.pause()?;
//! controller.next()?;
//!
//! for event in controller.take_events() {
//!     // update the UI
//! }
//! # Ok::<(), wristwave_playback::PlaybackError>(())
//! ```

mod controller;
mod error;
mod events;
mod playlist;
pub mod policy;
pub mod recording;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use playlist::Playlist;
pub use recording::{CaptureAuthorization, Recorder, RecordingController, RecordingStatus};
pub use transport::{Transport, TransportEvent};
pub use types::{AdvanceTrigger, Direction, PlaybackConfig, PlaybackStatus};
pub use volume::VolumeControl;
