//! Platform transport seam
//!
//! Abstracts the platform media engine (decoder + output). The controller
//! issues commands through [`Transport`] and consumes the engine's
//! asynchronous callbacks as [`TransportEvent`] values — the listener
//! registration of the platform APIs becomes an explicit event type fed to
//! `PlaybackController::handle_transport_event`.

use crate::error::Result;
use std::time::Duration;
use wristwave_core::types::SourceLocator;

/// Platform media engine
///
/// `load` starts asynchronous preparation; readiness, completion, and
/// errors arrive later as [`TransportEvent`]s. Implementations own the
/// underlying decoder handle; `release` must free it and is safe to call
/// at any time, including when nothing is loaded.
pub trait Transport {
    /// Begin loading `locator`; the ready signal arrives as an event
    fn load(&mut self, locator: &SourceLocator) -> Result<()>;

    /// Start or resume output
    fn play(&mut self) -> Result<()>;

    /// Pause output, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Seek to an absolute position from the start of the entry
    fn seek_to(&mut self, position: Duration) -> Result<()>;

    /// Set output gain (0.0..1.0)
    fn set_volume(&mut self, gain: f32) -> Result<()>;

    /// Release the underlying engine resource
    fn release(&mut self);
}

/// Asynchronous callback from the platform engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Preparation finished; the entry is ready to play
    Ready {
        /// Total duration reported by the engine
        duration: Duration,
    },

    /// The current entry finished playing naturally
    Completed,

    /// Decode/IO failure during preparation or playback
    Error {
        /// Engine diagnostic
        message: String,
    },
}
