//! Audio capture sessions
//!
//! A recording session is a second, mutually exclusive use of the audio
//! path: it can only start while no playback session is active, and a
//! finished capture joins the playlist as a selectable entry.

use crate::{
    controller::PlaybackController,
    error::{PlaybackError, Result},
    transport::Transport,
    types::PlaybackStatus,
};
use std::time::{Duration, Instant};
use tracing::{info, warn};
use wristwave_core::types::{MediaEntry, MediaKind, RecordingFormat, SourceLocator};

/// Capture permission check
///
/// Stands in for the platform's runtime permission model. Queried at
/// session start, never cached across sessions.
pub trait CaptureAuthorization {
    /// Whether microphone capture is currently granted
    fn microphone_granted(&self) -> bool;
}

/// Platform audio capture device
///
/// Implementations own the capture handle between `start` and `stop`;
/// `stop` must finalize the sink so it is readable afterwards.
pub trait Recorder {
    /// Begin capturing into `sink` with the given encoding
    fn start(&mut self, sink: &SourceLocator, format: RecordingFormat) -> Result<()>;

    /// Finish the capture and finalize the sink
    fn stop(&mut self) -> Result<()>;
}

/// Recording session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingStatus {
    /// No capture in progress
    Idle,

    /// Actively capturing
    Recording,
}

/// Drives a [`Recorder`] through its Idle/Recording lifecycle
pub struct RecordingController<R: Recorder> {
    recorder: R,
    status: RecordingStatus,
    sink: Option<SourceLocator>,
    format: RecordingFormat,
    started_at: Option<Instant>,
}

impl<R: Recorder> RecordingController<R> {
    /// Create a controller around a platform recorder
    pub fn new(recorder: R) -> Self {
        Self {
            recorder,
            status: RecordingStatus::Idle,
            sink: None,
            format: RecordingFormat::Mp3,
            started_at: None,
        }
    }

    /// Start capturing into `sink`
    ///
    /// Fails with [`PlaybackError::PermissionDenied`] without capture
    /// authorization and with [`PlaybackError::ConflictingSession`] while a
    /// playback session is active (`Playing` or `Preparing`). Paused or
    /// stopped playback does not block a capture.
    pub fn start(
        &mut self,
        auth: &dyn CaptureAuthorization,
        playback_status: PlaybackStatus,
        sink: SourceLocator,
        format: RecordingFormat,
    ) -> Result<()> {
        if self.status == RecordingStatus::Recording {
            return Err(PlaybackError::InvalidOperation(
                "recording already in progress".to_string(),
            ));
        }
        if !auth.microphone_granted() {
            return Err(PlaybackError::PermissionDenied);
        }
        if matches!(
            playback_status,
            PlaybackStatus::Playing | PlaybackStatus::Preparing
        ) {
            return Err(PlaybackError::ConflictingSession);
        }

        self.recorder.start(&sink, format)?;
        info!(sink = %sink.as_str(), format = format.as_str(), "recording started");
        self.sink = Some(sink);
        self.format = format;
        self.started_at = Some(Instant::now());
        self.status = RecordingStatus::Recording;
        Ok(())
    }

    /// Finish the capture and hand it to the playlist
    ///
    /// The new entry is named from the wall-clock start of `stop`
    /// (`REC_YYYYMMDD_HHMMSS.<ext>`), appended at the playlist tail, and
    /// selected as current without starting playback.
    pub fn stop<T: Transport>(
        &mut self,
        playback: &mut PlaybackController<T>,
    ) -> Result<MediaEntry> {
        if self.status != RecordingStatus::Recording {
            return Err(PlaybackError::InvalidOperation(
                "no recording in progress".to_string(),
            ));
        }
        self.status = RecordingStatus::Idle;
        self.started_at = None;

        let sink = self.sink.take().ok_or_else(|| {
            PlaybackError::InvalidOperation("recording sink missing".to_string())
        })?;

        if let Err(e) = self.recorder.stop() {
            warn!(error = %e, "recorder failed to finalize");
            return Err(e);
        }

        let name = format!(
            "REC_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            self.format.extension()
        );
        info!(entry = %name, "recording finished");

        let entry = MediaEntry::new(MediaKind::Recording, name, sink);
        playback.append_and_select(entry.clone())?;
        Ok(entry)
    }

    /// Current session state
    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    /// Time captured so far, `None` while idle
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|t| t.elapsed())
    }
}
