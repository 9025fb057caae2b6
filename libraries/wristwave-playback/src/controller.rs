//! Playback controller - core orchestration
//!
//! Drives the Idle/Preparing/Playing/Paused/Stopped session state machine.
//! User commands enter through the public methods; the platform engine's
//! asynchronous callbacks enter through [`handle_transport_event`]
//! (`PlaybackController::handle_transport_event`). Both kinds of input are
//! processed to completion before the next one — the embedder must not
//! interleave calls for the same controller instance.
//!
//! Release-then-acquire: the prior engine resource is released before a new
//! entry is loaded, and on every other exit path (stop, transport error,
//! drop), so decoder handles never leak.

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    playlist::Playlist,
    policy::adjacent_index,
    transport::{Transport, TransportEvent},
    types::{AdvanceTrigger, Direction, PlaybackConfig, PlaybackStatus},
    volume::VolumeControl,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, warn};
use wristwave_core::types::{MediaEntry, RepeatMode};

/// Central playback management
///
/// Orchestrates playlist, mode state, volume, and the platform transport:
/// - Playlist bookkeeping (append, select, remove)
/// - Next/previous policy (sequential, shuffle, repeat)
/// - Volume with mute save/restore
/// - Event queue for UI synchronization
pub struct PlaybackController<T: Transport> {
    // Session state
    status: PlaybackStatus,
    active_entry: Option<MediaEntry>,

    // Playlist and modes
    playlist: Playlist,
    shuffle: bool,
    repeat: RepeatMode,
    auto_play: bool,

    // Volume
    volume: VolumeControl,

    // Platform engine
    transport: T,
    known_duration: Option<Duration>,

    // Shuffle randomness; seedable for reproducible tests
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl<T: Transport> PlaybackController<T> {
    /// Create a new controller around a platform transport
    pub fn new(transport: T, config: PlaybackConfig) -> Self {
        Self::build(transport, config, StdRng::from_entropy())
    }

    /// Create a controller with a seeded shuffle source
    ///
    /// Shuffle order is then fully determined by `seed`.
    pub fn with_seed(transport: T, config: PlaybackConfig, seed: u64) -> Self {
        Self::build(transport, config, StdRng::seed_from_u64(seed))
    }

    fn build(transport: T, config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            active_entry: None,
            playlist: Playlist::new(),
            shuffle: config.shuffle,
            repeat: config.repeat,
            auto_play: config.auto_play,
            volume: VolumeControl::new(config.volume),
            transport,
            known_duration: None,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start playback from the current selection
    ///
    /// Resumes when paused; otherwise starts the selected entry, falling
    /// back to the first entry when nothing is selected yet.
    pub fn play(&mut self) -> Result<()> {
        match self.status {
            PlaybackStatus::Paused => self.resume(),
            PlaybackStatus::Playing | PlaybackStatus::Preparing => Ok(()),
            PlaybackStatus::Idle | PlaybackStatus::Stopped => {
                if self.playlist.is_empty() {
                    return Err(PlaybackError::InvalidOperation(
                        "playlist is empty".to_string(),
                    ));
                }
                let index = self.playlist.current_index().unwrap_or(0);
                self.play_at(index)
            }
        }
    }

    /// Select the entry at `index` and start playing it
    pub fn play_at(&mut self, index: usize) -> Result<()> {
        let entry = self.playlist.select_index(index)?.clone();
        self.start_entry(entry)
    }

    /// Pause playback
    ///
    /// No-op with a warning outside `Playing`.
    pub fn pause(&mut self) -> Result<()> {
        if self.status != PlaybackStatus::Playing {
            warn!(status = ?self.status, "pause ignored: not playing");
            return Ok(());
        }
        self.transport.pause()?;
        self.set_status(PlaybackStatus::Paused);
        Ok(())
    }

    /// Resume playback
    ///
    /// No-op with a warning outside `Paused`.
    pub fn resume(&mut self) -> Result<()> {
        if self.status != PlaybackStatus::Paused {
            warn!(status = ?self.status, "resume ignored: not paused");
            return Ok(());
        }
        self.transport.play()?;
        self.set_status(PlaybackStatus::Playing);
        Ok(())
    }

    /// Tear down the current session
    ///
    /// Releases the engine resource and returns to `Idle`. The playlist and
    /// its selection are retained.
    pub fn stop(&mut self) {
        self.release_session();
        self.set_status(PlaybackStatus::Idle);
    }

    /// Skip to the next entry
    pub fn next(&mut self) -> Result<()> {
        self.advance(Direction::Next, AdvanceTrigger::UserRequested)
    }

    /// Go to the previous entry
    pub fn previous(&mut self) -> Result<()> {
        self.advance(Direction::Previous, AdvanceTrigger::UserRequested)
    }

    /// Move to an adjacent entry
    ///
    /// Completion under `RepeatMode::One` restarts the same entry in place
    /// without consulting the policy or moving the cursor. Otherwise the
    /// policy picks the index; when it yields nothing, a completed entry
    /// transitions to `Stopped` (end of list, no further autoplay) while a
    /// user request is a silent no-op (boundary navigation).
    pub fn advance(&mut self, direction: Direction, trigger: AdvanceTrigger) -> Result<()> {
        if trigger == AdvanceTrigger::PlaybackCompleted
            && self.repeat == RepeatMode::One
            && self.active_entry.is_some()
        {
            self.transport.seek_to(Duration::ZERO)?;
            self.transport.play()?;
            self.status = PlaybackStatus::Playing;
            return Ok(());
        }

        let current = self.playlist.current_index().unwrap_or(0);
        let target = adjacent_index(
            current,
            self.playlist.len(),
            direction,
            self.shuffle,
            self.repeat,
            &mut self.rng,
        );

        match target {
            Some(index) => {
                let entry = self.playlist.select_index(index)?.clone();
                self.start_entry(entry)
            }
            None => {
                match trigger {
                    AdvanceTrigger::PlaybackCompleted => {
                        // Playlist exhausted; cursor stays on the last entry.
                        self.transport.release();
                        self.known_duration = None;
                        self.set_status(PlaybackStatus::Stopped);
                    }
                    AdvanceTrigger::UserRequested => {
                        debug!(?direction, "navigation at playlist edge ignored");
                    }
                }
                Ok(())
            }
        }
    }

    // ===== Transport Callbacks =====

    /// Feed an asynchronous engine callback into the state machine
    pub fn handle_transport_event(&mut self, event: TransportEvent) -> Result<()> {
        match event {
            TransportEvent::Ready { duration } => {
                if self.status != PlaybackStatus::Preparing {
                    warn!(status = ?self.status, "ready signal ignored: not preparing");
                    return Ok(());
                }
                self.known_duration = Some(duration);
                self.transport.set_volume(self.volume.gain())?;
                self.transport.play()?;
                self.set_status(PlaybackStatus::Playing);
                Ok(())
            }
            TransportEvent::Completed => {
                if self.status != PlaybackStatus::Playing {
                    warn!(status = ?self.status, "completion ignored: not playing");
                    return Ok(());
                }
                self.advance(Direction::Next, AdvanceTrigger::PlaybackCompleted)
            }
            TransportEvent::Error { message } => {
                let entry_name = self
                    .active_entry
                    .as_ref()
                    .map_or_else(|| "<none>".to_string(), |e| e.display_name.clone());
                warn!(entry = %entry_name, error = %message, "transport error");
                self.release_session();
                self.set_status(PlaybackStatus::Idle);
                self.emit(PlaybackEvent::Error {
                    message: format!("cannot play {entry_name}: {message}"),
                });
                Ok(())
            }
        }
    }

    // ===== Seek =====

    /// Seek to a fractional position (0.0..=1.0) of the active entry
    ///
    /// Valid only while `Playing` or `Paused` and after the engine has
    /// reported a duration.
    pub fn seek(&mut self, fraction: f32) -> Result<()> {
        if !matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused
        ) {
            return Err(PlaybackError::InvalidSeek(
                "no active entry to seek".to_string(),
            ));
        }
        let duration = self
            .known_duration
            .ok_or_else(|| PlaybackError::InvalidSeek("duration unknown".to_string()))?;
        let position = duration.mul_f32(fraction.clamp(0.0, 1.0));
        self.transport.seek_to(position)
    }

    /// Duration reported by the engine for the active entry, if known
    pub fn known_duration(&self) -> Option<Duration> {
        self.known_duration
    }

    // ===== Volume =====

    /// Set volume level (0-100, clamped)
    ///
    /// An explicit change clears mute. Propagated to the engine whenever a
    /// session is active.
    pub fn set_volume(&mut self, level: u8) -> Result<()> {
        self.volume.set_level(level);
        self.propagate_volume()?;
        self.emit_volume_changed();
        Ok(())
    }

    /// Toggle mute, saving and restoring the level across the transition
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.volume.toggle_mute();
        self.propagate_volume()?;
        self.emit_volume_changed();
        Ok(())
    }

    /// Configured volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Level actually heard: 0 while muted
    pub fn effective_volume(&self) -> u8 {
        self.volume.effective_level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    fn propagate_volume(&mut self) -> Result<()> {
        if self.status != PlaybackStatus::Idle {
            self.transport.set_volume(self.volume.gain())?;
        }
        Ok(())
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== Playlist Management =====

    /// Append entries at the playlist tail
    ///
    /// Empty input is a no-op. When the playlist was empty, auto-play is
    /// enabled, and no session is active, the first appended entry starts
    /// playing.
    pub fn append_entries(&mut self, entries: Vec<MediaEntry>) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let was_empty = self.playlist.is_empty();
        let first_new = self.playlist.len();
        self.playlist.append(entries);
        self.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });

        if was_empty
            && self.auto_play
            && matches!(self.status, PlaybackStatus::Idle | PlaybackStatus::Stopped)
        {
            self.play_at(first_new)?;
        }
        Ok(())
    }

    /// Append a single entry and select it without starting playback
    ///
    /// Used when a finished recording joins the playlist. Any active
    /// session is torn down first so the selection and the session stay
    /// consistent.
    pub fn append_and_select(&mut self, entry: MediaEntry) -> Result<()> {
        if self.status != PlaybackStatus::Idle {
            self.release_session();
            self.set_status(PlaybackStatus::Idle);
        }
        self.playlist.append([entry]);
        let last = self.playlist.len() - 1;
        self.playlist.select_index(last)?;
        self.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
        Ok(())
    }

    /// Remove the entry at `index`
    ///
    /// Removing the active entry tears the session down first.
    pub fn remove_entry(&mut self, index: usize) -> Result<MediaEntry> {
        if self.status != PlaybackStatus::Idle && self.playlist.current_index() == Some(index) {
            self.release_session();
            self.set_status(PlaybackStatus::Idle);
        }
        let removed = self.playlist.remove(index)?;
        self.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
        Ok(removed)
    }

    /// Read-only view of the playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    // ===== Shuffle & Repeat =====

    /// Enable or disable shuffle
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    /// Check if shuffle is enabled
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    /// Get the repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    // ===== State Queries =====

    /// Current playback status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// The entry the session is bound to, if any
    pub fn active_entry(&self) -> Option<&MediaEntry> {
        self.active_entry.as_ref()
    }

    /// Snapshot of the mode/volume state for session suspension
    pub fn snapshot_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.volume.level(),
            shuffle: self.shuffle,
            repeat: self.repeat,
            auto_play: self.auto_play,
        }
    }

    // ===== Events =====

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    /// Release the engine resource and drop the session binding
    fn release_session(&mut self) {
        self.transport.release();
        self.active_entry = None;
        self.known_duration = None;
    }

    /// Load `entry`, releasing the prior engine resource first
    ///
    /// On a load failure the session collapses to `Idle` and the error is
    /// both surfaced as an event and returned.
    fn start_entry(&mut self, entry: MediaEntry) -> Result<()> {
        self.transport.release();
        self.known_duration = None;

        if let Err(e) = self.transport.load(&entry.locator) {
            warn!(entry = %entry.display_name, error = %e, "load failed");
            self.active_entry = None;
            self.set_status(PlaybackStatus::Idle);
            self.emit(PlaybackEvent::Error {
                message: format!("cannot play {}: {e}", entry.display_name),
            });
            return Err(e);
        }

        let previous_entry_id = self.active_entry.as_ref().map(|e| e.id.clone());
        self.emit(PlaybackEvent::TrackChanged {
            entry_id: entry.id.clone(),
            previous_entry_id,
        });
        self.active_entry = Some(entry);
        self.set_status(PlaybackStatus::Preparing);
        Ok(())
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status != status {
            debug!(from = ?self.status, to = ?status, "status change");
            self.status = status;
            self.emit(PlaybackEvent::StateChanged { status });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl<T: Transport> Drop for PlaybackController<T> {
    fn drop(&mut self) {
        self.transport.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::fake::{Command, FakeTransport};
    use wristwave_core::types::{MediaKind, SourceLocator};

    fn entry(name: &str) -> MediaEntry {
        MediaEntry::new(
            MediaKind::Music,
            name,
            SourceLocator::new(format!("file:///music/{name}.mp3")),
        )
    }

    fn controller() -> PlaybackController<FakeTransport> {
        PlaybackController::with_seed(FakeTransport::default(), PlaybackConfig::default(), 1)
    }

    fn ready(controller: &mut PlaybackController<FakeTransport>) {
        controller
            .handle_transport_event(TransportEvent::Ready {
                duration: Duration::from_secs(180),
            })
            .unwrap();
    }

    #[test]
    fn play_with_empty_playlist_fails() {
        let mut c = controller();
        let err = c.play().unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidOperation(_)));
        assert_eq!(c.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn play_prepares_then_ready_starts() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        // auto-play kicked in on the empty playlist
        assert_eq!(c.status(), PlaybackStatus::Preparing);

        ready(&mut c);
        assert_eq!(c.status(), PlaybackStatus::Playing);
        assert_eq!(c.active_entry().unwrap().display_name, "a");
        assert_eq!(c.known_duration(), Some(Duration::from_secs(180)));
    }

    #[test]
    fn ready_applies_volume_before_playing() {
        let mut c = controller();
        c.set_volume(80).unwrap();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);

        let commands = c.transport.commands.borrow().clone();
        let volume_pos = commands
            .iter()
            .position(|cmd| matches!(cmd, Command::SetVolume(g) if (*g - 0.8).abs() < 1e-6))
            .expect("volume applied");
        let play_pos = commands
            .iter()
            .position(|cmd| *cmd == Command::Play)
            .expect("play issued");
        assert!(volume_pos < play_pos);
    }

    #[test]
    fn new_play_releases_before_loading() {
        let mut c = controller();
        c.append_entries(vec![entry("a"), entry("b")]).unwrap();
        ready(&mut c);

        c.play_at(1).unwrap();
        let commands = c.transport.commands.borrow().clone();
        let second_load = commands
            .iter()
            .rposition(|cmd| matches!(cmd, Command::Load(_)))
            .unwrap();
        assert!(matches!(commands[second_load - 1], Command::Release));
    }

    #[test]
    fn load_failure_collapses_to_idle() {
        let mut c = controller();
        c.transport.fail_next_load = true;
        c.append_entries(vec![entry("bad")]).unwrap_err();

        assert_eq!(c.status(), PlaybackStatus::Idle);
        assert!(c.active_entry().is_none());
        assert!(c
            .take_events()
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { .. })));
    }

    #[test]
    fn transport_error_surfaces_and_goes_idle() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);
        c.take_events();

        c.handle_transport_event(TransportEvent::Error {
            message: "decoder crashed".to_string(),
        })
        .unwrap();

        assert_eq!(c.status(), PlaybackStatus::Idle);
        assert!(c.active_entry().is_none());
        let events = c.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Error { message } if message.contains("a"))));
    }

    #[test]
    fn pause_outside_playing_is_noop() {
        let mut c = controller();
        c.pause().unwrap();
        assert_eq!(c.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn pause_resume_round_trip() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);

        c.pause().unwrap();
        assert_eq!(c.status(), PlaybackStatus::Paused);

        c.resume().unwrap();
        assert_eq!(c.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn completion_on_last_entry_stops_and_keeps_cursor() {
        let mut c = controller();
        c.append_entries(vec![entry("a"), entry("b"), entry("c")])
            .unwrap();
        ready(&mut c);
        c.play_at(2).unwrap();
        ready(&mut c);

        c.handle_transport_event(TransportEvent::Completed).unwrap();
        assert_eq!(c.status(), PlaybackStatus::Stopped);
        assert_eq!(c.playlist().current_index(), Some(2));
    }

    #[test]
    fn completion_with_repeat_one_restarts_same_entry() {
        let mut c = controller();
        c.set_repeat(RepeatMode::One);
        c.append_entries(vec![entry("a"), entry("b")]).unwrap();
        ready(&mut c);
        let before = c.active_entry().unwrap().id.clone();

        c.handle_transport_event(TransportEvent::Completed).unwrap();
        assert_eq!(c.status(), PlaybackStatus::Playing);
        assert_eq!(c.active_entry().unwrap().id, before);
        assert_eq!(c.playlist().current_index(), Some(0));

        let commands = c.transport.commands.borrow().clone();
        assert!(commands.contains(&Command::SeekTo(Duration::ZERO)));
    }

    #[test]
    fn user_next_at_edge_is_silent_noop() {
        let mut c = controller();
        c.append_entries(vec![entry("a"), entry("b")]).unwrap();
        ready(&mut c);
        c.play_at(1).unwrap();
        ready(&mut c);

        c.next().unwrap();
        assert_eq!(c.status(), PlaybackStatus::Playing);
        assert_eq!(c.playlist().current_index(), Some(1));
    }

    #[test]
    fn advance_on_empty_playlist_is_noop() {
        let mut c = controller();
        c.next().unwrap();
        c.previous().unwrap();
        assert_eq!(c.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn repeat_all_wraps_on_completion() {
        let mut c = controller();
        c.set_repeat(RepeatMode::All);
        c.append_entries(vec![entry("a"), entry("b")]).unwrap();
        ready(&mut c);
        c.play_at(1).unwrap();
        ready(&mut c);

        c.handle_transport_event(TransportEvent::Completed).unwrap();
        assert_eq!(c.playlist().current_index(), Some(0));
        assert_eq!(c.status(), PlaybackStatus::Preparing);
    }

    #[test]
    fn seek_requires_known_duration() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        // Still preparing: no duration yet
        let err = c.seek(0.5).unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidSeek(_)));

        ready(&mut c);
        c.seek(0.5).unwrap();
        let commands = c.transport.commands.borrow().clone();
        assert!(commands.contains(&Command::SeekTo(Duration::from_secs(90))));
    }

    #[test]
    fn seek_fraction_is_clamped() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);

        c.seek(2.0).unwrap();
        let commands = c.transport.commands.borrow().clone();
        assert!(commands.contains(&Command::SeekTo(Duration::from_secs(180))));
    }

    #[test]
    fn mute_round_trip_restores_effective_volume() {
        let mut c = controller();
        c.set_volume(70).unwrap();

        c.toggle_mute().unwrap();
        assert_eq!(c.effective_volume(), 0);
        assert!(c.is_muted());

        c.toggle_mute().unwrap();
        assert_eq!(c.effective_volume(), 70);
        assert!(!c.is_muted());
    }

    #[test]
    fn set_volume_while_muted_clears_mute() {
        let mut c = controller();
        c.toggle_mute().unwrap();
        c.set_volume(40).unwrap();
        assert!(!c.is_muted());
        assert_eq!(c.effective_volume(), 40);
    }

    #[test]
    fn append_without_autoplay_stays_idle() {
        let mut c = PlaybackController::with_seed(
            FakeTransport::default(),
            PlaybackConfig {
                auto_play: false,
                ..PlaybackConfig::default()
            },
            1,
        );
        c.append_entries(vec![entry("a")]).unwrap();
        assert_eq!(c.status(), PlaybackStatus::Idle);
        assert_eq!(c.playlist().len(), 1);
    }

    #[test]
    fn append_to_non_empty_playlist_never_interrupts() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);

        c.append_entries(vec![entry("b")]).unwrap();
        assert_eq!(c.status(), PlaybackStatus::Playing);
        assert_eq!(c.active_entry().unwrap().display_name, "a");
    }

    #[test]
    fn removing_active_entry_tears_session_down() {
        let mut c = controller();
        c.append_entries(vec![entry("a"), entry("b")]).unwrap();
        ready(&mut c);

        let removed = c.remove_entry(0).unwrap();
        assert_eq!(removed.display_name, "a");
        assert_eq!(c.status(), PlaybackStatus::Idle);
        assert!(c.active_entry().is_none());
    }

    #[test]
    fn stop_releases_and_keeps_playlist() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        ready(&mut c);

        c.stop();
        assert_eq!(c.status(), PlaybackStatus::Idle);
        assert_eq!(c.playlist().len(), 1);
        let commands = c.transport.commands.borrow().clone();
        assert_eq!(commands.last(), Some(&Command::Release));
    }

    #[test]
    fn drop_releases_transport() {
        let (transport, log) = FakeTransport::new();
        let c = PlaybackController::with_seed(transport, PlaybackConfig::default(), 1);
        drop(c);
        assert_eq!(log.borrow().last(), Some(&Command::Release));
    }

    #[test]
    fn snapshot_reflects_runtime_changes() {
        let mut c = controller();
        c.set_volume(33).unwrap();
        c.set_shuffle(true);
        c.set_repeat(RepeatMode::All);

        let snapshot = c.snapshot_config();
        assert_eq!(snapshot.volume, 33);
        assert!(snapshot.shuffle);
        assert_eq!(snapshot.repeat, RepeatMode::All);
    }

    #[test]
    fn events_are_drained_once() {
        let mut c = controller();
        c.append_entries(vec![entry("a")]).unwrap();
        let events = c.take_events();
        assert!(!events.is_empty());
        assert!(c.take_events().is_empty());
    }
}
