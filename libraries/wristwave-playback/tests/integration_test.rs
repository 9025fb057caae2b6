//! Integration tests for the playback and capture controllers
//!
//! These tests verify full user-visible workflows against a scripted
//! transport, driving the asynchronous engine callbacks by hand.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wristwave_core::types::{MediaEntry, MediaKind, RecordingFormat, SourceLocator};
use wristwave_playback::recording::{CaptureAuthorization, Recorder, RecordingController};
use wristwave_playback::{
    PlaybackConfig, PlaybackController, PlaybackError, PlaybackEvent, PlaybackStatus, Result,
    Transport, TransportEvent,
};

// ===== Test Helpers =====

/// Route controller logs through the test harness when RUST_LOG is set
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Scripted transport recording loads and gain changes
#[derive(Default)]
struct ScriptedTransport {
    loads: Rc<RefCell<Vec<String>>>,
    gains: Rc<RefCell<Vec<f32>>>,
    releases: Rc<RefCell<usize>>,
}

impl Transport for ScriptedTransport {
    fn load(&mut self, locator: &SourceLocator) -> Result<()> {
        self.loads.borrow_mut().push(locator.as_str().to_string());
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn seek_to(&mut self, _position: Duration) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, gain: f32) -> Result<()> {
        self.gains.borrow_mut().push(gain);
        Ok(())
    }

    fn release(&mut self) {
        *self.releases.borrow_mut() += 1;
    }
}

struct AlwaysGranted;
impl CaptureAuthorization for AlwaysGranted {
    fn microphone_granted(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct NullRecorder;
impl Recorder for NullRecorder {
    fn start(&mut self, _sink: &SourceLocator, _format: RecordingFormat) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}

fn entry(name: &str) -> MediaEntry {
    MediaEntry::new(
        MediaKind::Music,
        name,
        SourceLocator::new(format!("file:///music/{name}.mp3")),
    )
}

fn controller() -> PlaybackController<ScriptedTransport> {
    PlaybackController::with_seed(ScriptedTransport::default(), PlaybackConfig::default(), 7)
}

/// Controller plus probes into the scripted transport
fn probed_controller() -> (
    PlaybackController<ScriptedTransport>,
    Rc<RefCell<Vec<String>>>,
    Rc<RefCell<Vec<f32>>>,
    Rc<RefCell<usize>>,
) {
    let transport = ScriptedTransport::default();
    let loads = Rc::clone(&transport.loads);
    let gains = Rc::clone(&transport.gains);
    let releases = Rc::clone(&transport.releases);
    let controller = PlaybackController::with_seed(transport, PlaybackConfig::default(), 7);
    (controller, loads, gains, releases)
}

fn ready(c: &mut PlaybackController<ScriptedTransport>, secs: u64) {
    c.handle_transport_event(TransportEvent::Ready {
        duration: Duration::from_secs(secs),
    })
    .unwrap();
}

fn complete(c: &mut PlaybackController<ScriptedTransport>) {
    c.handle_transport_event(TransportEvent::Completed).unwrap();
}

// ===== Playback Workflows =====

#[test]
fn sequential_album_plays_through_and_stops() {
    init_tracing();
    let (mut c, loads, _, _) = probed_controller();

    c.append_entries(vec![entry("one"), entry("two"), entry("three")])
        .unwrap();

    // Auto-play starts the first entry; walk the album by completions
    for _ in 0..3 {
        ready(&mut c, 120);
        complete(&mut c);
    }

    assert_eq!(c.status(), PlaybackStatus::Stopped);
    assert_eq!(c.playlist().current_index(), Some(2));
    assert_eq!(
        *loads.borrow(),
        vec![
            "file:///music/one.mp3",
            "file:///music/two.mp3",
            "file:///music/three.mp3",
        ]
    );
}

#[test]
fn repeat_all_wraps_back_to_the_first_entry() {
    let mut c = controller();
    c.append_entries(vec![entry("one"), entry("two")]).unwrap();
    c.set_repeat(wristwave_core::types::RepeatMode::All);

    ready(&mut c, 120);
    complete(&mut c);
    ready(&mut c, 120);
    complete(&mut c);

    // Back at the first entry, still going
    assert_eq!(c.playlist().current_index(), Some(0));
    assert_eq!(c.status(), PlaybackStatus::Preparing);
}

#[test]
fn shuffle_session_stays_within_the_playlist() {
    let mut c = controller();
    c.set_shuffle(true);
    c.append_entries((0..8).map(|i| entry(&format!("t{i}"))).collect())
        .unwrap();

    for _ in 0..32 {
        ready(&mut c, 60);
        let before = c.playlist().current_index().unwrap();
        complete(&mut c);
        let after = c.playlist().current_index().unwrap();
        assert!(after < 8);
        assert_ne!(after, before);
    }
}

#[test]
fn volume_changes_reach_the_engine_mid_session() {
    let (mut c, _, gains, _) = probed_controller();

    c.append_entries(vec![entry("one")]).unwrap();
    ready(&mut c, 120);

    c.set_volume(80).unwrap();
    c.toggle_mute().unwrap();
    c.toggle_mute().unwrap();

    let recorded = gains.borrow().clone();
    // Initial apply at default 50, then 80, mute to 0, restore to 80
    assert_eq!(recorded, vec![0.5, 0.8, 0.0, 0.8]);
}

#[test]
fn events_tell_the_whole_story() {
    let mut c = controller();
    c.append_entries(vec![entry("one")]).unwrap();
    ready(&mut c, 120);

    let events = c.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::PlaylistChanged { length: 1 })));
    assert!(events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::TrackChanged { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        PlaybackEvent::StateChanged {
            status: PlaybackStatus::Playing
        }
    )));
}

#[test]
fn stop_then_play_restarts_the_selection() {
    let (mut c, _, _, releases) = probed_controller();

    c.append_entries(vec![entry("one"), entry("two")]).unwrap();
    ready(&mut c, 120);
    c.play_at(1).unwrap();
    ready(&mut c, 90);

    c.stop();
    assert_eq!(c.status(), PlaybackStatus::Idle);
    assert!(*releases.borrow() >= 2);

    c.play().unwrap();
    assert_eq!(c.status(), PlaybackStatus::Preparing);
    assert_eq!(c.playlist().current_index(), Some(1));
}

// ===== Recording Workflows =====

#[test]
fn recording_is_refused_during_playback_then_allowed_after_pause() {
    init_tracing();
    let mut playback = controller();
    let mut recording = RecordingController::new(NullRecorder);

    playback.append_entries(vec![entry("one")]).unwrap();
    ready(&mut playback, 120);

    let err = recording
        .start(
            &AlwaysGranted,
            playback.status(),
            SourceLocator::new("file:///recordings/out"),
            RecordingFormat::Mp3,
        )
        .unwrap_err();
    assert!(matches!(err, PlaybackError::ConflictingSession));

    playback.pause().unwrap();
    recording
        .start(
            &AlwaysGranted,
            playback.status(),
            SourceLocator::new("file:///recordings/out"),
            RecordingFormat::Mp3,
        )
        .unwrap();
}

#[test]
fn finished_recording_becomes_the_selected_entry() {
    let mut playback = controller();
    let mut recording = RecordingController::new(NullRecorder);

    playback.append_entries(vec![entry("one")]).unwrap();
    ready(&mut playback, 120);
    playback.pause().unwrap();

    recording
        .start(
            &AlwaysGranted,
            playback.status(),
            SourceLocator::new("file:///recordings/out"),
            RecordingFormat::Wav,
        )
        .unwrap();
    let captured = recording.stop(&mut playback).unwrap();

    assert_eq!(captured.kind, MediaKind::Recording);
    assert!(captured.display_name.starts_with("REC_"));
    assert!(captured.display_name.ends_with(".wav"));

    // The capture is selected but playback does not start on its own
    assert_eq!(playback.playlist().len(), 2);
    assert_eq!(playback.playlist().current_entry().unwrap().id, captured.id);
    assert_eq!(playback.status(), PlaybackStatus::Idle);
}
