// Host-side tests for volume fades and the playback session.

use std::collections::HashMap;
use tree_core::config::AudioMode;
use tree_core::playback::CueTable;
use tree_core::{AudioDeck, AudioSync, LogicalState, PlaybackError, PlaybackSession, TrackId};

#[test]
fn crossfade_targets_flip_in_the_toggle_frame() {
    let mut audio = AudioSync::new(AudioMode::Crossfade, 0.6);
    for _ in 0..120 {
        audio.step(LogicalState::Scattered, false, 1.0 / 60.0);
    }
    assert_eq!(audio.track(TrackId::Chaos).unwrap().volume, 0.6);
    assert_eq!(audio.track(TrackId::Tree).unwrap().volume, 0.0);

    audio.step(LogicalState::Assembled, false, 1.0 / 60.0);
    assert_eq!(audio.track(TrackId::Chaos).unwrap().target, 0.0);
    assert_eq!(audio.track(TrackId::Tree).unwrap().target, 0.6);

    let mut chaos = audio.track(TrackId::Chaos).unwrap().volume;
    let mut tree = audio.track(TrackId::Tree).unwrap().volume;
    for _ in 0..120 {
        audio.step(LogicalState::Assembled, false, 1.0 / 60.0);
        let c = audio.track(TrackId::Chaos).unwrap().volume;
        let t = audio.track(TrackId::Tree).unwrap().volume;
        assert!(c <= chaos && (0.0..=0.6).contains(&c));
        assert!(t >= tree && (0.0..=0.6).contains(&t));
        chaos = c;
        tree = t;
    }
    assert_eq!(chaos, 0.0);
    assert_eq!(tree, 0.6);
}

#[test]
fn single_track_fades_symmetrically() {
    let mut audio = AudioSync::new(AudioMode::Single, 0.6);
    audio.step(LogicalState::Scattered, false, 0.1);
    let up = audio.track(TrackId::Main).unwrap().volume;
    for _ in 0..20 {
        audio.step(LogicalState::Scattered, false, 0.1);
    }
    audio.step(LogicalState::Scattered, true, 0.1);
    let down = 0.6 - audio.track(TrackId::Main).unwrap().volume;
    assert!((up - down).abs() < 1e-5);
}

/// Records every call and lets tests decide what `play()` does.
#[derive(Default)]
struct RecordingDeck {
    seeks: Vec<(TrackId, f64)>,
    plays: Vec<TrackId>,
    paused: HashMap<TrackId, bool>,
    reject: bool,
}

impl AudioDeck for RecordingDeck {
    fn seek(&mut self, track: TrackId, seconds: f64) {
        self.seeks.push((track, seconds));
    }
    fn is_paused(&self, track: TrackId) -> bool {
        self.paused.get(&track).copied().unwrap_or(true)
    }
    fn play(&mut self, track: TrackId) -> Result<(), PlaybackError> {
        self.plays.push(track);
        if self.reject {
            return Err(PlaybackError::Blocked {
                track,
                reason: "NotAllowedError".into(),
            });
        }
        self.paused.insert(track, false);
        Ok(())
    }
    fn pause(&mut self, track: TrackId) {
        self.paused.insert(track, true);
    }
}

#[test]
fn rejected_play_keeps_session_uninitialized_and_retries() {
    let mut session = PlaybackSession::new(AudioMode::Single);
    let mut deck = RecordingDeck {
        reject: true,
        ..Default::default()
    };
    session.on_toggle(LogicalState::Assembled, &mut deck);
    assert!(!session.is_initialized());

    deck.reject = false;
    session.on_toggle(LogicalState::Scattered, &mut deck);
    assert_eq!(deck.plays.len(), 2);
    session.report_play(TrackId::Main, Ok(()));
    assert!(session.is_initialized());
}

#[test]
fn async_rejection_is_reported_later() {
    let mut session = PlaybackSession::new(AudioMode::Single);
    let mut deck = RecordingDeck::default();
    session.on_toggle(LogicalState::Assembled, &mut deck);
    session.report_play(
        TrackId::Main,
        Err(PlaybackError::Blocked {
            track: TrackId::Main,
            reason: "autoplay".into(),
        }),
    );
    assert!(!session.is_initialized());
    // the element did not actually start
    deck.paused.insert(TrackId::Main, true);
    session.on_toggle(LogicalState::Scattered, &mut deck);
    assert_eq!(deck.plays.len(), 2);
}

#[test]
fn initialized_session_only_seeks_while_playing() {
    let mut session = PlaybackSession::new(AudioMode::Single);
    let mut deck = RecordingDeck::default();
    session.on_toggle(LogicalState::Assembled, &mut deck);
    session.report_play(TrackId::Main, Ok(()));
    session.on_toggle(LogicalState::Scattered, &mut deck);
    session.on_toggle(LogicalState::Assembled, &mut deck);

    let cues = CueTable::for_mode(AudioMode::Single);
    assert_eq!(deck.plays.len(), 1);
    assert_eq!(
        deck.seeks,
        vec![
            (TrackId::Main, cues.assembled),
            (TrackId::Main, cues.scattered),
            (TrackId::Main, cues.assembled),
        ]
    );
}

#[test]
fn mute_starts_audio_from_the_chaos_cue() {
    let mut session = PlaybackSession::new(AudioMode::Single);
    let mut deck = RecordingDeck::default();
    session.on_mute(LogicalState::Scattered, &mut deck);
    assert_eq!(deck.seeks, vec![(TrackId::Main, 0.0)]);
    assert_eq!(deck.plays, vec![TrackId::Main]);
    session.report_play(TrackId::Main, Ok(()));
    session.on_mute(LogicalState::Scattered, &mut deck);
    assert_eq!(deck.plays.len(), 1);
}
