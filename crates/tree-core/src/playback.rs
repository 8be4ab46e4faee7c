//! Audio start-up and seeking on discrete input edges.
//!
//! Browsers only allow `play()` from inside a user gesture, so nothing plays
//! until the first toggle (or mute). The play request is asynchronous; its
//! outcome comes back through [`PlaybackSession::report_play`] and a rejected
//! request leaves the session uninitialized so the next gesture retries.

use crate::config::AudioMode;
use crate::constants::{CHAOS_CUE_SEC, TREE_CUE_SEC};
use crate::error::PlaybackError;
use crate::sink::TrackId;
use crate::state::LogicalState;
use smallvec::SmallVec;

/// Media control surface implemented by the frontend.
pub trait AudioDeck {
    fn seek(&mut self, track: TrackId, seconds: f64);
    fn is_paused(&self, track: TrackId) -> bool;
    /// Request playback. Only immediate failures are returned here; the
    /// asynchronous outcome is reported to the session later.
    fn play(&mut self, track: TrackId) -> Result<(), PlaybackError>;
    fn pause(&mut self, track: TrackId);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckCommand {
    Seek(TrackId, f64),
    Play(TrackId),
}

pub type DeckCommands = SmallVec<[DeckCommand; 4]>;

/// Playback timestamp per logical state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueTable {
    pub scattered: f64,
    pub assembled: f64,
}

impl CueTable {
    pub fn for_mode(mode: AudioMode) -> Self {
        match mode {
            AudioMode::Single => Self {
                scattered: CHAOS_CUE_SEC,
                assembled: TREE_CUE_SEC,
            },
            // each state has its own track, both start from the top
            AudioMode::Crossfade => Self {
                scattered: 0.0,
                assembled: 0.0,
            },
        }
    }

    pub fn cue(&self, state: LogicalState) -> f64 {
        match state {
            LogicalState::Scattered => self.scattered,
            LogicalState::Assembled => self.assembled,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlaybackSession {
    mode: AudioMode,
    cues: CueTable,
    initialized: bool,
}

impl PlaybackSession {
    pub fn new(mode: AudioMode) -> Self {
        Self {
            mode,
            cues: CueTable::for_mode(mode),
            initialized: false,
        }
    }

    pub fn with_cues(mut self, cues: CueTable) -> Self {
        self.cues = cues;
        self
    }

    pub fn mode(&self) -> AudioMode {
        self.mode
    }

    pub fn cues(&self) -> CueTable {
        self.cues
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn tracks(&self) -> &'static [TrackId] {
        match self.mode {
            AudioMode::Single => &[TrackId::Main],
            AudioMode::Crossfade => &[TrackId::Chaos, TrackId::Tree],
        }
    }

    fn track_for(&self, state: LogicalState) -> TrackId {
        match (self.mode, state) {
            (AudioMode::Single, _) => TrackId::Main,
            (AudioMode::Crossfade, LogicalState::Scattered) => TrackId::Chaos,
            (AudioMode::Crossfade, LogicalState::Assembled) => TrackId::Tree,
        }
    }

    /// Commands for a toggle into `new_state`.
    pub fn plan_toggle<D: AudioDeck + ?Sized>(&self, new_state: LogicalState, deck: &D) -> DeckCommands {
        let mut cmds = DeckCommands::new();
        let cue = self.cues.cue(new_state);
        match self.mode {
            AudioMode::Single => {
                cmds.push(DeckCommand::Seek(TrackId::Main, cue));
                if !self.initialized || deck.is_paused(TrackId::Main) {
                    cmds.push(DeckCommand::Play(TrackId::Main));
                }
            }
            AudioMode::Crossfade => {
                // the incoming track restarts, the outgoing one fades where it is
                let incoming = self.track_for(new_state);
                cmds.push(DeckCommand::Seek(incoming, cue));
                for &track in self.tracks() {
                    if !self.initialized || deck.is_paused(track) {
                        cmds.push(DeckCommand::Play(track));
                    }
                }
            }
        }
        cmds
    }

    /// Commands for a mute toggle. Mute only starts audio the first time.
    pub fn plan_mute<D: AudioDeck + ?Sized>(&self, state: LogicalState, _deck: &D) -> DeckCommands {
        let mut cmds = DeckCommands::new();
        if self.initialized {
            return cmds;
        }
        match self.mode {
            AudioMode::Single => {
                cmds.push(DeckCommand::Seek(TrackId::Main, self.cues.scattered));
                cmds.push(DeckCommand::Play(TrackId::Main));
            }
            AudioMode::Crossfade => {
                cmds.push(DeckCommand::Seek(self.track_for(state), self.cues.cue(state)));
                for &track in self.tracks() {
                    cmds.push(DeckCommand::Play(track));
                }
            }
        }
        cmds
    }

    /// Run `cmds` against the deck. Immediate play failures are reported
    /// straight away.
    pub fn execute<D: AudioDeck + ?Sized>(&mut self, deck: &mut D, cmds: &[DeckCommand]) {
        for cmd in cmds {
            match *cmd {
                DeckCommand::Seek(track, seconds) => deck.seek(track, seconds),
                DeckCommand::Play(track) => {
                    if let Err(err) = deck.play(track) {
                        self.report_play(track, Err(err));
                    }
                }
            }
        }
    }

    pub fn on_toggle<D: AudioDeck + ?Sized>(&mut self, new_state: LogicalState, deck: &mut D) {
        let cmds = self.plan_toggle(new_state, deck);
        log::debug!("[playback] toggle -> {new_state:?}: {cmds:?}");
        self.execute(deck, &cmds);
    }

    pub fn on_mute<D: AudioDeck + ?Sized>(&mut self, state: LogicalState, deck: &mut D) {
        let cmds = self.plan_mute(state, deck);
        if !cmds.is_empty() {
            log::debug!("[playback] starting audio from mute: {cmds:?}");
        }
        self.execute(deck, &cmds);
    }

    /// Outcome of an earlier play request.
    pub fn report_play(&mut self, track: TrackId, outcome: Result<(), PlaybackError>) {
        match outcome {
            Ok(()) => {
                if !self.initialized {
                    log::info!("[playback] audio started on {track:?}");
                }
                self.initialized = true;
            }
            Err(err) => log::warn!("[playback] {err}"),
        }
    }

    /// Pause every track and require a new gesture to resume.
    pub fn stop<D: AudioDeck + ?Sized>(&mut self, deck: &mut D) {
        for &track in self.tracks() {
            deck.pause(track);
        }
        self.initialized = false;
    }
}
