//! Volume targets and bounded-rate fades for the background music.

use crate::config::{AudioMode, FadeRates};
use crate::constants::VOLUME_EPSILON;
use crate::sink::TrackId;
use crate::state::LogicalState;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioTrack {
    pub id: TrackId,
    pub volume: f32,
    pub target: f32,
}

impl AudioTrack {
    fn silent(id: TrackId) -> Self {
        Self {
            id,
            volume: 0.0,
            target: 0.0,
        }
    }
}

/// Move `current` toward `target` by at most the fade rate for its direction.
#[inline]
pub fn fade_toward(current: f32, target: f32, rates: FadeRates, delta: f32) -> f32 {
    if (current - target).abs() <= VOLUME_EPSILON {
        return target;
    }
    if current < target {
        (current + rates.fade_in * delta).min(target)
    } else {
        (current - rates.fade_out * delta).max(target)
    }
}

/// Per-frame volume controller for one or two tracks.
#[derive(Clone, Debug)]
pub struct AudioSync {
    mode: AudioMode,
    max_volume: f32,
    rates: FadeRates,
    tracks: SmallVec<[AudioTrack; 2]>,
}

impl AudioSync {
    pub fn new(mode: AudioMode, max_volume: f32) -> Self {
        let tracks = match mode {
            AudioMode::Single => SmallVec::from_slice(&[AudioTrack::silent(TrackId::Main)]),
            AudioMode::Crossfade => SmallVec::from_slice(&[
                AudioTrack::silent(TrackId::Chaos),
                AudioTrack::silent(TrackId::Tree),
            ]),
        };
        Self {
            mode,
            max_volume,
            rates: FadeRates::for_mode(mode),
            tracks,
        }
    }

    pub fn with_rates(mut self, rates: FadeRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn mode(&self) -> AudioMode {
        self.mode
    }

    pub fn max_volume(&self) -> f32 {
        self.max_volume
    }

    pub fn tracks(&self) -> &[AudioTrack] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&AudioTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Target volume of `id` for the given inputs.
    pub fn target_for(&self, id: TrackId, state: LogicalState, muted: bool) -> f32 {
        if muted {
            return 0.0;
        }
        let audible = match id {
            TrackId::Main => true,
            TrackId::Chaos => !state.is_assembled(),
            TrackId::Tree => state.is_assembled(),
        };
        if audible {
            self.max_volume
        } else {
            0.0
        }
    }

    /// Recompute every target. Called from `step` and on input edges so targets
    /// flip in the same frame as the toggle.
    pub fn retarget(&mut self, state: LogicalState, muted: bool) {
        for i in 0..self.tracks.len() {
            let id = self.tracks[i].id;
            self.tracks[i].target = self.target_for(id, state, muted);
        }
    }

    pub fn step(&mut self, state: LogicalState, muted: bool, delta: f32) {
        self.retarget(state, muted);
        let delta = delta.max(0.0);
        for track in self.tracks.iter_mut() {
            track.volume =
                fade_toward(track.volume, track.target, self.rates, delta).clamp(0.0, self.max_volume);
        }
    }
}
