//! Scene controller: owns every per-frame updater and the input edges.

use crate::audio::AudioSync;
use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::dataset::SceneDataset;
use crate::easing::ease_in_out_cubic;
use crate::error::{ConfigError, PlaybackError};
use crate::motion::{bauble_transform, gift_transform, particle_transform, star_transform, StarSpin};
use crate::playback::{AudioDeck, PlaybackSession};
use crate::progress::ProgressTracker;
use crate::ribbon::RibbonGrowth;
use crate::sink::{Category, RibbonUniforms, Sink, TrackId};
use crate::state::LogicalState;
use glam::{Mat4, Quat, Vec3};

/// Model matrix of the whole scene group.
pub fn scene_matrix() -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(SCENE_SCALE),
        Quat::IDENTITY,
        Vec3::from_array(SCENE_OFFSET),
    )
}

pub struct SceneController {
    config: SceneConfig,
    dataset: SceneDataset,
    state: LogicalState,
    muted: bool,
    has_assembled: bool,
    particles: ProgressTracker,
    ornaments: ProgressTracker,
    ribbon_presence: ProgressTracker,
    ribbon: RibbonGrowth,
    star: StarSpin,
    audio: AudioSync,
    playback: PlaybackSession,
    camera: OrbitCamera,
}

impl SceneController {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dataset = SceneDataset::build(&config);
        Ok(Self::with_dataset(config, dataset))
    }

    /// Controller over an already built dataset. `config` is not re-validated.
    pub fn with_dataset(config: SceneConfig, dataset: SceneDataset) -> Self {
        Self {
            particles: ProgressTracker::new(config.rates.particles),
            ornaments: ProgressTracker::new(config.rates.ornaments),
            ribbon_presence: ProgressTracker::new(config.rates.ribbon),
            ribbon: RibbonGrowth::new(config.ribbon),
            star: StarSpin::default(),
            audio: AudioSync::new(config.audio_mode, config.max_volume)
                .with_rates(config.fade_rates()),
            playback: PlaybackSession::new(config.audio_mode).with_cues(config.cue_table()),
            camera: OrbitCamera::new(CAMERA_DISTANCE),
            state: LogicalState::default(),
            muted: config.start_muted,
            has_assembled: false,
            config,
            dataset,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn dataset(&self) -> &SceneDataset {
        &self.dataset
    }

    pub fn state(&self) -> LogicalState {
        self.state
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// True once the tree has been assembled at least once.
    pub fn has_assembled(&self) -> bool {
        self.has_assembled
    }

    pub fn particle_progress(&self) -> f32 {
        self.particles.current()
    }

    pub fn ornament_progress(&self) -> f32 {
        self.ornaments.current()
    }

    pub fn ribbon(&self) -> &RibbonGrowth {
        &self.ribbon
    }

    pub fn audio(&self) -> &AudioSync {
        &self.audio
    }

    pub fn playback(&self) -> &PlaybackSession {
        &self.playback
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn toggle_state<D: AudioDeck + ?Sized>(&mut self, deck: &mut D) -> LogicalState {
        let next = self.state.toggled();
        self.playback.on_toggle(next, deck);
        if next.is_assembled() {
            self.has_assembled = true;
        }
        self.state = next;
        self.audio.retarget(self.state, self.muted);
        log::debug!("[scene] state -> {next:?}");
        next
    }

    pub fn toggle_mute<D: AudioDeck + ?Sized>(&mut self, deck: &mut D) -> bool {
        self.playback.on_mute(self.state, deck);
        self.muted = !self.muted;
        self.audio.retarget(self.state, self.muted);
        log::debug!("[scene] muted={}", self.muted);
        self.muted
    }

    pub fn report_play(&mut self, track: TrackId, outcome: Result<(), PlaybackError>) {
        self.playback.report_play(track, outcome);
    }

    pub fn stop_audio<D: AudioDeck + ?Sized>(&mut self, deck: &mut D) {
        self.playback.stop(deck);
    }

    /// Advance one frame and push every transform, volume and ribbon value.
    pub fn tick<S: Sink + ?Sized>(&mut self, elapsed: f32, delta: f32, sink: &mut S) {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA);
        let state = self.state;

        let particle_progress = self.particles.step(state, delta);
        for (i, record) in self.dataset.particles.iter().enumerate() {
            sink.set_transform(
                Category::Particle,
                i,
                particle_transform(record, particle_progress, elapsed),
            );
        }

        let eased = ease_in_out_cubic(self.ornaments.step(state, delta));
        for (i, record) in self.dataset.baubles.iter().enumerate() {
            sink.set_transform(
                Category::Bauble,
                i,
                bauble_transform(record, eased, state, elapsed),
            );
        }
        for (i, record) in self.dataset.gifts.iter().enumerate() {
            sink.set_transform(Category::Gift, i, gift_transform(record, eased, state, elapsed));
        }
        let rotation = self.star.update(&self.dataset.star, state, elapsed, delta);
        sink.set_transform(
            Category::Star,
            0,
            star_transform(&self.dataset.star, eased, rotation),
        );

        self.ribbon.step(state, delta);
        let presence = ease_in_out_cubic(self.ribbon_presence.step(state, delta));
        sink.set_ribbon(RibbonUniforms {
            growth: self.ribbon.growth(),
            shimmer: self.ribbon.shimmer(),
            presence,
        });

        self.audio.step(state, self.muted, delta);
        for track in self.audio.tracks() {
            sink.set_volume(track.id, track.volume);
        }

        self.camera.advance(state, delta);
    }
}
