//! Runtime configuration with defaults taken from `constants.rs`.

use crate::constants::*;
use crate::error::ConfigError;
use crate::layout::TreeShape;
use crate::playback::CueTable;

/// How background music follows the logical state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AudioMode {
    /// One looping track; state toggles seek to a cue, mute fades it.
    #[default]
    Single,
    /// One track per state, cross-faded on toggle.
    Crossfade,
}

impl std::str::FromStr for AudioMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(AudioMode::Single),
            "crossfade" | "dual" => Ok(AudioMode::Crossfade),
            other => Err(ConfigError::AudioMode(other.to_string())),
        }
    }
}

/// Fade speeds in volume units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeRates {
    pub fade_in: f32,
    pub fade_out: f32,
}

impl FadeRates {
    pub fn for_mode(mode: AudioMode) -> Self {
        match mode {
            AudioMode::Single => Self {
                fade_in: SINGLE_FADE_RATE,
                fade_out: SINGLE_FADE_RATE,
            },
            AudioMode::Crossfade => Self {
                fade_in: CROSSFADE_IN_RATE,
                fade_out: CROSSFADE_OUT_RATE,
            },
        }
    }
}

/// Transition rates per animated category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRates {
    pub particles: f32,
    pub ornaments: f32,
    pub ribbon: f32,
}

impl Default for TransitionRates {
    fn default() -> Self {
        Self {
            particles: PARTICLE_RATE,
            ornaments: ORNAMENT_RATE,
            ribbon: RIBBON_RATE,
        }
    }
}

/// Ribbon reveal timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonTiming {
    pub delay: f32,
    pub grow_rate: f32,
    pub shrink_rate: f32,
    pub shimmer_rate: f32,
}

impl Default for RibbonTiming {
    fn default() -> Self {
        Self {
            delay: RIBBON_DELAY_SEC,
            grow_rate: RIBBON_GROW_RATE,
            shrink_rate: RIBBON_SHRINK_RATE,
            shimmer_rate: SHIMMER_RATE,
        }
    }
}

/// Seeds for the two random streams used while building the dataset.
///
/// `layout` drives every term of the tree layout plus per-entity scale, colour
/// and rotation; `scatter` drives only the scattered cloud. `None` seeds from
/// entropy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedPolicy {
    pub layout: Option<u64>,
    pub scatter: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub ornament_count: usize,
    pub shape: TreeShape,
    pub rates: TransitionRates,
    pub ribbon: RibbonTiming,
    pub audio_mode: AudioMode,
    pub max_volume: f32,
    /// Fade speeds; `None` uses the defaults of `audio_mode`.
    pub fades: Option<FadeRates>,
    /// Playback cues; `None` uses the defaults of `audio_mode`.
    pub cues: Option<CueTable>,
    /// Browsers block autoplay, so the session starts silent and the first
    /// mute press both starts and unmutes the music.
    pub start_muted: bool,
    pub seeds: SeedPolicy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            ornament_count: DEFAULT_ORNAMENT_COUNT,
            shape: TreeShape::default(),
            rates: TransitionRates::default(),
            ribbon: RibbonTiming::default(),
            audio_mode: AudioMode::default(),
            max_volume: MAX_VOLUME,
            fades: None,
            cues: None,
            start_muted: true,
            seeds: SeedPolicy::default(),
        }
    }
}

impl SceneConfig {
    /// Number of baubles; the rest of the ornaments are gifts.
    pub fn bauble_count(&self) -> usize {
        self.ornament_count * BAUBLE_PERCENT / 100
    }

    pub fn gift_count(&self) -> usize {
        self.ornament_count - self.bauble_count()
    }

    pub fn fade_rates(&self) -> FadeRates {
        self.fades.unwrap_or_else(|| FadeRates::for_mode(self.audio_mode))
    }

    pub fn cue_table(&self) -> CueTable {
        self.cues.unwrap_or_else(|| CueTable::for_mode(self.audio_mode))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyCategory("particle"));
        }
        if self.bauble_count() == 0 || self.gift_count() == 0 {
            return Err(ConfigError::EmptyCategory("ornament"));
        }
        let positives = [
            ("tree height", self.shape.height),
            ("tree radius", self.shape.radius_base),
            ("scatter radius", self.shape.scatter_radius),
            ("particle rate", self.rates.particles),
            ("ornament rate", self.rates.ornaments),
            ("ribbon rate", self.rates.ribbon),
            ("ribbon grow rate", self.ribbon.grow_rate),
            ("ribbon shrink rate", self.ribbon.shrink_rate),
            ("shimmer rate", self.ribbon.shimmer_rate),
            ("fade-in rate", self.fade_rates().fade_in),
            ("fade-out rate", self.fade_rates().fade_out),
        ];
        for (name, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.ribbon.delay < 0.0 {
            return Err(ConfigError::NonPositive {
                name: "ribbon delay",
                value: self.ribbon.delay,
            });
        }
        let cues = self.cue_table();
        for (name, value) in [("scattered", cues.scattered), ("assembled", cues.assembled)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Cue { name, value });
            }
        }
        if !(self.max_volume > 0.0 && self.max_volume <= 1.0) {
            return Err(ConfigError::MaxVolume(self.max_volume));
        }
        Ok(())
    }

    /// Apply one `key=value` override, as read from a URL query string.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
            value.trim().parse::<T>().map_err(|_| ConfigError::Parse {
                name,
                value: value.to_string(),
            })
        }
        match key {
            "particles" => self.particle_count = parse("particles", value)?,
            "ornaments" => self.ornament_count = parse("ornaments", value)?,
            "audio" => self.audio_mode = value.parse()?,
            "volume" => self.max_volume = parse("volume", value)?,
            "muted" => self.start_muted = parse("muted", value)?,
            "seed" => {
                let seed: u64 = parse("seed", value)?;
                self.seeds.layout = Some(seed);
            }
            _ => log::debug!("ignoring unknown option {key}"),
        }
        Ok(())
    }
}
