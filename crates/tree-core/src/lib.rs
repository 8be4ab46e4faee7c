//! Platform-independent engine for the scatter-to-tree scene: procedural
//! layout, per-entity datasets, transition progress, ribbon reveal and music
//! volume. Everything leaves through the [`Sink`] trait.

pub mod audio;
pub mod camera;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod easing;
pub mod error;
pub mod layout;
pub mod motion;
pub mod palette;
pub mod playback;
pub mod progress;
pub mod ribbon;
pub mod scene;
pub mod sink;
pub mod state;

pub use audio::AudioSync;
pub use camera::{Camera, OrbitCamera};
pub use config::{AudioMode, SceneConfig, SeedPolicy};
pub use dataset::{EntityRecord, SceneDataset};
pub use error::{ConfigError, PlaybackError};
pub use playback::{AudioDeck, DeckCommand, PlaybackSession};
pub use progress::ProgressTracker;
pub use ribbon::{RibbonGrowth, RibbonStrip};
pub use scene::SceneController;
pub use sink::{Category, RibbonUniforms, Sink, TrackId};
pub use state::LogicalState;
