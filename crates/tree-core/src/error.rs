use crate::sink::TrackId;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} count must be at least 1")]
    EmptyCategory(&'static str),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} cue must be a non-negative time in seconds, got {value}")]
    Cue { name: &'static str, value: f64 },
    #[error("max volume must be in (0, 1], got {0}")]
    MaxVolume(f32),
    #[error("unknown audio mode {0:?}")]
    AudioMode(String),
    #[error("cannot parse {name} from {value:?}")]
    Parse { name: &'static str, value: String },
}

/// Outcome of an asynchronous `play()` request that did not start playback.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("playback of {track:?} blocked: {reason}")]
    Blocked { track: TrackId, reason: String },
    #[error("track {0:?} is not part of the current audio mode")]
    UnknownTrack(TrackId),
}
