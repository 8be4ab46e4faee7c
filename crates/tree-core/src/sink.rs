//! Output boundary of the engine.
//!
//! The scene never talks to the GPU or to audio elements directly. Each frame
//! it pushes results through a [`Sink`], which the web frontend implements by
//! filling instance buffers and setting `HTMLMediaElement.volume`.

use glam::Mat4;

/// Visual category an entity belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Particle,
    Bauble,
    Gift,
    Star,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Particle,
        Category::Bauble,
        Category::Gift,
        Category::Star,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Particle => "particle",
            Category::Bauble => "bauble",
            Category::Gift => "gift",
            Category::Star => "star",
        }
    }
}

/// Audio track handle. Single-track mode only uses `Main`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrackId {
    Main,
    Chaos,
    Tree,
}

/// Per-frame values for the ribbon material.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RibbonUniforms {
    /// Fragments with `u > growth` are discarded.
    pub growth: f32,
    /// Centre of the shimmer band along `u`; negative before a sweep starts.
    pub shimmer: f32,
    /// Eased ribbon progress; scales the wave amplitude.
    pub presence: f32,
}

pub trait Sink {
    fn set_transform(&mut self, category: Category, index: usize, transform: Mat4);
    fn set_volume(&mut self, track: TrackId, volume: f32);
    fn set_ribbon(&mut self, uniforms: RibbonUniforms);
}
