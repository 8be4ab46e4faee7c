//! Per-entity transform for one frame.
//!
//! Each category keeps its own idle-motion and scale policy. Particles blend
//! their noise with eased progress, while ornaments switch float amplitude on
//! the logical state.

use crate::constants::*;
use crate::dataset::EntityRecord;
use crate::easing::{ease_in_out_cubic, lerp, staggered};
use crate::state::LogicalState;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[inline]
fn compose(position: Vec3, rotation: Vec3, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        position,
    )
}

/// Particle position for shared `progress`, staggered by the particle seed.
pub fn particle_position(record: &EntityRecord, progress: f32, time: f32) -> Vec3 {
    let effective = staggered(
        progress,
        record.seed,
        PARTICLE_STAGGER_GAIN,
        PARTICLE_STAGGER_DELAY,
    );
    let t = ease_in_out_cubic(effective);
    let pos = record.scatter_position.lerp(record.tree_position, t);

    // breathing while on the tree
    let freq = 1.0 + record.seed;
    let tree_noise = Vec3::new(
        (time * freq + pos.y).sin(),
        (time * freq * 0.8).cos(),
        (time * freq * 1.2).sin(),
    ) * PARTICLE_TREE_NOISE;
    // slow drift while scattered
    let phase = record.seed * 10.0;
    let scatter_noise = Vec3::new(
        (time * 0.5 + phase).sin(),
        (time * 0.3 + phase).cos(),
        (time * 0.4 + phase).sin(),
    ) * PARTICLE_SCATTER_NOISE;

    pos + scatter_noise.lerp(tree_noise, t)
}

pub fn particle_transform(record: &EntityRecord, progress: f32, time: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(record.scale),
        Quat::IDENTITY,
        particle_position(record, progress, time),
    )
}

/// Float amplitude for an ornament category. Keyed to the logical state, so it
/// jumps on toggle instead of following progress.
#[inline]
pub fn float_amplitude(assembled_amp: f32, scattered_amp: f32, state: LogicalState) -> f32 {
    if state.is_assembled() {
        assembled_amp
    } else {
        scattered_amp
    }
}

pub fn bauble_transform(record: &EntityRecord, eased: f32, state: LogicalState, time: f32) -> Mat4 {
    let mut pos = record.scatter_position.lerp(record.tree_position, eased);
    pos.y += (time + pos.x * 0.5).sin()
        * float_amplitude(BAUBLE_FLOAT_ASSEMBLED, BAUBLE_FLOAT_SCATTERED, state);

    let drift = time * BAUBLE_DRIFT_SPIN * (1.0 - eased);
    let rotation = (record.scatter_rotation + Vec3::splat(drift)).lerp(record.tree_rotation, eased);

    let shrink = if state.is_assembled() {
        1.0
    } else {
        BAUBLE_SCATTER_SHRINK
    };
    compose(pos, rotation, record.scale * shrink)
}

pub fn gift_transform(record: &EntityRecord, eased: f32, state: LogicalState, time: f32) -> Mat4 {
    let mut pos = record.scatter_position.lerp(record.tree_position, eased);
    pos.y += (time + pos.z * 0.5).cos()
        * float_amplitude(GIFT_FLOAT_ASSEMBLED, GIFT_FLOAT_SCATTERED, state);
    let rotation = record.scatter_rotation.lerp(record.tree_rotation, eased);
    // small while scattered, full size on the tree
    compose(pos, rotation, record.scale * (0.5 + 0.5 * eased))
}

/// Star orientation carried between frames.
///
/// While assembled the Y angle integrates `delta`; while scattered it tumbles as
/// a function of time. Re-assembling resumes spinning from the last tumble
/// angle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StarSpin {
    pub rotation: Vec3,
}

impl StarSpin {
    pub fn update(
        &mut self,
        record: &EntityRecord,
        state: LogicalState,
        time: f32,
        delta: f32,
    ) -> Vec3 {
        if state.is_assembled() {
            self.rotation.x = 0.0;
            self.rotation.y += delta * STAR_SPIN_SPEED;
            self.rotation.z = 0.0;
        } else {
            self.rotation = Vec3::new(
                record.scatter_rotation.x + time * STAR_TUMBLE_SPEED,
                record.scatter_rotation.y + time * STAR_TUMBLE_SPEED,
                0.0,
            );
        }
        self.rotation
    }
}

pub fn star_transform(record: &EntityRecord, eased: f32, rotation: Vec3) -> Mat4 {
    let pos = record.scatter_position.lerp(record.tree_position, eased);
    let scale = lerp(STAR_SCALE_SCATTERED, record.scale, eased);
    compose(pos, rotation, scale)
}
