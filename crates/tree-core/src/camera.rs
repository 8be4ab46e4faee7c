//! Camera description and the auto-rotating orbit used by the scene.
//!
//! Platform-free: the web renderer only asks for matrices.

use crate::constants::{
    CAMERA_FOV_DEG, CAMERA_MAX_DISTANCE, CAMERA_MAX_ELEVATION, CAMERA_MIN_DISTANCE, ORBIT_SPEED_ASSEMBLED,
    ORBIT_SPEED_SCATTERED,
};
use crate::state::LogicalState;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit around the tree axis that turns slowly while scattered and faster
/// once the tree is assembled. User drags add to the same angles.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    azimuth: f32,
    elevation: f32,
    distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.0,
            distance: distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Rotate by a user drag. Elevation stops short of the poles.
    pub fn orbit_by(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(TAU);
        self.elevation =
            (self.elevation + d_elevation).clamp(-CAMERA_MAX_ELEVATION, CAMERA_MAX_ELEVATION);
    }

    /// Scale the distance, e.g. `0.95` to dolly in one wheel notch.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor > 0.0 && factor.is_finite() {
            self.set_distance(self.distance * factor);
        }
    }

    /// Orbit speed in radians per second for the given state.
    pub fn angular_speed(state: LogicalState) -> f32 {
        let turns_per_minute = if state.is_assembled() {
            ORBIT_SPEED_ASSEMBLED
        } else {
            ORBIT_SPEED_SCATTERED
        };
        turns_per_minute * TAU / 60.0
    }

    pub fn advance(&mut self, state: LogicalState, delta: f32) {
        self.azimuth = (self.azimuth + Self::angular_speed(state) * delta.max(0.0)) % TAU;
    }

    pub fn eye(&self) -> Vec3 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        Vec3::new(sa * ce, se, ca * ce) * self.distance
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: 0.1,
            zfar: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembled_orbits_faster() {
        assert!(
            OrbitCamera::angular_speed(LogicalState::Assembled)
                > OrbitCamera::angular_speed(LogicalState::Scattered)
        );
    }

    #[test]
    fn distance_is_clamped() {
        let mut cam = OrbitCamera::new(500.0);
        assert_eq!(cam.distance(), CAMERA_MAX_DISTANCE);
        cam.set_distance(1.0);
        assert_eq!(cam.distance(), CAMERA_MIN_DISTANCE);
    }

    #[test]
    fn eye_keeps_distance_while_orbiting() {
        let mut cam = OrbitCamera::new(35.0);
        for _ in 0..120 {
            cam.advance(LogicalState::Assembled, 1.0 / 60.0);
        }
        assert!(cam.azimuth() > 0.0);
        assert!((cam.eye().length() - 35.0).abs() < 1e-3);
    }

    #[test]
    fn drag_clamps_elevation_and_wraps_azimuth() {
        let mut cam = OrbitCamera::new(35.0);
        cam.orbit_by(-1.0, 10.0);
        assert_eq!(cam.elevation(), CAMERA_MAX_ELEVATION);
        assert!((cam.azimuth() - (TAU - 1.0)).abs() < 1e-5);
        cam.orbit_by(0.0, -20.0);
        assert_eq!(cam.elevation(), -CAMERA_MAX_ELEVATION);
        assert!(cam.eye().y < 0.0);
    }

    #[test]
    fn zoom_stays_within_limits() {
        let mut cam = OrbitCamera::new(35.0);
        cam.zoom_by(0.5);
        assert!((cam.distance() - 17.5).abs() < 1e-5);
        for _ in 0..100 {
            cam.zoom_by(0.95);
        }
        assert_eq!(cam.distance(), CAMERA_MIN_DISTANCE);
        for _ in 0..100 {
            cam.zoom_by(1.0 / 0.95);
        }
        assert_eq!(cam.distance(), CAMERA_MAX_DISTANCE);
        cam.zoom_by(0.0);
        cam.zoom_by(f32::NAN);
        assert_eq!(cam.distance(), CAMERA_MAX_DISTANCE);
    }
}
