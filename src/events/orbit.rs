// Pure drag/wheel mapping for the orbit camera; the listeners live in
// `events/pointer.rs`.

use std::f32::consts::TAU;

/// One full viewport-height drag turns the camera once around.
pub const ROTATE_SPEED: f32 = 1.0;
/// Distance factor per wheel notch toward the tree.
pub const ZOOM_STEP: f32 = 0.95;

/// Tracks the single pointer that is currently dragging the view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    pointer: Option<i32>,
    last: [f32; 2],
}

impl DragTracker {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.pointer = Some(pointer_id);
        self.last = [x, y];
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pointer.is_some()
    }

    /// Movement since the last event of the dragging pointer; other pointers
    /// and hover moves yield `None`.
    pub fn move_to(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<[f32; 2]> {
        if self.pointer != Some(pointer_id) {
            return None;
        }
        let delta = [x - self.last[0], y - self.last[1]];
        self.last = [x, y];
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if self.pointer == Some(pointer_id) {
            self.pointer = None;
        }
    }
}

/// Azimuth and elevation change for a drag of `delta` CSS pixels.
///
/// Dragging right swings the camera left around the tree; dragging down
/// raises it.
pub fn orbit_delta(delta: [f32; 2], viewport_height: f32) -> (f32, f32) {
    let h = viewport_height.max(1.0);
    (
        -TAU * delta[0] / h * ROTATE_SPEED,
        TAU * delta[1] / h * ROTATE_SPEED,
    )
}

/// Distance multiplier for one wheel event.
pub fn zoom_factor(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0 / ZOOM_STEP
    } else if delta_y < 0.0 {
        ZOOM_STEP
    } else {
        1.0
    }
}
