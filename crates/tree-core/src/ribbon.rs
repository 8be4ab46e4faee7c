//! Ribbon reveal: growth state machine and strip geometry.
//!
//! The ribbon is never rebuilt while animating. Its strip carries a `u`
//! coordinate from 0 at the dovetail end to 1 at the top, and the fragment
//! shader discards everything past the current growth.

use crate::config::RibbonTiming;
use crate::constants::*;
use crate::state::LogicalState;
use glam::Vec3;
use std::f32::consts::TAU;

/// Delayed, asymmetric growth with a one-shot shimmer sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonGrowth {
    timing: RibbonTiming,
    delay_elapsed: f32,
    growth: f32,
    shimmer: f32,
}

impl RibbonGrowth {
    pub fn new(timing: RibbonTiming) -> Self {
        Self {
            timing,
            delay_elapsed: 0.0,
            growth: 0.0,
            shimmer: SHIMMER_RESET,
        }
    }

    pub fn growth(&self) -> f32 {
        self.growth
    }

    pub fn delay_elapsed(&self) -> f32 {
        self.delay_elapsed
    }

    pub fn shimmer(&self) -> f32 {
        self.shimmer
    }

    pub fn is_saturated(&self) -> bool {
        self.growth > RIBBON_SATURATED
    }

    pub fn step(&mut self, state: LogicalState, delta: f32) {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA);
        if state.is_assembled() {
            // growth holds (not resets) until the delay has elapsed
            if self.delay_elapsed < self.timing.delay {
                self.delay_elapsed += delta;
            } else {
                self.growth += delta * self.timing.grow_rate;
            }
        } else {
            self.delay_elapsed = 0.0;
            self.growth -= delta * self.timing.shrink_rate;
        }
        self.growth = self.growth.clamp(0.0, 1.0);

        if self.is_saturated() && state.is_assembled() {
            self.shimmer = (self.shimmer + delta * self.timing.shimmer_rate).min(SHIMMER_END);
        } else {
            self.shimmer = SHIMMER_RESET;
        }
    }
}

/// Centripetal Catmull-Rom curve through control points, with an arc-length
/// table so samples can be spaced evenly along the length.
#[derive(Clone, Debug)]
pub struct CatmullRomCurve {
    points: Vec<Vec3>,
    arc: Vec<f32>,
}

const ARC_DIVISIONS: usize = 2000;

impl CatmullRomCurve {
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 2, "curve needs at least two control points");
        let mut curve = Self {
            points,
            arc: Vec::with_capacity(ARC_DIVISIONS + 1),
        };
        let mut last = curve.point(0.0);
        let mut sum = 0.0;
        curve.arc.push(0.0);
        for i in 1..=ARC_DIVISIONS {
            let p = curve.point(i as f32 / ARC_DIVISIONS as f32);
            sum += p.distance(last);
            curve.arc.push(sum);
            last = p;
        }
        curve
    }

    pub fn length(&self) -> f32 {
        self.arc.last().copied().unwrap_or(0.0)
    }

    /// Point at curve parameter `t` in [0, 1].
    pub fn point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        let p = (n - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut w = p - seg as f32;
        if seg >= n - 1 {
            seg = n - 2;
            w = 1.0;
        }
        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };
        centripetal(p0, p1, p2, p3, w)
    }

    /// Map an arc-length fraction `u` to the curve parameter.
    fn u_to_t(&self, u: f32) -> f32 {
        let target = u.clamp(0.0, 1.0) * self.length();
        let i = match self.arc.binary_search_by(|v| v.total_cmp(&target)) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
        .min(ARC_DIVISIONS - 1);
        let seg_len = self.arc[i + 1] - self.arc[i];
        let frac = if seg_len > 0.0 {
            ((target - self.arc[i]) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (i as f32 + frac) / ARC_DIVISIONS as f32
    }

    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point(self.u_to_t(u))
    }

    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.u_to_t(u);
        let h = 1e-4;
        let a = self.point((t - h).max(0.0));
        let b = self.point((t + h).min(1.0));
        (b - a).normalize_or_zero()
    }
}

fn centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, w: f32) -> Vec3 {
    let mut dt0 = p0.distance_squared(p1).powf(0.25);
    let mut dt1 = p1.distance_squared(p2).powf(0.25);
    let mut dt2 = p2.distance_squared(p3).powf(0.25);
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }
    let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
    let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

    let w2 = w * w;
    let w3 = w2 * w;
    let c2 = -3.0 * p1 + 3.0 * p2 - 2.0 * m1 - m2;
    let c3 = 2.0 * p1 - 2.0 * p2 + m1 + m2;
    p1 + m1 * w + c2 * w2 + c3 * w3
}

/// Spiral control points that wrap the tree, tapering toward the top.
pub fn ribbon_curve() -> CatmullRomCurve {
    let points = (0..=RIBBON_CONTROL_POINTS)
        .map(|i| {
            let t = i as f32 / RIBBON_CONTROL_POINTS as f32;
            let angle = t * TAU * RIBBON_TURNS;
            let y = t * RIBBON_HEIGHT - RIBBON_HEIGHT / 2.0 - RIBBON_DROP;
            let r = (1.0 - t) * RIBBON_RADIUS_BASE + RIBBON_RADIUS_OFFSET;
            Vec3::new(angle.cos() * r, y, angle.sin() * r)
        })
        .collect();
    CatmullRomCurve::new(points)
}

/// Flat strip mesh; two vertices per sample.
#[derive(Clone, Debug, Default)]
pub struct RibbonStrip {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl RibbonStrip {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

pub fn build_strip(curve: &CatmullRomCurve, segments: usize, width: f32) -> RibbonStrip {
    let segments = segments.max(1);
    let verts = (segments + 1) * 2;
    let mut strip = RibbonStrip {
        positions: Vec::with_capacity(verts),
        normals: Vec::with_capacity(verts),
        uvs: Vec::with_capacity(verts),
        indices: Vec::with_capacity(segments * 6),
    };
    let half = width / 2.0;

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let point = curve.point_at(t);
        let tangent = curve.tangent_at(t);
        // faces point away from the trunk
        let radial = Vec3::new(point.x, 0.0, point.z)
            .try_normalize()
            .unwrap_or(Vec3::X);
        let across = tangent.cross(radial).normalize_or_zero();

        let (v1, v2) = if t < RIBBON_DOVETAIL {
            // V-cut: edges pull in toward the centre line and forward
            let cut = 1.0 - t / RIBBON_DOVETAIL;
            let depth = cut * half * 1.5;
            let offset = half - cut * half;
            (
                point + across * offset + tangent * depth,
                point - across * offset + tangent * depth,
            )
        } else {
            (point + across * half, point - across * half)
        };
        strip.positions.push(v1.to_array());
        strip.positions.push(v2.to_array());
        strip.normals.push(radial.to_array());
        strip.normals.push(radial.to_array());
        strip.uvs.push([t, 1.0]);
        strip.uvs.push([t, 0.0]);

        if i < segments {
            let base = (i * 2) as u32;
            strip
                .indices
                .extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
        }
    }
    strip
}

/// Strip with the default ribbon dimensions.
pub fn default_strip() -> RibbonStrip {
    build_strip(&ribbon_curve(), RIBBON_SEGMENTS, RIBBON_WIDTH)
}
