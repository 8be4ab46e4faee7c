//! Procedural layouts: a volume-uniform scattered cloud and a conical spiral.
//!
//! The deterministic cone math ([`tree_anchor`]) is kept apart from the random
//! terms so the tree shape can be checked without an RNG.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Geometry of both layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeShape {
    pub height: f32,
    pub radius_base: f32,
    pub scatter_radius: f32,
    pub angle_step: f32,
    pub angle_jitter: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            height: TREE_HEIGHT,
            radius_base: TREE_RADIUS_BASE,
            scatter_radius: SCATTER_RADIUS,
            angle_step: SPIRAL_ANGLE_STEP,
            angle_jitter: SPIRAL_ANGLE_JITTER,
        }
    }
}

/// Deterministic placement of an index on the cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeAnchor {
    /// Normalized height, 0 at the base and approaching 1 at the tip.
    pub ratio: f32,
    /// World Y, centred on the origin.
    pub height: f32,
    /// Cone radius at that height.
    pub radius: f32,
    /// Spiral azimuth before the random offset.
    pub base_angle: f32,
}

/// Uniform random point inside a sphere of `radius`.
///
/// The cube root on the radius keeps density uniform by volume, so the cloud
/// does not clump at its centre.
pub fn scatter_position<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (rng.gen::<f32>() * 2.0 - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Cone placement of `index` out of `total`.
///
/// # Panics
/// When `index >= total`; that is a dataset construction bug.
pub fn tree_anchor(shape: &TreeShape, index: usize, total: usize) -> TreeAnchor {
    assert!(
        index < total,
        "tree index {index} out of range for {total} entities"
    );
    let ratio = index as f32 / total as f32;
    TreeAnchor {
        ratio,
        height: ratio * shape.height - shape.height / 2.0,
        radius: (1.0 - ratio) * shape.radius_base,
        base_angle: index as f32 * shape.angle_step,
    }
}

/// Spiral position on the cone with a small random azimuth offset and
/// optional per-axis jitter of amplitude `jitter`.
pub fn tree_position<R: Rng + ?Sized>(
    rng: &mut R,
    shape: &TreeShape,
    index: usize,
    total: usize,
    jitter: f32,
) -> Vec3 {
    let anchor = tree_anchor(shape, index, total);
    let angle = anchor.base_angle + rng.gen::<f32>() * shape.angle_jitter;
    let jx = (rng.gen::<f32>() - 0.5) * jitter;
    let jy = (rng.gen::<f32>() - 0.5) * jitter;
    let jz = (rng.gen::<f32>() - 0.5) * jitter;
    Vec3::new(
        angle.cos() * anchor.radius + jx,
        anchor.height + jy,
        angle.sin() * anchor.radius + jz,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn anchor_spans_the_cone() {
        let shape = TreeShape::default();
        let base = tree_anchor(&shape, 0, 100);
        assert_eq!(base.height, -shape.height / 2.0);
        assert_eq!(base.radius, shape.radius_base);
        let top = tree_anchor(&shape, 99, 100);
        assert!(top.height < shape.height / 2.0);
        assert!(top.radius > 0.0 && top.radius < 0.1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_total_panics() {
        tree_anchor(&TreeShape::default(), 10, 10);
    }

    #[test]
    fn zero_jitter_stays_on_the_cone() {
        let shape = TreeShape::default();
        let mut rng = StdRng::seed_from_u64(3);
        for i in 0..50 {
            let p = tree_position(&mut rng, &shape, i, 50, 0.0);
            let a = tree_anchor(&shape, i, 50);
            assert!((p.y - a.height).abs() < 1e-5);
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!((radial - a.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn scatter_stays_inside_sphere() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            assert!(scatter_position(&mut rng, 25.0).length() <= 25.0 + 1e-3);
        }
    }
}
