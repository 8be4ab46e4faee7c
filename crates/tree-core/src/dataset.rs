//! Static per-entity data, built once per session.
//!
//! Every record carries both layouts; per frame only the shared category
//! progress changes, so nothing here is touched after [`SceneDataset::build`].

use crate::config::{SceneConfig, SeedPolicy};
use crate::constants::*;
use crate::layout::{scatter_position, tree_position, TreeShape};
use crate::palette;
use crate::sink::Category;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct EntityRecord {
    pub category: Category,
    pub scatter_position: Vec3,
    pub tree_position: Vec3,
    /// Euler XYZ, radians.
    pub scatter_rotation: Vec3,
    pub tree_rotation: Vec3,
    pub scale: f32,
    /// Linear RGB, glow multiplier already applied.
    pub color: Vec3,
    /// Per-entity random in [0, 1).
    pub seed: f32,
}

#[derive(Clone, Debug)]
pub struct SceneDataset {
    pub particles: Vec<EntityRecord>,
    pub baubles: Vec<EntityRecord>,
    pub gifts: Vec<EntityRecord>,
    pub star: EntityRecord,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// The two independent random streams of a build.
pub struct BuildRngs {
    pub layout: StdRng,
    pub scatter: StdRng,
}

impl BuildRngs {
    pub fn new(policy: SeedPolicy) -> Self {
        // Decorrelate the streams when both come from the same seed.
        let scatter = policy
            .scatter
            .map(|s| s ^ 0x9E37_79B9_7F4A_7C15)
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            layout: rng_for(policy.layout),
            scatter,
        }
    }
}

impl SceneDataset {
    pub fn build(config: &SceneConfig) -> Self {
        let mut rngs = BuildRngs::new(config.seeds);
        let dataset = Self {
            particles: build_particles(&mut rngs, &config.shape, config.particle_count),
            baubles: build_baubles(&mut rngs, &config.shape, config.bauble_count()),
            gifts: build_gifts(&mut rngs, &config.shape, config.gift_count()),
            star: build_star(&mut rngs, &config.shape),
        };
        log::info!(
            "[dataset] particles={} baubles={} gifts={} star=1",
            dataset.particles.len(),
            dataset.baubles.len(),
            dataset.gifts.len()
        );
        dataset
    }

    pub fn records(&self, category: Category) -> &[EntityRecord] {
        match category {
            Category::Particle => &self.particles,
            Category::Bauble => &self.baubles,
            Category::Gift => &self.gifts,
            Category::Star => std::slice::from_ref(&self.star),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.records(category).len()
    }
}

pub fn build_particles(rngs: &mut BuildRngs, shape: &TreeShape, count: usize) -> Vec<EntityRecord> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let scatter = scatter_position(&mut rngs.scatter, shape.scatter_radius);
        let tree = tree_position(&mut rngs.layout, shape, i, count, PARTICLE_JITTER);
        let seed = rngs.layout.gen::<f32>();
        out.push(EntityRecord {
            category: Category::Particle,
            scatter_position: scatter,
            tree_position: tree,
            scatter_rotation: Vec3::ZERO,
            tree_rotation: Vec3::ZERO,
            // point size grows 40 -> 120 with the seed
            scale: PARTICLE_SIZE * (40.0 + 80.0 * seed) / 80.0,
            color: palette::particle_color(seed) * PARTICLE_GLOW,
            seed,
        });
    }
    out
}

pub fn build_baubles(rngs: &mut BuildRngs, shape: &TreeShape, count: usize) -> Vec<EntityRecord> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let rng = &mut rngs.layout;
        let tree = tree_position(rng, shape, i, count, BAUBLE_JITTER);
        let scatter = scatter_position(&mut rngs.scatter, shape.scatter_radius);
        let height_ratio = i as f32 / count as f32;
        // larger near the base, smaller near the tip
        let base = BAUBLE_SCALE_MIN + (1.0 - height_ratio) * BAUBLE_SCALE_SPAN;
        let variation = 1.0 + (rng.gen::<f32>() * 2.0 - 1.0) * BAUBLE_VARIATION;
        let color = palette::bauble_color(rng);
        let tree_rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        let scatter_rotation = Vec3::new(
            rng.gen::<f32>() * TAU,
            rng.gen::<f32>() * TAU,
            rng.gen::<f32>() * TAU,
        );
        out.push(EntityRecord {
            category: Category::Bauble,
            scatter_position: scatter,
            tree_position: tree,
            scatter_rotation,
            tree_rotation,
            scale: base * variation * BAUBLE_SCALE_BOOST,
            color: palette::linear_rgb(color) * BAUBLE_GLOW,
            seed: rng.gen(),
        });
    }
    out
}

pub fn build_gifts(rngs: &mut BuildRngs, shape: &TreeShape, count: usize) -> Vec<EntityRecord> {
    // Spread gifts over a virtual population so they stop at the lower part of
    // the cone instead of crowding the tip.
    let layout_total = ((count as f32 / GIFT_MAX_HEIGHT_RATIO).round() as usize).max(count);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let rng = &mut rngs.layout;
        let tree = tree_position(rng, shape, i, layout_total, GIFT_JITTER);
        let scatter = scatter_position(&mut rngs.scatter, shape.scatter_radius);
        let color = palette::gift_color(rng);
        let relative_height = i as f32 / count as f32;
        let gradient = GIFT_SCALE_MIN + (1.0 - relative_height) * GIFT_SCALE_SPAN;
        let scale = (gradient + rng.gen::<f32>() * GIFT_VARIATION) * GIFT_SCALE_BOOST;
        // gifts sit flat on the branches
        let tree_rotation = Vec3::new(0.0, rng.gen::<f32>() * TAU, 0.0);
        let scatter_rotation = Vec3::new(
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        );
        out.push(EntityRecord {
            category: Category::Gift,
            scatter_position: scatter,
            tree_position: tree,
            scatter_rotation,
            tree_rotation,
            scale,
            color: palette::linear_rgb(color),
            seed: rng.gen(),
        });
    }
    out
}

pub fn build_star(rngs: &mut BuildRngs, shape: &TreeShape) -> EntityRecord {
    let rng = &mut rngs.layout;
    EntityRecord {
        category: Category::Star,
        scatter_position: scatter_position(&mut rngs.scatter, shape.scatter_radius),
        tree_position: Vec3::from_array(STAR_APEX),
        scatter_rotation: Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0),
        tree_rotation: Vec3::ZERO,
        scale: STAR_SCALE_ASSEMBLED,
        color: palette::linear_rgb(palette::STAR_GOLD) * STAR_GLOW,
        seed: rng.gen(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SceneConfig {
        SceneConfig {
            particle_count: 200,
            ornament_count: 100,
            seeds: SeedPolicy {
                layout: Some(1),
                scatter: Some(2),
            },
            ..SceneConfig::default()
        }
    }

    #[test]
    fn counts_follow_config() {
        let ds = SceneDataset::build(&seeded());
        assert_eq!(ds.len(Category::Particle), 200);
        assert_eq!(ds.len(Category::Bauble), 70);
        assert_eq!(ds.len(Category::Gift), 30);
        assert_eq!(ds.len(Category::Star), 1);
    }

    #[test]
    fn bauble_scales_stay_in_range() {
        let ds = SceneDataset::build(&seeded());
        let lo = BAUBLE_SCALE_MIN * (1.0 - BAUBLE_VARIATION) * BAUBLE_SCALE_BOOST;
        let hi = (BAUBLE_SCALE_MIN + BAUBLE_SCALE_SPAN) * (1.0 + BAUBLE_VARIATION) * BAUBLE_SCALE_BOOST;
        for b in &ds.baubles {
            assert!(b.scale >= lo - 1e-4 && b.scale <= hi + 1e-4, "scale {}", b.scale);
        }
    }

    #[test]
    fn gift_rotations_sit_flat() {
        let ds = SceneDataset::build(&seeded());
        for g in &ds.gifts {
            assert_eq!(g.tree_rotation.x, 0.0);
            assert_eq!(g.tree_rotation.z, 0.0);
        }
    }
}
