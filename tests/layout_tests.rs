// Host-side tests for the procedural layouts and the dataset builder.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::constants::{GIFT_JITTER, GIFT_MAX_HEIGHT_RATIO, STAR_APEX};
use tree_core::layout::{scatter_position, tree_anchor, tree_position, TreeShape};
use tree_core::{SceneConfig, SceneDataset, SeedPolicy};

#[test]
fn scatter_is_uniform_by_volume() {
    let mut rng = StdRng::seed_from_u64(7);
    let radius = 25.0;
    let n = 20_000;
    let mut inside_half = 0usize;
    let mut cube_sum = 0.0f64;
    for _ in 0..n {
        let p = scatter_position(&mut rng, radius);
        let d = p.length() / radius;
        assert!(d <= 1.0 + 1e-5);
        if d <= 0.5 {
            inside_half += 1;
        }
        cube_sum += (d as f64).powi(3);
    }
    // (r/R)^3 is uniform on [0, 1]
    let frac = inside_half as f64 / n as f64;
    assert!((frac - 0.125).abs() < 0.01, "inner fraction {frac}");
    let mean = cube_sum / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "mean cube {mean}");
}

#[test]
fn tree_anchor_is_monotonic() {
    let shape = TreeShape::default();
    let total = 500;
    let mut prev = tree_anchor(&shape, 0, total);
    for i in 1..total {
        let a = tree_anchor(&shape, i, total);
        assert!(a.height >= prev.height);
        assert!(a.radius <= prev.radius);
        prev = a;
    }
    assert_eq!(tree_anchor(&shape, 0, total).height, -shape.height / 2.0);
    assert!(prev.height < shape.height / 2.0);
}

#[test]
fn tree_position_is_deterministic_per_seed() {
    let shape = TreeShape::default();
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for i in 0..100 {
        assert_eq!(
            tree_position(&mut a, &shape, i, 100, 0.5),
            tree_position(&mut b, &shape, i, 100, 0.5)
        );
    }
}

fn config(layout: Option<u64>, scatter: Option<u64>) -> SceneConfig {
    SceneConfig {
        particle_count: 300,
        seeds: SeedPolicy { layout, scatter },
        ..SceneConfig::default()
    }
}

#[test]
fn fixed_layout_seed_rebuilds_the_same_tree() {
    let a = SceneDataset::build(&config(Some(11), None));
    let b = SceneDataset::build(&config(Some(11), None));
    let tree = |d: &SceneDataset| -> Vec<_> {
        d.particles
            .iter()
            .chain(&d.baubles)
            .chain(&d.gifts)
            .map(|r| (r.tree_position, r.scale, r.color))
            .collect()
    };
    assert_eq!(tree(&a), tree(&b));
    // the scattered cloud still comes from entropy
    let same_scatter = a
        .particles
        .iter()
        .zip(&b.particles)
        .all(|(x, y)| x.scatter_position == y.scatter_position);
    assert!(!same_scatter);
}

#[test]
fn ornaments_split_seventy_thirty_and_star_sits_on_apex() {
    let cfg = SceneConfig {
        ornament_count: 600,
        ..config(Some(1), Some(2))
    };
    let ds = SceneDataset::build(&cfg);
    assert_eq!(ds.baubles.len(), 420);
    assert_eq!(ds.gifts.len(), 180);
    assert_eq!(ds.star.tree_position.to_array(), STAR_APEX);
}

#[test]
fn gifts_stay_in_lower_part_of_cone() {
    let ds = SceneDataset::build(&config(Some(5), Some(6)));
    let shape = TreeShape::default();
    let limit = -shape.height / 2.0 + GIFT_MAX_HEIGHT_RATIO * shape.height + GIFT_JITTER / 2.0;
    for g in &ds.gifts {
        assert!(g.tree_position.y <= limit, "gift at {}", g.tree_position.y);
    }
}
