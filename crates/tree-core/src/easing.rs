//! Shaping curves applied to category progress.

/// Cubic ease-in-out on `t` clamped to [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Per-entity offset of the shared progress so entities do not move in
/// lockstep. Entities with a larger `seed` start later and, because of the
/// `gain`, every entity still reaches 1 before the shared progress does.
#[inline]
pub fn staggered(progress: f32, seed: f32, gain: f32, delay: f32) -> f32 {
    (progress * gain - seed * delay).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn cubic_is_monotonic_and_symmetric() {
        let mut prev = 0.0;
        for i in 0..=200 {
            let t = i as f32 / 200.0;
            let v = ease_in_out_cubic(t);
            assert!(v >= prev - 1e-6, "not monotonic at {t}");
            prev = v;
        }
        let a = ease_in_out_cubic(0.2);
        let b = ease_in_out_cubic(0.8);
        assert!((a + b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn cubic_clamps_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn stagger_delays_high_seeds() {
        let early = staggered(0.3, 0.0, 1.2, 0.2);
        let late = staggered(0.3, 1.0, 1.2, 0.2);
        assert!(early > late);
        // every seed saturates before shared progress hits 1
        assert_eq!(staggered(1.0, 0.999, 1.2, 0.2), 1.0);
        assert_eq!(staggered(0.0, 0.5, 1.2, 0.2), 0.0);
    }
}
