//! Colour palettes and weighted categorical sampling.
//!
//! Palettes are authored as sRGB hex and converted to linear RGB once, when the
//! dataset is built. Glow multipliers are baked in at that point too.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

pub const GOLD: u32 = 0xD4AF37;
pub const PALE_GOLD: u32 = 0xF9E588;
pub const DARK_GOLD: u32 = 0xB8860B;
pub const WHITE: u32 = 0xFFFFFF;
pub const DEEP_RED: u32 = 0x8B0000;
pub const DEEP_GREEN: u32 = 0x006400;
pub const NEEDLE_GREEN: u32 = 0x004200;
pub const STAR_GOLD: u32 = 0xFFD700;

pub const BAUBLE_METALLICS: [u32; 4] = [GOLD, PALE_GOLD, DARK_GOLD, WHITE];
pub const GIFT_GREENS: [u32; 4] = [0x005C00, 0x007500, 0x1A4F1A, NEEDLE_GREEN];
pub const GIFT_ACCENTS: [u32; 5] = [0x5A1A1A, 0x964B00, 0x7C4A16, 0x3B0B0B, GOLD];

// Bauble split: 20% red, 20% green, rest metallic
pub const BAUBLE_RED_SHARE: f32 = 0.2;
pub const BAUBLE_GREEN_SHARE: f32 = 0.2;
// Gifts: 30% accent colours, rest greens
pub const GIFT_ACCENT_SHARE: f32 = 0.3;

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear RGB from a `0xRRGGBB` sRGB value.
pub fn linear_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// Uniform pick from a non-empty palette.
fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[u32]) -> u32 {
    *palette.choose(rng).unwrap_or(&WHITE)
}

pub fn bauble_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let r = rng.gen::<f32>();
    if r < BAUBLE_RED_SHARE {
        DEEP_RED
    } else if r < BAUBLE_RED_SHARE + BAUBLE_GREEN_SHARE {
        DEEP_GREEN
    } else {
        pick(rng, &BAUBLE_METALLICS)
    }
}

pub fn gift_color<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen::<f32>() < GIFT_ACCENT_SHARE {
        pick(rng, &GIFT_ACCENTS)
    } else {
        pick(rng, &GIFT_GREENS)
    }
}

/// Green-to-gold particle tint keyed by the particle seed.
pub fn particle_color(seed: f32) -> Vec3 {
    let green = linear_rgb(NEEDLE_GREEN);
    let gold = linear_rgb(GOLD);
    green.lerp(gold, 0.4 + seed.clamp(0.0, 1.0) * 0.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hex_conversion_endpoints() {
        assert_eq!(linear_rgb(0x000000), Vec3::ZERO);
        let w = linear_rgb(WHITE);
        assert!((w - Vec3::ONE).abs().max_element() < 1e-5);
    }

    #[test]
    fn bauble_weights_roughly_hold() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 20_000;
        let reds = (0..n).filter(|_| bauble_color(&mut rng) == DEEP_RED).count();
        let share = reds as f32 / n as f32;
        assert!((share - BAUBLE_RED_SHARE).abs() < 0.02, "red share {share}");
    }

    #[test]
    fn gift_colors_come_from_palettes() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let c = gift_color(&mut rng);
            assert!(GIFT_GREENS.contains(&c) || GIFT_ACCENTS.contains(&c));
        }
    }
}
