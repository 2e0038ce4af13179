use glam::Vec2;
use rand::prelude::*;

// Small sampling helpers over an injected generator.

/// Uniform value in `[lo, hi)`; returns `lo` when the range is empty.
#[inline]
pub fn between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo).max(0.0)
}

#[inline]
pub fn between_f64<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo).max(0.0)
}

/// Uniform value in `[-span/2, span/2)`.
#[inline]
pub fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[inline]
pub fn unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen::<f32>() * std::f32::consts::TAU;
    Vec2::new(angle.cos(), angle.sin())
}

#[inline]
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, palette: &[&'a str]) -> &'a str {
    palette.choose(rng).copied().unwrap_or("#FF6B9A")
}
