// Host-side tests for particle bursts and the live particle field.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::{
    ambient_hearts, confetti_burst, heart_burst, heart_shower, Cue, ParticleField, Shape, Timeline,
};
use glam::Vec2;
use rand::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

#[test]
fn bursts_have_fixed_counts() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(confetti_burst(VIEWPORT * 0.5, &mut rng).len(), CONFETTI_COUNT);
    assert_eq!(heart_burst(VIEWPORT * 0.5, &mut rng).len(), HEART_BURST_COUNT);
    assert_eq!(heart_shower(VIEWPORT, 36, &mut rng).len(), 36);
    assert_eq!(heart_shower(VIEWPORT, 0, &mut rng).len(), 0);
}

#[test]
fn confetti_stays_within_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(2);
    let center = VIEWPORT * 0.5;
    for (i, p) in confetti_burst(center, &mut rng).iter().enumerate() {
        assert_eq!(p.shape, Shape::Rect);
        assert_eq!(p.origin, center);
        assert_eq!(p.color, CONFETTI_COLORS[i % CONFETTI_COLORS.len()]);
        let speed = p.travel.length();
        assert!((180.0..=340.0).contains(&speed), "speed {}", speed);
        assert!((10.0..=20.0).contains(&p.size));
        assert!(p.rotation_deg.abs() <= 360.0);
        assert!((1400.0..=2000.0).contains(&p.duration_ms));
        assert!(p.fade);
    }
}

#[test]
fn heart_burst_rises() {
    let mut rng = StdRng::seed_from_u64(3);
    let center = VIEWPORT * 0.5;
    for p in heart_burst(center, &mut rng) {
        assert_eq!(p.shape, Shape::Heart);
        assert!((p.origin.x - center.x).abs() <= 20.0);
        assert!((p.origin.y - (center.y - 40.0)).abs() <= 10.0);
        // Angle stays within ±0.9 rad of straight up, so travel is upwards
        assert!(p.travel.y < 0.0);
    }
}

#[test]
fn shower_starts_above_the_viewport() {
    let mut rng = StdRng::seed_from_u64(4);
    for p in heart_shower(VIEWPORT, 50, &mut rng) {
        assert!(p.origin.y <= -20.0 && p.origin.y >= -140.0);
        assert!(p.origin.x >= 0.0 && p.origin.x <= VIEWPORT.x);
        assert!(p.travel.y >= VIEWPORT.y * 0.8 && p.travel.y <= VIEWPORT.y * 1.4);
        assert!(p.delay_ms >= 0.0 && p.delay_ms <= SHOWER_MAX_DELAY_MS);
        assert!(SHOWER_COLORS.contains(&p.color));
    }
}

#[test]
fn end_offset_adds_gravity_drop() {
    let mut rng = StdRng::seed_from_u64(5);
    let p = confetti_burst(Vec2::ZERO, &mut rng).remove(0);
    let end = p.end_offset();
    assert_eq!(end.x, p.travel.x);
    let expected = p.travel.y + p.gravity * (p.duration_ms / 10.0) as f32;
    assert!((end.y - expected).abs() < 1e-3);
}

#[test]
fn burst_of_k_spawns_k_and_all_are_removed() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let burst = heart_shower(VIEWPORT, 36, &mut rng);
    assert_eq!(field.spawn(burst, &mut t), 36);
    assert_eq!(field.live(), 36);

    let spawned = t.advance_to(0.0);
    assert_eq!(
        spawned
            .iter()
            .filter(|(_, c)| matches!(c, Cue::SpawnParticle(..)))
            .count(),
        36
    );
    assert!(field.last_expiry_ms().unwrap() <= PARTICLE_MAX_LIFETIME_MS);

    for (_, cue) in t.advance_to(PARTICLE_MAX_LIFETIME_MS) {
        if let Cue::RemoveParticle(id) = cue {
            assert!(field.retire(id));
        }
    }
    assert_eq!(field.live(), 0);
    assert_eq!(t.pending_len(), 0);
}

#[test]
fn particle_ids_are_unique_across_bursts() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    field.spawn(confetti_burst(Vec2::ZERO, &mut rng), &mut t);
    field.spawn(heart_burst(Vec2::ZERO, &mut rng), &mut t);
    assert_eq!(field.live(), CONFETTI_COUNT + HEART_BURST_COUNT);
    let mut ids: Vec<_> = t
        .advance_to(0.0)
        .into_iter()
        .filter_map(|(_, c)| match c {
            Cue::SpawnParticle(id, _) => Some(id),
            _ => None,
        })
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), CONFETTI_COUNT + HEART_BURST_COUNT);
}

#[test]
fn ambient_hearts_ranges_and_bounded_drift() {
    let mut rng = StdRng::seed_from_u64(8);
    let hearts = ambient_hearts(BG_HEART_COUNT, &mut rng);
    assert_eq!(hearts.len(), BG_HEART_COUNT);
    for h in &hearts {
        assert!((0.0..=100.0).contains(&h.left_pct));
        assert!((85.0..=110.0).contains(&h.top_pct));
        assert!((14.0..=50.0).contains(&h.size));
        assert!((12.0..=30.0).contains(&h.rise_sec));
        assert!(h.delay_sec <= 0.0 && h.delay_sec >= -h.rise_sec);
        for s in [0.0_f32, 1.5, 60.0, 3600.0] {
            assert!(h.drift_px(s).abs() <= BG_DRIFT_AMPLITUDE_PX + 1e-3);
        }
    }
}
