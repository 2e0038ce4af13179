use super::constants::*;
use super::cue::Cue;
use super::sample::{between, between_f64, centered, pick};
use super::timeline::Timeline;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Rect,
    Heart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

/// One celebration particle: spawned at `origin`, animated once, then removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Viewport position of the particle's center.
    pub origin: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub shape: Shape,
    /// Static rotation applied before the animation starts.
    pub spin_deg: f32,
    /// Displacement over the animation, before gravity.
    pub travel: Vec2,
    pub rotation_deg: f32,
    pub gravity: f32,
    pub fade: bool,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Particle {
    /// Final translation of the animation, gravity included.
    #[inline]
    pub fn end_offset(&self) -> Vec2 {
        Vec2::new(
            self.travel.x,
            self.travel.y + self.gravity * (self.duration_ms / 10.0) as f32,
        )
    }

    /// Time from spawn until the particle should be detached.
    #[inline]
    pub fn lifetime_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms + PARTICLE_REMOVAL_GRACE_MS
    }
}

fn duration<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    between_f64(
        rng,
        PARTICLE_MIN_DURATION_MS,
        PARTICLE_MIN_DURATION_MS + PARTICLE_DURATION_SPAN_MS,
    )
}

/// Ring of confetti squares flying out of `center`.
pub fn confetti_burst<R: Rng + ?Sized>(center: Vec2, rng: &mut R) -> Vec<Particle> {
    (0..CONFETTI_COUNT)
        .map(|i| {
            let angle = TAU * (i as f32 / CONFETTI_COUNT as f32) + centered(rng, 1.0);
            let speed = between(rng, 180.0, 340.0);
            Particle {
                origin: center,
                size: between(rng, 10.0, 20.0),
                color: CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
                shape: Shape::Rect,
                spin_deg: between(rng, 0.0, 360.0),
                travel: Vec2::new(angle.cos(), angle.sin()) * speed,
                rotation_deg: centered(rng, 720.0),
                gravity: 0.8,
                fade: true,
                delay_ms: 0.0,
                duration_ms: duration(rng),
            }
        })
        .collect()
}

/// Hearts fanning upwards from just above `center`.
pub fn heart_burst<R: Rng + ?Sized>(center: Vec2, rng: &mut R) -> Vec<Particle> {
    let origin = center - Vec2::new(0.0, 40.0);
    (0..HEART_BURST_COUNT)
        .map(|i| {
            let angle = -PI / 2.0 + centered(rng, 1.8);
            let speed = between(rng, 120.0, 260.0);
            let travel = Vec2::new(
                angle.cos() * speed + centered(rng, 40.0),
                angle.sin() * speed + centered(rng, 40.0),
            );
            Particle {
                origin: origin + Vec2::new(centered(rng, 40.0), centered(rng, 20.0)),
                size: between(rng, 14.0, 24.0),
                color: HEART_COLORS[i % HEART_COLORS.len()],
                shape: Shape::Heart,
                spin_deg: between(rng, 0.0, 360.0),
                travel,
                rotation_deg: centered(rng, 540.0),
                gravity: 0.6,
                fade: true,
                delay_ms: 0.0,
                duration_ms: duration(rng),
            }
        })
        .collect()
}

/// `count` hearts falling from above the top edge of a `viewport`-sized window.
pub fn heart_shower<R: Rng + ?Sized>(viewport: Vec2, count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let origin = Vec2::new(between(rng, 0.0, viewport.x), -20.0 - between(rng, 0.0, 120.0));
            Particle {
                origin,
                size: between(rng, 10.0, 30.0),
                color: pick(rng, &SHOWER_COLORS),
                shape: Shape::Heart,
                spin_deg: 0.0,
                travel: Vec2::new(centered(rng, 120.0), viewport.y * between(rng, 0.8, 1.4)),
                rotation_deg: centered(rng, 720.0),
                gravity: 0.9,
                fade: true,
                delay_ms: between_f64(rng, 0.0, SHOWER_MAX_DELAY_MS),
                duration_ms: duration(rng),
            }
        })
        .collect()
}

/// Tracks attached particles until their removal cue fires.
#[derive(Debug, Default)]
pub struct ParticleField {
    next_id: u64,
    live: FnvHashMap<ParticleId, f64>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `particles` and schedule each one's removal. Returns how many were spawned.
    pub fn spawn(&mut self, particles: Vec<Particle>, timeline: &mut Timeline<Cue>) -> usize {
        let count = particles.len();
        let now = timeline.now_ms();
        for particle in particles {
            self.next_id += 1;
            let id = ParticleId(self.next_id);
            let lifetime = particle.lifetime_ms();
            self.live.insert(id, now + lifetime);
            timeline.now(Cue::SpawnParticle(id, particle));
            timeline.schedule(lifetime, Cue::RemoveParticle(id));
        }
        count
    }

    #[inline]
    pub fn retire(&mut self, id: ParticleId) -> bool {
        self.live.remove(&id).is_some()
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live.len()
    }

    /// Latest scheduled removal time, if any particle is attached.
    pub fn last_expiry_ms(&self) -> Option<f64> {
        self.live.values().copied().reduce(f64::max)
    }
}

/// Decorative background heart; rises via the stylesheet and drifts sideways.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientHeart {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size: f32,
    pub color: &'static str,
    pub rise_sec: f32,
    /// Negative, so hearts start spread over the rise cycle.
    pub delay_sec: f32,
    pub phase: f32,
    pub rate: f32,
}

impl AmbientHeart {
    /// Horizontal drift in pixels after `elapsed_sec` of page time.
    #[inline]
    pub fn drift_px(&self, elapsed_sec: f32) -> f32 {
        let t = self.phase + elapsed_sec * BG_DRIFT_PHASE_PER_SEC;
        (t * self.rate).sin() * BG_DRIFT_AMPLITUDE_PX
    }
}

pub fn ambient_hearts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<AmbientHeart> {
    (0..count)
        .map(|_| {
            let rise_sec = between(rng, 12.0, 30.0);
            AmbientHeart {
                left_pct: between(rng, 0.0, 100.0),
                top_pct: between(rng, 85.0, 110.0),
                size: between(rng, 14.0, 50.0),
                color: pick(rng, &BG_HEART_COLORS),
                rise_sec,
                delay_sec: -between(rng, 0.0, rise_sec),
                phase: between(rng, 0.0, 1000.0),
                rate: between(rng, 0.5, 1.4),
            }
        })
        .collect()
}
