use super::particles::{Particle, ParticleId};
use glam::Vec2;

/// Page elements the core addresses by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Card,
    Name,
    Dodger,
    Confirm,
    YayImage,
}

/// A side effect the page should perform when it fires.
#[derive(Clone, Debug, PartialEq)]
pub enum Cue {
    AddClass(Part, &'static str),
    RemoveClass(Part, &'static str),
    /// Translate the dodger by `offset` from its natural layout position.
    MoveDodger { offset: Vec2 },
    Shake,
    ShowLine { index: usize, text: String },
    HideLine,
    Chirp { frequency_hz: f32 },
    SpawnParticle(ParticleId, Particle),
    RemoveParticle(ParticleId),
    OpenModal,
    CloseModal,
    Navigate(String),
}
