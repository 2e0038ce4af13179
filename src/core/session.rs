use super::celebration::Celebration;
use super::config::InteractionConfig;
use super::cue::Cue;
use super::dodge::{Activation, ActivationOutcome, Dodge, Dodger, Layout};
use super::particles::{ambient_hearts, AmbientHeart, ParticleField};
use super::persuasion::{PersuasionRotor, PersuasionTrigger};
use super::timeline::Timeline;
use glam::Vec2;
use rand::prelude::*;

/// All per-page interaction state. Event handlers borrow it, feed it
/// measurements, then call [`Session::advance`] to collect the cues to apply.
pub struct Session {
    config: InteractionConfig,
    dodger: Dodger,
    rotor: PersuasionRotor,
    particles: ParticleField,
    celebration: Celebration,
    timeline: Timeline<Cue>,
    rng: StdRng,
}

impl Session {
    pub fn new(config: InteractionConfig, dodger_origin: Vec2, seed: u64) -> Self {
        let dodger = Dodger::new(config.dodge.clone(), dodger_origin);
        let rotor = PersuasionRotor::new(&config.persuasion);
        let celebration = Celebration::new(config.celebration.clone(), config.shower_count);
        Self {
            config,
            dodger,
            rotor,
            particles: ParticleField::new(),
            celebration,
            timeline: Timeline::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    #[inline]
    pub fn dodger(&self) -> &Dodger {
        &self.dodger
    }

    #[inline]
    pub fn rotor(&self) -> &PersuasionRotor {
        &self.rotor
    }

    #[inline]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    #[inline]
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    #[inline]
    pub fn timeline(&self) -> &Timeline<Cue> {
        &self.timeline
    }

    /// Pointer or touch moved anywhere on the page.
    pub fn pointer_moved(&mut self, pointer: Vec2, layout: &Layout) -> Option<Dodge> {
        let dodge = self
            .dodger
            .on_pointer_move(pointer, layout, &mut self.rng, &mut self.timeline)?;
        if self.config.persuasion.trigger == PersuasionTrigger::EveryDodge {
            self.rotor.show_next(&mut self.timeline);
        }
        Some(dodge)
    }

    /// Direct activation of the dodger. The caller must cancel the DOM
    /// default whenever the outcome suppresses it.
    pub fn activate_dodger(
        &mut self,
        activation: Activation,
        pointer: Option<Vec2>,
        layout: &Layout,
    ) -> ActivationOutcome {
        let outcome = self.dodger.on_activation(
            activation,
            pointer,
            layout,
            &mut self.rng,
            &mut self.timeline,
        );
        let rotate = match self.config.persuasion.trigger {
            PersuasionTrigger::Off => false,
            PersuasionTrigger::Explicit => activation.is_explicit(),
            PersuasionTrigger::EveryDodge => {
                activation.is_explicit() || outcome.dodge().is_some()
            }
        };
        if rotate && outcome.suppresses_default() {
            self.rotor.show_next(&mut self.timeline);
        }
        outcome
    }

    /// Confirm button pressed. Returns the number of particles spawned.
    pub fn confirm(&mut self, viewport: Vec2) -> usize {
        log::info!("[confirm] celebrating ({:?})", self.celebration.mode);
        self.celebration
            .confirm(viewport, &mut self.rng, &mut self.particles, &mut self.timeline)
    }

    pub fn close_celebration(&mut self) -> bool {
        self.celebration.close(&mut self.timeline)
    }

    /// Layout changed; `natural` is the dodger's untransformed top-left.
    pub fn resized(&mut self, natural: Vec2, layout: &Layout) {
        self.dodger.rebase(natural, layout, &mut self.timeline);
    }

    pub fn ambient_hearts(&mut self) -> Vec<AmbientHeart> {
        ambient_hearts(self.config.ambient_count, &mut self.rng)
    }

    /// External reset hook: dodging and persuasion start over.
    pub fn reset(&mut self) {
        self.dodger.reset();
        self.rotor.reset(&mut self.timeline);
    }

    /// Advance the clock to `now_ms` and return the cues due, in order.
    pub fn advance(&mut self, now_ms: f64) -> Vec<Cue> {
        let fired = self.timeline.advance_to(now_ms);
        let mut cues = Vec::with_capacity(fired.len());
        for (timer, cue) in fired {
            match &cue {
                Cue::RemoveParticle(id) => {
                    self.particles.retire(*id);
                }
                Cue::HideLine => {
                    self.rotor.hidden(timer);
                }
                _ => {}
            }
            cues.push(cue);
        }
        cues
    }
}
