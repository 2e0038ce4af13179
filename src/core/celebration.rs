use super::constants::{NAVIGATE_DELAY_MS, SHOWER_HEART_COUNT, SUCCESS_DESTINATION, YAY_IMAGE_MS};
use super::cue::{Cue, Part};
use super::particles::{confetti_burst, heart_burst, heart_shower, ParticleField};
use super::timeline::{Timeline, TimerId};
use glam::Vec2;
use rand::Rng;

/// What pressing the confirm button does.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CelebrationMode {
    /// Open the success overlay and shower the page.
    #[default]
    Overlay,
    /// Celebrate briefly, then leave for `destination`.
    Navigate { destination: String, delay_ms: f64 },
}

impl CelebrationMode {
    pub fn navigate_to(destination: impl Into<String>) -> Self {
        CelebrationMode::Navigate {
            destination: destination.into(),
            delay_ms: NAVIGATE_DELAY_MS,
        }
    }

    pub fn default_navigate() -> Self {
        Self::navigate_to(SUCCESS_DESTINATION)
    }
}

#[derive(Clone, Debug)]
pub struct Celebration {
    pub mode: CelebrationMode,
    pub shower_count: usize,
    open: bool,
    navigating: bool,
    image_timer: Option<TimerId>,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(CelebrationMode::Overlay, SHOWER_HEART_COUNT)
    }
}

impl Celebration {
    pub fn new(mode: CelebrationMode, shower_count: usize) -> Self {
        Self {
            mode,
            shower_count,
            open: false,
            navigating: false,
            image_timer: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// Returns the number of particles spawned.
    pub fn confirm<R: Rng + ?Sized>(
        &mut self,
        viewport: Vec2,
        rng: &mut R,
        particles: &mut ParticleField,
        timeline: &mut Timeline<Cue>,
    ) -> usize {
        let center = viewport * 0.5;
        match &self.mode {
            CelebrationMode::Overlay => {
                self.open = true;
                timeline.now(Cue::OpenModal);
                timeline.now(Cue::AddClass(Part::YayImage, "show"));
                if let Some(stale) = self.image_timer.take() {
                    timeline.cancel(stale);
                }
                self.image_timer = Some(
                    timeline.schedule(YAY_IMAGE_MS, Cue::RemoveClass(Part::YayImage, "show")),
                );
                let mut spawned = particles.spawn(confetti_burst(center, rng), timeline);
                spawned += particles.spawn(heart_burst(center, rng), timeline);
                spawned += particles.spawn(heart_shower(viewport, self.shower_count, rng), timeline);
                spawned
            }
            CelebrationMode::Navigate {
                destination,
                delay_ms,
            } => {
                if self.navigating {
                    return 0;
                }
                self.navigating = true;
                timeline.schedule(*delay_ms, Cue::Navigate(destination.clone()));
                timeline.now(Cue::AddClass(Part::Confirm, "celebrate"));
                let mut spawned = particles.spawn(confetti_burst(center, rng), timeline);
                spawned += particles.spawn(heart_burst(center, rng), timeline);
                spawned
            }
        }
    }

    /// Close the overlay; false when nothing was open.
    pub fn close(&mut self, timeline: &mut Timeline<Cue>) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        if let Some(pending) = self.image_timer.take() {
            timeline.cancel(pending);
        }
        timeline.now(Cue::CloseModal);
        timeline.now(Cue::RemoveClass(Part::YayImage, "show"));
        true
    }
}
