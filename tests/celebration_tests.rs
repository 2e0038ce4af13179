// Host-side tests for the confirm-button celebration.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::{Celebration, CelebrationMode, Cue, ParticleField, Part, Timeline};
use glam::Vec2;
use rand::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);

fn fired(t: &mut Timeline<Cue>, at: f64) -> Vec<Cue> {
    t.advance_to(at).into_iter().map(|(_, c)| c).collect()
}

#[test]
fn overlay_opens_and_spawns_every_burst() {
    let mut c = Celebration::default();
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(1);

    let spawned = c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    assert_eq!(spawned, CONFETTI_COUNT + HEART_BURST_COUNT + SHOWER_HEART_COUNT);
    assert_eq!(field.live(), spawned);
    assert!(c.is_open());

    let now = fired(&mut t, 0.0);
    assert_eq!(now[0], Cue::OpenModal);
    assert_eq!(now[1], Cue::AddClass(Part::YayImage, "show"));
    assert!(!now.iter().any(|c| matches!(c, Cue::Navigate(_))));
}

#[test]
fn yay_image_hides_itself() {
    let mut c = Celebration::default();
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(2);
    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    fired(&mut t, 0.0);

    let before = fired(&mut t, YAY_IMAGE_MS - 1.0);
    assert!(!before.contains(&Cue::RemoveClass(Part::YayImage, "show")));
    let at = fired(&mut t, YAY_IMAGE_MS);
    assert_eq!(at, vec![Cue::RemoveClass(Part::YayImage, "show")]);
}

#[test]
fn reopened_overlay_keeps_its_image_for_the_full_time() {
    fn image_hidden(cues: &[Cue]) -> bool {
        cues.contains(&Cue::RemoveClass(Part::YayImage, "show"))
    }
    let mut c = Celebration::new(CelebrationMode::Overlay, 0);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(6);

    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    fired(&mut t, 500.0);
    c.close(&mut t);
    fired(&mut t, 1000.0);
    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);

    // The first opening's timer (due at 4000) must not hide the second image
    assert!(!image_hidden(&fired(&mut t, 1000.0 + YAY_IMAGE_MS - 1.0)));
    assert!(image_hidden(&fired(&mut t, 1000.0 + YAY_IMAGE_MS)));
}

#[test]
fn confirming_twice_leaves_one_image_timer() {
    let mut c = Celebration::new(CelebrationMode::Overlay, 0);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(7);
    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    fired(&mut t, 2000.0);
    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    let pending = t
        .pending_events()
        .filter(|e| **e == Cue::RemoveClass(Part::YayImage, "show"))
        .count();
    assert_eq!(pending, 1);
}

#[test]
fn close_only_acts_when_open() {
    let mut c = Celebration::default();
    let mut t = Timeline::new();
    assert!(!c.close(&mut t));
    assert_eq!(t.pending_len(), 0);

    let mut field = ParticleField::new();
    let mut rng = StdRng::seed_from_u64(3);
    c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    fired(&mut t, 0.0);
    assert!(c.close(&mut t));
    assert!(!c.is_open());
    let cues = fired(&mut t, 0.0);
    assert_eq!(cues[0], Cue::CloseModal);
    assert!(!c.close(&mut t));
}

#[test]
fn repeated_overlay_confirms_spawn_again() {
    let mut c = Celebration::new(CelebrationMode::Overlay, 10);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(4);
    let first = c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    let second = c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    assert_eq!(first, CONFETTI_COUNT + HEART_BURST_COUNT + 10);
    assert_eq!(second, first);
    assert_eq!(field.live(), first * 2);
}

#[test]
fn navigate_mode_schedules_exactly_one_navigation() {
    let mut c = Celebration::new(CelebrationMode::navigate_to("yes.html"), SHOWER_HEART_COUNT);
    let mut field = ParticleField::new();
    let mut t = Timeline::new();
    let mut rng = StdRng::seed_from_u64(5);

    let spawned = c.confirm(VIEWPORT, &mut rng, &mut field, &mut t);
    assert_eq!(spawned, CONFETTI_COUNT + HEART_BURST_COUNT);
    assert!(c.is_navigating());
    assert!(!c.is_open());

    // A second press while the first is pending does nothing
    assert_eq!(c.confirm(VIEWPORT, &mut rng, &mut field, &mut t), 0);

    let now = fired(&mut t, 0.0);
    assert!(now.contains(&Cue::AddClass(Part::Confirm, "celebrate")));
    assert!(!now.iter().any(|c| matches!(c, Cue::Navigate(_))));

    let later = fired(&mut t, NAVIGATE_DELAY_MS);
    let navigations: Vec<&Cue> = later
        .iter()
        .filter(|c| matches!(c, Cue::Navigate(_)))
        .collect();
    assert_eq!(navigations, vec![&Cue::Navigate("yes.html".to_string())]);
}

#[test]
fn default_navigate_targets_success_page() {
    assert_eq!(
        CelebrationMode::default_navigate(),
        CelebrationMode::Navigate {
            destination: SUCCESS_DESTINATION.to_string(),
            delay_ms: NAVIGATE_DELAY_MS,
        }
    );
}
