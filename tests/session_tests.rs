// Host-side scenarios driving a whole page session through its clock.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::*;
use crate::core::{
    Activation, ActivationOutcome, Cue, InteractionConfig, Layout, Phase, PersuasionTrigger, Rect,
    Session,
};
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

fn layout() -> Layout {
    Layout {
        container: Vec2::new(600.0, 400.0),
        element: Vec2::new(100.0, 40.0),
        target: Some(Rect::new(60.0, 300.0, 120.0, 48.0)),
    }
}

fn session_with(config: InteractionConfig) -> Session {
    Session::new(config, Vec2::new(250.0, 180.0), 1234)
}

fn near(session: &Session, l: &Layout) -> Vec2 {
    session.dodger().rect(l).center() + Vec2::new(8.0, -4.0)
}

fn shown_lines(cues: &[Cue]) -> Vec<usize> {
    cues.iter()
        .filter_map(|c| match c {
            Cue::ShowLine { index, .. } => Some(*index),
            _ => None,
        })
        .collect()
}

#[test]
fn proximity_dodges_do_not_rotate_by_default() {
    let l = layout();
    let mut s = session_with(InteractionConfig::default());
    for _ in 0..5 {
        let p = near(&s, &l);
        assert!(s.pointer_moved(p, &l).is_some());
    }
    assert_eq!(s.dodger().state().move_count, 5);
    let cues = s.advance(0.0);
    assert!(shown_lines(&cues).is_empty());
}

#[test]
fn explicit_clicks_cycle_the_lines() {
    let l = layout();
    let mut s = session_with(InteractionConfig::default());
    let mut seen = Vec::new();
    for i in 0..10 {
        let p = near(&s, &l);
        let outcome = s.activate_dodger(Activation::Click, Some(p), &l);
        assert!(outcome.suppresses_default());
        seen.extend(shown_lines(&s.advance(i as f64 * 100.0)));
    }
    let n = DEFAULT_LINES.len();
    let expected: Vec<usize> = (0..10).map(|i| i % n).collect();
    assert_eq!(seen, expected);
}

#[test]
fn pointer_down_alone_does_not_rotate() {
    let l = layout();
    let mut s = session_with(InteractionConfig::default());
    let p = near(&s, &l);
    let outcome = s.activate_dodger(Activation::PointerDown, Some(p), &l);
    assert!(matches!(outcome, ActivationOutcome::Dodged(_)));
    assert!(shown_lines(&s.advance(0.0)).is_empty());
}

#[test]
fn every_dodge_trigger_rotates_on_proximity() {
    let l = layout();
    let mut config = InteractionConfig::default();
    config.persuasion.trigger = PersuasionTrigger::EveryDodge;
    let mut s = session_with(config);
    for _ in 0..3 {
        let p = near(&s, &l);
        s.pointer_moved(p, &l);
    }
    assert_eq!(shown_lines(&s.advance(0.0)), vec![0, 1, 2]);
}

#[test]
fn off_trigger_never_rotates() {
    let l = layout();
    let mut config = InteractionConfig::default();
    config.persuasion.trigger = PersuasionTrigger::Off;
    let mut s = session_with(config);
    let p = near(&s, &l);
    s.activate_dodger(Activation::Click, Some(p), &l);
    s.activate_dodger(Activation::Key, None, &l);
    assert!(shown_lines(&s.advance(0.0)).is_empty());
}

#[test]
fn visible_line_hides_after_delay() {
    let l = layout();
    let mut s = session_with(InteractionConfig::default());
    s.activate_dodger(Activation::Key, None, &l);
    s.advance(0.0);
    assert_eq!(s.rotor().showing(), Some(0));
    let cues = s.advance(LINE_HIDE_DELAY_MS);
    assert!(cues.contains(&Cue::HideLine));
    assert_eq!(s.rotor().showing(), None);
}

#[test]
fn held_dodger_lets_clicks_through() {
    let l = layout();
    let mut config = InteractionConfig::default();
    config.dodge.max_moves = 2;
    let mut s = session_with(config);
    for _ in 0..2 {
        let p = near(&s, &l);
        s.pointer_moved(p, &l);
    }
    assert_eq!(s.dodger().phase(), Phase::Held);
    s.advance(0.0);

    let p = near(&s, &l);
    let outcome = s.activate_dodger(Activation::Click, Some(p), &l);
    assert_eq!(outcome, ActivationOutcome::Proceed);
    // No shake and no persuasion once held
    let cues = s.advance(1.0);
    assert!(!cues.contains(&Cue::Shake));
    assert!(shown_lines(&cues).is_empty());
}

#[test]
fn confirm_particles_are_retired_by_the_clock() {
    let mut s = session_with(InteractionConfig::default());
    let spawned = s.confirm(VIEWPORT);
    assert_eq!(spawned, CONFETTI_COUNT + HEART_BURST_COUNT + SHOWER_HEART_COUNT);
    assert_eq!(s.particles().live(), spawned);
    assert!(s.celebration().is_open());

    let cues = s.advance(0.0);
    assert_eq!(cues[0], Cue::OpenModal);
    s.advance(PARTICLE_MAX_LIFETIME_MS);
    assert_eq!(s.particles().live(), 0);

    assert!(s.close_celebration());
    assert!(s.advance(PARTICLE_MAX_LIFETIME_MS).contains(&Cue::CloseModal));
}

#[test]
fn reset_restores_a_fresh_dodger_and_rotor() {
    let l = layout();
    let mut config = InteractionConfig::default();
    config.dodge.max_moves = 1;
    let mut s = session_with(config);
    let p = near(&s, &l);
    s.activate_dodger(Activation::Click, Some(p), &l);
    assert_eq!(s.dodger().phase(), Phase::Held);
    assert_eq!(s.rotor().cursor(), 1);

    s.reset();
    assert_eq!(s.dodger().phase(), Phase::Active);
    assert_eq!(s.rotor().cursor(), 0);
    assert!(s.advance(0.0).contains(&Cue::HideLine));
}

#[test]
fn resize_keeps_the_dodger_inside() {
    let l = layout();
    let mut s = Session::new(InteractionConfig::default(), Vec2::new(470.0, 330.0), 5);
    let narrow = Layout {
        container: Vec2::new(320.0, 240.0),
        ..l
    };
    let natural = s.dodger().origin();
    s.resized(natural, &narrow);
    let pos = s.dodger().position();
    assert!(pos.x <= 320.0 - CONTAINER_PADDING - 100.0 + 1e-3);
    assert!(pos.y <= 240.0 - CONTAINER_PADDING - 40.0 + 1e-3);
    assert!(matches!(s.advance(0.0).as_slice(), [Cue::MoveDodger { .. }]));
}

#[test]
fn same_seed_same_session() {
    let l = layout();
    let run = || {
        let mut s = session_with(InteractionConfig::default());
        let mut path = Vec::new();
        for _ in 0..6 {
            let p = near(&s, &l);
            s.pointer_moved(p, &l);
            path.push(s.dodger().position());
        }
        path
    };
    assert_eq!(run(), run());
}

#[test]
fn ambient_hearts_follow_config_count() {
    let mut config = InteractionConfig::default();
    config.ambient_count = 7;
    let mut s = session_with(config);
    assert_eq!(s.ambient_hearts().len(), 7);
}

#[test]
fn held_dodger_ignores_pointer_motion() {
    let l = layout();
    let mut config = InteractionConfig::default();
    config.dodge.max_moves = 1;
    let mut s = session_with(config);
    let p = near(&s, &l);
    s.pointer_moved(p, &l);
    s.advance(1000.0);
    assert!(!s.dodger().is_active());

    let held_at = s.dodger().position();
    for _ in 0..5 {
        let p = near(&s, &l);
        assert!(s.pointer_moved(p, &l).is_none());
    }
    assert_eq!(s.dodger().position(), held_at);
    assert!(s.advance(1000.0).is_empty());
}
