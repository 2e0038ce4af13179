use super::constants::*;
use super::cue::{Cue, Part};
use super::geometry::Rect;
use super::placement::{Placement, PlacementEngine, PlacementParams, PlacementRequest};
use super::sample::{centered, unit_vector};
use super::timeline::Timeline;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct DodgeConfig {
    pub dodge_distance: f32,
    pub move_distance: f32,
    pub jitter: f32,
    /// Dodges allowed before the dodger gives up. `u32::MAX` never holds.
    pub max_moves: u32,
    pub placement: PlacementParams,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            dodge_distance: DODGE_DISTANCE,
            move_distance: MOVE_DISTANCE,
            jitter: MOVE_JITTER,
            max_moves: MAX_MOVES_BEFORE_HOLD,
            placement: PlacementParams::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DodgeState {
    pub move_count: u32,
    pub holding: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Held,
}

/// How the dodger was activated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    PointerDown,
    TouchStart,
    Click,
    Key,
}

impl Activation {
    /// Only explicit attempts rotate persuasion lines.
    #[inline]
    pub fn is_explicit(self) -> bool {
        !matches!(self, Activation::PointerDown)
    }

    #[inline]
    pub fn from_key(key: &str) -> Option<Activation> {
        match key {
            "Enter" | " " | "Spacebar" => Some(Activation::Key),
            _ => None,
        }
    }
}

/// Geometry measured for a single event, in container-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    pub container: Vec2,
    pub element: Vec2,
    pub target: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dodge {
    pub from: Vec2,
    pub to: Vec2,
    pub move_count: u32,
    pub entered_hold: bool,
    pub placement: Placement,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActivationOutcome {
    /// Default action suppressed and the dodger moved.
    Dodged(Dodge),
    /// Default action suppressed; the dodger had already moved out of reach.
    Suppressed,
    /// Held: the press goes through as a normal button press.
    Proceed,
}

impl ActivationOutcome {
    #[inline]
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, ActivationOutcome::Proceed)
    }

    #[inline]
    pub fn dodge(&self) -> Option<&Dodge> {
        match self {
            ActivationOutcome::Dodged(d) => Some(d),
            _ => None,
        }
    }
}

pub struct Dodger {
    pub config: DodgeConfig,
    state: DodgeState,
    engine: PlacementEngine,
    /// Natural layout position (no transform applied).
    origin: Vec2,
    position: Vec2,
}

impl Dodger {
    pub fn new(config: DodgeConfig, origin: Vec2) -> Self {
        let engine = PlacementEngine::new(config.placement.clone());
        let state = DodgeState {
            move_count: 0,
            holding: config.max_moves == 0,
        };
        Self {
            config,
            state,
            engine,
            origin,
            position: origin,
        }
    }

    #[inline]
    pub fn state(&self) -> DodgeState {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.state.holding || self.state.move_count >= self.config.max_moves {
            Phase::Held
        } else {
            Phase::Active
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Active
    }

    /// Natural layout position the offset is applied on top of.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Translation to apply on top of the natural layout position.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.position - self.origin
    }

    #[inline]
    pub fn rect(&self, layout: &Layout) -> Rect {
        Rect::from_pos_size(self.position, layout.element)
    }

    #[inline]
    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn on_pointer_move<R: Rng + ?Sized>(
        &mut self,
        pointer: Vec2,
        layout: &Layout,
        rng: &mut R,
        timeline: &mut Timeline<Cue>,
    ) -> Option<Dodge> {
        if !self.is_active() {
            return None;
        }
        let center = self.rect(layout).center();
        if center.distance(pointer) >= self.config.dodge_distance {
            return None;
        }
        Some(self.dodge_from(Some(pointer), layout, rng, timeline))
    }

    pub fn on_activation<R: Rng + ?Sized>(
        &mut self,
        activation: Activation,
        pointer: Option<Vec2>,
        layout: &Layout,
        rng: &mut R,
        timeline: &mut Timeline<Cue>,
    ) -> ActivationOutcome {
        if !self.is_active() {
            return ActivationOutcome::Proceed;
        }
        if activation.is_explicit() {
            timeline.now(Cue::Shake);
        }
        let center = self.rect(layout).center();
        let out_of_reach = pointer
            .map(|p| center.distance(p) >= self.config.dodge_distance)
            .unwrap_or(false);
        if out_of_reach {
            return ActivationOutcome::Suppressed;
        }
        ActivationOutcome::Dodged(self.dodge_from(pointer, layout, rng, timeline))
    }

    /// Adopt the natural layout position measured after a layout change
    /// (transform excluded) and clamp the current position into the new bounds.
    pub fn rebase(&mut self, natural: Vec2, layout: &Layout, timeline: &mut Timeline<Cue>) {
        self.origin = natural;
        self.position = self
            .engine
            .clamp(self.position, layout.container, layout.element);
        timeline.now(Cue::MoveDodger {
            offset: self.offset(),
        });
    }

    pub fn reset(&mut self) {
        self.state = DodgeState {
            move_count: 0,
            holding: self.config.max_moves == 0,
        };
    }

    fn dodge_from<R: Rng + ?Sized>(
        &mut self,
        pointer: Option<Vec2>,
        layout: &Layout,
        rng: &mut R,
        timeline: &mut Timeline<Cue>,
    ) -> Dodge {
        let from = self.position;
        let center = self.rect(layout).center();
        let away = pointer
            .map(|p| center - p)
            .and_then(|d| d.try_normalize())
            .unwrap_or_else(|| unit_vector(rng));
        let jitter = Vec2::new(
            centered(rng, self.config.jitter),
            centered(rng, self.config.jitter),
        );
        let desired_center = center + away * self.config.move_distance + jitter;

        let placement = self.engine.place(
            &PlacementRequest {
                container: layout.container,
                element: layout.element,
                target: layout.target,
                avoid: pointer.map(Rect::around_point),
                preferred: Some(desired_center - layout.element * 0.5),
            },
            rng,
        );
        self.position = placement.position;

        self.state.move_count = self.state.move_count.saturating_add(1);
        let entered_hold = self.state.move_count >= self.config.max_moves;
        if entered_hold {
            self.state.holding = true;
            log::info!("[dodge] holding after {} moves", self.state.move_count);
        }

        timeline.now(Cue::MoveDodger {
            offset: self.offset(),
        });
        timeline.now(Cue::AddClass(Part::Card, "pulse"));
        timeline.schedule(CARD_PULSE_MS, Cue::RemoveClass(Part::Card, "pulse"));
        timeline.now(Cue::AddClass(Part::Name, "shimmer-burst"));
        timeline.schedule(NAME_SHIMMER_MS, Cue::RemoveClass(Part::Name, "shimmer-burst"));
        timeline.now(Cue::AddClass(Part::Dodger, "moving"));
        let moving_ms = if entered_hold {
            DODGER_MOVING_HOLD_MS
        } else {
            DODGER_MOVING_MS
        };
        timeline.schedule(moving_ms, Cue::RemoveClass(Part::Dodger, "moving"));

        Dodge {
            from,
            to: self.position,
            move_count: self.state.move_count,
            entered_hold,
            placement,
        }
    }
}
