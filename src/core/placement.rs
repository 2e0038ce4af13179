use super::constants::{
    AVOID_DISTANCE, CONTAINER_PADDING, MIN_RANGE_PX, OVERLAP_THRESHOLD_PX2, PLACEMENT_ATTEMPTS,
};
use super::geometry::{center_distance, overlap_area, Rect};
use super::sample::between;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct PlacementParams {
    pub padding: f32,
    pub max_attempts: u32,
    pub overlap_threshold: f32,
    pub avoid_distance: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            padding: CONTAINER_PADDING,
            max_attempts: PLACEMENT_ATTEMPTS,
            overlap_threshold: OVERLAP_THRESHOLD_PX2,
            avoid_distance: AVOID_DISTANCE,
        }
    }
}

/// Inputs for one placement, in container-local coordinates.
#[derive(Clone, Debug, Default)]
pub struct PlacementRequest {
    pub container: Vec2,
    pub element: Vec2,
    pub target: Option<Rect>,
    pub avoid: Option<Rect>,
    /// Tried (clamped) before any random sample.
    pub preferred: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// New top-left of the element.
    pub position: Vec2,
    /// Random samples drawn (0 when the preferred position was accepted).
    pub attempts: u32,
    pub satisfied: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PlacementEngine {
    pub params: PlacementParams,
}

impl PlacementEngine {
    pub fn new(params: PlacementParams) -> Self {
        Self { params }
    }

    /// Valid top-left range `(min, max)` for an element of `element` size.
    pub fn bounds(&self, container: Vec2, element: Vec2) -> (Vec2, Vec2) {
        let pad = self.params.padding;
        let min = Vec2::splat(pad);
        let mut max = container - Vec2::splat(pad) - element;
        if max.x < min.x {
            max.x = min.x + MIN_RANGE_PX;
        }
        if max.y < min.y {
            max.y = min.y + MIN_RANGE_PX;
        }
        (min, max)
    }

    #[inline]
    pub fn clamp(&self, position: Vec2, container: Vec2, element: Vec2) -> Vec2 {
        let (min, max) = self.bounds(container, element);
        position.clamp(min, max)
    }

    pub fn is_acceptable(&self, candidate: &Rect, req: &PlacementRequest) -> bool {
        if let Some(target) = &req.target {
            if overlap_area(candidate, target) >= self.params.overlap_threshold {
                return false;
            }
        }
        if let Some(avoid) = &req.avoid {
            if center_distance(candidate, avoid) <= self.params.avoid_distance {
                return false;
            }
        }
        true
    }

    /// Bounded random-retry search. Accepts the first candidate that clears the
    /// target and the avoid region; falls back to the last sample otherwise.
    pub fn place<R: Rng + ?Sized>(&self, req: &PlacementRequest, rng: &mut R) -> Placement {
        let (min, max) = self.bounds(req.container, req.element);

        if let Some(preferred) = req.preferred {
            let position = preferred.clamp(min, max);
            if self.is_acceptable(&Rect::from_pos_size(position, req.element), req) {
                return Placement {
                    position,
                    attempts: 0,
                    satisfied: true,
                };
            }
        }

        let mut last = req.preferred.map(|p| p.clamp(min, max)).unwrap_or(min);
        let attempts = self.params.max_attempts.max(1);
        for attempt in 1..=attempts {
            let candidate = Vec2::new(between(rng, min.x, max.x), between(rng, min.y, max.y));
            last = candidate;
            if self.is_acceptable(&Rect::from_pos_size(candidate, req.element), req) {
                return Placement {
                    position: candidate,
                    attempts: attempt,
                    satisfied: true,
                };
            }
        }
        Placement {
            position: last,
            attempts,
            satisfied: false,
        }
    }
}
