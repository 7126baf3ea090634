use crate::constants::SWIPE_THRESHOLD;
use crate::state::Step;

/// Viewport coordinates of a touch point.
#[derive(Debug, Default, PartialEq, Clone, Copy)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Navigation bound to a `KeyboardEvent.key` value, if any.
pub fn key_step(key: &str) -> Option<Step> {
    match key {
        "ArrowRight" | " " | "Enter" => Some(Step::Advance),
        "ArrowLeft" => Some(Step::Retreat),
        _ => None,
    }
}

/// Turn a finished touch into a navigation step.
///
/// A mostly-horizontal move longer than the threshold is a swipe: leftward
/// advances, rightward retreats. Everything else, taps and vertical drags
/// included, advances.
pub fn resolve_swipe(start: Point, end: Point) -> Step {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy.abs() {
        if dx < 0.0 { Step::Advance } else { Step::Retreat }
    } else {
        Step::Advance
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchTracker {
    start: Point,
}

impl TouchTracker {
    pub fn begin(&mut self, at: Point) {
        self.start = at;
    }

    // A release without a recorded start measures from the origin
    pub fn end(&self, at: Point) -> Step {
        resolve_swipe(self.start, at)
    }
}
