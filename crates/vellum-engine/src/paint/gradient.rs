use crate::coords::{Rect, Vec2};

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1]. Builders sort stops by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops define premultiplied colors.
/// - Outside [0, 1] the edge stops are extended.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, mut stops: Vec<ColorStop>) -> Self {
        stops.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { start, end, stops }
    }

    /// Left-to-right gradient spanning `rect` at its vertical center.
    pub fn horizontal(rect: Rect, stops: Vec<ColorStop>) -> Self {
        let (x0, x1) = rect.x_range();
        let cy = rect.origin.y + rect.size.y * 0.5;
        Self::new(Vec2::new(x0, cy), Vec2::new(x1, cy), stops)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}
