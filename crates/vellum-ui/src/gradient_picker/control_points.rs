//! Copy-on-write edits over the picker's control points.
//!
//! None of these mutate their input. The result is serialized back into the
//! CSS value, which stays the source of truth.

use super::position::clamp_percent;

/// A gradient stop as the picker sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    pub color: String,
    /// Percent along the bar, in `[0, 100]`.
    pub position: f32,
}

impl ControlPoint {
    pub fn new(color: impl Into<String>, position: f32) -> Self {
        Self { color: color.into(), position }
    }
}

/// Moving point `index` to `new_position` would cross another point or land
/// closer than `min_distance` to one.
pub fn is_overlapping(
    points: &[ControlPoint],
    index: usize,
    new_position: f32,
    min_distance: f32,
) -> bool {
    let Some(initial) = points.get(index).map(|p| p.position) else {
        return false;
    };
    let lo = initial.min(new_position);
    let hi = initial.max(new_position);

    points.iter().enumerate().any(|(i, p)| {
        i != index
            && ((p.position - new_position).abs() < min_distance
                || (lo < p.position && p.position < hi))
    })
}

/// Inserts a point so the list stays ordered by position.
pub fn add_control_point(points: &[ControlPoint], position: f32, color: &str) -> Vec<ControlPoint> {
    let at = points.iter().position(|p| p.position > position).unwrap_or(points.len());
    let mut out = points.to_vec();
    out.insert(at, ControlPoint::new(color, position));
    out
}

pub fn remove_control_point(points: &[ControlPoint], index: usize) -> Vec<ControlPoint> {
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, p)| p.clone())
        .collect()
}

/// Moves point `index`, clamped to `[0, 100]`. Overlapping moves are dropped
/// and return the points unchanged.
pub fn update_control_point_position(
    points: &[ControlPoint],
    index: usize,
    new_position: f32,
    min_distance: f32,
) -> Vec<ControlPoint> {
    let new_position = clamp_percent(new_position);
    let mut out = points.to_vec();
    if is_overlapping(points, index, new_position, min_distance) {
        return out;
    }
    if let Some(point) = out.get_mut(index) {
        point.position = new_position;
    }
    out
}

pub fn update_control_point_color(
    points: &[ControlPoint],
    index: usize,
    color: &str,
) -> Vec<ControlPoint> {
    let mut out = points.to_vec();
    if let Some(point) = out.get_mut(index) {
        point.color = color.to_string();
    }
    out
}

/// Recolors the first point sitting exactly at `position`.
pub fn update_control_point_color_by_position(
    points: &[ControlPoint],
    position: f32,
    color: &str,
) -> Vec<ControlPoint> {
    match points.iter().position(|p| p.position == position) {
        Some(index) => update_control_point_color(points, index, color),
        None => points.to_vec(),
    }
}
