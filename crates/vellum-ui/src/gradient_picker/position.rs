use vellum_engine::coords::Rect;

/// Maps a pointer x coordinate to a whole percent along `container`.
///
/// Returns `None` when the container is not laid out yet or has no width.
pub fn pointer_x_to_percent(client_x: f32, container: Option<Rect>) -> Option<f32> {
    let (left, right) = container?.x_range();
    let width = right - left;
    if !(width > 0.0) || !client_x.is_finite() {
        return None;
    }
    Some(clamp_percent((client_x - left) * 100.0 / width).round())
}

/// Inverse of [`pointer_x_to_percent`]: the x coordinate of `percent`.
pub fn percent_to_x(percent: f32, container: Rect) -> f32 {
    let (left, right) = container.x_range();
    left + (right - left) * clamp_percent(percent) / 100.0
}

#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}
