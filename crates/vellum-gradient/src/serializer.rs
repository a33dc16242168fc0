use crate::ast::{ColorStop, GradientNode, Length, Orientation, StopColor};

/// `literal` verbatim, `hex` with `#`, functions as `type(a,b,c)`.
pub fn serialize_color(color: &StopColor) -> String {
    match color {
        StopColor::Literal(name) => name.clone(),
        StopColor::Hex(digits) => format!("#{digits}"),
        StopColor::Rgb(parts)
        | StopColor::Rgba(parts)
        | StopColor::Hsl(parts)
        | StopColor::Hsla(parts) => format!("{}({})", color.type_name(), parts.join(",")),
    }
}

pub fn serialize_length(length: &Length) -> String {
    format!("{}{}", length.value, length.unit.as_str())
}

pub fn serialize_color_stop(stop: &ColorStop) -> String {
    let color = serialize_color(&stop.color);
    match &stop.length {
        Some(length) => format!("{} {}", color, serialize_length(length)),
        None => color,
    }
}

/// Only angular orientations have a serialized form.
pub fn serialize_orientation(orientation: &Orientation) -> Option<String> {
    match orientation {
        Orientation::Angular(value) => Some(format!("{value}deg")),
        Orientation::Directional(_) | Orientation::Shape(_) => None,
    }
}

/// Serialize a gradient as `type(orientation,stop,stop,...)`.
///
/// Stops are written in ascending position order (stable for ties); the
/// node itself is left untouched.
pub fn serialize_gradient(node: &GradientNode) -> String {
    let mut stops: Vec<&ColorStop> = node.color_stops.iter().collect();
    stops.sort_by(|a, b| a.position().total_cmp(&b.position()));

    let segments: Vec<String> = node
        .orientation
        .as_ref()
        .and_then(serialize_orientation)
        .into_iter()
        .chain(stops.into_iter().map(serialize_color_stop))
        .collect();

    format!("{}({})", node.kind.as_str(), segments.join(","))
}
