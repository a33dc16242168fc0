//! CSS gradient value ⇄ AST ⇄ control points.

use log::debug;
use vellum_engine::coords::Rect;
use vellum_engine::paint::{self, Color, CssColor, LinearGradient, Paint};
use vellum_gradient::{
    ColorStop, GradientKind, GradientNode, Length, LengthUnit, Orientation, StopColor,
    parse_gradient, serialize_color, serialize_gradient,
};

use super::control_points::ControlPoint;
use super::position::clamp_percent;

pub const DEFAULT_GRADIENT: &str =
    "linear-gradient(135deg, rgba(6, 147, 227, 1) 0%, rgb(155, 81, 224) 100%)";

pub const DEFAULT_LINEAR_GRADIENT_ANGLE: f64 = 180.0;

/// Orientation used to paint the bar and given to linear gradients that have none.
pub fn horizontal_orientation() -> Orientation {
    Orientation::Angular("90".into())
}

/// Parse result with the fallback already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGradient {
    pub ast: GradientNode,
    /// False when `value` was absent or unparsable and the default was used.
    pub has_gradient: bool,
}

/// Parses `value`, falling back to [`DEFAULT_GRADIENT`], then normalizes the
/// orientation to an angle and the stop lengths to percentages.
pub fn gradient_ast_with_default(value: Option<&str>) -> ParsedGradient {
    let (mut ast, has_gradient) = match parse_gradient(value.unwrap_or(DEFAULT_GRADIENT)) {
        Ok(ast) => (ast, value.is_some()),
        Err(e) => {
            debug!("gradient picker: {e}; using default gradient");
            (default_ast(), false)
        }
    };

    if let Some(Orientation::Directional(dir)) = &ast.orientation {
        let angular = directional_angle(dir).map(|deg| Orientation::Angular(deg.to_string()));
        ast.orientation = angular;
    }

    if ast.color_stops.iter().any(has_unsupported_length) {
        let n = ast.color_stops.len();
        let step = if n > 1 { 100.0 / (n - 1) as f64 } else { 0.0 };
        for (i, stop) in ast.color_stops.iter_mut().enumerate() {
            stop.length = Some(Length::percent((step * i as f64).to_string()));
        }
    } else {
        for stop in ast.color_stops.iter_mut() {
            if let Some(length) = &mut stop.length {
                clamp_length(length);
            }
        }
    }

    ParsedGradient { ast, has_gradient }
}

fn default_ast() -> GradientNode {
    parse_gradient(DEFAULT_GRADIENT).unwrap_or_else(|_| GradientNode {
        kind: GradientKind::Linear,
        orientation: Some(Orientation::Angular("135".into())),
        color_stops: vec![
            ColorStop { color: StopColor::Hex("0693e3".into()), length: Some(Length::percent("0")) },
            ColorStop { color: StopColor::Hex("9b51e0".into()), length: Some(Length::percent("100")) },
        ],
    })
}

/// Pulls an out-of-range percentage back into [0, 100]; in-range text is kept verbatim.
fn clamp_length(length: &mut Length) {
    if let Ok(value) = length.value.parse::<f32>() {
        let clamped = clamp_percent(value);
        if clamped != value {
            length.value = clamped.to_string();
        }
    }
}

fn has_unsupported_length(stop: &ColorStop) -> bool {
    !matches!(&stop.length, Some(Length { unit: LengthUnit::Percent, .. }))
}

/// Angle for a `to <side-or-corner>` keyword list.
pub fn directional_angle(direction: &str) -> Option<u16> {
    let words: Vec<&str> = direction.split_whitespace().collect();
    let deg = match words.as_slice() {
        ["top"] => 0,
        ["top", "right"] | ["right", "top"] => 45,
        ["right"] => 90,
        ["bottom", "right"] | ["right", "bottom"] => 135,
        ["bottom"] => 180,
        ["bottom", "left"] | ["left", "bottom"] => 225,
        ["left"] => 270,
        ["top", "left"] | ["left", "top"] => 315,
        _ => return None,
    };
    Some(deg)
}

// ── control points ────────────────────────────────────────────────────────

/// Control points in stop order. Positions are truncated to whole percents.
pub fn control_points_from_ast(ast: &GradientNode) -> Vec<ControlPoint> {
    ast.color_stops
        .iter()
        .map(|stop| ControlPoint {
            color: serialize_color(&stop.color),
            position: stop.length.as_ref().map_or(0.0, |l| l.number().trunc() as f32),
        })
        .collect()
}

/// Replaces the stops of `ast` with `points`, each color resolved to an
/// `rgb(...)` or, when translucent, `rgba(...)` stop.
pub fn ast_with_control_points(ast: &GradientNode, points: &[ControlPoint]) -> GradientNode {
    let color_stops = points
        .iter()
        .map(|point| {
            let c = CssColor::parse_or_black(&point.color);
            let mut parts = vec![c.r.to_string(), c.g.to_string(), c.b.to_string()];
            let color = if c.is_opaque() {
                StopColor::Rgb(parts)
            } else {
                parts.push(c.a.to_string());
                StopColor::Rgba(parts)
            };
            ColorStop { color, length: Some(Length::percent(point.position.to_string())) }
        })
        .collect();

    GradientNode { kind: ast.kind, orientation: ast.orientation.clone(), color_stops }
}

/// The same stops as a left-to-right linear gradient, for painting the bar.
pub fn linear_gradient_representation(ast: &GradientNode) -> String {
    serialize_gradient(&GradientNode {
        kind: GradientKind::Linear,
        orientation: Some(horizontal_orientation()),
        color_stops: ast.color_stops.clone(),
    })
}

/// Engine paint for the bar background spanning `rect`.
///
/// Fewer than two points, or a bar with no width, cannot form a gradient and
/// paints solid with the first stop.
pub fn bar_paint(points: &[ControlPoint], rect: Rect) -> Paint {
    let stops: Vec<_> = points
        .iter()
        .map(|p| {
            let color = CssColor::parse_or_black(&p.color);
            paint::ColorStop::new(p.position / 100.0, color.into())
        })
        .collect();
    let gradient = LinearGradient::horizontal(rect, stops);
    if gradient.is_valid() {
        return Paint::LinearGradient(gradient);
    }
    let color = gradient.stops.first().map_or(Color::transparent(), |s| s.color);
    Paint::solid(color)
}

// ── type and angle ────────────────────────────────────────────────────────

/// Switches the gradient function. Linear keeps an angle or gains 90deg;
/// radial drops the orientation.
pub fn with_kind(ast: &GradientNode, kind: GradientKind) -> GradientNode {
    let orientation = match kind {
        GradientKind::Linear => match &ast.orientation {
            Some(o @ Orientation::Angular(_)) => Some(o.clone()),
            _ => Some(horizontal_orientation()),
        },
        GradientKind::Radial => None,
    };
    GradientNode { kind, orientation, color_stops: ast.color_stops.clone() }
}

/// Current angle of a linear gradient, [`DEFAULT_LINEAR_GRADIENT_ANGLE`] when unset.
pub fn angle(ast: &GradientNode) -> f64 {
    ast.orientation
        .as_ref()
        .and_then(Orientation::degrees)
        .unwrap_or(DEFAULT_LINEAR_GRADIENT_ANGLE)
}

pub fn with_angle(ast: &GradientNode, degrees: f64) -> GradientNode {
    GradientNode {
        orientation: Some(Orientation::Angular(degrees.to_string())),
        ..ast.clone()
    }
}
