//! Structured form of a CSS gradient function.
//!
//! The AST is derived data: it is rebuilt from the serialized string on every
//! external value change and never carries identity across re-parses.

// ── GradientKind ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    Linear,
    Radial,
}

impl GradientKind {
    /// CSS function name, e.g. `linear-gradient`.
    pub fn as_str(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear-gradient" => Some(GradientKind::Linear),
            "radial-gradient" => Some(GradientKind::Radial),
            _ => None,
        }
    }
}

// ── Orientation ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    /// Angle in degrees, kept as the source number text (`"90"`, `"-22.5"`).
    Angular(String),
    /// `to <side-or-corner>` keywords, space separated (`"bottom left"`).
    Directional(String),
    /// Radial prelude (`circle at center`, `farthest-corner`), verbatim.
    /// Never serialized back out.
    Shape(String),
}

impl Orientation {
    /// Numeric angle in degrees, when angular and well-formed.
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Orientation::Angular(v) => v.parse().ok(),
            _ => None,
        }
    }
}

// ── Colors ────────────────────────────────────────────────────────────────

/// Color of a single stop.
///
/// Functional forms keep their components as written (`"6"`, `"50%"`), so a
/// parse → serialize cycle reproduces the numbers exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum StopColor {
    /// Hex digits without the leading `#`.
    Hex(String),
    Rgb(Vec<String>),
    Rgba(Vec<String>),
    Hsl(Vec<String>),
    Hsla(Vec<String>),
    /// Named color or keyword such as `transparent`.
    Literal(String),
}

impl StopColor {
    /// The type tag used when serializing functional colors.
    pub fn type_name(&self) -> &'static str {
        match self {
            StopColor::Hex(_) => "hex",
            StopColor::Rgb(_) => "rgb",
            StopColor::Rgba(_) => "rgba",
            StopColor::Hsl(_) => "hsl",
            StopColor::Hsla(_) => "hsla",
            StopColor::Literal(_) => "literal",
        }
    }
}

// ── Length ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LengthUnit {
    Percent,
    Px,
    Em,
}

impl LengthUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Percent => "%",
            LengthUnit::Px => "px",
            LengthUnit::Em => "em",
        }
    }

    pub fn from_suffix(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "%" => Some(LengthUnit::Percent),
            "px" => Some(LengthUnit::Px),
            "em" => Some(LengthUnit::Em),
            _ => None,
        }
    }
}

/// Stop position. `value` is the number text as written (`"33.3"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Length {
    pub value: String,
    pub unit: LengthUnit,
}

impl Length {
    pub fn percent(value: impl Into<String>) -> Self {
        Self { value: value.into(), unit: LengthUnit::Percent }
    }

    /// Numeric value; unparsable text reads as `0`.
    pub fn number(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }
}

// ── ColorStop / GradientNode ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: StopColor,
    pub length: Option<Length>,
}

impl ColorStop {
    /// Sort key used by the serializer: missing positions count as 0.
    pub fn position(&self) -> f64 {
        self.length.as_ref().map(Length::number).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientNode {
    pub kind: GradientKind,
    pub orientation: Option<Orientation>,
    pub color_stops: Vec<ColorStop>,
}
