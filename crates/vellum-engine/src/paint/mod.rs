//! Paint model shared between widget cores and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - CSS color parsing and formatting
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod css;
pub mod gradient;
mod named;

pub use color::Color;
pub use css::CssColor;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}
