//! Coordinate and geometry types shared by the widget cores.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Hosts translate their pointer coordinates into this space before routing
//! events.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
