//! Vellum engine crate.
//!
//! Owns the platform-neutral pieces the widget cores build on: geometry,
//! input identifiers, paint and CSS color math, timers and logging setup.
//! Nothing here knows about a DOM or a renderer.

pub mod coords;
pub mod input;
pub mod time;

pub mod logging;
pub mod paint;
