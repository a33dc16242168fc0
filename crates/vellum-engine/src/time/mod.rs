//! Time subsystem.
//!
//! Provides testable timer utilities without coupling to an event loop.
//! Callers pass `Instant`s in explicitly, so tests can step time by hand.
//! Intended usage:
//! - one `Debouncer` per debounced concern (announcements, filter input)
//! - call `poll(now)` from the host's tick to collect what fired

mod debounce;

pub use debounce::Debouncer;
