//! Input identifiers.
//!
//! Public API is platform-agnostic. Hosts translate their native keyboard and
//! pointer events into these types before handing them to a widget core.

mod types;

pub use types::{Key, Modifiers, MouseButton};
