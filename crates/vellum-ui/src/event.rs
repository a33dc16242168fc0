use vellum_engine::coords::Vec2;
use vellum_engine::input::{Key, MouseButton};

pub use vellum_engine::input::Modifiers;

/// Input events routed into a widget core.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A pointer button went down at `pos`.
    PointerDown { pos: Vec2, button: MouseButton },
    /// Pointer moved to `pos`, with or without a button held.
    PointerMove { pos: Vec2 },
    /// A pointer button was released at `pos`. Fires even when `pos` is
    /// outside the widget that started the gesture.
    PointerUp { pos: Vec2 },
    /// Pointer left the widget's area.
    PointerLeave,
    /// Named key pressed (Backspace, Enter, arrow keys, …).
    KeyPress { key: Key, modifiers: Modifiers },
}

/// Result of routing an event.
///
/// `Consumed` tells the host to suppress the default action and stop
/// propagation; `Ignored` lets the event continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
