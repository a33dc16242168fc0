//! Vellum UI: framework-neutral editing cores on top of `vellum-engine`.
//!
//! Two independent cores live here. Neither renders anything: the host feeds
//! input in, reads state back, and draws however it likes.
//!
//! - [`autocomplete`]: trigger detection over rich text, option fetching with
//!   supersession, keyboard selection and screen-reader announcements.
//! - [`gradient_picker`]: a control-point editor over a CSS gradient string,
//!   with insertion, dragging, keyboard nudging and removal.
//!
//! # Quick start
//!
//! ```rust
//! use vellum_ui::prelude::*;
//!
//! let mut picker = GradientPicker::new(Some("linear-gradient(90deg, red 0%, blue 100%)"));
//! picker.set_bar_rect(Rect::new(0.0, 0.0, 100.0, 20.0));
//! picker.handle_bar_event(&UiEvent::PointerMove { pos: Vec2::new(50.0, 10.0) });
//! picker.open_inserter();
//! let css = picker.inserter_color_change("lime").unwrap();
//! assert_eq!(css, "linear-gradient(90deg,rgb(255,0,0) 0%,rgb(0,255,0) 50%,rgb(0,0,255) 100%)");
//! ```

pub mod autocomplete;
pub mod event;
pub mod gradient_picker;

pub mod prelude {
    pub use crate::autocomplete::{
        Autocomplete, AutocompleteConfig, Completer, Completion, KeyedOption, OptionLabel,
        OptionValue, OptionsSource, RichText,
    };
    pub use crate::event::{EventResult, Modifiers, UiEvent};
    pub use crate::gradient_picker::{
        ControlPoint, GradientBarState, GradientPicker, GradientPickerConfig, PointerListeners,
    };
    pub use vellum_engine::coords::{Rect, Vec2};
    pub use vellum_engine::input::{Key, MouseButton};
    pub use vellum_gradient::GradientKind;
}
