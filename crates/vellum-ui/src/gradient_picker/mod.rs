//! Control-point editor for CSS gradient values.
//!
//! The CSS string is the source of truth. Every edit is computed on the
//! control points derived from it, re-serialized, reported through
//! `on_change`, and parsed again.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | parse-with-default, AST ⇄ control points, bar paint |
//! | [`control_points`] | copy-on-write point edits and the overlap test |
//! | [`bar`] | `GradientBarState` reducer |
//! | [`drag`] | drag gesture state and listener lifecycle |
//! | [`position`] | pointer x ⇄ percent |

pub mod bar;
pub mod control_points;
pub mod drag;
pub mod model;
pub mod position;

pub use bar::{BarAction, GradientBarState};
pub use control_points::ControlPoint;
pub use drag::{ControlPointMoveState, ListenerGuard, ListenerId, PointerListeners};
pub use model::{DEFAULT_GRADIENT, ParsedGradient, gradient_ast_with_default};
pub use position::{clamp_percent, percent_to_x, pointer_x_to_percent};

use std::rc::Rc;

use log::trace;
use vellum_engine::coords::Rect;
use vellum_engine::input::{Key, MouseButton};
use vellum_engine::paint::{CssColor, Paint};
use vellum_gradient::{GradientKind, GradientNode, serialize_gradient};

use crate::event::{EventResult, UiEvent};

// ── GradientPickerConfig ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPickerConfig {
    /// Closest two points may get when one is moved.
    pub min_distance_between_points: f32,
    /// The insert affordance hides within this distance of a point.
    pub min_distance_inserter_to_point: f32,
    /// Arrow-key nudge, in percent.
    pub keyboard_step: f32,
    /// Travel after which a drag no longer counts as a click.
    pub min_significant_move: f32,
    pub disable_remove: bool,
}

impl Default for GradientPickerConfig {
    fn default() -> Self {
        Self {
            min_distance_between_points: 0.0,
            min_distance_inserter_to_point: 10.0,
            keyboard_step: 10.0,
            min_significant_move: 5.0,
            disable_remove: false,
        }
    }
}

impl GradientPickerConfig {
    pub fn min_distance_between_points(mut self, v: f32) -> Self { self.min_distance_between_points = v; self }
    pub fn min_distance_inserter_to_point(mut self, v: f32) -> Self { self.min_distance_inserter_to_point = v; self }
    pub fn keyboard_step(mut self, v: f32) -> Self { self.keyboard_step = v; self }
    pub fn min_significant_move(mut self, v: f32) -> Self { self.min_significant_move = v; self }
    pub fn disable_remove(mut self, v: bool) -> Self { self.disable_remove = v; self }
}

// ── GradientPicker ────────────────────────────────────────────────────────

/// Interactive editor over one gradient value.
///
/// # Example
/// ```rust,ignore
/// let mut picker = GradientPicker::new(Some("linear-gradient(90deg, red 0%, blue 100%)"))
///     .pointer_listeners(host.clone())
///     .on_change(|css| block.set_gradient(css));
/// picker.set_bar_rect(Rect::new(0.0, 0.0, 240.0, 24.0));
/// picker.handle_bar_event(&UiEvent::PointerMove { pos: Vec2::new(120.0, 12.0) });
/// picker.open_inserter();
/// picker.inserter_color_change("#00ff00");
/// ```
pub struct GradientPicker {
    config: GradientPickerConfig,
    parsed: ParsedGradient,
    bar: GradientBarState,
    bar_rect: Option<Rect>,
    listeners: Option<Rc<dyn PointerListeners>>,
    move_state: Option<ControlPointMoveState>,
    /// Control point whose color popover is open.
    open_point: Option<usize>,
    /// The open inserter already added its point.
    inserted: bool,
    on_change: Option<Box<dyn FnMut(&str)>>,
}

impl GradientPicker {
    pub fn new(value: Option<&str>) -> Self {
        Self {
            config: GradientPickerConfig::default(),
            parsed: gradient_ast_with_default(value),
            bar: GradientBarState::Idle,
            bar_rect: None,
            listeners: None,
            move_state: None,
            open_point: None,
            inserted: false,
            on_change: None,
        }
    }

    pub fn config(mut self, config: GradientPickerConfig) -> Self {
        self.config = config;
        self
    }

    /// Without listeners, pointer-down on a control point starts no drag.
    pub fn pointer_listeners(mut self, host: Rc<dyn PointerListeners>) -> Self {
        self.listeners = Some(host);
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    // ── value ─────────────────────────────────────────────────────────────

    /// External value change.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.parsed = gradient_ast_with_default(value);
    }

    /// The current value, re-serialized.
    pub fn value(&self) -> String {
        serialize_gradient(&self.parsed.ast)
    }

    pub fn has_gradient(&self) -> bool {
        self.parsed.has_gradient
    }

    pub fn ast(&self) -> &GradientNode {
        &self.parsed.ast
    }

    pub fn control_points(&self) -> Vec<ControlPoint> {
        model::control_points_from_ast(&self.parsed.ast)
    }

    pub fn kind(&self) -> GradientKind {
        self.parsed.ast.kind
    }

    pub fn angle(&self) -> f64 {
        model::angle(&self.parsed.ast)
    }

    #[inline]
    pub fn bar_state(&self) -> GradientBarState {
        self.bar
    }

    #[inline]
    pub fn open_point(&self) -> Option<usize> {
        self.open_point
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.move_state.as_ref().is_some_and(ControlPointMoveState::listeners_activated)
    }

    /// CSS background for the bar: the stops as a horizontal linear gradient.
    pub fn bar_background(&self) -> String {
        model::linear_gradient_representation(&self.parsed.ast)
    }

    pub fn bar_paint(&self) -> Option<Paint> {
        Some(model::bar_paint(&self.control_points(), self.bar_rect?))
    }

    pub fn set_bar_rect(&mut self, rect: Rect) {
        self.bar_rect = Some(rect);
    }

    pub fn can_remove(&self) -> bool {
        !self.config.disable_remove && self.parsed.ast.color_stops.len() > 2
    }

    fn dispatch(&mut self, action: BarAction) {
        let next = self.bar.reduce(action);
        if next != self.bar {
            trace!("gradient bar: {:?} -> {:?}", self.bar, next);
        }
        self.bar = next;
    }

    fn commit_points(&mut self, points: &[ControlPoint]) -> Option<String> {
        let ast = model::ast_with_control_points(&self.parsed.ast, points);
        self.commit(ast)
    }

    fn commit(&mut self, ast: GradientNode) -> Option<String> {
        let css = serialize_gradient(&ast);
        self.parsed = gradient_ast_with_default(Some(&css));
        if let Some(f) = &mut self.on_change {
            f(&css);
        }
        Some(css)
    }

    // ── bar and inserter ──────────────────────────────────────────────────

    /// Pointer events over the bar itself.
    pub fn handle_bar_event(&mut self, event: &UiEvent) -> EventResult {
        match event {
            UiEvent::PointerMove { pos } => {
                self.hover_bar(pos.x);
                EventResult::Consumed
            }
            UiEvent::PointerLeave => {
                self.dispatch(BarAction::StopInserterMove);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn hover_bar(&mut self, client_x: f32) {
        let Some(position) = pointer_x_to_percent(client_x, self.bar_rect) else {
            return;
        };
        let min = self.config.min_distance_inserter_to_point;
        let near_point = self
            .control_points()
            .iter()
            .any(|p| (position - p.position).abs() < min);

        if near_point {
            if self.bar.is_moving_inserter() {
                self.dispatch(BarAction::StopInserterMove);
            }
            return;
        }
        self.dispatch(BarAction::MoveInserter { insert_position: position });
    }

    /// The insert affordance was clicked.
    pub fn open_inserter(&mut self) {
        self.dispatch(BarAction::OpenInserter);
        self.inserted = false;
    }

    /// Color picked for the point being inserted. The first pick adds the
    /// point; later picks recolor it.
    pub fn inserter_color_change(&mut self, color: &str) -> Option<String> {
        let GradientBarState::InsertingControlPoint { insert_position } = self.bar else {
            return None;
        };
        let color = rgb_string(color);
        let points = self.control_points();
        let points = if self.inserted {
            control_points::update_control_point_color_by_position(&points, insert_position, &color)
        } else {
            self.inserted = true;
            control_points::add_control_point(&points, insert_position, &color)
        };
        self.commit_points(&points)
    }

    pub fn close_inserter(&mut self) {
        self.dispatch(BarAction::CloseInserter);
        self.inserted = false;
    }

    // ── control points ────────────────────────────────────────────────────

    /// Events targeted at control point `index`.
    pub fn handle_control_point_event(&mut self, index: usize, event: &UiEvent) -> EventResult {
        match event {
            UiEvent::PointerDown { button: MouseButton::Left, .. } => {
                self.control_point_pointer_down(index);
                EventResult::Consumed
            }
            // Modified arrows belong to the host (text selection, focus moves).
            UiEvent::KeyPress { key, modifiers } if !modifiers.any() => self.control_point_key(index, *key),
            _ => EventResult::Ignored,
        }
    }

    /// Pointer pressed on control point `index`: starts a drag gesture.
    pub fn control_point_pointer_down(&mut self, index: usize) {
        let Some(host) = self.listeners.clone() else {
            return;
        };
        let Some(point) = self.control_points().get(index).cloned() else {
            return;
        };
        // replacing a stale gesture detaches its listeners
        self.move_state = Some(ControlPointMoveState::start(index, point.position, host));
        self.dispatch(BarAction::StartControlChange);
    }

    /// Document-wide pointer events while a drag listener is attached.
    pub fn handle_drag_event(&mut self, event: &UiEvent) -> EventResult {
        if !self.is_dragging() {
            return EventResult::Ignored;
        }
        match event {
            UiEvent::PointerMove { pos } => {
                self.drag_to(pos.x);
                EventResult::Consumed
            }
            UiEvent::PointerUp { .. } => {
                self.end_drag();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn drag_to(&mut self, client_x: f32) -> Option<String> {
        let position = pointer_x_to_percent(client_x, self.bar_rect)?;
        let state = self.move_state.as_mut()?;
        state.track(position, self.config.min_significant_move);
        let index = state.index;

        let points = self.control_points();
        let moved = control_points::update_control_point_position(
            &points,
            index,
            position,
            self.config.min_distance_between_points,
        );
        if moved == points {
            return None;
        }
        self.commit_points(&moved)
    }

    /// Ends the gesture. The move state is kept so the click that follows a
    /// drag can be recognized.
    pub fn end_drag(&mut self) {
        let released = self.move_state.as_mut().is_some_and(ControlPointMoveState::release);
        if released {
            self.dispatch(BarAction::StopControlChange);
        }
    }

    /// Click on control point `index`: toggles its color popover, unless
    /// the click ends a drag.
    pub fn control_point_click(&mut self, index: usize) {
        if self.move_state.as_ref().is_some_and(|s| s.significant_move_happened) {
            return;
        }
        if self.open_point == Some(index) {
            self.close_control_point();
        } else {
            self.dispatch(BarAction::StartControlChange);
            self.open_point = Some(index);
        }
    }

    /// Closes the open color popover.
    pub fn close_control_point(&mut self) {
        self.dispatch(BarAction::StopControlChange);
        self.open_point = None;
    }

    /// Keys on a focused control point. Arrows nudge and are consumed;
    /// Escape closes an open popover.
    pub fn control_point_key(&mut self, index: usize, key: Key) -> EventResult {
        let step = match key {
            Key::ArrowLeft => -self.config.keyboard_step,
            Key::ArrowRight => self.config.keyboard_step,
            Key::Escape if self.open_point == Some(index) => {
                self.close_control_point();
                return EventResult::Consumed;
            }
            _ => return EventResult::Ignored,
        };

        let points = self.control_points();
        if let Some(point) = points.get(index) {
            let target = clamp_percent(point.position + step);
            let moved = control_points::update_control_point_position(
                &points,
                index,
                target,
                self.config.min_distance_between_points,
            );
            if moved != points {
                self.commit_points(&moved);
            }
        }
        EventResult::Consumed
    }

    pub fn control_point_color_change(&mut self, index: usize, color: &str) -> Option<String> {
        let points = self.control_points();
        if index >= points.len() {
            return None;
        }
        let points = control_points::update_control_point_color(&points, index, &rgb_string(color));
        self.commit_points(&points)
    }

    /// Removes point `index` and closes its popover. Refused when removal is
    /// disabled or only two points remain.
    pub fn remove_control_point(&mut self, index: usize) -> Option<String> {
        let points = self.control_points();
        if !self.can_remove() || index >= points.len() {
            return None;
        }
        let points = control_points::remove_control_point(&points, index);
        let css = self.commit_points(&points);
        self.close_control_point();
        css
    }

    // ── type and angle ────────────────────────────────────────────────────

    pub fn set_kind(&mut self, kind: GradientKind) -> Option<String> {
        let ast = model::with_kind(&self.parsed.ast, kind);
        self.commit(ast)
    }

    pub fn set_angle(&mut self, degrees: f64) -> Option<String> {
        let ast = model::with_angle(&self.parsed.ast, degrees);
        self.commit(ast)
    }
}

/// Normalizes any CSS color to `rgb(...)` / `rgba(...)` text.
fn rgb_string(color: &str) -> String {
    CssColor::parse_or_black(color).to_rgb_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient_picker::drag::tests::Recorder;
    use std::cell::RefCell;
    use vellum_engine::coords::Vec2;
    use vellum_engine::input::Modifiers;

    const RED_BLUE: &str = "linear-gradient(90deg, red 0%, blue 100%)";

    fn picker(value: &str) -> GradientPicker {
        let mut p = GradientPicker::new(Some(value));
        p.set_bar_rect(Rect::new(0.0, 0.0, 100.0, 20.0));
        p
    }

    fn with_host(value: &str) -> (GradientPicker, Rc<Recorder>) {
        let host = Rc::new(Recorder::default());
        let mut p = GradientPicker::new(Some(value)).pointer_listeners(host.clone());
        p.set_bar_rect(Rect::new(0.0, 0.0, 100.0, 20.0));
        (p, host)
    }

    fn move_to(x: f32) -> UiEvent {
        UiEvent::PointerMove { pos: Vec2::new(x, 10.0) }
    }

    fn up() -> UiEvent {
        UiEvent::PointerUp { pos: Vec2::zero() }
    }

    fn positions(p: &GradientPicker) -> Vec<f32> {
        p.control_points().iter().map(|c| c.position).collect()
    }

    // ── value ─────────────────────────────────────────────────────────────

    #[test]
    fn value_round_trips() {
        let p = picker(RED_BLUE);
        assert_eq!(p.value(), "linear-gradient(90deg,red 0%,blue 100%)");
        assert_eq!(p.control_points(), vec![ControlPoint::new("red", 0.0), ControlPoint::new("blue", 100.0)]);
        assert_eq!(p.bar_background(), "linear-gradient(90deg,red 0%,blue 100%)");
        assert!(p.bar_paint().is_some());
    }

    #[test]
    fn unparsable_value_shows_default() {
        let p = picker("linear-gradient(");
        assert!(!p.has_gradient());
        assert_eq!(p.angle(), 135.0);
    }

    // ── inserter ──────────────────────────────────────────────────────────

    #[test]
    fn hover_near_point_hides_inserter() {
        let mut p = picker(RED_BLUE);
        p.handle_bar_event(&move_to(50.0));
        assert_eq!(p.bar_state(), GradientBarState::MovingInserter { insert_position: 50.0 });
        p.handle_bar_event(&move_to(95.0));
        assert_eq!(p.bar_state(), GradientBarState::Idle);
        p.handle_bar_event(&move_to(5.0));
        assert_eq!(p.bar_state(), GradientBarState::Idle);
    }

    #[test]
    fn leaving_the_bar_stops_inserter() {
        let mut p = picker(RED_BLUE);
        p.handle_bar_event(&move_to(40.0));
        p.handle_bar_event(&UiEvent::PointerLeave);
        assert_eq!(p.bar_state(), GradientBarState::Idle);
    }

    #[test]
    fn insert_then_recolor_then_close() {
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        let mut p = picker(RED_BLUE).on_change(move |css| sink.borrow_mut().push(css.to_string()));

        p.handle_bar_event(&move_to(50.0));
        p.open_inserter();
        assert!(p.bar_state().is_inserting_control_point());

        let css = p.inserter_color_change("#00ff00").unwrap();
        assert_eq!(css, "linear-gradient(90deg,rgb(255,0,0) 0%,rgb(0,255,0) 50%,rgb(0,0,255) 100%)");
        assert_eq!(positions(&p), vec![0.0, 50.0, 100.0]);

        p.inserter_color_change("rgba(0, 0, 0, 0.5)");
        assert_eq!(p.control_points().len(), 3);
        assert_eq!(p.control_points()[1].color, "rgba(0,0,0,0.5)");

        p.close_inserter();
        assert_eq!(p.bar_state(), GradientBarState::Idle);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn color_change_without_open_inserter_is_ignored() {
        let mut p = picker(RED_BLUE);
        assert_eq!(p.inserter_color_change("green"), None);
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn drag_moves_point_and_detaches_on_release() {
        let (mut p, host) = with_host("linear-gradient(red 0%, green 30%, blue 100%)");
        p.control_point_pointer_down(1);
        assert_eq!(p.bar_state(), GradientBarState::MovingControlPoint);
        assert_eq!(host.live.borrow().len(), 1);

        assert!(p.handle_drag_event(&move_to(45.0)).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 45.0, 100.0]);

        p.handle_drag_event(&up());
        assert!(host.live.borrow().is_empty());
        assert_eq!(p.bar_state(), GradientBarState::Idle);
        assert!(!p.handle_drag_event(&move_to(60.0)).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 45.0, 100.0]);
    }

    #[test]
    fn drag_into_neighbor_range_is_rejected() {
        let (p, _host) = with_host("linear-gradient(red 0%, green 30%, blue 33%, black 100%)");
        let mut p = p.config(GradientPickerConfig::default().min_distance_between_points(5.0));
        p.control_point_pointer_down(1);
        p.handle_drag_event(&move_to(32.0));
        assert_eq!(positions(&p), vec![0.0, 30.0, 33.0, 100.0]);
    }

    #[test]
    fn click_after_significant_drag_keeps_popover_closed() {
        let (mut p, _host) = with_host("linear-gradient(red 0%, green 30%, blue 100%)");
        p.control_point_pointer_down(1);
        p.handle_drag_event(&move_to(50.0));
        p.handle_drag_event(&up());
        p.control_point_click(1);
        assert_eq!(p.open_point(), None);

        // a plain click opens and closes it
        p.control_point_pointer_down(1);
        p.handle_drag_event(&up());
        p.control_point_click(1);
        assert_eq!(p.open_point(), Some(1));
        assert_eq!(p.bar_state(), GradientBarState::MovingControlPoint);
        p.control_point_click(1);
        assert_eq!(p.open_point(), None);
        assert_eq!(p.bar_state(), GradientBarState::Idle);
    }

    #[test]
    fn dropping_picker_mid_drag_detaches() {
        let (mut p, host) = with_host(RED_BLUE);
        p.control_point_pointer_down(0);
        drop(p);
        assert!(host.live.borrow().is_empty());
    }

    #[test]
    fn new_gesture_replaces_stale_listeners() {
        let (mut p, host) = with_host(RED_BLUE);
        p.control_point_pointer_down(0);
        p.control_point_pointer_down(1);
        assert_eq!(host.live.borrow().len(), 1);
    }

    #[test]
    fn routed_events_start_drag_and_nudge() {
        let (mut p, host) = with_host("linear-gradient(red 0%, green 50%, blue 100%)");
        let right = UiEvent::PointerDown { pos: Vec2::zero(), button: MouseButton::Right };
        assert!(!p.handle_control_point_event(1, &right).is_consumed());
        assert!(host.live.borrow().is_empty());

        let left = UiEvent::PointerDown { pos: Vec2::zero(), button: MouseButton::Left };
        assert!(p.handle_control_point_event(1, &left).is_consumed());
        assert!(p.is_dragging());
        p.handle_drag_event(&up());

        let key = UiEvent::KeyPress { key: Key::ArrowRight, modifiers: Default::default() };
        assert!(p.handle_control_point_event(1, &key).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 60.0, 100.0]);

        let shifted = UiEvent::KeyPress {
            key: Key::ArrowRight,
            modifiers: Modifiers { shift: true, ..Default::default() },
        };
        assert!(!p.handle_control_point_event(1, &shifted).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 60.0, 100.0]);
    }

    #[test]
    fn no_drag_without_listener_host() {
        let mut p = picker(RED_BLUE);
        p.control_point_pointer_down(0);
        assert!(!p.is_dragging());
        assert_eq!(p.bar_state(), GradientBarState::Idle);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn arrows_nudge_and_clamp() {
        let mut p = picker("linear-gradient(red 0%, green 50%, blue 100%)");
        assert!(p.control_point_key(1, Key::ArrowRight).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 60.0, 100.0]);
        p.control_point_key(1, Key::ArrowLeft);
        p.control_point_key(1, Key::ArrowLeft);
        assert_eq!(positions(&p), vec![0.0, 40.0, 100.0]);

        let mut p = picker("linear-gradient(red 4%, blue 100%)");
        p.control_point_key(0, Key::ArrowLeft);
        assert_eq!(positions(&p), vec![0.0, 100.0]);
    }

    #[test]
    fn nudge_past_neighbor_is_rejected() {
        let mut p = picker("linear-gradient(red 0%, green 50%, blue 55%, black 100%)");
        assert!(p.control_point_key(1, Key::ArrowRight).is_consumed());
        assert_eq!(positions(&p), vec![0.0, 50.0, 55.0, 100.0]);
    }

    #[test]
    fn escape_closes_popover_other_keys_pass() {
        let mut p = picker(RED_BLUE);
        assert!(!p.control_point_key(0, Key::Escape).is_consumed());
        p.control_point_click(0);
        assert!(p.control_point_key(0, Key::Escape).is_consumed());
        assert_eq!(p.open_point(), None);
        assert!(!p.control_point_key(0, Key::Enter).is_consumed());
    }

    // ── edits ─────────────────────────────────────────────────────────────

    #[test]
    fn removal_needs_more_than_two_points() {
        let mut p = picker(RED_BLUE);
        assert_eq!(p.remove_control_point(0), None);

        let mut p = picker("linear-gradient(red 0%, green 50%, blue 100%)");
        p.control_point_click(1);
        assert!(p.remove_control_point(1).is_some());
        assert_eq!(positions(&p), vec![0.0, 100.0]);
        assert_eq!(p.open_point(), None);

        let mut p = picker("linear-gradient(red 0%, green 50%, blue 100%)")
            .config(GradientPickerConfig::default().disable_remove(true));
        assert!(!p.can_remove());
        assert_eq!(p.remove_control_point(1), None);
    }

    #[test]
    fn recolor_point() {
        let mut p = picker(RED_BLUE);
        let css = p.control_point_color_change(1, "hsl(120, 100%, 50%)").unwrap();
        assert_eq!(css, "linear-gradient(90deg,rgb(255,0,0) 0%,rgb(0,255,0) 100%)");
    }

    #[test]
    fn kind_and_angle() {
        let mut p = picker(RED_BLUE);
        assert_eq!(p.set_kind(GradientKind::Radial).unwrap(), "radial-gradient(red 0%,blue 100%)");
        assert_eq!(p.kind(), GradientKind::Radial);
        assert_eq!(p.set_kind(GradientKind::Linear).unwrap(), "linear-gradient(90deg,red 0%,blue 100%)");
        assert_eq!(p.set_angle(45.0).unwrap(), "linear-gradient(45deg,red 0%,blue 100%)");
        assert_eq!(p.angle(), 45.0);
    }
}
