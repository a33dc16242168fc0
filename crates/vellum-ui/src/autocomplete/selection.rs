use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use vellum_engine::input::Key;

use super::announce::{Announcement, Announcer, announcement_for};
use super::completer::{Completer, KeyedOption};
use crate::event::EventResult;

// ── AutocompleteSession ───────────────────────────────────────────────────

/// Runtime state of one autocomplete instance.
///
/// Invariants:
/// - `selected_index < filtered_options.len()` whenever the list is non-empty.
/// - `active == None` implies an empty option list. `filter_value` is empty
///   too, except right after Escape, which drops only the completer.
#[derive(Default)]
pub struct AutocompleteSession {
    pub active: Option<Arc<dyn Completer>>,
    pub filter_value: String,
    pub filtered_options: Vec<KeyedOption>,
    pub selected_index: usize,
    pub backspacing: bool,
}

impl AutocompleteSession {
    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref().map(|c| c.name())
    }

    pub fn selected_option(&self) -> Option<&KeyedOption> {
        self.filtered_options.get(self.selected_index)
    }

    /// The menu is open and keyboard navigation applies.
    pub fn is_open(&self) -> bool {
        self.active.is_some() && !self.filtered_options.is_empty()
    }
}

impl fmt::Debug for AutocompleteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteSession")
            .field("active", &self.active_name())
            .field("filter_value", &self.filter_value)
            .field("filtered_options", &self.filtered_options.len())
            .field("selected_index", &self.selected_index)
            .field("backspacing", &self.backspacing)
            .finish()
    }
}

// ── KeyAction ─────────────────────────────────────────────────────────────

/// What a key press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Selection moved.
    Navigated,
    /// Escape: the completer was dropped.
    Dismissed,
    /// Enter: the option at this index should be selected.
    Select(usize),
    /// Left/Right: the session was abandoned; the caret must still move.
    Reset,
    None,
}

impl KeyAction {
    pub fn event_result(self) -> EventResult {
        match self {
            KeyAction::Navigated | KeyAction::Dismissed | KeyAction::Select(_) => {
                EventResult::Consumed
            }
            KeyAction::Reset | KeyAction::None => EventResult::Ignored,
        }
    }
}

/// Whether a detected completer continues the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    Same,
    New,
}

// ── SelectionController ───────────────────────────────────────────────────

pub struct SelectionController {
    session: AutocompleteSession,
    announcer: Announcer,
}

impl SelectionController {
    pub fn new(announce_delay: Duration) -> Self {
        Self { session: AutocompleteSession::default(), announcer: Announcer::new(announce_delay) }
    }

    #[inline]
    pub fn session(&self) -> &AutocompleteSession {
        &self.session
    }

    /// Applies a key press. Every key updates `backspacing`; navigation only
    /// happens while the menu is open.
    pub fn handle_key(&mut self, key: Key) -> KeyAction {
        self.session.backspacing = key == Key::Backspace;

        if !self.session.is_open() {
            return KeyAction::None;
        }

        let n = self.session.filtered_options.len();
        let i = self.session.selected_index;
        match key {
            Key::ArrowUp => {
                self.session.selected_index = (i + n - 1) % n;
                KeyAction::Navigated
            }
            Key::ArrowDown => {
                self.session.selected_index = (i + 1) % n;
                KeyAction::Navigated
            }
            Key::Escape => {
                self.dismiss();
                KeyAction::Dismissed
            }
            Key::Enter => KeyAction::Select(i),
            key if key.is_horizontal_arrow() => {
                self.reset();
                KeyAction::Reset
            }
            _ => KeyAction::None,
        }
    }

    /// Installs `completer` with `query` as the filter value.
    ///
    /// A completer with the same name as the active one continues the session
    /// and keeps its options; anything else starts fresh.
    pub fn activate(&mut self, completer: Arc<dyn Completer>, query: String) -> SessionChange {
        let change = match self.session.active_name() {
            Some(name) if name == completer.name() => SessionChange::Same,
            _ => SessionChange::New,
        };
        if change == SessionChange::New {
            self.session.filtered_options.clear();
            self.session.selected_index = 0;
        }
        self.session.active = Some(completer);
        self.session.filter_value = query;
        change
    }

    /// Replaces the option list and schedules the result-count announcement.
    pub fn on_change_options(&mut self, options: Vec<KeyedOption>, now: Instant) {
        if options.len() != self.session.filtered_options.len() {
            self.session.selected_index = 0;
        }
        self.session.filtered_options = options;
        self.announcer.schedule(
            now,
            announcement_for(self.session.filtered_options.len(), &self.session.filter_value),
        );
    }

    /// Drops the active completer, keeping the typed filter text.
    pub fn dismiss(&mut self) {
        self.session.active = None;
        self.session.filtered_options.clear();
        self.session.selected_index = 0;
    }

    pub fn reset(&mut self) {
        self.dismiss();
        self.session.filter_value.clear();
        self.announcer.cancel();
    }

    pub fn poll_announcement(&mut self, now: Instant) -> Option<Announcement> {
        self.announcer.poll(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::completer::{OptionLabel, OptionValue, OptionsSource};
    use proptest::prelude::*;
    use serde_json::json;

    struct Named(&'static str);

    impl Completer for Named {
        fn name(&self) -> &str { self.0 }
        fn trigger_prefix(&self) -> &str { "@" }
        fn options(&self, _query: &str) -> OptionsSource { OptionsSource::List(Vec::new()) }
        fn option_label(&self, option: &OptionValue) -> OptionLabel {
            OptionLabel::Text(option.to_string())
        }
    }

    fn option(i: usize) -> KeyedOption {
        KeyedOption {
            key: format!("users-{i}"),
            value: json!(i),
            label: OptionLabel::Text(i.to_string()),
            keywords: Vec::new(),
            is_disabled: false,
        }
    }

    fn options(n: usize) -> Vec<KeyedOption> {
        (0..n).map(option).collect()
    }

    fn open(n: usize) -> SelectionController {
        let mut c = SelectionController::new(Duration::from_millis(500));
        c.activate(Arc::new(Named("users")), "a".into());
        c.on_change_options(options(n), Instant::now());
        c
    }

    // ── navigation ────────────────────────────────────────────────────────

    #[test]
    fn arrow_down_wraps_to_first() {
        let mut c = open(3);
        c.handle_key(Key::ArrowDown);
        c.handle_key(Key::ArrowDown);
        assert_eq!(c.session().selected_index, 2);
        assert_eq!(c.handle_key(Key::ArrowDown), KeyAction::Navigated);
        assert_eq!(c.session().selected_index, 0);
    }

    #[test]
    fn arrow_up_wraps_to_last() {
        let mut c = open(3);
        c.handle_key(Key::ArrowUp);
        assert_eq!(c.session().selected_index, 2);
    }

    #[test]
    fn keys_ignored_without_options() {
        let mut c = open(0);
        assert_eq!(c.handle_key(Key::ArrowDown), KeyAction::None);
        assert_eq!(c.handle_key(Key::Enter).event_result(), EventResult::Ignored);
    }

    #[test]
    fn enter_selects_current() {
        let mut c = open(3);
        c.handle_key(Key::ArrowDown);
        let action = c.handle_key(Key::Enter);
        assert_eq!(action, KeyAction::Select(1));
        assert!(action.event_result().is_consumed());
    }

    #[test]
    fn escape_keeps_filter_text() {
        let mut c = open(3);
        assert_eq!(c.handle_key(Key::Escape), KeyAction::Dismissed);
        assert!(c.session().active.is_none());
        assert!(c.session().filtered_options.is_empty());
        assert_eq!(c.session().filter_value, "a");
    }

    #[test]
    fn horizontal_arrows_reset_without_consuming() {
        let mut c = open(3);
        let action = c.handle_key(Key::ArrowLeft);
        assert_eq!(action, KeyAction::Reset);
        assert_eq!(action.event_result(), EventResult::Ignored);
        assert!(c.session().active.is_none());
        assert!(c.session().filter_value.is_empty());
    }

    #[test]
    fn every_key_updates_backspacing() {
        let mut c = open(0);
        c.handle_key(Key::Backspace);
        assert!(c.session().backspacing);
        c.handle_key(Key::Char('x'));
        assert!(!c.session().backspacing);
    }

    // ── option updates ────────────────────────────────────────────────────

    #[test]
    fn same_length_keeps_index() {
        let mut c = open(3);
        c.handle_key(Key::ArrowDown);
        c.on_change_options(options(3), Instant::now());
        assert_eq!(c.session().selected_index, 1);
        c.on_change_options(options(2), Instant::now());
        assert_eq!(c.session().selected_index, 0);
    }

    #[test]
    fn new_completer_starts_new_session() {
        let mut c = open(3);
        assert_eq!(c.activate(Arc::new(Named("users")), "ab".into()), SessionChange::Same);
        assert_eq!(c.session().filtered_options.len(), 3);
        assert_eq!(c.activate(Arc::new(Named("tags")), "".into()), SessionChange::New);
        assert!(c.session().filtered_options.is_empty());
    }

    #[test]
    fn announcement_is_debounced() {
        let t0 = Instant::now();
        let mut c = SelectionController::new(Duration::from_millis(500));
        c.activate(Arc::new(Named("users")), String::new());
        c.on_change_options(options(2), t0);
        assert!(c.poll_announcement(t0 + Duration::from_millis(499)).is_none());
        let a = c.poll_announcement(t0 + Duration::from_millis(500)).unwrap();
        assert!(a.message.starts_with("Initial 2 results loaded."));
    }

    // ── invariant ─────────────────────────────────────────────────────────

    #[derive(Debug, Clone)]
    enum Step {
        Options(usize),
        Key(Key),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (0usize..6).prop_map(Step::Options),
            prop::sample::select(vec![Key::ArrowUp, Key::ArrowDown, Key::Backspace, Key::Char('a')])
                .prop_map(Step::Key),
        ]
    }

    proptest! {
        #[test]
        fn selected_index_stays_in_bounds(steps in prop::collection::vec(step(), 1..40)) {
            let mut c = open(3);
            for step in steps {
                let before = c.session().filtered_options.len();
                match step {
                    Step::Options(n) => c.on_change_options(options(n), Instant::now()),
                    Step::Key(k) => { c.handle_key(k); }
                }
                let s = c.session();
                let n = s.filtered_options.len();
                if n == 0 || n != before {
                    prop_assert_eq!(s.selected_index, 0);
                } else {
                    prop_assert!(s.selected_index < n);
                }
            }
        }
    }
}
