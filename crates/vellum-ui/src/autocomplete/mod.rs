//! Trigger-driven autocomplete over a plain-text view of rich text.
//!
//! # Flow
//!
//! 1. The host calls [`Autocomplete::update_record`] whenever its value or
//!    caret changes. When the text before a collapsed caret changed, the
//!    [`TriggerDetector`] picks at most one completer and extracts the query.
//! 2. The [`OptionsLoader`] fetches options for that query. Static lists land
//!    immediately; async or debounced sources are collected later with
//!    [`Autocomplete::poll_options`] or [`Autocomplete::next_options`].
//! 3. Key presses go through [`Autocomplete::handle_key`]. Selecting an option
//!    splices the completion into the text and reports it via `on_change`, or
//!    replaces the whole value via `on_replace`.
//! 4. [`Autocomplete::tick`] releases the debounced screen-reader announcement.

mod announce;
mod completer;
mod options;
mod record;
mod selection;
mod trigger;

pub use announce::{Announcement, Announcer, announcement_for};
pub use completer::{
    Completer, Completion, KeyedOption, OptionLabel, OptionValue, OptionsSource,
};
pub use options::{OptionsBatch, OptionsLoader, filter_options, key_options};
pub use record::RichText;
pub use selection::{AutocompleteSession, KeyAction, SelectionController, SessionChange};
pub use trigger::{TriggerDetector, TriggerMatch, deburr};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use log::debug;
use vellum_engine::input::Key;

use crate::event::EventResult;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

// ── AutocompleteConfig ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutocompleteConfig {
    /// Options kept after filtering.
    pub max_results: usize,
    /// Longest query, in chars, between trigger and caret.
    pub max_query_len: usize,
    /// Word limit for continuing a mismatched query while backspacing.
    pub backspace_word_limit: usize,
    /// Quiet period before a debounced completer is asked for options.
    pub debounce: Duration,
    /// Quiet period before the result count is announced.
    pub announce_delay: Duration,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_query_len: 50,
            backspace_word_limit: 3,
            debounce: Duration::from_millis(250),
            announce_delay: Duration::from_millis(500),
        }
    }
}

impl AutocompleteConfig {
    pub fn max_results(mut self, v: usize) -> Self { self.max_results = v; self }
    pub fn max_query_len(mut self, v: usize) -> Self { self.max_query_len = v; self }
    pub fn backspace_word_limit(mut self, v: usize) -> Self { self.backspace_word_limit = v; self }
    pub fn debounce(mut self, v: Duration) -> Self { self.debounce = v; self }
    pub fn announce_delay(mut self, v: Duration) -> Self { self.announce_delay = v; self }

    fn detector(&self) -> TriggerDetector {
        TriggerDetector {
            max_query_len: self.max_query_len,
            backspace_word_limit: self.backspace_word_limit,
        }
    }
}

// ── Autocomplete ──────────────────────────────────────────────────────────

/// One autocomplete instance bound to one rich-text field.
///
/// # Example
/// ```rust,ignore
/// let mut ac = Autocomplete::new(vec![Arc::new(UsersCompleter)])
///     .on_change(|record| editor.set_value(record))
///     .on_announce(|a| speak(&a.message));
/// ac.update_record(RichText::at_end("Hello @wor"));
/// ```
pub struct Autocomplete {
    id: u64,
    config: AutocompleteConfig,
    completers: Vec<Arc<dyn Completer>>,
    detector: TriggerDetector,
    loader: OptionsLoader,
    selection: SelectionController,
    record: RichText,
    /// Deburred text before the caret at the last detection run.
    last_text: Option<String>,
    on_change: Option<Box<dyn FnMut(RichText)>>,
    on_replace: Option<Box<dyn FnMut(String)>>,
    on_announce: Option<Box<dyn FnMut(&Announcement)>>,
}

impl Autocomplete {
    pub fn new(completers: Vec<Arc<dyn Completer>>) -> Self {
        let config = AutocompleteConfig::default();
        Self {
            id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed),
            completers,
            detector: config.detector(),
            loader: OptionsLoader::new(config.max_results, config.debounce),
            selection: SelectionController::new(config.announce_delay),
            config,
            record: RichText::default(),
            last_text: None,
            on_change: None,
            on_replace: None,
            on_announce: None,
        }
    }

    pub fn config(mut self, config: AutocompleteConfig) -> Self {
        self.detector = config.detector();
        self.loader = OptionsLoader::new(config.max_results, config.debounce);
        self.selection = SelectionController::new(config.announce_delay);
        self.config = config;
        self
    }

    /// Called with the new value after an insert-at-caret completion.
    pub fn on_change(mut self, f: impl FnMut(RichText) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Called with the replacement after a `Replace` completion.
    pub fn on_replace(mut self, f: impl FnMut(String) + 'static) -> Self {
        self.on_replace = Some(Box::new(f));
        self
    }

    pub fn on_announce(mut self, f: impl FnMut(&Announcement) + 'static) -> Self {
        self.on_announce = Some(Box::new(f));
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn session(&self) -> &AutocompleteSession {
        self.selection.session()
    }

    #[inline]
    pub fn record(&self) -> &RichText {
        &self.record
    }

    #[inline]
    pub fn settings(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// The options menu is showing.
    pub fn is_expanded(&self) -> bool {
        self.session().is_open()
    }

    pub fn list_box_id(&self) -> String {
        format!("components-autocomplete-listbox-{}", self.id)
    }

    /// Element id of the selected option, for `aria-activedescendant`.
    pub fn active_id(&self) -> Option<String> {
        if !self.is_expanded() {
            return None;
        }
        let option = self.session().selected_option()?;
        Some(format!("components-autocomplete-item-{}-{}", self.id, option.key))
    }

    /// Class list for the results popover, extended by the active completer's
    /// `class_name`. `None` while the menu is closed.
    pub fn results_class_name(&self) -> Option<String> {
        if !self.is_expanded() {
            return None;
        }
        let base = "components-autocomplete__results";
        let extra = self.session().active.as_ref().and_then(|c| c.class_name().map(str::to_string));
        Some(match extra {
            Some(extra) => format!("{base} {extra}"),
            None => base.to_string(),
        })
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Feeds the host's current value and caret.
    ///
    /// Detection only re-runs when the text before a collapsed caret actually
    /// changed.
    pub fn update_record(&mut self, record: RichText) {
        let text = record.is_collapsed().then(|| deburr(&record.text_before_caret()));
        let text_after = record.text_after_caret();
        self.record = record;

        if text == self.last_text {
            return;
        }
        self.last_text = text.clone();

        let Some(text) = text.filter(|t| !t.is_empty()) else {
            if self.session().active.is_some() {
                self.reset();
            }
            return;
        };

        let session = self.session();
        let found = self.detector.detect(
            &text,
            &text_after,
            &self.completers,
            session.filtered_options.is_empty(),
            session.backspacing,
        );

        match found {
            Some(TriggerMatch { completer, query }) => self.activate(completer, query),
            None => {
                if self.session().active.is_some() {
                    self.reset();
                }
            }
        }
    }

    fn activate(&mut self, completer: Arc<dyn Completer>, query: String) {
        let query_changed = self.session().filter_value != query;
        let change = self.selection.activate(Arc::clone(&completer), query.clone());
        if change == SessionChange::New {
            debug!("autocomplete: activated {:?} with query {query:?}", completer.name());
        }
        if change == SessionChange::New || query_changed {
            if let Some(batch) = self.loader.load(completer, &query) {
                self.apply(batch, Instant::now());
            }
        }
    }

    fn apply(&mut self, batch: OptionsBatch, now: Instant) {
        if self.session().active_name() != Some(batch.completer.as_str()) {
            return;
        }
        self.selection.on_change_options(batch.options, now);
    }

    /// Applies an option batch that arrived since the last call. Returns
    /// whether the list changed.
    pub fn poll_options(&mut self) -> bool {
        match self.loader.try_next() {
            Some(batch) => {
                self.apply(batch, Instant::now());
                true
            }
            None => false,
        }
    }

    /// Waits for the in-flight fetch and applies it. Returns `false` when
    /// nothing was in flight.
    pub async fn next_options(&mut self) -> bool {
        match self.loader.next().await {
            Some(batch) => {
                self.apply(batch, Instant::now());
                true
            }
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: Key) -> EventResult {
        let action = self.selection.handle_key(key);
        match action {
            KeyAction::Select(index) => self.select(index),
            KeyAction::Dismissed | KeyAction::Reset => self.loader.cancel(),
            KeyAction::Navigated | KeyAction::None => {}
        }
        action.event_result()
    }

    /// Selects the option at `index`, e.g. on click.
    pub fn select(&mut self, index: usize) {
        let session = self.selection.session();
        let (Some(completer), Some(option)) =
            (session.active.clone(), session.filtered_options.get(index).cloned())
        else {
            return;
        };
        if option.is_disabled {
            return;
        }

        match completer.option_completion(&option.value, &session.filter_value) {
            Some(Completion::InsertAtCaret(value)) => {
                let end = self.record.start;
                let typed = completer.trigger_prefix().chars().count()
                    + session.filter_value.chars().count();
                let next = self.record.insert(&value, end.saturating_sub(typed), end);

                // the host will echo this value back; it must not re-trigger
                self.last_text = Some(deburr(&next.text_before_caret()));
                self.record = next.clone();
                if let Some(f) = &mut self.on_change {
                    f(next);
                }
            }
            Some(Completion::Replace(value)) => {
                if let Some(f) = &mut self.on_replace {
                    f(value);
                }
            }
            None => {}
        }

        self.reset();
    }

    /// Abandons the session and any in-flight fetch.
    pub fn reset(&mut self) {
        debug!("autocomplete: reset");
        self.loader.cancel();
        self.selection.reset();
    }

    /// Applies debounced options parked for lack of a runtime, then releases
    /// a due announcement to `on_announce` and returns it.
    pub fn tick(&mut self, now: Instant) -> Option<Announcement> {
        if let Some(batch) = self.loader.poll_deferred(now) {
            self.apply(batch, now);
        }
        let announcement = self.selection.poll_announcement(now)?;
        if let Some(f) = &mut self.on_announce {
            f(&announcement);
        }
        Some(announcement)
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.loader.cancel();
    }
}
