use std::future::Future;

use futures::future::BoxFuture;
use serde_json::Value;

/// Opaque host payload carried by every option.
pub type OptionValue = Value;

// ── OptionsSource ─────────────────────────────────────────────────────────

/// What a completer hands back for a query: a ready list or a pending fetch.
pub enum OptionsSource {
    List(Vec<OptionValue>),
    Pending(BoxFuture<'static, Vec<OptionValue>>),
}

impl OptionsSource {
    pub fn pending(fut: impl Future<Output = Vec<OptionValue>> + Send + 'static) -> Self {
        OptionsSource::Pending(Box::pin(fut))
    }

    pub async fn resolve(self) -> Vec<OptionValue> {
        match self {
            OptionsSource::List(list) => list,
            OptionsSource::Pending(fut) => fut.await,
        }
    }
}

// ── Labels and completions ────────────────────────────────────────────────

/// How an option is shown. Only plain text takes part in keyword matching.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionLabel {
    Text(String),
    /// Pre-rendered markup the host displays as-is.
    Markup(String),
}

impl OptionLabel {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionLabel::Text(s) => Some(s),
            OptionLabel::Markup(_) => None,
        }
    }
}

/// Placement of a chosen option.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Replace the trigger and typed query with the value.
    InsertAtCaret(String),
    /// Replace the whole rich-text value.
    Replace(String),
}

// ── Completer ─────────────────────────────────────────────────────────────

/// A host-registered source of completions.
///
/// Every method is called on keystroke-driven paths and must be pure and
/// fast. Completers are shared with background fetch tasks, hence
/// `Send + Sync`.
pub trait Completer: Send + Sync {
    /// Identifies the completer; two completers with the same name are the
    /// same session.
    fn name(&self) -> &str;

    fn trigger_prefix(&self) -> &str;

    fn options(&self, query: &str) -> OptionsSource;

    fn option_label(&self, option: &OptionValue) -> OptionLabel;

    fn option_keywords(&self, _option: &OptionValue) -> Vec<String> {
        Vec::new()
    }

    fn is_option_disabled(&self, _option: &OptionValue) -> bool {
        false
    }

    /// `None` means selecting an option only closes the menu.
    fn option_completion(&self, _option: &OptionValue, _query: &str) -> Option<Completion> {
        None
    }

    /// Filter on the text before the trigger and after the caret.
    fn allow_context(&self, _before: &str, _after: &str) -> bool {
        true
    }

    fn is_debounced(&self) -> bool {
        false
    }

    fn class_name(&self) -> Option<&str> {
        None
    }
}

// ── KeyedOption ───────────────────────────────────────────────────────────

/// A raw option after keying and labelling. Rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedOption {
    /// `"{completer}-{index}"`, stable only within one fetch.
    pub key: String,
    pub value: OptionValue,
    pub label: OptionLabel,
    pub keywords: Vec<String>,
    pub is_disabled: bool,
}

impl KeyedOption {
    pub fn from_raw(completer: &dyn Completer, index: usize, value: OptionValue) -> Self {
        Self {
            key: format!("{}-{}", completer.name(), index),
            label: completer.option_label(&value),
            keywords: completer.option_keywords(&value),
            is_disabled: completer.is_option_disabled(&value),
            value,
        }
    }

    /// Keywords followed by the label when it is plain text.
    pub fn search_terms(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str).chain(self.label.as_text())
    }
}
