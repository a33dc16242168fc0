use std::sync::Arc;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::completer::Completer;

/// Strips diacritics one char at a time.
///
/// Each char is decomposed and its combining marks dropped; a char that
/// decomposes into more than one base char is kept as-is. Char count is
/// preserved, so offsets into the deburred text stay valid in the original.
pub fn deburr(text: &str) -> String {
    text.chars().map(deburr_char).collect()
}

fn deburr_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let s = c.to_string();
    let mut bases = s.nfd().filter(|d| !is_combining_mark(*d));
    match (bases.next(), bases.next()) {
        (Some(base), None) => base,
        _ => c,
    }
}

/// A completer chosen for the text around the caret.
#[derive(Clone)]
pub struct TriggerMatch {
    pub completer: Arc<dyn Completer>,
    /// Text typed after the trigger prefix, up to the caret.
    pub query: String,
}

impl std::fmt::Debug for TriggerMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerMatch")
            .field("completer", &self.completer.name())
            .field("query", &self.query)
            .finish()
    }
}

/// Scans the text before the caret for the right-most trigger prefix.
#[derive(Debug, Clone, Copy)]
pub struct TriggerDetector {
    /// Longest query region, in chars, still considered a match.
    pub max_query_len: usize,
    /// While backspacing through a mismatch, keep matching up to this many words.
    pub backspace_word_limit: usize,
}

impl Default for TriggerDetector {
    fn default() -> Self {
        Self { max_query_len: 50, backspace_word_limit: 3 }
    }
}

impl TriggerDetector {
    /// Returns the first completer, in registration order, whose trigger
    /// accepts the current text.
    ///
    /// `text_before` is the deburred text preceding the caret; `mismatch` is
    /// true when the current option list is empty.
    pub fn detect(
        &self,
        text_before: &str,
        text_after: &str,
        completers: &[Arc<dyn Completer>],
        mismatch: bool,
        backspacing: bool,
    ) -> Option<TriggerMatch> {
        let completer = completers
            .iter()
            .find(|c| self.accepts(c.as_ref(), text_before, text_after, mismatch, backspacing))?;

        let query = extract_query(text_before, completer.trigger_prefix())?;
        Some(TriggerMatch { completer: Arc::clone(completer), query })
    }

    fn accepts(
        &self,
        completer: &dyn Completer,
        text_before: &str,
        text_after: &str,
        mismatch: bool,
        backspacing: bool,
    ) -> bool {
        let prefix = completer.trigger_prefix();
        if prefix.is_empty() {
            return false;
        }
        let Some(index) = text_before.rfind(prefix) else {
            return false;
        };
        let region = &text_before[index + prefix.len()..];

        if region.chars().count() > self.max_query_len {
            return false;
        }

        if mismatch {
            let words = region.split(char::is_whitespace).count();
            let matching_while_backspacing = backspacing && words <= self.backspace_word_limit;
            if !(matching_while_backspacing || words == 1) {
                return false;
            }
        }

        if !completer.allow_context(&text_before[..index], text_after) {
            return false;
        }

        if region.starts_with(char::is_whitespace) || has_trailing_whitespace_run(region) {
            return false;
        }

        region.chars().all(is_basic_printable)
    }
}

fn has_trailing_whitespace_run(s: &str) -> bool {
    s.chars().rev().take_while(|c| c.is_whitespace()).nth(1).is_some()
}

fn is_basic_printable(c: char) -> bool {
    (c as u32) <= 0xFFFF && (!c.is_control() || c.is_whitespace())
}

/// Text after the last occurrence of `prefix`, matched by an anchored regex.
fn extract_query(text: &str, prefix: &str) -> Option<String> {
    let start = text.rfind(prefix)?;
    let re = Regex::new(&format!(r"(?s)^{}(.*)$", regex::escape(prefix))).ok()?;
    re.captures(&text[start..])
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
