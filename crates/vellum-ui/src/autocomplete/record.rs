/// Plain-text view of the host's rich-text value.
///
/// `start` and `end` are char offsets into `text`; equal offsets mean a
/// collapsed caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl RichText {
    /// Text with a collapsed caret at `caret`.
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        Self { text: text.into(), start: caret, end: caret }
    }

    /// Text with the caret at the very end.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self::new(text, caret)
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn text_before_caret(&self) -> String {
        self.text.chars().take(self.start).collect()
    }

    pub fn text_after_caret(&self) -> String {
        self.text.chars().skip(self.end).collect()
    }

    /// Replaces chars `start..end` with `insertion`, leaving the caret after it.
    pub fn insert(&self, insertion: &str, start: usize, end: usize) -> RichText {
        let len = self.char_len();
        let end = end.min(len);
        let start = start.min(end);

        let mut text: String = self.text.chars().take(start).collect();
        text.push_str(insertion);
        text.extend(self.text.chars().skip(end));

        RichText::new(text, start + insertion.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_splits_text_by_chars() {
        let r = RichText::new("héllo wörld", 6);
        assert_eq!(r.text_before_caret(), "héllo ");
        assert_eq!(r.text_after_caret(), "wörld");
    }

    #[test]
    fn insert_replaces_range_and_moves_caret() {
        let r = RichText::at_end("Hi @al");
        let out = r.insert("@alice ", 3, 6);
        assert_eq!(out.text, "Hi @alice ");
        assert_eq!((out.start, out.end), (10, 10));
    }

    #[test]
    fn insert_clamps_out_of_range_offsets() {
        let r = RichText::at_end("abc");
        let out = r.insert("Z", 10, 20);
        assert_eq!(out.text, "abcZ");
        assert_eq!(out.start, 4);
    }

    #[test]
    fn selection_is_not_collapsed() {
        let r = RichText { text: "abc".into(), start: 0, end: 2 };
        assert!(!r.is_collapsed());
    }
}
