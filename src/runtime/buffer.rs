//! In-memory text buffer with point, mark and last-search state
//!
//! All public positions are 1-based and count characters, so the valid range
//! for point and mark is `1..=len + 1`. Internal span arithmetic uses 0-based,
//! half-open `[start, end)` character ranges.

use std::fmt;

/// Span recorded by the most recent successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// Matched text
    pub text: String,
    /// 1-based start of the match
    pub start: usize,
    /// 1-based end of the match, exclusive
    pub end: usize,
}

/// Mutable text storage edited by builtins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    text: String,
    char_len: usize,
    point: usize,
    mark: usize,
    last_search: Option<SearchMatch>,
}

impl Buffer {
    /// Creates a buffer holding `text` with point and mark at the beginning
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Buffer {
            text,
            char_len,
            point: 1,
            mark: 1,
            last_search: None,
        }
    }

    /// Buffer contents
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the buffer, returning its contents
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// Is the buffer empty?
    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    /// Current point (1-based)
    pub fn point(&self) -> usize {
        self.point
    }

    /// Current mark (1-based)
    pub fn mark(&self) -> usize {
        self.mark
    }

    /// Largest valid position, one past the last character
    pub fn max_position(&self) -> usize {
        self.char_len + 1
    }

    /// Moves point, clamping into `[1, len + 1]`
    pub fn set_point(&mut self, pos: i64) {
        self.point = self.clamp_position(pos);
    }

    /// Moves mark, clamping into `[1, len + 1]`
    pub fn set_mark(&mut self, pos: i64) {
        self.mark = self.clamp_position(pos);
    }

    /// Clamps an arbitrary 1-based position into the valid range
    pub fn clamp_position(&self, pos: i64) -> usize {
        pos.clamp(1, self.max_position() as i64) as usize
    }

    /// Region bounds as 1-based `(min(point, mark), max(point, mark))`
    pub fn region(&self) -> (usize, usize) {
        (self.point.min(self.mark), self.point.max(self.mark))
    }

    /// Most recent successful search
    pub fn last_search(&self) -> Option<&SearchMatch> {
        self.last_search.as_ref()
    }

    /// Records a successful search span
    pub fn record_search(&mut self, text: impl Into<String>, start: usize, end: usize) {
        self.last_search = Some(SearchMatch {
            text: text.into(),
            start,
            end,
        });
    }

    /// Inserts `text` at point and advances point past it
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.point.saturating_sub(1).min(self.char_len);
        self.splice(at, at, text);
        self.point = at + text.chars().count() + 1;
    }

    /// Byte offset of a 0-based character index, clamped to the end of the text
    pub fn byte_offset(&self, index: usize) -> usize {
        byte_offset(&self.text, index)
    }

    /// Text of the 0-based half-open character span, clamped to the buffer
    pub fn substring(&self, start: usize, end: usize) -> &str {
        let end = end.min(self.char_len);
        let start = start.min(end);
        &self.text[self.byte_offset(start)..self.byte_offset(end)]
    }

    /// Replaces the 0-based half-open character span `[start, end)` with
    /// `replacement`. Both ends are clamped. Point is left to the caller, but
    /// point and mark are re-clamped so they stay inside the new text.
    pub fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        let end = end.min(self.char_len);
        let start = start.min(end);
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));

        tracing::trace!(start, end, inserted = replacement.len(), "buffer splice");

        self.text.replace_range(from..to, replacement);
        self.char_len = self.char_len - (end - start) + replacement.chars().count();
        self.point = self.point.min(self.max_position());
        self.mark = self.mark.min(self.max_position());
    }

    /// Removes the 0-based half-open character span `[start, end)`
    pub fn delete(&mut self, start: usize, end: usize) {
        self.splice(start, end, "");
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::new(String::new())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Byte offset of the 0-based character index `index` in `s`, or `s.len()`
pub fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}

/// Character index of the byte offset `offset` in `s`
pub fn char_index(s: &str, offset: usize) -> usize {
    s[..offset.min(s.len())].chars().count()
}
