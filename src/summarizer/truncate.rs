//! Input truncation
//!
//! Long inputs are cut at a character limit. The cut usually lands inside a
//! word, so everything after the last space of the kept prefix is dropped
//! before the ellipsis marker is appended.

use std::borrow::Cow;

/// Cut `text` to at most `max_len` characters plus `ellipsis`.
///
/// Returns the input unchanged (borrowed) when it is within the limit. If the
/// kept prefix contains no space at all, only the ellipsis remains.
pub fn truncate_input<'a>(text: &'a str, max_len: usize, ellipsis: &str) -> Cow<'a, str> {
    let Some((cut, _)) = text.char_indices().nth(max_len) else {
        return Cow::Borrowed(text);
    };

    let head = &text[..cut];
    let kept = head.rfind(' ').map_or("", |pos| &head[..pos]);

    Cow::Owned(format!("{kept}{ellipsis}"))
}
