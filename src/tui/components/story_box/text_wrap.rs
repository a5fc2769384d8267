//! Pure text wrapping helpers and dimensional constants for the StoryBox.

use unicode_width::UnicodeWidthStr;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// The box never shrinks below this many content lines
pub(super) const MIN_VISIBLE_LINES: u16 = 3;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 8;
/// Offset from area edge to content (border + padding)
pub(super) const CONTENT_OFFSET_X: u16 = 2;
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

/// Build textwrap options configured for the story box inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Calculate the inner content width after subtracting border/padding overhead.
/// Returns 0 if the area is too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped display lines for `text`, one entry per screen row.
///
/// A trailing newline yields a trailing empty line so the cursor has
/// somewhere to sit.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    // textwrap doesn't always produce an empty trailing line for a trailing newline
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Display column of the end of `text` within its last wrapped row.
///
/// textwrap trims trailing spaces, so they are added back on top of the
/// last segment's width.
pub(super) fn end_column(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let last_newline = text.rfind('\n').map(|pos| pos + 1).unwrap_or(0);
    let logical_line = &text[last_newline..];

    let segments = textwrap::wrap(logical_line, wrap_options(width));
    let last_segment = segments.last().map(|seg| seg.width()).unwrap_or(0);
    let trailing_spaces = logical_line.len() - logical_line.trim_end_matches(' ').len();

    ((last_segment + trailing_spaces) as u16).min(width)
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
