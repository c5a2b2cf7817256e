//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the frame size and answers the few layout questions
//! the page asks: whether the sidebar fits beside the posts, and how wide
//! each column is.

use unicode_width::UnicodeWidthStr;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Small terminal (< 80 columns); below this the sidebar stacks under the posts
    pub const SM_WIDTH: u16 = 80;
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Whether the sidebar goes below the posts instead of beside them.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Widths of the post column and the sidebar column.
    ///
    /// Posts take two thirds, the sidebar the rest.
    pub fn two_column_widths(&self) -> (u16, u16) {
        let posts = ((self.width as u32 * 2) / 3) as u16;
        (posts, self.width - posts)
    }
}

/// Number of rows `text` occupies when word-wrapped to `width` columns.
///
/// Mirrors ratatui's word wrapping closely enough to size cards: words are
/// placed greedily, words longer than the line are split, and every source
/// line (including an empty one) takes at least one row.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return text.lines().count().max(1) as u16;
    }

    let mut rows = 0usize;
    for line in text.split('\n') {
        let mut line_rows = 1usize;
        let mut current = 0usize;
        for word in line.split_whitespace() {
            let word_width = word.width();
            let needed = if current == 0 { word_width } else { current + 1 + word_width };
            if needed <= width {
                current = needed;
            } else if word_width <= width {
                line_rows += 1;
                current = word_width;
            } else {
                // Long words are hard-split across rows
                if current > 0 {
                    line_rows += 1;
                }
                let chunks = word_width.div_ceil(width);
                line_rows += chunks - 1;
                current = word_width - (chunks - 1) * width;
            }
        }
        rows += line_rows;
    }
    rows.min(u16::MAX as usize) as u16
}
