//! Hard wrapping of display text to a fixed column count.
//!
//! Widths are counted in chars. A line is cut at exactly `width` chars; if
//! the char after the cut is a space the space is dropped, otherwise the
//! line is marked as continuing mid-word. The marker itself is drawn by the
//! renderer in the padding gutter, so `text` never exceeds `width`.

/// How a wrapped line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
    /// Cut at a space, which was dropped.
    Space,
    /// Cut inside a word; the next line continues it.
    Hyphen,
    /// Last line of the input.
    End,
}

/// One output line of [`wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub text: String,
    pub brk: Break,
}

impl WrappedLine {
    fn new(text: &str, brk: Break) -> Self {
        Self {
            text: text.to_string(),
            brk,
        }
    }

    pub fn is_continued(&self) -> bool {
        self.brk == Break::Hyphen
    }
}

/// Wrap `text` into lines of at most `width` chars.
///
/// `width` is clamped to 1. Text that already fits comes back as a single
/// line with no marker.
pub fn wrap(text: &str, width: usize) -> Vec<WrappedLine> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut rest = text;

    // `nth(width)` is the first char past the cut; `None` means the rest fits.
    while let Some((cut, _)) = rest.char_indices().nth(width) {
        let (head, tail) = rest.split_at(cut);
        match tail.strip_prefix(' ') {
            Some(after) => {
                lines.push(WrappedLine::new(head, Break::Space));
                rest = after;
            }
            None => {
                lines.push(WrappedLine::new(head, Break::Hyphen));
                rest = tail;
            }
        }
    }
    lines.push(WrappedLine::new(rest, Break::End));

    lines
}

/// Wrap each paragraph of `text` separately. Embedded line breaks start a new
/// paragraph instead of ending up inside a rendered line.
pub fn wrap_paragraphs(text: &str, width: usize) -> Vec<WrappedLine> {
    text.lines().flat_map(|paragraph| wrap(paragraph, width)).collect()
}
