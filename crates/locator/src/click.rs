//! Click intervals.

use graphql_syntax::{token_range_at, LineIndex};
use graphql_types::{OffsetRange, Position, Range};

/// The half-open byte interval of whatever was clicked.
///
/// This is normally the boundaries of a single token rather than a caret
/// position, so the lookup is interval-in-interval. The interval is not tied
/// to any particular text and may be stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClickPosition {
    range: OffsetRange,
}

impl ClickPosition {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            range: OffsetRange::new(start, end),
        }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.range.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.range.end
    }

    #[must_use]
    pub const fn range(&self) -> OffsetRange {
        self.range
    }

    /// The boundaries of the token under a byte offset of `text`.
    #[must_use]
    pub fn from_token_at(text: &str, offset: usize) -> Self {
        Self::from(token_range_at(text, offset))
    }

    /// The boundaries of the token under an editor position.
    ///
    /// Returns `None` if the position does not exist in `text`.
    #[must_use]
    pub fn from_editor_position(text: &str, position: Position) -> Option<Self> {
        let offset = LineIndex::new(text).offset(position)?;
        Some(Self::from_token_at(text, offset))
    }

    /// An explicit editor selection, converted to byte offsets as-is.
    ///
    /// Returns `None` if either end does not exist in `text`.
    #[must_use]
    pub fn from_editor_range(text: &str, range: Range) -> Option<Self> {
        let index = LineIndex::new(text);
        Some(Self::new(index.offset(range.start)?, index.offset(range.end)?))
    }
}

impl From<OffsetRange> for ClickPosition {
    fn from(range: OffsetRange) -> Self {
        Self { range }
    }
}

impl std::fmt::Display for ClickPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.range)
    }
}
