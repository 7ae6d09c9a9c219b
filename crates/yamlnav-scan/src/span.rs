//! Byte spans into a scanned document.

/// A half-open byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the start (inclusive)
    pub start: u32,
    /// Byte offset of the end (exclusive)
    pub end: u32,
}

impl Span {
    /// Create a new span from start and end byte offsets.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: u32) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Length of this span in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether this span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `pos` falls on this span, end-inclusive: a caret sitting
    /// just past the last byte of a key still counts as on it.
    #[inline]
    pub fn contains(&self, pos: u32) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Whether two spans share at least one position. Touching edges
    /// count, so a zero-width caret at either boundary of a span
    /// intersects it.
    #[inline]
    pub fn intersects(&self, other: Span) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Get the source text for this span.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start as usize..self.end as usize]
    }
}

impl From<std::ops::Range<u32>> for Span {
    fn from(range: std::ops::Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersects_counts_touching_edges() {
        let key = Span::new(5, 8);
        assert!(Span::empty(5).intersects(key));
        assert!(Span::empty(8).intersects(key));
        assert!(Span::new(0, 5).intersects(key));
        assert!(!Span::empty(4).intersects(key));
        assert!(!Span::new(9, 12).intersects(key));
    }

    #[test]
    fn contains_is_end_inclusive() {
        let key = Span::new(5, 8);
        assert!(key.contains(5));
        assert!(key.contains(8));
        assert!(!key.contains(9));
    }
}
