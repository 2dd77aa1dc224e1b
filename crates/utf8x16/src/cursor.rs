//! Read cursors over the source side of a conversion.
//!
//! A cursor is a transient view: it borrows the caller's storage for the
//! duration of a call and carries nothing but a position. The single-step
//! functions only ever peek ahead, then advance once they have validated the
//! whole sequence, so a failed call leaves the position untouched.

/// A read cursor over elements of type `T` (bytes or 16-bit code units).
pub trait Source<T: Copy> {
    /// Returns the element `offset` positions ahead without consuming it.
    fn peek(&self, offset: usize) -> Option<T>;

    /// Consumes `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count` elements are available.
    fn advance(&mut self, count: usize);

    /// Number of elements left to read.
    fn available(&self) -> usize;

    /// Returns the next element and consumes it.
    #[inline]
    fn next_element(&mut self) -> Option<T> {
        let value = self.peek(0)?;
        self.advance(1);
        Some(value)
    }
}

/// A cursor over one contiguous slice.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> SliceCursor<'a, T> {
    /// Creates a cursor positioned at the start of `data`.
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        Self { data, pos: 0 }
    }

    /// Elements consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the slice.
    #[must_use]
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.pos..]
    }
}

impl<T: Copy> Source<T> for SliceCursor<'_, T> {
    #[inline]
    fn peek(&self, offset: usize) -> Option<T> {
        self.data.get(self.pos + offset).copied()
    }

    #[inline]
    fn advance(&mut self, count: usize) {
        assert!(
            count <= self.available(),
            "advanced {count} past the end of a cursor with {} left",
            self.available()
        );
        self.pos += count;
    }

    #[inline]
    fn available(&self) -> usize {
        self.data.len() - self.pos
    }
}

/// A cursor over two slices read back to back.
///
/// Streaming callers keep the unread tail of the previous chunk (`head`) and
/// read it together with the next chunk (`tail`), so a sequence that straddles
/// the boundary is decoded in one step.
#[derive(Debug, Clone)]
pub struct SplitCursor<'a, T> {
    head: &'a [T],
    tail: &'a [T],
    pos: usize,
}

impl<'a, T: Copy> SplitCursor<'a, T> {
    /// Creates a cursor that reads all of `head`, then all of `tail`.
    #[must_use]
    pub fn new(head: &'a [T], tail: &'a [T]) -> Self {
        Self { head, tail, pos: 0 }
    }

    /// Elements consumed so far, counted across both slices.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Elements of `tail` consumed so far.
    #[must_use]
    pub fn tail_position(&self) -> usize {
        self.pos.saturating_sub(self.head.len())
    }

    /// Returns `true` while the cursor is still inside `head`.
    #[must_use]
    pub fn in_head(&self) -> bool {
        self.pos < self.head.len()
    }

    /// The unread remainders of `head` and `tail`.
    #[must_use]
    pub fn remaining(&self) -> (&'a [T], &'a [T]) {
        if self.in_head() {
            (&self.head[self.pos..], self.tail)
        } else {
            (&[], &self.tail[self.tail_position()..])
        }
    }
}

impl<T: Copy> Source<T> for SplitCursor<'_, T> {
    #[inline]
    fn peek(&self, offset: usize) -> Option<T> {
        let idx = self.pos + offset;
        match self.head.get(idx) {
            Some(v) => Some(*v),
            None => self.tail.get(idx - self.head.len()).copied(),
        }
    }

    #[inline]
    fn advance(&mut self, count: usize) {
        assert!(
            count <= self.available(),
            "advanced {count} past the end of a cursor with {} left",
            self.available()
        );
        self.pos += count;
    }

    #[inline]
    fn available(&self) -> usize {
        self.head.len() + self.tail.len() - self.pos
    }
}
