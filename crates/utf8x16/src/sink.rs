//! Write cursors over the destination side of a conversion.
//!
//! The element type of a sink picks the output width for decoding: `u16`
//! sinks receive surrogate pairs for supplementary code points, `u32` sinks
//! receive the code point itself.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::unicode::{high_surrogate, low_surrogate};

/// Destination for UTF-8 output.
pub trait ByteSink {
    /// Appends one byte.
    fn push_byte(&mut self, byte: u8);

    /// How many more bytes fit. Growable sinks report `usize::MAX`.
    fn spare(&self) -> usize;
}

/// Destination for decoded output: 16-bit code units or 32-bit scalars.
pub trait WideSink {
    /// The most elements one decoded code point can occupy.
    const MAX_PER_SCALAR: usize = 2;

    /// Appends one basic-plane code unit.
    fn push_unit(&mut self, unit: u16);

    /// Appends a supplementary code point (U+10000..=U+10FFFF).
    ///
    /// The default splits it into a high/low surrogate pair.
    #[inline]
    fn push_supplementary(&mut self, cp: u32) {
        self.push_unit(high_surrogate(cp));
        self.push_unit(low_surrogate(cp));
    }

    /// How many more elements fit. Growable sinks report `usize::MAX`.
    fn spare(&self) -> usize;
}

/// A sink over a fixed, caller-owned buffer.
///
/// Pushing into a full `SliceSink` panics; loops that feed one check
/// [`spare`](WideSink::spare) first.
#[derive(Debug)]
pub struct SliceSink<'a, T> {
    buf: &'a mut [T],
    len: usize,
}

impl<'a, T> SliceSink<'a, T> {
    /// Creates an empty sink writing from the start of `buf`.
    #[must_use]
    pub fn new(buf: &'a mut [T]) -> Self {
        Self { buf, len: 0 }
    }

    /// Number of elements written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written prefix of the buffer.
    #[must_use]
    pub fn written(&self) -> &[T] {
        &self.buf[..self.len]
    }

    #[inline]
    fn push(&mut self, value: T) {
        self.buf[self.len] = value;
        self.len += 1;
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }
}

impl ByteSink for SliceSink<'_, u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn spare(&self) -> usize {
        self.remaining()
    }
}

impl WideSink for SliceSink<'_, u16> {
    #[inline]
    fn push_unit(&mut self, unit: u16) {
        self.push(unit);
    }

    #[inline]
    fn spare(&self) -> usize {
        self.remaining()
    }
}

impl WideSink for SliceSink<'_, u32> {
    const MAX_PER_SCALAR: usize = 1;

    #[inline]
    fn push_unit(&mut self, unit: u16) {
        self.push(u32::from(unit));
    }

    #[inline]
    fn push_supplementary(&mut self, cp: u32) {
        self.push(cp);
    }

    #[inline]
    fn spare(&self) -> usize {
        self.remaining()
    }
}

#[cfg(feature = "alloc")]
impl ByteSink for Vec<u8> {
    #[inline]
    fn push_byte(&mut self, byte: u8) {
        self.push(byte);
    }

    #[inline]
    fn spare(&self) -> usize {
        usize::MAX
    }
}

#[cfg(feature = "alloc")]
impl WideSink for Vec<u16> {
    #[inline]
    fn push_unit(&mut self, unit: u16) {
        self.push(unit);
    }

    #[inline]
    fn spare(&self) -> usize {
        usize::MAX
    }
}

#[cfg(feature = "alloc")]
impl WideSink for Vec<u32> {
    const MAX_PER_SCALAR: usize = 1;

    #[inline]
    fn push_unit(&mut self, unit: u16) {
        self.push(u32::from(unit));
    }

    #[inline]
    fn push_supplementary(&mut self, cp: u32) {
        self.push(cp);
    }

    #[inline]
    fn spare(&self) -> usize {
        usize::MAX
    }
}
