use core::marker::PhantomData;

use log::trace;

use super::{ConvertOptions, Progress, decode_from};
use crate::{ConvertError, Policy, SliceCursor, Source, SplitCursor, WideSink};

/// Longest incomplete UTF-8 prefix that can be carried between chunks.
const MAX_CARRY: usize = 3;

/// Decodes UTF-8 that arrives in arbitrarily split chunks.
///
/// A sequence cut off at the end of one chunk is kept (at most three bytes)
/// and read together with the next chunk through a [`SplitCursor`], so it is
/// decoded once, exactly as if the input had not been split.
///
/// Offsets in errors are counted from the start of the stream.
///
/// # Examples
///
/// ```rust
/// use utf8x16::{Baseline, convert::{ChunkedDecoder, ConvertOptions}};
///
/// let mut decoder = ChunkedDecoder::<Baseline>::new(ConvertOptions::default());
/// let mut out: Vec<u16> = Vec::new();
/// decoder.feed(&[b'a', 0xF0, 0x9F], &mut out).unwrap();
/// assert_eq!(decoder.pending(), &[0xF0, 0x9F]);
/// decoder.feed(&[0x98, 0x80], &mut out).unwrap();
/// decoder.finish(&mut out).unwrap();
/// assert_eq!(String::from_utf16(&out).unwrap(), "a😀");
/// ```
#[derive(Debug, Clone)]
pub struct ChunkedDecoder<P> {
    carry: [u8; MAX_CARRY],
    carry_len: usize,
    /// Stream offset of the first carried byte, or of the next chunk when
    /// nothing is carried.
    position: usize,
    options: ConvertOptions,
    failed: Option<ConvertError>,
    _policy: PhantomData<P>,
}

impl<P: Policy> ChunkedDecoder<P> {
    /// Creates a decoder. `options.final_chunk` is ignored; the end of input
    /// is signalled by [`finish`](Self::finish).
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            carry: [0; MAX_CARRY],
            carry_len: 0,
            position: 0,
            options,
            failed: None,
            _policy: PhantomData,
        }
    }

    /// The carried bytes of an incomplete sequence.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.carry[..self.carry_len]
    }

    /// Bytes of the stream consumed so far, carried bytes included.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position + self.carry_len
    }

    /// Decodes as much of `chunk` as the sink accepts.
    ///
    /// `Progress::read` counts bytes of `chunk` only; an incomplete sequence
    /// at its end is counted as read because it is now carried. If the sink
    /// fills up, the unread rest of `chunk` must be fed again.
    ///
    /// # Errors
    ///
    /// With [`ErrorMode::Stop`](super::ErrorMode::Stop), the first malformed
    /// sequence. The decoder then stays failed and every later call returns
    /// the same error.
    pub fn feed<D>(&mut self, chunk: &[u8], dst: &mut D) -> Result<Progress, ConvertError>
    where
        D: WideSink + ?Sized,
    {
        if let Some(err) = self.failed {
            return Err(err);
        }

        let options = ConvertOptions {
            final_chunk: false,
            ..self.options
        };
        let carry = self.carry;
        let carry_len = self.carry_len;
        let mut cursor = SplitCursor::new(&carry[..carry_len], chunk);
        let mut progress =
            decode_from::<P, _, _>(&mut cursor, dst, &options).map_err(|err| self.fail(err))?;
        self.position += progress.read;

        let mut rest = SplitCursor::new(&carry[..carry_len], chunk);
        rest.advance(progress.read);
        let (head, tail) = rest.remaining();
        if progress.output_full {
            // The rest of the chunk is fed again, so only the carry is kept.
            self.carry[..head.len()].copy_from_slice(head);
            self.carry_len = head.len();
            progress.read = rest.tail_position();
            return Ok(progress);
        }

        // Whatever is left over is one incomplete sequence, possibly starting
        // inside the old carry.
        let unread = head.len() + tail.len();
        let slots = &mut self.carry[..unread];
        slots[..head.len()].copy_from_slice(head);
        slots[head.len()..].copy_from_slice(tail);
        self.carry_len = unread;
        if unread > 0 {
            trace!("carrying {unread} bytes of an incomplete sequence");
        }
        progress.read = chunk.len();
        Ok(progress)
    }

    /// Ends the stream, flushing a carried incomplete sequence according to
    /// the configured [`ErrorMode`](super::ErrorMode).
    ///
    /// If the sink cannot take the replacements, `output_full` is set and the
    /// carry is kept, so `finish` may be called again with more room.
    ///
    /// # Errors
    ///
    /// With [`ErrorMode::Stop`](super::ErrorMode::Stop), a
    /// [`TranscodeError::Truncated`] error when the stream ended inside a
    /// sequence.
    pub fn finish<D>(&mut self, dst: &mut D) -> Result<Progress, ConvertError>
    where
        D: WideSink + ?Sized,
    {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if self.carry_len == 0 {
            return Ok(Progress::default());
        }

        let options = ConvertOptions {
            final_chunk: true,
            ..self.options
        };
        // The carry starts with the lead byte of the cut-off sequence, so
        // Stop reports it as truncated at the carry's offset.
        let carry = self.carry;
        let pending = &carry[..self.carry_len];
        let progress = decode_from::<P, _, _>(&mut SliceCursor::new(pending), dst, &options)
            .map_err(|err| self.fail(err))?;

        let mut rest = SliceCursor::new(pending);
        rest.advance(progress.read);
        let rest = rest.remaining();
        self.carry[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();
        self.position += progress.read;
        Ok(progress)
    }

    fn fail(&mut self, err: ConvertError) -> ConvertError {
        let err = ConvertError {
            offset: self.position + err.offset,
            ..err
        };
        self.failed = Some(err);
        err
    }
}
