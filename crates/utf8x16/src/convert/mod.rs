//! Whole-buffer conversion loops built on [`decode_one`] and [`encode_one`].
//!
//! The core functions handle one sequence per call and leave error recovery
//! to the caller. These loops are that caller: they walk a source slice,
//! check the sink has room for what the next element can produce, and either
//! substitute U+FFFD or stop at bad input according to [`ConvertOptions`].
//!
//! With a policy that skips the ASCII fast path, the loops copy ASCII
//! elements themselves and only hand the rest to the core.
//!
//! # Examples
//!
//! ```rust
//! use utf8x16::{Baseline, convert::{ConvertOptions, utf8_to_utf16}};
//!
//! let mut out: Vec<u16> = Vec::new();
//! let progress = utf8_to_utf16::<Baseline, _>(b"caf\xC3\xA9 \xFF!", &mut out, &ConvertOptions::default())
//!     .unwrap();
//! assert_eq!(String::from_utf16(&out).unwrap(), "café \u{FFFD}!");
//! assert_eq!(progress.read, 8);
//! assert_eq!(progress.replacements, 1);
//! ```

mod chunked;
mod options;

use log::{debug, trace};

pub use chunked::ChunkedDecoder;
pub use options::{ConvertOptions, ErrorMode, Progress};

use crate::{
    ByteSink, ConvertError, Policy, SliceCursor, Source, TranscodeError, WideSink, decode_one,
    encode_one,
    unicode::{REPLACEMENT_CHARACTER, REPLACEMENT_UTF8, is_low_surrogate},
};

/// Decodes UTF-8 from `src` into `dst` until the source is exhausted, the
/// sink is full, or (with [`ErrorMode::Stop`]) bad input is found.
///
/// # Errors
///
/// With [`ErrorMode::Stop`], returns the first [`TranscodeError`] and the
/// offset of the sequence that caused it. Everything before that offset has
/// been written to `dst`.
pub fn utf8_to_utf16<P, D>(
    src: &[u8],
    dst: &mut D,
    options: &ConvertOptions,
) -> Result<Progress, ConvertError>
where
    P: Policy,
    D: WideSink + ?Sized,
{
    decode_from::<P, _, _>(&mut SliceCursor::new(src), dst, options)
}

/// Encodes UTF-16 from `src` into `dst` until the source is exhausted, the
/// sink is full, or (with [`ErrorMode::Stop`]) bad input is found.
///
/// # Errors
///
/// With [`ErrorMode::Stop`], returns the first [`TranscodeError`] and the
/// offset of the code unit that caused it. Everything before that offset
/// has been written to `dst`.
pub fn utf16_to_utf8<P, D>(
    src: &[u16],
    dst: &mut D,
    options: &ConvertOptions,
) -> Result<Progress, ConvertError>
where
    P: Policy,
    D: ByteSink + ?Sized,
{
    encode_from::<P, _, _>(&mut SliceCursor::new(src), dst, options)
}

/// The decoding loop over any byte source. Offsets in errors and in the
/// returned [`Progress`] are relative to the cursor's starting position; once
/// the loop returns, only `Progress::read` says how much was consumed.
pub(crate) fn decode_from<P, S, D>(
    src: &mut S,
    dst: &mut D,
    options: &ConvertOptions,
) -> Result<Progress, ConvertError>
where
    P: Policy,
    S: Source<u8> + ?Sized,
    D: WideSink + ?Sized,
{
    let mut progress = Progress::default();
    while let Some(lead) = src.peek(0) {
        if dst.spare() < decode_room::<D>(lead) {
            debug!("utf-8 decode paused with a full sink after {} bytes", progress.read);
            progress.output_full = true;
            break;
        }
        src.advance(1);
        if P::SKIP_ASCII_FAST_PATH && lead.is_ascii() {
            dst.push_unit(u16::from(lead));
            progress.read += 1;
            continue;
        }
        let before = src.available();
        match decode_one::<P, _, _>(lead, src, dst) {
            Ok(_) => progress.read += 1 + before - src.available(),
            Err(TranscodeError::Truncated) if !options.final_chunk => break,
            Err(kind) => {
                handle_error(kind, progress.read, options)?;
                dst.push_unit(REPLACEMENT_CHARACTER);
                progress.read += 1;
                progress.replacements += 1;
            }
        }
    }
    Ok(progress)
}

/// The encoding loop over any code-unit source; see [`decode_from`].
pub(crate) fn encode_from<P, S, D>(
    src: &mut S,
    dst: &mut D,
    options: &ConvertOptions,
) -> Result<Progress, ConvertError>
where
    P: Policy,
    S: Source<u16> + ?Sized,
    D: ByteSink + ?Sized,
{
    let mut progress = Progress::default();
    while let Some(unit) = src.peek(0) {
        if dst.spare() < encode_room(unit, src.peek(1)) {
            debug!("utf-16 encode paused with a full sink after {} units", progress.read);
            progress.output_full = true;
            break;
        }
        src.advance(1);
        if P::SKIP_ASCII_FAST_PATH {
            if let Some(byte) = u8::try_from(unit).ok().filter(u8::is_ascii) {
                dst.push_byte(byte);
                progress.read += 1;
                continue;
            }
        }
        let before = src.available();
        match encode_one::<P, _, _>(unit, src, dst) {
            Ok(()) => progress.read += 1 + before - src.available(),
            Err(TranscodeError::Truncated) if !options.final_chunk => break,
            Err(kind) => {
                handle_error(kind, progress.read, options)?;
                for byte in REPLACEMENT_UTF8 {
                    dst.push_byte(byte);
                }
                progress.read += 1;
                progress.replacements += 1;
            }
        }
    }
    Ok(progress)
}

/// Room one decoding step needs: a pair (or one scalar) for a four-byte lead,
/// one unit for anything else, replacements included.
fn decode_room<D: WideSink + ?Sized>(lead: u8) -> usize {
    if (0xF0..=0xF4).contains(&lead) {
        D::MAX_PER_SCALAR
    } else {
        1
    }
}

/// Bytes one encoding step needs. Lone surrogates and rejected
/// noncharacters become the three-byte replacement.
fn encode_room(unit: u16, next: Option<u16>) -> usize {
    match unit {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0xD800..=0xDBFF if next.is_some_and(is_low_surrogate) => 4,
        _ => 3,
    }
}

fn handle_error(kind: TranscodeError, offset: usize, options: &ConvertOptions) -> Result<(), ConvertError> {
    match options.on_error {
        ErrorMode::Stop => {
            trace!("stopping on {kind} at offset {offset}");
            Err(ConvertError { kind, offset })
        }
        ErrorMode::Replace => {
            trace!("replacing {kind} at offset {offset}");
            Ok(())
        }
    }
}
