use crate::{
    Policy, Source, TranscodeError, WideSink,
    unicode::{MAX_CODE_POINT, is_continuation_byte, is_noncharacter, is_surrogate, requires_surrogates},
};

/// Decodes one UTF-8 sequence whose leading byte the caller has already
/// taken from the source.
///
/// `src` is positioned just after `lead`. On success the decoded code point
/// is pushed to `dst` (one unit for the basic plane; for supplementary code
/// points, whatever [`WideSink::push_supplementary`] does for that sink),
/// `src` is advanced past the continuation bytes, and the total number of
/// bytes in the sequence, `lead` included, is returned.
///
/// # Errors
///
/// - [`TranscodeError::Malformed`] if no continuation of the input can be
///   valid UTF-8 under `P`.
/// - [`TranscodeError::Truncated`] if the source ends inside an otherwise
///   plausible sequence.
///
/// On error nothing is pushed and `src` is not advanced, so retrying at the
/// same position yields the same error.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn decode_one<P, S, D>(lead: u8, src: &mut S, dst: &mut D) -> Result<usize, TranscodeError>
where
    P: Policy + ?Sized,
    S: Source<u8> + ?Sized,
    D: WideSink + ?Sized,
{
    if lead < 0x80 {
        if P::SKIP_ASCII_FAST_PATH {
            return Err(TranscodeError::Malformed);
        }
        dst.push_unit(u16::from(lead));
        return Ok(1);
    }

    // (continuation bytes, smallest code point of that length, payload bits)
    let (needed, min, mut cp) = match lead {
        // 0xC0 and 0xC1 can only start overlong forms; 0x80..=0xBF are
        // continuation bytes.
        0x80..=0xC1 if !P::TRUSTED => return Err(TranscodeError::Malformed),
        0x80..=0xDF => (1, 0x80, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (2, 0x800, u32::from(lead & 0x0F)),
        0xF0..=0xF4 => (3, 0x1_0000, u32::from(lead & 0x07)),
        // U+10FFFF is F4 8F BF BF; nothing above 0xF4 leads a sequence.
        _ => return Err(TranscodeError::Malformed),
    };

    let available = src.available();
    if available < needed {
        for offset in 0..available {
            if src.peek(offset).is_some_and(|b| !is_continuation_byte(b)) {
                return Err(TranscodeError::Malformed);
            }
        }
        return Err(TranscodeError::Truncated);
    }

    for offset in 0..needed {
        let byte = src.peek(offset).ok_or(TranscodeError::Truncated)?;
        if !is_continuation_byte(byte) {
            return Err(TranscodeError::Malformed);
        }
        cp = (cp << 6) | u32::from(byte & 0x3F);
    }

    if !P::TRUSTED {
        if cp < min || is_surrogate(cp) || cp > MAX_CODE_POINT {
            return Err(TranscodeError::Malformed);
        }
        if !P::ALLOW_NONCHARACTERS && is_noncharacter(cp) {
            return Err(TranscodeError::Malformed);
        }
    }

    if requires_surrogates(cp) {
        dst.push_supplementary(cp);
    } else {
        dst.push_unit(cp as u16);
    }
    src.advance(needed);
    Ok(needed + 1)
}
