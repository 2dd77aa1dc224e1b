use crate::{
    ByteSink, Policy, Source, TranscodeError,
    unicode::{is_high_surrogate, is_low_surrogate, is_noncharacter, is_surrogate, surrogate_to_scalar},
};

/// Encodes one UTF-16 code unit, which the caller has already taken from the
/// source, as UTF-8.
///
/// A high surrogate is paired with the low surrogate at the front of `src`,
/// which is then consumed. Every other unit is encoded on its own and `src`
/// is left alone.
///
/// # Errors
///
/// - [`TranscodeError::Truncated`] if `unit` is a surrogate and `src` is
///   empty.
/// - [`TranscodeError::Malformed`] for a lone low surrogate, a high surrogate
///   not followed by a low one, a noncharacter when `P` rejects them, or an
///   ASCII unit when `P` skips the ASCII fast path.
///
/// On error nothing is pushed and `src` is not advanced.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn encode_one<P, S, D>(unit: u16, src: &mut S, dst: &mut D) -> Result<(), TranscodeError>
where
    P: Policy + ?Sized,
    S: Source<u16> + ?Sized,
    D: ByteSink + ?Sized,
{
    if unit < 0x80 {
        if P::SKIP_ASCII_FAST_PATH {
            return Err(TranscodeError::Malformed);
        }
        dst.push_byte(unit as u8);
        return Ok(());
    }

    if unit < 0x800 {
        dst.push_byte(0xC0 | (unit >> 6) as u8);
        dst.push_byte(0x80 | (unit & 0x3F) as u8);
        return Ok(());
    }

    if !is_surrogate(u32::from(unit)) {
        if !P::ALLOW_NONCHARACTERS && is_noncharacter(u32::from(unit)) {
            return Err(TranscodeError::Malformed);
        }
        dst.push_byte(0xE0 | (unit >> 12) as u8);
        dst.push_byte(0x80 | ((unit >> 6) & 0x3F) as u8);
        dst.push_byte(0x80 | (unit & 0x3F) as u8);
        return Ok(());
    }

    let Some(low) = src.peek(0) else {
        return Err(TranscodeError::Truncated);
    };
    if !is_high_surrogate(unit) || !is_low_surrogate(low) {
        return Err(TranscodeError::Malformed);
    }
    let cp = surrogate_to_scalar(unit, low);
    if !P::ALLOW_NONCHARACTERS && is_noncharacter(cp) {
        return Err(TranscodeError::Malformed);
    }
    src.advance(1);

    dst.push_byte(0xF0 | (cp >> 18) as u8);
    dst.push_byte(0x80 | ((cp >> 12) & 0x3F) as u8);
    dst.push_byte(0x80 | ((cp >> 6) & 0x3F) as u8);
    dst.push_byte(0x80 | (cp & 0x3F) as u8);
    Ok(())
}
