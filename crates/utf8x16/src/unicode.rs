//! Scalar-value predicates shared by the decoder and the encoder.
//!
//! Everything here is `const fn` so policies and tests can use it in constant
//! context.

/// The largest Unicode code point, U+10FFFF.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// U+FFFD, substituted for bad input by the [`convert`](crate::convert) loops.
pub const REPLACEMENT_CHARACTER: u16 = 0xFFFD;

/// The UTF-8 encoding of [`REPLACEMENT_CHARACTER`].
pub const REPLACEMENT_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Returns `true` for bytes of the form `10xxxxxx`.
#[inline]
#[must_use]
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns `true` if `cp` lies in U+D800..=U+DFFF.
#[inline]
#[must_use]
pub const fn is_surrogate(cp: u32) -> bool {
    cp & 0xFFFF_F800 == 0xD800
}

/// Returns `true` for a leading (high) surrogate, U+D800..=U+DBFF.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

/// Returns `true` for a trailing (low) surrogate, U+DC00..=U+DFFF.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// Returns `true` for the 66 code points Unicode reserves as noncharacters:
/// U+FDD0..=U+FDEF and the last two code points of every plane.
#[inline]
#[must_use]
pub const fn is_noncharacter(cp: u32) -> bool {
    cp >= 0xFDD0 && (cp <= 0xFDEF || cp & 0xFFFE == 0xFFFE)
}

/// Returns `true` if `cp` lies outside the basic plane and needs a surrogate
/// pair in UTF-16.
#[inline]
#[must_use]
pub const fn requires_surrogates(cp: u32) -> bool {
    cp >= 0x1_0000
}

/// The high surrogate of a supplementary code point.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn high_surrogate(cp: u32) -> u16 {
    ((cp >> 10) + 0xD7C0) as u16
}

/// The low surrogate of a supplementary code point.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn low_surrogate(cp: u32) -> u16 {
    (cp % 0x400 + 0xDC00) as u16
}

/// Combines a high and a low surrogate into the code point they encode.
///
/// The caller checks that `high` and `low` really are surrogates of the right
/// kind; the result is meaningless otherwise.
#[inline]
#[must_use]
pub const fn surrogate_to_scalar(high: u16, low: u16) -> u32 {
    ((high as u32) << 10) + (low as u32) - 0x035F_DC00
}
