/// Compile-time configuration for [`decode_one`](crate::decode_one) and
/// [`encode_one`](crate::encode_one).
///
/// Implementors are zero-sized marker types. Because every knob is an
/// associated constant, the branches it controls are resolved when the
/// conversion functions are monomorphized.
///
/// # Examples
///
/// ```rust
/// use utf8x16::{Policy, SliceCursor, TranscodeError, decode_one};
///
/// /// Rejects noncharacters but otherwise behaves like `Baseline`.
/// struct NoNonchars;
///
/// impl Policy for NoNonchars {
///     const ALLOW_NONCHARACTERS: bool = false;
/// }
///
/// let bytes = [0xEF, 0xBF, 0xBE]; // U+FFFE
/// let mut src = SliceCursor::new(&bytes[1..]);
/// let mut out: Vec<u16> = Vec::new();
/// assert_eq!(
///     decode_one::<NoNonchars, _, _>(bytes[0], &mut src, &mut out),
///     Err(TranscodeError::Malformed)
/// );
/// ```
pub trait Policy {
    /// Skip validation of decoded values: overlong forms, surrogates,
    /// out-of-range values and noncharacters all pass, as does a lead byte in
    /// 0x80..=0xC1. Only for input already known to be valid.
    const TRUSTED: bool = false;

    /// Accept the 66 Unicode noncharacters (U+FDD0..=U+FDEF, U+xxFFFE,
    /// U+xxFFFF).
    const ALLOW_NONCHARACTERS: bool = true;

    /// Do not take the single-element shortcut for ASCII.
    ///
    /// Callers that set this handle ASCII themselves, typically in a
    /// vectorized pre-pass; the loops in [`convert`](crate::convert) copy
    /// ASCII elements before calling the core. An ASCII element that still
    /// reaches the core is reported as
    /// [`Malformed`](crate::TranscodeError::Malformed).
    const SKIP_ASCII_FAST_PATH: bool = false;
}

/// The default policy, suitable for arbitrary external input: fully
/// validating, noncharacters allowed, ASCII fast path enabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Baseline;

impl Policy for Baseline {}

/// Like [`Baseline`], but noncharacters are malformed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Strict;

impl Policy for Strict {
    const ALLOW_NONCHARACTERS: bool = false;
}

/// Skips value validation for input that is known to be well formed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Trusted;

impl Policy for Trusted {
    const TRUSTED: bool = true;
}

/// Like [`Baseline`], for callers that strip ASCII runs before calling in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoAsciiFastPath;

impl Policy for NoAsciiFastPath {
    const SKIP_ASCII_FAST_PATH: bool = true;
}
