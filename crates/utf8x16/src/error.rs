use thiserror::Error;

/// Why a single decode or encode step failed.
///
/// Both kinds are local: nothing was written to the destination and the
/// source cursor was not advanced past the offending element.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscodeError {
    /// The input cannot be valid under any continuation: a bad lead byte or
    /// continuation byte, an overlong form, an encoded surrogate, a value above
    /// U+10FFFF, a mismatched surrogate, or a rejected noncharacter.
    #[error("malformed sequence")]
    Malformed,
    /// The input is a valid prefix that ends before the sequence does.
    #[error("truncated sequence")]
    Truncated,
}

impl TranscodeError {
    /// Returns `true` if more input could turn the failure into a success.
    #[must_use]
    pub fn is_recoverable(self) -> bool {
        matches!(self, Self::Truncated)
    }
}

/// A [`TranscodeError`] located within a whole-buffer conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ConvertError {
    /// What went wrong.
    pub kind: TranscodeError,
    /// Index of the first element of the offending sequence in the source.
    pub offset: usize,
}
