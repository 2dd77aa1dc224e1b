/// What the whole-buffer loops do with input the core rejects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorMode {
    /// Emit U+FFFD for the offending lead element and continue after it.
    #[default]
    Replace,
    /// Return a [`ConvertError`](crate::ConvertError) at the first offending
    /// element.
    Stop,
}

/// Run-time options for the loops in [`convert`](crate::convert).
///
/// Validation strictness is not configured here; it is the `Policy` type
/// parameter of each loop.
///
/// # Examples
///
/// ```rust
/// use utf8x16::convert::{ConvertOptions, ErrorMode};
///
/// let options = ConvertOptions {
///     on_error: ErrorMode::Stop,
///     ..Default::default()
/// };
/// assert!(options.final_chunk);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// How to treat malformed input, and truncated input at the end of the
    /// final chunk.
    ///
    /// # Default
    ///
    /// [`ErrorMode::Replace`]
    pub on_error: ErrorMode,

    /// Whether the source is the end of the input.
    ///
    /// When `false`, a sequence cut off by the end of the source is left
    /// unread (see [`Progress::read`]) so that the caller can prepend it to
    /// the next chunk. When `true`, it is handled per `on_error`, with one
    /// replacement per leftover element.
    ///
    /// # Default
    ///
    /// `true`
    pub final_chunk: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            on_error: ErrorMode::Replace,
            final_chunk: true,
        }
    }
}

/// How far a whole-buffer conversion got.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Source elements consumed. Anything past this is unread and was not
    /// reflected in the output.
    pub read: usize,
    /// Number of U+FFFD substitutions made.
    pub replacements: usize,
    /// The loop stopped because the sink could not take another sequence.
    pub output_full: bool,
}
