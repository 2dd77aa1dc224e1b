//! Policy-driven UTF-8 <-> UTF-16 transcoding primitives.
//!
//! The core of this crate is two single-step functions:
//!
//! - [`decode_one`] turns one UTF-8 sequence (a leading byte plus up to three
//!   continuation bytes read through a [`Source`]) into one or two 16-bit code
//!   units, or a single 32-bit scalar, pushed into a [`WideSink`].
//! - [`encode_one`] turns one UTF-16 code unit (plus a low surrogate read
//!   through a [`Source`] when needed) into one to four bytes pushed into a
//!   [`ByteSink`].
//!
//! Both are generic over a [`Policy`], a zero-sized type whose associated
//! constants select validation strictness at compile time. Neither function
//! allocates, loops over a buffer, or keeps state between calls: the cursor
//! position is the only state, and it belongs to the caller.
//!
//! The [`convert`] module provides the whole-buffer loops most callers want,
//! including replacement of bad input with U+FFFD and chunked decoding.
//!
//! ```rust
//! use utf8x16::{Baseline, SliceCursor, Source, decode_one};
//!
//! let bytes = [0xE2, 0x82, 0xAC];
//! let mut src = SliceCursor::new(&bytes[1..]);
//! let mut out: Vec<u16> = Vec::new();
//! let consumed = decode_one::<Baseline, _, _>(bytes[0], &mut src, &mut out).unwrap();
//! assert_eq!(consumed, 3);
//! assert_eq!(out, [0x20AC]);
//! assert_eq!(src.available(), 0);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod convert;
mod cursor;
mod decoder;
mod encoder;
mod error;
mod policy;
mod sink;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use cursor::{SliceCursor, Source, SplitCursor};
pub use decoder::decode_one;
pub use encoder::encode_one;
pub use error::{ConvertError, TranscodeError};
pub use policy::{Baseline, NoAsciiFastPath, Policy, Strict, Trusted};
pub use sink::{ByteSink, SliceSink, WideSink};
