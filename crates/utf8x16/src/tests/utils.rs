use alloc::vec::Vec;

use crate::{Policy, SliceCursor, TranscodeError, decode_one, encode_one};

/// Outcome of one decode step over `bytes`: the result, the units pushed and
/// how far the source cursor moved past the lead byte.
pub(crate) fn decode_step<P: Policy>(bytes: &[u8]) -> (Result<usize, TranscodeError>, Vec<u16>, usize) {
    let mut src = SliceCursor::new(&bytes[1..]);
    let mut out = Vec::new();
    let res = decode_one::<P, _, _>(bytes[0], &mut src, &mut out);
    (res, out, src.position())
}

/// Outcome of one encode step over `units`; see [`decode_step`].
pub(crate) fn encode_step<P: Policy>(units: &[u16]) -> (Result<(), TranscodeError>, Vec<u8>, usize) {
    let mut src = SliceCursor::new(&units[1..]);
    let mut out = Vec::new();
    let res = encode_one::<P, _, _>(units[0], &mut src, &mut out);
    (res, out, src.position())
}

pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
