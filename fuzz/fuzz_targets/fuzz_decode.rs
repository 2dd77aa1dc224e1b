#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utf8x16::{
    Baseline, SliceCursor, Source, Strict, TranscodeError, Trusted, decode_one,
    convert::{ChunkedDecoder, ConvertOptions, ErrorMode, utf8_to_utf16},
};

const HEADER: usize = 5; // 1 flag + 4-byte split seed

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Byte sequences sitting on the edges of UTF-8 validity.
static EDGE_TABLE: &[&[u8]] = &[
    b"\xC2\x80",
    b"\xDF\xBF",
    b"\xE0\xA0\x80",
    b"\xED\x9F\xBF",
    b"\xEE\x80\x80",
    b"\xEF\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF4\x8F\xBF\xBF",
    // invalid neighbours
    b"\xC0\x80",
    b"\xC1\xBF",
    b"\xE0\x9F\xBF",
    b"\xED\xA0\x80",
    b"\xED\xBF\xBF",
    b"\xF0\x8F\xBF\xBF",
    b"\xF4\x90\x80\x80",
    b"\xF5",
    b"\x80",
    // cut-off prefixes
    b"\xE2\x82",
    b"\xF0\x9F\x98",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splice edge sequences into the input so the decoder sees boundary cases
/// far more often than random bytes would produce them.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || !seed.is_multiple_of(3) {
        return fuzzer_mutate(data, size, max_size);
    }

    let mut len = size;
    let splices = with_rng(|rng| rng.random_range(1..=4));
    for _ in 0..splices {
        let edge = with_rng(|rng| EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())]);
        if len + edge.len() > max_size {
            break;
        }
        let at = with_rng(|rng| rng.random_range(HEADER..=len));
        data.copy_within(at..len, at + edge.len());
        data[at..at + edge.len()].copy_from_slice(edge);
        len += edge.len();
    }
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Every step either succeeds and consumes exactly what it reports, or fails
/// without output or consumption; trusted decoding never rejects what the
/// validating policies accept.
fn check_steps(bytes: &[u8]) {
    let mut src = SliceCursor::new(bytes);
    while let Some(lead) = src.next_element() {
        let before = src.available();
        let mut out: Vec<u16> = Vec::new();
        match decode_one::<Baseline, _, _>(lead, &mut src, &mut out) {
            Ok(n) => {
                assert_eq!(before - src.available(), n - 1);
                assert!(matches!(out.len(), 1 | 2));

                let mut strict_src = SliceCursor::new(&bytes[src.position() - n + 1..]);
                let mut strict_out: Vec<u16> = Vec::new();
                if decode_one::<Strict, _, _>(lead, &mut strict_src, &mut strict_out).is_ok() {
                    assert_eq!(strict_out, out);
                }

                let mut trusted_src = SliceCursor::new(&bytes[src.position() - n + 1..]);
                let mut trusted_out: Vec<u16> = Vec::new();
                assert_eq!(decode_one::<Trusted, _, _>(lead, &mut trusted_src, &mut trusted_out), Ok(n));
                assert_eq!(trusted_out, out);
            }
            Err(TranscodeError::Truncated) => {
                assert_eq!(before, src.available());
                assert!(out.is_empty());
                assert!(before < 3, "truncated with {before} bytes left");
            }
            Err(TranscodeError::Malformed) => {
                assert_eq!(before, src.available());
                assert!(out.is_empty());
            }
        }
    }
}

fn decode(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let split_seed = u32::from_le_bytes(data[1..5].try_into().unwrap()) as usize;
    let bytes = &data[HEADER..];

    check_steps(bytes);

    let options = ConvertOptions {
        on_error: if flags & 1 != 0 {
            ErrorMode::Stop
        } else {
            ErrorMode::Replace
        },
        ..Default::default()
    };

    let mut whole: Vec<u16> = Vec::new();
    let whole_result = utf8_to_utf16::<Baseline, _>(bytes, &mut whole, &options);
    match (&whole_result, std::str::from_utf8(bytes)) {
        (Ok(_), Ok(s)) => assert_eq!(whole, s.encode_utf16().collect::<Vec<_>>()),
        (Ok(progress), Err(_)) => assert!(progress.replacements > 0),
        (Err(err), Err(std_err)) => assert_eq!(err.offset, std_err.valid_up_to()),
        (Err(err), Ok(_)) => panic!("rejected valid UTF-8: {err}"),
    }

    // The same input split into chunks must decode identically.
    let mut decoder = ChunkedDecoder::<Baseline>::new(options);
    let mut chunked: Vec<u16> = Vec::new();
    let mut rest = bytes;
    let chunked_result = loop {
        if rest.is_empty() {
            break decoder.finish(&mut chunked);
        }
        let size = 1 + split_seed % rest.len();
        let (chunk, tail) = rest.split_at(size);
        if let Err(err) = decoder.feed(chunk, &mut chunked) {
            break Err(err);
        }
        rest = tail;
    };
    assert_eq!(whole_result.map(|_| ()), chunked_result.map(|_| ()));
    assert_eq!(whole, chunked);
}

fuzz_target!(|data: &[u8]| decode(data));
