use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{
    Baseline, ConvertError, SliceSink,
    convert::{ChunkedDecoder, ConvertOptions, ErrorMode, utf8_to_utf16},
};

use super::utils::quickcheck_tests;

impl Arbitrary for ErrorMode {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            ErrorMode::Replace
        } else {
            ErrorMode::Stop
        }
    }
}

/// Mostly valid UTF-8 with occasional damage, so that chunk boundaries fall
/// inside multi-byte sequences far more often than with uniform bytes.
#[derive(Debug, Clone)]
struct DamagedText(Vec<u8>);

impl Arbitrary for DamagedText {
    fn arbitrary(g: &mut Gen) -> Self {
        let text = alloc::string::String::arbitrary(g);
        let mut bytes = text.into_bytes();
        if !bytes.is_empty() && u8::arbitrary(g) % 4 == 0 {
            let idx = usize::arbitrary(g) % bytes.len();
            bytes[idx] = u8::arbitrary(g);
        }
        if u8::arbitrary(g) % 4 == 0 {
            bytes.truncate(bytes.len().saturating_sub(1));
        }
        Self(bytes)
    }
}

fn whole(bytes: &[u8], on_error: ErrorMode) -> Result<(Vec<u16>, usize), ConvertError> {
    let mut out: Vec<u16> = Vec::new();
    let options = ConvertOptions {
        on_error,
        ..Default::default()
    };
    let progress = utf8_to_utf16::<Baseline, _>(bytes, &mut out, &options)?;
    Ok((out, progress.replacements))
}

fn chunked(bytes: &[u8], splits: &[usize], on_error: ErrorMode) -> Result<(Vec<u16>, usize), ConvertError> {
    let mut decoder = ChunkedDecoder::<Baseline>::new(ConvertOptions {
        on_error,
        ..Default::default()
    });
    let mut out: Vec<u16> = Vec::new();
    let mut replacements = 0;
    let mut rest = bytes;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(s % (rest.len() + 1));
        let progress = decoder.feed(chunk, &mut out)?;
        assert_eq!(progress.read, chunk.len());
        replacements += progress.replacements;
        rest = tail;
    }
    replacements += decoder.feed(rest, &mut out)?.replacements;
    replacements += decoder.finish(&mut out)?.replacements;
    assert!(decoder.pending().is_empty());
    assert_eq!(decoder.position(), bytes.len());
    Ok((out, replacements))
}

/// Property: splitting the input into arbitrary chunks, including empty
/// ones and ones that cut sequences apart, never changes the output, the
/// replacement count or the error.
#[test]
fn chunked_matches_whole_buffer() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: DamagedText, splits: Vec<usize>, on_error: ErrorMode) -> bool {
        whole(&text.0, on_error) == chunked(&text.0, &splits, on_error)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(DamagedText, Vec<usize>, ErrorMode) -> bool);
}

/// Property: draining through a small fixed buffer gives the same output as
/// a growable one, and never splits a surrogate pair across refills.
#[test]
fn bounded_sink_matches_vec() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: DamagedText, size: u8) -> bool {
        let size = 2 + usize::from(size % 8);
        let Ok((expected, _)) = whole(&text.0, ErrorMode::Replace) else {
            return false;
        };

        let mut out: Vec<u16> = Vec::new();
        let mut rest = &text.0[..];
        loop {
            let mut buf = [0u16; 10];
            let mut sink = SliceSink::new(&mut buf[..size]);
            let progress =
                utf8_to_utf16::<Baseline, _>(rest, &mut sink, &ConvertOptions::default()).unwrap();
            out.extend_from_slice(sink.written());
            rest = &rest[progress.read..];
            if !progress.output_full {
                break;
            }
        }
        rest.is_empty() && out == expected
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(DamagedText, u8) -> bool);
}
