use rstest::rstest;

use super::utils::encode_step;
use crate::{Baseline, TranscodeError};

#[rstest]
#[case::lone_high_at_end(&[0xD83D])]
#[case::lone_low_at_end(&[0xDE00])]
fn reports_truncated_without_output(#[case] units: &[u16]) {
    let (res, out, advanced) = encode_step::<Baseline>(units);
    assert_eq!(res, Err(TranscodeError::Truncated));
    assert!(out.is_empty());
    assert_eq!(advanced, 0);
}

#[rstest]
#[case::high_then_ascii(&[0xD83D, 0x0041])]
#[case::high_then_high(&[0xD83D, 0xD83D])]
#[case::high_then_bmp(&[0xD800, 0xE000])]
#[case::low_then_low(&[0xDE00, 0xDE00])]
#[case::low_then_high(&[0xDC00, 0xD800])]
#[case::low_then_ascii(&[0xDFFF, 0x0061])]
fn rejects_mismatched_surrogates_without_consuming(#[case] units: &[u16]) {
    let (res, out, advanced) = encode_step::<Baseline>(units);
    assert_eq!(res, Err(TranscodeError::Malformed));
    assert!(out.is_empty());
    assert_eq!(advanced, 0, "the lookahead unit must stay unread");
}
