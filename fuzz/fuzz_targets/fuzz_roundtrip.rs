#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8x16::{
    Baseline, SliceSink,
    convert::{ConvertOptions, utf8_to_utf16, utf16_to_utf8},
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    /// Raw units, including unpaired surrogates.
    units: Vec<u16>,
    /// Output buffer size for the bounded pass.
    window: u8,
}

fuzz_target!(|input: Input| {
    let options = ConvertOptions::default();

    // Well-formed text survives both directions unchanged.
    let units: Vec<u16> = input.text.encode_utf16().collect();
    let mut bytes: Vec<u8> = Vec::new();
    let progress = utf16_to_utf8::<Baseline, _>(&units, &mut bytes, &options).unwrap();
    assert_eq!(progress.replacements, 0);
    assert_eq!(bytes, input.text.as_bytes());
    let mut back: Vec<u16> = Vec::new();
    utf8_to_utf16::<Baseline, _>(&bytes, &mut back, &options).unwrap();
    assert_eq!(back, units);

    // Ill-formed UTF-16 is replaced the way the standard library does it.
    let mut lossy: Vec<u8> = Vec::new();
    utf16_to_utf8::<Baseline, _>(&input.units, &mut lossy, &options).unwrap();
    assert_eq!(lossy, String::from_utf16_lossy(&input.units).as_bytes());

    // A small fixed buffer produces the same bytes across refills.
    let window = 4 + usize::from(input.window % 16);
    let mut refilled: Vec<u8> = Vec::new();
    let mut rest = &input.units[..];
    loop {
        let mut buf = [0u8; 20];
        let mut sink = SliceSink::new(&mut buf[..window]);
        let progress = utf16_to_utf8::<Baseline, _>(rest, &mut sink, &options).unwrap();
        refilled.extend_from_slice(sink.written());
        rest = &rest[progress.read..];
        if !progress.output_full {
            break;
        }
    }
    assert_eq!(refilled, lossy);
});
