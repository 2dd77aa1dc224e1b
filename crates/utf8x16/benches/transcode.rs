//! Benchmark – whole-buffer UTF-8 <-> UTF-16 conversion
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use utf8x16::{
    Baseline, NoAsciiFastPath, Policy, SliceSink, Strict,
    convert::{ConvertOptions, utf8_to_utf16, utf16_to_utf8},
};

const PAYLOAD_LEN: usize = 64 * 1024;

/// Produce a deterministic text of roughly `target_len` UTF-8 bytes by
/// repeating `unit`.
fn make_payload(unit: &str, target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + unit.len());
    while s.len() < target_len {
        s.push_str(unit);
    }
    s
}

fn payloads() -> Vec<(&'static str, String)> {
    vec![
        ("ascii", make_payload("The quick brown fox jumps over the lazy dog. ", PAYLOAD_LEN)),
        ("latin", make_payload("Größenmaßstäbe für Übergänge, señor! ", PAYLOAD_LEN)),
        ("cjk", make_payload("東京都の天気は晴れです。", PAYLOAD_LEN)),
        ("astral", make_payload("😀🎉🦀𝄞", PAYLOAD_LEN)),
    ]
}

fn decode<P: Policy>(bytes: &[u8], out: &mut [u16]) -> usize {
    let mut sink = SliceSink::new(out);
    let progress = utf8_to_utf16::<P, _>(bytes, &mut sink, &ConvertOptions::default()).unwrap();
    assert!(!progress.output_full);
    sink.len()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_to_utf16");
    for (name, text) in payloads() {
        let bytes = text.as_bytes();
        // Never more units than bytes.
        let mut out = vec![0u16; bytes.len()];
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("baseline", name), bytes, |b, bytes| {
            b.iter(|| decode::<Baseline>(black_box(bytes), &mut out));
        });
        group.bench_with_input(BenchmarkId::new("strict", name), bytes, |b, bytes| {
            b.iter(|| decode::<Strict>(black_box(bytes), &mut out));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf16_to_utf8");
    for (name, text) in payloads() {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut out = vec![0u8; text.len()];
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("baseline", name), &units, |b, units| {
            b.iter(|| {
                let mut sink = SliceSink::new(&mut out[..]);
                utf16_to_utf8::<Baseline, _>(black_box(units), &mut sink, &ConvertOptions::default())
                    .unwrap()
                    .read
            });
        });
    }
    group.finish();
}

/// Decoding a payload without ASCII through the policy that skips the fast
/// path, to see what the shortcut check costs.
fn bench_fast_path(c: &mut Criterion) {
    let text = make_payload("東京都の天気は晴れです。", PAYLOAD_LEN);
    let mut out = vec![0u16; text.len()];
    let mut group = c.benchmark_group("ascii_fast_path");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("enabled", |b| {
        b.iter(|| decode::<Baseline>(black_box(text.as_bytes()), &mut out));
    });
    group.bench_function("skipped", |b| {
        b.iter(|| decode::<NoAsciiFastPath>(black_box(text.as_bytes()), &mut out));
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_fast_path);
criterion_main!(benches);
