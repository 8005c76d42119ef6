//! Benchmarks for lfsrcrypt register and cipher operations.
//!
//! Measures single-step cost, full-period runs across register widths,
//! and XOR combination throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lfsrcrypt::{xor_combine, Lfsr, LfsrConfig, StreamCipher};

/// Maximal-length tap sets keyed by width.
const MAXIMAL_TAPS: [(u32, &[u32]); 3] = [(10, &[0, 7]), (16, &[0, 2, 3, 5]), (20, &[0, 3])];

/// Benchmarks a single `step()` on the reference register.
fn bench_step(c: &mut Criterion) {
    let mut lfsr = LfsrConfig::default().build().unwrap();
    c.bench_function("step", |b| {
        b.iter(|| black_box(lfsr.step()));
    });
}

/// Benchmarks `run_until_period()` across widths.
///
/// Period grows as `2^width - 1`, so this shows the linear cost of
/// empirical recurrence detection.
fn bench_run_until_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_until_period");
    group.sample_size(20);

    for &(width, taps) in MAXIMAL_TAPS.iter() {
        let mut lfsr = Lfsr::new(1, width, taps).unwrap();
        group.throughput(Throughput::Elements((1u64 << width) - 1));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| lfsr.run_until_period(black_box(512)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks `xor_combine()` over the default 512-bit keystream.
fn bench_xor_combine(c: &mut Criterion) {
    let cipher = StreamCipher::from_config(&LfsrConfig::default()).unwrap();
    let data = vec![true; cipher.keystream().len()];

    let mut group = c.benchmark_group("xor_combine");
    group.throughput(Throughput::Elements(data.len() as u64));
    group.bench_function("512_bits", |b| {
        b.iter(|| xor_combine(black_box(&data), black_box(cipher.keystream())).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_step, bench_run_until_period, bench_xor_combine);
criterion_main!(benches);
