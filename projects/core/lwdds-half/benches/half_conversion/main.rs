use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lwdds_half::{floats_to_half_bits, to_f32};
use std::hint::black_box;

// Helper to generate pixel-like samples spanning the flush, normal and clamp ranges
fn generate_test_data(num_floats: usize) -> Vec<f32> {
    (0..num_floats)
        .map(|i| match i % 4 {
            0 => i as f32 * 0.001,
            1 => -(i as f32) * 0.25,
            2 => 1.0e-6,
            _ => 70000.0 + i as f32,
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Half Float Conversion");

    // One RGBA pixel is 4 floats; sizes cover a 16x16 up to a 256x256 texture.
    for size in [1024, 16384, 262144].iter() {
        let input = generate_test_data(*size);
        let mut output = vec![0u16; input.len()];

        group.throughput(Throughput::Bytes((*size * 4) as u64));

        group.bench_with_input(BenchmarkId::new("f32_to_half", size), &size, |b, &_size| {
            b.iter(|| floats_to_half_bits(black_box(&input), black_box(&mut output)));
        });

        floats_to_half_bits(&input, &mut output);
        group.bench_with_input(BenchmarkId::new("half_to_f32", size), &size, |b, &_size| {
            b.iter(|| {
                output
                    .iter()
                    .map(|bits| to_f32(black_box(*bits)))
                    .fold(0.0_f32, |acc, value| acc + value)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
