use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use farmfp::{farmfp32, farmfp64};

fn bench_farmfp64(c: &mut Criterion) {
    let mut group = c.benchmark_group("farmfp64");
    for &size in &[4usize, 16, 32, 64, 256, 1024, 16384] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| farmfp64(black_box(data)))
        });
    }
    group.finish();
}

fn bench_farmfp32(c: &mut Criterion) {
    let mut group = c.benchmark_group("farmfp32");
    for &size in &[16usize, 256, 16384] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| farmfp32(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_farmfp64, bench_farmfp32);
criterion_main!(benches);
