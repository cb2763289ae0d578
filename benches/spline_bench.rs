use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::DVec2;
use hermite_path::{fit_hermite_path, locate_at_length_fraction, sample_path_points};
use std::hint::black_box;

/// Zickzack-Pfad mit `count` Kontrollpunkten.
fn build_zigzag_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let y = if i % 2 == 0 { 0.0 } else { 5.0 };
            DVec2::new(i as f64 * 3.0, y)
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_hermite_path");

    for &count in &[16usize, 256, 4096] {
        let points = build_zigzag_points(count);
        let slopes = vec![None; count];

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| fit_hermite_path(black_box(&points), black_box(&slopes)).unwrap())
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let points = build_zigzag_points(1024);
    let slopes = vec![None; points.len()];
    let segments = fit_hermite_path(&points, &slopes).unwrap();

    c.bench_function("sample_path_points_1024", |b| {
        b.iter(|| sample_path_points(black_box(&segments)))
    });

    c.bench_function("locate_at_length_fraction_1024", |b| {
        b.iter(|| locate_at_length_fraction(black_box(&segments), black_box(0.73)).unwrap())
    });
}

criterion_group!(benches, bench_fit, bench_sampling);
criterion_main!(benches);
