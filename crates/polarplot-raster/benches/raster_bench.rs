use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polarplot_core::Point;
use polarplot_raster::{rasterize_circle, rasterize_line, RasterConfig, SeamMode};

fn bench_line(c: &mut Criterion) {
    let config = RasterConfig::default();
    c.bench_function("rasterize_line_diagonal", |b| {
        b.iter(|| {
            rasterize_line(
                black_box(Point::new(20.0, 40.0)),
                black_box(Point::new(380.0, 420.0)),
                &config,
            )
            .map(|line| line.count())
        })
    });
}

fn bench_circle(c: &mut Criterion) {
    let local = RasterConfig::default();
    let carried = RasterConfig::default().with_seam_mode(SeamMode::Carried);

    let mut group = c.benchmark_group("rasterize_circle");
    group.bench_function("segment_local", |b| {
        b.iter(|| {
            rasterize_circle(black_box(Point::new(200.0, 200.0)), 100.0, &local)
                .map(Iterator::count)
        })
    });
    group.bench_function("carried", |b| {
        b.iter(|| {
            rasterize_circle(black_box(Point::new(200.0, 200.0)), 100.0, &carried)
                .map(Iterator::count)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_line, bench_circle);
criterion_main!(benches);
