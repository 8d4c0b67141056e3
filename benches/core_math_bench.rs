use chart_scrubber::api::{ChartEngine, ChartEngineConfig};
use chart_scrubber::core::{
    Dataset, PlotArea, Series, Transform, Viewport, VisibleSet, nearest_index,
};
use chart_scrubber::render::{Color, NullRenderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_dataset(samples: usize, series: usize) -> Dataset {
    let x_values = (0..samples).map(|i| i as f64 * 86_400_000.0).collect();
    let series = (0..series)
        .map(|s| {
            let values = (0..samples)
                .map(|i| ((i * (s + 3)) % 997) as f64 - 200.0)
                .collect();
            Series::new(
                format!("y{s}"),
                format!("Series {s}"),
                Color::rgb(0.2, 0.4, 0.8),
                values,
            )
        })
        .collect();
    Dataset::new(x_values, series).expect("valid generated dataset")
}

fn bench_transform_compute_10k(c: &mut Criterion) {
    let dataset = generated_dataset(10_000, 4);
    let visible = VisibleSet::all(&dataset);
    let area = PlotArea::new(0.0, 1_600.0, 700.0);

    c.bench_function("transform_compute_10k", |b| {
        b.iter(|| {
            let _ = Transform::compute(
                black_box(&dataset),
                black_box(&visible),
                black_box(0),
                black_box(9_999),
                black_box(area),
            )
            .expect("compute should succeed");
        })
    });
}

fn bench_nearest_index_10k(c: &mut Criterion) {
    let dataset = generated_dataset(10_000, 1);
    let x_values = dataset.x_values();

    c.bench_function("nearest_index_10k", |b| {
        b.iter(|| {
            let _ = nearest_index(black_box(x_values), black_box(431_000_000_000.5));
        })
    });
}

fn bench_engine_range_animation_5k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::with_dataset(
        NullRenderer::default(),
        config,
        generated_dataset(5_000, 4),
    )
    .expect("engine init");

    let mut flip = false;
    c.bench_function("engine_range_animation_5k", |b| {
        b.iter(|| {
            flip = !flip;
            let (begin, end) = if flip { (100, 2_500) } else { (3_000, 4_999) };
            engine.set_range(begin, end).expect("set range");
            while engine.tick().expect("tick") {}
        })
    });
}

criterion_group!(
    benches,
    bench_transform_compute_10k,
    bench_nearest_index_10k,
    bench_engine_range_animation_5k
);
criterion_main!(benches);
