use emissions_chart::api::{ChartConfig, EmissionsChart};
use emissions_chart::core::{
    Dataset, EmissionsRecord, LinearScale, Polyline, SeriesKind, TimeScale, find_point_at_x,
};
use emissions_chart::render::{NullRenderer, SvgRenderer};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_dataset(count: i32) -> Dataset {
    let records = (0..count)
        .map(|i| {
            let population = 1_000_000_000 + u64::from(i.unsigned_abs()) * 3_000_000;
            let co2 = 5.0 + f64::from(i) * 0.01 + if i % 2 == 0 { 0.3 } else { -0.3 };
            EmissionsRecord::new(1_000 + i, population, co2).expect("valid generated record")
        })
        .collect();
    Dataset::new(records).expect("valid generated dataset")
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::zero_based(10_000.0, 1_080.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_path_search_6k(c: &mut Criterion) {
    let dataset = generated_dataset(6_000);
    let time_scale = TimeScale::from_extent(dataset.records().iter().map(|r| r.year), 1_920.0)
        .expect("valid time scale");
    let value_scale = LinearScale::zero_based(dataset.max_co2(), 1_080.0).expect("valid scale");
    let polyline = Polyline::project(dataset.records(), time_scale, value_scale, SeriesKind::Co2)
        .expect("projection should succeed");

    c.bench_function("path_search_6k", |b| {
        b.iter(|| {
            let _ = find_point_at_x(black_box(&polyline), black_box(1_234.5))
                .expect("search should succeed");
        })
    });
}

fn bench_svg_render_6k(c: &mut Criterion) {
    let config = ChartConfig::default();
    let mut chart = EmissionsChart::new(SvgRenderer::new(), config, generated_dataset(6_000))
        .expect("chart init");
    chart.pointer_enter();
    chart.pointer_move(400.0, 200.0).expect("pointer move");

    c.bench_function("svg_render_6k", |b| {
        b.iter(|| {
            chart.render().expect("render should succeed");
        })
    });
}

fn bench_snapshot_json_6k(c: &mut Criterion) {
    let chart = EmissionsChart::new(
        NullRenderer::default(),
        ChartConfig::default(),
        generated_dataset(6_000),
    )
    .expect("chart init");

    c.bench_function("snapshot_json_6k", |b| {
        b.iter(|| {
            let _ = chart
                .snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_path_search_6k,
    bench_svg_render_6k,
    bench_snapshot_json_6k
);
criterion_main!(benches);
