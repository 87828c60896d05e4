use emissions_chart::api::{ChartConfig, ChartSnapshot, EmissionsChart};
use emissions_chart::core::Dataset;
use emissions_chart::render::NullRenderer;

const SAMPLE_CSV: &str = include_str!("../data/world_population_co2.csv");

fn build_chart() -> EmissionsChart<NullRenderer> {
    let dataset = Dataset::from_csv_str(SAMPLE_CSV).expect("sample parses");
    EmissionsChart::new(NullRenderer::default(), ChartConfig::default(), dataset)
        .expect("chart init")
}

#[test]
fn snapshot_lists_series_in_axis_order() {
    let chart = build_chart();
    let snapshot = chart.snapshot();

    let keys: Vec<&str> = snapshot.series.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["co2", "population"]);
    assert_eq!(snapshot.record_count, 27);
    assert_eq!(snapshot.series["co2"].value_domain, (0.0, 34.85));
    assert_eq!(
        snapshot.series["population"].value_domain,
        (0.0, 7_440_000_000.0)
    );
    assert_eq!(
        snapshot.time_tick_labels.first().map(String::as_str),
        Some("1990")
    );
}

#[test]
fn snapshot_json_roundtrip_includes_hover_state() {
    let mut chart = build_chart();
    chart.pointer_enter();
    chart.pointer_move(300.0, 200.0).expect("move");

    let json = chart.snapshot_json_pretty().expect("snapshot serializes");
    let restored: ChartSnapshot = serde_json::from_str(&json).expect("snapshot parses");

    assert_eq!(restored, chart.snapshot());
    assert!(restored.hover.visible);
    assert_eq!(restored.hover.readouts.len(), 2);
}

#[test]
fn render_validates_full_sample_frame() {
    let mut chart = build_chart();
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_layer_count, 6);
    assert_eq!(renderer.last_path_count, 6);
}
