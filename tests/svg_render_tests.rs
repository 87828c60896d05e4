use emissions_chart::api::{
    CO2_AXIS_LAYER, ChartConfig, EmissionsChart, LINES_LAYER, POPULATION_AXIS_LAYER,
    TIME_AXIS_LAYER, TITLES_LAYER,
};
use emissions_chart::core::Dataset;
use emissions_chart::render::{Renderer, SvgRenderer};

const CSV: &str = "year,population,co2\n2000,6000000000,20\n2010,7000000000,30\n2020,8000000000,40\n";

fn build_chart() -> EmissionsChart<SvgRenderer> {
    let dataset = Dataset::from_csv_str(CSV).expect("csv parses");
    EmissionsChart::new(SvgRenderer::new(), ChartConfig::default(), dataset).expect("chart init")
}

#[test]
fn document_has_sized_root_and_translated_chart_group() {
    let mut chart = build_chart();
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="960" height="500">"#));
    assert!(svg.contains(r#"<g transform="translate(75, 20)">"#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn series_paths_carry_line_classes_and_geometry() {
    let mut chart = build_chart();
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains(r#"<path class="line green""#));
    assert!(svg.contains(r#"<path class="line blue""#));
    assert!(svg.contains(r#"d="M0,210L"#));
    assert!(svg.contains(r#"d="M0,105L"#));
}

#[test]
fn axes_are_placed_on_three_sides() {
    let chart = build_chart();
    let frame = chart.build_frame();

    let time_axis = frame.layer(TIME_AXIS_LAYER).expect("time axis");
    assert_eq!(time_axis.translate, (0.0, 420.0));
    let labels: Vec<&str> = time_axis.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(labels.first(), Some(&"2000"));
    assert_eq!(labels.last(), Some(&"2020"));
    assert_eq!(labels.len(), 11);

    let co2_axis = frame.layer(CO2_AXIS_LAYER).expect("co2 axis");
    assert_eq!(co2_axis.translate, (0.0, 0.0));
    assert_eq!(co2_axis.texts.len(), 9);
    assert!(co2_axis.texts.iter().all(|t| t.x == -9.0));

    let population_axis = frame.layer(POPULATION_AXIS_LAYER).expect("population axis");
    assert_eq!(population_axis.translate, (785.0, 0.0));
    assert_eq!(
        population_axis.texts.last().map(|t| t.text.as_str()),
        Some("8,000,000,000")
    );
}

#[test]
fn titles_sit_below_the_time_axis() {
    let chart = build_chart();
    let frame = chart.build_frame();
    let titles = frame.layer(TITLES_LAYER).expect("titles");

    assert_eq!(titles.texts.len(), 2);
    assert_eq!(titles.texts[0].text, "Global Population");
    assert_eq!((titles.texts[0].x, titles.texts[0].y), (392.5, 460.0));
    assert_eq!(titles.texts[1].text, "and CO2 Emissions");
    assert_eq!(titles.texts[1].y, 477.0);
    assert_eq!(frame.layer(LINES_LAYER).map(|l| l.paths.len()), Some(2));
}

#[test]
fn hover_overlay_opacity_follows_pointer_state() {
    let mut chart = build_chart();
    chart.render().expect("render");
    assert!(chart.renderer().document().contains(r#"class="mouse-line" fill="none""#));
    assert!(chart.renderer().document().contains(r#"opacity="0" d="""#));

    chart.pointer_enter();
    chart.pointer_move(0.0, 10.0).expect("move");
    chart.render().expect("render");
    let svg = chart.renderer().document();
    assert!(svg.contains(r#"d="M0,420 0,0""#));
    assert!(svg.contains(r#"<circle class="mouse-per-line co2" cx="0" cy="210" r="7""#));
    assert!(svg.contains(r#"<circle class="mouse-per-line population" cx="0" cy="105""#));
    assert!(svg.contains(r#"<text class="mouse-per-line co2""#));
    assert!(svg.contains(">20.00</text>"));

    chart.pointer_leave();
    chart.render().expect("render");
    let svg = chart.renderer().document();
    assert!(svg.contains(r#"opacity="0">20.00</text>"#));
}

#[test]
fn text_content_is_xml_escaped() {
    let dataset = Dataset::from_csv_str(CSV).expect("csv parses");
    let config = ChartConfig::default().with_titles("People & <CO2>", "");
    let mut chart =
        EmissionsChart::new(SvgRenderer::new(), config, dataset).expect("chart init");
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains("People &amp; &lt;CO2&gt;"));
    assert!(!svg.contains("and CO2 Emissions"));
}

#[test]
fn invalid_frame_is_rejected_by_renderer() {
    let chart = build_chart();
    let mut frame = chart.build_frame();
    frame.origin = (f64::NAN, 0.0);

    let mut renderer = SvgRenderer::new();
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.document().is_empty());
}
