use approx::assert_relative_eq;
use chrono::NaiveDate;
use emissions_chart::core::{LinearScale, TimeScale};

fn year(value: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(value, 1, 1).expect("valid year")
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original).expect("to pixel");
    let recovered = scale.invert(px).expect("from pixel");

    assert_relative_eq!(px, 325.0);
    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn zero_based_scale_inverts_the_vertical_axis() {
    let scale = LinearScale::zero_based(40.0, 420.0).expect("valid scale");

    assert_eq!(scale.map(0.0).expect("bottom"), 420.0);
    assert_eq!(scale.map(40.0).expect("top"), 0.0);
    assert_eq!(scale.map(20.0).expect("middle"), 210.0);
    assert_eq!(scale.invert(105.0).expect("invert"), 30.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::zero_based(0.0, 420.0).expect("zero max is allowed");

    assert_eq!(scale.map(0.0).expect("map"), 210.0);
    assert_eq!(scale.map(1_000.0).expect("map"), 210.0);
    assert_eq!(scale.ticks(10), vec![0.0]);
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::NAN, 1.0)).is_err());

    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.map(f64::NAN).is_err());
    assert!(scale.invert(f64::INFINITY).is_err());
}

#[test]
fn linear_ticks_use_round_steps_and_fixed_precision() {
    let co2 = LinearScale::zero_based(34.85, 420.0).expect("valid scale");
    let labels: Vec<String> = co2
        .ticks(10)
        .into_iter()
        .map(|value| co2.format_tick(value, 10))
        .collect();
    assert_eq!(labels, vec!["0", "5", "10", "15", "20", "25", "30"]);

    let fractional = LinearScale::zero_based(1.0, 100.0).expect("valid scale");
    assert_eq!(fractional.tick_step(10), 0.1);
    assert_eq!(fractional.format_tick(0.3, 10), "0.3");
}

#[test]
fn population_tick_labels_group_thousands() {
    let population = LinearScale::zero_based(8_000_000_000.0, 420.0).expect("valid scale");
    let ticks = population.ticks(10);

    assert_eq!(ticks.len(), 9);
    assert_eq!(population.format_tick(ticks[1], 10), "1,000,000,000");
    assert_eq!(population.format_tick(ticks[8], 10), "8,000,000,000");
}

#[test]
fn time_scale_maps_extent_onto_width() {
    let scale = TimeScale::from_extent([year(2010), year(2000), year(2020)], 785.0)
        .expect("valid time scale");

    assert_eq!(scale.domain(), (year(2000), year(2020)));
    assert_eq!(scale.map(year(2000)).expect("start"), 0.0);
    assert_relative_eq!(scale.map(year(2020)).expect("end"), 785.0);

    // 2000..2010 spans 3653 of the 7305 days.
    let middle = scale.map(year(2010)).expect("middle");
    assert_relative_eq!(middle, 785.0 * 3653.0 / 7305.0, epsilon = 1e-9);
}

#[test]
fn time_scale_invert_returns_calendar_datetime() {
    let scale = TimeScale::new((year(1990), year(2016)), (0.0, 785.0)).expect("valid scale");
    let px = scale.map(year(2003)).expect("map");
    let back = scale.invert(px).expect("invert");

    assert_eq!(back.date(), year(2003));
}

#[test]
fn time_scale_rejects_empty_extent() {
    assert!(TimeScale::from_extent(Vec::<NaiveDate>::new(), 100.0).is_err());
}

#[test]
fn year_ticks_widen_step_for_long_ranges() {
    let scale = TimeScale::new((year(1900), year(2016)), (0.0, 785.0)).expect("valid scale");
    let ticks = scale.year_ticks(10);
    let labels: Vec<String> = ticks.iter().copied().map(TimeScale::format_tick).collect();

    assert_eq!(labels.first().map(String::as_str), Some("1900"));
    assert_eq!(labels.last().map(String::as_str), Some("2010"));
    assert_eq!(labels.len(), 12);
}
