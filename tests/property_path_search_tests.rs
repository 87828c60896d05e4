use emissions_chart::core::{LinearScale, Point, Polyline, find_point_at_x};
use proptest::prelude::*;

fn monotone_polyline(steps: &[(f64, f64)]) -> Polyline {
    let mut x = 0.0;
    let points = steps
        .iter()
        .map(|&(dx, y)| {
            x += dx;
            Point::new(x, y)
        })
        .collect();
    Polyline::new(points).expect("finite polyline")
}

proptest! {
    #[test]
    fn hit_stays_within_two_arc_units_of_pointer_column(
        steps in prop::collection::vec((0.5f64..60.0, 0.0f64..420.0), 2..40),
        fraction in 0.0f64..=1.0
    ) {
        let polyline = monotone_polyline(&steps);
        let (min_x, max_x) = polyline.x_extent().expect("non-empty");
        let target_x = min_x + (max_x - min_x) * fraction;

        let hit = find_point_at_x(&polyline, target_x).expect("search");

        prop_assert!((hit.point.x - target_x).abs() <= 2.0 + 1e-9);
        prop_assert!(hit.length >= 0.0 && hit.length <= polyline.total_length());
        prop_assert_eq!(polyline.point_at_length(hit.length), Some(hit.point));
    }

    #[test]
    fn search_terminates_in_logarithmic_steps(
        steps in prop::collection::vec((0.5f64..60.0, 0.0f64..420.0), 2..40),
        target_x in -500.0f64..3_000.0
    ) {
        let polyline = monotone_polyline(&steps);
        let hit = find_point_at_x(&polyline, target_x).expect("search");

        let bound = polyline.total_length().max(1.0).log2().ceil() as u32 + 3;
        prop_assert!(hit.iterations <= bound, "{} > {}", hit.iterations, bound);
    }

    #[test]
    fn linear_scale_round_trip(
        max_value in 1e-3f64..1e12,
        height in 10.0f64..4_000.0,
        fraction in 0.0f64..=1.0
    ) {
        let scale = LinearScale::zero_based(max_value, height).expect("valid scale");
        let value = max_value * fraction;
        let pixel = scale.map(value).expect("map");
        let recovered = scale.invert(pixel).expect("invert");

        prop_assert!(pixel >= -1e-9 && pixel <= height + 1e-9);
        prop_assert!((recovered - value).abs() <= max_value * 1e-9);
    }
}
