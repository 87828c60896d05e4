//! Locates the point of a rendered path that sits under a pointer column.
//!
//! The search walks the path geometry, not the source records: it bisects the
//! arc length in whole-unit steps until the sampled point matches the target
//! x-coordinate or the bracket can no longer shrink. Paths are assumed to be
//! monotonic in x, which holds for year-ordered series.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::primitives::ensure_finite;
use crate::core::{Point, Polyline};
use crate::error::{ChartError, ChartResult};

/// Result of a path search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathHit {
    /// Arc length at which `point` was sampled.
    pub length: f64,
    pub point: Point,
    /// `true` when `point.x` equals the requested x exactly.
    pub exact: bool,
    pub iterations: u32,
}

/// Bisects `polyline` by arc length for the point whose x equals `target_x`.
pub fn find_point_at_x(polyline: &Polyline, target_x: f64) -> ChartResult<PathHit> {
    let target_x = ensure_finite(target_x, "search x")?;
    let sample = |length: f64| {
        polyline.point_at_length(length).ok_or_else(|| {
            ChartError::InvalidData("cannot search an empty path".to_owned())
        })
    };
    // Fail fast on empty input before entering the loop.
    sample(0.0)?;

    let mut begin = 0.0_f64;
    let mut end = polyline.total_length();
    let mut iterations = 0_u32;

    loop {
        iterations += 1;
        let target = ((begin + end) / 2.0).floor();
        let point = sample(target)?;

        if (target == end || target == begin) && point.x != target_x {
            trace!(target_x, length = target, iterations, "path search bracket closed");
            return Ok(PathHit {
                length: target,
                point,
                exact: false,
                iterations,
            });
        }

        if point.x > target_x {
            end = target;
        } else if point.x < target_x {
            begin = target;
        } else {
            trace!(target_x, length = target, iterations, "path search exact hit");
            return Ok(PathHit {
                length: target,
                point,
                exact: true,
                iterations,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(len: f64) -> Polyline {
        Polyline::new(vec![Point::new(0.0, 0.0), Point::new(len, 0.0)]).expect("polyline")
    }

    #[test]
    fn exact_integer_column_is_found() {
        let hit = find_point_at_x(&horizontal(100.0), 37.0).expect("hit");
        assert!(hit.exact);
        assert_eq!(hit.point, Point::new(37.0, 0.0));
    }

    #[test]
    fn fractional_column_stops_at_neighbouring_unit() {
        let hit = find_point_at_x(&horizontal(100.0), 37.4).expect("hit");
        assert!(!hit.exact);
        assert_eq!(hit.point.x, 37.0);
    }

    #[test]
    fn empty_path_is_rejected() {
        let empty = Polyline::new(Vec::new()).expect("empty");
        assert!(find_point_at_x(&empty, 1.0).is_err());
        assert!(find_point_at_x(&horizontal(10.0), f64::NAN).is_err());
    }
}
