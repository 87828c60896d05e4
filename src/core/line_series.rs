use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::primitives::format_coordinate;
use crate::core::{EmissionsRecord, LinearScale, Point, TimeScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// The two series drawn against the shared time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    /// Plotted against the left axis.
    Co2,
    /// Plotted against the right axis.
    Population,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Co2, SeriesKind::Population];

    #[must_use]
    pub fn value_of(self, record: &EmissionsRecord) -> f64 {
        match self {
            Self::Co2 => record.co2,
            Self::Population => record.population as f64,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Co2 => "co2",
            Self::Population => "population",
        }
    }

    /// Stroke colour matching `css_class`.
    #[must_use]
    pub fn default_color(self) -> Color {
        match self {
            Self::Co2 => Color::GREEN,
            Self::Population => Color::BLUE,
        }
    }

    /// Class shared by the series line and its axis.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Co2 => "green",
            Self::Population => "blue",
        }
    }
}

/// Piecewise-linear path through projected samples.
///
/// Cumulative arc lengths are cached so `point_at_length` is a binary search
/// over segments rather than a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolylinePoints")]
pub struct Polyline {
    points: Vec<Point>,
    cumulative: Vec<f64>,
}

/// Deserialized vertices; cached lengths are always recomputed.
#[derive(Deserialize)]
struct PolylinePoints {
    points: Vec<Point>,
}

impl TryFrom<PolylinePoints> for Polyline {
    type Error = ChartError;

    fn try_from(value: PolylinePoints) -> ChartResult<Self> {
        Self::new(value.points)
    }
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> ChartResult<Self> {
        if points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "polyline vertices must be finite".to_owned(),
            ));
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (index, point) in points.iter().enumerate() {
            if index > 0 {
                total += points[index - 1].distance_to(*point);
            }
            cumulative.push(total);
        }

        Ok(Self { points, cumulative })
    }

    /// Projects one vertex per record through the shared time scale and the
    /// series' own value scale.
    pub fn project(
        records: &[EmissionsRecord],
        time_scale: TimeScale,
        value_scale: LinearScale,
        series: SeriesKind,
    ) -> ChartResult<Self> {
        let mut points = Vec::with_capacity(records.len());
        for record in records {
            let x = time_scale.map(record.year)?;
            let y = value_scale.map(series.value_of(record))?;
            points.push(Point::new(x, y));
        }
        Self::new(points)
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold((first.x, first.x), |(min, max), point| {
            (min.min(point.x), max.max(point.x))
        }))
    }

    /// Point at arc length `length`, clamped to the path ends.
    ///
    /// Returns `None` only for an empty polyline.
    #[must_use]
    pub fn point_at_length(&self, length: f64) -> Option<Point> {
        let first = *self.points.first()?;
        if self.points.len() == 1 || !(length > 0.0) {
            return Some(first);
        }
        let total = self.total_length();
        if length >= total {
            return self.points.last().copied();
        }

        // First vertex whose cumulative length reaches `length`; never 0 here.
        let end = self.cumulative.partition_point(|&walked| walked < length);
        let start = end - 1;
        let segment = self.cumulative[end] - self.cumulative[start];
        if segment == 0.0 {
            return Some(self.points[end]);
        }

        let t = (length - self.cumulative[start]) / segment;
        let (a, b) = (self.points[start], self.points[end]);
        Some(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t))
    }

    /// Compact path data (`M0,420L392.5,210`). Empty polylines produce an empty string.
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut path = String::with_capacity(self.points.len() * 24);
        for (index, point) in self.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(
                path,
                "{command}{},{}",
                format_coordinate(point.x),
                format_coordinate(point.y)
            );
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
            .expect("valid polyline")
    }

    #[test]
    fn point_at_length_walks_segments() {
        let line = polyline(&[(0.0, 0.0), (3.0, 4.0), (6.0, 4.0)]);
        assert_eq!(line.total_length(), 8.0);
        assert_eq!(line.point_at_length(5.0), Some(Point::new(3.0, 4.0)));
        assert_eq!(line.point_at_length(6.5), Some(Point::new(4.5, 4.0)));
        assert_eq!(line.point_at_length(-1.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(line.point_at_length(99.0), Some(Point::new(6.0, 4.0)));
    }

    #[test]
    fn svg_path_uses_move_then_line_commands() {
        let line = polyline(&[(0.0, 420.0), (392.5, 210.25), (785.0, 0.0)]);
        assert_eq!(line.to_svg_path(), "M0,420L392.5,210.25L785,0");
    }

    #[test]
    fn empty_polyline_has_no_points() {
        let line = Polyline::new(Vec::new()).expect("empty polyline is allowed");
        assert_eq!(line.point_at_length(0.0), None);
        assert_eq!(line.to_svg_path(), "");
    }
}
