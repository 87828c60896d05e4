use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::primitives::format_coordinate;
use crate::core::{LinearScale, PlotArea, Point, Polyline, SeriesKind, find_point_at_x};
use crate::error::ChartResult;

/// Per-series marker and value label under the pointer column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReadout {
    pub series: SeriesKind,
    /// Marker centre: pointer x, path y.
    pub marker: Point,
    /// Arc length along the series path where the marker was found.
    pub path_length: f64,
    pub value: f64,
    pub label: String,
}

/// Public hover state exposed to host applications.
///
/// Leaving the plot only hides the overlay; the last readouts are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HoverState {
    pub visible: bool,
    pub pointer: Option<Point>,
    pub readouts: SmallVec<[SeriesReadout; 2]>,
}

impl HoverState {
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }

    /// Vertical guide line spanning the plot at the pointer column.
    #[must_use]
    pub fn guide_path(&self, plot_height: f64) -> Option<String> {
        let pointer = self.pointer?;
        let x = format_coordinate(pointer.x);
        Some(format!(
            "M{x},{} {x},0",
            format_coordinate(plot_height)
        ))
    }

    #[must_use]
    pub fn readout(&self, series: SeriesKind) -> Option<&SeriesReadout> {
        self.readouts.iter().find(|readout| readout.series == series)
    }
}

/// Series geometry the tracker searches on each pointer move.
#[derive(Debug, Clone, Copy)]
pub struct TrackedSeries<'a> {
    pub kind: SeriesKind,
    pub polyline: &'a Polyline,
    pub value_scale: LinearScale,
}

/// Pointer-driven overlay state machine for the plot rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTracker {
    plot: PlotArea,
    label_decimals: usize,
    state: HoverState,
}

impl HoverTracker {
    #[must_use]
    pub fn new(plot: PlotArea, label_decimals: usize) -> Self {
        Self {
            plot,
            label_decimals,
            state: HoverState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &HoverState {
        &self.state
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    pub fn on_pointer_enter(&mut self) {
        self.state.visible = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.state.visible = false;
    }

    /// Updates the guide line and readouts for a pointer in plot coordinates.
    ///
    /// A pointer outside the plot rectangle hides the overlay and returns
    /// `Ok(false)` without touching the readouts.
    pub fn on_pointer_move<'a, I>(&mut self, x: f64, y: f64, series: I) -> ChartResult<bool>
    where
        I: IntoIterator<Item = TrackedSeries<'a>>,
    {
        if !self.plot.contains(x, y) {
            self.on_pointer_leave();
            return Ok(false);
        }

        let mut readouts = SmallVec::new();
        for tracked in series {
            let hit = find_point_at_x(tracked.polyline, x)?;
            let value = tracked.value_scale.invert(hit.point.y)?;
            readouts.push(SeriesReadout {
                series: tracked.kind,
                marker: Point::new(x, hit.point.y),
                path_length: hit.length,
                value,
                label: format!("{value:.prec$}", prec = self.label_decimals),
            });
        }

        trace!(x, y, readouts = readouts.len(), "pointer move");
        self.state.pointer = Some(Point::new(x, y));
        self.state.readouts = readouts;
        Ok(true)
    }
}
