use serde::{Deserialize, Serialize};

use crate::core::primitives::format_coordinate;
use crate::core::{LinearScale, TimeScale};

pub const AXIS_TICK_SIZE_INNER: f64 = 6.0;
pub const AXIS_TICK_SIZE_OUTER: f64 = 6.0;
pub const AXIS_TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    /// Direction ticks extend away from the plot: `-1` for left, `1` otherwise.
    #[must_use]
    pub fn direction(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Position along the axis in plot pixels.
    pub offset: f64,
    pub label: String,
}

/// Axis model: tick positions and labels plus the placement of the axis group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    /// Translation of the axis group inside the plot area.
    pub translate: (f64, f64),
    pub class: Option<String>,
}

impl Axis {
    /// Year axis placed under the plot.
    #[must_use]
    pub fn bottom_time(scale: TimeScale, tick_count: usize, plot_height: f64) -> Self {
        let ticks = scale
            .year_ticks(tick_count)
            .into_iter()
            .filter_map(|date| {
                let offset = scale.map(date).ok()?;
                Some(AxisTick {
                    offset,
                    label: TimeScale::format_tick(date),
                })
            })
            .collect();

        Self {
            orientation: AxisOrientation::Bottom,
            range: scale.range(),
            ticks,
            translate: (0.0, plot_height),
            class: None,
        }
    }

    /// Value axis on the left or right edge of the plot.
    #[must_use]
    pub fn linear(
        orientation: AxisOrientation,
        scale: LinearScale,
        tick_count: usize,
        translate: (f64, f64),
        class: Option<&str>,
    ) -> Self {
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .filter_map(|value| {
                let offset = scale.map(value).ok()?;
                Some(AxisTick {
                    offset,
                    label: scale.format_tick(value, tick_count),
                })
            })
            .collect();

        Self {
            orientation,
            range: scale.range(),
            ticks,
            translate,
            class: class.map(str::to_owned),
        }
    }

    /// Label offset from the axis line along the tick direction.
    #[must_use]
    pub fn label_spacing(&self) -> f64 {
        AXIS_TICK_SIZE_INNER.max(0.0) + AXIS_TICK_PADDING
    }

    /// Domain line with outer ticks at both ends, offset by half a pixel for
    /// crisp strokes.
    #[must_use]
    pub fn domain_path(&self) -> String {
        let k = self.orientation.direction();
        let outer = format_coordinate(k * AXIS_TICK_SIZE_OUTER);
        let range0 = format_coordinate(self.range.0 + 0.5);
        let range1 = format_coordinate(self.range.1 + 0.5);
        if self.orientation.is_vertical() {
            format!("M{outer},{range0}H0.5V{range1}H{outer}")
        } else {
            format!("M{range0},{outer}V0.5H{range1}V{outer}")
        }
    }
}
