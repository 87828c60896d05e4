use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::EmissionsChart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub value_domain: (f64, f64),
    pub path_data: String,
    pub path_length: f64,
    pub tick_labels: Vec<String>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub record_count: usize,
    pub time_domain: (NaiveDate, NaiveDate),
    pub time_tick_labels: Vec<String>,
    pub series: IndexMap<String, SeriesSnapshot>,
    pub hover: HoverState,
}

impl<R: Renderer> EmissionsChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let series = self
            .layout
            .series
            .values()
            .map(|layer| {
                (
                    layer.kind.name().to_owned(),
                    SeriesSnapshot {
                        value_domain: layer.value_scale.domain(),
                        path_data: layer.polyline.to_svg_path(),
                        path_length: layer.polyline.total_length(),
                        tick_labels: layer.axis.ticks.iter().map(|t| t.label.clone()).collect(),
                    },
                )
            })
            .collect();

        ChartSnapshot {
            viewport: self.config.viewport,
            plot: self.layout.plot,
            record_count: self.dataset.len(),
            time_domain: self.layout.time_scale.domain(),
            time_tick_labels: self
                .layout
                .time_axis
                .ticks
                .iter()
                .map(|tick| tick.label.clone())
                .collect(),
            series,
            hover: self.hover.state().clone(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
