use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{
    Axis, AxisOrientation, Dataset, LinearScale, PlotArea, Polyline, SeriesKind, TimeScale,
    Viewport,
};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTracker, TrackedSeries};
use crate::render::Renderer;

use super::{ChartConfig, SeriesStyle};

/// Scale, path and axis of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayer {
    pub kind: SeriesKind,
    pub value_scale: LinearScale,
    pub polyline: Polyline,
    pub axis: Axis,
    pub style: SeriesStyle,
}

/// Geometry derived from a config and a dataset.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartLayout {
    pub(super) plot: PlotArea,
    pub(super) time_scale: TimeScale,
    pub(super) time_axis: Axis,
    pub(super) series: IndexMap<SeriesKind, SeriesLayer>,
}

impl ChartLayout {
    fn build(config: &ChartConfig, dataset: &Dataset) -> ChartResult<Self> {
        let plot = config.plot_area()?;
        let records = dataset.records();

        let time_scale = TimeScale::from_extent(records.iter().map(|r| r.year), plot.width)?;
        let time_axis = Axis::bottom_time(time_scale, config.time_tick_count, plot.height);

        let mut series = IndexMap::with_capacity(SeriesKind::ALL.len());
        for kind in SeriesKind::ALL {
            let (max_value, orientation, translate) = match kind {
                SeriesKind::Co2 => (dataset.max_co2(), AxisOrientation::Left, (0.0, 0.0)),
                SeriesKind::Population => (
                    dataset.max_population() as f64,
                    AxisOrientation::Right,
                    (plot.width, 0.0),
                ),
            };
            let value_scale = LinearScale::zero_based(max_value, plot.height)?;
            let polyline = Polyline::project(records, time_scale, value_scale, kind)?;
            let axis = Axis::linear(
                orientation,
                value_scale,
                config.value_tick_count,
                translate,
                Some(kind.css_class()),
            );
            trace!(
                series = kind.name(),
                max_value,
                path_length = polyline.total_length(),
                "built series layer"
            );
            series.insert(
                kind,
                SeriesLayer {
                    kind,
                    value_scale,
                    polyline,
                    axis,
                    style: config.series_style(kind),
                },
            );
        }

        Ok(Self {
            plot,
            time_scale,
            time_axis,
            series,
        })
    }
}

/// Dual-axis chart facade consumed by host applications.
///
/// Owns the dataset, the derived scales and paths, the hover overlay state
/// and the renderer the frames are handed to.
pub struct EmissionsChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) dataset: Dataset,
    pub(super) layout: ChartLayout,
    pub(super) hover: HoverTracker,
}

impl<R: Renderer> EmissionsChart<R> {
    pub fn new(renderer: R, config: ChartConfig, dataset: Dataset) -> ChartResult<Self> {
        config.validate()?;
        let layout = ChartLayout::build(&config, &dataset)?;
        let hover = HoverTracker::new(layout.plot, config.label_decimals);
        debug!(
            records = dataset.len(),
            plot_width = layout.plot.width,
            plot_height = layout.plot.height,
            "chart initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            layout,
            hover,
        })
    }

    /// Replaces the dataset and rebuilds every scale and path.
    ///
    /// The hover overlay is reset to hidden.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        let layout = ChartLayout::build(&self.config, &dataset)?;
        debug!(records = dataset.len(), "dataset replaced");
        self.hover = HoverTracker::new(layout.plot, self.config.label_decimals);
        self.layout = layout;
        self.dataset = dataset;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.layout.plot
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.layout.time_scale
    }

    #[must_use]
    pub fn time_axis(&self) -> &Axis {
        &self.layout.time_axis
    }

    #[must_use]
    pub fn series_layer(&self, kind: SeriesKind) -> Option<&SeriesLayer> {
        self.layout.series.get(&kind)
    }

    pub fn series_layers(&self) -> impl Iterator<Item = &SeriesLayer> {
        self.layout.series.values()
    }

    #[must_use]
    pub fn value_scale(&self, kind: SeriesKind) -> Option<LinearScale> {
        self.series_layer(kind).map(|layer| layer.value_scale)
    }

    #[must_use]
    pub fn polyline(&self, kind: SeriesKind) -> Option<&Polyline> {
        self.series_layer(kind).map(|layer| &layer.polyline)
    }

    #[must_use]
    pub fn hover_state(&self) -> &HoverState {
        self.hover.state()
    }

    /// Shows the guide line, markers and labels.
    pub fn pointer_enter(&mut self) {
        self.hover.on_pointer_enter();
    }

    /// Hides the guide line, markers and labels.
    pub fn pointer_leave(&mut self) {
        self.hover.on_pointer_leave();
    }

    /// Tracks a pointer given in plot-area coordinates.
    ///
    /// Returns `false` when the pointer is outside the plot.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let tracked = self.layout.series.values().map(|layer| TrackedSeries {
            kind: layer.kind,
            polyline: &layer.polyline,
            value_scale: layer.value_scale,
        });
        self.hover.on_pointer_move(x, y, tracked)
    }

    /// Tracks a pointer given in outer SVG coordinates.
    pub fn pointer_move_svg(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let margins = self.config.margins;
        self.pointer_move(x - margins.left, y - margins.top)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
