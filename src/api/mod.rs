mod config;
mod engine;
mod engine_snapshot;
mod render_frame_builder;

pub use config::{AxisTitles, ChartConfig, SeriesStyle};
pub use engine::{EmissionsChart, SeriesLayer};
pub use engine_snapshot::{ChartSnapshot, SeriesSnapshot};
pub use render_frame_builder::{
    CO2_AXIS_LAYER, HOVER_LAYER, LINES_LAYER, POPULATION_AXIS_LAYER, TIME_AXIS_LAYER,
    TITLES_LAYER,
};
