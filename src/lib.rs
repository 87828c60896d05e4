//! emissions-chart: dual-axis CO2 emissions and population line chart.
//!
//! Records are loaded from CSV, projected through one shared time scale and
//! two independent value scales, and drawn as two polylines with their own
//! axes. A headless hover tracker locates, for a pointer column, the point on
//! each rendered path underneath it and reports the inverse-scaled value.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, EmissionsChart};
pub use error::{ChartError, ChartResult};
