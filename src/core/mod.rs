pub mod axis;
pub mod dataset;
pub mod line_series;
pub mod path_search;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use axis::{Axis, AxisOrientation, AxisTick};
pub use dataset::{Dataset, EmissionsRecord};
pub use line_series::{Polyline, SeriesKind};
pub use path_search::{PathHit, find_point_at_x};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Margins, PlotArea, Point, Viewport};
