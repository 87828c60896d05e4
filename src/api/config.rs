use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, SeriesKind, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const MAX_LABEL_DECIMALS: usize = 12;
const MAX_TICK_COUNT: usize = 1_000;

/// Stroke used for one series line and its hover marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl SeriesStyle {
    #[must_use]
    pub const fn new(color: Color, stroke_width: f64) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

/// Two-line caption centred under the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTitles {
    pub primary: String,
    pub secondary: String,
}

impl Default for AxisTitles {
    fn default() -> Self {
        Self {
            primary: "Global Population".to_owned(),
            secondary: "and CO2 Emissions".to_owned(),
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Every field has a default, so a partial JSON document such as
/// `{"label_decimals": 1}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_tick_count")]
    pub time_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub value_tick_count: usize,
    #[serde(default)]
    pub titles: AxisTitles,
    #[serde(default = "default_co2_style")]
    pub co2_style: SeriesStyle,
    #[serde(default = "default_population_style")]
    pub population_style: SeriesStyle,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_guide_line_style")]
    pub guide_line_style: SeriesStyle,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_label_offset")]
    pub label_offset: (f64, f64),
    #[serde(default = "default_label_decimals")]
    pub label_decimals: usize,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            time_tick_count: default_tick_count(),
            value_tick_count: default_tick_count(),
            titles: AxisTitles::default(),
            co2_style: default_co2_style(),
            population_style: default_population_style(),
            axis_color: default_axis_color(),
            guide_line_style: default_guide_line_style(),
            marker_radius: default_marker_radius(),
            label_offset: default_label_offset(),
            label_decimals: default_label_decimals(),
            font_size_px: default_font_size_px(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_counts(mut self, time_tick_count: usize, value_tick_count: usize) -> Self {
        self.time_tick_count = time_tick_count;
        self.value_tick_count = value_tick_count;
        self
    }

    #[must_use]
    pub fn with_titles(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.titles = AxisTitles {
            primary: primary.into(),
            secondary: secondary.into(),
        };
        self
    }

    #[must_use]
    pub fn with_series_style(mut self, series: SeriesKind, style: SeriesStyle) -> Self {
        match series {
            SeriesKind::Co2 => self.co2_style = style,
            SeriesKind::Population => self.population_style = style,
        }
        self
    }

    #[must_use]
    pub fn with_label_decimals(mut self, label_decimals: usize) -> Self {
        self.label_decimals = label_decimals;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    #[must_use]
    pub fn series_style(&self, series: SeriesKind) -> SeriesStyle {
        match series {
            SeriesKind::Co2 => self.co2_style,
            SeriesKind::Population => self.population_style,
        }
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;

        for (name, count) in [
            ("time", self.time_tick_count),
            ("value", self.value_tick_count),
        ] {
            if count == 0 || count > MAX_TICK_COUNT {
                return Err(ChartError::InvalidData(format!(
                    "{name} tick count must be in 1..={MAX_TICK_COUNT}"
                )));
            }
        }
        for (name, style) in [
            ("co2", self.co2_style),
            ("population", self.population_style),
            ("guide line", self.guide_line_style),
        ] {
            if !style.stroke_width.is_finite() || style.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} stroke width must be finite and > 0"
                )));
            }
            style.color.validate()?;
        }
        self.axis_color.validate()?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_offset.0.is_finite() || !self.label_offset.1.is_finite() {
            return Err(ChartError::InvalidData(
                "label offset must be finite".to_owned(),
            ));
        }
        if self.label_decimals > MAX_LABEL_DECIMALS {
            return Err(ChartError::InvalidData(format!(
                "label decimals must be <= {MAX_LABEL_DECIMALS}"
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_tick_count() -> usize {
    10
}

fn default_co2_style() -> SeriesStyle {
    SeriesStyle::new(SeriesKind::Co2.default_color(), 1.5)
}

fn default_population_style() -> SeriesStyle {
    SeriesStyle::new(SeriesKind::Population.default_color(), 1.5)
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_guide_line_style() -> SeriesStyle {
    SeriesStyle::new(Color::BLACK, 1.0)
}

fn default_marker_radius() -> f64 {
    7.0
}

fn default_label_offset() -> (f64, f64) {
    (10.0, 3.0)
}

fn default_label_decimals() -> usize {
    2
}

fn default_font_size_px() -> f64 {
    10.0
}
