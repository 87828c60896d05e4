use crate::core::axis::AXIS_TICK_SIZE_INNER;
use crate::core::{Axis, AxisOrientation};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RenderFrame, RenderLayer, Renderer,
    TextHAlign, TextPrimitive,
};

use super::EmissionsChart;

const AXIS_STROKE_WIDTH: f64 = 1.0;
const BOTTOM_LABEL_DY_EM: f64 = 0.71;
const SIDE_LABEL_DY_EM: f64 = 0.32;
const TITLE_FIRST_LINE_OFFSET: f64 = 20.0;
const TITLE_SECOND_LINE_OFFSET: f64 = 37.0;

pub const TIME_AXIS_LAYER: &str = "x-axis";
pub const CO2_AXIS_LAYER: &str = "y1-axis green";
pub const POPULATION_AXIS_LAYER: &str = "y2-axis blue";
pub const LINES_LAYER: &str = "lines";
pub const TITLES_LAYER: &str = "titles";
pub const HOVER_LAYER: &str = "mouse-over-effects";

impl<R: Renderer> EmissionsChart<R> {
    /// Materializes axes, series paths, titles and the hover overlay.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let config = &self.config;
        let plot = self.layout.plot;
        let mut frame = RenderFrame::new(
            config.viewport,
            (config.margins.left, config.margins.top),
        );

        frame.push_layer(self.axis_layer(
            &self.layout.time_axis,
            TIME_AXIS_LAYER,
            config.axis_color,
        ));
        for layer in self.layout.series.values() {
            let class = match layer.axis.orientation {
                AxisOrientation::Right => POPULATION_AXIS_LAYER,
                AxisOrientation::Left | AxisOrientation::Bottom => CO2_AXIS_LAYER,
            };
            frame.push_layer(self.axis_layer(&layer.axis, class, layer.style.color));
        }

        let mut lines = RenderLayer::new(Some(LINES_LAYER), (0.0, 0.0));
        for layer in self.layout.series.values() {
            lines.paths.push(
                PathPrimitive::new(
                    layer.polyline.to_svg_path(),
                    layer.style.stroke_width,
                    layer.style.color,
                )
                .with_class(format!("line {}", layer.kind.css_class())),
            );
        }
        frame.push_layer(lines);

        let mut titles = RenderLayer::new(Some(TITLES_LAYER), (0.0, 0.0));
        let title_x = plot.width / 2.0;
        for (text, offset, class) in [
            (
                &config.titles.primary,
                TITLE_FIRST_LINE_OFFSET,
                "population-text text",
            ),
            (
                &config.titles.secondary,
                TITLE_SECOND_LINE_OFFSET,
                "co2-text text",
            ),
        ] {
            if text.is_empty() {
                continue;
            }
            titles.texts.push(
                TextPrimitive::new(
                    text.clone(),
                    title_x,
                    plot.height + config.margins.top + offset,
                    config.font_size_px * 1.4,
                    config.axis_color,
                    TextHAlign::Center,
                )
                .with_class(class),
            );
        }
        frame.push_layer(titles);

        frame.push_layer(self.hover_layer());
        frame
    }

    fn axis_layer(&self, axis: &Axis, class: &str, label_color: Color) -> RenderLayer {
        let font_size = self.config.font_size_px;
        let axis_color = self.config.axis_color;
        let mut layer = RenderLayer::new(Some(class), axis.translate);
        layer.paths.push(
            PathPrimitive::new(axis.domain_path(), AXIS_STROKE_WIDTH, axis_color)
                .with_class("domain"),
        );

        let k = axis.orientation.direction();
        let spacing = axis.label_spacing();
        for tick in &axis.ticks {
            let position = tick.offset + 0.5;
            let (line, text) = match axis.orientation {
                AxisOrientation::Bottom => (
                    LinePrimitive::new(
                        position,
                        0.0,
                        position,
                        k * AXIS_TICK_SIZE_INNER,
                        AXIS_STROKE_WIDTH,
                        axis_color,
                    ),
                    TextPrimitive::new(
                        tick.label.clone(),
                        position,
                        k * spacing,
                        font_size,
                        label_color,
                        TextHAlign::Center,
                    )
                    .with_dy_em(BOTTOM_LABEL_DY_EM),
                ),
                AxisOrientation::Left | AxisOrientation::Right => {
                    let align = if axis.orientation == AxisOrientation::Left {
                        TextHAlign::Right
                    } else {
                        TextHAlign::Left
                    };
                    (
                        LinePrimitive::new(
                            0.0,
                            position,
                            k * AXIS_TICK_SIZE_INNER,
                            position,
                            AXIS_STROKE_WIDTH,
                            axis_color,
                        ),
                        TextPrimitive::new(
                            tick.label.clone(),
                            k * spacing,
                            position,
                            font_size,
                            label_color,
                            align,
                        )
                        .with_dy_em(SIDE_LABEL_DY_EM),
                    )
                }
            };
            layer.lines.push(line);
            layer.texts.push(text);
        }
        layer
    }

    fn hover_layer(&self) -> RenderLayer {
        let config = &self.config;
        let state = self.hover.state();
        let opacity = state.opacity();
        let mut layer = RenderLayer::new(Some(HOVER_LAYER), (0.0, 0.0));

        let guide = state
            .guide_path(self.layout.plot.height)
            .unwrap_or_default();
        layer.paths.push(
            PathPrimitive::new(
                guide,
                config.guide_line_style.stroke_width,
                config.guide_line_style.color,
            )
            .with_class("mouse-line")
            .with_opacity(opacity),
        );

        for readout in &state.readouts {
            let style = config.series_style(readout.series);
            let class = format!("mouse-per-line {}", readout.series.name());
            layer.circles.push(
                CirclePrimitive::new(
                    readout.marker.x,
                    readout.marker.y,
                    config.marker_radius,
                    1.0,
                    style.color,
                )
                .with_class(class.clone())
                .with_opacity(opacity),
            );
            layer.texts.push(
                TextPrimitive::new(
                    readout.label.clone(),
                    readout.marker.x + config.label_offset.0,
                    readout.marker.y + config.label_offset.1,
                    config.font_size_px,
                    style.color,
                    TextHAlign::Left,
                )
                .with_class(class)
                .with_opacity(opacity),
            );
        }
        layer
    }
}
