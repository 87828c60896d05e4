use std::fmt::Write;

use tracing::debug;

use crate::core::primitives::format_coordinate as num;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RenderFrame, RenderLayer, Renderer,
    TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes frames into standalone SVG documents.
///
/// The last rendered document is kept until the next `render` call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::with_capacity(8 * 1024);
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{}" height="{}">"#,
            frame.viewport.width, frame.viewport.height
        );
        let _ = writeln!(
            out,
            r#"<g transform="translate({}, {})">"#,
            num(frame.origin.0),
            num(frame.origin.1)
        );
        for layer in &frame.layers {
            write_layer(&mut out, layer);
        }
        out.push_str("</g>\n</svg>\n");

        debug!(
            layers = frame.layers.len(),
            bytes = out.len(),
            "rendered svg document"
        );
        self.document = out;
        Ok(())
    }
}

fn write_layer(out: &mut String, layer: &RenderLayer) {
    out.push_str("<g");
    if let Some(class) = &layer.class {
        let _ = write!(out, r#" class="{}""#, xml_escape(class));
    }
    if layer.translate != (0.0, 0.0) {
        let _ = write!(
            out,
            r#" transform="translate({}, {})""#,
            num(layer.translate.0),
            num(layer.translate.1)
        );
    }
    out.push_str(">\n");

    for path in &layer.paths {
        write_path(out, path);
    }
    for line in &layer.lines {
        write_line(out, line);
    }
    for circle in &layer.circles {
        write_circle(out, circle);
    }
    for text in &layer.texts {
        write_text(out, text);
    }
    out.push_str("</g>\n");
}

fn write_path(out: &mut String, path: &PathPrimitive) {
    out.push_str("<path");
    if let Some(class) = &path.class {
        let _ = write!(out, r#" class="{}""#, xml_escape(class));
    }
    let _ = writeln!(
        out,
        r#" fill="none" stroke="{}" stroke-width="{}" opacity="{}" d="{}"/>"#,
        path.color.to_css(),
        num(path.stroke_width),
        num(path.opacity),
        xml_escape(&path.data)
    );
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    let _ = writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        line.color.to_css(),
        num(line.stroke_width)
    );
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) {
    out.push_str("<circle");
    if let Some(class) = &circle.class {
        let _ = write!(out, r#" class="{}""#, xml_escape(class));
    }
    let _ = writeln!(
        out,
        r#" cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        circle.color.to_css(),
        num(circle.stroke_width),
        num(circle.opacity)
    );
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    out.push_str("<text");
    if let Some(class) = &text.class {
        let _ = write!(out, r#" class="{}""#, xml_escape(class));
    }
    let _ = write!(
        out,
        r#" x="{}" y="{}" fill="{}" font-size="{}" text-anchor="{}""#,
        num(text.x),
        num(text.y),
        text.color.to_css(),
        num(text.font_size_px),
        text.h_align.text_anchor()
    );
    if text.dy_em != 0.0 {
        let _ = write!(out, r#" dy="{}em""#, num(text.dy_em));
    }
    if text.opacity < 1.0 {
        let _ = write!(out, r#" opacity="{}""#, num(text.opacity));
    }
    let _ = writeln!(out, ">{}</text>", xml_escape(&text.text));
}

/// Escapes the five XML special characters for text and attribute values.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_escape_covers_markup_characters() {
        assert_eq!(xml_escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
