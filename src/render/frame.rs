use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, TextPrimitive};

/// Named group of primitives sharing one translation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderLayer {
    pub class: Option<String>,
    pub translate: (f64, f64),
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderLayer {
    #[must_use]
    pub fn new(class: Option<&str>, translate: (f64, f64)) -> Self {
        Self {
            class: class.map(str::to_owned),
            translate,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.translate.0.is_finite() || !self.translate.1.is_finite() {
            return Err(ChartError::InvalidData(
                "layer translation must be finite".to_owned(),
            ));
        }
        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.paths.len() + self.lines.len() + self.circles.len() + self.texts.len()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers are drawn in order inside a chart group translated by `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub origin: (f64, f64),
    pub layers: Vec<RenderLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, origin: (f64, f64)) -> Self {
        Self {
            viewport,
            origin,
            layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn push_layer(&mut self, layer: RenderLayer) {
        self.layers.push(layer);
    }

    #[must_use]
    pub fn layer(&self, class: &str) -> Option<&RenderLayer> {
        self.layers
            .iter()
            .find(|layer| layer.class.as_deref() == Some(class))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.primitive_count() == 0)
    }
}
