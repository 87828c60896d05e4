use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_layer_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_layer_count = frame.layers.len();
        self.last_path_count = frame.layers.iter().map(|layer| layer.paths.len()).sum();
        self.last_text_count = frame.layers.iter().map(|layer| layer.texts.len()).sum();
        self.render_count += 1;
        Ok(())
    }
}
