use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content and keeps the last frame around so tests
/// can inspect exactly what a backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub cleared_frames: usize,
    pub last_path_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        if frame.is_cleared() {
            self.cleared_frames += 1;
        }
        self.last_path_count = frame.series_path_count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
