use tracing::{debug, trace};

use crate::core::{AnimationStart, Transform};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::{RenderFrame, Renderer};

use super::ChartEngine;
use super::scene_builder::{SceneInput, build_frame};

impl<R: Renderer> ChartEngine<R> {
    /// Advances running view transitions by one step and draws the result.
    ///
    /// Hosts call this once per display refresh. Returns `true` when a frame
    /// was drawn; `is_animating` tells whether more ticks are wanted.
    pub fn tick(&mut self) -> ChartResult<bool> {
        let main = self.main_animator.tick();
        let preview = self.preview_animator.tick();
        if main.is_none() && preview.is_none() {
            return Ok(false);
        }

        self.render_current()?;
        if !self.is_animating() {
            trace!("animation finished");
        }
        Ok(true)
    }

    /// Computes fresh targets for both views and hands them to the animators.
    ///
    /// The first frame after a load is drawn right away; later changes are
    /// drawn by `tick`. With nothing visible the surface is cleared at once.
    pub(super) fn request_redraw(&mut self) -> ChartResult<()> {
        let Some(chart) = self.chart.as_ref() else {
            return Ok(());
        };
        let window = chart.range.window();
        let visible = chart.range.visible();
        let main = Transform::compute(
            &chart.dataset,
            visible,
            window.begin,
            window.end,
            self.layout.main,
        )?;
        let preview = Transform::compute(
            &chart.dataset,
            visible,
            0,
            chart.range.total(),
            self.layout.preview,
        )?;

        let (Some(main), Some(preview)) = (main, preview) else {
            return self.clear_views();
        };

        let main_start = self.main_animator.request(main);
        let preview_start = self.preview_animator.request(preview);
        if main_start == AnimationStart::Scheduled || preview_start == AnimationStart::Scheduled {
            trace!(
                steps = self.main_animator.total_steps(),
                begin = window.begin,
                end = window.end,
                "view transition scheduled"
            );
            return Ok(());
        }
        self.render_current()
    }

    /// Draws the last rendered transforms with the current selection, theme
    /// and hover state.
    pub(super) fn render_current(&mut self) -> ChartResult<()> {
        let frame = self.current_frame();
        self.renderer.render(&frame)?;
        if !frame.is_cleared() {
            self.emit_chart_event(ChartEvent::Rendered {
                animating: self.is_animating(),
            });
        }
        Ok(())
    }

    fn current_frame(&self) -> RenderFrame {
        let cleared = || RenderFrame::cleared(self.config.viewport, self.theme.background);
        let Some(chart) = self.chart.as_ref() else {
            return cleared();
        };
        if chart.range.visible().is_empty() {
            return cleared();
        }
        let (Some(main), Some(preview)) = (
            self.main_animator.last_rendered(),
            self.preview_animator.last_rendered(),
        ) else {
            return cleared();
        };

        build_frame(&SceneInput {
            dataset: &chart.dataset,
            visible: chart.range.visible(),
            layout: self.layout,
            viewport: self.config.viewport,
            theme: self.theme,
            config: self.config,
            main,
            preview,
            preview_frame: chart.range.preview_frame(),
            hover_index: self.hover.index(),
        })
    }

    fn clear_views(&mut self) -> ChartResult<()> {
        self.main_animator.cancel();
        self.preview_animator.cancel();
        if self.hover.clear() {
            self.emit_chart_event(ChartEvent::HoverCleared);
        }

        debug!("no visible series, clearing surface");
        let frame = RenderFrame::cleared(self.config.viewport, self.theme.background);
        self.renderer.render(&frame)?;
        self.emit_chart_event(ChartEvent::Cleared);
        Ok(())
    }
}
