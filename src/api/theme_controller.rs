use tracing::debug;

use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::{Renderer, Theme, ThemeMode};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Switches between the built-in day and night palettes.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> ChartResult<()> {
        self.config.theme_mode = mode;
        self.set_theme(Theme::for_mode(mode))
    }

    /// Installs a custom palette and redraws in place.
    ///
    /// Running transitions keep going; only colors change.
    pub fn set_theme(&mut self, theme: Theme) -> ChartResult<()> {
        theme.validate()?;
        if theme == self.theme {
            return Ok(());
        }

        self.theme = theme;
        debug!(mode = ?self.config.theme_mode, "theme changed");
        self.emit_chart_event(ChartEvent::ThemeChanged);
        self.render_current()
    }
}
