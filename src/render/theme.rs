use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Day/night selector supplied by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

/// Colors for everything the engine draws besides the series themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    /// Text color for the tick labels; the host draws the text from
    /// `RenderFrame::value_ticks` and `index_ticks`.
    pub label: Color,
    pub grid_line: Color,
    pub zero_line: Color,
    pub hover_ruler: Color,
    pub preview_mask: Color,
    pub preview_frame: Color,
}

impl Theme {
    pub const DAY: Self = Self {
        background: Color::rgb8(0xff, 0xff, 0xff),
        label: Color::rgb8(0x96, 0xa2, 0xaa),
        grid_line: Color::rgb8(0xf2, 0xf4, 0xf5),
        zero_line: Color::rgb8(0xec, 0xf0, 0xf3),
        hover_ruler: Color::rgb8(0xdf, 0xe6, 0xeb),
        preview_mask: Color::rgb8(0xee, 0xf5, 0xf9).with_alpha(0.7),
        preview_frame: Color::rgb8(0x44, 0x99, 0xbb).with_alpha(0.2),
    };

    pub const NIGHT: Self = Self {
        background: Color::rgb8(0x24, 0x2f, 0x3e),
        label: Color::rgb8(0x54, 0x67, 0x78),
        grid_line: Color::rgb8(0x29, 0x35, 0x44),
        zero_line: Color::rgb8(0x31, 0x3d, 0x4d),
        hover_ruler: Color::rgb8(0x3b, 0x4a, 0x5a),
        preview_mask: Color::rgb8(0x1f, 0x29, 0x36).with_alpha(0.7),
        preview_frame: Color::rgb8(0x44, 0x99, 0xbb).with_alpha(0.2),
    };

    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Day => Self::DAY,
            ThemeMode::Night => Self::NIGHT,
        }
    }

    pub fn validate(self) -> crate::error::ChartResult<()> {
        for color in [
            self.background,
            self.label,
            self.grid_line,
            self.zero_line,
            self.hover_ruler,
            self.preview_mask,
            self.preview_frame,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DAY
    }
}
