//! Style and theming.

use crate::render::Color;

/// Visual theme for charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background behind the chart.
    pub background: Color,
    /// Stroke color of the trend line.
    pub accent: Color,
    /// Area fill color at the top of the gradient, near the line.
    pub fill_top: Color,
    /// Area fill color at the baseline.
    pub fill_bottom: Color,
    /// Dashed reference line color.
    pub reference: Color,
    /// Scrub marker fill.
    pub marker: Color,
}

impl Theme {
    /// Light theme.
    pub fn light() -> Self {
        Self::from_accent(Color::new(0.0, 0.48, 1.0, 1.0), Color::WHITE)
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self::from_accent(
            Color::new(0.2, 0.75, 0.95, 1.0),
            Color::new(0.09, 0.09, 0.11, 1.0),
        )
    }

    /// Derive a theme from an accent color.
    ///
    /// The area gradient fades the accent from 0.3 alpha at the line down to
    /// 0.09 at the baseline; the reference line is mid gray.
    pub fn from_accent(accent: Color, background: Color) -> Self {
        Self {
            background,
            accent,
            fill_top: accent.with_alpha(0.3),
            fill_bottom: accent.with_alpha(0.09),
            reference: Color::new(0.5, 0.5, 0.5, 0.5),
            marker: accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
