//! Custom element implementations built on top of `genpdf` primitives.
//!
//! This module adds the two building blocks the upstream crate does not ship
//! with: a full-width heading bar with a background tint and border, and a
//! fixed-height vertical spacer.

use genpdf::error::Error;
use genpdf::style::{Color, Style, StyledString};
use genpdf::{render, Mm, Position, RenderResult, Size};

use crate::styles;

/// Distance between the horizontal strokes that emulate the bar fill.
const FILL_STROKE_STEP_MM: f64 = 0.3;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// A single line of styled text on a full-width tinted, bordered bar.
///
/// `genpdf` has no filled-rectangle primitive, so the tint is emulated by
/// drawing closely spaced horizontal strokes before the text is printed.  The
/// element reports `has_more` when the bar does not fit into the remaining
/// page area, which makes the layout engine retry it on a fresh page.
pub struct TintedHeading {
    text: String,
    style: Style,
    background: Color,
    border: Color,
    padding: Mm,
}

impl TintedHeading {
    /// Creates a heading bar with the crate's section heading preset.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: styles::heading(),
            background: styles::HEADING_BACKGROUND,
            border: styles::HEADING_COLOR,
            padding: styles::heading_padding(),
        }
    }

    /// Overrides the text style and returns the updated element.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Overrides the tint and border colors and returns the updated element.
    pub fn with_colors(mut self, background: Color, border: Color) -> Self {
        self.background = background;
        self.border = border;
        self
    }

    /// Overrides the inner padding and returns the updated element.
    pub fn with_padding(mut self, padding: Mm) -> Self {
        self.padding = padding;
        self
    }
}

impl genpdf::Element for TintedHeading {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut string = StyledString::new(self.text.clone(), self.style);
        string.style = style.and(string.style);

        let line_height = string.style.line_height(&context.font_cache);
        let bar_height = line_height + self.padding + self.padding;
        let bar_width = area.size().width;

        let mut result = RenderResult::default();
        if bar_height > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let fill_style = Style::new().with_color(self.background);
        let step = mm_from_f64(FILL_STROKE_STEP_MM);
        let mut y = Mm::default();
        while y < bar_height {
            area.draw_line(
                vec![Position::new(0, y), Position::new(bar_width, y)],
                fill_style,
            );
            y += step;
        }

        let border_style = Style::new().with_color(self.border);
        area.draw_line(
            vec![
                Position::new(0, 0),
                Position::new(bar_width, 0),
                Position::new(bar_width, bar_height),
                Position::new(0, bar_height),
                Position::new(0, 0),
            ],
            border_style,
        );

        if let Some(mut section) =
            area.text_section(&context.font_cache, Position::new(self.padding, self.padding), string.style)
        {
            section.print_str(&string.s, string.style)?;
        } else {
            result.has_more = true;
            return Ok(result);
        }

        result.size = Size::new(bar_width, bar_height);
        area.add_offset(Position::new(0, bar_height));

        Ok(result)
    }
}

/// A fixed-height vertical spacer.
///
/// The height is clamped to the remaining area so a spacer at the bottom of a
/// page is swallowed instead of forcing an endless sequence of page breaks.
pub struct VSpace {
    height: Mm,
}

impl VSpace {
    /// Creates a spacer with the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }
}

impl genpdf::Element for VSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}
