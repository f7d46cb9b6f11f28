//! The three fixed visual presets used by the cheatsheet layout.
//!
//! All spacing values are given in points (the unit the presets were designed
//! in) and converted to the millimetre units used by `genpdf` through
//! [`pt_to_mm`].

use genpdf::style::{Color, Style};
use genpdf::{Margins, Mm};

const MM_PER_INCH: f64 = 25.4;
const PT_PER_INCH: f64 = 72.0;

/// Converts a length in typographic points to millimetres.
pub fn pt_to_mm(points: f64) -> Mm {
    Mm::from(printpdf::Mm(points * MM_PER_INCH / PT_PER_INCH))
}

/// Width of a US letter page in millimetres.
pub const LETTER_WIDTH_MM: f64 = 215.9;
/// Height of a US letter page in millimetres.
pub const LETTER_HEIGHT_MM: f64 = 279.4;

/// Page margin applied on all four sides (half an inch).
pub fn page_margins() -> Margins {
    let margin = MM_PER_INCH / 2.0;
    Margins::trbl(margin, margin, margin, margin)
}

/// Ink color of the document title.
pub const TITLE_COLOR: Color = Color::Rgb(0x1a, 0x1a, 0x2e);
/// Ink color of section headings.
pub const HEADING_COLOR: Color = Color::Rgb(0x16, 0x21, 0x3e);
/// Background tint drawn behind section headings.
pub const HEADING_BACKGROUND: Color = Color::Rgb(0xe8, 0xe8, 0xe8);

const TITLE_FONT_SIZE: u8 = 20;
const HEADING_FONT_SIZE: u8 = 12;
const ITEM_FONT_SIZE: u8 = 9;

// ReportLab-style leading: 12pt lines on a 9pt font.
const ITEM_LINE_SPACING: f64 = 12.0 / 9.0;

/// Style preset for the document title.
pub fn title() -> Style {
    let mut style = Style::new().with_font_size(TITLE_FONT_SIZE).with_color(TITLE_COLOR);
    style.set_bold();
    style
}

/// Style preset for section heading text.
pub fn heading() -> Style {
    let mut style = Style::new()
        .with_font_size(HEADING_FONT_SIZE)
        .with_color(HEADING_COLOR);
    style.set_bold();
    style
}

/// Style preset for bullet items.
pub fn item() -> Style {
    Style::new()
        .with_font_size(ITEM_FONT_SIZE)
        .with_line_spacing(ITEM_LINE_SPACING)
}

/// Vertical gap between the title block and the first section.
pub fn title_gap() -> Mm {
    pt_to_mm(6.0)
}

/// Vertical space inserted before each section heading.
pub fn heading_space_before() -> Mm {
    pt_to_mm(10.0)
}

/// Vertical space inserted after each section heading.
pub fn heading_space_after() -> Mm {
    pt_to_mm(6.0)
}

/// Inner padding of the heading bar.
pub fn heading_padding() -> Mm {
    pt_to_mm(4.0)
}

/// Trailing gap after a section's items.
pub fn section_gap() -> Mm {
    pt_to_mm(6.0)
}

/// Margins applied around each bullet paragraph (2pt above and below, 12pt
/// left indent).
pub fn item_margins() -> Margins {
    Margins::trbl(pt_to_mm(2.0), 0.0, pt_to_mm(2.0), pt_to_mm(12.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_conversion_matches_inch_definition() {
        // 72pt is one inch.
        let mm: printpdf::Mm = pt_to_mm(72.0).into();
        assert!((mm.0 - 25.4).abs() < 1e-9);
    }

    #[test]
    fn presets_reflect_fixed_descriptors() {
        assert_eq!(title().font_size(), 20);
        assert!(title().is_bold());
        assert_eq!(heading().color(), Some(HEADING_COLOR));
        assert_eq!(item().font_size(), 9);
        assert!(!item().is_bold());
    }
}
