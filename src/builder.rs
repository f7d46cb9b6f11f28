//! Assembly of the cheatsheet flow and rendering entry points.

use std::io::Write;
use std::path::{Path, PathBuf};

use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::error::Error;
use genpdf::{Alignment, Document, Margins, SimplePageDecorator, Size};
use log::debug;

use crate::elements::{TintedHeading, VSpace};
use crate::fonts;
use crate::model::Section;
use crate::styles;

/// Builder for cheatsheet documents pre-configured with the crate presets.
///
/// The builder owns the title and the ordered section list and turns them
/// into a flat flow of `genpdf` elements: one title paragraph, then per
/// section a tinted heading bar followed by one indented bullet paragraph per
/// item, with fixed spacers in between.  Text wrapping, page breaking and PDF
/// encoding are fully delegated to the layout engine.
pub struct CheatsheetBuilder {
    title: String,
    sections: Vec<Section>,
    paper_size: Size,
    margins: Margins,
}

impl CheatsheetBuilder {
    /// Creates a builder for a cheatsheet with the given title.
    ///
    /// The title may be empty; an empty section list produces a document that
    /// contains only the title block.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            paper_size: Size::new(styles::LETTER_WIDTH_MM, styles::LETTER_HEIGHT_MM),
            margins: styles::page_margins(),
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the sections in insertion order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Appends a section and returns the updated builder.
    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Replaces the section list and returns the updated builder.
    pub fn with_sections<I>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = Section>,
    {
        self.sections = sections.into_iter().collect();
        self
    }

    /// Overrides the paper size and returns the updated builder.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Overrides the page margins and returns the updated builder.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = margins.into();
        self
    }

    /// Builds a fully assembled `genpdf::Document` ready to render.
    pub fn document(&self) -> Result<Document, Error> {
        let font_family = fonts::default_font_family()?;
        let mut document = Document::new(font_family);
        document.set_title(self.title.clone());
        document.set_paper_size(self.paper_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(self.margins);
        document.set_page_decorator(decorator);

        let mut title = Paragraph::default();
        title.push_styled(self.title.clone(), styles::title());
        title.set_alignment(Alignment::Center);
        document.push(title);
        document.push(VSpace::new(styles::title_gap()));

        let mut block_count = 2;
        for section in &self.sections {
            document.push(VSpace::new(styles::heading_space_before()));
            document.push(TintedHeading::new(section.heading()));
            document.push(VSpace::new(styles::heading_space_after()));
            block_count += 3;

            for item in section.items() {
                let mut bullet = Paragraph::default();
                bullet.push_styled(format!("\u{2022} {}", item), styles::item());
                document.push(PaddedElement::new(bullet, styles::item_margins()));
                block_count += 1;
            }

            document.push(VSpace::new(styles::section_gap()));
            block_count += 1;
        }

        debug!(
            "Assembled {} flow blocks for '{}' ({} sections)",
            block_count,
            self.title,
            self.sections.len()
        );

        Ok(document)
    }

    /// Renders the cheatsheet into an in-memory PDF byte buffer.
    pub fn render(&self) -> Result<Vec<u8>, Error> {
        let document = self.document()?;
        let mut bytes = Vec::new();
        document.render(&mut bytes)?;
        Ok(bytes)
    }

    /// Renders the cheatsheet to `path`, overwriting any existing file.
    ///
    /// The parent directory is not validated up front; a missing directory or
    /// permission failure surfaces as the layout engine's write error.  On
    /// success the path is returned unchanged.
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = path.as_ref();
        let document = self.document()?;
        document.render_to_file(path)?;
        debug!("Rendered cheatsheet to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Renders the cheatsheet into the provided writer.
    pub fn render_to(&self, writer: impl Write) -> Result<(), Error> {
        self.document()?.render(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_section_order() {
        let builder = CheatsheetBuilder::new("T")
            .add_section(Section::new("First"))
            .add_section(Section::new("Second"));
        let headings: Vec<_> = builder.sections().iter().map(Section::heading).collect();
        assert_eq!(headings, ["First", "Second"]);
    }

    #[test]
    fn with_sections_replaces_previous_list() {
        let builder = CheatsheetBuilder::new("T")
            .add_section(Section::new("Old"))
            .with_sections(vec![Section::new("New")]);
        assert_eq!(builder.sections().len(), 1);
        assert_eq!(builder.sections()[0].heading(), "New");
    }
}
