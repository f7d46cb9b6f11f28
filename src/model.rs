//! Data structures describing the logical content of a cheatsheet.
//!
//! The types in this module form a serialization-friendly model that mirrors
//! the JSON input format: an ordered list of sections, each carrying a heading
//! and a list of bullet items.  They intentionally avoid referencing the
//! rendering crate so the values can be parsed, constructed programmatically,
//! or exchanged without pulling in layout dependencies.

use serde::Deserialize;

/// Heading used when a section object omits the `heading` key.
pub const DEFAULT_HEADING: &str = "Section";

fn default_heading() -> String {
    DEFAULT_HEADING.to_owned()
}

/// A titled group of bullet-point strings.
///
/// Sections have no identity beyond their position in the input sequence and
/// are rendered top-to-bottom in insertion order.  Headings are not required
/// to be unique.  When deserialized from JSON, a missing `heading` falls back
/// to [`DEFAULT_HEADING`] and a missing `items` list is treated as empty;
/// unknown keys are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Section {
    #[serde(default = "default_heading")]
    heading: String,
    #[serde(default)]
    items: Vec<String>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            items: Vec::new(),
        }
    }
}

impl Section {
    /// Creates a new section with the provided heading and no items.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            items: Vec::new(),
        }
    }

    /// Returns the section heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the bullet items in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Appends a bullet item and returns the updated section.
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Extends the section with multiple items and returns the updated instance.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }
}

/// Parses a JSON array of section objects.
///
/// This is the on-disk input format of the CLI: a top-level array where each
/// element may carry `heading` (string) and `items` (array of strings), both
/// optional.
pub fn sections_from_json(json: &str) -> Result<Vec<Section>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_heading_defaults_to_section() {
        let sections = sections_from_json(r#"[{"items": ["a"]}]"#).expect("parse succeeds");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading(), "Section");
        assert_eq!(sections[0].items(), ["a"]);
    }

    #[test]
    fn missing_items_defaults_to_empty() {
        let sections = sections_from_json(r#"[{"heading": "Basics"}]"#).expect("parse succeeds");
        assert_eq!(sections[0].heading(), "Basics");
        assert!(sections[0].items().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let sections = sections_from_json(r#"[{"heading": "H", "notes": 42}]"#)
            .expect("parse succeeds despite extra keys");
        assert_eq!(sections[0].heading(), "H");
    }

    #[test]
    fn order_is_preserved() {
        let sections =
            sections_from_json(r#"[{"heading": "A"}, {"heading": "B"}, {"heading": "C"}]"#)
                .expect("parse succeeds");
        let headings: Vec<_> = sections.iter().map(Section::heading).collect();
        assert_eq!(headings, ["A", "B", "C"]);
    }

    #[test]
    fn empty_array_parses() {
        let sections = sections_from_json("[]").expect("parse succeeds");
        assert!(sections.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(sections_from_json("{not json").is_err());
    }

    #[test]
    fn builder_helpers_accumulate_items() {
        let section = Section::new("Shortcuts")
            .with_item("Ctrl+C copies")
            .with_items(["Ctrl+V pastes", "Ctrl+Z undoes"]);
        assert_eq!(section.items().len(), 3);
        assert_eq!(section.items()[2], "Ctrl+Z undoes");
    }
}
