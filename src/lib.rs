//! Generate paginated PDF cheatsheets from titled bullet-point sections.
//!
//! The crate maps a small JSON description (a list of sections, each with a
//! heading and bullet items) onto three fixed visual presets and hands the
//! resulting flow to [`genpdf`][genpdf], which performs text wrapping, page
//! breaking and PDF serialization.
//!
//! [genpdf]: https://docs.rs/genpdf/

pub mod builder;
pub mod elements;
pub mod fonts;
pub mod model;
pub mod styles;
