//! One-shot builder tying the extraction, rendering and injection passes together.

use crate::error::TocError;
use crate::extract::{Heading, extract_headings};
use crate::inject::add_heading_ids;
use crate::options::TocOptions;

/// Builds a table of contents (or heading anchors) for one HTML document.
///
/// The builder is a plain value: setters consume and return it, and each
/// terminal operation runs its own pass over the source HTML with a fresh
/// slug scope.
///
/// ```
/// use htoc_core::TocBuilder;
///
/// let html = "<h1>Guide</h1><h2>Install</h2><h2>Usage</h2>";
/// let toc = TocBuilder::new(html).min_level(2).toc_markup().unwrap();
/// assert_eq!(
///     toc,
///     r##"<ul><li><a href="#install">Install</a></li><li><a href="#usage">Usage</a></li></ul>"##
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TocBuilder<'a> {
    html: &'a str,
    options: TocOptions,
}

impl<'a> TocBuilder<'a> {
    /// Creates a builder over `html` with default options.
    pub fn new(html: &'a str) -> Self {
        Self {
            html,
            options: TocOptions::default(),
        }
    }

    /// Replaces all options at once.
    pub fn options(self, options: TocOptions) -> Self {
        Self { options, ..self }
    }

    /// Sets the shallowest heading level included in the table of contents.
    pub fn min_level(self, level: u8) -> Self {
        self.options(self.options.with_min_level(level))
    }

    /// Sets the deepest heading level included in the table of contents.
    pub fn max_level(self, level: u8) -> Self {
        self.options(self.options.with_max_level(level))
    }

    /// Selects ordered (`<ol>`) or unordered (`<ul>`) list markup.
    pub fn ordered(self, ordered: bool) -> Self {
        self.options(self.options.with_ordered(ordered))
    }

    /// Headings in the configured level range, in document order.
    pub fn headings(&self) -> Result<Vec<Heading>, TocError> {
        extract_headings(self.html, self.options.min_level, self.options.max_level)
    }

    /// Table of contents markup, or an empty string when no heading matches.
    pub fn toc_markup(&self) -> Result<String, TocError> {
        crate::build_toc(self.html, &self.options)
    }

    /// Source HTML with an id on every heading, all levels included.
    pub fn html_with_ids(&self) -> Result<String, TocError> {
        add_heading_ids(self.html)
    }
}
