#![deny(missing_docs)]
//! htoc core: heading extraction, table of contents markup, and heading anchors.

/// Builder over one HTML document.
pub mod builder;
/// Core error types.
pub mod error;
/// Heading extraction from HTML.
pub mod extract;
/// Heading id injection.
pub mod inject;
/// Table of contents options.
pub mod options;
/// Nested list rendering.
pub mod render;
/// Slug generation utilities.
pub mod slug;

pub use builder::TocBuilder;
pub use error::TocError;
pub use extract::{Heading, extract_headings};
pub use inject::add_heading_ids;
pub use options::{MAX_HEADING_LEVEL, MIN_HEADING_LEVEL, TocOptions};
pub use render::render_toc;
pub use slug::{Slugger, slugify};

/// Builds table of contents markup for the headings of `html`.
///
/// Returns an empty string for empty input or when no heading falls inside
/// the configured level range.
pub fn build_toc(html: &str, options: &TocOptions) -> Result<String, TocError> {
    let headings = extract_headings(html, options.min_level, options.max_level)?;
    Ok(render_toc(&headings, options.ordered))
}
