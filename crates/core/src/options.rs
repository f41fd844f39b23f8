//! Table of contents configuration.

use serde::{Deserialize, Serialize};

/// Shallowest heading level (`<h1>`).
pub const MIN_HEADING_LEVEL: u8 = 1;
/// Deepest heading level (`<h6>`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Options controlling which headings enter the table of contents and how
/// the list is marked up.
///
/// Bounds are inclusive. An inverted range (`min_level > max_level`) or a
/// range outside `1..=6` is not rejected; it simply matches no headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TocOptions {
    /// Shallowest heading level included in the table of contents.
    pub min_level: u8,
    /// Deepest heading level included in the table of contents.
    pub max_level: u8,
    /// Emit `<ol>` instead of `<ul>`.
    pub ordered: bool,
}

impl TocOptions {
    /// All heading levels, unordered list markup.
    pub const fn new() -> Self {
        Self {
            min_level: MIN_HEADING_LEVEL,
            max_level: MAX_HEADING_LEVEL,
            ordered: false,
        }
    }

    /// Returns a copy restricted to `min_level..=max_level`.
    pub const fn with_levels(self, min_level: u8, max_level: u8) -> Self {
        Self {
            min_level,
            max_level,
            ..self
        }
    }

    /// Returns a copy with the given shallowest level.
    pub const fn with_min_level(self, min_level: u8) -> Self {
        Self { min_level, ..self }
    }

    /// Returns a copy with the given deepest level.
    pub const fn with_max_level(self, max_level: u8) -> Self {
        Self { max_level, ..self }
    }

    /// Returns a copy emitting ordered (`true`) or unordered lists.
    pub const fn with_ordered(self, ordered: bool) -> Self {
        Self { ordered, ..self }
    }
}

impl Default for TocOptions {
    fn default() -> Self {
        Self::new()
    }
}
