//! Anchor id injection for heading elements.

use crate::error::TocError;
use crate::extract::{HEADING_SELECTOR, collect_heading_texts};
use crate::slug::Slugger;
use lol_html::{RewriteStrSettings, element, rewrite_str};

/// Sets an `id` on every `h1`..`h6` element and returns the rewritten HTML.
///
/// Ids come from the heading text and are unique within the document, using
/// the same policy as the table of contents. Existing ids are overwritten.
/// Level options play no part here: all six levels receive ids.
///
/// The output keeps the shape of the input; a fragment stays a fragment and
/// markup outside heading start tags passes through untouched. Empty or
/// whitespace-only input returns an empty string.
pub fn add_heading_ids(html: &str) -> Result<String, TocError> {
    if html.trim().is_empty() {
        return Ok(String::new());
    }

    let mut slugger = Slugger::new();
    let ids: Vec<String> = collect_heading_texts(html)?
        .iter()
        .map(|heading| slugger.next_slug(&heading.text))
        .collect();
    let id_count = ids.len();
    let mut ids = ids.into_iter();

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(HEADING_SELECTOR, |el| {
                if let Some(id) = ids.next() {
                    el.set_attribute("id", &id)?;
                }
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;

    log::trace!("Injected {} heading ids", id_count);

    Ok(output)
}
