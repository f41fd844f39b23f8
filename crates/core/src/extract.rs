//! Heading extraction from rendered HTML.

use crate::error::TocError;
use crate::options::{MAX_HEADING_LEVEL, MIN_HEADING_LEVEL};
use crate::slug::Slugger;
use lol_html::EndTagHandler;
use lol_html::html_content::EndTag;
use lol_html::{HandlerResult, RewriteStrSettings, element, rewrite_str, text};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Matches every heading element, in document order.
pub(crate) const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// A heading found in the document, ready to be linked from the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading depth (1-6), taken from the tag name.
    pub level: u8,
    /// Flattened text content of the heading and its descendants.
    pub text: String,
    /// Anchor slug, unique among the headings of one extraction pass.
    pub slug: String,
}

/// Heading level and decoded text, before a slug is assigned.
#[derive(Debug)]
pub(crate) struct HeadingText {
    pub(crate) level: u8,
    pub(crate) text: String,
}

/// Extracts headings with `min_level <= level <= max_level` in document order.
///
/// Slugs are unique within the returned list; headings outside the range do
/// not reserve slugs. Empty or whitespace-only input yields an empty list.
pub fn extract_headings(
    html: &str,
    min_level: u8,
    max_level: u8,
) -> Result<Vec<Heading>, TocError> {
    if html.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut slugger = Slugger::new();
    let headings: Vec<Heading> = collect_heading_texts(html)?
        .into_iter()
        .filter(|heading| (min_level..=max_level).contains(&heading.level))
        .map(|heading| Heading {
            level: heading.level,
            slug: slugger.next_slug(&heading.text),
            text: heading.text,
        })
        .collect();

    log::debug!(
        "Extracted {} headings in levels {}..={}",
        headings.len(),
        min_level,
        max_level
    );

    Ok(headings)
}

/// Heading texts gathered during one rewriting pass.
#[derive(Debug, Default)]
struct HeadingCollector {
    headings: Vec<(u8, String)>,
    /// Index of the heading whose content is being read, if any.
    current: Option<usize>,
}

/// Collects the level and text content of every heading element.
///
/// A heading start tag ends any heading still open, as an HTML tree builder
/// would, and a heading's end tag ends it; text outside the current heading
/// is dropped. Text chunks arrive raw from the rewriter (entities intact and
/// possibly split mid-entity), so each heading's text is decoded once it is
/// complete.
pub(crate) fn collect_heading_texts(html: &str) -> Result<Vec<HeadingText>, TocError> {
    let state = Rc::new(RefCell::new(HeadingCollector::default()));
    let on_start = Rc::clone(&state);
    let on_text = Rc::clone(&state);

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(HEADING_SELECTOR, move |el| {
                    let Some(level) = heading_level(&el.tag_name()) else {
                        return Ok(());
                    };
                    let index = {
                        let mut collector = on_start.borrow_mut();
                        collector.headings.push((level, String::new()));
                        let index = collector.headings.len() - 1;
                        collector.current = Some(index);
                        index
                    };
                    if let Some(handlers) = el.end_tag_handlers() {
                        let on_end = Rc::clone(&on_start);
                        let on_end_tag: EndTagHandler<'static> =
                            Box::new(move |_end: &mut EndTag<'_>| -> HandlerResult {
                                let mut collector = on_end.borrow_mut();
                                if collector.current == Some(index) {
                                    collector.current = None;
                                }
                                Ok(())
                            });
                        handlers.push(on_end_tag);
                    }
                    Ok(())
                }),
                text!(HEADING_SELECTOR, move |chunk| {
                    let mut collector = on_text.borrow_mut();
                    if let Some(index) = collector.current {
                        collector.headings[index].1.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::new()
        },
    )?;

    let headings = std::mem::take(&mut state.borrow_mut().headings);
    Ok(headings
        .into_iter()
        .map(|(level, raw)| HeadingText {
            level,
            text: html_escape::decode_html_entities(&raw).into_owned(),
        })
        .collect())
}

/// Parses the level out of a heading tag name (`h1`..`h6`, any case).
pub(crate) fn heading_level(tag_name: &str) -> Option<u8> {
    let digits = tag_name
        .strip_prefix('h')
        .or_else(|| tag_name.strip_prefix('H'))?;
    let level: u8 = digits.parse().ok()?;
    (MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL)
        .contains(&level)
        .then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(headings: &[Heading]) -> Vec<(u8, &str, &str)> {
        headings
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.slug.as_str()))
            .collect()
    }

    #[test]
    fn parses_heading_levels() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("H6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("header"), None);
        assert_eq!(heading_level("hr"), None);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_headings("", 1, 6).unwrap().is_empty());
        assert!(extract_headings("  \n\t ", 1, 6).unwrap().is_empty());
    }

    #[test]
    fn no_headings_yields_nothing() {
        let html = "<p>Just a paragraph</p><div>and a div</div>";
        assert!(extract_headings(html, 1, 6).unwrap().is_empty());
    }

    #[test]
    fn filters_range_in_document_order() {
        let html = "<h1>A</h1><h3>B</h3><h2>C</h2>";
        let headings = extract_headings(html, 2, 3).unwrap();
        assert_eq!(summary(&headings), vec![(3, "B", "b"), (2, "C", "c")]);
    }

    #[test]
    fn flattens_descendant_text() {
        let html = "<h2>Using <code>lol_html</code> <em>safely</em></h2>";
        let headings = extract_headings(html, 1, 6).unwrap();
        assert_eq!(
            summary(&headings),
            vec![(2, "Using lol_html safely", "using-lol-html-safely")]
        );
    }

    #[test]
    fn decodes_entities_in_text() {
        let html = "<h2>Tom &amp; Jerry &lt;3</h2>";
        let headings = extract_headings(html, 1, 6).unwrap();
        assert_eq!(headings[0].text, "Tom & Jerry <3");
        assert_eq!(headings[0].slug, "tom-jerry-3");
    }

    #[test]
    fn same_text_gets_suffixed_slugs() {
        let html = "<h2>Intro</h2><p>..</p><h3>Intro</h3>";
        let headings = extract_headings(html, 1, 6).unwrap();
        assert_eq!(
            summary(&headings),
            vec![(2, "Intro", "intro"), (3, "Intro", "intro-1")]
        );
    }

    #[test]
    fn excluded_headings_do_not_reserve_slugs() {
        let html = "<h1>Intro</h1><h2>Intro</h2>";
        let headings = extract_headings(html, 2, 6).unwrap();
        assert_eq!(summary(&headings), vec![(2, "Intro", "intro")]);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let html = "<h1>A</h1><h2>B</h2><h3>C</h3>";
        assert!(extract_headings(html, 3, 2).unwrap().is_empty());
        assert!(extract_headings(html, 0, 0).unwrap().is_empty());
        assert!(extract_headings(html, 7, 9).unwrap().is_empty());
    }

    #[test]
    fn ignores_text_outside_headings() {
        let html = "<h1>Title</h1>Loose text<p>para</p><h2>Next</h2>tail";
        let headings = extract_headings(html, 1, 6).unwrap();
        assert_eq!(
            summary(&headings),
            vec![(1, "Title", "title"), (2, "Next", "next")]
        );
    }

    #[test]
    fn uppercase_tags_are_headings() {
        let headings = extract_headings("<H2>Shouting</H2>", 1, 6).unwrap();
        assert_eq!(summary(&headings), vec![(2, "Shouting", "shouting")]);
    }

    #[test]
    fn text_after_inner_heading_closes_is_not_its_text() {
        let headings = extract_headings("<h2>A<h3>B</h3><p>tail</p>", 1, 6).unwrap();
        assert_eq!(summary(&headings), vec![(2, "A", "a"), (3, "B", "b")]);
    }

    #[test]
    fn unclosed_heading_ends_at_next_heading() {
        let html = "<h2>Not closed\n<p>para</p>\n<h2>Second</h2>after";
        let headings = extract_headings(html, 1, 6).unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].text, "Not closed\npara\n");
        assert_eq!(headings[0].slug, "not-closed-para");
        assert_eq!(summary(&headings[1..]), vec![(2, "Second", "second")]);
    }
}
