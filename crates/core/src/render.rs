//! Nested list markup for a flat sequence of headings.

use crate::extract::Heading;
use html_escape::encode_double_quoted_attribute;

/// Renders headings as nested `<ul>` (or `<ol>` when `ordered`) markup.
///
/// Nesting is inferred from the level sequence alone, starting at the
/// shallowest level present. Skipped levels (an `h2` followed by an `h5`)
/// open one list per missing level; those intermediate lists hold no item,
/// so closing them never closes an item. Every opened list and item is
/// closed by the end, whatever the input order.
///
/// Returns an empty string when `headings` is empty.
pub fn render_toc(headings: &[Heading], ordered: bool) -> String {
    let Some(start_level) = headings.iter().map(|h| h.level).min() else {
        return String::new();
    };
    let list_tag = if ordered { "ol" } else { "ul" };

    let mut toc = ListWriter::new(list_tag);
    // Depths are relative to `start_level`; -1 means no list is open yet.
    let mut prev_depth: isize = -1;
    let max_depth = headings
        .iter()
        .map(|h| usize::from(h.level - start_level))
        .max()
        .unwrap_or(0);
    // item_open[d]: the list at depth d currently has an unclosed <li>.
    let mut item_open = vec![false; max_depth + 1];

    for heading in headings {
        let depth = isize::from(heading.level - start_level);

        if depth > prev_depth {
            for d in prev_depth + 1..=depth {
                toc.open_list();
                item_open[d as usize] = false;
            }
        } else {
            for d in (depth + 1..=prev_depth).rev() {
                if item_open[d as usize] {
                    toc.close_item();
                    item_open[d as usize] = false;
                }
                toc.close_list();
            }
            if item_open[depth as usize] {
                toc.close_item();
            }
        }

        toc.open_item(&heading.slug, &heading.text);
        item_open[depth as usize] = true;
        prev_depth = depth;
    }

    for d in (0..=prev_depth).rev() {
        if item_open[d as usize] {
            toc.close_item();
        }
        toc.close_list();
    }

    toc.finish()
}

/// String builder for list markup.
struct ListWriter {
    out: String,
    list_tag: &'static str,
}

impl ListWriter {
    fn new(list_tag: &'static str) -> Self {
        Self {
            out: String::new(),
            list_tag,
        }
    }

    fn open_list(&mut self) {
        self.out.push('<');
        self.out.push_str(self.list_tag);
        self.out.push('>');
    }

    fn close_list(&mut self) {
        self.out.push_str("</");
        self.out.push_str(self.list_tag);
        self.out.push('>');
    }

    fn open_item(&mut self, slug: &str, text: &str) {
        self.out.push_str("<li><a href=\"#");
        self.out.push_str(&encode_double_quoted_attribute(slug));
        self.out.push_str("\">");
        // Labels escape `"` as well as `&`, `<` and `>`.
        self.out.push_str(&encode_double_quoted_attribute(text));
        self.out.push_str("</a>");
    }

    fn close_item(&mut self) {
        self.out.push_str("</li>");
    }

    fn finish(self) -> String {
        self.out
    }
}
