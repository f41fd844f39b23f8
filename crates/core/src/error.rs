use thiserror::Error;

/// Errors that can occur while extracting headings or rewriting HTML.
#[derive(Debug, Error)]
pub enum TocError {
    /// The HTML rewriter rejected the input or a handler failed.
    #[error("HTML rewrite error: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),
}
