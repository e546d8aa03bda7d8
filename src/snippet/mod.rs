//! Snippet extraction for search results.
//!
//! Given a raw query and the full text of already-ranked documents, this
//! module produces the marked-up excerpt shown under each result: keyword
//! hits wrapped in emphasis markers, clustered hits merged into shared context
//! windows, and omitted content marked with ellipses.

// Module declarations
mod select;
mod tokenize;
mod window;

pub use tokenize::normalize;

use crate::types::Document;
use tokenize::QueryTerms;

/// Tuning knobs for snippet extraction.
///
/// The defaults reproduce the classic presentation: two tokens of context per
/// hit, hits within two tokens merged, at most ten windows, excerpts padded to
/// about 220 displayed characters, `<b>` emphasis and `...` separators.
#[derive(Debug, Clone)]
pub struct SnippetConfig {
    /// Tokens of context kept on each side of a keyword hit.
    pub context_radius: usize,
    /// Maximum token-index gap below which two hits share one window.
    pub merge_gap: usize,
    /// Retention bound for ranked windows.
    pub max_windows: usize,
    /// Target snippet length in displayed characters.
    pub target_chars: usize,
    /// Queries are truncated to this many characters before matching.
    pub max_query_chars: usize,
    /// Reduce query and document words to Snowball English stems before
    /// comparing, so inflected forms match. Off by default: matching is then
    /// exact on the normalized token.
    pub stemming: bool,
    /// Opening emphasis marker for keyword hits.
    pub highlight_open: String,
    /// Closing emphasis marker for keyword hits.
    pub highlight_close: String,
    /// Marker for omitted content between and around windows.
    pub ellipsis: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            context_radius: 2,
            merge_gap: 2,
            max_windows: 10,
            target_chars: 220,
            max_query_chars: 100,
            stemming: false,
            highlight_open: "<b>".to_string(),
            highlight_close: "</b>".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

/// Extracts display snippets for one query.
///
/// Construction normalizes the query once; the extractor is then immutable
/// and may decorate any number of documents, from any number of threads.
pub struct SnippetExtractor {
    terms: QueryTerms,
    config: SnippetConfig,
}

impl SnippetExtractor {
    pub fn new(raw_query: &str) -> Self {
        Self::with_config(raw_query, SnippetConfig::default())
    }

    pub fn with_config(raw_query: &str, config: SnippetConfig) -> Self {
        let terms = QueryTerms::new(raw_query, &config);
        Self { terms, config }
    }

    /// Extract the marked-up snippet for one document's content.
    ///
    /// Never fails: content without a single keyword hit degrades to the
    /// leading `target_chars` characters of the raw content.
    pub fn extract(&self, content: &str) -> String {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let windows = window::scan(&tokens, &self.terms, &self.config);

        tracing::trace!(
            tokens = tokens.len(),
            windows = windows.len(),
            "scanned document for snippet windows"
        );

        select::compose(windows, &tokens, content, &self.config)
    }

    /// Derive and attach a snippet to every document in the batch.
    pub fn decorate(&self, documents: &mut [Document]) {
        tracing::debug!(documents = documents.len(), "decorating search results");

        for document in documents {
            document.snippet = Some(self.extract(&document.content));
        }
    }
}
