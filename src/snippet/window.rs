//! Match-window construction.
//!
//! A single forward pass over the document tokens builds context windows
//! around keyword hits. Hits within `merge_gap` tokens of each other fold into
//! one window, so a phrase like "rust search engine" produces a single excerpt
//! instead of three overlapping ones.

use super::SnippetConfig;
use super::tokenize::QueryTerms;

/// A contiguous, inclusive range of token positions selected as an excerpt.
///
/// Invariants upheld by [`scan`]: `l <= r`, both clipped to valid token
/// indices, and windows in the returned list never overlap (`r_i < l_{i+1}`).
#[derive(Debug, Clone)]
pub(crate) struct Window {
    pub l: usize,
    pub r: usize,
    /// The covered tokens joined by single spaces, keyword hits wrapped in the
    /// configured emphasis markers.
    pub markup: String,
}

impl Window {
    pub(crate) fn len(&self) -> usize {
        self.r - self.l
    }
}

/// Scan the document tokens and build all match windows in discovery order.
pub(crate) fn scan(tokens: &[&str], terms: &QueryTerms, config: &SnippetConfig) -> Vec<Window> {
    let mut windows: Vec<Window> = Vec::new();

    if tokens.is_empty() || terms.is_empty() {
        return windows;
    }

    // Sentinel below any valid index, so the first hit always opens a window.
    let mut last_match: isize = -(config.merge_gap as isize) - 1;

    for (k, token) in tokens.iter().enumerate() {
        if !terms.is_match(token) {
            continue;
        }

        let reach = (k + config.context_radius).min(tokens.len() - 1);

        if k as isize - last_match > config.merge_gap as isize {
            // New window: clip the left context against the previous window so
            // adjacent windows never overlap.
            let floor = windows.last().map_or(0, |w| w.r + 1);
            let l = k.saturating_sub(config.context_radius).max(floor);

            let mut window = Window {
                l,
                r: reach,
                markup: String::new(),
            };
            append_markup(&mut window, l, tokens, terms, config);
            windows.push(window);
        } else if let Some(window) = windows.last_mut() {
            // Merge: extend the current window and emit only the newly
            // covered tokens.
            let from = window.r + 1;
            window.r = reach;
            append_markup(window, from, tokens, terms, config);
        }

        last_match = k as isize;
    }

    windows
}

/// Append `tokens[from..=window.r]` to the window markup, wrapping keyword
/// hits in the emphasis markers.
fn append_markup(
    window: &mut Window,
    from: usize,
    tokens: &[&str],
    terms: &QueryTerms,
    config: &SnippetConfig,
) {
    for i in from..=window.r {
        if !window.markup.is_empty() {
            window.markup.push(' ');
        }

        if terms.is_match(tokens[i]) {
            window.markup.push_str(&config.highlight_open);
            window.markup.push_str(tokens[i]);
            window.markup.push_str(&config.highlight_close);
        } else {
            window.markup.push_str(tokens[i]);
        }
    }
}
