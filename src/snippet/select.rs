//! Window ranking, selection, and final snippet assembly.

use std::cmp::Ordering;

use super::SnippetConfig;
use super::window::Window;

/// Turn the discovered windows into the final marked-up snippet.
///
/// The longest windows win (clustered keywords beat lone hits, which also
/// favors phrase matches), capped at `max_windows`, then re-ordered by
/// position so the excerpt reads in document order. Zero windows fall back to
/// the head of the raw content; short results are padded with raw tokens up to
/// `target_chars` displayed characters.
pub(crate) fn compose(
    mut windows: Vec<Window>,
    tokens: &[&str],
    content: &str,
    config: &SnippetConfig,
) -> String {
    let Some(last) = rank_and_keep(&mut windows, config) else {
        // No keyword matched anywhere: fall back to the head of the content.
        let mut snippet: String = content.chars().take(config.target_chars).collect();
        snippet.push_str(&config.ellipsis);
        return snippet;
    };

    let mut snippet = config.ellipsis.clone();
    for (i, window) in windows.iter().enumerate() {
        if i > 0 {
            snippet.push_str(&config.ellipsis);
        }
        snippet.push_str(&window.markup);
    }

    // Mark trailing omitted content, unless the last window reaches the end
    if last + 1 < tokens.len() {
        snippet.push_str(&config.ellipsis);
    }

    pad_to_target(&mut snippet, last + 1, tokens, config);
    snippet
}

/// Sort descending by length (ties broken by discovery position), truncate to
/// the retention bound, then restore reading order. Returns the right bound of
/// the last retained window, or `None` when there are no windows.
fn rank_and_keep(windows: &mut Vec<Window>, config: &SnippetConfig) -> Option<usize> {
    // A proper three-way comparator; a boolean length predicate would not give
    // a stable total order here.
    windows.sort_by(|a, b| match b.len().cmp(&a.len()) {
        Ordering::Equal => a.l.cmp(&b.l),
        ordering => ordering,
    });
    windows.truncate(config.max_windows);
    windows.sort_by_key(|w| w.l);

    windows.last().map(|w| w.r)
}

/// Append raw, unmarked tokens starting at `from` until the snippet shows at
/// least `target_chars` characters or the document runs out.
fn pad_to_target(snippet: &mut String, from: usize, tokens: &[&str], config: &SnippetConfig) {
    // Displayed characters, not bytes
    let mut shown = snippet.chars().count();

    for token in tokens.iter().skip(from) {
        if shown >= config.target_chars {
            break;
        }
        snippet.push(' ');
        snippet.push_str(token);
        shown += token.chars().count() + 1;
    }
}
