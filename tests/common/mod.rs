//! Shared fixtures for integration tests.

use rstest::fixture;
use serp_core::Document;

/// A small ranked-results batch with known keyword placement.
///
/// Document "2" shares no word with the query "rust pagination" used across
/// the snippet tests, so it exercises the fallback path.
#[fixture]
pub fn ranked_results() -> Vec<Document> {
    serp_core::tracing::init();

    vec![
        Document::new(
            "1",
            "Rust is a multi-paradigm systems programming language focused on \
             safety and performance. Rust achieves memory safety without \
             garbage collection, and its pagination of heap allocations is a \
             story for another day entirely.",
        ),
        Document::new(
            "2",
            "Gardening in late summer means watering deeply, mulching beds, \
             and deadheading spent blooms so the borders keep flowering well \
             into autumn without exhausting the soil underneath them.",
        ),
        Document::new(
            "3",
            "Pagination, infinite scrolling, and load-more buttons are the \
             three common ways to split long result lists; pagination remains \
             the easiest to deep-link and the kindest to keyboard users.",
        ),
    ]
}

/// Content built from numbered filler words with query hits planted at the
/// given token positions.
pub fn content_with_hits(token_count: usize, hits: &[usize]) -> String {
    (0..token_count)
        .map(|i| {
            if hits.contains(&i) {
                "needle".to_string()
            } else {
                format!("w{i}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
