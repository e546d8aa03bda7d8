//! Word normalization and query-keyword matching.

use ahash::AHashSet;
use rust_stemmers::{Algorithm, Stemmer};

use super::SnippetConfig;

/// Strip non-alphanumeric characters from both ends of a word.
///
/// Returns the inclusive substring between the first and last alphanumeric
/// characters, preserving case and any internal punctuation ("state-of-the-art"
/// stays intact). Words with no alphanumeric character at all normalize to the
/// empty string rather than faulting on undefined bounds.
///
/// - `normalize("google.")` → `"google"`
/// - `normalize("C++")` → `"C"`
/// - `normalize("...")` → `""`
pub fn normalize(word: &str) -> &str {
    let mut alnum = word.char_indices().filter(|(_, c)| c.is_alphanumeric());

    let Some((first, first_char)) = alnum.next() else {
        return "";
    };
    let (last, last_char) = alnum.last().unwrap_or((first, first_char));

    &word[first..last + last_char.len_utf8()]
}

/// The set of query words that document tokens are matched against.
///
/// Built once per query and shared across documents. Matching is
/// case-insensitive and exact on the whole normalized token, never substring
/// containment. With `SnippetConfig::stemming` enabled, both sides are reduced
/// to their Snowball English stems first, so e.g. "running" matches "runs".
pub(crate) struct QueryTerms {
    words: AHashSet<String>,
    stemmer: Option<Stemmer>,
}

impl QueryTerms {
    pub(crate) fn new(raw_query: &str, config: &SnippetConfig) -> Self {
        let truncated: String = raw_query.chars().take(config.max_query_chars).collect();
        let stemmer = config
            .stemming
            .then(|| Stemmer::create(Algorithm::English));

        let mut words = AHashSet::new();

        // Empty normalized words (pure punctuation) never match anything,
        // so they are dropped here instead of being checked per token.
        for word in truncated.split_whitespace() {
            let normalized = normalize(word);
            if normalized.is_empty() {
                continue;
            }

            let folded = normalized.to_lowercase();
            let folded = match &stemmer {
                Some(stemmer) => stemmer.stem(&folded).into_owned(),
                None => folded,
            };

            words.insert(folded);
        }

        Self { words, stemmer }
    }

    /// Whether this document token matches any query word.
    pub(crate) fn is_match(&self, token: &str) -> bool {
        let normalized = normalize(token);
        if normalized.is_empty() {
            return false;
        }

        let folded = normalized.to_lowercase();
        match &self.stemmer {
            Some(stemmer) => self.words.contains(stemmer.stem(&folded).as_ref()),
            None => self.words.contains(folded.as_str()),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("google.", "google")]
    #[case("...", "")]
    #[case("C++", "C")]
    #[case("(hello)", "hello")]
    #[case("state-of-the-art", "state-of-the-art")]
    #[case("42!", "42")]
    #[case("", "")]
    #[case("a", "a")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("naïve,", "naïve")]
    #[case("«über»", "über")]
    fn test_normalize_multibyte_edges(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[test]
    fn test_match_is_case_insensitive_and_whole_token() {
        let terms = QueryTerms::new("Google search", &SnippetConfig::default());

        check!(terms.is_match("GOOGLE"));
        check!(terms.is_match("google."));
        check!(terms.is_match("Search,"));
        // Whole-token equality, not substring containment
        check!(!terms.is_match("googles"));
        check!(!terms.is_match("researcher"));
    }

    #[test]
    fn test_punctuation_only_words_never_match() {
        let terms = QueryTerms::new("... -- ??", &SnippetConfig::default());
        check!(terms.is_empty());
        check!(!terms.is_match("..."));
        check!(!terms.is_match("anything"));
    }

    #[test]
    fn test_duplicate_query_words_collapse() {
        let terms = QueryTerms::new("rust rust RUST", &SnippetConfig::default());
        check!(terms.is_match("rust"));
    }

    #[test]
    fn test_stemming_matches_inflected_forms() {
        let config = SnippetConfig {
            stemming: true,
            ..SnippetConfig::default()
        };
        let terms = QueryTerms::new("running", &config);

        check!(terms.is_match("runs"));
        check!(terms.is_match("run"));
        check!(!terms.is_match("walked"));
    }

    #[test]
    fn test_query_truncation_cap() {
        let config = SnippetConfig {
            max_query_chars: 10,
            ..SnippetConfig::default()
        };
        // "beyond" starts past the cap and must not survive
        let terms = QueryTerms::new("first word beyond", &config);

        check!(terms.is_match("first"));
        check!(!terms.is_match("beyond"));
    }
}
