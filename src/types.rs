use serde::{Deserialize, Serialize};

/// One already-ranked search result, as handed over by the caller.
///
/// The core only reads `content` and writes the derived `snippet`; every other
/// field (title, url, score, ...) travels untouched through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    /// Create a document with no pass-through fields.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            snippet: None,
            extra: serde_json::Map::new(),
        }
    }
}
