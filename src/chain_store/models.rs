use serde::{Deserialize, Serialize};

/// One accepted contribution in a repository's word chain.
///
/// `merged_on` is an ISO-8601 timestamp string; for well-formed timestamps
/// lexicographic order equals chronological order, which is what the
/// aggregation relies on.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainEvent {
    pub current_word: String,
    pub review_comment: Option<String>,
    pub merged_on: String,
}

impl ChainEvent {
    pub fn new(current_word: &str, review_comment: Option<&str>, merged_on: &str) -> Self {
        ChainEvent {
            current_word: current_word.to_string(),
            review_comment: review_comment.map(|s| s.to_string()),
            merged_on: merged_on.to_string(),
        }
    }
}
