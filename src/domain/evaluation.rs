use std::collections::BTreeMap;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 10;

/// The outcome of evaluating one spoken answer. Lives for a single
/// request/response cycle; only the transcript and score are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub transcript: String,
    pub score: i64,
    pub filler_word_counts: BTreeMap<String, u32>,
    pub review: String,
    pub perfect_answer: String,
}
