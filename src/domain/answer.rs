use std::fmt;

use super::QuestionId;

/// Column bound of the persisted answer transcript.
pub const MAX_TRANSCRIPT_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(i64);

impl AnswerId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scored, transcribed answer to a stored question. Created exactly once
/// per completed evaluation and never mutated.
#[derive(Debug, Clone)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub transcript: String,
    pub score: i64,
}

/// Clips a transcript to the answer column bound without splitting a
/// character.
pub fn clip_transcript(text: &str) -> &str {
    match text.char_indices().nth(MAX_TRANSCRIPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
