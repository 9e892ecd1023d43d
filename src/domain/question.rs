use std::fmt;

/// Row identifier of a persisted interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated interview question. The question text acts as a natural key:
/// answers are recorded against the question looked up by exact text match,
/// so callers must not mutate the text after creation.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: QuestionId,
    pub job_role: String,
    pub text: String,
}
