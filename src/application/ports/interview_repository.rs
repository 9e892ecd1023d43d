use async_trait::async_trait;

use crate::domain::{Answer, Question, QuestionId};

/// Persistent store for interview questions and their recorded answers.
/// Each write is its own transaction; no cross-record guarantee exists
/// between storing a question and later recording an answer to it.
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    /// Looks a question up by its exact text (the natural key).
    async fn find_question_by_text(&self, text: &str)
        -> Result<Option<Question>, RepositoryError>;

    async fn insert_question(&self, job_role: &str, text: &str)
        -> Result<Question, RepositoryError>;

    async fn insert_answer(
        &self,
        question_id: QuestionId,
        transcript: &str,
        score: i64,
    ) -> Result<Answer, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
