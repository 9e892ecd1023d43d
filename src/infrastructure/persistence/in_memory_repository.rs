use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{InterviewRepository, RepositoryError};
use crate::domain::{Answer, AnswerId, Question, QuestionId};

/// Test double backed by plain vectors. Ids are handed out sequentially
/// like the real autoincrement columns.
#[derive(Default)]
pub struct InMemoryInterviewRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl InMemoryInterviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> Vec<Question> {
        self.inner.lock().unwrap().questions.clone()
    }

    pub fn answers(&self) -> Vec<Answer> {
        self.inner.lock().unwrap().answers.clone()
    }
}

#[async_trait]
impl InterviewRepository for InMemoryInterviewRepository {
    async fn find_question_by_text(
        &self,
        text: &str,
    ) -> Result<Option<Question>, RepositoryError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.questions.iter().find(|q| q.text == text).cloned())
    }

    async fn insert_question(
        &self,
        job_role: &str,
        text: &str,
    ) -> Result<Question, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        let question = Question {
            id: QuestionId::from_i64(inner.questions.len() as i64 + 1),
            job_role: job_role.to_string(),
            text: text.to_string(),
        };
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn insert_answer(
        &self,
        question_id: QuestionId,
        transcript: &str,
        score: i64,
    ) -> Result<Answer, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.questions.iter().any(|q| q.id == question_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "question {} does not exist",
                question_id
            )));
        }
        let answer = Answer {
            id: AnswerId::from_i64(inner.answers.len() as i64 + 1),
            question_id,
            transcript: transcript.to_string(),
            score,
        };
        inner.answers.push(answer.clone());
        Ok(answer)
    }
}
