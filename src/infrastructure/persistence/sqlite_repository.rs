use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use crate::application::ports::{InterviewRepository, RepositoryError};
use crate::domain::{Answer, AnswerId, Question, QuestionId};

const CREATE_QUESTIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS interview_questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    job_role VARCHAR(100) NOT NULL,
    question VARCHAR(500) NOT NULL
)
"#;

const CREATE_ANSWERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS interview_answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id INTEGER NOT NULL REFERENCES interview_questions(id),
    answer VARCHAR(2000) NOT NULL,
    score INTEGER NOT NULL
)
"#;

pub struct SqliteInterviewRepository {
    pool: SqlitePool,
}

impl SqliteInterviewRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the tables if they do not exist yet.
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        for statement in [CREATE_QUESTIONS_TABLE, CREATE_ANSWERS_TABLE] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl InterviewRepository for SqliteInterviewRepository {
    #[instrument(skip(self, text))]
    async fn find_question_by_text(
        &self,
        text: &str,
    ) -> Result<Option<Question>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, job_role, question FROM interview_questions WHERE question = ?1 LIMIT 1",
        )
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(r) => {
                let id: i64 = r
                    .try_get("id")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let job_role: String = r
                    .try_get("job_role")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                let question: String = r
                    .try_get("question")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

                Ok(Some(Question {
                    id: QuestionId::from_i64(id),
                    job_role,
                    text: question,
                }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, text), fields(job_role = %job_role))]
    async fn insert_question(
        &self,
        job_role: &str,
        text: &str,
    ) -> Result<Question, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO interview_questions (job_role, question) VALUES (?1, ?2) RETURNING id",
        )
        .bind(job_role)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Question {
            id: QuestionId::from_i64(id),
            job_role: job_role.to_string(),
            text: text.to_string(),
        })
    }

    #[instrument(skip(self, transcript), fields(question_id = %question_id, score = score))]
    async fn insert_answer(
        &self,
        question_id: QuestionId,
        transcript: &str,
        score: i64,
    ) -> Result<Answer, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO interview_answers (question_id, answer, score) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(question_id.as_i64())
        .bind(transcript)
        .bind(score)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                RepositoryError::ConstraintViolation(db.to_string())
            }
            other => RepositoryError::QueryFailed(other.to_string()),
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(Answer {
            id: AnswerId::from_i64(id),
            question_id,
            transcript: transcript.to_string(),
            score,
        })
    }
}
