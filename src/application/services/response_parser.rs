use crate::domain::{MAX_SCORE, MIN_SCORE};

/// Typed view of the evaluation text the generative service returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvaluation {
    pub score: i64,
    pub review: String,
    pub perfect_answer: String,
}

/// Parses the output of a question-generation call. The entire trimmed text
/// is the question; an empty result is the only failure.
pub fn parse_generated_question(raw: &str) -> Result<String, ResponseParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResponseParseError::EmptyGeneration);
    }
    Ok(trimmed.to_string())
}

/// Parses the output of an evaluation call.
///
/// The contract with the prompt is positional, not a schema: the first line
/// starts with the score, the last line is the perfect answer, everything
/// in between is the review. Parsing is total and only ever degrades:
/// a first token that is not an integer in `0..=10` yields score 0, and
/// with fewer than three lines the review is empty.
pub fn parse_evaluation(raw: &str) -> ParsedEvaluation {
    let lines: Vec<&str> = raw.trim().split('\n').collect();

    let score = lines
        .first()
        .and_then(|line| line.split_whitespace().next())
        .and_then(|token| token.parse::<i64>().ok())
        .filter(|value| (MIN_SCORE..=MAX_SCORE).contains(value))
        .unwrap_or(MIN_SCORE);

    let review = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };

    let perfect_answer = lines.last().copied().unwrap_or("").to_string();

    ParsedEvaluation {
        score,
        review,
        perfect_answer,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseParseError {
    #[error("generation returned no usable text")]
    EmptyGeneration,
}
