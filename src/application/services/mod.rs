mod evaluation_service;
mod filler_analyzer;
mod interview_service;
mod response_parser;

pub use evaluation_service::{
    EvaluationError, EvaluationService, REQUEST_FAILURE_PREFIX, UNINTELLIGIBLE_TRANSCRIPT,
};
pub use filler_analyzer::{count_filler_words, FILLER_VOCABULARY};
pub use interview_service::{InterviewError, InterviewService, StartedInterview};
pub use response_parser::{parse_evaluation, parse_generated_question, ParsedEvaluation, ResponseParseError};
