mod answer;
mod evaluation;
mod question;
mod upload;

pub use answer::{clip_transcript, Answer, AnswerId, MAX_TRANSCRIPT_CHARS};
pub use evaluation::{Evaluation, MAX_SCORE, MIN_SCORE};
pub use question::{Question, QuestionId};
pub use upload::UploadedAudio;
