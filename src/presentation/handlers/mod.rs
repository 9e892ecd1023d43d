use serde::Serialize;

mod answer;
mod audio;
mod health;
mod interview;

pub use answer::submit_answer_handler;
pub use audio::audio_handler;
pub use health::health_handler;
pub use interview::start_interview_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
