mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, DatabaseSettings, GeminiSettings, LoggingSettings, RecognizerSettings,
    ServerSettings, Settings, TtsSettings,
};
