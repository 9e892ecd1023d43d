mod google_recognizer;

pub use google_recognizer::GoogleSpeechRecognizer;
