mod http_synthesizer;

pub use http_synthesizer::HttpSpeechSynthesizer;
