// ABOUTME: Text-to-speech boundary for radiospot
// ABOUTME: Request/response message types for the speech generation API

/// Request and response message definitions
pub mod messages;

pub use messages::{InlineData, SpeechRequest, SpeechResponse, VoiceActor};

/// Model that produces 24 kHz mono PCM speech
pub const SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
