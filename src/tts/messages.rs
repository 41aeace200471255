// ABOUTME: Speech generation message type definitions and serialization
// ABOUTME: Builds generateContent audio requests and extracts base64 PCM from responses

use crate::audio::PcmFormat;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prebuilt voices offered to advertisers
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceActor {
    /// Female, clear
    #[default]
    Kore,
    /// Male, warm
    Puck,
    /// Female, energetic
    Zephyr,
}

impl VoiceActor {
    /// Every voice, in display order
    pub const ALL: [Self; 3] = [Self::Kore, Self::Puck, Self::Zephyr];

    /// Voice name understood by the speech API
    pub fn id(&self) -> &'static str {
        match self {
            Self::Kore => "Kore",
            Self::Puck => "Puck",
            Self::Zephyr => "Zephyr",
        }
    }

    /// Human-readable description
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kore => "Female Voice (Clear, South African Accent)",
            Self::Puck => "Male Voice (Warm, South African Accent)",
            Self::Zephyr => "Female Voice (Energetic, South African Accent)",
        }
    }
}

impl fmt::Display for VoiceActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Speech generation request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    /// Prompt turns; one user turn carrying the script
    pub contents: Vec<Content>,
    /// Audio output settings
    pub generation_config: GenerationConfig,
}

impl SpeechRequest {
    /// Request a read of `script` in `voice`
    pub fn new(script: &str, voice: VoiceActor) -> Self {
        let prompt = format!(
            "Read the following radio advert script clearly and professionally, with a South African accent: \"{}\"",
            script
        );

        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.id().to_string(),
                        },
                    },
                },
            },
        }
    }

    /// Serialize as the request body
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// `user` or `model`; omitted in requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Text and inline-data parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A piece of content: text or inline binary data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Base64 payload, e.g. synthesized speech
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64 payload with its media type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// e.g. `audio/L16;codec=pcm;rate=24000`
    #[serde(default)]
    pub mime_type: String,
    /// Base64 bytes
    pub data: String,
}

impl InlineData {
    /// PCM format advertised by an `audio/L16;...;rate=N` media type
    ///
    /// Returns `None` for any other media type. A missing `rate` parameter
    /// falls back to the speech model's 24 kHz.
    pub fn pcm_format(&self) -> Option<PcmFormat> {
        let mut params = self.mime_type.split(';').map(str::trim);
        let essence = params.next()?;
        if !essence.eq_ignore_ascii_case("audio/l16") {
            return None;
        }

        let mut format = PcmFormat::TTS;
        for param in params {
            if let Some((key, value)) = param.split_once('=') {
                if key.trim().eq_ignore_ascii_case("rate") {
                    format.sample_rate = value.trim().parse().ok()?;
                }
            }
        }
        Some(format)
    }
}

/// Output settings of a request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `["AUDIO"]` for speech
    pub response_modalities: Vec<String>,
    /// Voice selection
    pub speech_config: SpeechConfig,
}

/// Speech synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechConfig {
    /// Which voice reads the script
    pub voice_config: VoiceConfig,
}

/// Voice selection wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Named prebuilt voice
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// A prebuilt voice by name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// See [`VoiceActor::id`]
    pub voice_name: String,
}

/// Speech generation response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechResponse {
    /// Generated alternatives; only the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated alternative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Missing when generation was blocked
    #[serde(default)]
    pub content: Option<Content>,
    /// e.g. `STOP` or `SAFETY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl SpeechResponse {
    /// Parse a response body
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Inline data of the first part of the first candidate
    pub fn inline_audio(&self) -> Result<&InlineData, Error> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.inline_data.as_ref())
            .filter(|inline| !inline.data.is_empty())
            .ok_or(Error::MissingAudio)
    }

    /// Base64 PCM audio carried by the response
    pub fn audio_data(&self) -> Result<&str, Error> {
        self.inline_audio().map(|inline| inline.data.as_str())
    }
}
