// ABOUTME: Main library entry point for radiospot
// ABOUTME: Exports the PCM/WAV audio pipeline and TTS boundary types

//! # radiospot
//!
//! Audio core for generated radio adverts. A text-to-speech service hands back
//! base64-encoded 16-bit mono PCM at 24 kHz; this crate turns that into a
//! normalized [`audio::AudioBuffer`] for playback and into a canonical WAV file
//! for download.

#![warn(missing_docs)]

/// Audio types and processing
pub mod audio;
/// Text-to-speech request/response types
pub mod tts;

pub use audio::base64::decode_base64;
pub use audio::decode::decode_pcm_to_buffer;
pub use audio::wav::{encode_wav, WavFile};

/// Result type for radiospot operations
pub type Result<T> = std::result::Result<T, error::Error>;

/// Error types for radiospot
pub mod error {
    use thiserror::Error;

    /// Error types for radiospot operations
    #[derive(Error, Debug)]
    pub enum Error {
        /// Base64 input was malformed
        #[error("Base64 decode error: {0}")]
        Decode(#[from] base64::DecodeError),

        /// The playback engine could not allocate a buffer
        #[error("Audio buffer allocation failed ({channels}ch, {frame_count} frames, {sample_rate}Hz): {reason}")]
        Allocation {
            /// Requested channel count
            channels: u16,
            /// Requested frame count
            frame_count: usize,
            /// Requested sample rate
            sample_rate: u32,
            /// Why the engine refused
            reason: String,
        },

        /// PCM format outside what the pipeline handles
        #[error("Unsupported PCM format: {0}")]
        UnsupportedFormat(String),

        /// Bytes are not a canonical PCM WAV file
        #[error("Invalid WAV data: {0}")]
        InvalidWav(String),

        /// PCM payload too large for the 32-bit RIFF size fields
        #[error("PCM payload of {0} bytes does not fit in a WAV container")]
        PayloadTooLarge(usize),

        /// TTS response carried no inline audio
        #[error("No audio data received from API")]
        MissingAudio,

        /// TTS response was not valid JSON for the expected shape
        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),

        /// I/O failure while writing audio
        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),

        /// Audio output error
        #[error("Audio output error: {0}")]
        Output(String),
    }
}
