// ABOUTME: Audio types and processing for radiospot
// ABOUTME: Contains Sample, PcmFormat, AudioBuffer, decoders and the WAV encoder

/// Base64 transport decoding
pub mod base64;
/// PCM decoder implementations
pub mod decode;
/// Playback engine and audio output capabilities
pub mod output;
/// Core audio type definitions (Sample, PcmFormat, AudioBuffer)
pub mod types;
/// WAV container encoding
pub mod wav;

pub use output::{AudioOutput, MemoryEngine, PlaybackEngine};
#[cfg(feature = "playback")]
pub use output::CpalOutput;
pub use types::{AudioBuffer, PcmFormat, Sample};
pub use wav::{WavEncoder, WavFile, WavHeader};
