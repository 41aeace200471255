// ABOUTME: Audio decoder implementations
// ABOUTME: Decoder trait plus the fixed-format PCM-to-buffer entry point

/// PCM decoder implementation
pub mod pcm;

pub use pcm::PcmDecoder;

use crate::audio::{AudioBuffer, PlaybackEngine, Sample};
use crate::error::Error;

/// Decoder trait for audio codecs
pub trait Decoder {
    /// Decode raw audio data into samples
    fn decode(&self, data: &[u8]) -> Result<Vec<Sample>, Error>;
}

/// Decode raw 24 kHz mono 16-bit PCM into a buffer allocated by `engine`
///
/// An odd trailing byte is dropped. Allocation failures from the engine are
/// returned unchanged.
pub fn decode_pcm_to_buffer(
    data: &[u8],
    engine: &dyn PlaybackEngine,
) -> Result<AudioBuffer, Error> {
    PcmDecoder::default().decode_to_buffer(data, engine)
}
