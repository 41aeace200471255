// ABOUTME: Playback engine and audio output traits
// ABOUTME: Buffer allocation capability plus start/stop playback over platform APIs (cpal)

/// cpal-based audio output implementation
#[cfg(feature = "playback")]
pub mod cpal_output;
/// In-process buffer allocator
pub mod memory;

#[cfg(feature = "playback")]
pub use cpal_output::CpalOutput;
pub use memory::MemoryEngine;

use crate::audio::AudioBuffer;
use crate::error::Error;
use std::sync::Arc;

/// Buffer allocation capability of a playback engine
///
/// Decoders receive this explicitly instead of reaching for a global audio
/// context.
pub trait PlaybackEngine {
    /// Allocate a silent buffer of `channels` x `frame_count` at `sample_rate`
    fn create_buffer(
        &self,
        channels: u16,
        frame_count: usize,
        sample_rate: u32,
    ) -> Result<AudioBuffer, Error>;
}

/// Audio output trait for playing decoded buffers
pub trait AudioOutput {
    /// Start playing `buffer`, stopping whatever was playing before
    fn play(&mut self, buffer: Arc<AudioBuffer>) -> Result<(), Error>;

    /// Stop the current clip, if any
    fn stop(&mut self);

    /// Whether a clip is currently audible
    fn is_playing(&self) -> bool;

    /// Play/pause button semantics: stop if playing, otherwise start `buffer`.
    /// Returns whether audio is playing afterwards.
    fn toggle(&mut self, buffer: &Arc<AudioBuffer>) -> Result<bool, Error> {
        if self.is_playing() {
            self.stop();
            Ok(false)
        } else {
            self.play(Arc::clone(buffer))?;
            Ok(true)
        }
    }
}
