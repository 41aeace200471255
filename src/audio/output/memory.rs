// ABOUTME: In-process playback engine
// ABOUTME: Allocates AudioBuffers in memory with configurable limits

use crate::audio::output::PlaybackEngine;
use crate::audio::AudioBuffer;
use crate::error::Error;
use std::ops::RangeInclusive;

/// Buffer allocator that needs no audio device
///
/// Mirrors the limits a browser audio context enforces: a bounded sample
/// rate range and an upper bound on frames per buffer.
#[derive(Clone, Debug)]
pub struct MemoryEngine {
    max_frames: usize,
    sample_rates: RangeInclusive<u32>,
}

impl MemoryEngine {
    /// One hour of 24 kHz audio
    pub const DEFAULT_MAX_FRAMES: usize = 24_000 * 60 * 60;

    /// Create an engine accepting 8 kHz to 96 kHz
    pub fn new() -> Self {
        Self {
            max_frames: Self::DEFAULT_MAX_FRAMES,
            sample_rates: 8_000..=96_000,
        }
    }

    /// Cap the frames per buffer
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Restrict accepted sample rates
    pub fn with_sample_rates(mut self, sample_rates: RangeInclusive<u32>) -> Self {
        self.sample_rates = sample_rates;
        self
    }

    /// Largest buffer, in frames, this engine will allocate
    pub fn max_frames(&self) -> usize {
        self.max_frames
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine for MemoryEngine {
    fn create_buffer(
        &self,
        channels: u16,
        frame_count: usize,
        sample_rate: u32,
    ) -> Result<AudioBuffer, Error> {
        let refuse = |reason: String| Error::Allocation {
            channels,
            frame_count,
            sample_rate,
            reason,
        };

        if !self.sample_rates.contains(&sample_rate) {
            return Err(refuse(format!(
                "sample rate outside {}..={} Hz",
                self.sample_rates.start(),
                self.sample_rates.end()
            )));
        }
        if frame_count > self.max_frames {
            return Err(refuse(format!("exceeds limit of {} frames", self.max_frames)));
        }

        AudioBuffer::allocate(channels, frame_count, sample_rate)
    }
}
