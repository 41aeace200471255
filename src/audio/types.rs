// ABOUTME: Core audio type definitions
// ABOUTME: Sample (16-bit), PcmFormat descriptor, AudioBuffer with planar f32 channels

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 16-bit signed PCM sample
/// Range: -32768 to 32767
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Sample(pub i16);

impl Sample {
    /// Largest sample, normalizes to 32767/32768
    pub const MAX: Self = Self(i16::MAX);
    /// Smallest sample, normalizes to exactly -1.0
    pub const MIN: Self = Self(i16::MIN);
    /// Silence
    pub const ZERO: Self = Self(0);

    /// Normalization divisor (2^15): MIN maps to exactly -1.0, MAX to 32767/32768
    pub const SCALE: f32 = 32768.0;

    /// Convert from 16-bit little-endian bytes
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(i16::from_le_bytes(bytes))
    }

    /// Convert to 16-bit little-endian bytes
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Normalize into [-1.0, 1.0)
    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from(self.0) / Self::SCALE
    }
}

/// Raw PCM format descriptor
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmFormat {
    /// Frames per second
    pub sample_rate: u32,
    /// Interleaved channel count
    pub channels: u16,
    /// Bits per sample per channel
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// What the speech service emits: 24 kHz, mono, 16-bit.
    pub const TTS: Self = Self {
        sample_rate: 24_000,
        channels: 1,
        bits_per_sample: 16,
    };

    /// Highest sample rate `validate` accepts
    pub const MAX_SAMPLE_RATE: u32 = 384_000;

    /// Bytes per sample of one channel
    #[inline]
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame across all channels, `None` on overflow
    #[inline]
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bytes_per_sample())
    }

    /// Bytes per second of audio, `None` on overflow
    #[inline]
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()?))
    }

    /// Check the format is one the pipeline can process (mono 16-bit PCM,
    /// 1 Hz to [`Self::MAX_SAMPLE_RATE`])
    pub fn validate(&self) -> Result<(), Error> {
        if self.bits_per_sample != 16 {
            return Err(Error::UnsupportedFormat(format!(
                "bit depth {} (only 16-bit PCM is supported)",
                self.bits_per_sample
            )));
        }
        if self.channels != 1 {
            return Err(Error::UnsupportedFormat(format!(
                "{} channels (only mono is supported)",
                self.channels
            )));
        }
        if self.sample_rate == 0 || self.sample_rate > Self::MAX_SAMPLE_RATE {
            return Err(Error::UnsupportedFormat(format!(
                "sample rate of {} Hz (must be 1..={})",
                self.sample_rate,
                Self::MAX_SAMPLE_RATE
            )));
        }
        Ok(())
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::TTS
    }
}

/// Decoded audio ready for playback scheduling
///
/// Channels are stored planar, one slice of normalized `f32` per channel.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    frame_count: usize,
    channels: Vec<Box<[f32]>>,
}

impl AudioBuffer {
    /// Allocate a silent buffer
    ///
    /// # Arguments
    /// * `channels` - Number of channels, at least 1
    /// * `frame_count` - Samples per channel
    /// * `sample_rate` - Frames per second, non-zero
    pub fn allocate(channels: u16, frame_count: usize, sample_rate: u32) -> Result<Self, Error> {
        let fail = |reason: String| Error::Allocation {
            channels,
            frame_count,
            sample_rate,
            reason,
        };

        if channels == 0 {
            return Err(fail("channel count must be at least 1".to_string()));
        }
        if sample_rate == 0 {
            return Err(fail("sample rate must be non-zero".to_string()));
        }

        let mut data = Vec::with_capacity(usize::from(channels));
        for _ in 0..channels {
            let mut channel: Vec<f32> = Vec::new();
            channel
                .try_reserve_exact(frame_count)
                .map_err(|e| fail(e.to_string()))?;
            channel.resize(frame_count, 0.0);
            data.push(channel.into_boxed_slice());
        }

        Ok(Self {
            sample_rate,
            frame_count,
            channels: data,
        })
    }

    /// Channel count
    pub fn number_of_channels(&self) -> u16 {
        // allocate() takes the count as u16
        self.channels.len() as u16
    }

    /// Samples per channel
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Frames per second
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Playback length at the buffer's sample rate
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frame_count as f64 / f64::from(self.sample_rate))
    }

    /// Samples of one channel, `None` if the index is out of range
    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(|c| &c[..])
    }

    /// Writable samples of one channel, `None` if the index is out of range
    pub fn channel_data_mut(&mut self, channel: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(channel).map(|c| &mut c[..])
    }
}
