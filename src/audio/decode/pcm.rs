// ABOUTME: PCM decoder implementation
// ABOUTME: 16-bit little-endian mono PCM to samples and normalized playback buffers

use crate::audio::decode::Decoder;
use crate::audio::{AudioBuffer, PcmFormat, PlaybackEngine, Sample};
use crate::error::Error;

/// Decoder for raw 16-bit little-endian PCM
#[derive(Clone, Debug, Default)]
pub struct PcmDecoder {
    format: PcmFormat,
}

impl PcmDecoder {
    /// Decoder for `format`; checked against [`PcmFormat::validate`] on use
    pub fn new(format: PcmFormat) -> Self {
        Self { format }
    }

    /// Format the decoder assumes
    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    /// Number of whole frames in `data`
    #[inline]
    pub fn frame_count(&self, data: &[u8]) -> usize {
        data.len() / 2
    }

    /// Decode `data` and write normalized samples into a buffer from `engine`
    pub fn decode_to_buffer(
        &self,
        data: &[u8],
        engine: &dyn PlaybackEngine,
    ) -> Result<AudioBuffer, Error> {
        self.format.validate()?;

        let frame_count = self.frame_count(data);
        let mut buffer =
            engine.create_buffer(self.format.channels, frame_count, self.format.sample_rate)?;

        let channel = buffer.channel_data_mut(0).ok_or_else(|| Error::Allocation {
            channels: self.format.channels,
            frame_count,
            sample_rate: self.format.sample_rate,
            reason: "engine returned a buffer without channels".to_string(),
        })?;
        if channel.len() != frame_count {
            return Err(Error::Allocation {
                channels: self.format.channels,
                frame_count,
                sample_rate: self.format.sample_rate,
                reason: format!("engine returned {} frames", channel.len()),
            });
        }

        for (out, c) in channel.iter_mut().zip(data.chunks_exact(2)) {
            *out = Sample::from_le_bytes([c[0], c[1]]).to_f32();
        }
        warn_if_truncated(data);

        log::debug!(
            "Decoded {} frames at {}Hz ({:.2}s)",
            frame_count,
            buffer.sample_rate(),
            buffer.duration().as_secs_f64()
        );
        Ok(buffer)
    }
}

impl Decoder for PcmDecoder {
    fn decode(&self, data: &[u8]) -> Result<Vec<Sample>, Error> {
        self.format.validate()?;

        let samples = data
            .chunks_exact(2)
            .map(|c| Sample::from_le_bytes([c[0], c[1]]))
            .collect();
        warn_if_truncated(data);
        Ok(samples)
    }
}

fn warn_if_truncated(data: &[u8]) {
    if data.len() % 2 != 0 {
        log::warn!(
            "PCM payload has odd length {}; dropping trailing byte",
            data.len()
        );
    }
}
