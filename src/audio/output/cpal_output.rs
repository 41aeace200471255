// ABOUTME: cpal-based audio output
// ABOUTME: Plays AudioBuffers on the default output device, one clip at a time

use crate::audio::output::{AudioOutput, PlaybackEngine};
use crate::audio::AudioBuffer;
use crate::error::Error;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Audio output on the system's default device
///
/// Not `Send`: the underlying stream must stay on the thread that created it.
pub struct CpalOutput {
    device: cpal::Device,
    channels: u16,
    stream: Option<cpal::Stream>,
    finished: Arc<AtomicBool>,
}

impl CpalOutput {
    /// Open the default output device
    pub fn new() -> Result<Self, Error> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Output("No output device available".to_string()))?;
        let config = device
            .default_output_config()
            .map_err(|e| Error::Output(e.to_string()))?;

        log::info!(
            "Using output device: {} ({}ch)",
            device.name().unwrap_or_else(|_| "unknown".to_string()),
            config.channels()
        );

        Ok(Self {
            device,
            channels: config.channels(),
            stream: None,
            finished: Arc::new(AtomicBool::new(true)),
        })
    }

    fn supports_rate(&self, sample_rate: u32) -> bool {
        match self.device.supported_output_configs() {
            Ok(mut configs) => configs.any(|range| {
                range.min_sample_rate().0 <= sample_rate && sample_rate <= range.max_sample_rate().0
            }),
            Err(e) => {
                log::warn!("Could not query output configs: {}", e);
                false
            }
        }
    }
}

impl PlaybackEngine for CpalOutput {
    fn create_buffer(
        &self,
        channels: u16,
        frame_count: usize,
        sample_rate: u32,
    ) -> Result<AudioBuffer, Error> {
        if !self.supports_rate(sample_rate) {
            return Err(Error::Allocation {
                channels,
                frame_count,
                sample_rate,
                reason: "output device does not support this sample rate".to_string(),
            });
        }
        AudioBuffer::allocate(channels, frame_count, sample_rate)
    }
}

impl AudioOutput for CpalOutput {
    fn play(&mut self, buffer: Arc<AudioBuffer>) -> Result<(), Error> {
        self.stop();

        let config = cpal::StreamConfig {
            channels: self.channels,
            sample_rate: cpal::SampleRate(buffer.sample_rate()),
            buffer_size: cpal::BufferSize::Default,
        };

        let finished = Arc::new(AtomicBool::new(false));
        let done = Arc::clone(&finished);
        let device_channels = usize::from(self.channels).max(1);
        let last_source = usize::from(buffer.number_of_channels()).saturating_sub(1);
        let mut position = 0;

        let stream = self
            .device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(device_channels) {
                        for (ch, out) in frame.iter_mut().enumerate() {
                            // Mono sources are copied to every device channel
                            *out = buffer
                                .channel_data(ch.min(last_source))
                                .and_then(|samples| samples.get(position))
                                .copied()
                                .unwrap_or(0.0);
                        }
                        position += 1;
                    }
                    if position >= buffer.frame_count() {
                        done.store(true, Ordering::Release);
                    }
                },
                |err| log::error!("Output stream error: {}", err),
                None,
            )
            .map_err(|e| Error::Output(e.to_string()))?;

        stream.play().map_err(|e| Error::Output(e.to_string()))?;

        self.stream = Some(stream);
        self.finished = finished;
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(e) = stream.pause() {
                log::debug!("Pausing stream before drop failed: {}", e);
            }
        }
        self.finished.store(true, Ordering::Release);
    }

    fn is_playing(&self) -> bool {
        self.stream.is_some() && !self.finished.load(Ordering::Acquire)
    }
}

impl Drop for CpalOutput {
    fn drop(&mut self) {
        self.stop();
    }
}
