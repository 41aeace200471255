use radiospot::audio::{AudioBuffer, PcmFormat, Sample};
use radiospot::error::Error;
use std::time::Duration;

#[test]
fn test_sample_from_le_bytes() {
    assert_eq!(Sample::from_le_bytes([0x00, 0x04]).0, 1024);
    assert_eq!(Sample::from_le_bytes([0xFF, 0xFF]).0, -1);
    assert_eq!(Sample::from_le_bytes([0x00, 0x80]), Sample::MIN);
    assert_eq!(Sample(1024).to_le_bytes(), [0x00, 0x04]);
}

#[test]
fn test_sample_normalization_is_asymmetric() {
    assert_eq!(Sample::MIN.to_f32(), -1.0);
    assert_eq!(Sample::ZERO.to_f32(), 0.0);
    assert_eq!(Sample::MAX.to_f32(), 32767.0 / 32768.0);
    assert!(Sample::MAX.to_f32() < 1.0);
    assert_eq!(Sample(16384).to_f32(), 0.5);
}

#[test]
fn test_tts_format_defaults() {
    let format = PcmFormat::default();
    assert_eq!(format, PcmFormat::TTS);
    assert_eq!(format.sample_rate, 24000);
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), Some(2));
    assert_eq!(format.byte_rate(), Some(48000));
    assert!(format.validate().is_ok());
}

#[test]
fn test_format_validation_rejects_non_goals() {
    let stereo = PcmFormat {
        channels: 2,
        ..PcmFormat::TTS
    };
    assert!(matches!(stereo.validate(), Err(Error::UnsupportedFormat(_))));

    let deep = PcmFormat {
        bits_per_sample: 24,
        ..PcmFormat::TTS
    };
    assert!(matches!(deep.validate(), Err(Error::UnsupportedFormat(_))));

    let silent = PcmFormat {
        sample_rate: 0,
        ..PcmFormat::TTS
    };
    assert!(matches!(silent.validate(), Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_sample_rate_is_bounded() {
    let fastest = PcmFormat {
        sample_rate: PcmFormat::MAX_SAMPLE_RATE,
        ..PcmFormat::TTS
    };
    assert!(fastest.validate().is_ok());

    let absurd = PcmFormat {
        sample_rate: 4_000_000_000,
        ..PcmFormat::TTS
    };
    assert!(matches!(absurd.validate(), Err(Error::UnsupportedFormat(_))));
    assert_eq!(absurd.byte_rate(), None);
}

#[test]
fn test_derived_fields_report_overflow() {
    let wide = PcmFormat {
        channels: u16::MAX,
        ..PcmFormat::TTS
    };
    assert_eq!(wide.block_align(), None);
    assert_eq!(wide.byte_rate(), None);
}

#[test]
fn test_format_loads_from_json() {
    let format: PcmFormat =
        serde_json::from_str(r#"{"sample_rate":16000,"channels":1,"bits_per_sample":16}"#)
            .unwrap();
    assert_eq!(format.sample_rate, 16000);
    assert_eq!(format.byte_rate(), Some(32000));
}

#[test]
fn test_audio_buffer_allocation() {
    let buffer = AudioBuffer::allocate(1, 48000, 24000).unwrap();
    assert_eq!(buffer.number_of_channels(), 1);
    assert_eq!(buffer.frame_count(), 48000);
    assert_eq!(buffer.sample_rate(), 24000);
    assert_eq!(buffer.duration(), Duration::from_secs(2));
    assert!(buffer.channel_data(0).unwrap().iter().all(|&s| s == 0.0));
    assert!(buffer.channel_data(1).is_none());
}

#[test]
fn test_audio_buffer_rejects_degenerate_shapes() {
    assert!(matches!(
        AudioBuffer::allocate(0, 10, 24000),
        Err(Error::Allocation { channels: 0, .. })
    ));
    assert!(matches!(
        AudioBuffer::allocate(1, 10, 0),
        Err(Error::Allocation { sample_rate: 0, .. })
    ));
}

#[test]
fn test_audio_buffer_allocation_failure_is_an_error() {
    // Far beyond any address space; reservation must fail rather than abort
    let result = AudioBuffer::allocate(1, usize::MAX / 2, 24000);
    assert!(matches!(result, Err(Error::Allocation { .. })));
}
