// ABOUTME: Base64 transport decoding for speech audio
// ABOUTME: Forgiving (atob-compatible) decode of TTS base64 into raw PCM bytes and back

use crate::error::Error;
use ::base64::alphabet;
use ::base64::engine::general_purpose::STANDARD;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use ::base64::{DecodeError, Engine as _};

/// Standard alphabet; padding optional, non-zero trailing bits discarded
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode base64 text into raw bytes, the way a browser's `atob` does
///
/// ASCII whitespace anywhere in the input is ignored and padding is
/// optional. If the remaining length is a multiple of four, up to two
/// trailing `=` are dropped; any other `=` is an error. Invalid input fails
/// with [`Error::Decode`].
pub fn decode_base64(text: &str) -> Result<Vec<u8>, Error> {
    let mut compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if compact.len() % 4 == 0 {
        for _ in 0..2 {
            if compact.last() == Some(&b'=') {
                compact.pop();
            }
        }
    }
    if let Some(offset) = compact.iter().position(|&b| b == b'=') {
        return Err(DecodeError::InvalidByte(offset, b'=').into());
    }

    Ok(FORGIVING.decode(&compact)?)
}

/// Encode raw bytes as padded standard base64
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
