// ABOUTME: WAV container encoding
// ABOUTME: Canonical 44-byte RIFF/WAVE header around raw PCM, plus header parsing

use crate::audio::base64::decode_base64;
use crate::audio::PcmFormat;
use crate::error::Error;
use std::io::Write;

/// Size of the canonical PCM WAV header
pub const HEADER_LEN: usize = 44;

/// Bytes of the RIFF chunk that precede the PCM data, excluding "RIFF" + size
const RIFF_OVERHEAD: u32 = 36;
const FMT_CHUNK_LEN: u32 = 16;
const FORMAT_PCM: u16 = 1;

/// Fields of a canonical PCM WAV header
///
/// Built by [`WavHeader::for_pcm`] or [`WavHeader::parse`]; the derived
/// byte rate and block align always agree with the format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WavHeader {
    format: PcmFormat,
    data_len: u32,
    byte_rate: u32,
    block_align: u16,
}

impl WavHeader {
    /// Header describing `data_len` bytes of PCM in `format`
    ///
    /// `format` must pass [`PcmFormat::validate`].
    pub fn for_pcm(format: PcmFormat, data_len: usize) -> Result<Self, Error> {
        format.validate()?;
        let data_len = u32::try_from(data_len)
            .ok()
            .filter(|len| len.checked_add(RIFF_OVERHEAD).is_some())
            .ok_or(Error::PayloadTooLarge(data_len))?;
        let (byte_rate, block_align) = format
            .byte_rate()
            .zip(format.block_align())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!("{:?} overflows header fields", format))
            })?;

        Ok(Self {
            format,
            data_len,
            byte_rate,
            block_align,
        })
    }

    /// Sample rate, channel count and bit depth
    pub fn format(&self) -> &PcmFormat {
        &self.format
    }

    /// Length of the data sub-chunk in bytes
    pub fn data_len(&self) -> u32 {
        self.data_len
    }

    /// Value of the ByteRate field
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// Value of the BlockAlign field
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// Value of the RIFF ChunkSize field
    pub fn chunk_size(&self) -> u32 {
        // for_pcm and parse both bound data_len
        RIFF_OVERHEAD + self.data_len
    }

    /// Serialize; multi-byte fields are little-endian
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];

        // RIFF chunk descriptor
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.chunk_size().to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");

        // fmt sub-chunk
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
        out[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        out[22..24].copy_from_slice(&self.format.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.format.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.format.bits_per_sample.to_le_bytes());

        // data sub-chunk
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_len.to_le_bytes());

        out
    }

    /// Parse a canonical header from the start of `buf`
    ///
    /// Only the layout this crate writes is accepted: `fmt ` immediately
    /// after `WAVE`, a 16-byte PCM format chunk, then `data`. Any channel
    /// count and rate is accepted as long as the derived fields match.
    pub fn parse(buf: &[u8]) -> Result<Self, Error> {
        if buf.len() < HEADER_LEN {
            return Err(Error::InvalidWav(format!(
                "{} bytes is too short for a header",
                buf.len()
            )));
        }
        expect_tag(buf, 0, b"RIFF")?;
        expect_tag(buf, 8, b"WAVE")?;
        expect_tag(buf, 12, b"fmt ")?;
        expect_tag(buf, 36, b"data")?;

        if read_u32(buf, 16) != FMT_CHUNK_LEN {
            return Err(Error::InvalidWav("fmt chunk is not 16 bytes".to_string()));
        }
        if read_u16(buf, 20) != FORMAT_PCM {
            return Err(Error::InvalidWav("not PCM format".to_string()));
        }

        let header = Self {
            format: PcmFormat {
                channels: read_u16(buf, 22),
                sample_rate: read_u32(buf, 24),
                bits_per_sample: read_u16(buf, 34),
            },
            data_len: read_u32(buf, 40),
            byte_rate: read_u32(buf, 28),
            block_align: read_u16(buf, 32),
        };

        if header.format.byte_rate() != Some(header.byte_rate)
            || header.format.block_align() != Some(header.block_align)
        {
            return Err(Error::InvalidWav(
                "byte rate or block align disagrees with format".to_string(),
            ));
        }
        if header.data_len.checked_add(RIFF_OVERHEAD) != Some(read_u32(buf, 4)) {
            return Err(Error::InvalidWav(
                "RIFF size disagrees with data size".to_string(),
            ));
        }

        Ok(header)
    }
}

fn expect_tag(buf: &[u8], offset: usize, tag: &[u8; 4]) -> Result<(), Error> {
    if &buf[offset..offset + 4] == tag {
        Ok(())
    } else {
        Err(Error::InvalidWav(format!(
            "missing {} tag at offset {}",
            String::from_utf8_lossy(tag).trim_end(),
            offset
        )))
    }
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

/// A complete WAV file held in memory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WavFile {
    header: WavHeader,
    bytes: Vec<u8>,
}

impl WavFile {
    /// Media type to label downloads with
    pub const MIME_TYPE: &'static str = "audio/wav";

    /// Wrap existing WAV bytes, checking the header and data length
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Error> {
        let header = WavHeader::parse(&bytes)?;
        let available = bytes.len() - HEADER_LEN;
        if available != header.data_len() as usize {
            return Err(Error::InvalidWav(format!(
                "header declares {} data bytes, found {}",
                header.data_len(), available
            )));
        }
        Ok(Self { header, bytes })
    }

    /// Parsed header fields
    pub fn header(&self) -> &WavHeader {
        &self.header
    }

    /// The raw PCM that follows the header
    pub fn pcm_data(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// The whole file, header included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the whole file, header included
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total file length in bytes, header included (never below 44)
    pub fn file_len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the data chunk is empty
    pub fn has_no_audio(&self) -> bool {
        self.header.data_len() == 0
    }

    /// Media type to label downloads with
    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    /// Write the whole file to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(&self.bytes)?;
        writer.flush()?;
        Ok(())
    }
}

/// Wraps raw PCM in a WAV container
#[derive(Clone, Debug, Default)]
pub struct WavEncoder {
    format: PcmFormat,
}

impl WavEncoder {
    /// Encoder writing headers for `format`
    pub fn new(format: PcmFormat) -> Self {
        Self { format }
    }

    /// Prepend a header to `pcm`; the bytes are copied verbatim
    pub fn encode_pcm(&self, pcm: &[u8]) -> Result<WavFile, Error> {
        let header = WavHeader::for_pcm(self.format, pcm.len())?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + pcm.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(pcm);

        log::debug!(
            "Encoded WAV: {} data bytes, {} total",
            header.data_len(),
            bytes.len()
        );
        Ok(WavFile { header, bytes })
    }

    /// Decode base64 PCM and wrap it
    pub fn encode_base64(&self, text: &str) -> Result<WavFile, Error> {
        let pcm = decode_base64(text)?;
        self.encode_pcm(&pcm)
    }
}

/// Build a 24 kHz mono 16-bit WAV file from base64-encoded PCM
pub fn encode_wav(base64_pcm: &str) -> Result<WavFile, Error> {
    WavEncoder::default().encode_base64(base64_pcm)
}

/// Download name for an advert: `ad_<business name>.wav`, with each run of
/// whitespace replaced by one underscore
pub fn suggested_file_name(business_name: &str) -> String {
    let mut name = String::with_capacity(business_name.len() + 7);
    name.push_str("ad_");
    let mut in_space = false;
    for ch in business_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name.push_str(".wav");
    name
}
