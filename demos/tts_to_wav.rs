// ABOUTME: Converts speech API output into a downloadable WAV file
// ABOUTME: Accepts a generateContent JSON response or bare base64 PCM

use clap::Parser;
use radiospot::audio::base64::decode_base64;
use radiospot::audio::decode::PcmDecoder;
use radiospot::audio::wav::suggested_file_name;
use radiospot::audio::{MemoryEngine, PcmFormat, WavEncoder};
use radiospot::tts::SpeechResponse;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Convert TTS output to WAV
#[derive(Parser, Debug)]
#[command(name = "tts_to_wav")]
#[command(about = "Wrap base64 PCM speech in a WAV container", long_about = None)]
struct Args {
    /// File holding the speech API JSON response
    input: PathBuf,

    /// Treat the input as bare base64 PCM instead of JSON
    #[arg(long)]
    raw: bool,

    /// Business name used to derive the output file name
    #[arg(short, long, default_value = "Radio Spot")]
    business: String,

    /// Explicit output path (overrides the derived name)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)?;

    let (base64_pcm, format) = if args.raw {
        (text, PcmFormat::TTS)
    } else {
        let response = SpeechResponse::from_json(&text)?;
        let inline = response.inline_audio()?;
        (inline.data.clone(), inline.pcm_format().unwrap_or_default())
    };

    // Same format for the preview buffer and the file header
    let pcm = decode_base64(&base64_pcm)?;
    let buffer = PcmDecoder::new(format).decode_to_buffer(&pcm, &MemoryEngine::new())?;
    println!(
        "Decoded {} frames ({:.2}s at {}Hz)",
        buffer.frame_count(),
        buffer.duration().as_secs_f64(),
        buffer.sample_rate()
    );

    let wav = WavEncoder::new(format).encode_pcm(&pcm)?;
    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_file_name(&args.business)));
    wav.write_to(BufWriter::new(File::create(&path)?))?;

    println!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        wav.file_len(),
        wav.mime_type()
    );
    Ok(())
}
