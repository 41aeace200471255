// ABOUTME: Plays speech API output on the default audio device
// ABOUTME: Decodes base64 PCM into a buffer via cpal and waits for the clip to end

use clap::Parser;
use radiospot::audio::base64::decode_base64;
use radiospot::audio::decode::decode_pcm_to_buffer;
use radiospot::audio::{AudioOutput, CpalOutput};
use radiospot::tts::SpeechResponse;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Play TTS output
#[derive(Parser, Debug)]
#[command(name = "play_tts")]
#[command(about = "Play base64 PCM speech on the default output device", long_about = None)]
struct Args {
    /// File holding the speech API JSON response
    input: PathBuf,

    /// Treat the input as bare base64 PCM instead of JSON
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)?;
    let base64_pcm = if args.raw {
        text
    } else {
        SpeechResponse::from_json(&text)?.audio_data()?.to_string()
    };

    let mut output = CpalOutput::new()?;
    let pcm = decode_base64(&base64_pcm)?;
    let buffer = Arc::new(decode_pcm_to_buffer(&pcm, &output)?);

    println!("Playing {:.2}s of audio...", buffer.duration().as_secs_f64());
    output.play(Arc::clone(&buffer))?;

    // Stream callbacks run on cpal's thread; poll until the clip ends
    while output.is_playing() {
        std::thread::sleep(Duration::from_millis(50));
    }
    output.stop();

    println!("Done");
    Ok(())
}
