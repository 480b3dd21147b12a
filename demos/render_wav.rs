//! Renders every preset voice striking the C-nine scale into WAV files.
//!
//! Usage: `cargo run --example render_wav --features wav -- [output dir]`

use anyhow::Result;
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use windchime::wav::write_wav;
use windchime::{Chime, ChimeConfig, PolySynth, Scale, VoiceType, render, to_i16};

const SECONDS_PER_NOTE: f64 = 0.5;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    for voice in VoiceType::ALL {
        let config = ChimeConfig::default()
            .with_preset_scale(Scale::CNine)
            .with_voice(voice);
        let mut chime = Chime::new(config, |table, rate| Ok(PolySynth::new(table, rate)))?;

        let mut samples = Vec::new();
        for index in 0..chime.scale().len() {
            chime.strike_index(index, 1.0)?;
            samples.extend(render(chime.synth_mut(), SECONDS_PER_NOTE));
        }
        let tail = chime.envelope().ring_time();
        samples.extend(render(chime.synth_mut(), tail));

        let path = out_dir.join(format!("chime_{}.wav", voice));
        write_wav(&path, &to_i16(&samples), chime.sample_rate())?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
