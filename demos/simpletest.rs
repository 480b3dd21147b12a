//! Plays a transposed Hava Negila scale on a tubular steel chime, then
//! strikes random tubes in bursts.
//!
//! Run with `RUST_LOG=debug` to see the resolved scale and envelope.

mod common;

use anyhow::Result;
use common::{midi_note_to_name, open_chime, wait};
use simple_logger::SimpleLogger;
use std::time::Duration;
use windchime::{ChimeConfig, Material, RandomPattern, Scale, Striker, VoiceType};

const BURSTS: usize = 6;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let config = ChimeConfig::default()
        .with_preset_scale(Scale::HavaNegila)
        .with_scale_offset(5)
        .with_voice(VoiceType::Tubular)
        .with_material(Material::SteelEmt)
        .with_striker(Striker::Metal)
        .with_loudness(0.4);
    let (mut chime, _stream) = open_chime(config)?;

    // Play the scale notes in order
    let notes = chime.scale().to_vec();
    for note in notes {
        println!("{}", midi_note_to_name(note));
        chime.strike(note, 1.0)?;
        wait(Duration::from_millis(400));
    }
    wait(Duration::from_secs(1));

    let mut rng = rand::thread_rng();
    for _ in 0..BURSTS {
        let burst = RandomPattern.next_burst(&mut rng, chime.scale().len());
        for strike in &burst.strikes {
            chime.strike_index(strike.index, strike.amplitude)?;
            wait(strike.wait);
        }
        wait(burst.pause);
    }

    // Let the last notes ring out
    wait(Duration::from_secs_f64(chime.envelope().ring_time()));
    Ok(())
}
