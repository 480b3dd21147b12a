//! Plays the Westminster quarters with notes resolved at compile time.
//!
//! Usage: `cargo run --example note_macro --features macros`

mod common;

use anyhow::Result;
use common::{open_chime, wait};
use simple_logger::SimpleLogger;
use std::time::Duration;
use windchime::{ChimeConfig, Material, VoiceType, note, scale};

const QUARTERS: [u8; 4] = scale!("G#4", "F#4", "E4", "B3");

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let config = ChimeConfig::default()
        .with_voice(VoiceType::Bell)
        .with_material(Material::Brass);
    let (mut chime, _stream) = open_chime(config)?;

    let changes = [[0, 1, 2, 3], [2, 0, 1, 3], [2, 1, 0, 2], [0, 2, 1, 3]];
    for change in changes {
        for index in change {
            chime.strike(QUARTERS[index], 1.0)?;
            wait(Duration::from_millis(700));
        }
        wait(Duration::from_millis(700));
    }

    // The hour bell
    chime.strike(note!("E3"), 1.0)?;
    wait(Duration::from_secs_f64(chime.envelope().ring_time()));
    Ok(())
}
