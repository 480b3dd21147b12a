//! A wind chime in a breeze.
//!
//! Usage: `cargo run --example wind_chime -- [wind speed 0-50] [gusts]`
//!
//! Each gust swings the striker into a random tube and across a few of its
//! neighbours. Stronger wind strikes harder and pauses less between gusts.

mod common;

use anyhow::{Context, Result};
use common::{open_chime, wait};
use simple_logger::SimpleLogger;
use std::time::Duration;
use windchime::{ChimeConfig, Material, Scale, Striker, VoiceType, WindPattern};

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut args = std::env::args().skip(1);
    let wind_speed: f64 = match args.next() {
        Some(arg) => arg.parse().context("wind speed must be a number")?,
        None => 20.0,
    };
    let gusts: usize = match args.next() {
        Some(arg) => arg.parse().context("gust count must be a whole number")?,
        None => 12,
    };

    let config = ChimeConfig::default()
        .with_preset_scale(Scale::CorinthianBellsEb)
        .with_scale_offset(-12)
        .with_voice(VoiceType::Bell)
        .with_material(Material::Brass)
        .with_striker(Striker::HardWood)
        .with_loudness(0.5);
    let (mut chime, _stream) = open_chime(config)?;

    let wind = WindPattern::new(wind_speed);
    println!(
        "wind speed {:.1}, strike amplitude {:.2}",
        wind.wind_speed(),
        wind.amplitude()
    );

    let mut rng = rand::thread_rng();
    for _ in 0..gusts {
        let gust = wind.next_gust(&mut rng, chime.scale().len());
        for strike in &gust.strikes {
            chime.strike_index(strike.index, strike.amplitude)?;
            wait(strike.wait);
        }
        wait(gust.pause);
    }

    wait(Duration::from_secs_f64(chime.envelope().ring_time()));
    Ok(())
}
