//! Common utilities for the audio demos.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use std::thread;
use std::time::Duration;
use windchime::{Chime, ChimeConfig, PolySynth, SharedSynth, Signal};

/// A chime whose voices are rendered by the default output device.
pub type DeviceChime = Chime<SharedSynth<PolySynth>>;

/// Builds a chime that plays through the default output device.
///
/// The chime's sample rate is replaced by the device rate. Keep the returned
/// stream alive for as long as the chime should be heard.
pub fn open_chime(config: ChimeConfig) -> Result<(DeviceChime, cpal::Stream)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let supported = device.default_output_config()?;
    let config = config.with_sample_rate(supported.sample_rate().0);

    let mut audio = None;
    let chime = Chime::new(config, |table, rate| {
        let synth = SharedSynth::new(PolySynth::new(table, rate));
        audio = Some(synth.clone());
        Ok(synth)
    })?;
    let audio = audio.ok_or_else(|| anyhow::anyhow!("Backend was not created"))?;

    let stream_config = supported.config();
    let stream = match supported.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32>(&device, &stream_config, audio)?,
        SampleFormat::I16 => create_audio_stream::<i16>(&device, &stream_config, audio)?,
        SampleFormat::U16 => create_audio_stream::<u16>(&device, &stream_config, audio)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    log::info!(
        "playing at {} Hz on {}",
        stream_config.sample_rate.0,
        device.name().unwrap_or_else(|_| "unknown device".to_string())
    );
    Ok((chime, stream))
}

/// Creates an audio stream that pulls samples from the shared synth.
fn create_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    synth: SharedSynth<PolySynth>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut guard) = synth.lock() else {
                data.fill(T::EQUILIBRIUM);
                return;
            };
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(guard.next_sample());
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Sleeps, leaving the audio thread to render.
pub fn wait(duration: Duration) {
    thread::sleep(duration);
}

/// Formats a MIDI note as a pitch name, e.g. 70 as "A#4".
#[allow(dead_code)]
pub fn midi_note_to_name(note: u8) -> String {
    const NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
    let octave = i32::from(note) / 12 - 1;
    format!("{}{}", NAMES[usize::from(note % 12)], octave)
}
