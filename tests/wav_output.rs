#![cfg(feature = "wav")]

use windchime::wav::{render_to_wav, write_wav};
use windchime::{Chime, ChimeConfig, PolySynth};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("windchime-{}-{}.wav", name, std::process::id()))
}

#[test]
fn test_write_wav_header_and_samples() {
    let path = temp_path("write");
    write_wav(&path, &[0, 1000, -1000, i16::MAX], 11020).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 11020);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(samples, vec![0, 1000, -1000, i16::MAX]);

    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_render_strike_to_wav() {
    let path = temp_path("strike");
    let mut chime =
        Chime::new(ChimeConfig::default(), |table, rate| Ok(PolySynth::new(table, rate))).unwrap();
    chime.strike(72, 1.0).unwrap();

    render_to_wav(chime.synth_mut(), 1.0, &path).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, 11020);
    assert_eq!(reader.duration(), 11020);
    let loudest = reader
        .samples::<i16>()
        .map(|s| i32::from(s.unwrap()).abs())
        .max()
        .unwrap();
    assert!(loudest > 1000);

    std::fs::remove_file(path).unwrap();
}
