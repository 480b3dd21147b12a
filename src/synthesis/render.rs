//! Offline rendering of signals into sample buffers.

use crate::{AudioSignal, Signal};

/// Renders `seconds` of audio from `signal` at its own sample rate.
///
/// # Examples
///
/// ```
/// use windchime::{Chime, ChimeConfig, PolySynth, render};
///
/// let mut chime = Chime::new(ChimeConfig::default(), |table, rate| {
///     Ok(PolySynth::new(table, rate))
/// })
/// .unwrap();
/// chime.strike(76, 1.0).unwrap();
///
/// let samples = render(chime.synth_mut(), 0.5);
/// assert_eq!(samples.len(), 5510);
/// ```
pub fn render<S: AudioSignal + ?Sized>(signal: &mut S, seconds: f64) -> Vec<f64> {
    let mut buffer = vec![0.0; signal.samples_for(seconds)];
    signal.process(&mut buffer);
    buffer
}

/// Fills `buffer` from `signal`.
pub fn render_into<S: Signal + ?Sized>(signal: &mut S, buffer: &mut [f64]) {
    signal.process(buffer);
}

/// Converts samples in [-1.0, 1.0] to signed 16-bit PCM, clipping anything louder.
///
/// # Examples
///
/// ```
/// use windchime::to_i16;
///
/// assert_eq!(to_i16(&[0.0, 0.5, 1.0, -1.0, 3.0]), vec![0, 16383, 32767, -32767, 32767]);
/// ```
pub fn to_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| (s.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16)
        .collect()
}
