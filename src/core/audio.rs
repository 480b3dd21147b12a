//! Audio signal trait for sample-rate-aware signals.

use crate::Signal;

/// A signal that is rendered at a known sample rate.
///
/// Chime backends are built at runtime from a configured playback rate, so the
/// rate is reported by the value rather than encoded in the type.
///
/// # Examples
///
/// ```
/// use windchime::{AudioSignal, PolySynth, WaveformTable};
///
/// let table = WaveformTable::sine(128, 0.5).unwrap();
/// let synth = PolySynth::new(&table, 11020);
/// assert_eq!(synth.sample_rate(), 11020.0);
/// ```
pub trait AudioSignal: Signal {
    /// Gets the sample rate at which this audio is being generated, in Hz.
    fn sample_rate(&self) -> f64;

    /// Number of samples covering `seconds` of audio at this signal's rate.
    fn samples_for(&self, seconds: f64) -> usize {
        (seconds.max(0.0) * self.sample_rate()).round() as usize
    }
}
