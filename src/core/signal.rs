//! Core signal trait and the pitch-control trait.

/// Common interface for anything that can generate samples.
///
/// Oscillators, envelope-shaped voices, and the mixed output of a
/// [`PolySynth`](crate::PolySynth) all implement this trait.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Minimal trait for anything with a controllable pitch.
///
/// # Examples
///
/// ```
/// use windchime::{Pitched, WaveformTable, WavetableOscillator};
///
/// let table = WaveformTable::sine(128, 1.0).unwrap();
/// let mut osc = WavetableOscillator::new(&table, 440.0, 11020.0);
/// assert!((osc.frequency() - 440.0).abs() < 1e-9);
///
/// osc.set_frequency(880.0);
/// assert!((osc.frequency() - 880.0).abs() < 1e-9);
/// ```
pub trait Pitched {
    /// Sets the frequency of the signal in Hz.
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency of the signal in Hz.
    fn frequency(&self) -> f64;
}
