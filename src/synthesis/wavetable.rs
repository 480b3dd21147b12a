//! Wavetable oscillator that resamples a chime waveform to any pitch.
//!
//! The oscillator keeps a fractional phase into one cycle of samples. Each
//! output sample reads the table at that phase with linear interpolation,
//! then advances the phase by `frequency × table_len / sample_rate`, wrapping
//! at the end of the table. The table itself is shared, so every voice of a
//! synth plays from one allocation.

use crate::chime::WaveformTable;
use crate::{AudioSignal, Pitched, Signal};
use std::sync::Arc;

/// Plays one cycle of samples at an arbitrary frequency.
///
/// # Examples
///
/// ```
/// use windchime::{Signal, WaveformTable, WavetableOscillator};
///
/// let table = WaveformTable::sine(128, 1.0).unwrap();
/// let mut osc = WavetableOscillator::new(&table, 440.0, 11020.0);
///
/// let first = osc.next_sample();
/// assert_eq!(first, 0.0);
/// assert!(osc.next_sample() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct WavetableOscillator {
    /// One complete cycle, normalized to [-1.0, 1.0]
    table: Arc<[f64]>,
    /// Current position in the table (0.0 to table.len())
    phase: f64,
    phase_increment: f64,
    sample_rate: f64,
}

impl WavetableOscillator {
    /// Creates an oscillator over a copy of `waveform`, normalized to [-1.0, 1.0].
    pub fn new(waveform: &WaveformTable, frequency: f64, sample_rate: f64) -> Self {
        Self::from_shared(Arc::from(waveform.to_normalized()), frequency, sample_rate)
    }

    /// Creates an oscillator over an existing shared table.
    ///
    /// The table must not be empty.
    pub(crate) fn from_shared(table: Arc<[f64]>, frequency: f64, sample_rate: f64) -> Self {
        debug_assert!(!table.is_empty(), "wavetable cannot be empty");
        let phase_increment = frequency * table.len() as f64 / sample_rate;

        Self {
            table,
            phase: 0.0,
            phase_increment,
            sample_rate,
        }
    }

    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Restarts the cycle from its first sample.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    fn read_sample(&self) -> f64 {
        let table_size = self.table.len();
        let index0 = self.phase.floor() as usize % table_size;
        let index1 = (index0 + 1) % table_size;
        let frac = self.phase.fract();

        let sample0 = self.table[index0];
        let sample1 = self.table[index1];

        sample0 + frac * (sample1 - sample0)
    }
}

impl Signal for WavetableOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = self.read_sample();

        self.phase += self.phase_increment;
        let table_size = self.table.len() as f64;
        // rem_euclid also covers increments longer than one cycle
        if self.phase >= table_size {
            self.phase = self.phase.rem_euclid(table_size);
        }

        sample
    }
}

impl AudioSignal for WavetableOscillator {
    fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl Pitched for WavetableOscillator {
    fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency * self.table.len() as f64 / self.sample_rate;
    }

    fn frequency(&self) -> f64 {
        self.phase_increment * self.sample_rate / self.table.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_increment_matches_frequency() {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let osc = WavetableOscillator::new(&table, 86.09375, 11020.0);
        // 86.09375 Hz × 128 / 11020 = 1 table step per sample
        assert!((osc.phase_increment - 1.0).abs() < 1e-12);
        assert_eq!(osc.table_size(), 128);
    }

    #[test]
    fn test_unit_step_reads_table_verbatim() {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let normalized = table.to_normalized();
        let mut osc = WavetableOscillator::new(&table, 86.09375, 11020.0);

        for expected in normalized.iter().chain(normalized.iter()) {
            assert!((osc.next_sample() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linear_interpolation_between_samples() {
        let table = WaveformTable::sine(4, 1.0).unwrap();
        // Half a table step per sample
        let mut osc = WavetableOscillator::new(&table, 1.0, 8.0);
        let peak = 31000.0 / 32768.0;

        assert_eq!(osc.next_sample(), 0.0);
        assert!((osc.next_sample() - peak / 2.0).abs() < 1e-12);
        assert!((osc.next_sample() - peak).abs() < 1e-12);
    }

    #[test]
    fn test_output_stays_in_range_at_high_pitch() {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let mut osc = WavetableOscillator::new(&table, 9000.0, 11020.0);
        for _ in 0..10_000 {
            let s = osc.next_sample();
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_reset_restarts_cycle() {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let mut osc = WavetableOscillator::new(&table, 440.0, 11020.0);
        let first = osc.next_sample();
        osc.next_sample();
        osc.reset();
        assert_eq!(osc.next_sample(), first);
    }

    #[test]
    fn test_reports_sample_rate() {
        let table = WaveformTable::sine(16, 0.5).unwrap();
        let osc = WavetableOscillator::new(&table, 440.0, 44100.0);
        assert_eq!(osc.sample_rate(), 44100.0);
        assert_eq!(osc.samples_for(0.5), 22050);
    }
}
