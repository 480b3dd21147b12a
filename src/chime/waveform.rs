//! Single-cycle oscillator waveform tables.

use crate::error::ConfigError;
use std::f64::consts::PI;

/// Peak sample value at full loudness, leaving headroom below `i16::MAX`.
pub const FULL_SCALE: f64 = 31000.0;

/// Default number of samples in one waveform cycle.
pub const DEFAULT_WAVE_SIZE: usize = 128;

/// One full sine cycle stored as signed 16-bit samples.
///
/// Samples are evenly spaced over `[0, 2π)`; the endpoint is excluded so the
/// table loops without repeating its first sample. The backend resamples the
/// table to play it at any pitch.
///
/// # Examples
///
/// ```
/// use windchime::WaveformTable;
///
/// let table = WaveformTable::sine(128, 0.5).unwrap();
/// assert_eq!(table.len(), 128);
/// assert_eq!(table.samples()[0], 0);
/// assert_eq!(table.samples()[32], 15500); // a quarter cycle is the peak
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveformTable {
    samples: Vec<i16>,
    peak: i16,
}

impl WaveformTable {
    /// Generates a sine table of `size` samples with peak `loudness × 31000`.
    ///
    /// The peak is bounded to the `i16` range and every sample is truncated
    /// toward zero.
    pub fn sine(size: usize, loudness: f64) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::WaveSize);
        }

        let peak = (loudness * FULL_SCALE).clamp(f64::from(i16::MIN), f64::from(i16::MAX));
        let samples = (0..size)
            .map(|i| {
                let phase = 2.0 * PI * i as f64 / size as f64;
                // `as` saturates and truncates toward zero
                (phase.sin() * peak) as i16
            })
            .collect();

        Ok(Self {
            samples,
            peak: peak as i16,
        })
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a table holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The requested peak amplitude the table was generated with.
    pub fn peak(&self) -> i16 {
        self.peak
    }

    /// The samples scaled to `[-1.0, 1.0]`.
    pub fn to_normalized(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|&s| f64::from(s) / 32768.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_requested_size() {
        for size in [1, 2, 64, 128, 512, 1000] {
            assert_eq!(WaveformTable::sine(size, 0.5).unwrap().len(), size);
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            WaveformTable::sine(0, 0.5),
            Err(ConfigError::WaveSize)
        ));
    }

    #[test]
    fn test_peak_tracks_loudness() {
        for loudness in [0.0, 0.1, 0.4, 0.5, 1.0] {
            let table = WaveformTable::sine(128, loudness).unwrap();
            let expected = loudness * FULL_SCALE;
            let max = table.samples().iter().map(|s| i32::from(*s).abs()).max().unwrap();
            assert!((f64::from(max) - expected).abs() <= 1.0);
        }
    }

    #[test]
    fn test_peak_is_bounded_to_i16() {
        let table = WaveformTable::sine(128, 2.0).unwrap();
        assert_eq!(table.peak(), i16::MAX);
        assert_eq!(table.samples()[32], i16::MAX);

        let inverted = WaveformTable::sine(128, -2.0).unwrap();
        assert_eq!(inverted.peak(), i16::MIN);
    }

    #[test]
    fn test_cycle_excludes_endpoint() {
        let table = WaveformTable::sine(4, 1.0).unwrap();
        assert_eq!(table.samples(), &[0, 31000, 0, -31000]);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // sin(2π/8) × 15500 = 10960.155...
        let table = WaveformTable::sine(8, 0.5).unwrap();
        assert_eq!(table.samples()[1], 10960);
        assert_eq!(table.samples()[5], -10960);
    }

    #[test]
    fn test_normalized_range() {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let normalized = table.to_normalized();
        assert!(normalized.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!((normalized[32] - 31000.0 / 32768.0).abs() < 1e-12);
    }
}
