//! Frequency type for representing pitch in Hz.

use super::core::midi_to_freq;
use std::ops::Mul;

/// A frequency value in Hz.
///
/// Accepts frequencies directly in Hz or as MIDI note numbers, and scales by
/// an overtone ratio with `*`.
///
/// # Examples
///
/// ```
/// use windchime::music::frequency::Frequency;
///
/// let fundamental: Frequency = 69u8.into();
/// assert!((fundamental.as_f64() - 440.0).abs() < 1e-9);
///
/// let overtone = fundamental * 2.76;
/// assert!((overtone.as_f64() - 1214.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Creates a new frequency from a MIDI note number (69 = A4 = 440 Hz).
    pub fn from_midi(midi_note: u8) -> Self {
        Frequency(midi_to_freq(midi_note))
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<u8> for Frequency {
    fn from(midi_note: u8) -> Self {
        Frequency::from_midi(midi_note)
    }
}

impl Mul<f64> for Frequency {
    type Output = Frequency;

    fn mul(self, ratio: f64) -> Self::Output {
        Frequency(self.0 * ratio)
    }
}
