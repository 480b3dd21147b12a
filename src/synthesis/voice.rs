//! Voice - a wavetable oscillator shaped by an envelope.

use super::envelope::EnvelopeGenerator;
use super::wavetable::WavetableOscillator;
use crate::music::Frequency;
use crate::{AudioSignal, Pitched, Signal};

/// One sounding partial: an oscillator, its envelope, and a fixed gain.
///
/// This is the unit a [`PolySynth`](crate::PolySynth) allocates for every
/// partial of a strike.
///
/// # Examples
///
/// ```
/// use windchime::{EnvelopeGenerator, EnvelopeProfile, Signal, Voice};
/// use windchime::{WaveformTable, WavetableOscillator};
///
/// let table = WaveformTable::sine(128, 1.0).unwrap();
/// let osc = WavetableOscillator::new(&table, 440.0, 11020.0);
/// let env = EnvelopeGenerator::new(&EnvelopeProfile::default(), 11020.0);
/// let mut voice = Voice::new(osc, env, 0.3);
///
/// voice.note_on(69u8);
/// voice.note_off();
///
/// // Still active during release
/// assert!(voice.is_active());
/// while voice.is_active() {
///     assert!(voice.next_sample().abs() <= 0.3);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Voice {
    signal: WavetableOscillator,
    envelope: EnvelopeGenerator,
    amplitude: f64,
}

impl Voice {
    pub fn new(signal: WavetableOscillator, envelope: EnvelopeGenerator, amplitude: f64) -> Self {
        Self {
            signal,
            envelope,
            amplitude,
        }
    }

    /// Sets the pitch and starts the envelope from silence.
    pub fn note_on(&mut self, pitch: impl Into<Frequency>) {
        self.signal.set_frequency(pitch.into().as_f64());
        self.signal.reset();
        self.envelope.trigger();
    }

    /// Releases the note; it keeps sounding until the envelope finishes.
    pub fn note_off(&mut self) {
        self.envelope.release();
    }

    /// True until the envelope has fully released.
    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }

    pub fn is_released(&self) -> bool {
        self.envelope.is_released()
    }

    /// Fixed gain applied on top of the envelope.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl Signal for Voice {
    fn next_sample(&mut self) -> f64 {
        let signal_sample = self.signal.next_sample();
        let envelope_sample = self.envelope.next_sample();
        signal_sample * envelope_sample * self.amplitude
    }
}

impl AudioSignal for Voice {
    fn sample_rate(&self) -> f64 {
        self.signal.sample_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::{EnvelopeProfile, WaveformTable};

    const SAMPLE_RATE: f64 = 11020.0;

    fn voice(amplitude: f64) -> Voice {
        let table = WaveformTable::sine(128, 1.0).unwrap();
        let profile = EnvelopeProfile {
            attack_time: 0.001,
            attack_level: 1.0,
            decay_time: 0.0,
            sustain_level: 1.0,
            release_time: 0.01,
        };
        Voice::new(
            WavetableOscillator::new(&table, 440.0, SAMPLE_RATE),
            EnvelopeGenerator::new(&profile, SAMPLE_RATE),
            amplitude,
        )
    }

    #[test]
    fn test_voice_starts_inactive() {
        let mut voice = voice(1.0);
        assert!(!voice.is_active());
        assert_eq!(voice.next_sample(), 0.0);
    }

    #[test]
    fn test_note_on_sets_pitch() {
        let mut voice = voice(1.0);
        voice.note_on(880.0);
        assert!(voice.is_active());
        assert!((voice.signal.frequency() - 880.0).abs() < 1e-9);

        voice.note_on(69u8);
        assert!((voice.signal.frequency() - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_amplitude_scales_output() {
        let mut loud = voice(1.0);
        let mut quiet = voice(0.25);
        loud.note_on(440.0);
        quiet.note_on(440.0);

        for _ in 0..200 {
            let a = loud.next_sample();
            let b = quiet.next_sample();
            assert!((a * 0.25 - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_voice_lifecycle() {
        let mut voice = voice(0.5);
        voice.note_on(440.0);
        voice.note_off();
        assert!(voice.is_released());

        let mut count = 0;
        while voice.is_active() && count < 10_000 {
            assert!(voice.next_sample().abs() <= 0.5);
            count += 1;
        }
        assert!(!voice.is_active());
        assert_eq!(voice.sample_rate(), SAMPLE_RATE);
    }
}
