//! Polyphonic reference backend that renders strikes to audio.
//!
//! Every partial of a pressed strike gets its own [`Voice`], tagged with the
//! strike's id so a release only touches that strike. Voices are summed with
//! no normalization beyond the partial amplitudes themselves, and finished
//! voices are dropped while rendering. When the voice limit is reached the
//! oldest voice is stolen.

use super::backend::Synth;
use super::envelope::EnvelopeGenerator;
use super::voice::Voice;
use super::wavetable::WavetableOscillator;
use crate::chime::{Strike, StrikeId, WaveformTable};
use crate::error::SynthError;
use crate::{AudioSignal, Signal};
use std::sync::Arc;

/// Default polyphony limit, enough for nine overlapping seven-partial strikes.
pub const DEFAULT_MAX_VOICES: usize = 64;

/// Tracks one allocated voice.
#[derive(Debug, Clone)]
struct VoiceState {
    voice: Voice,
    /// Strike this voice belongs to
    strike: StrikeId,
    /// Allocation order, used for "oldest" stealing
    age: u64,
}

/// Renders chime strikes with wavetable voices.
///
/// # Examples
///
/// ```
/// use windchime::{Chime, ChimeConfig, PolySynth, Signal};
///
/// let mut chime = Chime::new(ChimeConfig::default(), |table, rate| {
///     Ok(PolySynth::new(table, rate))
/// })
/// .unwrap();
///
/// chime.strike(72, 1.0).unwrap();
///
/// let synth = chime.synth_mut();
/// assert_eq!(synth.active_voice_count(), 7);
///
/// let mut buffer = vec![0.0; 1024];
/// synth.process(&mut buffer);
/// assert!(buffer.iter().any(|s| s.abs() > 0.01));
/// ```
#[derive(Debug, Clone)]
pub struct PolySynth {
    table: Arc<[f64]>,
    sample_rate: u32,
    voices: Vec<VoiceState>,
    max_voices: usize,
    age_counter: u64,
}

impl PolySynth {
    /// Creates a synth that plays `waveform` at `sample_rate` Hz.
    pub fn new(waveform: &WaveformTable, sample_rate: u32) -> Self {
        Self {
            table: Arc::from(waveform.to_normalized()),
            sample_rate,
            voices: Vec::with_capacity(DEFAULT_MAX_VOICES),
            max_voices: DEFAULT_MAX_VOICES,
            age_counter: 0,
        }
    }

    /// Sets the polyphony limit (at least one voice).
    pub fn with_max_voices(mut self, max_voices: usize) -> Self {
        self.max_voices = max_voices.max(1);
        self
    }

    pub fn max_voices(&self) -> usize {
        self.max_voices
    }

    /// Number of voices still producing sound.
    pub fn active_voice_count(&self) -> usize {
        self.voices.iter().filter(|v| v.voice.is_active()).count()
    }

    /// Returns true if any partial of the given strike is still sounding.
    pub fn is_sounding(&self, strike: StrikeId) -> bool {
        self.voices
            .iter()
            .any(|v| v.strike == strike && v.voice.is_active())
    }

    /// Releases every voice.
    pub fn all_notes_off(&mut self) {
        for state in self.voices.iter_mut() {
            state.voice.note_off();
        }
    }

    fn allocate(&mut self, voice: Voice, strike: StrikeId) {
        if self.voices.len() >= self.max_voices {
            self.voices.retain(|v| v.voice.is_active());
        }
        if self.voices.len() >= self.max_voices {
            if let Some(oldest) = self.find_oldest_voice() {
                log::warn!(
                    "voice limit of {} reached, stealing a voice of {:?}",
                    self.max_voices,
                    self.voices[oldest].strike
                );
                self.voices.remove(oldest);
            }
        }

        self.age_counter = self.age_counter.wrapping_add(1);
        self.voices.push(VoiceState {
            voice,
            strike,
            age: self.age_counter,
        });
    }

    fn find_oldest_voice(&self) -> Option<usize> {
        self.voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.age)
            .map(|(idx, _)| idx)
    }
}

impl Synth for PolySynth {
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError> {
        let rate = f64::from(self.sample_rate);
        for partial in &strike.partials {
            let osc =
                WavetableOscillator::from_shared(Arc::clone(&self.table), partial.frequency, rate);
            let env = EnvelopeGenerator::new(&partial.envelope, rate);
            let mut voice = Voice::new(osc, env, partial.amplitude);
            voice.note_on(partial.frequency);
            self.allocate(voice, strike.id);
        }
        Ok(())
    }

    fn release(&mut self, strike: &Strike) -> Result<(), SynthError> {
        for state in self.voices.iter_mut().filter(|v| v.strike == strike.id) {
            state.voice.note_off();
        }
        Ok(())
    }

    /// Voices already sounding keep the table they started with.
    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError> {
        self.table = Arc::from(waveform.to_normalized());
        Ok(())
    }
}

impl Signal for PolySynth {
    fn next_sample(&mut self) -> f64 {
        let mut sum = 0.0;
        let mut finished = false;
        for state in self.voices.iter_mut() {
            sum += state.voice.next_sample();
            finished |= !state.voice.is_active();
        }
        if finished {
            self.voices.retain(|v| v.voice.is_active());
        }
        sum
    }
}

impl AudioSignal for PolySynth {
    fn sample_rate(&self) -> f64 {
        f64::from(self.sample_rate)
    }
}
