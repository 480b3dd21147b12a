//! Sample-accurate envelope generator driven by an [`EnvelopeProfile`].

use crate::Signal;
use crate::chime::EnvelopeProfile;

/// State of the envelope generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnvelopeState {
    /// Envelope is not active
    Idle,
    /// Ramping from 0 to the attack level
    Attack,
    /// Ramping from the attack level to the sustain level
    Decay,
    /// Holding at the sustain level
    Sustain,
    /// Ramping from the current level to 0
    Release,
}

/// Linear attack/decay/sustain/release envelope.
///
/// The sustain level is a fraction of the attack level. A release requested
/// during the attack is held back until the attack peak is reached, so a
/// note pressed and released in the same instant still sounds at full level
/// before it rings out.
///
/// # Examples
///
/// ```
/// use windchime::{EnvelopeGenerator, EnvelopeProfile, Signal};
///
/// let profile = EnvelopeProfile::default(); // 20 ms attack, 2 s release
/// let mut env = EnvelopeGenerator::new(&profile, 11020.0);
///
/// env.trigger();
/// env.release();
///
/// let mut peak: f64 = 0.0;
/// while env.is_active() {
///     peak = peak.max(env.next_sample());
/// }
/// assert!((peak - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeGenerator {
    state: EnvelopeState,
    phase_position: f64,      // samples elapsed in current phase
    current_level: f64,       // current output level
    release_start_level: f64, // level when release began
    release_pending: bool,

    // Phase lengths in samples
    attack_samples: f64,
    decay_samples: f64,
    release_samples: f64,

    attack_level: f64,
    sustain_level: f64, // absolute, already scaled by attack_level
}

impl EnvelopeGenerator {
    /// Creates an idle envelope for `profile` at `sample_rate` Hz.
    ///
    /// Negative times are treated as zero.
    pub fn new(profile: &EnvelopeProfile, sample_rate: f64) -> Self {
        Self {
            state: EnvelopeState::Idle,
            phase_position: 0.0,
            current_level: 0.0,
            release_start_level: 0.0,
            release_pending: false,
            attack_samples: profile.attack_time.max(0.0) * sample_rate,
            decay_samples: profile.decay_time.max(0.0) * sample_rate,
            release_samples: profile.release_time.max(0.0) * sample_rate,
            attack_level: profile.attack_level,
            sustain_level: profile.sustain_level * profile.attack_level,
        }
    }

    /// Starts the attack from silence.
    pub fn trigger(&mut self) {
        self.state = EnvelopeState::Attack;
        self.phase_position = 0.0;
        self.current_level = 0.0;
        self.release_pending = false;
    }

    /// Begins the release, or schedules it if the attack is still running.
    pub fn release(&mut self) {
        match self.state {
            EnvelopeState::Idle | EnvelopeState::Release => {}
            EnvelopeState::Attack => self.release_pending = true,
            EnvelopeState::Decay | EnvelopeState::Sustain => self.start_release(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, EnvelopeState::Idle)
    }

    /// True once a release has been requested, even if still deferred.
    pub fn is_released(&self) -> bool {
        self.release_pending || matches!(self.state, EnvelopeState::Release)
    }

    /// The most recently produced level.
    pub fn level(&self) -> f64 {
        self.current_level
    }

    fn start_release(&mut self) {
        self.state = EnvelopeState::Release;
        self.phase_position = 0.0;
        self.release_start_level = self.current_level;
        self.release_pending = false;
    }

    fn finish_attack(&mut self) -> f64 {
        self.current_level = self.attack_level;
        self.phase_position = 0.0;
        if self.release_pending {
            self.start_release();
        } else {
            self.state = EnvelopeState::Decay;
        }
        self.attack_level
    }

    #[cfg(test)]
    fn state(&self) -> EnvelopeState {
        self.state
    }
}

impl Signal for EnvelopeGenerator {
    fn next_sample(&mut self) -> f64 {
        match self.state {
            EnvelopeState::Idle => 0.0,

            EnvelopeState::Attack => {
                if self.attack_samples <= 0.0 {
                    return self.finish_attack();
                }

                let progress = self.phase_position / self.attack_samples;
                if progress >= 1.0 {
                    self.finish_attack()
                } else {
                    self.phase_position += 1.0;
                    self.current_level = self.attack_level * progress;
                    self.current_level
                }
            }

            EnvelopeState::Decay => {
                if self.decay_samples <= 0.0 {
                    self.state = EnvelopeState::Sustain;
                    self.current_level = self.sustain_level;
                    return self.sustain_level;
                }

                let progress = self.phase_position / self.decay_samples;
                if progress >= 1.0 {
                    self.state = EnvelopeState::Sustain;
                    self.current_level = self.sustain_level;
                    self.sustain_level
                } else {
                    self.phase_position += 1.0;
                    self.current_level =
                        self.attack_level - progress * (self.attack_level - self.sustain_level);
                    self.current_level
                }
            }

            EnvelopeState::Sustain => {
                self.current_level = self.sustain_level;
                self.sustain_level
            }

            EnvelopeState::Release => {
                if self.release_samples <= 0.0 {
                    self.state = EnvelopeState::Idle;
                    self.current_level = 0.0;
                    return 0.0;
                }

                let progress = self.phase_position / self.release_samples;
                if progress >= 1.0 {
                    self.state = EnvelopeState::Idle;
                    self.current_level = 0.0;
                    0.0
                } else {
                    self.phase_position += 1.0;
                    self.current_level = self.release_start_level * (1.0 - progress);
                    self.current_level
                }
            }
        }
    }
}
