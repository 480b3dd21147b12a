//! The synthesis backend interface and the backends that don't render audio.

use crate::chime::{Strike, WaveformTable};
use crate::error::SynthError;
use std::sync::{Arc, Mutex, MutexGuard};

/// Something that can sound the partials of a [`Strike`].
///
/// A chime calls [`press`](Synth::press) with every partial of a strike in a
/// single call, then [`release`](Synth::release) with the same strike.
/// Implementations must release only the notes belonging to that strike's
/// [`id`](Strike::id); other strikes may still be ringing.
pub trait Synth {
    /// Starts every partial of `strike`.
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError>;

    /// Moves every partial of `strike` into its release phase.
    fn release(&mut self, strike: &Strike) -> Result<(), SynthError>;

    /// Replaces the oscillator waveform used for future notes.
    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError>;
}

impl<T: Synth + ?Sized> Synth for &mut T {
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError> {
        (**self).press(strike)
    }

    fn release(&mut self, strike: &Strike) -> Result<(), SynthError> {
        (**self).release(strike)
    }

    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError> {
        (**self).set_waveform(waveform)
    }
}

impl<T: Synth + ?Sized> Synth for Box<T> {
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError> {
        (**self).press(strike)
    }

    fn release(&mut self, strike: &Strike) -> Result<(), SynthError> {
        (**self).release(strike)
    }

    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError> {
        (**self).set_waveform(waveform)
    }
}

/// A command received by a [`NoteLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum SynthEvent {
    Press(Strike),
    Release(Strike),
    Waveform(WaveformTable),
}

/// A backend that records every command instead of producing sound.
///
/// # Examples
///
/// ```
/// use windchime::{Chime, ChimeConfig, NoteLog, SynthEvent};
///
/// let mut chime = Chime::new(ChimeConfig::default(), |_, _| Ok(NoteLog::new())).unwrap();
/// chime.strike(72, 1.0).unwrap();
///
/// let log = chime.synth();
/// assert!(matches!(log.events()[0], SynthEvent::Press(_)));
/// assert!(matches!(log.events()[1], SynthEvent::Release(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteLog {
    events: Vec<SynthEvent>,
}

impl NoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded command, oldest first.
    pub fn events(&self) -> &[SynthEvent] {
        &self.events
    }

    /// The pressed strikes, oldest first.
    pub fn presses(&self) -> impl Iterator<Item = &Strike> {
        self.events.iter().filter_map(|event| match event {
            SynthEvent::Press(strike) => Some(strike),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Synth for NoteLog {
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError> {
        self.events.push(SynthEvent::Press(strike.clone()));
        Ok(())
    }

    fn release(&mut self, strike: &Strike) -> Result<(), SynthError> {
        self.events.push(SynthEvent::Release(strike.clone()));
        Ok(())
    }

    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError> {
        self.events.push(SynthEvent::Waveform(waveform.clone()));
        Ok(())
    }
}

/// A backend shared between a chime and an audio callback.
///
/// Each command locks the inner backend for its duration. A poisoned lock is
/// reported as [`SynthError::Unavailable`].
///
/// # Examples
///
/// ```
/// use windchime::{Chime, ChimeConfig, PolySynth, SharedSynth};
///
/// let mut shared = None;
/// let mut chime = Chime::new(ChimeConfig::default(), |table, rate| {
///     let synth = SharedSynth::new(PolySynth::new(table, rate));
///     shared = Some(synth.clone());
///     Ok(synth)
/// })
/// .unwrap();
///
/// chime.strike(72, 1.0).unwrap();
/// let audio_side = shared.unwrap();
/// assert_eq!(audio_side.lock().unwrap().active_voice_count(), 7);
/// ```
#[derive(Debug, Default)]
pub struct SharedSynth<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedSynth<S> {
    pub fn new(synth: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(synth)),
        }
    }

    /// Locks the inner backend, e.g. to render samples from an audio callback.
    pub fn lock(&self) -> Result<MutexGuard<'_, S>, SynthError> {
        self.inner
            .lock()
            .map_err(|_| SynthError::Unavailable("synth lock poisoned".to_string()))
    }
}

impl<S> Clone for SharedSynth<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Synth> Synth for SharedSynth<S> {
    fn press(&mut self, strike: &Strike) -> Result<(), SynthError> {
        self.lock()?.press(strike)
    }

    fn release(&mut self, strike: &Strike) -> Result<(), SynthError> {
        self.lock()?.release(strike)
    }

    fn set_waveform(&mut self, waveform: &WaveformTable) -> Result<(), SynthError> {
        self.lock()?.set_waveform(waveform)
    }
}
