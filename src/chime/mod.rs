//! The chime engine: turns a note and an amplitude into a set of
//! envelope-shaped partials and hands them to a synthesis backend.
//!
//! A [`Chime`] is built from a [`ChimeConfig`]. Construction combines the
//! material and striker into one [`EnvelopeProfile`], picks the
//! [`OvertoneSet`] for the voice, resolves the scale to MIDI notes, and
//! generates the oscillator [`WaveformTable`]. The caller supplies the backend
//! through a factory that receives the waveform and playback rate.
//!
//! Every [`strike`](Chime::strike) presses all partials at once and releases
//! them immediately, so each note rings out through its release time while
//! earlier strikes keep sounding.

pub mod config;
pub mod overtones;
pub mod profile;
pub mod strike;
pub mod waveform;

pub use config::ChimeConfig;
pub use overtones::{OvertoneSet, Partial, VoiceType};
pub use profile::{EnvelopeProfile, Material, MaterialProfile, Striker, StrikerProfile};
pub use strike::{PartialNote, Strike, StrikeId};
pub use waveform::WaveformTable;

use crate::error::{ChimeError, ConfigError, ParseError, SynthError};
use crate::music::{Frequency, PitchResolver, ScaleTable, ScientificPitch};
use crate::synthesis::Synth;

/// A parametric wind chime voice.
///
/// # Examples
///
/// ```
/// use windchime::{Chime, ChimeConfig, NoteLog, Scale};
///
/// let config = ChimeConfig::default().with_preset_scale(Scale::Pentatonic);
/// let mut chime = Chime::new(config, |_, _| Ok(NoteLog::new())).unwrap();
///
/// assert_eq!(chime.scale(), &[72, 74, 76, 79, 81]);
///
/// let strike = chime.strike(69, 1.0).unwrap();
/// assert_eq!(strike.partials.len(), 7);
/// assert!((strike.partials[0].frequency - 440.0).abs() < 1e-9);
/// assert!((strike.partials[0].amplitude - 0.3).abs() < 1e-9);
///
/// assert_eq!(chime.synth().presses().count(), 1);
/// ```
#[derive(Debug)]
pub struct Chime<S, R = ScientificPitch> {
    envelope: EnvelopeProfile,
    overtones: OvertoneSet,
    voice: VoiceType,
    scale_names: Vec<String>,
    scale: ScaleTable,
    scale_offset: i32,
    loudness: f64,
    waveform: WaveformTable,
    sample_rate: u32,
    resolver: R,
    next_id: StrikeId,
    synth: S,
}

impl<S: Synth> Chime<S> {
    /// Builds a chime that resolves scientific pitch names like `"A#4"`.
    pub fn new<F>(config: ChimeConfig, factory: F) -> Result<Self, ChimeError>
    where
        F: FnOnce(&WaveformTable, u32) -> Result<S, SynthError>,
    {
        Self::with_resolver(config, ScientificPitch, factory)
    }
}

impl<S: Synth, R: PitchResolver> Chime<S, R> {
    /// Builds a chime with a custom pitch-name resolver.
    ///
    /// # Examples
    ///
    /// ```
    /// use windchime::{Chime, ChimeConfig, NoteLog};
    /// use windchime::error::ParseError;
    ///
    /// // Scale entries given as raw MIDI numbers
    /// let resolver = |name: &str| {
    ///     name.parse::<i32>().map_err(|_| ParseError::InvalidFormat(name.to_string()))
    /// };
    ///
    /// let config = ChimeConfig::default().with_scale(["60", "64", "67"]);
    /// let chime = Chime::with_resolver(config, resolver, |_, _| Ok(NoteLog::new())).unwrap();
    /// assert_eq!(chime.scale(), &[60, 64, 67]);
    /// ```
    pub fn with_resolver<F>(
        config: ChimeConfig,
        resolver: R,
        factory: F,
    ) -> Result<Self, ChimeError>
    where
        F: FnOnce(&WaveformTable, u32) -> Result<S, SynthError>,
    {
        if config.sample_rate == 0 {
            return Err(ConfigError::SampleRate.into());
        }

        let envelope = EnvelopeProfile::from_parts(config.material, config.striker);
        let overtones = match config.overtones {
            Some(partials) => OvertoneSet::new(partials)?,
            None => config.voice.overtones(),
        };
        let scale = ScaleTable::resolve(&config.scale, config.scale_offset, &resolver)?;
        let waveform = WaveformTable::sine(config.wave_size, config.loudness)?;
        let synth = factory(&waveform, config.sample_rate)?;

        log::debug!(
            "chime ready: voice={} partials={} scale={:?} envelope={:?}",
            config.voice,
            overtones.len(),
            scale.notes(),
            envelope
        );

        Ok(Self {
            envelope,
            overtones,
            voice: config.voice,
            scale_names: config.scale,
            scale,
            scale_offset: config.scale_offset,
            loudness: config.loudness,
            waveform,
            sample_rate: config.sample_rate,
            resolver,
            next_id: StrikeId::default(),
            synth,
        })
    }

    /// Strikes the chime at MIDI note `root` with a normalized `amplitude`.
    ///
    /// Every partial shares the chime's envelope. The backend receives a single
    /// press carrying all partials, followed at once by the matching release.
    /// Notes already ringing are left alone.
    pub fn strike(&mut self, root: u8, amplitude: f64) -> Result<Strike, SynthError> {
        let fundamental = Frequency::from_midi(root);
        let adjusted = amplitude * self.loudness;

        let partials = self
            .overtones
            .iter()
            .map(|partial| PartialNote {
                frequency: (fundamental * partial.ratio).as_f64(),
                amplitude: adjusted * partial.weight,
                envelope: self.envelope,
            })
            .collect();

        let id = self.next_id;
        self.next_id = id.next();
        let strike = Strike { id, root, partials };

        log::trace!(
            "strike {:?}: note={} amplitude={:.3}",
            strike.id,
            root,
            adjusted
        );

        self.synth.press(&strike)?;
        self.synth.release(&strike)?;
        Ok(strike)
    }

    /// Strikes the `index`-th note of the scale.
    pub fn strike_index(&mut self, index: usize, amplitude: f64) -> Result<Strike, ChimeError> {
        let note = self.scale.get(index).ok_or(ConfigError::ScaleIndex {
            index,
            len: self.scale.len(),
        })?;
        Ok(self.strike(note, amplitude)?)
    }

    /// The resolved scale as MIDI note numbers.
    pub fn scale(&self) -> &[u8] {
        self.scale.notes()
    }

    /// Replaces the scale, keeping the current offset.
    ///
    /// On error the previous scale stays in place.
    pub fn set_scale<I, T>(&mut self, names: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let scale = ScaleTable::resolve(&names, self.scale_offset, &self.resolver)?;

        log::debug!("scale changed to {:?}", scale.notes());
        self.scale_names = names;
        self.scale = scale;
        Ok(())
    }

    /// Transposes the scale by re-resolving the stored pitch names.
    pub fn set_scale_offset(&mut self, offset: i32) -> Result<(), ParseError> {
        let scale = ScaleTable::resolve(&self.scale_names, offset, &self.resolver)?;
        self.scale_offset = offset;
        self.scale = scale;
        Ok(())
    }

    /// Half-step offset applied to every scale name.
    pub fn scale_offset(&self) -> i32 {
        self.scale_offset
    }

    /// Strike amplitude multiplier, also the waveform peak scale.
    pub fn loudness(&self) -> f64 {
        self.loudness
    }

    /// Sets the loudness used for future strikes.
    ///
    /// The waveform is regenerated at the new peak and handed to the backend,
    /// so strike amplitudes and the oscillator table never disagree. If the
    /// backend rejects the table, nothing changes.
    pub fn set_loudness(&mut self, loudness: f64) -> Result<(), ChimeError> {
        let waveform = WaveformTable::sine(self.waveform.len(), loudness)?;
        self.synth.set_waveform(&waveform)?;

        log::debug!("loudness changed from {} to {}", self.loudness, loudness);
        self.waveform = waveform;
        self.loudness = loudness;
        Ok(())
    }

    /// Envelope shared by every partial of every strike.
    pub fn envelope(&self) -> &EnvelopeProfile {
        &self.envelope
    }

    /// Partials produced per strike, fundamental first.
    pub fn overtones(&self) -> &OvertoneSet {
        &self.overtones
    }

    /// The configured voice tag. Custom overtones in the config take
    /// precedence over the tag's preset.
    pub fn voice_type(&self) -> VoiceType {
        self.voice
    }

    /// The table most recently handed to the backend.
    pub fn waveform(&self) -> &WaveformTable {
        &self.waveform
    }

    /// Waveform playback rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The backend receiving strikes.
    pub fn synth(&self) -> &S {
        &self.synth
    }

    /// Mutable access to the backend, e.g. for rendering.
    pub fn synth_mut(&mut self) -> &mut S {
        &mut self.synth
    }

    /// Consumes the chime and returns its backend.
    pub fn into_synth(self) -> S {
        self.synth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::{NoteLog, SynthEvent};

    fn chime(config: ChimeConfig) -> Chime<NoteLog> {
        Chime::new(config, |_, _| Ok(NoteLog::new())).unwrap()
    }

    #[test]
    fn test_factory_receives_waveform_and_rate() {
        let config = ChimeConfig::default().with_wave_size(64).with_sample_rate(22050);
        let chime = Chime::new(config, |table, rate| {
            assert_eq!(table.len(), 64);
            assert_eq!(rate, 22050);
            Ok(NoteLog::new())
        })
        .unwrap();
        assert_eq!(chime.sample_rate(), 22050);
    }

    #[test]
    fn test_factory_error_propagates() {
        let result = Chime::<NoteLog>::new(ChimeConfig::default(), |_, _| {
            Err(SynthError::Unavailable("no device".into()))
        });
        assert!(matches!(result, Err(ChimeError::Synth(SynthError::Unavailable(_)))));
    }

    #[test]
    fn test_construction_errors() {
        let bad_scale = ChimeConfig::default().with_scale(["C5", "nope"]);
        assert!(matches!(
            Chime::new(bad_scale, |_, _| Ok(NoteLog::new())),
            Err(ChimeError::Parse(_))
        ));

        let bad_size = ChimeConfig::default().with_wave_size(0);
        assert!(matches!(
            Chime::new(bad_size, |_, _| Ok(NoteLog::new())),
            Err(ChimeError::Config(ConfigError::WaveSize))
        ));

        let bad_rate = ChimeConfig::default().with_sample_rate(0);
        assert!(matches!(
            Chime::new(bad_rate, |_, _| -> Result<NoteLog, SynthError> {
                panic!("factory must not run for a zero sample rate")
            }),
            Err(ChimeError::Config(ConfigError::SampleRate))
        ));

        let bad_overtones = ChimeConfig::default().with_overtones(vec![]);
        assert!(matches!(
            Chime::new(bad_overtones, |_, _| Ok(NoteLog::new())),
            Err(ChimeError::Config(ConfigError::Overtones(_)))
        ));
    }

    #[test]
    fn test_strike_press_then_release() {
        let mut chime = chime(ChimeConfig::default());
        let strike = chime.strike(72, 0.8).unwrap();

        let events = chime.synth().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SynthEvent::Press(strike.clone()));
        assert_eq!(events[1], SynthEvent::Release(strike));
    }

    #[test]
    fn test_strike_partials_follow_overtones() {
        let mut chime = chime(ChimeConfig::default().with_voice(VoiceType::Bell));
        let strike = chime.strike(60, 1.0).unwrap();
        let fundamental = crate::music::midi_to_freq(60);

        assert_eq!(strike.root, 60);
        assert_eq!(strike.partials.len(), 4);
        for (note, partial) in strike.partials.iter().zip(VoiceType::Bell.overtones().iter()) {
            assert!((note.frequency - fundamental * partial.ratio).abs() < 1e-9);
            assert!((note.amplitude - 0.5 * partial.weight).abs() < 1e-12);
            assert_eq!(note.envelope, *chime.envelope());
        }
    }

    #[test]
    fn test_zero_weight_partials_are_still_sent() {
        let mut chime = chime(ChimeConfig::default());
        let strike = chime.strike(69, 1.0).unwrap();
        assert_eq!(strike.partials.len(), 7);
        assert_eq!(strike.partials[6].amplitude, 0.0);
    }

    #[test]
    fn test_silent_strike_is_still_issued() {
        let mut chime = chime(ChimeConfig::default());
        let strike = chime.strike(72, 0.0).unwrap();

        assert_eq!(strike.partials.len(), 7);
        assert!(strike.partials.iter().all(|p| p.amplitude == 0.0));
        assert_eq!(strike.peak_amplitude(), 0.0);

        let events = chime.synth().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SynthEvent::Press(strike.clone()));
        assert_eq!(events[1], SynthEvent::Release(strike));
    }

    #[test]
    fn test_strike_ids_increase() {
        let mut chime = chime(ChimeConfig::default());
        let a = chime.strike(72, 1.0).unwrap();
        let b = chime.strike(72, 1.0).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_strike_index() {
        let mut chime = chime(ChimeConfig::default());
        let strike = chime.strike_index(1, 1.0).unwrap();
        assert_eq!(strike.root, 76);

        let err = chime.strike_index(5, 1.0).unwrap_err();
        assert!(matches!(
            err,
            ChimeError::Config(ConfigError::ScaleIndex { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_set_scale_keeps_offset_and_old_scale_on_error() {
        let mut chime = chime(ChimeConfig::default().with_scale_offset(2));
        chime.set_scale(["A4", "B4"]).unwrap();
        assert_eq!(chime.scale(), &[71, 73]);

        assert!(chime.set_scale(["A4", "X4"]).is_err());
        assert_eq!(chime.scale(), &[71, 73]);
    }

    #[test]
    fn test_set_scale_offset_rederives_from_names() {
        let mut chime = chime(ChimeConfig::default().with_scale(["G9", "C5"]));
        chime.set_scale_offset(10).unwrap();
        assert_eq!(chime.scale(), &[127, 82]);

        chime.set_scale_offset(-2).unwrap();
        assert_eq!(chime.scale(), &[125, 70]);
        assert_eq!(chime.scale_offset(), -2);
    }

    #[test]
    fn test_set_loudness_updates_strikes_and_waveform() {
        let mut chime = chime(ChimeConfig::default());
        chime.set_loudness(1.0).unwrap();

        assert_eq!(chime.loudness(), 1.0);
        assert_eq!(chime.waveform().peak(), 31000);
        assert!(matches!(
            chime.synth().events().last(),
            Some(SynthEvent::Waveform(table)) if table.peak() == 31000
        ));

        let strike = chime.strike(69, 1.0).unwrap();
        assert!((strike.partials[0].amplitude - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_accessors() {
        let chime = chime(ChimeConfig::default().with_voice(VoiceType::Perfect));
        assert_eq!(chime.voice_type(), VoiceType::Perfect);
        assert_eq!(chime.overtones().len(), 7);
        assert_eq!(chime.envelope().release_time, 2.0);
        assert_eq!(chime.waveform().len(), 128);
        assert!(chime.into_synth().events().is_empty());
    }
}
