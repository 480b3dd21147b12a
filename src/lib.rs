//! Windchime - parametric additive synthesis of wind chimes and tubular bells
//!
//! A [`Chime`] turns a MIDI note and a strike amplitude into a set of
//! sine partials, one per entry of a measured [`OvertoneSet`], all shaped by
//! an [`EnvelopeProfile`] derived from the resonator material and the
//! striker. The partials are handed to a [`Synth`] backend: [`PolySynth`]
//! renders them with wavetable voices, [`NoteLog`] just records them.
//!
//! ```
//! use windchime::{Chime, ChimeConfig, Material, PolySynth, Scale, Striker, VoiceType, render};
//!
//! let config = ChimeConfig::default()
//!     .with_preset_scale(Scale::Canterbury)
//!     .with_material(Material::Copper)
//!     .with_striker(Striker::SoftWood)
//!     .with_voice(VoiceType::Bell);
//!
//! let mut chime = Chime::new(config, |table, rate| Ok(PolySynth::new(table, rate))).unwrap();
//! for index in 0..chime.scale().len() {
//!     chime.strike_index(index, 0.8).unwrap();
//! }
//!
//! let audio = render(chime.synth_mut(), 1.0);
//! assert_eq!(audio.len(), 11020);
//! ```
//!
//! Strike timing is up to the caller; [`WindPattern`] and [`RandomPattern`]
//! generate schedules to follow.

pub mod chime;
pub mod core;
pub mod error;
pub mod music;
pub mod synthesis;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use chime::{
    Chime, ChimeConfig, EnvelopeProfile, Material, MaterialProfile, OvertoneSet, Partial,
    PartialNote, Strike, StrikeId, Striker, StrikerProfile, VoiceType, WaveformTable,
};
pub use self::core::{AudioSignal, Pitched, Signal};
pub use error::{ChimeError, ConfigError, ParseError, SynthError};
pub use music::{
    Frequency, Gust, Pitch, PitchResolver, RandomPattern, Scale, ScaleTable, ScheduledStrike,
    ScientificPitch, WindPattern,
};
pub use synthesis::{
    EnvelopeGenerator, NoteLog, PolySynth, SharedSynth, Synth, SynthEvent, Voice,
    WavetableOscillator, render, render_into, to_i16,
};

#[cfg(feature = "macros")]
pub use windchime_macros::{note, scale};
