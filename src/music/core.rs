//! Pitch names and their resolution to MIDI note numbers.

use crate::error::ParseError;
use std::str::FromStr;

/// Pitch classes of the chromatic scale.
///
/// Flats are folded into their sharp equivalents when parsing (`Bb` is
/// `ASharp`).
///
/// # Examples
///
/// ```
/// use windchime::music::core::Pitch;
///
/// assert_eq!(Pitch::A.to_midi_note(4), Some(69));
/// assert_eq!("Bb".parse::<Pitch>().unwrap(), Pitch::ASharp);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Pitch {
    /// Returns the semitone offset from C (0-11) for this pitch class.
    ///
    /// # Examples
    ///
    /// ```
    /// use windchime::music::core::Pitch;
    ///
    /// assert_eq!(Pitch::C.semitone_offset(), 0);
    /// assert_eq!(Pitch::CSharp.semitone_offset(), 1);
    /// assert_eq!(Pitch::A.semitone_offset(), 9);
    /// ```
    pub fn semitone_offset(&self) -> u8 {
        match self {
            Pitch::C => 0,
            Pitch::CSharp => 1,
            Pitch::D => 2,
            Pitch::DSharp => 3,
            Pitch::E => 4,
            Pitch::F => 5,
            Pitch::FSharp => 6,
            Pitch::G => 7,
            Pitch::GSharp => 8,
            Pitch::A => 9,
            Pitch::ASharp => 10,
            Pitch::B => 11,
        }
    }

    /// The MIDI number of this pitch class in `octave`, without range checks.
    ///
    /// C-1 is 0, C4 (middle C) is 60, A4 is 69, G9 is 127 and B9 is 131.
    pub fn midi_number(&self, octave: i8) -> i32 {
        (i32::from(octave) + 1) * 12 + i32::from(self.semitone_offset())
    }

    /// Converts this pitch class and an octave to a MIDI note number.
    ///
    /// Returns `None` when the result would fall outside 0-127.
    ///
    /// # Examples
    ///
    /// ```
    /// use windchime::music::core::Pitch;
    ///
    /// assert_eq!(Pitch::C.to_midi_note(4), Some(60));
    /// assert_eq!(Pitch::G.to_midi_note(9), Some(127));
    /// assert_eq!(Pitch::A.to_midi_note(9), None);
    /// ```
    pub fn to_midi_note(&self, octave: i8) -> Option<u8> {
        u8::try_from(self.midi_number(octave))
            .ok()
            .filter(|m| *m <= 127)
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" => Ok(Pitch::C),
            "C#" | "DB" => Ok(Pitch::CSharp),
            "D" => Ok(Pitch::D),
            "D#" | "EB" => Ok(Pitch::DSharp),
            "E" | "FB" => Ok(Pitch::E),
            "F" | "E#" => Ok(Pitch::F),
            "F#" | "GB" => Ok(Pitch::FSharp),
            "G" => Ok(Pitch::G),
            "G#" | "AB" => Ok(Pitch::GSharp),
            "A" => Ok(Pitch::A),
            "A#" | "BB" => Ok(Pitch::ASharp),
            "B" => Ok(Pitch::B),
            _ => Err(ParseError::InvalidPitch(s.to_string())),
        }
    }
}

/// Converts a MIDI note number to a frequency in Hz (12-TET, A4 = 440 Hz).
///
/// Values above 127 are not rejected; they simply extrapolate the curve.
///
/// # Examples
///
/// ```
/// use windchime::music::core::midi_to_freq;
///
/// assert!((midi_to_freq(69) - 440.0).abs() < 1e-9);
/// assert!((midi_to_freq(60) - 261.63).abs() < 0.01);
/// ```
pub fn midi_to_freq(midi_note: u8) -> f64 {
    440.0 * 2.0_f64.powf((f64::from(midi_note) - 69.0) / 12.0)
}

/// Service that turns a pitch name into a MIDI note number.
///
/// [`ScaleTable`](crate::ScaleTable) resolution goes through this trait so
/// that applications can plug in their own naming scheme. Malformed names
/// must be reported as errors; callers do not substitute defaults.
///
/// The returned number is unbounded. Range enforcement happens once, after
/// the scale offset is applied.
pub trait PitchResolver {
    /// Resolves `name` to a MIDI note number.
    fn resolve(&self, name: &str) -> Result<i32, ParseError>;
}

impl<F> PitchResolver for F
where
    F: Fn(&str) -> Result<i32, ParseError>,
{
    fn resolve(&self, name: &str) -> Result<i32, ParseError> {
        self(name)
    }
}

/// Resolver for scientific pitch notation, e.g. `"C5"`, `"A#4"`, `"Bb3"`, `"C-1"`.
///
/// The format is `<pitch><octave>` where the pitch is a letter `A`-`G`
/// (case-insensitive) with an optional `#` or `b`, and the octave is a number
/// from -1 to 9. The octave is required. Names above G9 (`A9`, `B9`)
/// resolve to numbers above 127.
///
/// # Examples
///
/// ```
/// use windchime::music::core::{PitchResolver, ScientificPitch};
///
/// assert_eq!(ScientificPitch.resolve("A4"), Ok(69));
/// assert_eq!(ScientificPitch.resolve("A#4"), Ok(70));
/// assert_eq!(ScientificPitch.resolve("bb4"), Ok(70));
/// assert_eq!(ScientificPitch.resolve("A9"), Ok(129));
/// assert!(ScientificPitch.resolve("H4").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScientificPitch;

impl PitchResolver for ScientificPitch {
    fn resolve(&self, name: &str) -> Result<i32, ParseError> {
        if name.is_empty() {
            return Err(ParseError::Empty);
        }

        // The octave starts at the first digit or minus sign
        let octave_start = match name.chars().position(|c| c.is_ascii_digit() || c == '-') {
            Some(0) => return Err(ParseError::InvalidPitch(String::new())),
            Some(pos) => pos,
            None => return Err(ParseError::InvalidFormat(name.to_string())),
        };

        let (pitch_str, octave_str) = name.split_at(octave_start);
        let octave = octave_str
            .parse::<i8>()
            .map_err(|_| ParseError::InvalidOctave(octave_str.to_string()))?;
        if !(-1..=9).contains(&octave) {
            return Err(ParseError::InvalidOctave(octave_str.to_string()));
        }

        let pitch: Pitch = pitch_str.parse()?;
        Ok(pitch.midi_number(octave))
    }
}
