//! Chime scales: named presets and their resolution to MIDI note numbers.

use super::core::PitchResolver;
use crate::error::ParseError;

/// Common wind chime scales, from Lee Hite's *Tubular Bell Chimes Design
/// Handbook*.
///
/// # Examples
///
/// ```
/// use windchime::Scale;
///
/// assert_eq!(Scale::CNine.names(), &["C5", "E5", "G5", "A#5", "D6"]);
/// assert_eq!(Scale::default(), Scale::CNine);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scale {
    Westminster,
    Pentatonic,
    #[default]
    CNine,
    HavaNegila,
    CorinthianBellsA,
    CorinthianBellsB,
    CorinthianBellsC,
    CorinthianBellsEb,
    CorinthianBellsG,
    Whittington,
    Canterbury,
    Trinity,
    Winchester,
    StMichaels,
    HappyBirthday,
}

impl Scale {
    /// Every preset, in declaration order.
    pub const ALL: [Scale; 15] = [
        Scale::Westminster,
        Scale::Pentatonic,
        Scale::CNine,
        Scale::HavaNegila,
        Scale::CorinthianBellsA,
        Scale::CorinthianBellsB,
        Scale::CorinthianBellsC,
        Scale::CorinthianBellsEb,
        Scale::CorinthianBellsG,
        Scale::Whittington,
        Scale::Canterbury,
        Scale::Trinity,
        Scale::Winchester,
        Scale::StMichaels,
        Scale::HappyBirthday,
    ];

    /// The pitch names of this scale, in playing order.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Scale::Westminster => &["G#5", "E5", "F#5", "B4"],
            Scale::Pentatonic => &["C5", "D5", "E5", "G5", "A5"],
            Scale::CNine => &["C5", "E5", "G5", "A#5", "D6"],
            Scale::HavaNegila => &["C5", "C#5", "E5", "F5", "G5", "G#5"],
            Scale::CorinthianBellsA => &["A4", "B4", "C#5", "E5", "F#5", "A5"],
            Scale::CorinthianBellsB => &["B4", "C#5", "D#5", "F5", "G#5", "A#5"],
            Scale::CorinthianBellsC => &["C4", "D4", "E4", "G4", "A4", "C5"],
            Scale::CorinthianBellsEb => &["D#4", "F4", "G4", "A#4", "C5", "D#5"],
            Scale::CorinthianBellsG => &["G4", "A4", "B4", "D5", "E5", "G5"],
            Scale::Whittington => &["E5", "F#5", "G5", "A5", "B5", "C#6", "D6"],
            Scale::Canterbury => &["D5", "E5", "F#5", "G5", "A5", "B5"],
            Scale::Trinity => &["D5", "G5", "A5", "B5", "C6", "D6"],
            Scale::Winchester => &["C5", "D5", "E5", "F5", "G5", "A5"],
            Scale::StMichaels => &["F5", "G5", "A5", "A#5", "C6", "D6", "E6", "F6"],
            Scale::HappyBirthday => &["C5", "D5", "E5", "F5", "G5", "A5", "A#5", "B5", "C6"],
        }
    }

    /// The pitch names as owned strings, ready for a [`ChimeConfig`](crate::ChimeConfig).
    pub fn to_names(&self) -> Vec<String> {
        self.names().iter().map(|name| name.to_string()).collect()
    }
}

/// An ordered list of playable MIDI note numbers.
///
/// Built from pitch names plus a uniform half-step offset; every entry is
/// clamped to 0-127. Changing the offset or the names means resolving a new
/// table from the raw names, never adjusting an existing one.
///
/// # Examples
///
/// ```
/// use windchime::ScaleTable;
/// use windchime::music::core::ScientificPitch;
///
/// let table = ScaleTable::resolve(["C5", "E5", "G5"], 0, &ScientificPitch).unwrap();
/// assert_eq!(table.notes(), &[72, 76, 79]);
///
/// let shifted = ScaleTable::resolve(["C5", "E5", "G5"], 200, &ScientificPitch).unwrap();
/// assert_eq!(shifted.notes(), &[127, 127, 127]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScaleTable {
    notes: Vec<u8>,
}

impl ScaleTable {
    /// Resolves `names` in order, adds `offset` half-steps, and clamps each
    /// result to 0-127.
    ///
    /// The first malformed name aborts resolution with the resolver's error.
    pub fn resolve<I, S, R>(names: I, offset: i32, resolver: &R) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: PitchResolver + ?Sized,
    {
        let notes = names
            .into_iter()
            .map(|name| {
                let base = resolver.resolve(name.as_ref())?;
                Ok(clamp_midi(base.saturating_add(offset)))
            })
            .collect::<Result<Vec<u8>, ParseError>>()?;

        Ok(Self { notes })
    }

    /// The resolved note numbers, in input order.
    pub fn notes(&self) -> &[u8] {
        &self.notes
    }

    /// Number of notes in the scale.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the scale has no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The note at `index`, if any.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.notes.get(index).copied()
    }
}

fn clamp_midi(value: i32) -> u8 {
    // Lossless after the clamp
    value.clamp(0, 127) as u8
}
