//! Overtone sets: the partials that give each chime voice its timbre.

use crate::error::ConfigError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// One sine component of a struck note.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partial {
    /// Frequency relative to the fundamental
    pub ratio: f64,
    /// Relative amplitude (0.0 to 1.0)
    pub weight: f64,
}

impl Partial {
    pub const fn new(ratio: f64, weight: f64) -> Self {
        Self { ratio, weight }
    }
}

const BELL: &[Partial] = &[
    Partial::new(1.00, 0.8),
    Partial::new(1.48, 0.19),
    Partial::new(1.35, 0.01),
    Partial::new(1.72, 0.0),
];

const PERFECT: &[Partial] = &[
    Partial::new(1.00, 0.6),
    Partial::new(2.00, 0.2),
    Partial::new(3.00, 0.1),
    Partial::new(4.00, 0.05),
    Partial::new(5.00, 0.05),
    Partial::new(6.00, 0.0),
    Partial::new(7.00, 0.0),
];

const TUBULAR: &[Partial] = &[
    Partial::new(1.00, 0.6),
    Partial::new(2.76, 0.2),
    Partial::new(5.40, 0.1),
    Partial::new(8.93, 0.1),
    Partial::new(11.34, 0.0),
    Partial::new(18.64, 0.0),
    Partial::new(31.87, 0.0),
];

/// An ordered, non-empty list of partials whose first entry is the fundamental.
///
/// The weights should add up to 1.0 or less to keep a strike at full
/// amplitude from clipping; this is not enforced, see [`total_weight`].
///
/// [`total_weight`]: OvertoneSet::total_weight
///
/// # Examples
///
/// ```
/// use windchime::{OvertoneSet, Partial, VoiceType};
///
/// let tubular = VoiceType::Tubular.overtones();
/// assert_eq!(tubular.len(), 7);
/// assert_eq!(tubular.fundamental().ratio, 1.0);
///
/// let custom = OvertoneSet::new(vec![Partial::new(1.0, 0.7), Partial::new(2.4, 0.3)]).unwrap();
/// assert!((custom.total_weight() - 1.0).abs() < 1e-12);
///
/// assert!(OvertoneSet::new(vec![Partial::new(2.0, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OvertoneSet {
    partials: Cow<'static, [Partial]>,
}

impl OvertoneSet {
    /// Builds a custom overtone set.
    ///
    /// Fails if the list is empty or the first partial's ratio is not 1.0.
    pub fn new(partials: Vec<Partial>) -> Result<Self, ConfigError> {
        match partials.first() {
            None => Err(ConfigError::Overtones("at least one partial is required")),
            Some(first) if first.ratio != 1.0 => Err(ConfigError::Overtones(
                "the first partial must be the fundamental (ratio 1.0)",
            )),
            Some(_) => Ok(Self {
                partials: Cow::Owned(partials),
            }),
        }
    }

    const fn preset(partials: &'static [Partial]) -> Self {
        Self {
            partials: Cow::Borrowed(partials),
        }
    }

    /// The partials in order, fundamental first.
    pub fn partials(&self) -> &[Partial] {
        &self.partials
    }

    /// The first partial.
    pub fn fundamental(&self) -> Partial {
        // Non-empty by construction
        self.partials[0]
    }

    /// Number of partials, and so of voices per strike.
    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Sum of all partial weights.
    pub fn total_weight(&self) -> f64 {
        self.partials.iter().map(|p| p.weight).sum()
    }

    /// Iterates the partials in order.
    pub fn iter(&self) -> impl Iterator<Item = &Partial> {
        self.partials.iter()
    }
}

impl<'a> IntoIterator for &'a OvertoneSet {
    type Item = &'a Partial;
    type IntoIter = std::slice::Iter<'a, Partial>;

    fn into_iter(self) -> Self::IntoIter {
        self.partials.iter()
    }
}

/// The pre-compiled chime voices.
///
/// - `Bell`: a single-capped tube with empirically measured overtones.
/// - `Perfect`: a dual-capped tube whose overtones are the ideal harmonics.
/// - `Tubular`: a traditional open-ended tube with empirical, non-harmonic
///   overtones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VoiceType {
    Bell,
    Perfect,
    #[default]
    Tubular,
}

impl VoiceType {
    pub const ALL: [VoiceType; 3] = [VoiceType::Bell, VoiceType::Perfect, VoiceType::Tubular];

    /// The overtone set of this voice.
    pub fn overtones(&self) -> OvertoneSet {
        match self {
            VoiceType::Bell => OvertoneSet::preset(BELL),
            VoiceType::Perfect => OvertoneSet::preset(PERFECT),
            VoiceType::Tubular => OvertoneSet::preset(TUBULAR),
        }
    }

    /// Parses a voice tag, falling back to `Tubular` for anything unknown.
    ///
    /// Prefer [`str::parse`], which reports unknown tags as errors; this
    /// lossy form exists for configuration sources that historically relied
    /// on the fallback. A warning is logged whenever it kicks in.
    ///
    /// # Examples
    ///
    /// ```
    /// use windchime::VoiceType;
    ///
    /// assert_eq!(VoiceType::from_tag_or_default("bell"), VoiceType::Bell);
    /// assert_eq!(VoiceType::from_tag_or_default("belll"), VoiceType::Tubular);
    /// ```
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            log::warn!("unknown voice type '{}', using tubular", tag);
            VoiceType::Tubular
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            VoiceType::Bell => "bell",
            VoiceType::Perfect => "perfect",
            VoiceType::Tubular => "tubular",
        }
    }
}

impl FromStr for VoiceType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bell" => Ok(VoiceType::Bell),
            "perfect" => Ok(VoiceType::Perfect),
            "tubular" => Ok(VoiceType::Tubular),
            _ => Err(ConfigError::UnknownVoiceType(s.to_string())),
        }
    }
}

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_starts_at_the_fundamental() {
        for voice in VoiceType::ALL {
            let set = voice.overtones();
            assert!(!set.is_empty());
            assert_eq!(set.fundamental().ratio, 1.0);
        }
    }

    #[test]
    fn test_preset_weights_do_not_exceed_unity() {
        for voice in VoiceType::ALL {
            assert!(voice.overtones().total_weight() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_preset_contents() {
        let bell = VoiceType::Bell.overtones();
        assert_eq!(bell.len(), 4);
        assert_eq!(bell.partials()[1], Partial::new(1.48, 0.19));

        let tubular = VoiceType::Tubular.overtones();
        let ratios: Vec<f64> = tubular.iter().map(|p| p.ratio).collect();
        assert_eq!(ratios, vec![1.00, 2.76, 5.40, 8.93, 11.34, 18.64, 31.87]);

        let perfect = VoiceType::Perfect.overtones();
        assert!(perfect.iter().enumerate().all(|(i, p)| p.ratio == (i + 1) as f64));
    }

    #[test]
    fn test_custom_set_validation() {
        assert!(matches!(
            OvertoneSet::new(Vec::new()),
            Err(ConfigError::Overtones(_))
        ));
        assert!(matches!(
            OvertoneSet::new(vec![Partial::new(0.5, 0.5), Partial::new(1.0, 0.5)]),
            Err(ConfigError::Overtones(_))
        ));

        let set = OvertoneSet::new(vec![Partial::new(1.0, 1.0)]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_voice_type_parsing() {
        assert_eq!("bell".parse::<VoiceType>().unwrap(), VoiceType::Bell);
        assert_eq!("Perfect".parse::<VoiceType>().unwrap(), VoiceType::Perfect);
        assert_eq!("TUBULAR".parse::<VoiceType>().unwrap(), VoiceType::Tubular);
        assert!(matches!(
            "gong".parse::<VoiceType>(),
            Err(ConfigError::UnknownVoiceType(_))
        ));
    }

    #[test]
    fn test_voice_type_fallback_and_default() {
        assert_eq!(VoiceType::default(), VoiceType::Tubular);
        assert_eq!(VoiceType::from_tag_or_default("perfect"), VoiceType::Perfect);
        assert_eq!(VoiceType::from_tag_or_default(""), VoiceType::Tubular);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for voice in VoiceType::ALL {
            assert_eq!(voice.to_string().parse::<VoiceType>().unwrap(), voice);
        }
    }
}
