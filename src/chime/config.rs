//! Chime configuration with builder methods and optional JSON support.

use super::overtones::{Partial, VoiceType};
use super::profile::{MaterialProfile, StrikerProfile};
use super::waveform::DEFAULT_WAVE_SIZE;
use crate::music::Scale;

/// Playback rate of the waveform table, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 11020;

/// Default loudness factor for strikes and the waveform peak.
pub const DEFAULT_LOUDNESS: f64 = 0.5;

/// Everything needed to build a [`Chime`](crate::Chime).
///
/// # Examples
///
/// ```
/// use windchime::{ChimeConfig, Material, Scale, Striker, VoiceType};
///
/// let config = ChimeConfig::default()
///     .with_preset_scale(Scale::Westminster)
///     .with_material(Material::Brass)
///     .with_striker(Striker::HardWood)
///     .with_voice(VoiceType::Bell)
///     .with_scale_offset(-12)
///     .with_loudness(0.8);
///
/// assert_eq!(config.scale, vec!["G#5", "E5", "F#5", "B4"]);
/// assert_eq!(config.wave_size, 128);
/// assert_eq!(config.sample_rate, 11020);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChimeConfig {
    /// Pitch names, resolved in order
    pub scale: Vec<String>,
    pub material: MaterialProfile,
    pub striker: StrikerProfile,
    pub voice: VoiceType,
    /// Custom partials replacing the voice preset
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub overtones: Option<Vec<Partial>>,
    /// Half-steps added to every scale entry
    pub scale_offset: i32,
    pub loudness: f64,
    /// Samples per waveform cycle
    pub wave_size: usize,
    /// Waveform playback rate in Hz
    pub sample_rate: u32,
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            scale: Scale::default().to_names(),
            material: MaterialProfile::default(),
            striker: StrikerProfile::default(),
            voice: VoiceType::default(),
            overtones: None,
            scale_offset: 0,
            loudness: DEFAULT_LOUDNESS,
            wave_size: DEFAULT_WAVE_SIZE,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl ChimeConfig {
    pub fn with_scale<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scale = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preset_scale(mut self, scale: Scale) -> Self {
        self.scale = scale.to_names();
        self
    }

    pub fn with_material(mut self, material: impl Into<MaterialProfile>) -> Self {
        self.material = material.into();
        self
    }

    pub fn with_striker(mut self, striker: impl Into<StrikerProfile>) -> Self {
        self.striker = striker.into();
        self
    }

    pub fn with_voice(mut self, voice: VoiceType) -> Self {
        self.voice = voice;
        self
    }

    /// Replaces the voice preset with custom partials.
    ///
    /// They are validated when the chime is built.
    pub fn with_overtones(mut self, partials: Vec<Partial>) -> Self {
        self.overtones = Some(partials);
        self
    }

    pub fn with_scale_offset(mut self, offset: i32) -> Self {
        self.scale_offset = offset;
        self
    }

    pub fn with_loudness(mut self, loudness: f64) -> Self {
        self.loudness = loudness;
        self
    }

    pub fn with_wave_size(mut self, size: usize) -> Self {
        self.wave_size = size;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }
}

#[cfg(feature = "serde")]
impl ChimeConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use windchime::{ChimeConfig, VoiceType};
    ///
    /// let config = ChimeConfig::from_json(r#"{ "voice": "bell", "scale_offset": 3 }"#).unwrap();
    /// assert_eq!(config.voice, VoiceType::Bell);
    /// assert_eq!(config.scale_offset, 3);
    /// assert_eq!(config.loudness, 0.5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, crate::error::ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::profile::{Material, Striker};

    #[test]
    fn test_defaults() {
        let config = ChimeConfig::default();
        assert_eq!(config.scale, vec!["C5", "E5", "G5", "A#5", "D6"]);
        assert_eq!(config.material, Material::SteelEmt.profile());
        assert_eq!(config.striker, Striker::Metal.profile());
        assert_eq!(config.voice, VoiceType::Tubular);
        assert_eq!(config.overtones, None);
        assert_eq!(config.scale_offset, 0);
        assert_eq!(config.loudness, 0.5);
        assert_eq!(config.wave_size, 128);
        assert_eq!(config.sample_rate, 11020);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ChimeConfig::default()
            .with_scale(["A4", "C5"])
            .with_material(MaterialProfile::new(0.1, 0.5, 3.0))
            .with_overtones(vec![Partial::new(1.0, 1.0)])
            .with_wave_size(256)
            .with_sample_rate(44100);

        assert_eq!(config.scale, vec!["A4", "C5"]);
        assert_eq!(config.material.release_time, 3.0);
        assert_eq!(config.overtones.as_deref(), Some(&[Partial::new(1.0, 1.0)][..]));
        assert_eq!(config.wave_size, 256);
        assert_eq!(config.sample_rate, 44100);
    }
}
