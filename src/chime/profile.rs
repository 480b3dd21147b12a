//! Physical envelope data: resonator materials, strikers, and the envelope
//! they combine into.

/// Attack and damping characteristics of a resonator material.
///
/// Times are in seconds, the level is normalized. Values are not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialProfile {
    pub attack_time: f64,
    pub attack_level: f64,
    pub release_time: f64,
}

impl MaterialProfile {
    pub const fn new(attack_time: f64, attack_level: f64, release_time: f64) -> Self {
        Self {
            attack_time,
            attack_level,
            release_time,
        }
    }
}

impl Default for MaterialProfile {
    fn default() -> Self {
        Material::default().profile()
    }
}

/// Measured resonator materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Material {
    /// Steel electrical metallic tubing, the classic DIY chime tube
    #[default]
    SteelEmt,
    Ceramic,
    Wood,
    Copper,
    Aluminum,
    Brass,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::SteelEmt,
        Material::Ceramic,
        Material::Wood,
        Material::Copper,
        Material::Aluminum,
        Material::Brass,
    ];

    pub const fn profile(&self) -> MaterialProfile {
        match self {
            Material::SteelEmt => MaterialProfile::new(0.02, 1.0, 2.0),
            Material::Ceramic => MaterialProfile::new(0.10, 1.0, 0.8),
            Material::Wood => MaterialProfile::new(0.15, 1.0, 1.0),
            Material::Copper => MaterialProfile::new(0.02, 1.0, 1.5),
            Material::Aluminum => MaterialProfile::new(0.02, 0.9, 1.3),
            Material::Brass => MaterialProfile::new(0.02, 1.0, 1.8),
        }
    }
}

impl From<Material> for MaterialProfile {
    fn from(material: Material) -> Self {
        material.profile()
    }
}

/// Attack characteristics of the object that hits the chime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikerProfile {
    pub attack_time: f64,
    pub attack_level_ratio: f64,
}

impl StrikerProfile {
    pub const fn new(attack_time: f64, attack_level_ratio: f64) -> Self {
        Self {
            attack_time,
            attack_level_ratio,
        }
    }
}

impl Default for StrikerProfile {
    fn default() -> Self {
        Striker::default().profile()
    }
}

/// Measured striker materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Striker {
    #[default]
    Metal,
    Plexiglas,
    SoftWood,
    HardWood,
}

impl Striker {
    pub const ALL: [Striker; 4] = [
        Striker::Metal,
        Striker::Plexiglas,
        Striker::SoftWood,
        Striker::HardWood,
    ];

    pub const fn profile(&self) -> StrikerProfile {
        match self {
            Striker::Metal => StrikerProfile::new(0.00, 1.0),
            Striker::Plexiglas => StrikerProfile::new(0.01, 1.0),
            Striker::SoftWood => StrikerProfile::new(0.05, 1.0),
            Striker::HardWood => StrikerProfile::new(0.02, 1.0),
        }
    }
}

impl From<Striker> for StrikerProfile {
    fn from(striker: Striker) -> Self {
        striker.profile()
    }
}

/// The amplitude envelope shared by every partial of a chime.
///
/// Sustain is held at full attack level with no decay, so a release issued
/// right after the press lets the note ring out over `release_time`.
///
/// # Examples
///
/// ```
/// use windchime::{EnvelopeProfile, Material, Striker};
///
/// let env = EnvelopeProfile::from_parts(Material::Aluminum.into(), Striker::SoftWood.into());
/// assert_eq!(env.attack_time, 0.02 + 0.05);
/// assert_eq!(env.attack_level, 0.9);
/// assert_eq!(env.release_time, 1.3);
/// assert_eq!(env.decay_time, 0.0);
/// assert_eq!(env.sustain_level, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvelopeProfile {
    pub attack_time: f64,
    pub attack_level: f64,
    pub decay_time: f64,
    /// Fraction of `attack_level` held until release
    pub sustain_level: f64,
    pub release_time: f64,
}

impl EnvelopeProfile {
    /// Combines a material and a striker into one envelope.
    pub fn from_parts(material: MaterialProfile, striker: StrikerProfile) -> Self {
        Self {
            attack_time: material.attack_time + striker.attack_time,
            attack_level: material.attack_level * striker.attack_level_ratio,
            decay_time: 0.0,
            sustain_level: 1.0,
            release_time: material.release_time,
        }
    }

    /// Approximate time a struck note stays audible, in seconds.
    pub fn ring_time(&self) -> f64 {
        self.attack_time + self.decay_time + self.release_time
    }
}

impl Default for EnvelopeProfile {
    fn default() -> Self {
        Self::from_parts(MaterialProfile::default(), StrikerProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_formula_is_exact_for_all_presets() {
        for material in Material::ALL {
            for striker in Striker::ALL {
                let m = material.profile();
                let s = striker.profile();
                let env = EnvelopeProfile::from_parts(m, s);

                assert_eq!(env.attack_time, m.attack_time + s.attack_time);
                assert_eq!(env.attack_level, m.attack_level * s.attack_level_ratio);
                assert_eq!(env.release_time, m.release_time);
                assert_eq!(env.decay_time, 0.0);
                assert_eq!(env.sustain_level, 1.0);
            }
        }
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let m = MaterialProfile::new(-0.5, 2.0, -1.0);
        let s = StrikerProfile::new(0.1, 0.5);
        let env = EnvelopeProfile::from_parts(m, s);

        assert_eq!(env.attack_time, -0.5 + 0.1);
        assert_eq!(env.attack_level, 1.0);
        assert_eq!(env.release_time, -1.0);
    }

    #[test]
    fn test_defaults_are_steel_and_metal() {
        assert_eq!(MaterialProfile::default(), MaterialProfile::new(0.02, 1.0, 2.0));
        assert_eq!(StrikerProfile::default(), StrikerProfile::new(0.0, 1.0));

        let env = EnvelopeProfile::default();
        assert_eq!(env.attack_time, 0.02);
        assert!((env.ring_time() - 2.02).abs() < 1e-12);
    }
}
