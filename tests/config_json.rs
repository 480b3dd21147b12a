#![cfg(feature = "serde")]

use windchime::{
    Chime, ChimeConfig, ConfigError, Material, NoteLog, Partial, Scale, Striker, VoiceType,
};

#[test]
fn test_json_round_trip() {
    let config = ChimeConfig::default()
        .with_preset_scale(Scale::Trinity)
        .with_material(Material::Wood)
        .with_striker(Striker::HardWood)
        .with_voice(VoiceType::Perfect)
        .with_scale_offset(-5)
        .with_loudness(0.75);

    let json = config.to_json().unwrap();
    assert_eq!(ChimeConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(ChimeConfig::from_json("{}").unwrap(), ChimeConfig::default());
}

#[test]
fn test_custom_overtones_and_profiles_from_json() {
    let json = r#"{
        "scale": ["A4", "C#5", "E5"],
        "material": { "attack_time": 0.05, "attack_level": 0.8, "release_time": 3.0 },
        "striker": { "attack_time": 0.0, "attack_level_ratio": 0.5 },
        "overtones": [
            { "ratio": 1.0, "weight": 0.7 },
            { "ratio": 2.4, "weight": 0.3 }
        ],
        "sample_rate": 22050
    }"#;

    let config = ChimeConfig::from_json(json).unwrap();
    assert_eq!(
        config.overtones,
        Some(vec![Partial::new(1.0, 0.7), Partial::new(2.4, 0.3)])
    );

    let mut chime = Chime::new(config, |_, _| Ok(NoteLog::new())).unwrap();
    assert_eq!(chime.scale(), &[69, 73, 76]);
    assert_eq!(chime.envelope().attack_level, 0.4);
    assert_eq!(chime.sample_rate(), 22050);

    let strike = chime.strike(69, 1.0).unwrap();
    assert_eq!(strike.partials.len(), 2);
}

#[test]
fn test_unknown_voice_is_an_error() {
    let err = ChimeConfig::from_json(r#"{ "voice": "gong" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_presets_serialize_as_snake_case() {
    assert_eq!(serde_json::to_string(&VoiceType::Tubular).unwrap(), "\"tubular\"");
    assert_eq!(serde_json::to_string(&Scale::CNine).unwrap(), "\"c_nine\"");
    assert_eq!(serde_json::to_string(&Material::SteelEmt).unwrap(), "\"steel_emt\"");
}
