#![cfg(feature = "macros")]

use windchime::{Chime, ChimeConfig, NoteLog, note, scale};

#[test]
fn test_note_macro_a4() {
    assert_eq!(note!("A4"), 69);
}

#[test]
fn test_note_macro_sharps_and_flats() {
    assert_eq!(note!("C#4"), 61);
    assert_eq!(note!("Bb3"), 58);
    assert_eq!(note!("Bb3"), note!("A#3"));
}

#[test]
fn test_note_macro_extremes() {
    assert_eq!(note!("C-1"), 0);
    assert_eq!(note!("G9"), 127);
}

#[test]
fn test_note_macro_in_const() {
    const MIDDLE_C: u8 = note!("C4");
    assert_eq!(MIDDLE_C, 60);
}

#[test]
fn test_scale_macro() {
    const C_NINE: [u8; 5] = scale!("C5", "E5", "G5", "A#5", "D6");
    assert_eq!(C_NINE, [72, 76, 79, 82, 86]);
}

#[test]
fn test_macros_agree_with_runtime_resolution() {
    let chime = Chime::new(ChimeConfig::default(), |_, _| Ok(NoteLog::new())).unwrap();
    assert_eq!(chime.scale(), &scale!("C5", "E5", "G5", "A#5", "D6"));
}

#[test]
fn test_strike_with_note_macro() {
    let mut chime = Chime::new(ChimeConfig::default(), |_, _| Ok(NoteLog::new())).unwrap();
    let strike = chime.strike(note!("A4"), 1.0).unwrap();
    assert!((strike.partials[0].frequency - 440.0).abs() < 1e-9);
}
