use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{LitStr, Token, parse_macro_input};

/// Resolves a pitch name to its MIDI note number at compile time.
///
/// The name uses scientific pitch notation: a letter `A`-`G`, an optional
/// `#` or `b`, and an octave from -1 to 9. The expansion is a plain `u8`
/// literal, so it can be used in `const` items.
///
/// # Examples
///
/// ```ignore
/// use windchime::note;
///
/// const A4: u8 = note!("A4");
/// assert_eq!(A4, 69);
/// assert_eq!(note!("Bb3"), note!("A#3"));
/// ```
#[proc_macro]
pub fn note(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    expand_note(&input).into()
}

/// Resolves a list of pitch names to a `[u8; N]` array at compile time.
///
/// ```ignore
/// use windchime::scale;
///
/// const C_MAJOR_TRIAD: [u8; 3] = scale!("C5", "E5", "G5");
/// assert_eq!(C_MAJOR_TRIAD, [72, 76, 79]);
/// ```
#[proc_macro]
pub fn scale(input: TokenStream) -> TokenStream {
    let parser = Punctuated::<LitStr, Token![,]>::parse_terminated;
    match parser.parse(input) {
        Ok(names) => expand_scale(names.iter()).into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Expands one name to a `u8` literal, or a `compile_error!` spanned on the literal.
fn expand_note(lit: &LitStr) -> TokenStream2 {
    let name = lit.value();
    match parse_note(&name) {
        Ok(midi) => quote! { #midi },
        Err(e) => {
            let error_msg = format!("Invalid note name '{}': {}", name, e);
            syn::Error::new(lit.span(), error_msg).to_compile_error()
        }
    }
}

fn expand_scale<'a>(names: impl Iterator<Item = &'a LitStr>) -> TokenStream2 {
    let mut notes = Vec::new();
    for lit in names {
        match parse_note(&lit.value()) {
            Ok(midi) => notes.push(midi),
            Err(_) => return expand_note(lit),
        }
    }
    quote! { [#(#notes),*] }
}

fn semitone(letter: &str) -> Result<u8, String> {
    match letter.to_uppercase().as_str() {
        "C" => Ok(0),
        "C#" | "DB" => Ok(1),
        "D" => Ok(2),
        "D#" | "EB" => Ok(3),
        "E" | "FB" => Ok(4),
        "F" | "E#" => Ok(5),
        "F#" | "GB" => Ok(6),
        "G" => Ok(7),
        "G#" | "AB" => Ok(8),
        "A" => Ok(9),
        "A#" | "BB" => Ok(10),
        "B" => Ok(11),
        other => Err(format!("invalid pitch '{}'", other)),
    }
}

fn parse_note(s: &str) -> Result<u8, String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let octave_start = match s.chars().position(|c| c.is_ascii_digit() || c == '-') {
        Some(0) => return Err("name starts with a number".to_string()),
        Some(pos) => pos,
        None => return Err("missing octave".to_string()),
    };

    let (pitch_str, octave_str) = s.split_at(octave_start);
    let octave = octave_str
        .parse::<i8>()
        .map_err(|_| format!("invalid octave '{}'", octave_str))?;
    if !(-1..=9).contains(&octave) {
        return Err(format!("octave {} out of range (-1 to 9)", octave));
    }

    let midi = (i16::from(octave) + 1) * 12 + i16::from(semitone(pitch_str)?);
    u8::try_from(midi)
        .ok()
        .filter(|m| *m <= 127)
        .ok_or_else(|| format!("note {} is above MIDI 127", midi))
}
