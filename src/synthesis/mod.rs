//! Synthesis backends and the audio building blocks behind them.
//!
//! This module provides:
//! - The `Synth` trait a chime drives, plus `SharedSynth` for sharing a
//!   backend with an audio callback
//! - `NoteLog`, a backend that only records commands
//! - `PolySynth`, a polyphonic backend rendering wavetable `Voice`s shaped
//!   by an `EnvelopeGenerator`
//! - Helpers to render any signal into sample buffers

mod backend;
mod envelope;
mod poly;
pub mod render;
mod voice;
mod wavetable;

pub use backend::{NoteLog, SharedSynth, Synth, SynthEvent};
pub use envelope::EnvelopeGenerator;
pub use poly::{DEFAULT_MAX_VOICES, PolySynth};
pub use render::{render, render_into, to_i16};
pub use voice::Voice;
pub use wavetable::WavetableOscillator;
