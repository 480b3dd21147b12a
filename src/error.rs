//! Error types for chime construction, pitch parsing, and synthesis backends.

use thiserror::Error;

/// Error type for resolving pitch names such as `"A#4"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty
    #[error("input string is empty")]
    Empty,
    /// The pitch letter or accidental was invalid or unrecognized
    #[error("invalid pitch name: '{0}'")]
    InvalidPitch(String),
    /// The octave was invalid or outside -1..=9
    #[error("invalid octave: '{0}'")]
    InvalidOctave(String),
    /// The input did not look like `<pitch><octave>`
    #[error("invalid note format: '{0}'")]
    InvalidFormat(String),
}

/// Error type for invalid chime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown voice type: '{0}'")]
    UnknownVoiceType(String),
    #[error("invalid overtone set: {0}")]
    Overtones(&'static str),
    #[error("waveform table size must be greater than zero")]
    WaveSize,
    #[error("sample rate must be greater than zero")]
    SampleRate,
    #[error("scale index {index} out of bounds for a scale of {len} notes")]
    ScaleIndex { index: usize, len: usize },
    #[cfg(feature = "serde")]
    #[error("invalid chime configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error type reported by a synthesis backend or output sink.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The backend or its output device cannot accept commands
    #[error("synthesizer unavailable: {0}")]
    Unavailable(String),
    #[cfg(feature = "wav")]
    #[error("failed to write WAV output: {0}")]
    Wav(#[from] hound::Error),
}

/// Umbrella error returned by [`Chime`](crate::Chime) operations.
#[derive(Debug, Error)]
pub enum ChimeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Synth(#[from] SynthError),
}
