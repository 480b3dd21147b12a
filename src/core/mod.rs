//! Core signal processing traits.
//!
//! This module provides the sample-generation abstractions shared by the
//! reference synthesizer and the output sinks:
//! - `Signal` trait for anything that produces samples
//! - `AudioSignal` trait for signals that know their sample rate
//! - `Pitched` trait for signals with a controllable frequency

mod audio;
mod signal;

pub use audio::AudioSignal;
pub use signal::{Pitched, Signal};
