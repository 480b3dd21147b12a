//! Musical vocabulary: pitch names, frequencies, scales, and strike patterns.

pub mod core;
pub mod frequency;
pub mod scale;
pub mod wind;

pub use self::core::{Pitch, PitchResolver, ScientificPitch, midi_to_freq};
pub use frequency::Frequency;
pub use scale::{Scale, ScaleTable};
pub use wind::{Gust, RandomPattern, ScheduledStrike, WindPattern};
