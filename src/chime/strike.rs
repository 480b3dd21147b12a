//! The note data a chime hands to its synthesis backend.

use super::profile::EnvelopeProfile;

/// Identifies one strike of a [`Chime`](crate::Chime).
///
/// Ids increase monotonically per chime, so a backend can release the notes
/// of one strike while earlier strikes keep ringing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrikeId(pub u64);

impl StrikeId {
    pub(crate) fn next(self) -> Self {
        StrikeId(self.0.wrapping_add(1))
    }
}

/// One sine component of a strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialNote {
    /// Frequency in Hz
    pub frequency: f64,
    pub amplitude: f64,
    pub envelope: EnvelopeProfile,
}

/// Every partial of one chime strike, pressed and released as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Strike {
    pub id: StrikeId,
    /// MIDI note of the fundamental
    pub root: u8,
    pub partials: Vec<PartialNote>,
}

impl Strike {
    /// Summed amplitude of all partials; the loudest the strike can get.
    pub fn peak_amplitude(&self) -> f64 {
        self.partials.iter().map(|p| p.amplitude).sum()
    }
}
