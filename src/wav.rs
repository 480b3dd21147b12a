//! WAV file output (requires the `wav` feature).

use crate::AudioSignal;
use crate::error::SynthError;
use crate::synthesis::{render, to_i16};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Writes mono 16-bit PCM samples to `path`.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    samples: &[i16],
    sample_rate: u32,
) -> Result<(), SynthError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for sample in samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;

    log::debug!(
        "wrote {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.as_ref().display()
    );
    Ok(())
}

/// Renders `seconds` of `signal` and writes it to `path` at the signal's rate.
///
/// Samples beyond [-1.0, 1.0] are clipped.
pub fn render_to_wav<S, P>(signal: &mut S, seconds: f64, path: P) -> Result<(), SynthError>
where
    S: AudioSignal + ?Sized,
    P: AsRef<Path>,
{
    let samples = to_i16(&render(signal, seconds));
    write_wav(path, &samples, signal.sample_rate().round() as u32)
}
