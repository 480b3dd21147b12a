//! Strike schedules for wind-driven and random chime playback.
//!
//! A chime hung in the wind is struck in short bursts: the striker swings
//! into one tube and then brushes a few of its neighbours on the same side
//! of the ring. These generators only decide *what* to strike and *how long
//! to wait*; pacing the strikes is left to the caller.

use rand::Rng;
use std::time::Duration;

/// Highest wind speed the wind model distinguishes; faster winds are clamped.
pub const MAX_WIND_SPEED: f64 = 50.0;

/// One planned strike of a scale entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledStrike {
    /// Index into the chime's scale
    pub index: usize,
    /// Normalized strike amplitude (0.0 to 1.0)
    pub amplitude: f64,
    /// Time to wait after this strike before the next one
    pub wait: Duration,
}

/// A burst of strikes followed by a quiet pause.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gust {
    pub strikes: Vec<ScheduledStrike>,
    /// Time to wait after the last strike before the next gust
    pub pause: Duration,
}

/// Linearly maps `x` from `in_range` to `out_range`, clamping to the output range.
///
/// # Examples
///
/// ```
/// use windchime::music::wind::map_range;
///
/// assert!((map_range(25.0, (0.0, 50.0), (0.4, 1.0)) - 0.7).abs() < 1e-12);
/// assert_eq!(map_range(80.0, (0.0, 50.0), (0.4, 1.0)), 1.0);
/// assert_eq!(map_range(0.0, (0.0, 50.0), (2.0, 0.01)), 2.0);
/// ```
pub fn map_range(x: f64, in_range: (f64, f64), out_range: (f64, f64)) -> f64 {
    let (in_min, in_max) = in_range;
    let (out_min, out_max) = out_range;
    let mapped = out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min);
    if out_min <= out_max {
        mapped.clamp(out_min, out_max)
    } else {
        mapped.clamp(out_max, out_min)
    }
}

/// Wind-speed-driven strike pattern.
///
/// Each gust starts at a random tube, walks to adjacent tubes in one random
/// direction (wrapping around the ring), and plays a random number of them.
/// No more than half the tubes sound in one gust. Louder strikes and shorter
/// pauses come with stronger wind.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use windchime::WindPattern;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let wind = WindPattern::new(20.0);
///
/// let gust = wind.next_gust(&mut rng, 6);
/// assert!(gust.strikes.len() <= 3);
/// assert!(gust.strikes.iter().all(|s| s.index < 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindPattern {
    wind_speed: f64,
}

impl WindPattern {
    /// Creates a pattern for a wind speed between 0 and [`MAX_WIND_SPEED`].
    pub fn new(wind_speed: f64) -> Self {
        Self {
            wind_speed: wind_speed.clamp(0.0, MAX_WIND_SPEED),
        }
    }

    pub fn wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn set_wind_speed(&mut self, wind_speed: f64) {
        self.wind_speed = wind_speed.clamp(0.0, MAX_WIND_SPEED);
    }

    /// Strike amplitude for the current wind speed (0.4 in calm air, 1.0 in a gale).
    pub fn amplitude(&self) -> f64 {
        map_range(self.wind_speed, (0.0, MAX_WIND_SPEED), (0.4, 1.0))
    }

    /// Generates the next gust for a scale of `scale_len` notes.
    pub fn next_gust<R: Rng>(&self, rng: &mut R, scale_len: usize) -> Gust {
        let mut strikes = Vec::new();

        if scale_len > 0 {
            let reach = (scale_len / 2).max(1);
            let forward = rng.gen_bool(0.5);

            let mut candidates = Vec::with_capacity(reach);
            candidates.push(rng.gen_range(0..scale_len));
            for count in 1..reach {
                let previous = candidates[count - 1];
                let next = if forward {
                    (previous + 1) % scale_len
                } else {
                    (previous + scale_len - 1) % scale_len
                };
                candidates.push(next);
            }

            let to_play = rng.gen_range(0..=candidates.len());
            let amplitude = self.amplitude();
            strikes.extend(candidates.into_iter().take(to_play).map(|index| {
                ScheduledStrike {
                    index,
                    amplitude,
                    wait: Duration::from_millis(rng.gen_range(10..60) * 10),
                }
            }));
        }

        let calm = map_range(self.wind_speed, (0.0, MAX_WIND_SPEED), (2.0, 0.01));
        let pause = Duration::from_secs_f64(calm + rng.gen_range(0.0..0.5));

        Gust { strikes, pause }
    }
}

/// Unstructured random playback: a handful of full-volume strikes on random
/// tubes with long, uneven gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomPattern;

impl RandomPattern {
    /// Generates the next burst for a scale of `scale_len` notes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use windchime::RandomPattern;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let burst = RandomPattern.next_burst(&mut rng, 5);
    /// assert!(burst.strikes.len() < 10);
    /// ```
    pub fn next_burst<R: Rng>(&self, rng: &mut R, scale_len: usize) -> Gust {
        let mut strikes = Vec::new();

        if scale_len > 0 {
            let count = rng.gen_range(0..10);
            for _ in 0..count {
                strikes.push(ScheduledStrike {
                    index: rng.gen_range(0..scale_len),
                    amplitude: 1.0,
                    wait: Duration::from_millis(rng.gen_range(1..3) * 600),
                });
            }
        }

        let pause = Duration::from_millis(rng.gen_range(1..10) * 500);
        Gust { strikes, pause }
    }
}
