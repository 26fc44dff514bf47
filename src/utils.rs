//! Small pure helpers shared by the UI components.

use chrono::{DateTime, Utc};

/// Scale factor for the sine hash. Fixed so the generated sequence never
/// changes between builds.
const JITTER_SCALE: f64 = 10_000.0;

/// Maps an integer seed to a reproducible value in `[0, 1)`.
///
/// Sine-based hash with fractional part extraction: the same seed yields
/// the same value on every call and every target, so markup produced on a
/// server and on the first client render is identical. Used for the
/// decorative particle field on the landing page.
pub fn pseudo_random(seed: u32) -> f64 {
    let x = (seed as f64).sin() * JITTER_SCALE;
    x - x.floor()
}

/// Formats a timestamp as the two-digit `HH.MM` clock shown in message
/// bubbles (id-ID locale rendering).
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H.%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pseudo_random_is_deterministic() {
        for seed in 0..256 {
            assert_eq!(pseudo_random(seed), pseudo_random(seed));
        }
    }

    #[test]
    fn pseudo_random_stays_in_unit_interval() {
        for seed in 0..4096 {
            let v = pseudo_random(seed);
            assert!((0.0..1.0).contains(&v), "seed {seed} produced {v}");
        }
    }

    #[test]
    fn nearby_seeds_produce_distinct_values() {
        assert_ne!(pseudo_random(1), pseudo_random(2));
        assert_ne!(pseudo_random(2), pseudo_random(3));
    }

    #[test]
    fn clock_renders_two_digit_hour_and_minute() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(format_clock(&ts), "09.07");
    }
}
