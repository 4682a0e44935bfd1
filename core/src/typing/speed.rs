//! Randomized typing delays

use std::time::Duration;

use folio_types::TypingSpeed;
use rand::Rng;

/// Draw one inter-character delay: `max(base * (1 + u), floor)` with
/// `u` uniform in `[-variation, +variation]`.
///
/// The result is never below `floor_ms` (or zero, for a bogus floor).
pub fn jittered_delay<R: Rng + ?Sized>(speed: TypingSpeed, floor_ms: f64, rng: &mut R) -> Duration {
    let variation = speed.variation.abs();
    let factor = if variation > 0.0 && variation.is_finite() {
        1.0 + rng.random_range(-variation..=variation)
    } else {
        1.0
    };
    let millis = (speed.base_ms * factor).max(floor_ms).max(0.0);
    // `as` saturates, so NaN and overflow cannot panic here
    Duration::from_micros((millis * 1000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::MIN_TYPING_DELAY_MS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn delay_never_drops_below_floor() {
        let mut rng = StdRng::seed_from_u64(7);
        let speeds = [
            TypingSpeed::new(60.0, 0.3),
            TypingSpeed::new(55.0, 0.5),
            TypingSpeed::new(25.0, 0.9),
            TypingSpeed::new(5.0, 1.0),
        ];
        let floor = Duration::from_millis(MIN_TYPING_DELAY_MS as u64);
        for speed in speeds {
            for _ in 0..5_000 {
                assert!(jittered_delay(speed, MIN_TYPING_DELAY_MS, &mut rng) >= floor);
            }
        }
    }

    #[test]
    fn delay_stays_within_variation_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let speed = TypingSpeed::new(400.0, 0.2);
        for _ in 0..5_000 {
            let delay = jittered_delay(speed, MIN_TYPING_DELAY_MS, &mut rng);
            assert!(delay >= Duration::from_millis(320));
            assert!(delay <= Duration::from_millis(480));
        }
    }

    #[test]
    fn zero_variation_is_exact() {
        let mut rng = StdRng::seed_from_u64(1);
        let delay = jittered_delay(TypingSpeed::new(60.0, 0.0), 20.0, &mut rng);
        assert_eq!(delay, Duration::from_millis(60));
    }

    #[test]
    fn negative_base_is_clamped_to_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        let delay = jittered_delay(TypingSpeed::new(-100.0, 0.5), 20.0, &mut rng);
        assert_eq!(delay, Duration::from_millis(20));
    }

    #[test]
    fn same_seed_same_sequence() {
        let speed = TypingSpeed::new(55.0, 0.5);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            assert_eq!(jittered_delay(speed, 20.0, &mut a), jittered_delay(speed, 20.0, &mut b));
        }
    }
}
