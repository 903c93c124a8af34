//! The per-tick perturbation walk.
//!
//! Each tick derives the next snapshot from the previous one by an
//! independent randomized walk per train. This is deliberately not a
//! physical simulation: speed, progress, and delay each take a small
//! uniform step and are clamped to their domains.
//!
//! Half-open sampling ranges reproduce the source system's
//! `Math.random()`-based deltas exactly.

use rand::Rng;
use railwatch_types::Train;

/// Smallest delay a train can report, in minutes.
const MIN_DELAY_MINUTES: f64 = -10.0;

/// Advance one train by a single perturbation step.
///
/// - speed moves by a uniform delta in `[-5, +5)`, clamped to `>= 0`
/// - progress grows by a uniform amount in `[0, +0.05)`, clamped to `<= 1`
/// - delay moves by a uniform delta in `[-1, +1)`, clamped to `>= -10`
///
/// Status, priority, ETA, and route fields are left untouched; the feed
/// reports status independently of the delay figure.
pub fn advance_train(train: &mut Train, rng: &mut impl Rng) {
    train.speed = (train.speed + rng.random_range(-5.0..5.0)).max(0.0);
    train.progress = (train.progress + rng.random_range(0.0..0.05)).min(1.0);
    train.delay = (train.delay + rng.random_range(-1.0..1.0)).max(MIN_DELAY_MINUTES);
}

/// Advance every train in a snapshot by one perturbation step.
pub fn advance_trains(trains: &mut [Train], rng: &mut impl Rng) {
    for train in trains {
        advance_train(train, rng);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use railwatch_types::{SegmentId, TrainId, TrainStatus};

    use super::*;

    fn test_train(speed: f64, progress: f64, delay: f64) -> Train {
        Train {
            id: TrainId::from("900"),
            segment: SegmentId::from("S1"),
            speed,
            eta: Utc::now(),
            status: TrainStatus::OnTime,
            priority: 2,
            origin: String::from("A"),
            destination: String::from("B"),
            progress,
            delay,
        }
    }

    #[test]
    fn walk_respects_all_clamps() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut train = test_train(2.0, 0.95, -9.5);
        for _ in 0..500 {
            advance_train(&mut train, &mut rng);
            assert!(train.speed >= 0.0);
            assert!(train.progress <= 1.0);
            assert!(train.delay >= -10.0);
        }
    }

    #[test]
    fn progress_never_decreases() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut train = test_train(40.0, 0.1, 0.0);
        let mut previous = train.progress;
        for _ in 0..100 {
            advance_train(&mut train, &mut rng);
            assert!(train.progress >= previous);
            previous = train.progress;
        }
    }

    #[test]
    fn walk_is_reproducible_for_equal_seeds() {
        let mut a = test_train(40.0, 0.5, 3.0);
        let mut b = a.clone();
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            advance_train(&mut a, &mut rng_a);
            advance_train(&mut b, &mut rng_b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn schedule_fields_are_untouched() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut train = test_train(40.0, 0.5, 3.0);
        let eta = train.eta;
        advance_train(&mut train, &mut rng);
        assert_eq!(train.status, TrainStatus::OnTime);
        assert_eq!(train.priority, 2);
        assert_eq!(train.eta, eta);
        assert_eq!(train.segment, SegmentId::from("S1"));
    }
}
