//! Seed snapshot: the five trains the feed starts from.
//!
//! Reference data matching the built-in network in `railwatch-network`;
//! every seed train runs on one of the built-in segments. Note the seed
//! deliberately contains status/delay combinations that no formula maps
//! between (a stopped train with +18, an on-time train at exactly 0), so
//! downstream code must treat the two fields as independent.

use chrono::{DateTime, TimeZone, Utc};
use railwatch_types::{SegmentId, Train, TrainId, TrainStatus};

/// Reference date for the seed ETAs (all fall on the same service day).
fn eta(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 20, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Construct one seed train from its reference data.
#[allow(clippy::too_many_arguments)]
fn train(
    id: &str,
    segment: &str,
    speed: f64,
    eta_hm: (u32, u32),
    status: TrainStatus,
    priority: u8,
    origin: &str,
    destination: &str,
    progress: f64,
    delay: f64,
) -> Train {
    Train {
        id: TrainId::from(id),
        segment: SegmentId::from(segment),
        speed,
        eta: eta(eta_hm.0, eta_hm.1),
        status,
        priority,
        origin: origin.to_owned(),
        destination: destination.to_owned(),
        progress,
        delay,
    }
}

/// The five seed trains, in feed order.
pub fn seed_trains() -> Vec<Train> {
    vec![
        train(
            "502",
            "S1",
            48.0,
            (14, 12),
            TrainStatus::OnTime,
            2,
            "New Delhi",
            "Gurgaon",
            0.65,
            0.0,
        ),
        train(
            "728",
            "S2",
            22.0,
            (14, 35),
            TrainStatus::Delayed,
            1,
            "Faridabad",
            "Noida",
            0.42,
            12.0,
        ),
        train(
            "901",
            "S3",
            55.0,
            (14, 18),
            TrainStatus::OnTime,
            3,
            "Ghaziabad",
            "Dwarka",
            0.78,
            0.0,
        ),
        train(
            "345",
            "S4",
            35.0,
            (14, 45),
            TrainStatus::Ahead,
            2,
            "Rohini",
            "Badarpur",
            0.23,
            -5.0,
        ),
        train(
            "667",
            "S5",
            0.0,
            (15, 2),
            TrainStatus::Stopped,
            1,
            "Janakpuri",
            "Lajpat Nagar",
            0.89,
            18.0,
        ),
    ]
}
