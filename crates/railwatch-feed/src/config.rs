//! Feed configuration.
//!
//! Mirrors the `feed` section of `railwatch-config.yaml`. All fields have
//! defaults matching the source system's fixed constants, so an absent
//! section behaves identically to the original hard-coded feed.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the simulated positions feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Real-time milliseconds between snapshot broadcasts.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Seed for the perturbation walk's random number generator.
    ///
    /// Reconnecting with the same seed replays the identical walk.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_tick_interval_ms() -> u64 {
    3000
}

const fn default_seed() -> u64 {
    42
}

impl FeedConfig {
    /// The tick period as a [`Duration`].
    pub const fn tick_interval(self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            seed: default_seed(),
        }
    }
}
