//! Dashboard configuration.
//!
//! Mirrors the `dashboard` section of `railwatch-config.yaml`. Defaults
//! reproduce the source system's fixed constants; the delay-alert
//! probability in particular is a presentation throttle, so it is
//! configuration here rather than a hard-coded rate.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the dashboard state controller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Delay (minutes) above which a train is eligible for a delay alert.
    #[serde(default = "default_delay_threshold_minutes")]
    pub delay_threshold_minutes: f64,

    /// Per-train, per-tick probability of surfacing a delay alert once
    /// the threshold is exceeded. Clamped into `[0, 1]` when sampled.
    #[serde(default = "default_delay_alert_probability")]
    pub delay_alert_probability: f64,

    /// Maximum notifications held at once; older ones are dropped.
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,

    /// Milliseconds a notification stays up before auto-dismissal.
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,

    /// Milliseconds after startup before the "System Online" notice.
    #[serde(default = "default_startup_notice_delay_ms")]
    pub startup_notice_delay_ms: u64,

    /// Seed for the delay-alert sampling RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_delay_threshold_minutes() -> f64 {
    10.0
}

const fn default_delay_alert_probability() -> f64 {
    0.2
}

const fn default_notification_capacity() -> usize {
    5
}

const fn default_notification_ttl_ms() -> u64 {
    5000
}

const fn default_startup_notice_delay_ms() -> u64 {
    2000
}

const fn default_seed() -> u64 {
    42
}

impl DashboardConfig {
    /// Notification time-to-live as a [`Duration`].
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Startup-notice delay as a [`Duration`].
    pub const fn startup_notice_delay(&self) -> Duration {
        Duration::from_millis(self.startup_notice_delay_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            delay_threshold_minutes: default_delay_threshold_minutes(),
            delay_alert_probability: default_delay_alert_probability(),
            notification_capacity: default_notification_capacity(),
            notification_ttl_ms: default_notification_ttl_ms(),
            startup_notice_delay_ms: default_startup_notice_delay_ms(),
            seed: default_seed(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_constants() {
        let config = DashboardConfig::default();
        assert_eq!(config.delay_threshold_minutes, 10.0);
        assert_eq!(config.delay_alert_probability, 0.2);
        assert_eq!(config.notification_capacity, 5);
        assert_eq!(config.notification_ttl(), Duration::from_millis(5000));
        assert_eq!(config.startup_notice_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: DashboardConfig =
            serde_yml::from_str("delay_alert_probability: 1.0\nnotification_ttl_ms: 100").unwrap();
        assert_eq!(config.delay_alert_probability, 1.0);
        assert_eq!(config.notification_ttl_ms, 100);
        assert_eq!(config.notification_capacity, 5);
        assert_eq!(config.seed, 42);
    }
}
