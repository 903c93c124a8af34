//! Simulated live positions feed for RailWatch.
//!
//! There is no real backend: [`TrainFeed`] generates each snapshot from
//! the previous one by a seeded randomized walk and fans it out to
//! registered [`FeedListener`]s on a fixed tick interval.
//!
//! # Modules
//!
//! - [`config`] -- [`FeedConfig`] (tick interval, walk seed)
//! - [`feed`] -- [`TrainFeed`] service and the [`FeedListener`] trait
//! - [`perturb`] -- the per-tick perturbation walk
//! - [`seed`] -- the five-train seed snapshot

pub mod config;
pub mod feed;
pub mod perturb;
pub mod seed;

pub use config::FeedConfig;
pub use feed::{FeedListener, NoOpListener, TrainFeed};
pub use perturb::{advance_train, advance_trains};
pub use seed::seed_trains;
