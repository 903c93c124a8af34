//! Static rail network reference data and map geometry for RailWatch.
//!
//! This crate owns the immutable side of the dashboard's world: the
//! [`RailNetwork`] segment registry, the built-in five-segment network,
//! and the position math that places a train on the schematic map from
//! its segment and progress.
//!
//! # Modules
//!
//! - [`network`] -- [`RailNetwork`], a keyed registry of segments
//! - [`builtin`] -- the built-in S1-S5 network the dashboard ships with
//! - [`geometry`] -- linear interpolation of train positions

pub mod builtin;
pub mod geometry;
pub mod network;

pub use builtin::builtin_network;
pub use geometry::{lerp, position_on, train_position};
pub use network::RailNetwork;
