//! River Ride (workspace facade crate).
//!
//! Re-exports the workspace crates as `river_ride::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub mod config;

pub use river_ride_core as core;
pub use river_ride_input as input;
pub use river_ride_term as term;
pub use river_ride_types as types;
