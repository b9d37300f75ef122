//! Configuration module for FlowTrack
//!
//! Path resolution only: the monthly budget and password are process
//! defaults supplied at startup and are never persisted.

pub mod paths;

pub use paths::TrackerPaths;
