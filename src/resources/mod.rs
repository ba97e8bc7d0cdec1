//! ECS resources made available to systems.
//!
//! Overview
//! - `entropy` – block-buffered random source with swappable backends
//! - `frametiming` – shared per-frame display durations
//! - `saverconfig` – immutable settings loaded from the INI file
//! - `scenelayout` – per-display scene rectangles inside the spanning window
//! - `scenestore` – per-scene frame textures (non-send, main thread only)
//! - `worldtime` – millisecond clock and per-frame delta

pub mod entropy;
pub mod frametiming;
pub mod saverconfig;
pub mod scenelayout;
pub mod scenestore;
pub mod worldtime;
