//! swarmsaver library.
//!
//! Exposes the saver's ECS components, resources, and systems for use in
//! integration tests.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
