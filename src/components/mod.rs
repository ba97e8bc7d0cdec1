//! ECS components for the animated things.
//!
//! Submodules overview:
//! - [`animcursor`] – per-thing playback position into the shared frame set
//! - [`mapposition`] – scene-local position in pixels
//! - [`onscene`] – binds a thing to one display scene
//! - [`velocity`] – per-tick drift velocity

pub mod animcursor;
pub mod mapposition;
pub mod onscene;
pub mod velocity;
