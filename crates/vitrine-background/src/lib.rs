//! Ambient particle field for the vitrine landing page.
//!
//! This crate generates a fixed-size batch of randomized particles and
//! renders them as an upward-drifting background layer. Particle
//! attributes are drawn once at batch creation and never mutated; the
//! drift animation phase is derived declaratively from wall-clock time by
//! the render layer.

mod chars;
mod color;
mod field;
mod particles;

pub use color::hsl_to_rgb;
pub use field::ParticleLayer;
pub use particles::{DEFAULT_PARTICLE_COUNT, Particle, generate};
