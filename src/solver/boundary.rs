//! Boundary enforcement
//!
//! Component-wise clamp of positions to the rectangular domain. Runs after
//! relaxation, so the velocity reconstruction that follows sees the clamped
//! displacement.

use crate::core::Particle;
use crate::math::{Vector, zero_vector};

/// Clamp every position to `[0, domain.x] x [0, domain.y]`.
pub fn enforce_boundary(particles: &mut [Particle], domain: Vector) {
    let min = zero_vector();
    for particle in particles.iter_mut() {
        particle.position = particle.position.clamp(min, domain);
    }
}
