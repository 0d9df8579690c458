//! Advection and velocity reconstruction
//!
//! The kinematic bookends of a step: carry positions forward along the
//! force-updated velocities, and afterwards derive velocity from the net
//! displacement since the pre-advection snapshot. The reconstruction folds
//! the relaxation's implicit impulse and the boundary clamp into velocity,
//! which is what makes the method position-based.

use crate::core::Particle;
use crate::math::{Real, Vector};

/// `x += dt * v` for every particle.
pub fn advect(particles: &mut [Particle], dt: Real) {
    for particle in particles.iter_mut() {
        let velocity = particle.velocity;
        particle.position += velocity * dt;
    }
}

/// `v = (x - x_prev) / dt`, overwriting whatever the force stage produced.
pub fn reconstruct_velocities(particles: &mut [Particle], prev_positions: &[Vector], dt: Real) {
    debug_assert_eq!(particles.len(), prev_positions.len());

    let inv_dt = 1.0 / dt;
    for (particle, &prev) in particles.iter_mut().zip(prev_positions.iter()) {
        particle.velocity = (particle.position - prev) * inv_dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advection_moves_along_velocity() {
        let mut particles =
            vec![Particle::new(Vector::new(1.0, 2.0), Vector::new(10.0, -5.0))];

        advect(&mut particles, 0.1);

        assert_eq!(particles[0].position, Vector::new(2.0, 1.5));
    }

    #[test]
    fn reconstruction_divides_net_displacement_by_dt() {
        let prev = vec![Vector::new(1.0, 1.0)];
        let mut particles =
            vec![Particle::new(Vector::new(1.5, 0.8), Vector::new(100.0, 100.0))];

        reconstruct_velocities(&mut particles, &prev, 0.01);

        let expected = Vector::new(50.0, -20.0);
        assert!((particles[0].velocity - expected).length() < 1e-12);
    }
}
