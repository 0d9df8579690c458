//! External force application
//!
//! First stage of a step: integrate the configured force field into particle
//! velocities. Positions are untouched here.

use crate::config::ForceField;
use crate::core::Particle;
use crate::math::Real;

/// `v += dt * f(t)` for every particle. The field is evaluated once at the
/// current simulation time; all particles see the same force.
pub fn apply_external_forces(
    particles: &mut [Particle],
    force: ForceField,
    time: Real,
    dt: Real,
) {
    let impulse = force.eval(time) * dt;
    for particle in particles.iter_mut() {
        particle.velocity += impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector;

    #[test]
    fn constant_force_adds_dt_scaled_velocity() {
        let mut particles = vec![Particle::at_rest(Vector::new(1.0, 1.0))];
        let gravity = ForceField::Constant(Vector::new(0.0, -9.8));

        apply_external_forces(&mut particles, gravity, 0.0, 0.01);

        assert_eq!(particles[0].velocity, Vector::new(0.0, -0.098));
        assert_eq!(particles[0].position, Vector::new(1.0, 1.0));
    }

    #[test]
    fn oscillating_force_tracks_the_simulation_clock() {
        let field = ForceField::Oscillating {
            base: Vector::new(0.0, -9.8),
            amplitude: Vector::new(2.0, 0.0),
            angular_frequency: std::f64::consts::FRAC_PI_2,
        };

        // sin(pi/2 * 1) = 1: full sideways amplitude.
        assert_eq!(field.eval(1.0), Vector::new(2.0, -9.8));
        // sin(0) = 0: base field only.
        assert_eq!(field.eval(0.0), Vector::new(0.0, -9.8));
    }
}
