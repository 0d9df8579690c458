//! The per-step integration pipeline
//!
//! One fixed-timestep update is a deterministic sequence of full passes over
//! the particle arena: external force, position snapshot, advection, double
//! density relaxation, boundary clamp, velocity reconstruction. Each pass
//! completes before the next begins.

pub mod advect;
pub mod boundary;
pub mod forces;
pub mod relax;

pub use advect::{advect, reconstruct_velocities};
pub use boundary::enforce_boundary;
pub use forces::apply_external_forces;
pub use relax::double_density_relaxation;

use crate::core::SimState;
use crate::math::Real;

/// Advance the simulation by one step of `dt`.
///
/// Velocity is derived, not integrated: after this returns, every particle's
/// velocity equals its net displacement over the step divided by `dt`,
/// whatever combination of force, relaxation and clamping produced it.
pub fn step(state: &mut SimState, dt: Real) {
    assert!(dt > 0.0, "timestep must be positive");

    let time = state.time();
    let force = state.params().force;
    let domain = state.params().domain;

    apply_external_forces(state.particles_mut(), force, time, dt);
    state.particle_set_mut().snapshot_positions();
    advect(state.particles_mut(), dt);

    {
        let (hash, particle_set, params, scratch) = state.relaxation_parts();
        double_density_relaxation(hash, particle_set.particles_mut(), params, dt, scratch);
    }

    enforce_boundary(state.particles_mut(), domain);

    {
        let (particles, prev_positions) = state.particle_set_mut().particles_mut_and_prev();
        reconstruct_velocities(particles, prev_positions, dt);
    }

    state.advance_clock(dt);
}
