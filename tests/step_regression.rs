//! Step Regression Tests
//!
//! These tests pin down the contract of the integration pipeline: velocity
//! is always the net per-step displacement over `dt`, the particle
//! population never changes under stepping, positions stay inside the
//! domain, and seeded runs are reproducible bit for bit.
//!
//! # Running tests
//! ```bash
//! cargo test step_regression
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use visco2d::config::ForceField;
use visco2d::math::{Real, Vector};
use visco2d::{Particle, SimParams, SimState};

// ==================== UNIVERSAL CONSTANTS ====================

/// Tolerance for the velocity reconstruction invariant.
const RECONSTRUCTION_TOLERANCE: Real = 1e-9;

/// Steps to run for multi-step stability checks.
const SOAK_STEPS: usize = 500;

// ==================== HELPER FUNCTIONS ====================

fn seeded_state(params: SimParams, seed: u64, count: usize) -> SimState {
    let mut state = SimState::new(params);
    let mut rng = StdRng::seed_from_u64(seed);
    state.seed_disc(&mut rng, count, Vector::new(20.0, 20.0), 4.0);
    state
}

/// Step once and assert that every particle's velocity equals its net
/// displacement divided by `dt`. Holds whatever the force field, because
/// reconstruction is the last thing a step does.
fn step_and_check_reconstruction(state: &mut SimState) {
    let dt = state.params().dt;
    let before: Vec<Vector> = state.particles().iter().map(|p| p.position).collect();

    state.step(dt);

    for (particle, prev) in state.particles().iter().zip(before.iter()) {
        let derived = (particle.position - *prev) / dt;
        let error = (particle.velocity - derived).length();
        assert!(
            error < RECONSTRUCTION_TOLERANCE,
            "velocity {:?} != displacement/dt {:?} (error {})",
            particle.velocity,
            derived,
            error
        );
    }
}

// ==================== TESTS ====================

#[test]
fn velocity_is_reconstructed_from_displacement_under_gravity() {
    let mut state = seeded_state(SimParams::default(), 11, 200);
    for _ in 0..25 {
        step_and_check_reconstruction(&mut state);
    }
}

#[test]
fn velocity_is_reconstructed_from_displacement_under_oscillating_force() {
    let params = SimParams::default().with_force(ForceField::Oscillating {
        base: Vector::new(0.0, -9.8),
        amplitude: Vector::new(3.0, 0.0),
        angular_frequency: 2.0,
    });
    let mut state = seeded_state(params, 11, 200);
    for _ in 0..25 {
        step_and_check_reconstruction(&mut state);
    }
}

#[test]
fn particle_count_is_invariant_across_steps() {
    let mut state = seeded_state(SimParams::default(), 3, 150);
    let dt = state.params().dt;

    for _ in 0..100 {
        state.step(dt);
        assert_eq!(state.particle_count(), 150);
    }
}

#[test]
fn zero_particles_step_is_a_no_op() {
    let mut state = SimState::new(SimParams::default());
    let dt = state.params().dt;

    state.step(dt);
    state.step(dt);

    assert_eq!(state.particle_count(), 0);
    assert!((state.time() - 2.0 * dt).abs() < 1e-15);
}

#[test]
fn overshooting_particle_is_clamped_and_velocity_reflects_the_clamp() {
    // Zero force and a single particle: the step reduces to advect + clamp,
    // so the outcome is exactly predictable.
    let params = SimParams::default().with_force(ForceField::Constant(Vector::ZERO));
    let domain = params.domain;
    let dt = params.dt;

    let mut state = SimState::new(params);
    state.add_particle(
        Particle::at_rest(Vector::new(domain.x - 0.1, 15.0)).with_velocity(Vector::new(50.0, 0.0)),
    );

    state.step(dt);

    let particle = state.particles()[0];
    // Driven 0.5 units past the wall, clamped to exactly the wall.
    assert_eq!(particle.position.x, domain.x);
    // Velocity reflects the clamped displacement (0.1 / dt), not the
    // pre-clamp 50.0.
    assert!((particle.velocity.x - 0.1 / dt).abs() < RECONSTRUCTION_TOLERANCE);
    assert_eq!(particle.velocity.y, 0.0);
}

#[test]
fn seeded_runs_are_bit_identical() {
    let mut a = seeded_state(SimParams::default(), 99, 300);
    let mut b = seeded_state(SimParams::default(), 99, 300);
    let dt = a.params().dt;

    for _ in 0..50 {
        a.step(dt);
        b.step(dt);
    }

    assert_eq!(a.particles(), b.particles());
}

#[test]
fn long_run_stays_finite_and_inside_the_domain() {
    let mut state = seeded_state(SimParams::default(), 7, 250);
    let dt = state.params().dt;
    let domain = state.params().domain;

    for _ in 0..SOAK_STEPS {
        state.step(dt);
    }

    for particle in state.particles() {
        assert!(particle.is_finite(), "non-finite particle: {:?}", particle);
        assert!(particle.position.x >= 0.0 && particle.position.x <= domain.x);
        assert!(particle.position.y >= 0.0 && particle.position.y <= domain.y);
    }
}

#[test]
#[should_panic(expected = "timestep must be positive")]
fn non_positive_dt_is_rejected() {
    let mut state = SimState::new(SimParams::default());
    state.step(0.0);
}
