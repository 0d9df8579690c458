use bevy::prelude::*;
use rand::Rng;

use crate::config::SimParams;
use crate::core::particle::Particle;
use crate::core::particle_set::ParticleSet;
use crate::core::sampling;
use crate::core::spatial_hash::SpatialHash;
use crate::math::{Real, Vector};

/// Aggregate simulation state for the solver.
///
/// Owns the particle arena, the step-scoped spatial hash, the parameters and
/// the simulation clock. The driver mutates it once per frame through
/// [`SimState::step`].
#[derive(Resource)]
pub struct SimState {
    particle_set: ParticleSet,
    hash: SpatialHash,
    params: SimParams,
    time: Real,
    neighbor_scratch: Vec<usize>,
}

impl SimState {
    pub fn new(params: SimParams) -> Self {
        params.validate();
        let hash = SpatialHash::new(params.smoothing_radius, params.bucket_count);
        Self {
            particle_set: ParticleSet::new(),
            hash,
            params,
            time: 0.0,
            neighbor_scratch: Vec::new(),
        }
    }

    pub fn particle_set(&self) -> &ParticleSet {
        &self.particle_set
    }

    pub fn particle_set_mut(&mut self) -> &mut ParticleSet {
        &mut self.particle_set
    }

    pub fn particles(&self) -> &[Particle] {
        self.particle_set.particles()
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.particle_set.particles_mut()
    }

    pub fn particle_count(&self) -> usize {
        self.particle_set.len()
    }

    pub fn add_particle(&mut self, particle: Particle) -> usize {
        self.particle_set.push(particle)
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Replace the parameter set. Recreates the hash table, since the cell
    /// size and bucket count shape it.
    pub fn set_params(&mut self, params: SimParams) {
        params.validate();
        self.hash = SpatialHash::new(params.smoothing_radius, params.bucket_count);
        self.params = params;
    }

    /// Simulation clock: the accumulated sum of step timesteps.
    pub fn time(&self) -> Real {
        self.time
    }

    pub fn spatial_hash(&self) -> &SpatialHash {
        &self.hash
    }

    /// Seed `count` at-rest particles uniformly across a disc.
    pub fn seed_disc<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        center: Vector,
        radius: Real,
    ) {
        let batch = sampling::seed_disc(rng, count, center, radius);
        self.particle_set.insert_batch(batch);
        info!(
            "seeded {} particles in a disc of radius {} around {:?}",
            count, radius, center
        );
    }

    /// Advance the simulation by one fixed timestep, mutating positions and
    /// velocities in place.
    pub fn step(&mut self, dt: Real) {
        crate::solver::step(self, dt);
    }

    /// Disjoint borrows for the relaxation stage: the hash is rebuilt once
    /// and then read while particle positions are displaced through the
    /// arena, with a reusable scratch list for neighbor indices.
    pub(crate) fn relaxation_parts(
        &mut self,
    ) -> (&mut SpatialHash, &mut ParticleSet, &SimParams, &mut Vec<usize>) {
        (
            &mut self.hash,
            &mut self.particle_set,
            &self.params,
            &mut self.neighbor_scratch,
        )
    }

    pub(crate) fn advance_clock(&mut self, dt: Real) {
        self.time += dt;
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(SimParams::default())
    }
}

/// Per-frame driver system: one fixed-`dt` step, decoupled from frame time.
pub fn step_simulation(mut state: ResMut<SimState>) {
    let dt = state.params().dt;
    state.step(dt);
}
