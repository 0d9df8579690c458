use bevy::prelude::*;

use crate::config::constants;
use crate::math::{Real, Vector};

/// External force field applied to every particle at the start of a step.
///
/// Evaluated at the simulation clock, never at wall-clock time, so identical
/// runs see identical forces.
#[derive(Clone, Copy, Debug)]
pub enum ForceField {
    /// Uniform constant acceleration (gravity).
    Constant(Vector),
    /// `base + amplitude * sin(angular_frequency * t)` — a slowly swaying
    /// field, useful for sloshing demos.
    Oscillating {
        base: Vector,
        amplitude: Vector,
        angular_frequency: Real,
    },
}

impl ForceField {
    #[inline]
    pub fn eval(&self, time: Real) -> Vector {
        match *self {
            ForceField::Constant(force) => force,
            ForceField::Oscillating {
                base,
                amplitude,
                angular_frequency,
            } => base + amplitude * (angular_frequency * time).sin(),
        }
    }
}

impl Default for ForceField {
    fn default() -> Self {
        ForceField::Constant(constants::GRAVITY)
    }
}

/// Runtime parameters for the viscoelastic solver.
#[derive(Resource, Clone, Debug)]
pub struct SimParams {
    /// Smoothing radius `h`: cutoff distance for the neighbor search and the
    /// spatial hash cell size.
    pub smoothing_radius: Real,

    /// Number of buckets in the spatial hash table. Prime values distribute
    /// better.
    pub bucket_count: usize,

    /// Far-field stiffness `k` scaling the `rho - rho0` pressure term.
    pub stiffness: Real,

    /// Near-field stiffness `k_near` scaling the anti-clustering term.
    pub near_stiffness: Real,

    /// Rest density `rho0`. Local densities above it produce repulsion.
    pub rest_density: Real,

    /// Fixed timestep. Decoupled from rendering frame time.
    pub dt: Real,

    /// Rectangular domain extent; positions are clamped to
    /// `[0, domain.x] x [0, domain.y]` every step.
    pub domain: Vector,

    /// External force field (gravity by default).
    pub force: ForceField,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            smoothing_radius: constants::SMOOTHING_RADIUS,
            bucket_count: constants::BUCKET_COUNT,
            stiffness: constants::STIFFNESS,
            near_stiffness: constants::NEAR_STIFFNESS,
            rest_density: constants::REST_DENSITY,
            dt: constants::TIMESTEP,
            domain: constants::DOMAIN,
            force: ForceField::default(),
        }
    }
}

impl SimParams {
    /// Set the smoothing radius (and hash cell size).
    pub fn with_smoothing_radius(mut self, h: Real) -> Self {
        self.smoothing_radius = h;
        self
    }

    /// Set both relaxation stiffness constants.
    pub fn with_stiffness(mut self, k: Real, k_near: Real) -> Self {
        self.stiffness = k;
        self.near_stiffness = k_near;
        self
    }

    pub fn with_rest_density(mut self, rho0: Real) -> Self {
        self.rest_density = rho0;
        self
    }

    pub fn with_dt(mut self, dt: Real) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_domain(mut self, domain: Vector) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_force(mut self, force: ForceField) -> Self {
        self.force = force;
        self
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Fail fast on parameter sets the solver cannot run with. Violations are
    /// programming errors, not runtime faults.
    pub fn validate(&self) {
        assert!(
            self.smoothing_radius > 0.0,
            "smoothing radius must be positive"
        );
        assert!(self.dt > 0.0, "timestep must be positive");
        assert!(self.bucket_count > 0, "bucket count must be positive");
        assert!(
            self.domain.x > 0.0 && self.domain.y > 0.0,
            "domain extent must be positive"
        );
    }
}
