// Default tunables for the viscoelastic solver.
//
// The reference material disagrees with itself on most of these numbers, so
// none of them are authoritative. Anything here can be overridden through
// `SimParams`.
use crate::math::{Real, Vector};

// Global physics
pub const GRAVITY: Vector = Vector::new(0.0, -9.8);

// Neighborhood and stepping
pub const SMOOTHING_RADIUS: Real = 0.1;
pub const TIMESTEP: Real = 0.01;

// Double density relaxation stiffness and rest density
pub const STIFFNESS: Real = 30.0;
pub const NEAR_STIFFNESS: Real = 120.0;
pub const REST_DENSITY: Real = 10.0;

// Spatial hash table size. Prime, for distribution.
pub const BUCKET_COUNT: usize = 4093;

// Simulation domain extent, in simulation units
pub const DOMAIN: Vector = Vector::new(40.0, 30.0);
