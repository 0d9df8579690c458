use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::{ForceField, SimParams};
pub use crate::core::{Particle, ParticleSet, SimState, SpatialHash};
pub use crate::math::{Real, Vector};

use crate::core::step_simulation;

/// Drives one fixed-timestep simulation step per frame. The timestep comes
/// from [`SimParams`], never from frame delta time, so simulation behavior
/// is independent of rendering frame rate.
pub struct ViscoPlugin;

impl Plugin for ViscoPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimState::new(SimParams::default()))
            .add_systems(Update, step_simulation);
    }
}
