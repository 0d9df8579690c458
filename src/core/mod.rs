pub mod particle;
pub mod particle_set;
pub mod sampling;
pub mod sim_state;
pub mod spatial_hash;

pub use particle::Particle;
pub use particle_set::ParticleSet;
pub use sampling::{sample_disc, seed_disc};
pub use sim_state::{SimState, step_simulation};
pub use spatial_hash::{SpatialHash, cell_of};
