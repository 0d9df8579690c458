use crate::core::Particle;
use crate::math::Vector;

/// Dense, index-stable particle arena.
///
/// A particle's identity is its slot index for the lifetime of a run; the
/// solver stores neighbor lists as indices into this arena so relaxation
/// writes stay visible to later particles within the same step.
#[derive(Clone, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    // Pre-advection positions, refilled each step for velocity reconstruction.
    prev_positions: Vec<Vector>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            prev_positions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            prev_positions: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn insert(&mut self, particle: Particle) -> usize {
        let index = self.particles.len();
        self.particles.push(particle);
        index
    }

    pub fn insert_batch(&mut self, mut batch: Vec<Particle>) {
        self.particles.append(&mut batch);
    }

    pub fn push(&mut self, particle: Particle) -> usize {
        self.insert(particle)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.prev_positions.clear();
    }

    /// Copy every current position into the reusable snapshot buffer. Taken
    /// before advection; velocity reconstruction divides the net
    /// displacement since this snapshot by `dt`.
    pub fn snapshot_positions(&mut self) {
        self.prev_positions.clear();
        self.prev_positions
            .extend(self.particles.iter().map(|particle| particle.position));
    }

    pub fn prev_positions(&self) -> &[Vector] {
        &self.prev_positions
    }

    pub fn particles_mut_and_prev(&mut self) -> (&mut [Particle], &[Vector]) {
        (&mut self.particles, &self.prev_positions)
    }
}
