//! Spatial hashing for neighbor search
//!
//! Particles are bucketed by their quantized grid cell through a fixed-size
//! hash table, rebuilt every step from current positions. Bucket lookup is a
//! coarse pre-filter: distinct cells may collide in one bucket, and the 3x3
//! ring query corrects for that with an exact distance test.

use bevy::math::IVec2;
use bevy::prelude::*;

use crate::core::Particle;
use crate::math::{Real, Vector};

// Primes from the classic collision-detection hash. The third mixes the z
// coordinate, which is fixed at zero in 2D.
const P1: i64 = 73856093;
const P2: i64 = 19349663;
const P3: i64 = 83492791;

const NEIGHBOR_OFFSETS: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Quantize a position to its containing cell, `floor(v / cell_size)` per
/// component. Floor, not truncation: transiently negative coordinates must
/// land in the more negative cell.
#[inline]
pub fn cell_of(position: Vector, cell_size: Real) -> IVec2 {
    IVec2::new(
        (position.x / cell_size).floor() as i32,
        (position.y / cell_size).floor() as i32,
    )
}

pub struct SpatialHash {
    cell_size: Real,
    buckets: Vec<Vec<usize>>,
}

impl SpatialHash {
    pub fn new(cell_size: Real, bucket_count: usize) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        assert!(bucket_count > 0, "bucket count must be positive");
        Self {
            cell_size,
            buckets: vec![Vec::new(); bucket_count],
        }
    }

    pub fn cell_size(&self) -> Real {
        self.cell_size
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn bucket_of_cell(&self, cell: IVec2) -> usize {
        let hashed = (cell.x as i64).wrapping_mul(P1)
            ^ (cell.y as i64).wrapping_mul(P2)
            ^ 0i64.wrapping_mul(P3);
        hashed.unsigned_abs() as usize % self.buckets.len()
    }

    #[inline]
    pub fn bucket_of(&self, position: Vector) -> usize {
        self.bucket_of_cell(cell_of(position, self.cell_size))
    }

    /// Clear every bucket, keeping allocations, and re-insert all particles
    /// by their current position.
    pub fn rebuild(&mut self, particles: &[Particle]) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }

        let mut occupied = 0usize;
        for (index, particle) in particles.iter().enumerate() {
            let bucket_index = self.bucket_of(particle.position);
            let bucket = &mut self.buckets[bucket_index];
            if bucket.is_empty() {
                occupied += 1;
            }
            bucket.push(index);
        }

        debug!(
            "spatial hash rebuilt: {} particles in {} of {} buckets",
            particles.len(),
            occupied,
            self.buckets.len()
        );
    }

    /// Collect the neighbors of `particles[index]`: every other particle
    /// strictly within `cell_size` of it, gathered from the 3x3 ring of
    /// cells around its own. Appends indices into `out` without allocating.
    ///
    /// The bucket union deduplicates hash collisions inside the ring, and
    /// the distance filter reads live positions, so callers may displace
    /// particles between queries.
    pub fn neighbors_into(&self, index: usize, particles: &[Particle], out: &mut Vec<usize>) {
        out.clear();

        let center = particles[index].position;
        let cell = cell_of(center, self.cell_size);

        let mut ring = [0usize; NEIGHBOR_OFFSETS.len()];
        for (slot, (dx, dy)) in ring.iter_mut().zip(NEIGHBOR_OFFSETS.iter()) {
            *slot = self.bucket_of_cell(IVec2::new(cell.x + dx, cell.y + dy));
        }
        ring.sort_unstable();

        let mut previous = usize::MAX;
        for &bucket in &ring {
            if bucket == previous {
                continue;
            }
            previous = bucket;

            for &candidate in &self.buckets[bucket] {
                if candidate == index {
                    continue;
                }
                if center.distance(particles[candidate].position) < self.cell_size {
                    out.push(candidate);
                }
            }
        }
    }

    /// Allocating form of [`Self::neighbors_into`].
    pub fn neighbors(&self, index: usize, particles: &[Particle]) -> Vec<usize> {
        let mut out = Vec::new();
        self.neighbors_into(index, particles, &mut out);
        out
    }
}
