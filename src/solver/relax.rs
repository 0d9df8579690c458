//! Double density relaxation
//!
//! The pressure-like position correction at the heart of the method. Two
//! density estimates are taken per particle — a far-field `rho` and an
//! anti-clustering `rho_near` — and converted into displacements applied
//! directly to positions. Velocity never appears here; the reconstruction
//! stage picks the correction up from the moved positions.

use crate::config::SimParams;
use crate::core::{Particle, SpatialHash};
use crate::math::{Real, inv_exact, zero_vector};

/// One Gauss-Seidel relaxation pass over all particles, in index order.
///
/// The hash is rebuilt once from post-advection positions; bucket membership
/// stays frozen for the whole pass while the distance filter reads live
/// positions. Each particle's update therefore sees the displacements its
/// predecessors applied this same step. The processing order shapes the
/// exact trajectory; tests rely on it being the arena's index order.
pub fn double_density_relaxation(
    hash: &mut SpatialHash,
    particles: &mut [Particle],
    params: &SimParams,
    dt: Real,
    neighbors: &mut Vec<usize>,
) {
    if particles.is_empty() {
        return;
    }

    let h = params.smoothing_radius;
    hash.rebuild(particles);

    for index in 0..particles.len() {
        hash.neighbors_into(index, particles, neighbors);

        let origin = particles[index].position;

        // Far and near density over neighbors strictly inside the support
        // radius. The hash already filters at < h, but displaced candidates
        // may have drifted onto the boundary since the gather.
        let mut rho = 0.0;
        let mut rho_near = 0.0;
        for &neighbor in neighbors.iter() {
            let q = origin.distance(particles[neighbor].position) / h;
            if q < 1.0 {
                let one_minus_q = 1.0 - q;
                rho += one_minus_q * one_minus_q;
                rho_near += one_minus_q * one_minus_q * one_minus_q;
            }
        }

        let pressure = params.stiffness * (rho - params.rest_density);
        let pressure_near = params.near_stiffness * rho_near;

        // Push neighbors out along the connecting line, collecting the
        // equal-and-opposite share for this particle.
        let mut displacement = zero_vector();
        for &neighbor in neighbors.iter() {
            let toward = particles[neighbor].position - origin;
            let distance = toward.length();
            let q = distance / h;
            if q >= 1.0 {
                continue;
            }

            let one_minus_q = 1.0 - q;
            let magnitude =
                0.5 * dt * dt * (pressure * one_minus_q + pressure_near * one_minus_q * one_minus_q);
            // Coincident pair: density counts, but there is no direction to
            // push along.
            let push = toward * inv_exact(distance) * magnitude;

            particles[neighbor].position += push;
            displacement -= push;
        }

        particles[index].position += displacement;
    }
}
