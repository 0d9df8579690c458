//! Initial particle placement
//!
//! Rejection sampling of uniform points in a disc, used to seed a run.

use rand::Rng;

use crate::core::Particle;
use crate::math::{Real, Vector};

/// Uniform random point in the disc of the given center and radius.
///
/// Draws in `[-1, 1]^2` until the draw lands inside the unit circle, then
/// scales and offsets. Expected draws per sample: 4 / pi.
pub fn sample_disc<R: Rng + ?Sized>(rng: &mut R, center: Vector, radius: Real) -> Vector {
    loop {
        let x: Real = rng.random_range(-1.0..=1.0);
        let y: Real = rng.random_range(-1.0..=1.0);
        if x * x + y * y < 1.0 {
            return center + Vector::new(x, y) * radius;
        }
    }
}

/// Seed `count` at-rest particles uniformly across a disc.
pub fn seed_disc<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    center: Vector,
    radius: Real,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::at_rest(sample_disc(rng, center, radius)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_inside_the_disc() {
        let mut rng = StdRng::seed_from_u64(7);
        let center = Vector::new(10.0, 10.0);
        let radius = 1.0;

        for _ in 0..1000 {
            let point = sample_disc(&mut rng, center, radius);
            assert!(point.distance(center) < radius);
        }
    }

    #[test]
    fn seeded_particles_start_at_rest() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = seed_disc(&mut rng, 64, Vector::new(5.0, 5.0), 2.0);

        assert_eq!(particles.len(), 64);
        for particle in &particles {
            assert_eq!(particle.velocity, Vector::ZERO);
        }
    }
}
