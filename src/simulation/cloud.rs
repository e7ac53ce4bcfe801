use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::f32::consts::TAU;

use crate::config::{MASS_JITTER, SCATTER_MAX_RADIUS, SCATTER_MIN_RADIUS};
use crate::error::LogoError;
use crate::logo::LogoSample;
use crate::simulation::particle::GpuParticle;

/// How far rest points scatter from their mass points
#[derive(Clone, Copy, Debug)]
pub struct ScatterSettings {
    pub min_radius: f32,
    pub max_radius: f32,
    /// Fraction of a sample cell each mass point may be nudged by
    pub jitter: f32,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            min_radius: SCATTER_MIN_RADIUS,
            max_radius: SCATTER_MAX_RADIUS,
            jitter: MASS_JITTER,
        }
    }
}

/// Initial particle state plus the static mass and rest points.
///
/// All three arrays always have the same length.
pub struct ParticleCloud {
    pub particles: Vec<GpuParticle>,
    pub masses: Vec<[f32; 2]>,
    pub rests: Vec<[f32; 2]>,
}

impl ParticleCloud {
    /// Pick `count` mass points from the weighted candidates and scatter a
    /// rest point around each one. Particles start at rest.
    pub fn from_sample<R: Rng + ?Sized>(
        sample: &LogoSample,
        count: u32,
        scatter: &ScatterSettings,
        rng: &mut R,
    ) -> Result<Self, LogoError> {
        if count == 0 {
            return Err(LogoError::NoParticles);
        }
        if sample.candidates.is_empty() {
            return Err(LogoError::EmptyMask { threshold: 0 });
        }

        let picker = WeightedIndex::new(sample.candidates.iter().map(|c| c.weight))?;
        let half_jitter = scatter.jitter * sample.cell_size * 0.5;
        let (min_r, max_r) = if scatter.min_radius <= scatter.max_radius {
            (scatter.min_radius, scatter.max_radius)
        } else {
            (scatter.max_radius, scatter.min_radius)
        };

        let count = count as usize;
        let mut masses = Vec::with_capacity(count);
        let mut rests = Vec::with_capacity(count);

        for _ in 0..count {
            let candidate = &sample.candidates[picker.sample(rng)];

            let mass = if half_jitter > 0.0 {
                [
                    candidate.position[0] + rng.gen_range(-half_jitter..=half_jitter),
                    candidate.position[1] + rng.gen_range(-half_jitter..=half_jitter),
                ]
            } else {
                candidate.position
            };

            let angle = rng.gen_range(0.0..TAU);
            let radius = rng.gen_range(min_r..=max_r);
            let rest = [
                mass[0] + angle.cos() * radius,
                mass[1] + angle.sin() * radius,
            ];

            masses.push(mass);
            rests.push(rest);
        }

        let particles = rests.iter().copied().map(GpuParticle::at_rest).collect();

        Ok(Self {
            particles,
            masses,
            rests,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
}
