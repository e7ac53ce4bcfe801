//! CPU mirror of `shaders/compute.wgsl`, used to check the force terms
//! without a GPU. Keep the two in step: `test_kernel_source_matches_mirror`
//! pins every statement of the kernel this file reproduces.

use std::f32::consts::TAU;

use crate::simulation::params::SimParams;
use crate::simulation::particle::GpuParticle;

/// PCG hash, identical to the shader's
pub fn pcg_hash(input: u32) -> u32 {
    let state = input.wrapping_mul(747796405).wrapping_add(2891336453);
    let word = ((state >> ((state >> 28).wrapping_add(4))) ^ state).wrapping_mul(277803737);
    (word >> 22) ^ word
}

fn view_bound(aspect: f32) -> [f32; 2] {
    [aspect.max(1.0), (1.0 / aspect).max(1.0)]
}

/// One simulation step: read `input`, return the next state
pub fn step(
    input: &[GpuParticle],
    masses: &[[f32; 2]],
    rests: &[[f32; 2]],
    params: &SimParams,
) -> Vec<GpuParticle> {
    let count = params.particle_count as usize;
    let bound = view_bound(params.aspect);

    input
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, p)| {
            let [px, py] = p.position;
            let [vx, vy] = p.velocity;
            let mut f = [0.0f32; 2];

            for axis in 0..2 {
                f[axis] += params.hover * params.spring_strength * (masses[i][axis] - p.position[axis]);
                f[axis] += (1.0 - params.hover) * params.relax_strength * (rests[i][axis] - p.position[axis]);
                f[axis] -= params.damping * p.velocity[axis];
            }

            let radius = params.repulsion_radius;
            for (j, other) in input.iter().take(count).enumerate() {
                if j == i {
                    continue;
                }
                let dx = px - other.position[0];
                let dy = py - other.position[1];
                let d = (dx * dx + dy * dy).sqrt();
                if d > 0.0 && d < radius {
                    let k = params.repulsion_strength * (1.0 - d / radius) / d;
                    f[0] += k * dx;
                    f[1] += k * dy;
                }
            }

            let phase = pcg_hash(i as u32) as f32 / u32::MAX as f32 * TAU;
            let w = params.time * params.wiggle_frequency + phase;
            f[0] += params.wiggle_strength * w.sin();
            f[1] += params.wiggle_strength * (w * 1.3).cos();

            for axis in 0..2 {
                let pos = p.position[axis];
                let overflow = (pos.abs() - bound[axis]).max(0.0);
                let sign = if pos > 0.0 {
                    1.0
                } else if pos < 0.0 {
                    -1.0
                } else {
                    0.0
                };
                f[axis] -= params.edge_stiffness * sign * overflow;
            }

            let mut v = [vx + f[0] * params.dt, vy + f[1] * params.dt];
            let speed = (v[0] * v[0] + v[1] * v[1]).sqrt();
            if speed > params.max_speed {
                let s = params.max_speed / speed;
                v = [v[0] * s, v[1] * s];
            }

            GpuParticle {
                position: [px + v[0] * params.dt, py + v[1] * params.dt],
                velocity: v,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::{ForceParams, FrameUniforms};

    /// Forces with wiggle, repulsion and edges switched off
    fn quiet_forces() -> ForceParams {
        ForceParams {
            wiggle_strength: 0.0,
            repulsion_strength: 0.0,
            edge_stiffness: 0.0,
            ..Default::default()
        }
    }

    fn params(forces: &ForceParams, hover: f32, count: u32) -> SimParams {
        forces.uniforms(
            FrameUniforms {
                dt: 1.0 / 60.0,
                hover,
                time: 0.0,
                aspect: 1.0,
            },
            count,
        )
    }

    fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    }

    fn run(
        mut particles: Vec<GpuParticle>,
        masses: &[[f32; 2]],
        rests: &[[f32; 2]],
        params: &SimParams,
        frames: usize,
    ) -> Vec<GpuParticle> {
        for _ in 0..frames {
            particles = step(&particles, masses, rests, params);
        }
        particles
    }

    #[test]
    fn test_pcg_hash_spreads_indices() {
        let hashes: std::collections::HashSet<u32> = (0..1000).map(pcg_hash).collect();
        assert_eq!(hashes.len(), 1000);
    }

    #[test]
    fn test_hovered_particles_settle_on_mass() {
        let mass = [0.3, -0.2];
        let rest = [-0.4, 0.5];
        let start = vec![GpuParticle::at_rest(rest)];
        let p = params(&quiet_forces(), 1.0, 1);

        let end = run(start, &[mass], &[rest], &p, 600);
        assert!(dist(end[0].position, mass) < 1e-3, "ended at {:?}", end[0].position);
    }

    #[test]
    fn test_unhovered_particles_relax_to_rest() {
        let mass = [0.3, -0.2];
        let rest = [-0.4, 0.5];
        let start = vec![GpuParticle::at_rest(mass)];
        let p = params(&quiet_forces(), 0.0, 1);

        let end = run(start, &[mass], &[rest], &p, 900);
        assert!(dist(end[0].position, rest) < 1e-3, "ended at {:?}", end[0].position);
    }

    #[test]
    fn test_damping_bleeds_velocity() {
        let forces = ForceParams {
            spring_strength: 0.0,
            relax_strength: 0.0,
            ..quiet_forces()
        };
        let p = params(&forces, 0.0, 1);
        let start = vec![GpuParticle {
            position: [0.0, 0.0],
            velocity: [1.0, 0.0],
        }];
        let next = step(&start, &[[0.0, 0.0]], &[[0.0, 0.0]], &p);
        assert!(next[0].velocity[0] < 1.0 && next[0].velocity[0] > 0.0);
        assert_eq!(next[0].velocity[1], 0.0);
    }

    #[test]
    fn test_close_neighbors_repel() {
        let forces = ForceParams {
            spring_strength: 0.0,
            relax_strength: 0.0,
            repulsion_strength: 2.0,
            repulsion_radius: 0.05,
            ..quiet_forces()
        };
        let p = params(&forces, 0.0, 2);
        let start = vec![
            GpuParticle::at_rest([-0.01, 0.0]),
            GpuParticle::at_rest([0.01, 0.0]),
        ];
        let zero = [[0.0, 0.0]; 2];
        let next = step(&start, &zero, &zero, &p);
        assert!(next[0].velocity[0] < 0.0);
        assert!(next[1].velocity[0] > 0.0);
        assert!(dist(next[0].position, next[1].position) > 0.02);
    }

    #[test]
    fn test_distant_neighbors_ignored() {
        let forces = ForceParams {
            spring_strength: 0.0,
            relax_strength: 0.0,
            repulsion_strength: 2.0,
            repulsion_radius: 0.05,
            ..quiet_forces()
        };
        let p = params(&forces, 0.0, 2);
        let start = vec![
            GpuParticle::at_rest([-0.5, 0.0]),
            GpuParticle::at_rest([0.5, 0.0]),
        ];
        let zero = [[0.0, 0.0]; 2];
        let next = step(&start, &zero, &zero, &p);
        assert_eq!(next, start);
    }

    #[test]
    fn test_coincident_particles_do_not_produce_nan() {
        let forces = ForceParams {
            repulsion_strength: 2.0,
            ..quiet_forces()
        };
        let p = params(&forces, 0.5, 2);
        let start = vec![GpuParticle::at_rest([0.1, 0.1]); 2];
        let zero = [[0.0, 0.0]; 2];
        let next = step(&start, &zero, &zero, &p);
        assert!(next.iter().all(|q| q.position[0].is_finite() && q.velocity[0].is_finite()));
    }

    #[test]
    fn test_speed_is_clamped() {
        let forces = ForceParams {
            max_speed: 0.5,
            damping: 0.0,
            ..quiet_forces()
        };
        let p = params(&forces, 0.0, 1);
        let start = vec![GpuParticle {
            position: [0.0, 0.0],
            velocity: [10.0, 0.0],
        }];
        let next = step(&start, &[[0.0, 0.0]], &[[0.0, 0.0]], &p);
        let speed = dist(next[0].velocity, [0.0, 0.0]);
        assert!((speed - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_wiggle_moves_idle_particles() {
        let forces = ForceParams {
            wiggle_strength: 1.0,
            ..quiet_forces()
        };
        let p = params(&forces, 0.0, 1);
        let start = vec![GpuParticle::at_rest([0.0, 0.0])];
        let next = step(&start, &[[0.0, 0.0]], &[[0.0, 0.0]], &p);
        assert!(dist(next[0].velocity, [0.0, 0.0]) > 0.0);
    }

    #[test]
    fn test_edges_push_back_on_screen() {
        let forces = ForceParams {
            edge_stiffness: 50.0,
            spring_strength: 0.0,
            relax_strength: 0.0,
            ..quiet_forces()
        };
        // Wide surface: x bound is 2.0, y bound is 1.0
        let mut p = params(&forces, 0.0, 1);
        p.aspect = 2.0;

        let inside = vec![GpuParticle::at_rest([1.5, 0.0])];
        let next = step(&inside, &[[0.0, 0.0]], &[[0.0, 0.0]], &p);
        assert_eq!(next[0].velocity, [0.0, 0.0]);

        let outside = vec![GpuParticle::at_rest([0.0, -1.5])];
        let next = step(&outside, &[[0.0, 0.0]], &[[0.0, 0.0]], &p);
        assert!(next[0].velocity[1] > 0.0);
    }

    #[test]
    fn test_respects_particle_count() {
        let p = params(&quiet_forces(), 0.0, 1);
        let start = vec![GpuParticle::default(); 3];
        let zero = [[0.0, 0.0]; 3];
        assert_eq!(step(&start, &zero, &zero, &p).len(), 1);
    }

    /// Kernel statements reproduced by `step`. Editing one of these in the
    /// shader without updating this mirror fails the test below.
    const KERNEL_STATEMENTS: [&str; 14] = [
        "var force = vec2<f32>(0.0, 0.0);",
        "force += params.hover * params.spring_strength * (masses[i] - p.position);",
        "force += (1.0 - params.hover) * params.relax_strength * (rests[i] - p.position);",
        "force -= params.damping * p.velocity;",
        "let radius = params.repulsion_radius;",
        "let delta = p.position - particles_in[j].position;",
        "if (d > 0.0 && d < radius) {",
        "force += params.repulsion_strength * (1.0 - d / radius) * (delta / d);",
        "let phase = f32(pcg_hash(i)) / 4294967295.0 * TAU;",
        "let w = params.time * params.wiggle_frequency + phase;",
        "force += params.wiggle_strength * vec2<f32>(sin(w), cos(w * 1.3));",
        "force -= params.edge_stiffness * sign(p.position) * overflow;",
        "var velocity = p.velocity + force * params.dt;",
        "particles_out[i] = Particle(p.position + velocity * params.dt, velocity);",
    ];

    #[test]
    fn test_kernel_source_matches_mirror() {
        let lines: Vec<String> = include_str!("../shaders/compute.wgsl")
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .collect();

        for statement in KERNEL_STATEMENTS {
            assert!(
                lines.iter().any(|line| line == statement),
                "compute.wgsl no longer contains `{}`",
                statement
            );
        }

        // Spring, relax, damping, repulsion, wiggle, edge: no term added unmirrored
        let force_terms = lines
            .iter()
            .filter(|line| line.starts_with("force +=") || line.starts_with("force -="))
            .count();
        assert_eq!(force_terms, 6);
    }
}
