use crate::config::{
    BASE_COLOR, DAMPING, EDGE_STIFFNESS, FAST_COLOR, MAX_SPEED, POINT_SIZE, RELAX_STRENGTH,
    REPULSION_RADIUS, REPULSION_STRENGTH, SPEED_TINT, SPRING_STRENGTH, WIGGLE_FREQUENCY,
    WIGGLE_STRENGTH,
};

/// Simulation parameters passed to the compute shader (64 bytes, 4 rows of 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SimParams {
    // Frame state (16 bytes)
    pub dt: f32,
    pub hover: f32,
    pub time: f32,
    pub aspect: f32,

    // Attraction and repulsion (16 bytes)
    pub spring_strength: f32,
    pub damping: f32,
    pub repulsion_strength: f32,
    pub repulsion_radius: f32,

    // Relaxation and motion (16 bytes)
    pub relax_strength: f32,
    pub wiggle_strength: f32,
    pub wiggle_frequency: f32,
    pub max_speed: f32,

    // Containment and count (16 bytes)
    pub edge_stiffness: f32,
    pub particle_count: u32,
    pub _padding: [u32; 2],
}

/// Render parameters passed to the particle shader (48 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    pub aspect: f32,
    pub point_size: f32,
    /// Speed at which FAST_COLOR fully replaces BASE_COLOR
    pub speed_tint: f32,
    pub _padding: f32,

    pub base_color: [f32; 4],
    pub fast_color: [f32; 4],
}

impl RenderParams {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            point_size: POINT_SIZE,
            speed_tint: SPEED_TINT,
            _padding: 0.0,
            base_color: BASE_COLOR,
            fast_color: FAST_COLOR,
        }
    }
}

/// Per-frame values that are not user-tunable
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameUniforms {
    pub dt: f32,
    pub hover: f32,
    pub time: f32,
    pub aspect: f32,
}

/// Force constants adjustable at runtime
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceParams {
    pub spring_strength: f32,
    pub damping: f32,
    pub repulsion_strength: f32,
    pub repulsion_radius: f32,
    pub relax_strength: f32,
    pub wiggle_strength: f32,
    pub wiggle_frequency: f32,
    pub max_speed: f32,
    pub edge_stiffness: f32,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            spring_strength: SPRING_STRENGTH,
            damping: DAMPING,
            repulsion_strength: REPULSION_STRENGTH,
            repulsion_radius: REPULSION_RADIUS,
            relax_strength: RELAX_STRENGTH,
            wiggle_strength: WIGGLE_STRENGTH,
            wiggle_frequency: WIGGLE_FREQUENCY,
            max_speed: MAX_SPEED,
            edge_stiffness: EDGE_STIFFNESS,
        }
    }
}

/// A force constant selectable from the keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tunable {
    Spring,
    Damping,
    Repulsion,
    RepulsionRadius,
    Relax,
    Wiggle,
    WiggleFrequency,
    MaxSpeed,
    EdgeStiffness,
}

impl Tunable {
    pub const ALL: [Tunable; 9] = [
        Tunable::Spring,
        Tunable::Damping,
        Tunable::Repulsion,
        Tunable::RepulsionRadius,
        Tunable::Relax,
        Tunable::Wiggle,
        Tunable::WiggleFrequency,
        Tunable::MaxSpeed,
        Tunable::EdgeStiffness,
    ];

    /// The next tunable, wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Tunable::Spring => "spring strength",
            Tunable::Damping => "damping",
            Tunable::Repulsion => "repulsion strength",
            Tunable::RepulsionRadius => "repulsion radius",
            Tunable::Relax => "relax strength",
            Tunable::Wiggle => "wiggle strength",
            Tunable::WiggleFrequency => "wiggle frequency",
            Tunable::MaxSpeed => "max speed",
            Tunable::EdgeStiffness => "edge stiffness",
        }
    }
}

impl ForceParams {
    pub fn get(&self, tunable: Tunable) -> f32 {
        match tunable {
            Tunable::Spring => self.spring_strength,
            Tunable::Damping => self.damping,
            Tunable::Repulsion => self.repulsion_strength,
            Tunable::RepulsionRadius => self.repulsion_radius,
            Tunable::Relax => self.relax_strength,
            Tunable::Wiggle => self.wiggle_strength,
            Tunable::WiggleFrequency => self.wiggle_frequency,
            Tunable::MaxSpeed => self.max_speed,
            Tunable::EdgeStiffness => self.edge_stiffness,
        }
    }

    /// Multiply one constant by `factor`, returning the new value
    pub fn scale(&mut self, tunable: Tunable, factor: f32) -> f32 {
        let slot = match tunable {
            Tunable::Spring => &mut self.spring_strength,
            Tunable::Damping => &mut self.damping,
            Tunable::Repulsion => &mut self.repulsion_strength,
            Tunable::RepulsionRadius => &mut self.repulsion_radius,
            Tunable::Relax => &mut self.relax_strength,
            Tunable::Wiggle => &mut self.wiggle_strength,
            Tunable::WiggleFrequency => &mut self.wiggle_frequency,
            Tunable::MaxSpeed => &mut self.max_speed,
            Tunable::EdgeStiffness => &mut self.edge_stiffness,
        };
        *slot *= factor;
        *slot
    }

    /// Pack the constants together with this frame's state
    pub fn uniforms(&self, frame: FrameUniforms, particle_count: u32) -> SimParams {
        SimParams {
            dt: frame.dt,
            hover: frame.hover.clamp(0.0, 1.0),
            time: frame.time,
            aspect: frame.aspect,
            spring_strength: self.spring_strength,
            damping: self.damping,
            repulsion_strength: self.repulsion_strength,
            repulsion_radius: self.repulsion_radius,
            relax_strength: self.relax_strength,
            wiggle_strength: self.wiggle_strength,
            wiggle_frequency: self.wiggle_frequency,
            max_speed: self.max_speed,
            edge_stiffness: self.edge_stiffness,
            particle_count,
            _padding: [0, 0],
        }
    }
}
