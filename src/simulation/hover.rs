use crate::config::HOVER_BLEND_RATE;

/// Smoothed 0..1 blend between rest (0) and logo (1) attraction
#[derive(Clone, Copy, Debug)]
pub struct HoverBlend {
    value: f32,
    cursor_inside: bool,
    pinned: bool,
    rate: f32,
}

impl Default for HoverBlend {
    fn default() -> Self {
        Self::new(HOVER_BLEND_RATE)
    }
}

impl HoverBlend {
    pub fn new(rate: f32) -> Self {
        Self {
            value: 0.0,
            cursor_inside: false,
            pinned: false,
            rate,
        }
    }

    pub fn set_cursor_inside(&mut self, inside: bool) {
        self.cursor_inside = inside;
    }

    /// Toggle holding the logo formed regardless of cursor; returns new state
    pub fn toggle_pinned(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    pub fn target(&self) -> f32 {
        if self.cursor_inside || self.pinned {
            1.0
        } else {
            0.0
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Ease toward the target; frame-rate independent
    pub fn update(&mut self, dt: f32) -> f32 {
        let t = 1.0 - (-self.rate * dt.max(0.0)).exp();
        self.value += (self.target() - self.value) * t;
        self.value = self.value.clamp(0.0, 1.0);
        self.value
    }
}
