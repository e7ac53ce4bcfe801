use std::path::Path;

use image::RgbaImage;

use crate::config::{ALPHA_THRESHOLD, BORDER_WEIGHT, FILL_WEIGHT, LOGO_EXTENT, SAMPLE_STRIDE};
use crate::error::LogoError;

/// Whether an opaque pixel sits on the logo outline or inside it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelClass {
    Fill,
    Border,
}

/// A sampled logo pixel, already in normalized device coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub position: [f32; 2],
    pub weight: f32,
    pub class: PixelClass,
}

/// Knobs for turning a bitmap into candidates
#[derive(Clone, Copy, Debug)]
pub struct SamplerSettings {
    /// Minimum alpha for a pixel to count as opaque
    pub alpha_threshold: u8,
    /// Sample every Nth pixel (0 is treated as 1)
    pub stride: u32,
    pub fill_weight: f32,
    pub border_weight: f32,
    /// Half-extent in NDC of the image's longest side
    pub extent: f32,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            alpha_threshold: ALPHA_THRESHOLD,
            stride: SAMPLE_STRIDE,
            fill_weight: FILL_WEIGHT,
            border_weight: BORDER_WEIGHT,
            extent: LOGO_EXTENT,
        }
    }
}

/// Result of sampling a logo
#[derive(Clone, Debug)]
pub struct LogoSample {
    pub candidates: Vec<Candidate>,
    /// NDC width of one stride cell, used to jitter mass points
    pub cell_size: f32,
    pub width: u32,
    pub height: u32,
}

impl LogoSample {
    pub fn border_count(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.class == PixelClass::Border)
            .count()
    }
}

/// Open and decode a logo file (PNG or JPEG)
pub fn load_logo<P: AsRef<Path>>(path: P) -> Result<RgbaImage, LogoError> {
    let img = image::open(path)?;
    Ok(img.to_rgba8())
}

/// Decode a logo held in memory
pub fn decode_logo(bytes: &[u8]) -> Result<RgbaImage, LogoError> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}

/// Classify opaque pixels and emit weighted candidates in NDC
pub fn sample_logo(image: &RgbaImage, settings: &SamplerSettings) -> Result<LogoSample, LogoError> {
    let (width, height) = image.dimensions();
    let stride = settings.stride.max(1);

    let opaque = |x: i64, y: i64| -> bool {
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            return false;
        }
        image.get_pixel(x as u32, y as u32)[3] >= settings.alpha_threshold
    };

    // Longest side spans [-extent, extent], centred, +y up
    let longest = width.max(height).max(1) as f32;
    let scale = 2.0 * settings.extent / longest;
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;

    let mut candidates = Vec::new();
    for y in (0..height).step_by(stride as usize) {
        for x in (0..width).step_by(stride as usize) {
            let (xi, yi) = (x as i64, y as i64);
            if !opaque(xi, yi) {
                continue;
            }

            let border = !opaque(xi - 1, yi)
                || !opaque(xi + 1, yi)
                || !opaque(xi, yi - 1)
                || !opaque(xi, yi + 1);

            let (class, weight) = if border {
                (PixelClass::Border, settings.border_weight)
            } else {
                (PixelClass::Fill, settings.fill_weight)
            };

            candidates.push(Candidate {
                position: [
                    (x as f32 + 0.5 - half_w) * scale,
                    (half_h - (y as f32 + 0.5)) * scale,
                ],
                weight,
                class,
            });
        }
    }

    if candidates.is_empty() {
        return Err(LogoError::EmptyMask {
            threshold: settings.alpha_threshold,
        });
    }

    Ok(LogoSample {
        candidates,
        cell_size: scale * stride as f32,
        width,
        height,
    })
}
