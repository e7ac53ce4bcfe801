use image::{Rgba, RgbaImage};

const INK: Rgba<u8> = Rgba([255, 255, 255, 255]);
const PAPER: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw the fallback logo: a ring crossed by a horizontal bar.
///
/// Used when no logo path is supplied on the command line.
pub fn builtin_logo(size: u32) -> RgbaImage {
    let size = size.max(8);
    let centre = size as f32 / 2.0;
    let outer = size as f32 * 0.45;
    let inner = size as f32 * 0.32;
    let bar_half_height = size as f32 * 0.06;
    let bar_half_width = size as f32 * 0.38;

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - centre;
        let dy = y as f32 + 0.5 - centre;
        let r = (dx * dx + dy * dy).sqrt();

        let ring = r <= outer && r >= inner;
        let bar = dx.abs() <= bar_half_width && dy.abs() <= bar_half_height;

        if ring || bar {
            INK
        } else {
            PAPER
        }
    })
}
