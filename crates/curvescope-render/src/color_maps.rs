//! Color mapping for deviation values.
//!
//! One viridis-style ramp covers everything this subsystem colors: surface
//! vertices by normalized deviation, and the 1D lookup texture bound to
//! contour-level materials.

use glam::{Vec3, Vec4};

use crate::handle::{Texture, TextureHandle};

/// Viridis control points, evenly spaced from 0 to 1.
const VIRIDIS: [Vec3; 11] = [
    Vec3::new(0.267, 0.004, 0.329),
    Vec3::new(0.282, 0.140, 0.457),
    Vec3::new(0.253, 0.265, 0.529),
    Vec3::new(0.206, 0.371, 0.553),
    Vec3::new(0.163, 0.471, 0.558),
    Vec3::new(0.127, 0.566, 0.550),
    Vec3::new(0.134, 0.658, 0.517),
    Vec3::new(0.266, 0.749, 0.440),
    Vec3::new(0.477, 0.821, 0.318),
    Vec3::new(0.741, 0.873, 0.150),
    Vec3::new(0.993, 0.906, 0.144),
];

/// Samples the color map at `t` in `[0, 1]` (clamped), opaque alpha.
#[must_use]
pub fn sample_color_map(t: f32) -> Vec4 {
    let t = t.clamp(0.0, 1.0);
    let n = VIRIDIS.len() - 1;
    let scaled = t * n as f32;
    let idx = (scaled.floor() as usize).min(n - 1);
    let frac = scaled - idx as f32;
    let rgb = VIRIDIS[idx].lerp(VIRIDIS[idx + 1], frac);
    rgb.extend(1.0)
}

/// Builds an `n x 1` RGBA8 lookup texture over the color map.
///
/// # Panics
/// Panics if `n` is 0.
#[must_use]
pub fn color_ramp_texture(n: u32) -> TextureHandle {
    assert!(n > 0, "color ramp needs at least one texel");
    let mut pixels = Vec::with_capacity(n as usize * 4);
    let denom = (n.saturating_sub(1)).max(1) as f32;
    for i in 0..n {
        let c = sample_color_map(i as f32 / denom);
        pixels.push((c.x * 255.0).round() as u8);
        pixels.push((c.y * 255.0).round() as u8);
        pixels.push((c.z * 255.0).round() as u8);
        pixels.push(255);
    }
    TextureHandle::new(Texture::new("color-ramp", n, 1, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let lo = sample_color_map(0.0);
        let hi = sample_color_map(1.0);
        assert_eq!(lo.truncate(), VIRIDIS[0]);
        assert_eq!(hi.truncate(), VIRIDIS[10]);
        assert_eq!(lo.w, 1.0);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(sample_color_map(-5.0), sample_color_map(0.0));
        assert_eq!(sample_color_map(5.0), sample_color_map(1.0));
    }

    #[test]
    fn test_ramp_texture_dimensions() {
        let tex = color_ramp_texture(64);
        let tex = tex.lock();
        assert_eq!(tex.width(), 64);
        assert_eq!(tex.height(), 1);
        assert_eq!(tex.pixels().len(), 64 * 4);
    }
}
