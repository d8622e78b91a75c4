//! Jet colormap (dark blue → cyan → yellow → dark red).
use crate::image::{GrayImageU8, ImageView, RgbImageU8};

#[inline]
fn channel(t: f32, center: f32) -> u8 {
    let v = (1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0);
    (v * 255.0).round() as u8
}

/// Map an 8-bit intensity to an RGB jet color.
pub fn jet(v: u8) -> [u8; 3] {
    let t = v as f32 / 255.0;
    [channel(t, 3.0), channel(t, 2.0), channel(t, 1.0)]
}

/// Apply [`jet`] to every pixel of a gray raster.
pub fn apply_jet(gray: &GrayImageU8) -> RgbImageU8 {
    let lut: Vec<[u8; 3]> = (0..=255u8).map(jet).collect();
    let data = gray.data().iter().map(|&v| lut[v as usize]).collect();
    RgbImageU8::new(gray.width(), gray.height(), data)
}
