//! Gradient magnitude and its conversions to displayable 8-bit rasters.
//!
//! Two independent rules live here and are intentionally not unified:
//! - [`normalize_to_u8`] stretches the magnitude so its maximum lands on 255;
//! - [`abs_truncate_u8`] shows a raw directional derivative as `|g|` with the
//!   fraction dropped and no rescaling.
use super::grad::Gradients;
use crate::image::{GrayImageU8, ImageF32, ImageView};
use log::warn;

/// Normalized magnitude raster plus the scale it was derived from.
#[derive(Clone, Debug)]
pub struct Normalized {
    pub image: GrayImageU8,
    /// Maximum of the source magnitude field (`0.0` when degenerate or empty)
    pub max_magnitude: f32,
    /// Set when every magnitude was zero and the output is all zeros.
    pub degenerate: bool,
}

/// Pixel-wise Euclidean norm `sqrt(gx² + gy²)`.
///
/// Panics if the two fields differ in size; both come from the same input so
/// a mismatch is a programming error.
pub fn magnitude(grad: &Gradients) -> ImageF32 {
    assert_eq!(
        grad.gx.dims(),
        grad.gy.dims(),
        "gradient fields must share dimensions"
    );
    ImageF32::from_fn(grad.gx.w, grad.gx.h, |x, y| {
        let gx = grad.gx.get(x, y);
        let gy = grad.gy.get(x, y);
        (gx * gx + gy * gy).sqrt()
    })
}

/// Rescale a non-negative field linearly so that 0 → 0 and max → 255.
///
/// Values are rounded to nearest and clamped to [0, 255]. An all-zero field
/// (e.g. from a perfectly flat image) has no scale and maps to all zeros.
pub fn normalize_to_u8(mag: &ImageF32) -> Normalized {
    let (w, h) = mag.dims();
    let max = match mag.max_value() {
        Some(m) if m > 0.0 => m,
        _ => {
            if !mag.data.is_empty() {
                warn!("magnitude field is flat ({w}x{h}); emitting an all-zero edge map");
            }
            return Normalized {
                image: GrayImageU8::zeros(w, h),
                max_magnitude: 0.0,
                degenerate: true,
            };
        }
    };
    let scale = 255.0 / max as f64;
    let data = mag
        .data
        .iter()
        .map(|&m| (m as f64 * scale).round().clamp(0.0, 255.0) as u8)
        .collect();
    Normalized {
        image: GrayImageU8::new(w, h, data),
        max_magnitude: max,
        degenerate: false,
    }
}

/// `|g|` truncated toward zero, saturating above 255.
pub fn abs_truncate_u8(field: &ImageF32) -> GrayImageU8 {
    let data = field
        .data
        .iter()
        .map(|&g| g.abs().trunc().min(255.0) as u8)
        .collect();
    GrayImageU8::new(field.w, field.h, data)
}
