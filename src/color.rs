//! RGB → luma conversion.
//!
//! Every pixel is reduced with the same fixed weighted sum
//! `wr*R + wg*G + wb*B`, rounded to the nearest integer and clamped to
//! [0, 255]. The weights of each standard sum to one, so a pure gray pixel
//! (`R == G == B`) maps back to its own value.
use crate::image::{GrayImageU8, ImageView, RgbImageU8};
use serde::{Deserialize, Serialize};

/// Luma coefficient sets for RGB input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LumaWeights {
    /// ITU-R BT.601: `0.299 R + 0.587 G + 0.114 B`.
    #[default]
    Bt601,
    /// ITU-R BT.709: `0.2126 R + 0.7152 G + 0.0722 B`.
    Bt709,
}

impl LumaWeights {
    /// `[wr, wg, wb]` coefficients.
    pub fn coefficients(self) -> [f32; 3] {
        match self {
            LumaWeights::Bt601 => [0.299, 0.587, 0.114],
            LumaWeights::Bt709 => [0.2126, 0.7152, 0.0722],
        }
    }
}

#[inline]
fn luma(px: [u8; 3], [wr, wg, wb]: [f32; 3]) -> u8 {
    let y = wr * px[0] as f32 + wg * px[1] as f32 + wb * px[2] as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB image to single-channel luma of the same size.
pub fn to_grayscale(rgb: &RgbImageU8, weights: LumaWeights) -> GrayImageU8 {
    let coeffs = weights.coefficients();
    let data = rgb.rows().flatten().map(|&px| luma(px, coeffs)).collect();
    GrayImageU8::new(rgb.width(), rgb.height(), data)
}

/// Expand a gray buffer back to RGB (`R = G = B = luma`) for display.
pub fn gray_to_rgb(gray: &GrayImageU8) -> RgbImageU8 {
    let data = gray.data().iter().map(|&v| [v, v, v]).collect();
    RgbImageU8::new(gray.width(), gray.height(), data)
}
