use crate::image::{ImageView, RgbImageU8};

/// Weighted blend `base * (1 - alpha) + top * alpha`, rounded and saturated.
///
/// `alpha` is clamped to [0, 1]. Both images must have the same size.
pub fn blend(base: &RgbImageU8, top: &RgbImageU8, alpha: f32) -> RgbImageU8 {
    assert_eq!(base.dims(), top.dims(), "overlay requires equal image sizes");
    let a = alpha.clamp(0.0, 1.0);
    let data = base
        .pixels()
        .iter()
        .zip(top.pixels())
        .map(|(b, t)| {
            let mut px = [0u8; 3];
            for c in 0..3 {
                let v = b[c] as f32 * (1.0 - a) + t[c] as f32 * a;
                px[c] = v.round().clamp(0.0, 255.0) as u8;
            }
            px
        })
        .collect();
    RgbImageU8::new(base.width(), base.height(), data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_percent_overlay() {
        let base = RgbImageU8::filled(2, 2, [100, 200, 0]);
        let top = RgbImageU8::filled(2, 2, [0, 0, 250]);
        let out = blend(&base, &top, 0.3);
        assert_eq!(out.row(1)[1], [70, 140, 75]);
    }

    #[test]
    fn alpha_extremes_select_one_side() {
        let base = RgbImageU8::filled(1, 1, [10, 20, 30]);
        let top = RgbImageU8::filled(1, 1, [200, 100, 50]);
        assert_eq!(blend(&base, &top, 0.0).row(0)[0], [10, 20, 30]);
        assert_eq!(blend(&base, &top, 1.0).row(0)[0], [200, 100, 50]);
        assert_eq!(blend(&base, &top, 7.0).row(0)[0], [200, 100, 50]);
    }
}
