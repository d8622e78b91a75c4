//! Directional image gradients by 3×3 convolution with border replication.
//!
//! - Each output pixel is the correlation of the kernel with the 3×3
//!   neighbourhood around it; out-of-range neighbours are clamped to the
//!   nearest edge pixel, so outputs always match the input size.
//! - Accumulation is in `f32`. For 8-bit input the Sobel response is bounded
//!   by ±1020, far from any precision limit.
//! - Images smaller than the kernel are accepted: with one row or column the
//!   clamped neighbours collapse onto the same pixel and the derivative
//!   across that axis is zero.
//!
//! Rows are independent, so the row-parallel path (rayon) produces exactly
//! the same values as the sequential one.
use super::kernel::{Kernel, SOBEL_X, SOBEL_Y};
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;

/// Horizontal and vertical derivative fields of one image.
#[derive(Clone, Debug)]
pub struct Gradients {
    /// Horizontal derivative (convolution with `SOBEL_X`)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with `SOBEL_Y`)
    pub gy: ImageF32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GradientOptions {
    /// Evaluate rows on the rayon thread pool.
    pub parallel: bool,
}

#[inline]
fn convolve_row<I>(img: &I, kernel: &[[f32; 3]; 3], y: usize, out: &mut [f32])
where
    I: ImageView,
    I::Pixel: Into<f32>,
{
    let w = img.width();
    let h = img.height();
    let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
    let rows = [img.row(y_idx[0]), img.row(y_idx[1]), img.row(y_idx[2])];
    for (x, dst) in out.iter_mut().enumerate() {
        let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
        let mut sum = 0.0f32;
        for (k_row, src) in kernel.iter().zip(rows.iter()) {
            let [a, b, c]: [f32; 3] = x_idx.map(|xx| src[xx].into());
            sum += a * k_row[0] + b * k_row[1] + c * k_row[2];
        }
        *dst = sum;
    }
}

/// Convolve a single-channel image with a 3×3 kernel, replicating borders.
pub fn convolve3x3<I>(img: &I, kernel: &Kernel, opts: GradientOptions) -> ImageF32
where
    I: ImageView + Sync,
    I::Pixel: Into<f32>,
{
    let (w, h) = img.dims();
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let k = kernel.to_f32_rows();
    if opts.parallel {
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| convolve_row(img, &k, y, row));
    } else {
        for (y, row) in out.data.chunks_mut(w).enumerate() {
            convolve_row(img, &k, y, row);
        }
    }
    out
}

/// Compute Sobel gradients of a single-channel image.
pub fn sobel_gradients<I>(img: &I, opts: GradientOptions) -> Gradients
where
    I: ImageView + Sync,
    I::Pixel: Into<f32>,
{
    Gradients {
        gx: convolve3x3(img, &SOBEL_X, opts),
        gy: convolve3x3(img, &SOBEL_Y, opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{GrayImageU8, ImageU8};

    const SEQ: GradientOptions = GradientOptions { parallel: false };

    fn all_zero(field: &ImageF32) -> bool {
        field.data.iter().all(|&v| v == 0.0)
    }

    fn ramp_x(w: usize, h: usize, step: u8) -> GrayImageU8 {
        let data = (0..h)
            .flat_map(|_| (0..w).map(move |x| x as u8 * step))
            .collect();
        GrayImageU8::new(w, h, data)
    }

    #[test]
    fn linear_ramp_has_constant_interior_gradient() {
        let img = ramp_x(8, 6, 10);
        let g = sobel_gradients(&img, SEQ);
        for y in 0..6 {
            for x in 1..7 {
                // (1 + 2 + 1) * (10 - (-10)) = 80
                assert_eq!(g.gx.get(x, y), 80.0, "x={x} y={y}");
                assert_eq!(g.gy.get(x, y), 0.0);
            }
            // replicated border halves the central difference
            assert_eq!(g.gx.get(0, y), 40.0);
            assert_eq!(g.gx.get(7, y), 40.0);
        }
    }

    #[test]
    fn single_bright_pixel_matches_kernel_weights() {
        let mut data = vec![0u8; 25];
        data[2 * 5 + 2] = 1;
        let img = GrayImageU8::new(5, 5, data);
        let g = sobel_gradients(&img, SEQ);
        // Correlation places the kernel mirrored around an impulse.
        assert_eq!(g.gx.get(1, 2), 2.0);
        assert_eq!(g.gx.get(3, 2), -2.0);
        assert_eq!(g.gy.get(2, 1), 2.0);
        assert_eq!(g.gy.get(2, 3), -2.0);
        assert_eq!(g.gx.get(2, 2), 0.0);
    }

    #[test]
    fn tiny_images_keep_their_shape() {
        for (w, h) in [(1, 1), (1, 4), (4, 1), (2, 2), (2, 3), (3, 3)] {
            let data: Vec<u8> = (0..w * h).map(|i| (i * 37 % 256) as u8).collect();
            let img = GrayImageU8::new(w, h, data);
            let g = sobel_gradients(&img, SEQ);
            assert_eq!(g.gx.dims(), (w, h));
            assert_eq!(g.gy.dims(), (w, h));
            if w == 1 {
                assert!(all_zero(&g.gx), "single column has no x derivative");
            }
            if h == 1 {
                assert!(all_zero(&g.gy), "single row has no y derivative");
            }
        }
    }

    #[test]
    fn empty_image_yields_empty_fields() {
        let img = GrayImageU8::zeros(0, 5);
        let g = sobel_gradients(&img, SEQ);
        assert_eq!(g.gx.dims(), (0, 5));
        assert!(g.gx.data.is_empty());
    }

    #[test]
    fn strided_view_matches_packed_buffer() {
        let packed = ramp_x(6, 4, 7);
        let mut padded = vec![255u8; 10 * 4];
        for y in 0..4 {
            padded[y * 10..y * 10 + 6].copy_from_slice(packed.row(y));
        }
        let view = ImageU8 {
            w: 6,
            h: 4,
            stride: 10,
            data: &padded,
        };
        let a = sobel_gradients(&packed, SEQ);
        let b = sobel_gradients(&view, SEQ);
        assert_eq!(a.gx, b.gx);
        assert_eq!(a.gy, b.gy);
    }

    #[test]
    fn parallel_path_is_identical() {
        let data: Vec<u8> = (0..64 * 48).map(|i| ((i * 7919) % 251) as u8).collect();
        let img = GrayImageU8::new(64, 48, data);
        let seq = sobel_gradients(&img, SEQ);
        let par = sobel_gradients(&img, GradientOptions { parallel: true });
        assert_eq!(seq.gx, par.gx);
        assert_eq!(seq.gy, par.gy);
    }

    #[test]
    fn float_input_is_supported() {
        let img = ImageF32::from_fn(5, 5, |_, y| y as f32 * 0.5);
        let g = sobel_gradients(&img, SEQ);
        assert_eq!(g.gy.get(2, 2), 4.0);
        assert!(all_zero(&g.gx));
    }
}
