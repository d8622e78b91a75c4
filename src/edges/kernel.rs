//! Fixed 3×3 derivative kernels.
//!
//! Kernels are stored row-major as `nalgebra::Matrix3<i32>` and applied in
//! correlation form (no flip): the horizontal kernel responds positively to
//! intensity increasing left → right, the vertical kernel to intensity
//! increasing top → bottom.
use nalgebra::Matrix3;

/// A 3×3 integer kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel(pub Matrix3<i32>);

/// Horizontal derivative (responds to vertical edges).
pub const SOBEL_X: Kernel = Kernel(Matrix3::new(
    -1, 0, 1, //
    -2, 0, 2, //
    -1, 0, 1,
));

/// Vertical derivative (responds to horizontal edges).
pub const SOBEL_Y: Kernel = Kernel(Matrix3::new(
    -1, -2, -1, //
    0, 0, 0, //
    1, 2, 1,
));

impl Kernel {
    /// Weight at `(row, col)`, both in `0..3`.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.0[(row, col)]
    }

    /// Rows as plain `f32` arrays, the layout the convolution loop consumes.
    pub fn to_f32_rows(&self) -> [[f32; 3]; 3] {
        let mut out = [[0.0; 3]; 3];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = self.weight(r, c) as f32;
            }
        }
        out
    }

    /// Rotate by −90° in image coordinates (y axis pointing down).
    ///
    /// On the printed matrix this is a counter-clockwise quarter turn:
    /// `out[r][c] = in[c][2 - r]`.
    pub fn rotate_neg90(&self) -> Kernel {
        Kernel(Matrix3::from_fn(|r, c| self.0[(c, 2 - r)]))
    }
}
