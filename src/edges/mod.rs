//! Sobel edge maps: kernels, directional gradients and magnitude normalization.
//!
//! - Gradient computation convolves a grayscale raster with the fixed
//!   horizontal/vertical Sobel kernels, replicating the border so outputs
//!   keep the input size.
//! - The magnitude `sqrt(gx² + gy²)` is stretched to the full 8-bit range
//!   for storage and display; flat inputs produce an all-zero map.
//! - Raw per-direction gradients get their own absolute-value rendering.

pub mod grad;
pub mod kernel;
pub mod normalize;

pub use grad::{convolve3x3, sobel_gradients, GradientOptions, Gradients};
pub use kernel::{Kernel, SOBEL_X, SOBEL_Y};
pub use normalize::{abs_truncate_u8, magnitude, normalize_to_u8, Normalized};
