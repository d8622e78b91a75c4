//! Owned and borrowed raster buffers used by the edge pipeline.
//!
//! All buffers are row-major. Owned buffers keep `stride == width`; the
//! borrowed [`ImageU8`] view accepts an arbitrary stride so callers can hand
//! in sub-rectangles of larger frames.
pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::rgb::RgbImageU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
