#![doc = include_str!("../README.md")]

pub mod color;
pub mod config;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod visualize;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::pipeline::{render_panels, run, SobelArtifacts, SobelParams, SobelSummary};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use sobel_edges::prelude::*;
///
/// # fn main() -> sobel_edges::Result<()> {
/// let rgb = load_rgb_image(std::path::Path::new("images/bridge.jpg"))?;
/// let artifacts = sobel_edges::run(&rgb, &SobelParams::default());
/// save_grayscale_u8(artifacts.edges(), std::path::Path::new("edges.png"))?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::color::LumaWeights;
    pub use crate::image::io::{load_rgb_image, save_grayscale_u8, save_rgb_u8};
    pub use crate::image::{GrayImageU8, ImageF32, ImageView, RgbImageU8};
    pub use crate::{SobelArtifacts, SobelParams};
}
