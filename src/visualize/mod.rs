//! Rendering helpers for inspecting the pipeline artifacts.
//!
//! Produces the six-panel sheet (original, grayscale, |gx|, |gy|, combined
//! magnitude, edge overlay) as a single RGB raster so it can be written to
//! disk next to the edge map.
pub mod colormap;
pub mod overlay;
pub mod panels;

pub use colormap::{apply_jet, jet};
pub use overlay::blend;
pub use panels::{compose_panels, PanelLayout};
