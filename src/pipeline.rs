//! The edge pipeline: RGB → luma → Sobel gradients → normalized magnitude.
//!
//! Stages run strictly in sequence; each one consumes the previous stage's
//! output and produces a new buffer of the same size. Every intermediate
//! artifact is kept in [`SobelArtifacts`] so presentation code can render it.
use crate::color::{gray_to_rgb, to_grayscale, LumaWeights};
use crate::edges::{
    abs_truncate_u8, magnitude, normalize_to_u8, sobel_gradients, GradientOptions, Gradients,
    Normalized,
};
use crate::image::{GrayImageU8, ImageF32, ImageView, RgbImageU8};
use crate::visualize::{apply_jet, blend, compose_panels, PanelLayout};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Knobs of the numeric stages.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SobelParams {
    pub luma: LumaWeights,
    /// Run the convolution rows on the rayon pool.
    pub parallel: bool,
}

impl Default for SobelParams {
    fn default() -> Self {
        Self {
            luma: LumaWeights::Bt601,
            parallel: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct StageTimings {
    pub grayscale_ms: f64,
    pub gradients_ms: f64,
    pub normalize_ms: f64,
    pub total_ms: f64,
}

/// Everything the pipeline computed for one image.
#[derive(Clone, Debug)]
pub struct SobelArtifacts {
    pub gray: GrayImageU8,
    pub gradients: Gradients,
    pub magnitude: ImageF32,
    pub normalized: Normalized,
    /// `|gx|` truncated to 8 bits (vertical edges)
    pub abs_x: GrayImageU8,
    /// `|gy|` truncated to 8 bits (horizontal edges)
    pub abs_y: GrayImageU8,
    pub timings: StageTimings,
}

impl SobelArtifacts {
    /// The final edge map.
    pub fn edges(&self) -> &GrayImageU8 {
        &self.normalized.image
    }

    /// Digest of this run, recording where the edge map (and the panel sheet,
    /// when rendered) were written.
    pub fn summary(&self, edges_image: &Path, panels_image: Option<&Path>) -> SobelSummary {
        SobelSummary {
            width: self.gray.width(),
            height: self.gray.height(),
            max_magnitude: self.normalized.max_magnitude,
            degenerate: self.normalized.degenerate,
            edge_max: self.normalized.image.max_value(),
            timings: self.timings,
            edges_image: edges_image.to_path_buf(),
            panels_image: panels_image.map(Path::to_path_buf),
        }
    }
}

/// Serializable digest of one run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SobelSummary {
    pub width: usize,
    pub height: usize,
    pub max_magnitude: f32,
    pub degenerate: bool,
    pub edge_max: u8,
    pub timings: StageTimings,
    pub edges_image: PathBuf,
    pub panels_image: Option<PathBuf>,
}

fn ms_since(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

/// Run the full pipeline on an RGB image.
pub fn run(rgb: &RgbImageU8, params: &SobelParams) -> SobelArtifacts {
    let t0 = Instant::now();

    let t = Instant::now();
    let gray = to_grayscale(rgb, params.luma);
    let grayscale_ms = ms_since(t);
    debug!(
        "grayscale {}x{} ({:?}) in {:.3} ms",
        gray.width(),
        gray.height(),
        params.luma,
        grayscale_ms
    );

    let mut artifacts = run_gray(gray, params);
    artifacts.timings.grayscale_ms = grayscale_ms;
    artifacts.timings.total_ms = ms_since(t0);
    artifacts
}

/// Run the gradient and normalization stages on an existing luma raster.
pub fn run_gray(gray: GrayImageU8, params: &SobelParams) -> SobelArtifacts {
    let t0 = Instant::now();

    let t = Instant::now();
    let opts = GradientOptions {
        parallel: params.parallel,
    };
    let gradients = sobel_gradients(&gray, opts);
    let gradients_ms = ms_since(t);
    debug!(
        "sobel gradients (parallel={}) in {:.3} ms",
        params.parallel, gradients_ms
    );

    let t = Instant::now();
    let magnitude = magnitude(&gradients);
    let normalized = normalize_to_u8(&magnitude);
    let abs_x = abs_truncate_u8(&gradients.gx);
    let abs_y = abs_truncate_u8(&gradients.gy);
    let normalize_ms = ms_since(t);
    debug!(
        "magnitude max={:.3} degenerate={} in {:.3} ms",
        normalized.max_magnitude, normalized.degenerate, normalize_ms
    );

    SobelArtifacts {
        gray,
        gradients,
        magnitude,
        normalized,
        abs_x,
        abs_y,
        timings: StageTimings {
            grayscale_ms: 0.0,
            gradients_ms,
            normalize_ms,
            total_ms: ms_since(t0),
        },
    }
}

/// Render the six-panel sheet: original, grayscale, |gx|, |gy|, combined
/// magnitude and the jet-colored edges blended over the original with weight
/// `overlay_alpha`.
pub fn render_panels(
    rgb: &RgbImageU8,
    artifacts: &SobelArtifacts,
    overlay_alpha: f32,
    layout: PanelLayout,
) -> RgbImageU8 {
    let gray = gray_to_rgb(&artifacts.gray);
    let abs_x = gray_to_rgb(&artifacts.abs_x);
    let abs_y = gray_to_rgb(&artifacts.abs_y);
    let combined = gray_to_rgb(artifacts.edges());
    let overlay = blend(rgb, &apply_jet(artifacts.edges()), overlay_alpha);
    compose_panels(&[rgb, &gray, &abs_x, &abs_y, &combined, &overlay], layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifacts_share_input_dimensions() {
        let rgb = RgbImageU8::new(
            5,
            4,
            (0..20u8).map(|i| [i * 12, 255 - i * 12, i]).collect(),
        );
        let a = run(&rgb, &SobelParams::default());
        for dims in [
            a.gray.dims(),
            a.gradients.gx.dims(),
            a.gradients.gy.dims(),
            a.magnitude.dims(),
            a.edges().dims(),
            a.abs_x.dims(),
            a.abs_y.dims(),
        ] {
            assert_eq!(dims, (5, 4));
        }
        assert_eq!(a.edges().max_value(), 255);
        let s = a.summary(Path::new("out/edges.png"), None);
        assert_eq!((s.width, s.height, s.edge_max), (5, 4, 255));
        assert!(!s.degenerate);
        assert_eq!(s.edges_image, PathBuf::from("out/edges.png"));
        assert!(s.panels_image.is_none());
    }

    #[test]
    fn panel_sheet_has_six_tiles() {
        let rgb = RgbImageU8::filled(6, 4, [30, 60, 90]);
        let a = run(&rgb, &SobelParams::default());
        let layout = PanelLayout {
            columns: 3,
            gap: 2,
            background: [255, 255, 255],
        };
        let sheet = render_panels(&rgb, &a, 0.3, layout);
        assert_eq!(sheet.dims(), (3 * 6 + 4 * 2, 2 * 4 + 3 * 2));
        // top-left tile is the untouched original
        assert_eq!(sheet.row(2)[2], [30, 60, 90]);
    }
}
