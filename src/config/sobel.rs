//! JSON configuration of the `sobel_filter` tool.
//!
//! Every field has a default, so `{}` is a valid config and running the tool
//! without one processes `images/bridge.jpg` into `output/`.
use crate::error::{Error, Result};
use crate::pipeline::SobelParams;
use crate::visualize::PanelLayout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SobelToolConfig {
    pub input: PathBuf,
    pub output: SobelOutputConfig,
    pub pipeline: SobelParams,
    pub overlay: OverlayConfig,
    pub panels: PanelLayout,
}

impl Default for SobelToolConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("images/bridge.jpg"),
            output: SobelOutputConfig::default(),
            pipeline: SobelParams::default(),
            overlay: OverlayConfig::default(),
            panels: PanelLayout::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SobelOutputConfig {
    /// Normalized edge map; the format follows the extension.
    pub edges_image: PathBuf,
    /// Six-panel sheet, skipped when `null`.
    pub panels_image: Option<PathBuf>,
    /// Run summary as JSON, skipped when absent.
    pub summary_json: Option<PathBuf>,
}

impl Default for SobelOutputConfig {
    fn default() -> Self {
        Self {
            edges_image: PathBuf::from("output/bridge_edges.jpg"),
            panels_image: Some(PathBuf::from("output/bridge_panels.png")),
            summary_json: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Weight of the jet-colored edges; the original gets `1 - alpha`.
    pub alpha: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { alpha: 0.3 }
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<SobelToolConfig> {
    serde_json::from_str(contents).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn load_config(path: &Path) -> Result<SobelToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(path, &data)
}
