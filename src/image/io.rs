//! I/O helpers for rasters and JSON reports.
//!
//! - `load_rgb_image`: decode a PNG/JPEG/etc. into an owned RGB buffer.
//! - `save_grayscale_u8`: write an 8-bit gray buffer; format follows the extension.
//! - `save_rgb_u8`: write an RGB buffer; format follows the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayImageU8, ImageView, RgbImageU8};
use crate::error::{Error, Result};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
///
/// Grayscale or RGBA sources are expanded/flattened by the decoder; alpha is
/// dropped.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8> {
    let img = image::open(path)
        .map_err(|e| Error::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbImageU8::from_interleaved(width, height, img.as_raw()).ok_or_else(|| Error::Load {
        path: path.to_path_buf(),
        message: "decoded buffer has unexpected length".to_string(),
    })
}

/// Save an 8-bit grayscale buffer.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path).map_err(|message| Error::Save {
        path: path.to_path_buf(),
        message,
    })?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| Error::Save {
        path: path.to_path_buf(),
        message: "failed to create image buffer".to_string(),
    })?;
    image.save(path).map_err(|e| Error::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save an RGB buffer.
pub fn save_rgb_u8(buffer: &RgbImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path).map_err(|message| Error::Save {
        path: path.to_path_buf(),
        message,
    })?;
    let image = RgbImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.to_interleaved(),
    )
    .ok_or_else(|| Error::Save {
        path: path.to_path_buf(),
        message: "failed to create image buffer".to_string(),
    })?;
    image.save(path).map_err(|e| Error::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let to_error = |message: String| Error::Serialize {
        path: path.to_path_buf(),
        message,
    };
    ensure_parent_dir(path).map_err(to_error)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| to_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| to_error(e.to_string()))
}

fn ensure_parent_dir(path: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
