//! Tiling of equally sized RGB panels into one sheet.
use crate::image::{ImageView, ImageViewMut, RgbImageU8};
use serde::Deserialize;

/// Grid geometry for [`compose_panels`].
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    /// Panels per row.
    pub columns: usize,
    /// Pixels between neighbouring panels and around the sheet.
    pub gap: usize,
    /// Fill color for the gaps.
    pub background: [u8; 3],
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            gap: 8,
            background: [255, 255, 255],
        }
    }
}

/// Place `panels` row-major on a `columns`-wide grid.
///
/// All panels must share the size of the first one. Returns an empty image
/// when `panels` is empty.
pub fn compose_panels(panels: &[&RgbImageU8], layout: PanelLayout) -> RgbImageU8 {
    let Some(first) = panels.first() else {
        return RgbImageU8::new(0, 0, Vec::new());
    };
    let (pw, ph) = first.dims();
    for (i, p) in panels.iter().enumerate() {
        assert_eq!(p.dims(), (pw, ph), "panel {i} differs in size from panel 0");
    }
    let cols = layout.columns.max(1).min(panels.len());
    let rows = panels.len().div_ceil(cols);
    let gap = layout.gap;
    let width = cols * pw + (cols + 1) * gap;
    let height = rows * ph + (rows + 1) * gap;

    let mut sheet = RgbImageU8::filled(width, height, layout.background);
    for (i, panel) in panels.iter().enumerate() {
        let x0 = gap + (i % cols) * (pw + gap);
        let y0 = gap + (i / cols) * (ph + gap);
        for (dy, src) in panel.rows().enumerate() {
            sheet.row_mut(y0 + dy)[x0..x0 + pw].copy_from_slice(src);
        }
    }
    sheet
}
