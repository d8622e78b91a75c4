//! Owned interleaved RGB buffer, one `[u8; 3]` per pixel.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl RgbImageU8 {
    /// Wrap row-major pixels. Panics when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "rgb buffer length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Build from tightly packed `R, G, B, R, G, B, ...` bytes.
    pub fn from_interleaved(width: usize, height: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width * height * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Image filled with a single color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Self {
        Self::new(width, height, vec![rgb; width * height])
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.data
    }

    /// Flatten back to packed `R, G, B` bytes.
    pub fn to_interleaved(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.iter().copied()).collect()
    }
}

impl ImageView for RgbImageU8 {
    type Pixel = [u8; 3];

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for RgbImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [[u8; 3]] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}
