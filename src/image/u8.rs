use super::traits::ImageView;

/// Borrowed 8-bit single-channel view with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned 8-bit grayscale buffer (stride == width).
///
/// Produced by the grayscale converter, the absolute-gradient panels and the
/// normalized magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw row-major bytes. Panics when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "gray buffer length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// All-zero buffer of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![0; width * height])
    }

    /// Raw samples in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Largest sample, `0` for an empty image.
    pub fn max_value(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
