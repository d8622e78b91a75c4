use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sobel_edges::image::{GrayImageU8, RgbImageU8};

/// Vertical step edge: columns `< split_x` are `lo`, the rest `hi`.
pub fn vertical_step_rgb(
    width: usize,
    height: usize,
    split_x: usize,
    lo: u8,
    hi: u8,
) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for x in 0..width {
            let v = if x < split_x { lo } else { hi };
            data.push([v, v, v]);
        }
    }
    RgbImageU8::new(width, height, data)
}

/// Uniformly colored image.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> RgbImageU8 {
    RgbImageU8::filled(width, height, rgb)
}

/// Reproducible noise image.
pub fn random_rgb(width: usize, height: usize, seed: u64) -> RgbImageU8 {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen::<[u8; 3]>()).collect();
    RgbImageU8::new(width, height, data)
}

/// Reproducible gray noise image.
pub fn random_gray(width: usize, height: usize, seed: u64) -> GrayImageU8 {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen::<u8>()).collect();
    GrayImageU8::new(width, height, data)
}
