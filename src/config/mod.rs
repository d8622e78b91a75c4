pub mod sobel;
