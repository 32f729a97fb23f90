// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bildwerk-imaging — Standalone image operations.
//
// Every operation loads an image from a path in the color mode it needs,
// applies exactly one transformation (grayscale, brightness/contrast, kernel
// or Laplacian sharpening, median or Gaussian denoising, resize, crop) and
// hands back the resulting pixel buffer.

pub mod filter;
pub mod load;
pub mod operation;
pub mod ops;
pub mod processed;

// Re-export the primary items so callers can use `bildwerk_imaging::ImageOperation` etc.
pub use load::load;
pub use operation::ImageOperation;
pub use ops::{
    adjust_brightness_contrast, crop, gaussian_denoise, grayscale_conversion, median_denoise,
    resize, sharpen_kernel, sharpen_laplacian,
};
pub use processed::Processed;
