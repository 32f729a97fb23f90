// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Path-in, buffer-out convenience functions.
//
// Each function runs one `ImageOperation` with the default configuration. Any
// failure is logged as a warning and turned into `None`; callers that need to
// tell failures apart should use `ImageOperation::execute` directly.

use std::path::Path;

use bildwerk_core::{CropRegion, ProcessingConfig};
use image::{GrayImage, Rgb32FImage, RgbImage};
use tracing::warn;

use crate::operation::ImageOperation;
use crate::processed::Processed;

/// Run `operation` on `path`, logging and swallowing any error.
pub fn run_logged(
    operation: ImageOperation,
    path: impl AsRef<Path>,
    config: &ProcessingConfig,
) -> Option<Processed> {
    let path = path.as_ref();
    match operation.execute(path, config) {
        Ok(output) => Some(output),
        Err(err) => {
            warn!(
                operation = operation.name(),
                path = %path.display(),
                error = %err,
                "Image operation failed"
            );
            None
        }
    }
}

fn run_default(operation: ImageOperation, path: &Path) -> Option<Processed> {
    run_logged(operation, path, &ProcessingConfig::default())
}

/// Load the image as single-channel grayscale.
pub fn grayscale_conversion(path: impl AsRef<Path>) -> Option<GrayImage> {
    run_default(ImageOperation::Grayscale, path.as_ref()).and_then(Processed::into_gray)
}

/// `out = contrast * in + brightness` on every sample of the color image.
pub fn adjust_brightness_contrast(
    path: impl AsRef<Path>,
    brightness: f32,
    contrast: f32,
) -> Option<RgbImage> {
    let operation = ImageOperation::BrightnessContrast {
        brightness,
        contrast,
    };
    run_default(operation, path.as_ref()).and_then(Processed::into_rgb)
}

pub fn sharpen_kernel(path: impl AsRef<Path>) -> Option<RgbImage> {
    run_default(ImageOperation::SharpenKernel, path.as_ref()).and_then(Processed::into_rgb)
}

/// Signed Laplacian response; see [`crate::filter::laplacian_to_display`].
pub fn sharpen_laplacian(path: impl AsRef<Path>) -> Option<Rgb32FImage> {
    run_default(ImageOperation::SharpenLaplacian, path.as_ref()).and_then(Processed::into_signed)
}

/// 11x11 median blur.
pub fn median_denoise(path: impl AsRef<Path>) -> Option<RgbImage> {
    run_default(ImageOperation::MedianDenoise, path.as_ref()).and_then(Processed::into_rgb)
}

/// 5x5 Gaussian blur with sigma derived from the kernel size.
pub fn gaussian_denoise(path: impl AsRef<Path>) -> Option<RgbImage> {
    run_default(ImageOperation::GaussianDenoise, path.as_ref()).and_then(Processed::into_rgb)
}

pub fn resize(path: impl AsRef<Path>, width: u32, height: u32) -> Option<RgbImage> {
    run_default(ImageOperation::Resize { width, height }, path.as_ref())
        .and_then(Processed::into_rgb)
}

/// Rows `min_height..max_height`, columns `min_width..max_width`.
pub fn crop(
    path: impl AsRef<Path>,
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
) -> Option<RgbImage> {
    let region = CropRegion::new(min_width, max_width, min_height, max_height);
    run_default(ImageOperation::Crop(region), path.as_ref()).and_then(Processed::into_rgb)
}
