// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image loading in a required color mode.

use std::path::Path;

use bildwerk_core::{ColorMode, ImagingError, Result};
use image::DynamicImage;
use tracing::{info, instrument};

use crate::filter::luma_bt601;

/// Load an image from `path` and convert it to `mode`.
///
/// Grayscale loads yield `DynamicImage::ImageLuma8`; color loads yield
/// `DynamicImage::ImageRgb8` with any alpha channel dropped. Missing files,
/// unreadable files and undecodable contents all surface as
/// [`ImagingError::Load`] carrying the path.
#[instrument(skip_all, fields(path = %path.as_ref().display(), mode = %mode))]
pub fn load(path: impl AsRef<Path>, mode: ColorMode) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|err| ImagingError::load(path, err))?;
    let image = convert_mode(decoded, mode);
    info!(
        width = image.width(),
        height = image.height(),
        "Image loaded"
    );
    Ok(image)
}

/// Convert an already decoded image to `mode`, reusing the buffer when it is
/// in that layout already. Color sources become grayscale through BT.601 luma.
pub fn convert_mode(image: DynamicImage, mode: ColorMode) -> DynamicImage {
    match (mode, image) {
        (ColorMode::Grayscale, img @ DynamicImage::ImageLuma8(_)) => img,
        (ColorMode::Grayscale, img) => DynamicImage::ImageLuma8(luma_bt601(&img.into_rgb8())),
        (ColorMode::Color, img @ DynamicImage::ImageRgb8(_)) => img,
        (ColorMode::Color, img) => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}
