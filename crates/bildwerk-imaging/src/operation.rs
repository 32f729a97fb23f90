// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image operations — one variant per transformation, sharing a single
// load-then-transform path.

use std::path::Path;

use bildwerk_core::{ColorMode, CropRegion, ImagingError, Interpolation, ProcessingConfig, Result};
use image::DynamicImage;
use image::imageops::{self, FilterType};
use tracing::{debug, info, instrument};

use crate::filter;
use crate::load::{convert_mode, load};
use crate::processed::Processed;

/// A single image transformation together with its parameters.
///
/// ```ignore
/// let config = ProcessingConfig::default();
/// let thumb = ImageOperation::Resize { width: 320, height: 240 }
///     .execute("photo.jpg", &config)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageOperation {
    /// Decode as single-channel luma. The load itself is the conversion.
    Grayscale,
    /// `out = contrast * in + brightness`, saturated.
    BrightnessContrast { brightness: f32, contrast: f32 },
    /// 3x3 sharpening kernel `[[0,-1,0],[-1,5,-1],[0,-1,0]]`.
    SharpenKernel,
    /// Signed Laplacian response.
    SharpenLaplacian,
    /// Median of a square window (`median_kernel_size`).
    MedianDenoise,
    /// Gaussian blur (`gaussian_kernel_size`, `gaussian_sigma`).
    GaussianDenoise,
    /// Resample to exactly `width` x `height`, ignoring aspect ratio.
    Resize { width: u32, height: u32 },
    /// Extract a sub-region.
    Crop(CropRegion),
}

impl ImageOperation {
    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale_conversion",
            Self::BrightnessContrast { .. } => "brightness_contrast",
            Self::SharpenKernel => "sharpen_kernel",
            Self::SharpenLaplacian => "sharpen_laplacian",
            Self::MedianDenoise => "median_denoise",
            Self::GaussianDenoise => "gaussian_denoise",
            Self::Resize { .. } => "resize",
            Self::Crop(_) => "crop",
        }
    }

    /// Color mode the source must be decoded into.
    pub fn required_mode(&self) -> ColorMode {
        match self {
            Self::Grayscale => ColorMode::Grayscale,
            _ => ColorMode::Color,
        }
    }

    /// Load `path` in [`Self::required_mode`] and apply the transformation.
    #[instrument(skip_all, fields(operation = self.name(), path = %path.as_ref().display()))]
    pub fn execute(&self, path: impl AsRef<Path>, config: &ProcessingConfig) -> Result<Processed> {
        config.validate()?;
        let image = load(path, self.required_mode())?;
        self.apply(image, config)
    }

    /// Apply the transformation to an already decoded image.
    ///
    /// The image is first converted to [`Self::required_mode`], so any
    /// `DynamicImage` is accepted.
    #[instrument(skip_all, fields(operation = self.name()))]
    pub fn apply(&self, image: DynamicImage, config: &ProcessingConfig) -> Result<Processed> {
        config.validate()?;
        info!(
            width = image.width(),
            height = image.height(),
            "Applying image operation"
        );

        let output = match *self {
            Self::Grayscale => {
                Processed::Gray(convert_mode(image, ColorMode::Grayscale).into_luma8())
            }

            Self::BrightnessContrast {
                brightness,
                contrast,
            } => {
                if !brightness.is_finite() || !contrast.is_finite() {
                    return Err(ImagingError::InvalidParameter(format!(
                        "brightness and contrast must be finite, got {brightness} and {contrast}"
                    )));
                }
                Processed::Rgb(filter::brightness_contrast(
                    image.into_rgb8(),
                    brightness,
                    contrast,
                ))
            }

            Self::SharpenKernel => Processed::Rgb(filter::sharpen(&image.into_rgb8())),

            Self::SharpenLaplacian => Processed::Signed(filter::laplacian(&image.into_rgb8())),

            Self::MedianDenoise => Processed::Rgb(filter::median_blur(
                &image.into_rgb8(),
                config.median_kernel_size,
            )?),

            Self::GaussianDenoise => Processed::Rgb(filter::gaussian_blur(
                &image.into_rgb8(),
                config.gaussian_kernel_size,
                config.gaussian_sigma,
            )?),

            Self::Resize { width, height } => {
                if width == 0 || height == 0 {
                    return Err(ImagingError::InvalidParameter(format!(
                        "resize target must be positive, got {width}x{height}"
                    )));
                }
                let rgb = image.into_rgb8();
                Processed::Rgb(imageops::resize(
                    &rgb,
                    width,
                    height,
                    filter_type(config.resize_filter),
                ))
            }

            Self::Crop(region) => {
                let rgb = image.into_rgb8();
                let rect = region.resolve(rgb.width(), rgb.height(), config.crop_policy)?;
                debug!(?rect, "Crop region resolved");
                Processed::Rgb(
                    imageops::crop_imm(&rgb, rect.x, rect.y, rect.width, rect.height).to_image(),
                )
            }
        };

        debug!(
            width = output.width(),
            height = output.height(),
            channels = output.channel_count(),
            "Image operation complete"
        );
        Ok(output)
    }
}

fn filter_type(interpolation: Interpolation) -> FilterType {
    match interpolation {
        Interpolation::Nearest => FilterType::Nearest,
        Interpolation::Bilinear => FilterType::Triangle,
        Interpolation::CatmullRom => FilterType::CatmullRom,
        Interpolation::Gaussian => FilterType::Gaussian,
        Interpolation::Lanczos3 => FilterType::Lanczos3,
    }
}

// -- Tests --------------------------------------------------------------------
