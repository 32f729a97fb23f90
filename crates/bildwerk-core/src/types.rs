// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Bildwerk image operations.

use serde::{Deserialize, Serialize};

use crate::error::{ImagingError, Result};

/// Color mode an image is decoded into before a transformation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Single-channel 8-bit luma.
    Grayscale,
    /// Three-channel 8-bit color. Any alpha channel is discarded.
    Color,
}

impl ColorMode {
    /// Number of samples per pixel after loading in this mode.
    pub fn channel_count(&self) -> u8 {
        match self {
            Self::Grayscale => 1,
            Self::Color => 3,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale => write!(f, "grayscale"),
            Self::Color => write!(f, "color"),
        }
    }
}

/// Resampling filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    Nearest,
    /// Linear interpolation in both axes.
    #[default]
    Bilinear,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

/// How crop bounds that fall outside the source image are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropPolicy {
    /// Clamp the bounds to the image extent, the way array slicing does.
    #[default]
    Clamp,
    /// Reject any bound that lies outside the image.
    Strict,
}

/// Half-open rectangular region `[min_height, max_height) x [min_width, max_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

/// A crop region resolved against a concrete image: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Resolve the region against an `image_width` x `image_height` image.
    ///
    /// Under [`CropPolicy::Clamp`] every bound is clamped to the image extent.
    /// Under [`CropPolicy::Strict`] a bound past the extent is an error. In
    /// both cases an inverted or zero-area result is rejected.
    pub fn resolve(
        &self,
        image_width: u32,
        image_height: u32,
        policy: CropPolicy,
    ) -> Result<PixelRect> {
        if policy == CropPolicy::Strict
            && (self.max_width > image_width || self.max_height > image_height)
        {
            return Err(ImagingError::InvalidParameter(format!(
                "crop region {}..{} x {}..{} exceeds image extent {}x{}",
                self.min_width,
                self.max_width,
                self.min_height,
                self.max_height,
                image_width,
                image_height
            )));
        }

        let x0 = self.min_width.min(image_width);
        let x1 = self.max_width.min(image_width);
        let y0 = self.min_height.min(image_height);
        let y1 = self.max_height.min(image_height);

        if x1 <= x0 || y1 <= y0 {
            return Err(ImagingError::InvalidParameter(format!(
                "crop region {}..{} x {}..{} is empty for a {}x{} image",
                self.min_width,
                self.max_width,
                self.min_height,
                self.max_height,
                image_width,
                image_height
            )));
        }

        Ok(PixelRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}
