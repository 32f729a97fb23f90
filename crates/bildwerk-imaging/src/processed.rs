// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output buffers produced by image operations.

use std::path::Path;

use bildwerk_core::{ImagingError, Result};
use image::{GrayImage, Rgb32FImage, RgbImage};

/// The pixel buffer an operation hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Processed {
    /// Single-channel 8-bit image.
    Gray(GrayImage),
    /// Three-channel 8-bit image.
    Rgb(RgbImage),
    /// Three-channel signed floating-point response (Laplacian). Not directly
    /// displayable.
    Signed(Rgb32FImage),
}

impl Processed {
    pub fn width(&self) -> u32 {
        match self {
            Self::Gray(img) => img.width(),
            Self::Rgb(img) => img.width(),
            Self::Signed(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Gray(img) => img.height(),
            Self::Rgb(img) => img.height(),
            Self::Signed(img) => img.height(),
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Samples per pixel.
    pub fn channel_count(&self) -> u8 {
        match self {
            Self::Gray(_) => 1,
            Self::Rgb(_) | Self::Signed(_) => 3,
        }
    }

    pub fn as_gray(&self) -> Option<&GrayImage> {
        match self {
            Self::Gray(img) => Some(img),
            _ => None,
        }
    }

    pub fn as_rgb(&self) -> Option<&RgbImage> {
        match self {
            Self::Rgb(img) => Some(img),
            _ => None,
        }
    }

    pub fn as_signed(&self) -> Option<&Rgb32FImage> {
        match self {
            Self::Signed(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_gray(self) -> Option<GrayImage> {
        match self {
            Self::Gray(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_rgb(self) -> Option<RgbImage> {
        match self {
            Self::Rgb(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_signed(self) -> Option<Rgb32FImage> {
        match self {
            Self::Signed(img) => Some(img),
            _ => None,
        }
    }

    /// Write an 8-bit result to disk; the format follows the file extension.
    ///
    /// Signed output has no lossless 8-bit encoding and is rejected. Convert it
    /// with [`crate::filter::laplacian_to_display`] first.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let outcome = match self {
            Self::Gray(img) => img.save(path),
            Self::Rgb(img) => img.save(path),
            Self::Signed(_) => {
                return Err(ImagingError::Save(
                    "signed output must be rescaled before saving".into(),
                ));
            }
        };
        outcome.map_err(|err| {
            ImagingError::Save(format!("failed to save image to {}: {}", path.display(), err))
        })
    }
}

impl From<GrayImage> for Processed {
    fn from(img: GrayImage) -> Self {
        Self::Gray(img)
    }
}

impl From<RgbImage> for Processed {
    fn from(img: RgbImage) -> Self {
        Self::Rgb(img)
    }
}

impl From<Rgb32FImage> for Processed {
    fn from(img: Rgb32FImage) -> Self {
        Self::Signed(img)
    }
}
