// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Processing configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ImagingError, Result};
use crate::types::{CropPolicy, Interpolation};

/// Largest accepted side length for median and Gaussian kernels.
pub const MAX_KERNEL_SIZE: u32 = 255;

/// Tunable constants for the image operations.
///
/// `Default` reproduces the fixed values the operations have always used, so
/// callers that never touch configuration get the established behaviour.
/// Missing keys in a JSON document fall back to those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Side length of the square median window (odd).
    pub median_kernel_size: u32,
    /// Side length of the square Gaussian kernel (odd).
    pub gaussian_kernel_size: u32,
    /// Gaussian standard deviation. `0.0` derives it from the kernel size.
    pub gaussian_sigma: f32,
    /// Resampling filter for resize.
    pub resize_filter: Interpolation,
    /// Treatment of crop bounds outside the image.
    pub crop_policy: CropPolicy,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            median_kernel_size: 11,
            gaussian_kernel_size: 5,
            gaussian_sigma: 0.0,
            resize_filter: Interpolation::Bilinear,
            crop_policy: CropPolicy::Clamp,
        }
    }
}

impl ProcessingConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        debug!(path = %path.display(), ?config, "Processing config loaded");
        Ok(config)
    }

    /// Check that kernel sizes are odd and at most [`MAX_KERNEL_SIZE`], and
    /// that sigma is usable.
    pub fn validate(&self) -> Result<()> {
        check_odd_kernel("median_kernel_size", self.median_kernel_size)?;
        check_odd_kernel("gaussian_kernel_size", self.gaussian_kernel_size)?;
        if !self.gaussian_sigma.is_finite() || self.gaussian_sigma < 0.0 {
            return Err(ImagingError::Config(format!(
                "gaussian_sigma must be a non-negative finite number, got {}",
                self.gaussian_sigma
            )));
        }
        Ok(())
    }
}

fn check_odd_kernel(name: &str, size: u32) -> Result<()> {
    if size == 0 || size % 2 == 0 || size > MAX_KERNEL_SIZE {
        return Err(ImagingError::Config(format!(
            "{name} must be an odd number in 1..={MAX_KERNEL_SIZE}, got {size}"
        )));
    }
    Ok(())
}
