// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Denoising blurs: median via `imageproc`, Gaussian as two separable passes
// over an `f32` buffer with the same mirrored border as the 3x3 kernels.

use bildwerk_core::config::MAX_KERNEL_SIZE;
use bildwerk_core::{ImagingError, Result};
use image::{Rgb, Rgb32FImage, RgbImage};
use imageproc::filter::median_filter;
use tracing::debug;

use super::kernel::{reflect_101, saturate_u8};

/// Replace every sample with the median of its `size` x `size` neighbourhood,
/// channel by channel. `size` must be odd.
pub fn median_blur(image: &RgbImage, size: u32) -> Result<RgbImage> {
    check_odd("median kernel size", size)?;
    let radius = size / 2;
    Ok(median_filter(image, radius, radius))
}

/// Blur with a separable `size` x `size` Gaussian.
///
/// A `sigma` of zero (or below) is derived from `size`; see [`gaussian_kernel`].
/// Both passes accumulate in `f32` and the result is rounded once at the end.
pub fn gaussian_blur(image: &RgbImage, size: u32, sigma: f32) -> Result<RgbImage> {
    check_odd("gaussian kernel size", size)?;
    let kernel = gaussian_kernel(size, sigma);
    debug!(size, sigma, ?kernel, "Gaussian kernel built");

    let (width, height) = image.dimensions();
    let radius = (kernel.len() / 2) as i64;

    let horizontal = Rgb32FImage::from_fn(width, height, |x, y| {
        let mut acc = [0.0f32; 3];
        for (k, weight) in kernel.iter().enumerate() {
            let sx = reflect_101(x as i64 + k as i64 - radius, width);
            for (channel, value) in acc.iter_mut().zip(image.get_pixel(sx, y).0) {
                *channel += weight * value as f32;
            }
        }
        Rgb(acc)
    });

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let mut acc = [0.0f32; 3];
        for (k, weight) in kernel.iter().enumerate() {
            let sy = reflect_101(y as i64 + k as i64 - radius, height);
            for (channel, value) in acc.iter_mut().zip(horizontal.get_pixel(x, sy).0) {
                *channel += weight * value;
            }
        }
        Rgb(acc.map(saturate_u8))
    }))
}

/// Build a normalised 1-D Gaussian kernel of odd length `size`.
///
/// With `sigma <= 0` the standard deviation is `0.3 * ((size - 1) * 0.5 - 1) + 0.8`,
/// and for sizes up to 7 the exact binomial weights are returned instead of
/// sampling the continuous curve.
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        if let Some(weights) = binomial_weights(size) {
            return weights.to_vec();
        }
    }

    let sigma = if sigma > 0.0 { sigma } else { auto_sigma(size) };
    let half = i64::from(size / 2);
    let scale = -0.5 / (sigma * sigma);

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| {
            let offset = i as f32;
            (offset * offset * scale).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }
    kernel
}

fn auto_sigma(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

fn binomial_weights(size: u32) -> Option<&'static [f32]> {
    match size {
        1 => Some(&[1.0]),
        3 => Some(&[0.25, 0.5, 0.25]),
        5 => Some(&[0.0625, 0.25, 0.375, 0.25, 0.0625]),
        7 => Some(&[
            0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
        ]),
        _ => None,
    }
}

fn check_odd(what: &str, size: u32) -> Result<()> {
    if size == 0 || size % 2 == 0 || size > MAX_KERNEL_SIZE {
        return Err(ImagingError::InvalidParameter(format!(
            "{what} must be an odd number in 1..={MAX_KERNEL_SIZE}, got {size}"
        )));
    }
    Ok(())
}
