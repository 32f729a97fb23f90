// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-sample tone mapping and luma conversion.

use image::{GrayImage, Luma, RgbImage};

use super::kernel::saturate_u8;

/// Apply `out = contrast * in + brightness` to every sample, rounding and
/// saturating to `0..=255`. `contrast = 1.0, brightness = 0.0` is the identity.
pub fn brightness_contrast(mut image: RgbImage, brightness: f32, contrast: f32) -> RgbImage {
    for sample in image.iter_mut() {
        *sample = saturate_u8(contrast * *sample as f32 + brightness);
    }
    image
}

/// BT.601 luma weights in 14-bit fixed point (0.299, 0.587, 0.114).
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_SHIFT: u32 = 14;

/// Convert to single-channel luma with the BT.601 weights, rounded to nearest.
pub fn luma_bt601(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let weighted = LUMA_R * u32::from(r) + LUMA_G * u32::from(g) + LUMA_B * u32::from(b);
        Luma([((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8])
    })
}
