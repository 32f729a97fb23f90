// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 3x3 kernel filtering on color images: sharpening and the Laplacian edge
// operator. Borders are extended by reflection without repeating the edge
// sample (`dcb|abcd|cba`), so the output always matches the input size.

use image::{Rgb, Rgb32FImage, RgbImage};

/// Sharpening kernel: identity plus a negative 4-neighbour Laplacian.
pub const SHARPEN_KERNEL: [f32; 9] = [
    0.0, -1.0, 0.0, //
    -1.0, 5.0, -1.0, //
    0.0, -1.0, 0.0,
];

/// 4-neighbour second-derivative operator.
pub const LAPLACIAN_KERNEL: [f32; 9] = [
    0.0, 1.0, 0.0, //
    1.0, -4.0, 1.0, //
    0.0, 1.0, 0.0,
];

/// Correlate every channel of `image` with a row-major 3x3 `kernel`.
///
/// The result keeps full `f32` precision and sign; callers decide how to bring
/// it back into the 8-bit range.
pub fn convolve3x3(image: &RgbImage, kernel: &[f32; 9]) -> Rgb32FImage {
    let (width, height) = image.dimensions();

    Rgb32FImage::from_fn(width, height, |x, y| {
        let mut acc = [0.0f32; 3];
        for ky in 0..3u32 {
            let sy = reflect_101(y as i64 + ky as i64 - 1, height);
            for kx in 0..3u32 {
                let weight = kernel[(ky * 3 + kx) as usize];
                if weight == 0.0 {
                    continue;
                }
                let sx = reflect_101(x as i64 + kx as i64 - 1, width);
                let sample = image.get_pixel(sx, sy);
                for (channel, value) in acc.iter_mut().zip(sample.0) {
                    *channel += weight * value as f32;
                }
            }
        }
        Rgb(acc)
    })
}

/// Sharpen with [`SHARPEN_KERNEL`], saturating back to 8 bits.
pub fn sharpen(image: &RgbImage) -> RgbImage {
    let filtered = convolve3x3(image, &SHARPEN_KERNEL);
    let (width, height) = filtered.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        Rgb(filtered.get_pixel(x, y).0.map(saturate_u8))
    })
}

/// Apply [`LAPLACIAN_KERNEL`]. Output is signed and spans roughly
/// `-1020.0..=1020.0`; use [`laplacian_to_display`] to view it.
pub fn laplacian(image: &RgbImage) -> Rgb32FImage {
    convolve3x3(image, &LAPLACIAN_KERNEL)
}

/// Take the absolute value of a signed response and saturate it to 8 bits.
pub fn laplacian_to_display(signed: &Rgb32FImage) -> RgbImage {
    let (width, height) = signed.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        Rgb(signed.get_pixel(x, y).0.map(|v| saturate_u8(v.abs())))
    })
}

/// Round to nearest, ties to even, and clamp into `0..=255`.
pub(crate) fn saturate_u8(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Map an out-of-range `index` back into `0..len` by mirroring about the edge
/// samples. Offsets wider than the image keep bouncing until they land inside.
pub(crate) fn reflect_101(index: i64, len: u32) -> u32 {
    let len = len as i64;
    if len <= 1 {
        return 0;
    }
    let mut index = index;
    while index < 0 || index >= len {
        index = if index < 0 { -index } else { 2 * len - 2 - index };
    }
    index as u32
}
