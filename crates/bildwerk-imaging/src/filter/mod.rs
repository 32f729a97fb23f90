// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filters — tone mapping and luma, 3x3 kernel convolution (sharpen, Laplacian) and
// blurs (median, Gaussian).

pub mod blur;
pub mod kernel;
pub mod tone;

pub use blur::{gaussian_blur, gaussian_kernel, median_blur};
pub use kernel::{convolve3x3, laplacian, laplacian_to_display, sharpen};
pub use tone::{brightness_contrast, luma_bt601};
