// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests: write fixtures to a temporary directory, run every
// operation through its path-based entry point.

use std::path::{Path, PathBuf};

use bildwerk_core::logging::init_logging;
use bildwerk_core::{ColorMode, CropPolicy, CropRegion, ImagingError, ProcessingConfig};
use bildwerk_imaging::filter::laplacian_to_display;
use bildwerk_imaging::ops::run_logged;
use bildwerk_imaging::{
    ImageOperation, adjust_brightness_contrast, crop, gaussian_denoise, grayscale_conversion,
    load, median_denoise, resize, sharpen_kernel, sharpen_laplacian,
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

const WIDTH: u32 = 48;
const HEIGHT: u32 = 32;

/// Write a colourful RGB PNG fixture and return its path.
fn color_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("fixture.png");
    RgbImage::from_fn(WIDTH, HEIGHT, |x, y| {
        Rgb([(x * 5) as u8, (y * 7) as u8, ((x * y) % 251) as u8])
    })
    .save(&path)
    .expect("write color fixture");
    path
}

fn setup() -> (TempDir, PathBuf) {
    init_logging("debug");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = color_fixture(&dir);
    (dir, path)
}

fn color_source(path: &Path) -> RgbImage {
    load(path, ColorMode::Color)
        .expect("fixture loads")
        .into_rgb8()
}

#[test]
fn grayscale_conversion_keeps_extent_with_one_channel() {
    let (_dir, path) = setup();
    let gray = grayscale_conversion(&path).expect("grayscale succeeds");
    assert_eq!(gray.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(gray.as_raw().len(), (WIDTH * HEIGHT) as usize);
}

#[test]
fn grayscale_conversion_weights_primaries_bt601() {
    init_logging("debug");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("primaries.png");
    RgbImage::from_fn(3, 2, |x, _| match x {
        0 => Rgb([255, 0, 0]),
        1 => Rgb([0, 255, 0]),
        _ => Rgb([0, 0, 255]),
    })
    .save(&path)
    .expect("write primaries fixture");

    let gray = grayscale_conversion(&path).expect("grayscale succeeds");
    for y in 0..2 {
        assert_eq!(gray.get_pixel(0, y).0, [76]);
        assert_eq!(gray.get_pixel(1, y).0, [150]);
        assert_eq!(gray.get_pixel(2, y).0, [29]);
    }
}

#[test]
fn neutral_brightness_contrast_is_pixel_identical() {
    let (_dir, path) = setup();
    let adjusted = adjust_brightness_contrast(&path, 0.0, 1.0).expect("adjust succeeds");
    assert_eq!(adjusted, color_source(&path));
}

#[test]
fn brightening_never_darkens() {
    let (_dir, path) = setup();
    let source = color_source(&path);
    let adjusted = adjust_brightness_contrast(&path, 25.0, 1.0).expect("adjust succeeds");
    assert!(
        source
            .as_raw()
            .iter()
            .zip(adjusted.as_raw())
            .all(|(before, after)| after >= before)
    );
}

#[test]
fn smoothing_and_sharpening_preserve_shape() {
    let (_dir, path) = setup();
    for (name, output) in [
        ("sharpen_kernel", sharpen_kernel(&path)),
        ("median_denoise", median_denoise(&path)),
        ("gaussian_denoise", gaussian_denoise(&path)),
    ] {
        let image = output.unwrap_or_else(|| panic!("{name} failed"));
        assert_eq!(image.dimensions(), (WIDTH, HEIGHT), "{name}");
    }
}

#[test]
fn laplacian_is_signed_and_rescalable() {
    let (_dir, path) = setup();
    let signed = sharpen_laplacian(&path).expect("laplacian succeeds");
    assert_eq!(signed.dimensions(), (WIDTH, HEIGHT));
    assert!(signed.as_raw().iter().any(|v| *v < 0.0));

    let display = laplacian_to_display(&signed);
    assert_eq!(display.dimensions(), (WIDTH, HEIGHT));
}

#[test]
fn resize_matches_requested_extent() {
    let (_dir, path) = setup();
    for (w, h) in [(10, 90), (96, 64), (1, 1)] {
        let resized = resize(&path, w, h).expect("resize succeeds");
        assert_eq!(resized.dimensions(), (w, h));
    }
    assert!(resize(&path, 0, 5).is_none());
}

#[test]
fn full_frame_crop_is_identity() {
    let (_dir, path) = setup();
    let cropped = crop(&path, 0, WIDTH, 0, HEIGHT).expect("crop succeeds");
    assert_eq!(cropped, color_source(&path));
}

#[test]
fn oversized_crop_is_clamped_by_default() {
    let (_dir, path) = setup();
    let cropped = crop(&path, 40, 1000, 20, 1000).expect("crop succeeds");
    assert_eq!(cropped.dimensions(), (WIDTH - 40, HEIGHT - 20));
    assert!(crop(&path, 30, 10, 0, HEIGHT).is_none());
}

#[test]
fn strict_crop_surfaces_a_parameter_error() {
    let (_dir, path) = setup();
    let config = ProcessingConfig {
        crop_policy: CropPolicy::Strict,
        ..Default::default()
    };
    let err = ImageOperation::Crop(CropRegion::new(0, WIDTH + 1, 0, HEIGHT))
        .execute(&path, &config)
        .unwrap_err();
    assert!(matches!(err, ImagingError::InvalidParameter(_)));
}

#[test]
fn alpha_is_dropped_on_color_load() {
    init_logging("debug");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("translucent.png");
    RgbaImage::from_pixel(5, 5, Rgba([200, 100, 50, 10]))
        .save(&path)
        .expect("write rgba fixture");

    let sharpened = sharpen_kernel(&path).expect("sharpen succeeds");
    assert_eq!(sharpened.get_pixel(2, 2).0, [200, 100, 50]);
}

#[test]
fn corrupt_file_yields_none_and_load_error() {
    init_logging("debug");
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").expect("write corrupt file");

    assert!(grayscale_conversion(&path).is_none());
    let err = ImageOperation::MedianDenoise
        .execute(&path, &ProcessingConfig::default())
        .unwrap_err();
    assert!(err.is_load_failure());
}

#[test]
fn oversized_gaussian_window_is_logged_not_panicked() {
    let (_dir, path) = setup();
    let config = ProcessingConfig {
        gaussian_kernel_size: 100_001,
        ..Default::default()
    };
    assert!(run_logged(ImageOperation::GaussianDenoise, &path, &config).is_none());

    let err = ImageOperation::GaussianDenoise
        .execute(&path, &config)
        .unwrap_err();
    assert!(matches!(err, ImagingError::Config(_)));
}

#[test]
fn configured_median_window_is_honoured() {
    let (_dir, path) = setup();
    let config = ProcessingConfig::from_json_str(r#"{ "median_kernel_size": 3 }"#)
        .expect("valid config");
    let output = ImageOperation::MedianDenoise
        .execute(&path, &config)
        .expect("median succeeds");
    assert_eq!(output.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(output.channel_count(), 3);
}
