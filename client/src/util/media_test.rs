use image::{ImageFormat, Rgba, RgbaImage};

use super::*;

fn png_bytes(width: u32, height: u32, pixel: Rgba<u8>) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, pixel);
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).expect("png encode");
    out
}

fn decode_data_url(url: &str) -> image::DynamicImage {
    let payload = url.strip_prefix("data:image/jpeg;base64,").expect("jpeg data url");
    let bytes = STANDARD.decode(payload).expect("base64");
    image::load_from_memory(&bytes).expect("jpeg decode")
}

// =============================================================
// fit_within
// =============================================================

#[test]
fn fit_within_keeps_small_images() {
    assert_eq!(fit_within(800, 600, 1024), (800, 600));
    assert_eq!(fit_within(1024, 1024, 1024), (1024, 1024));
}

#[test]
fn fit_within_scales_longest_side() {
    assert_eq!(fit_within(2048, 1024, 1024), (1024, 512));
    assert_eq!(fit_within(1000, 3000, 1024), (341, 1024));
}

#[test]
fn fit_within_never_collapses_to_zero() {
    assert_eq!(fit_within(5000, 1, 1024), (1024, 1));
}

// =============================================================
// photo_data_url
// =============================================================

#[test]
fn photo_data_url_downscales_large_image() {
    let url = photo_data_url(&png_bytes(2048, 1024, Rgba([10, 20, 30, 255]))).expect("photo");
    let img = decode_data_url(&url);
    assert_eq!((img.width(), img.height()), (1024, 512));
}

#[test]
fn photo_data_url_keeps_small_image_size() {
    let url = photo_data_url(&png_bytes(40, 30, Rgba([200, 0, 0, 255]))).expect("photo");
    let img = decode_data_url(&url);
    assert_eq!((img.width(), img.height()), (40, 30));
}

#[test]
fn photo_data_url_flattens_transparency_onto_white() {
    let url = photo_data_url(&png_bytes(16, 16, Rgba([0, 0, 0, 0]))).expect("photo");
    let pixel = decode_data_url(&url).to_rgb8().get_pixel(8, 8).0;
    assert!(pixel.iter().all(|c| *c > 240), "pixel = {pixel:?}");
}

#[test]
fn photo_data_url_rejects_non_images() {
    let err = photo_data_url(b"definitely not an image").expect_err("decode error");
    assert!(matches!(err, MediaError::Decode(_)));
}

// =============================================================
// audio_data_url
// =============================================================

#[test]
fn audio_data_url_embeds_bytes() {
    assert_eq!(audio_data_url("audio/mpeg", b"abc"), "data:audio/mpeg;base64,YWJj");
}

#[test]
fn audio_data_url_defaults_missing_mime() {
    assert_eq!(audio_data_url("  ", b""), "data:application/octet-stream;base64,");
}
