//! Image and audio payload preparation for local persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploaded photos are downscaled and re-encoded as JPEG before being stored
//! as data URLs, which keeps a 30-photo album inside typical `localStorage`
//! quotas. Audio is embedded as-is. File reading is hydrate-only; the
//! transforms themselves are plain Rust and tested natively.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{Rgb, RgbImage};

/// Longest side of a stored photo, in pixels.
pub const PHOTO_MAX_DIMENSION: u32 = 1024;

/// JPEG quality for stored photos (1-100).
pub const PHOTO_JPEG_QUALITY: u8 = 80;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("could not decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("could not encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("could not read file: {0}")]
    Read(String),
}

/// Scale `(width, height)` down so the longest side is at most `max_dim`.
/// Images already within bounds keep their size.
#[must_use]
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dim || longest == 0 {
        return (width, height);
    }
    let scale = f64::from(max_dim) / f64::from(longest);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Decode an uploaded image and return a downscaled JPEG data URL.
///
/// Transparent pixels are flattened onto white so they do not turn black.
///
/// # Errors
///
/// Returns [`MediaError::Decode`] for unreadable input and
/// [`MediaError::Encode`] if JPEG encoding fails.
pub fn photo_data_url(bytes: &[u8]) -> Result<String, MediaError> {
    let decoded = image::load_from_memory(bytes).map_err(MediaError::Decode)?;
    let (width, height) = fit_within(decoded.width(), decoded.height(), PHOTO_MAX_DIMENSION);
    let resized = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };
    let flattened = flatten_on_white(&resized.to_rgba8());

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut Cursor::new(&mut jpeg), PHOTO_JPEG_QUALITY)
        .encode_image(&flattened)
        .map_err(MediaError::Encode)?;
    Ok(data_url("image/jpeg", &jpeg))
}

fn flatten_on_white(rgba: &image::RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            #[allow(clippy::cast_possible_truncation)]
            let out = ((c * a + 255 * (255 - a)) / 255) as u8;
            out
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Embed an uploaded audio file. An empty MIME type falls back to
/// `application/octet-stream`.
#[must_use]
pub fn audio_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { "application/octet-stream" } else { mime.trim() };
    data_url(mime, bytes)
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read the full contents of a picked file.
///
/// # Errors
///
/// Returns [`MediaError::Read`] when the browser fails to read the blob.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, MediaError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| MediaError::Read(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Drain the picked files from a file input and clear it so the same file
/// can be picked again.
#[cfg(feature = "hydrate")]
pub fn take_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// `blob:` URL for immediate playback of a picked file.
#[cfg(feature = "hydrate")]
pub fn object_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release a URL from [`object_url`]. Other URLs are ignored.
#[cfg(feature = "hydrate")]
pub fn revoke_object_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
