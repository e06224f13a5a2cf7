//! Frame decoding.
//!
//! Turns the boundary payload (raw encoded bytes, or a `<header>,<base64>`
//! data-URI text payload) into a grayscale raster. All failure modes —
//! empty buffer, malformed base64, undecodable bytes, zero-dimension frames —
//! soft-fail to `None` per the boundary contract; decoding never errors.

use base64::Engine as _;
use image::GrayImage;

/// Decode a text payload of the form `<header>,<base64>` (or bare base64).
///
/// Everything up to and including the first comma is discarded.
pub(crate) fn decode_payload(payload: &str) -> Option<GrayImage> {
    let encoded = payload
        .split_once(',')
        .map_or(payload, |(_, rest)| rest)
        .trim();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .ok()?;
    decode_bytes(&bytes)
}

/// Decode raw encoded image bytes to grayscale.
pub(crate) fn decode_bytes(bytes: &[u8]) -> Option<GrayImage> {
    if bytes.is_empty() {
        return None;
    }
    let decoded = image::load_from_memory(bytes).ok()?;
    let gray = decoded.to_luma8();
    if gray.width() == 0 || gray.height() == 0 {
        log::debug!("decoded frame has zero dimensions");
        return None;
    }
    Some(gray)
}
