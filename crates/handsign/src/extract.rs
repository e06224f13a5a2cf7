//! Candidate foreground extraction.
//!
//! Locates the most plausible hand-shaped region despite unknown lighting
//! and background. Several independent mask strategies run in a fixed
//! priority order; the first strategy that yields at least one contour above
//! the minimum area wins and later strategies are never consulted. The
//! largest qualifying contour of the winning strategy becomes the contour of
//! record.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;
use imageproc::point::Point;

use crate::config::ExtractConfig;
use crate::shape::contour_area;

/// The selected foreground contour and its area.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    /// Boundary points of the contour, in walk order.
    pub points: Vec<Point<i32>>,
    /// Contour area (px²).
    pub area: f64,
}

type MaskFn = fn(&GrayImage, &ExtractConfig) -> GrayImage;

/// Mask strategies in priority order; first qualifying result wins.
const STRATEGIES: [(&str, MaskFn); 3] = [
    ("adaptive_local", adaptive_local_mask),
    ("global_bimodal", global_bimodal_mask),
    ("brightness_fixed", brightness_fixed_mask),
];

/// Locally-normalized binarization after a wide pre-blur: foreground is
/// whatever sits below its own neighborhood mean by at least the offset.
fn adaptive_local_mask(gray: &GrayImage, cfg: &ExtractConfig) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, cfg.adaptive_pre_sigma);
    let local_mean = gaussian_blur_f32(&blurred, cfg.local_mean_sigma);
    let (w, h) = gray.dimensions();
    let offset = i16::from(cfg.local_mean_offset);
    let data: Vec<u8> = blurred
        .as_raw()
        .iter()
        .zip(local_mean.as_raw())
        .map(|(&px, &mean)| {
            if i16::from(px) < i16::from(mean) - offset {
                255
            } else {
                0
            }
        })
        .collect();
    GrayImage::from_raw(w, h, data).expect("mask dimensions match source")
}

/// Global bimodal (Otsu) thresholding after its own blur radius, inverted so
/// dark regions become foreground.
fn global_bimodal_mask(gray: &GrayImage, cfg: &ExtractConfig) -> GrayImage {
    let blurred = gaussian_blur_f32(gray, cfg.bimodal_sigma);
    let level = otsu_level(&blurred);
    threshold(&blurred, level, ThresholdType::BinaryInverted)
}

/// Brightness-adaptive fixed threshold `clamp(mean * factor, floor, ceiling)`.
fn brightness_fixed_mask(gray: &GrayImage, cfg: &ExtractConfig) -> GrayImage {
    let raw = gray.as_raw();
    let mean = if raw.is_empty() {
        0.0
    } else {
        raw.iter().map(|&v| f32::from(v)).sum::<f32>() / raw.len() as f32
    };
    let level = (mean * cfg.fixed_mean_factor).clamp(cfg.fixed_floor, cfg.fixed_ceiling);
    threshold(gray, level as u8, ThresholdType::BinaryInverted)
}

/// External contours of a binary mask, with their areas.
fn external_contours(mask: &GrayImage) -> Vec<(Vec<Point<i32>>, f64)> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let area = contour_area(&c.points);
            (c.points, area)
        })
        .collect()
}

/// Run the strategy ladder and select the contour of record.
///
/// Returns `None` when no strategy yields a contour above `min_area_px`.
pub(crate) fn extract_candidate(gray: &GrayImage, cfg: &ExtractConfig) -> Option<Candidate> {
    let (w, h) = gray.dimensions();
    if w < 4 || h < 4 {
        return None;
    }

    for (name, strategy) in STRATEGIES {
        let mask = strategy(gray, cfg);
        let qualifying: Vec<_> = external_contours(&mask)
            .into_iter()
            .filter(|(_, area)| *area > cfg.min_area_px)
            .collect();
        if qualifying.is_empty() {
            continue;
        }
        log::debug!(
            "strategy {name} produced {} qualifying contours",
            qualifying.len()
        );

        let (points, area) = qualifying
            .into_iter()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))?;
        // The winner still has to clear the minimum on its own.
        if area <= cfg.min_area_px {
            return None;
        }
        return Some(Candidate { points, area });
    }

    log::debug!("no strategy yielded a qualifying contour");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Bright background with a dark axis-aligned blob.
    fn blob_image(w: u32, h: u32, x0: u32, y0: u32, bw: u32, bh: u32) -> GrayImage {
        let mut img = GrayImage::new(w, h);
        for (x, y, px) in img.enumerate_pixels_mut() {
            let inside = x >= x0 && x < x0 + bw && y >= y0 && y < y0 + bh;
            *px = Luma([if inside { 20 } else { 220 }]);
        }
        img
    }

    #[test]
    fn dark_blob_is_extracted() {
        let img = blob_image(200, 200, 60, 60, 80, 80);
        let candidate =
            extract_candidate(&img, &ExtractConfig::default()).expect("blob qualifies");
        assert!(candidate.area > 2000.0, "area {}", candidate.area);
        // The contour of record stays within the blob's footprint.
        assert!(candidate.area < 80.0 * 80.0 + 1.0);
    }

    #[test]
    fn tiny_frame_cannot_qualify() {
        // Any contour in a 16x16 frame is far below the minimum area.
        let img = blob_image(16, 16, 4, 4, 8, 8);
        assert!(extract_candidate(&img, &ExtractConfig::default()).is_none());
    }

    #[test]
    fn degenerate_frame_soft_fails() {
        let img = GrayImage::new(2, 2);
        assert!(extract_candidate(&img, &ExtractConfig::default()).is_none());
    }

    #[test]
    fn lowered_min_area_admits_small_blobs() {
        let img = blob_image(64, 64, 16, 16, 24, 24);
        let cfg = ExtractConfig {
            min_area_px: 100.0,
            ..Default::default()
        };
        assert!(extract_candidate(&img, &cfg).is_some());
    }

    #[test]
    fn largest_contour_wins() {
        let mut img = blob_image(300, 200, 20, 40, 60, 60);
        // Second, larger blob to the right.
        for y in 40..160u32 {
            for x in 150..270u32 {
                img.put_pixel(x, y, Luma([20]));
            }
        }
        let candidate =
            extract_candidate(&img, &ExtractConfig::default()).expect("blobs qualify");
        assert!(
            candidate.area > 60.0 * 60.0,
            "expected the larger blob, got area {}",
            candidate.area
        );
    }
}
