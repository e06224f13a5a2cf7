//! Classification pipeline glue.
//!
//! Wires the stages together: candidate extraction -> shape features ->
//! finger estimation -> gesture mapping. Algorithmic primitives live in
//! their own modules; this layer only fixes call order and data flow.
//!
//! The outcome keeps "no signal" honest: `Inconclusive` (nothing extracted)
//! is distinct from a classified label until the boundary collapses it into
//! the `none` wire record.

use image::GrayImage;

use crate::action::GestureLabel;
use crate::classify::classify_fingers;
use crate::config::ClassifyConfig;
use crate::extract::extract_candidate;
use crate::fingers::estimate_fingers;
use crate::shape::ShapeFeatures;

/// Internal pipeline outcome for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// A contour was selected and mapped to a label.
    Classified(GestureLabel),
    /// No qualifying foreground region was found.
    Inconclusive,
}

/// Run the full pipeline on one grayscale frame.
///
/// Pure function of the frame and config: no shared state, safe to call
/// concurrently on independent frames.
pub(crate) fn run(gray: &GrayImage, config: &ClassifyConfig) -> Outcome {
    let Some(candidate) = extract_candidate(gray, &config.extract) else {
        return Outcome::Inconclusive;
    };

    let features = ShapeFeatures::of_contour(&candidate.points, candidate.area, &config.features);
    log::debug!(
        "contour area {:.0}, aspect {:.2}, extent {:.2}, solidity {:.2}, {} approx vertices",
        features.area,
        features.aspect_ratio,
        features.extent,
        features.solidity,
        features.approx_vertices
    );

    let count = estimate_fingers(&candidate.points, &features, &config.defects);
    let label = classify_fingers(count, &features);
    log::debug!("{count} fingers -> {}", label.as_str());
    Outcome::Classified(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn blank_tiny_frame_is_inconclusive() {
        let img = GrayImage::new(16, 16);
        assert_eq!(run(&img, &ClassifyConfig::default()), Outcome::Inconclusive);
    }

    #[test]
    fn large_dark_blob_is_classified() {
        let mut img = GrayImage::from_pixel(200, 200, Luma([220]));
        for y in 60..140u32 {
            for x in 60..140u32 {
                img.put_pixel(x, y, Luma([20]));
            }
        }
        assert!(matches!(
            run(&img, &ClassifyConfig::default()),
            Outcome::Classified(_)
        ));
    }
}
