//! High-level classification API.
//!
//! [`Classifier`] is the primary entry point. It wraps a [`ClassifyConfig`]
//! and provides convenience methods for the common input forms: a decoded
//! grayscale frame, raw encoded bytes, or a base64/data-URI text payload.

use image::GrayImage;
use std::path::Path;

use crate::action::ActionSignal;
use crate::config::ClassifyConfig;
use crate::decode;
use crate::pipeline::{self, Outcome};

/// Primary classification interface.
///
/// Encapsulates the pipeline configuration. Create once, classify many
/// frames; each call is stateless and safe to run in parallel with others.
///
/// # Examples
///
/// ```
/// use handsign::Classifier;
/// use image::GrayImage;
///
/// let classifier = Classifier::new();
/// let frame = GrayImage::new(640, 480);
/// let signal = classifier.classify_image(&frame);
/// println!("gesture: {}", signal.gesture.as_str());
/// ```
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    /// Create a classifier with the reference configuration.
    pub fn new() -> Self {
        Self {
            config: ClassifyConfig::default(),
        }
    }

    /// Create with full config control.
    pub fn with_config(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Load a JSON config file and create a classifier in one step.
    pub fn from_config_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config: ClassifyConfig = serde_json::from_str(&raw)?;
        Ok(Self::with_config(config))
    }

    /// Access the current configuration.
    pub fn config(&self) -> &ClassifyConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut ClassifyConfig {
        &mut self.config
    }

    /// Classify a decoded grayscale frame.
    pub fn classify_image(&self, gray: &GrayImage) -> ActionSignal {
        match pipeline::run(gray, &self.config) {
            Outcome::Classified(label) => ActionSignal::resolve(label),
            Outcome::Inconclusive => ActionSignal::none(),
        }
    }

    /// Classify raw encoded image bytes.
    ///
    /// Empty or undecodable buffers soft-fail to the `none` record.
    pub fn classify_bytes(&self, bytes: &[u8]) -> ActionSignal {
        match decode::decode_bytes(bytes) {
            Some(gray) => self.classify_image(&gray),
            None => ActionSignal::none(),
        }
    }

    /// Classify a text payload of the form `<header>,<base64>` (or bare
    /// base64), the wire form delivered by the application boundary.
    pub fn classify_payload(&self, payload: &str) -> ActionSignal {
        match decode::decode_payload(payload) {
            Some(gray) => self.classify_image(&gray),
            None => ActionSignal::none(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
