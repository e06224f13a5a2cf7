//! handsign — heuristic single-frame hand-gesture classifier.
//!
//! Classifies one still frame into a small fixed set of hand-gesture labels,
//! each mapped to an application action (open a chat panel, switch to the
//! privileged view, mark attendance). The pipeline stages are:
//!
//! 1. **Decode** – encoded bytes (optionally a base64 data-URI payload) to a
//!    grayscale raster.
//! 2. **Extract** – competing threshold strategies produce candidate
//!    foreground masks; external contours are filtered by area and the
//!    largest qualifying contour is selected.
//! 3. **Shape** – geometric descriptors of the selected contour (aspect
//!    ratio, extent, solidity, polygon-approximation vertex count).
//! 4. **Fingers** – convexity-defect finger counting with a shape-feature
//!    fallback when defect counting is unavailable.
//! 5. **Classify** – finger count (plus an aspect-ratio tie-break) to a
//!    gesture label, resolved into the wire-level action record.
//!
//! Every stage is a pure function of one frame: no caching, no cross-frame
//! state, so independent frames can be classified in parallel. Noisy or
//! undecodable input soft-fails to [`GestureLabel::None`]; the pipeline never
//! raises on expected bad input.
//!
//! # Public API
//! - [`Classifier`] as the primary entry point
//! - [`ClassifyConfig`] for threshold tuning
//! - [`ActionSignal`] / [`GestureLabel`] as the result types

mod action;
mod api;
mod classify;
mod config;
mod decode;
mod extract;
mod fingers;
mod pipeline;
mod shape;

pub use action::{ActionSignal, GestureLabel};
pub use api::Classifier;
pub use config::{ClassifyConfig, DefectConfig, ExtractConfig, FeatureConfig};
pub use shape::ShapeFeatures;
