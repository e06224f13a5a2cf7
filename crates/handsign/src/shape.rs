//! Geometric shape descriptors of a selected contour.

use imageproc::geometry::{approximate_polygon_dp, arc_length, convex_hull};
use imageproc::point::Point;

use crate::config::FeatureConfig;

/// Immutable descriptor bundle computed once per classification call.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ShapeFeatures {
    /// Contour area (px²).
    pub area: f64,
    /// Bounding-box width (px).
    pub bounding_w: u32,
    /// Bounding-box height (px).
    pub bounding_h: u32,
    /// bounding_w / bounding_h.
    pub aspect_ratio: f64,
    /// area / (bounding_w * bounding_h), in [0, 1].
    pub extent: f64,
    /// area / convex hull area, in [0, 1]; 0 when the hull is degenerate.
    pub solidity: f64,
    /// Vertex count of the Douglas-Peucker polygon approximation.
    pub approx_vertices: usize,
}

impl ShapeFeatures {
    /// Compute the descriptor bundle for a contour with a known area.
    ///
    /// Degenerate contours (empty, collinear) produce zeroed features rather
    /// than an error.
    pub fn of_contour(points: &[Point<i32>], area: f64, cfg: &FeatureConfig) -> Self {
        if points.is_empty() {
            return Self::default();
        }

        let (mut min_x, mut min_y) = (points[0].x, points[0].y);
        let (mut max_x, mut max_y) = (min_x, min_y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let bounding_w = (max_x - min_x + 1) as u32;
        let bounding_h = (max_y - min_y + 1) as u32;
        let aspect_ratio = f64::from(bounding_w) / f64::from(bounding_h);
        let bbox_area = f64::from(bounding_w) * f64::from(bounding_h);
        let extent = (area / bbox_area).clamp(0.0, 1.0);

        let hull = convex_hull(points);
        let hull_area = contour_area(&hull);
        let solidity = if hull_area > 0.0 {
            (area / hull_area).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let approx_vertices = if points.len() < 3 {
            points.len()
        } else {
            // Zero-perimeter contours (coincident points) admit no
            // approximation; the Douglas-Peucker epsilon must stay positive.
            let epsilon = cfg.epsilon_frac * arc_length(points, true);
            if epsilon > 0.0 {
                approximate_polygon_dp(points, epsilon, true).len()
            } else {
                points.len()
            }
        };

        Self {
            area,
            bounding_w,
            bounding_h,
            aspect_ratio,
            extent,
            solidity,
            approx_vertices,
        }
    }
}

/// Polygon area by the shoelace formula.
pub(crate) fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        acc += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    (acc.abs() as f64) * 0.5
}
