//! Finger-count estimation.
//!
//! Primary path: convexity defects of the contour against its hull — each
//! gap between raised fingers dips inward from the hull, so deep defects are
//! a proxy for finger gaps. Precise, but undefined on degenerate contours
//! (too few hull vertices, no defect candidates at all). The fallback path
//! derives a coarser count purely from the shape-feature bundle and is
//! always defined. The estimate is an integer in [0, 5].

use imageproc::point::Point;

use crate::config::DefectConfig;
use crate::shape::ShapeFeatures;

/// Defect depths are gated in 1/256-px fixed-point units, the convention the
/// reference gate constants were tuned in.
const DEPTH_UNITS_PER_PX: f64 = 256.0;

/// Estimate the finger count, trying defects first and falling back to shape
/// analysis when defect counting is unavailable.
pub(crate) fn estimate_fingers(
    points: &[Point<i32>],
    features: &ShapeFeatures,
    cfg: &DefectConfig,
) -> u8 {
    match defect_count(points, features.area, cfg) {
        Some(count) => count,
        None => {
            let count = fallback_count(features);
            log::debug!("fallback shape analysis estimated {count} fingers");
            count
        }
    }
}

/// Count fingers from convexity defects.
///
/// Returns `None` when the hull is degenerate or no defect candidate exists,
/// which hands control to the fallback. Otherwise the count is the number of
/// defects deeper than the adaptive gate, plus one, capped at 5.
fn defect_count(points: &[Point<i32>], area: f64, cfg: &DefectConfig) -> Option<u8> {
    if points.len() < 4 {
        return None;
    }
    let mut hull = hull_indices(points);
    if hull.len() < 4 {
        return None;
    }
    let depths = defect_depths(points, &mut hull);
    if depths.is_empty() {
        return None;
    }

    let gate = cfg.depth_floor.max(area * cfg.depth_area_frac);
    let passing = depths
        .iter()
        .filter(|&&d| d * DEPTH_UNITS_PER_PX > gate)
        .count();
    log::debug!(
        "{} defect candidates, {passing} above gate {gate:.0}",
        depths.len()
    );
    Some((passing + 1).min(5) as u8)
}

/// Shape-feature fallback: fixed decision ladder over the descriptor bundle.
fn fallback_count(f: &ShapeFeatures) -> u8 {
    if f.solidity > 0.8 && f.aspect_ratio > 0.7 {
        // Compact, square-ish shape: closed fist.
        5
    } else if f.solidity < 0.6 && f.extent < 0.6 {
        // Low fill, spread shape: few fingers; wide favors two.
        if f.aspect_ratio > 1.2 {
            2
        } else {
            1
        }
    } else if f.approx_vertices >= 8 {
        ((f.approx_vertices / 3).clamp(1, 3)) as u8
    } else {
        1
    }
}

/// Convex hull of the contour, as indices into `points`, via monotone chain.
fn hull_indices(points: &[Point<i32>]) -> Vec<usize> {
    let cross = |o: Point<i32>, a: Point<i32>, b: Point<i32>| -> i64 {
        i64::from(a.x - o.x) * i64::from(b.y - o.y) - i64::from(a.y - o.y) * i64::from(b.x - o.x)
    };

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| (points[i].x, points[i].y));
    order.dedup_by(|a, b| points[*a] == points[*b]);
    if order.len() < 3 {
        return order;
    }

    let mut hull: Vec<usize> = Vec::with_capacity(order.len() + 1);
    for &i in &order {
        while hull.len() >= 2
            && cross(points[hull[hull.len() - 2]], points[hull[hull.len() - 1]], points[i]) <= 0
        {
            hull.pop();
        }
        hull.push(i);
    }
    let lower_len = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(points[hull[hull.len() - 2]], points[hull[hull.len() - 1]], points[i]) <= 0
        {
            hull.pop();
        }
        hull.push(i);
    }
    hull.pop();
    hull
}

/// Deepest inward deviation of the contour for each hull edge.
///
/// Hull indices are rewalked in contour order; for every pair of hull
/// vertices the intermediate contour points are scanned for the maximum
/// perpendicular distance to the chord. Only edges with at least one
/// intermediate point contribute a candidate.
fn defect_depths(points: &[Point<i32>], hull: &mut Vec<usize>) -> Vec<f64> {
    hull.sort_unstable();
    let n = points.len();
    let mut depths = Vec::new();
    for w in 0..hull.len() {
        let i0 = hull[w];
        let i1 = hull[(w + 1) % hull.len()];
        let a = points[i0];
        let b = points[i1];
        let dx = f64::from(b.x - a.x);
        let dy = f64::from(b.y - a.y);
        let chord = (dx * dx + dy * dy).sqrt();
        if chord <= f64::EPSILON {
            continue;
        }

        let mut deepest = 0.0f64;
        let mut seen = false;
        let mut j = (i0 + 1) % n;
        while j != i1 {
            let p = points[j];
            let d = (f64::from(p.x - a.x) * dy - f64::from(p.y - a.y) * dx).abs() / chord;
            deepest = deepest.max(d);
            seen = true;
            j = (j + 1) % n;
        }
        if seen {
            depths.push(deepest);
        }
    }
    depths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureConfig;
    use crate::shape::contour_area;

    fn features_of(points: &[Point<i32>]) -> ShapeFeatures {
        ShapeFeatures::of_contour(points, contour_area(points), &FeatureConfig::default())
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Five upright prongs with deep gaps; the tips form a convex arc so each
    /// prong tip is a hull vertex and every gap becomes its own defect.
    fn five_prong_comb() -> Vec<Point<i32>> {
        pts(&[
            (0, 100),
            (0, 10),
            (12, 10),
            (12, 80),
            (20, 80),
            (20, 4),
            (32, 4),
            (32, 80),
            (40, 80),
            (40, 0),
            (52, 0),
            (52, 80),
            (60, 80),
            (60, 4),
            (72, 4),
            (72, 80),
            (80, 80),
            (80, 10),
            (92, 10),
            (92, 100),
        ])
    }

    /// Tall rectangle with one shallow notch in the top edge.
    fn notched_column() -> Vec<Point<i32>> {
        pts(&[
            (0, 100),
            (0, 0),
            (18, 0),
            (20, 2),
            (22, 0),
            (40, 0),
            (40, 100),
        ])
    }

    #[test]
    fn square_contour_has_no_defect_candidates() {
        let square = pts(&[(0, 0), (50, 0), (50, 50), (0, 50)]);
        assert_eq!(
            defect_count(&square, contour_area(&square), &DefectConfig::default()),
            None
        );
    }

    #[test]
    fn too_few_points_are_inconclusive() {
        let tri = pts(&[(0, 0), (10, 0), (5, 8)]);
        assert_eq!(defect_count(&tri, 40.0, &DefectConfig::default()), None);
    }

    #[test]
    fn comb_counts_four_gaps_as_five_fingers() {
        let comb = five_prong_comb();
        let count = defect_count(&comb, contour_area(&comb), &DefectConfig::default());
        assert_eq!(count, Some(5));
    }

    #[test]
    fn shallow_notch_stays_below_gate() {
        // One defect candidate exists but its depth never clears the gate,
        // so the estimate is a single finger (Scenario A geometry).
        let column = notched_column();
        let f = features_of(&column);
        assert!(f.aspect_ratio < 0.5, "aspect {}", f.aspect_ratio);
        assert!(f.solidity > 0.9, "solidity {}", f.solidity);
        assert_eq!(
            estimate_fingers(&column, &f, &DefectConfig::default()),
            1
        );
    }

    #[test]
    fn fallback_compact_square_is_fist() {
        let f = ShapeFeatures {
            solidity: 0.9,
            aspect_ratio: 1.0,
            extent: 0.85,
            ..Default::default()
        };
        assert_eq!(fallback_count(&f), 5);
    }

    #[test]
    fn fallback_spread_shape_width_decides() {
        let wide = ShapeFeatures {
            solidity: 0.5,
            extent: 0.5,
            aspect_ratio: 1.4,
            ..Default::default()
        };
        assert_eq!(fallback_count(&wide), 2);

        let narrow = ShapeFeatures {
            solidity: 0.5,
            extent: 0.5,
            aspect_ratio: 0.8,
            ..Default::default()
        };
        assert_eq!(fallback_count(&narrow), 1);
    }

    #[test]
    fn fallback_complex_outline_counts_vertices() {
        let f = ShapeFeatures {
            solidity: 0.7,
            extent: 0.7,
            aspect_ratio: 1.0,
            approx_vertices: 9,
            ..Default::default()
        };
        assert_eq!(fallback_count(&f), 3);

        let simple = ShapeFeatures {
            solidity: 0.7,
            extent: 0.7,
            aspect_ratio: 0.5,
            approx_vertices: 5,
            ..Default::default()
        };
        assert_eq!(fallback_count(&simple), 1);
    }

    #[test]
    fn estimate_is_always_clamped() {
        let shapes: [&[(i32, i32)]; 5] = [
            &[],
            &[(3, 3)],
            &[(0, 0), (9, 0), (9, 9)],
            &[(0, 0), (5, 5), (10, 10), (15, 15)],
            &[(0, 0), (50, 0), (50, 50), (0, 50)],
        ];
        for coords in shapes {
            let points = pts(coords);
            let f = features_of(&points);
            let count = estimate_fingers(&points, &f, &DefectConfig::default());
            assert!(count <= 5, "count {count} out of range");
        }

        let comb = five_prong_comb();
        let f = features_of(&comb);
        assert!(estimate_fingers(&comb, &f, &DefectConfig::default()) <= 5);
    }
}
