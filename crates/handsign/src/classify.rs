//! Finger count to gesture label mapping.

use crate::action::GestureLabel;
use crate::shape::ShapeFeatures;

/// Map a finger count (plus tie-break shape features) to a gesture label.
///
/// A peace sign seen at certain angles is geometrically ambiguous with a
/// four-finger count; the aspect ratio disambiguates orientation, so a tall
/// narrow four-count is treated as attendance rather than the teacher view.
pub(crate) fn classify_fingers(count: u8, features: &ShapeFeatures) -> GestureLabel {
    match count {
        1 => GestureLabel::OpenChat,
        2 | 3 => GestureLabel::MarkAttendance,
        4 => {
            if features.aspect_ratio < 0.6 {
                GestureLabel::MarkAttendance
            } else {
                GestureLabel::TeacherView
            }
        }
        c if c >= 5 => GestureLabel::TeacherView,
        _ => {
            if features.solidity > 0.85 {
                GestureLabel::TeacherView
            } else {
                GestureLabel::OpenChat
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_aspect(aspect_ratio: f64) -> ShapeFeatures {
        ShapeFeatures {
            aspect_ratio,
            ..Default::default()
        }
    }

    #[test]
    fn count_table() {
        let f = with_aspect(1.0);
        assert_eq!(classify_fingers(1, &f), GestureLabel::OpenChat);
        assert_eq!(classify_fingers(2, &f), GestureLabel::MarkAttendance);
        assert_eq!(classify_fingers(3, &f), GestureLabel::MarkAttendance);
        assert_eq!(classify_fingers(5, &f), GestureLabel::TeacherView);
    }

    #[test]
    fn four_count_tie_break_on_aspect() {
        // Tall/narrow: likely a miscounted peace sign.
        assert_eq!(
            classify_fingers(4, &with_aspect(0.4)),
            GestureLabel::MarkAttendance
        );
        assert_eq!(
            classify_fingers(4, &with_aspect(0.8)),
            GestureLabel::TeacherView
        );
    }

    #[test]
    fn zero_count_falls_back_on_solidity() {
        let solid = ShapeFeatures {
            solidity: 0.9,
            ..Default::default()
        };
        assert_eq!(classify_fingers(0, &solid), GestureLabel::TeacherView);

        let sparse = ShapeFeatures {
            solidity: 0.5,
            ..Default::default()
        };
        assert_eq!(classify_fingers(0, &sparse), GestureLabel::OpenChat);
    }
}
