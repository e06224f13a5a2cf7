//! Gesture labels and the action record returned to the caller.

/// Closed set of recognizable gestures.
///
/// `None` is a valid terminal outcome (no hand found, undecodable frame),
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    /// Single raised finger: open the chat panel.
    OpenChat,
    /// Open hand or fist: switch to the privileged view.
    TeacherView,
    /// Two or three fingers: mark attendance.
    MarkAttendance,
    /// No gesture recognized.
    #[default]
    None,
}

impl GestureLabel {
    /// Wire name of the label (the serde snake_case form).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenChat => "open_chat",
            Self::TeacherView => "teacher_view",
            Self::MarkAttendance => "mark_attendance",
            Self::None => "none",
        }
    }

    /// Display symbol shown to the user.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::OpenChat => "🤟",
            Self::TeacherView => "✊",
            Self::MarkAttendance => "👋",
            Self::None => "",
        }
    }

    /// Key trigger forwarded to the frontend.
    ///
    /// Attendance marking is deliberately not key-triggerable.
    pub fn key(self) -> Option<char> {
        match self {
            Self::OpenChat => Some('c'),
            Self::TeacherView => Some('t'),
            Self::MarkAttendance | Self::None => None,
        }
    }
}

/// Classification record for a single frame.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionSignal {
    /// Recognized gesture.
    pub gesture: GestureLabel,
    /// Display symbol, empty when no gesture was recognized.
    pub emoji: String,
    /// Key trigger, absent for non-triggering gestures.
    pub key: Option<char>,
}

impl ActionSignal {
    /// Resolve a gesture label into its full action record.
    pub fn resolve(gesture: GestureLabel) -> Self {
        Self {
            gesture,
            emoji: gesture.emoji().to_string(),
            key: gesture.key(),
        }
    }

    /// The soft-failure record: no gesture, empty symbol, no key.
    pub fn none() -> Self {
        Self::resolve(GestureLabel::None)
    }
}
