use serde::{Deserialize, Serialize};

use super::DayKey;

/// One enrolled course session as delivered by the course feed.
///
/// Only `subject_code`, `day_w`, `time_from` and `time_to` drive the layout.
/// The descriptive fields are carried through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSession {
    pub id: String,
    pub subject_code: String,
    #[serde(default)]
    pub subject_name_th: String,
    /// Raw day text, e.g. `"MON"` or `" sat "`.
    #[serde(default)]
    pub day_w: String,
    /// Start time as `HH:MM`.
    #[serde(default)]
    pub time_from: String,
    /// End time as `HH:MM`.
    #[serde(default)]
    pub time_to: String,
    #[serde(default)]
    pub room_name_th: String,
    /// Usually `"Lecture"` or `"Lab"`, but any label is accepted.
    #[serde(default)]
    pub section_type_th: String,
    #[serde(default)]
    pub section_code: String,
}

impl CourseSession {
    /// Minimal session with empty descriptive fields.
    pub fn new(
        id: impl Into<String>,
        subject_code: impl Into<String>,
        day_w: impl Into<String>,
        time_from: impl Into<String>,
        time_to: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject_code: subject_code.into(),
            subject_name_th: String::new(),
            day_w: day_w.into(),
            time_from: time_from.into(),
            time_to: time_to.into(),
            room_name_th: String::new(),
            section_type_th: String::new(),
            section_code: String::new(),
        }
    }

    pub fn day_key(&self) -> DayKey {
        DayKey::normalize(&self.day_w)
    }
}
