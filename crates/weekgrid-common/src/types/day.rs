use serde::{Deserialize, Serialize};
use std::fmt;

/// A canonical day of the week, ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// The five weekdays that are always shown on the grid.
pub const WEEKDAYS: [DayOfWeek; 5] = [
    DayOfWeek::Mon,
    DayOfWeek::Tue,
    DayOfWeek::Wed,
    DayOfWeek::Thu,
    DayOfWeek::Fri,
];

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    pub fn token(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "MON",
            DayOfWeek::Tue => "TUE",
            DayOfWeek::Wed => "WED",
            DayOfWeek::Thu => "THU",
            DayOfWeek::Fri => "FRI",
            DayOfWeek::Sat => "SAT",
            DayOfWeek::Sun => "SUN",
        }
    }

    /// Exact match against a canonical token. Callers normalize first.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.token() == token)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Grouping key for a session's day field after trimming and uppercasing.
///
/// Anything that does not normalize to a canonical token is kept verbatim
/// in `Other`, so dirty feed data still groups but never shows up in the
/// visible-day list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DayKey {
    Day(DayOfWeek),
    Other(String),
}

impl DayKey {
    pub fn normalize(raw: &str) -> Self {
        let token = raw.trim().to_uppercase();
        match DayOfWeek::from_token(&token) {
            Some(day) => DayKey::Day(day),
            None => DayKey::Other(token),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DayKey::Day(day) => day.token(),
            DayKey::Other(token) => token,
        }
    }

    pub fn day(&self) -> Option<DayOfWeek> {
        match self {
            DayKey::Day(day) => Some(*day),
            DayKey::Other(_) => None,
        }
    }
}

impl From<DayOfWeek> for DayKey {
    fn from(day: DayOfWeek) -> Self {
        DayKey::Day(day)
    }
}

impl From<String> for DayKey {
    fn from(raw: String) -> Self {
        DayKey::normalize(&raw)
    }
}

impl From<&str> for DayKey {
    fn from(raw: &str) -> Self {
        DayKey::normalize(raw)
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        match key {
            DayKey::Day(day) => day.token().to_string(),
            DayKey::Other(token) => token,
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
