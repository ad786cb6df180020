use serde::{Deserialize, Serialize};

/// Day codes follow the Google Places convention: Sunday is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DayOfWeek {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DayOfWeek::Sunday),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            _ => Err(format!("invalid day code: {}", code)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A time of day normalized to the 4-digit 24-hour form, e.g. "0900".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(String);

impl ClockTime {
    /// Converts a 12-hour civil time to the "HHMM" form.
    ///
    /// 12 AM maps to 0000 and 12 PM to 1200; PM adds twelve to hours
    /// 1 through 11 only, so times already written on a 24-hour clock
    /// ("18:00") pass through unchanged. Hour values are taken as
    /// written and never clamped, so garbage input can produce a
    /// string outside 0000-2359.
    pub fn from_civil(hour: u32, minute: u32, meridiem: Meridiem) -> Self {
        let hour = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, h @ 1..=11) => h + 12,
            (_, h) => h,
        };
        ClockTime(format!("{:02}{:02}", hour, minute))
    }

    pub fn midnight() -> Self {
        ClockTime("0000".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    pub day: DayOfWeek,
    pub time: ClockTime,
}

/// One contiguous open-to-close interval. A missing close means the
/// opening is unbounded (the 24-hour case).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub open: TimePoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<TimePoint>,
}

/// Structured weekly hours in the Google Places opening_hours shape:
/// day-indexed periods plus human-readable per-line summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub periods: Vec<Period>,
    pub weekday_text: Vec<String>,
}
