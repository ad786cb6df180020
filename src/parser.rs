//! Free-text business hours recognition.
//!
//! Turns scraped or hand-pasted operating-hours text into a [`Schedule`]
//! in the structured opening_hours shape. Only the line-oriented
//! "day, open time, close time" pattern family is recognized; holidays,
//! seasonal hours and the like are out of scope.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::{ClockTime, DayOfWeek, Meridiem, Period, Schedule, TimePoint};

/// One compound pattern per line: a day token followed by an open time
/// and, further along, a close time. Longer abbreviations are listed
/// before their prefixes so "tues"/"thurs" resolve as day tokens.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tues|tue|wed|thurs|thur|thu|fri|sat|sun)\W.*?(\d{1,2}):?(\d{2})?\s*([ap]m)?.*?(\d{1,2}):?(\d{2})?\s*([ap]m)?",
    )
    .expect("hours line pattern is valid")
});

const DAY_TOKENS: &[(&str, DayOfWeek)] = &[
    ("monday", DayOfWeek::Monday),
    ("mon", DayOfWeek::Monday),
    ("tuesday", DayOfWeek::Tuesday),
    ("tue", DayOfWeek::Tuesday),
    ("tues", DayOfWeek::Tuesday),
    ("wednesday", DayOfWeek::Wednesday),
    ("wed", DayOfWeek::Wednesday),
    ("thursday", DayOfWeek::Thursday),
    ("thu", DayOfWeek::Thursday),
    ("thur", DayOfWeek::Thursday),
    ("thurs", DayOfWeek::Thursday),
    ("friday", DayOfWeek::Friday),
    ("fri", DayOfWeek::Friday),
    ("saturday", DayOfWeek::Saturday),
    ("sat", DayOfWeek::Saturday),
    ("sunday", DayOfWeek::Sunday),
    ("sun", DayOfWeek::Sunday),
];

fn day_from_token(token: &str) -> Option<DayOfWeek> {
    let token = token.to_ascii_lowercase();
    DAY_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, day)| *day)
}

/// Parses free-form hours text into a schedule.
///
/// Returns `None` when nothing on any line is recognized; malformed
/// input is never an error. Each line contributes at most one period
/// (the leftmost day token plus the first open/close time pair), with
/// the trimmed line kept verbatim as its weekday_text entry.
///
/// A text-wide "24 hour" / "open 24" mention short-circuits everything
/// else and yields the fixed always-open schedule.
pub fn parse(text: &str) -> Option<Schedule> {
    let lowered = text.to_lowercase();
    if lowered.contains("24 hour") || lowered.contains("open 24") {
        return Some(Schedule {
            periods: vec![Period {
                open: TimePoint {
                    day: DayOfWeek::Sunday,
                    time: ClockTime::midnight(),
                },
                close: None,
            }],
            weekday_text: vec!["Open 24 hours".to_string()],
        });
    }

    let mut periods = Vec::new();
    let mut weekday_text = Vec::new();

    for line in text.lines() {
        if let Some(period) = match_line(line) {
            periods.push(period);
            weekday_text.push(line.trim().to_string());
        }
    }

    if periods.is_empty() {
        None
    } else {
        Some(Schedule {
            periods,
            weekday_text,
        })
    }
}

/// A close time is required: a line with only an open time matches no
/// pattern and is skipped. Open and close are recorded on the same day
/// even when the close is numerically earlier (no midnight rollover).
fn match_line(line: &str) -> Option<Period> {
    let caps = LINE_PATTERN.captures(line)?;
    let day = day_from_token(caps.get(1)?.as_str())?;

    // Unmarked open times read as AM, unmarked close times as PM,
    // so "9-5" means 9 AM to 5 PM.
    let open = clock_time(&caps, 2, 3, 4, Meridiem::Am)?;
    let close = clock_time(&caps, 5, 6, 7, Meridiem::Pm)?;

    Some(Period {
        open: TimePoint {
            day,
            time: open,
        },
        close: Some(TimePoint {
            day,
            time: close,
        }),
    })
}

fn clock_time(
    caps: &Captures,
    hour_idx: usize,
    minute_idx: usize,
    meridiem_idx: usize,
    default: Meridiem,
) -> Option<ClockTime> {
    let hour: u32 = caps.get(hour_idx)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(minute_idx) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = match caps.get(meridiem_idx) {
        Some(m) if m.as_str().eq_ignore_ascii_case("pm") => Meridiem::Pm,
        Some(_) => Meridiem::Am,
        None => default,
    };
    Some(ClockTime::from_civil(hour, minute, meridiem))
}
