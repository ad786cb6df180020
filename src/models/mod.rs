pub mod hours;
pub mod location;

pub use hours::{ClockTime, DayOfWeek, Meridiem, Period, Schedule, TimePoint};
pub use location::{HoursUpdate, Location, LocationSummary};
