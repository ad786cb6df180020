pub mod hours_service;

pub use hours_service::{CheckReport, FetchReport, HoursService, UpdateStats};
