use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// One row of the remote locations table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub hours: Option<Schedule>,
}

/// The locations.json export shape, for manual hours research.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub has_hours: bool,
}

impl From<&Location> for LocationSummary {
    fn from(loc: &Location) -> Self {
        LocationSummary {
            id: loc.id.clone(),
            name: loc.name.clone(),
            address: loc.address.clone(),
            has_hours: loc.hours.is_some(),
        }
    }
}

/// One entry of a hours-data.json import file. Hours may arrive
/// pre-structured or as raw text to run through the parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursUpdate {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub hours: Option<Schedule>,
    #[serde(default)]
    pub hours_text: Option<String>,
}
