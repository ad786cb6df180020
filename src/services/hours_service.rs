use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{HoursUpdate, LocationSummary, Schedule};
use crate::parser;
use crate::store::LocationStore;

pub struct HoursService {
    store: Arc<dyn LocationStore>,
}

#[derive(Debug, Serialize)]
pub struct FetchReport {
    pub summaries: Vec<LocationSummary>,
    pub without_hours: Vec<LocationSummary>,
}

#[derive(Debug, Serialize)]
pub struct UpdateStats {
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub completed_at: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub total: usize,
    pub with_hours: usize,
    pub without_hours: Vec<LocationSummary>,
}

impl HoursService {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Fetches all locations and splits out the ones still missing hours.
    pub async fn fetch(&self) -> Result<FetchReport, AppError> {
        info!("Fetching locations from store");
        let locations = self.store.fetch_locations().await?;
        let summaries: Vec<LocationSummary> = locations.iter().map(Into::into).collect();
        let without_hours: Vec<LocationSummary> = summaries
            .iter()
            .filter(|s| !s.has_hours)
            .cloned()
            .collect();
        info!(
            "Fetched {} locations, {} without hours",
            summaries.len(),
            without_hours.len()
        );
        Ok(FetchReport {
            summaries,
            without_hours,
        })
    }

    /// Pushes a batch of hours updates to the store. Entries with no
    /// usable hours are skipped and store failures are counted without
    /// aborting the batch.
    pub async fn apply_updates(&self, entries: &[HoursUpdate]) -> Result<UpdateStats, AppError> {
        let mut updated = 0;
        let mut skipped = 0;
        let mut failed = 0;

        for entry in entries {
            let Some(hours) = resolve_hours(entry) else {
                info!("Skipping {} (no hours data)", label(entry));
                skipped += 1;
                continue;
            };

            info!("Updating {}", label(entry));
            match self.store.update_hours(&entry.id, &hours).await {
                Ok(()) => updated += 1,
                Err(e) => {
                    warn!("Failed to update {}: {}", label(entry), e);
                    failed += 1;
                }
            }
        }

        let stats = UpdateStats {
            updated,
            skipped,
            failed,
            completed_at: Utc::now().to_rfc3339(),
        };
        info!("Update completed: {:?}", stats);
        Ok(stats)
    }

    pub async fn check(&self) -> Result<CheckReport, AppError> {
        let locations = self.store.fetch_locations().await?;
        let total = locations.len();
        let without_hours: Vec<LocationSummary> = locations
            .iter()
            .filter(|l| l.hours.is_none())
            .map(Into::into)
            .collect();
        Ok(CheckReport {
            total,
            with_hours: total - without_hours.len(),
            without_hours,
        })
    }
}

/// Pre-structured hours win; otherwise raw text is run through the
/// parser. `None` means the entry carries nothing usable.
fn resolve_hours(entry: &HoursUpdate) -> Option<Schedule> {
    entry
        .hours
        .clone()
        .or_else(|| entry.hours_text.as_deref().and_then(parser::parse))
}

fn label(entry: &HoursUpdate) -> &str {
    entry.name.as_deref().unwrap_or(&entry.id)
}
