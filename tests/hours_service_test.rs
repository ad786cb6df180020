use std::sync::Arc;

use tripmap_hours::models::{HoursUpdate, Location};
use tripmap_hours::parser;
use tripmap_hours::services::HoursService;
use tripmap_hours::store::{LocationStore, MemoryLocationStore};

fn seed_locations() -> Vec<Location> {
    vec![
        Location {
            id: "loc-1".to_string(),
            name: "Griffith Observatory".to_string(),
            address: Some("2800 E Observatory Rd".to_string()),
            hours: parser::parse("Tuesday: 12:00 PM - 10:00 PM"),
        },
        Location {
            id: "loc-2".to_string(),
            name: "The Last Bookstore".to_string(),
            address: Some("453 S Spring St".to_string()),
            hours: None,
        },
        Location {
            id: "loc-3".to_string(),
            name: "Angels Flight".to_string(),
            address: None,
            hours: None,
        },
    ]
}

#[tokio::test]
async fn fetch_splits_out_locations_without_hours() {
    let store = Arc::new(MemoryLocationStore::new(seed_locations()));
    let service = HoursService::new(store);

    let report = service.fetch().await.expect("fetch");

    assert_eq!(report.summaries.len(), 3);
    assert!(report.summaries[0].has_hours);
    assert_eq!(report.without_hours.len(), 2);
    assert_eq!(report.without_hours[0].id, "loc-2");
    assert_eq!(report.without_hours[1].id, "loc-3");
}

#[tokio::test]
async fn apply_updates_handles_mixed_batch() {
    let store = Arc::new(MemoryLocationStore::new(seed_locations()));
    let service = HoursService::new(store.clone());

    let entries = vec![
        // Pre-structured hours.
        HoursUpdate {
            id: "loc-2".to_string(),
            name: Some("The Last Bookstore".to_string()),
            hours: parser::parse("Mon-Fri: 11am-8pm"),
            hours_text: None,
        },
        // Raw text run through the parser.
        HoursUpdate {
            id: "loc-3".to_string(),
            name: Some("Angels Flight".to_string()),
            hours: None,
            hours_text: Some("Open 24 hours".to_string()),
        },
        // Nothing usable: counted as skipped.
        HoursUpdate {
            id: "loc-1".to_string(),
            name: None,
            hours: None,
            hours_text: None,
        },
        // Unparseable text: also skipped, not failed.
        HoursUpdate {
            id: "loc-1".to_string(),
            name: None,
            hours: None,
            hours_text: Some("ask at the front desk".to_string()),
        },
        // Unknown id: the store rejects it.
        HoursUpdate {
            id: "loc-404".to_string(),
            name: Some("Demolished Diner".to_string()),
            hours: None,
            hours_text: Some("Sat 9-5".to_string()),
        },
    ];

    let stats = service.apply_updates(&entries).await.expect("update");

    assert_eq!(stats.updated, 2);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.failed, 1);
    assert!(!stats.completed_at.is_empty());

    let locations = store.fetch_locations().await.expect("fetch");
    let by_id = |id: &str| locations.iter().find(|l| l.id == id).expect("location");
    assert!(by_id("loc-2").hours.is_some());
    assert_eq!(
        by_id("loc-3").hours.as_ref().expect("hours").weekday_text,
        vec!["Open 24 hours"]
    );
}

#[tokio::test]
async fn check_reports_hours_coverage() {
    let store = Arc::new(MemoryLocationStore::new(seed_locations()));
    let service = HoursService::new(store);

    let report = service.check().await.expect("check");

    assert_eq!(report.total, 3);
    assert_eq!(report.with_hours, 1);
    assert_eq!(report.without_hours.len(), 2);
}
