use std::env;
use std::io::Read;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripmap_hours::error::AppError;
use tripmap_hours::file;
use tripmap_hours::models::HoursUpdate;
use tripmap_hours::parser;
use tripmap_hours::services::HoursService;
use tripmap_hours::store::{HttpLocationStore, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tripmap_hours=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("fetch");

    match command {
        "fetch" => cmd_fetch().await?,
        "update" => match args.get(2) {
            Some(path) => cmd_update(path).await?,
            None => println!("Usage: tripmap-hours update HOURS_FILE"),
        },
        "check" => cmd_check().await?,
        "parse" => cmd_parse(args.get(2).map(String::as_str))?,
        _ => usage(),
    }

    Ok(())
}

fn service_from_env() -> Result<HoursService, AppError> {
    let config = StoreConfig::new_from_env()?;
    let store = HttpLocationStore::new(config)?;
    Ok(HoursService::new(Arc::new(store)))
}

async fn cmd_fetch() -> Result<(), AppError> {
    let service = service_from_env()?;

    println!("Fetching locations from store...");
    let report = service.fetch().await?;
    println!("Found {} locations\n", report.summaries.len());

    file::save_json("locations.json", &report.summaries)?;
    println!("Saved {} locations to locations.json", report.summaries.len());

    println!("\nLocations without hours: {}", report.without_hours.len());
    for loc in &report.without_hours {
        println!(
            "  - {} ({})",
            loc.name,
            loc.address.as_deref().unwrap_or("no address")
        );
    }

    println!("\nNext: research hours for each location and save them as hours-data.json,");
    println!("then run: tripmap-hours update hours-data.json");
    Ok(())
}

async fn cmd_update(path: &str) -> Result<(), AppError> {
    let service = service_from_env()?;

    println!("Loading hours data from {}...", path);
    let entries: Vec<HoursUpdate> = file::load_json(path)?;
    println!("Found hours data for {} locations\n", entries.len());

    let stats = service.apply_updates(&entries).await?;

    println!("\nSummary:");
    println!("  updated: {}", stats.updated);
    println!("  skipped: {}", stats.skipped);
    println!("  failed:  {}", stats.failed);
    Ok(())
}

async fn cmd_check() -> Result<(), AppError> {
    let service = service_from_env()?;

    println!("Checking current hours data in the store...");
    let report = service.check().await?;

    println!("\nTotal locations: {}", report.total);
    println!("With hours: {}", report.with_hours);
    println!("Without hours: {}", report.without_hours.len());

    if !report.without_hours.is_empty() {
        println!("\nLocations without hours:");
        for loc in &report.without_hours {
            println!(
                "  - {} ({})",
                loc.name,
                loc.address.as_deref().unwrap_or("no address")
            );
        }
    }
    Ok(())
}

fn cmd_parse(path: Option<&str>) -> Result<(), AppError> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match parser::parse(&text) {
        Some(schedule) => println!("{}", serde_json::to_string_pretty(&schedule)?),
        None => {
            eprintln!("No schedule recognized");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn usage() {
    println!("Usage:");
    println!("  tripmap-hours fetch               Fetch locations and save to locations.json");
    println!("  tripmap-hours update HOURS_FILE   Update the store with hours from a file");
    println!("  tripmap-hours check               Check current hours status");
    println!("  tripmap-hours parse [FILE]        Parse hours text (stdin when no file)");
}
