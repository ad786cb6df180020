use std::env;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::AppError;
use crate::models::{Location, Schedule};

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("SUPABASE_URL")
            .map_err(|_| AppError::Config("SUPABASE_URL is not set".to_string()))?;
        let api_key = env::var("SUPABASE_KEY")
            .map_err(|_| AppError::Config("SUPABASE_KEY is not set".to_string()))?;

        Ok(Self { base_url, api_key })
    }
}

#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn fetch_locations(&self) -> Result<Vec<Location>, AppError>;
    async fn update_hours(&self, location_id: &str, hours: &Schedule) -> Result<(), AppError>;
}

/// Supabase REST client for the locations table.
pub struct HttpLocationStore {
    client: Client,
    config: StoreConfig,
}

impl HttpLocationStore {
    pub fn new(config: StoreConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl LocationStore for HttpLocationStore {
    async fn fetch_locations(&self) -> Result<Vec<Location>, AppError> {
        let url = format!("{}/rest/v1/locations", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", "id,name,address,hours")])
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Store { status, body });
        }

        let body_text = response.text().await.unwrap_or_default();
        serde_json::from_str::<Vec<Location>>(&body_text).map_err(|e| {
            tracing::error!("Failed to parse locations response: {}", e);
            AppError::Json(e)
        })
    }

    async fn update_hours(&self, location_id: &str, hours: &Schedule) -> Result<(), AppError> {
        let url = format!("{}/rest/v1/locations", self.config.base_url);

        let response = self
            .client
            .patch(&url)
            .query(&[("id", format!("eq.{}", location_id))])
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "hours": hours }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Store { status, body });
        }

        Ok(())
    }
}

/// In-process store used by the integration tests.
pub struct MemoryLocationStore {
    locations: Mutex<Vec<Location>>,
}

impl MemoryLocationStore {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations: Mutex::new(locations),
        }
    }
}

#[async_trait]
impl LocationStore for MemoryLocationStore {
    async fn fetch_locations(&self) -> Result<Vec<Location>, AppError> {
        Ok(self.locations.lock().unwrap().clone())
    }

    async fn update_hours(&self, location_id: &str, hours: &Schedule) -> Result<(), AppError> {
        let mut locations = self.locations.lock().unwrap();
        match locations.iter_mut().find(|l| l.id == location_id) {
            Some(location) => {
                location.hours = Some(hours.clone());
                Ok(())
            }
            None => Err(AppError::NotFound(format!(
                "no location with id {}",
                location_id
            ))),
        }
    }
}
