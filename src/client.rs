use crate::config::ApiConfig;
use crate::error::{Result, ScoutError};
use crate::types::{CatalogApi, RawApiData};
use std::time::Duration;
use tracing::debug;

/// reqwest-backed PokéAPI client.
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json(&self, url: &str) -> Result<RawApiData> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogApi for PokeApiClient {
    async fn list_pokemon(&self, limit: u32) -> Result<RawApiData> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        self.get_json(&url).await
    }

    async fn fetch_pokemon(&self, name: &str) -> Result<RawApiData> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }

    async fn fetch_encounters(&self, id: i64) -> Result<RawApiData> {
        let url = format!("{}/pokemon/{}/encounters", self.base_url, id);
        self.get_json(&url).await
    }
}
