use anyhow::{anyhow, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde::Deserialize;
use tracing::{debug, error};

use shared_config::AppConfig;

/// One vaccination row exported by the analytics warehouse.
#[derive(Debug, Clone, Deserialize)]
pub struct VaccinationRecord {
    pub no_ktp: String,
    pub vaccine_type: Option<String>,
    pub vaccine_count: Option<i32>,
}

/// Read-only REST client for the analytics warehouse the vaccination sync
/// job pulls from. The warehouse is an external system; this client never
/// writes to it.
pub struct WarehouseClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WarehouseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.warehouse_base_url.clone(),
            api_key: config.warehouse_api_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_str(&self.api_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn fetch_vaccination_records(&self) -> Result<Vec<VaccinationRecord>> {
        let url = format!("{}/v1/vaccinations", self.base_url);
        debug!("Fetching vaccination records from {}", url);

        let response = self
            .client
            .request(Method::GET, &url)
            .headers(self.get_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Warehouse error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Warehouse authentication error: {}", error_text),
                404 => anyhow!("Warehouse export not found: {}", error_text),
                _ => anyhow!("Warehouse error ({}): {}", status, error_text),
            });
        }

        let records = response.json::<Vec<VaccinationRecord>>().await?;
        Ok(records)
    }
}
