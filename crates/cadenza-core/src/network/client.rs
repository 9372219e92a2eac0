use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Shared reqwest wrapper; one instance per remote service.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// GET an endpoint under the base URL and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        headers: &[(&'static str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.json::<T>().await?;
        Ok(body)
    }

    /// GET an absolute URL and return the raw body bytes.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
