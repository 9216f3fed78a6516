use reqwest::{header, Client};
use tokio_retry::Retry;

use crate::{
    clients::retry_strategy,
    config::GeocodeConfig,
    error::{Error, Result},
    model::movie::Movie,
};

/// Client of the SF open data "Film Locations in San Francisco" resource.
#[derive(Debug, Clone)]
pub struct SfDataClient {
    client: Client,
    api_url: String,
    app_token: String,
    record_limit: usize,
    max_retries: usize,
}

impl SfDataClient {
    pub fn new(config: &GeocodeConfig) -> Result<Self> {
        let user_agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::Config(format!("Invalid user agent: {}", e)))?;
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
            api_url: config.source_url.clone(),
            app_token: config.app_token.clone(),
            record_limit: config.record_limit,
            max_retries: config.max_retries,
        })
    }

    /// Fetches the raw, not yet geocoded film location rows.
    pub async fn fetch_movies(&self) -> Result<Vec<Movie>> {
        Retry::spawn(retry_strategy(self.max_retries), || async move {
            self.fetch_movies_no_retry().await
        })
        .await
    }

    async fn fetch_movies_no_retry(&self) -> Result<Vec<Movie>> {
        let record_limit = self.record_limit.to_string();
        log::debug!("Fetching movies from {}", self.api_url);

        let resp = self
            .client
            .get(&self.api_url)
            .query(&[
                ("$$app_token", self.app_token.as_str()),
                ("$limit", record_limit.as_str()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                url: self.api_url.clone(),
            });
        }

        Ok(resp.json::<Vec<Movie>>().await?)
    }
}
