use reqwest::{header, Client};
use serde::Deserialize;
use tokio_retry::Retry;

use crate::{
    clients::retry_strategy,
    config::GeocodeConfig,
    error::{Error, Result},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Geocoder backed by the Nominatim search API, restricted to a viewbox.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    search_url: String,
    viewbox: String,
    max_retries: usize,
}

impl NominatimClient {
    pub fn new(config: &GeocodeConfig) -> Result<Self> {
        let user_agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::Config(format!("Invalid user agent: {}", e)))?;
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
            search_url: format!("{}/search", config.nominatim_url.trim_end_matches('/')),
            viewbox: config.viewbox.clone(),
            max_retries: config.max_retries,
        })
    }

    /// Best match for `location` inside the viewbox, `None` when there is no
    /// result.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinates>> {
        Retry::spawn(retry_strategy(self.max_retries), || async move {
            self.geocode_no_retry(location).await
        })
        .await
    }

    async fn geocode_no_retry(&self, location: &str) -> Result<Option<Coordinates>> {
        let resp = self
            .client
            .get(&self.search_url)
            .query(&[
                ("q", location),
                ("format", "json"),
                ("limit", "1"),
                ("viewbox", self.viewbox.as_str()),
                ("bounded", "1"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status(),
                url: self.search_url.clone(),
            });
        }

        let places = resp.json::<Vec<Place>>().await?;
        Ok(places.into_iter().next().map(|place| Coordinates {
            lat: place.lat,
            lng: place.lon,
        }))
    }
}
