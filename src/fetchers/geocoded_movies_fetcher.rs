use std::time::Duration;

use crate::{
    clients::{nominatim_client::NominatimClient, sf_data_client::SfDataClient},
    config::GeocodeConfig,
    error::{Error, Result},
    extractors::location_preprocessor::LocationPreprocessor,
    model::movie::Movie,
};

/// Rebuilds the geocoded dataset: every SF film location row gets the
/// coordinates of its preprocessed location.
pub struct GeocodedMoviesFetcher {
    sf_client: SfDataClient,
    geocoder: NominatimClient,
    preprocessor: LocationPreprocessor,
    request_delay: Duration,
}

impl GeocodedMoviesFetcher {
    pub fn new(config: &GeocodeConfig) -> Result<Self> {
        Ok(GeocodedMoviesFetcher {
            sf_client: SfDataClient::new(config)?,
            geocoder: NominatimClient::new(config)?,
            preprocessor: LocationPreprocessor::new(),
            request_delay: config.request_delay,
        })
    }

    /// Rows without a location, or whose location cannot be geocoded, are
    /// left out of the result.
    pub async fn fetch_geocoded_movies(&self, limit: Option<usize>) -> Result<Vec<Movie>> {
        let movies = self.sf_client.fetch_movies().await?;
        if movies.is_empty() {
            return Err(Error::NoMovies);
        }
        log::info!("{} movies found", movies.len());

        let movies: Vec<Movie> = match limit {
            Some(limit) => movies.into_iter().take(limit).collect(),
            None => movies,
        };

        let size = movies.len();
        let mut geocoded = vec![];

        // Nominatim's usage policy allows a single request per second.
        for (i, movie) in movies.into_iter().enumerate() {
            let location = match movie.locations() {
                Some(location) => self.preprocessor.preprocess(location),
                None => {
                    log::debug!(
                        "({}/{}) Skipping {:?}: no location",
                        i + 1,
                        size,
                        movie.title().unwrap_or_default()
                    );
                    continue;
                }
            };

            log::info!(
                "({}/{}) Geocoding: {} ({})",
                i + 1,
                size,
                movie.title().unwrap_or_default(),
                movie.locations().unwrap_or_default()
            );
            let coordinates = self.geocoder.geocode(&location).await;
            tokio::time::sleep(self.request_delay).await;

            match coordinates {
                Ok(Some(coordinates)) => geocoded.push(Movie {
                    lat: Some(coordinates.lat),
                    lng: Some(coordinates.lng),
                    ..movie
                }),
                Ok(None) => log::warn!("No results for location: {}", location),
                Err(e) => log::warn!("Error geocoding {}: {}", location, e),
            }
        }

        log::info!("Geocoded {} of {} movie locations", geocoded.len(), size);
        Ok(geocoded)
    }
}
