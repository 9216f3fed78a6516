use std::time::Duration;

use tokio_retry::strategy::{jitter, ExponentialBackoff};

pub mod nominatim_client;
pub mod sf_data_client;

pub(crate) fn retry_strategy(max_retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(10).map(jitter).take(max_retries)
}
