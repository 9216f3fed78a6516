use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};

use crate::{
    error::{Error, Result},
    filter::{FilterField, Filters},
};

pub const DEFAULT_SOURCE_URL: &str = "https://data.sfgov.org/resource/yitu-d5am.json";
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
/// South-west and north-east corners of San Francisco.
pub const SF_VIEWBOX: &str = "-123.173825,37.63983,-122.28178,37.929824";

#[derive(Parser, Debug)]
#[command(
    name = "sfmoviemap",
    version,
    about = "Browse San Francisco film locations and put them on a map"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively filter the dataset
    Browse {
        #[command(flatten)]
        data: DataArgs,
    },
    /// Write an HTML map of the filtered movie locations
    Map {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(short, long, default_value = "movies_map.html")]
        output: PathBuf,
    },
    /// Write the filtered movie locations as CSV
    Export {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(short, long, default_value = "movies.csv")]
        output: PathBuf,
    },
    /// Rebuild the dataset from the SF open data API and Nominatim
    Geocode {
        #[arg(short, long, default_value = "geocoded_movies.json")]
        output: PathBuf,
        /// Only geocode the first N records
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Dataset to load instead of the bundled one
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub year: String,
    #[arg(long, default_value = "")]
    pub location: String,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Filters {
        let mut filters = Filters::default();
        *filters.get_mut(FilterField::Title) = self.title.clone();
        *filters.get_mut(FilterField::Year) = self.year.clone();
        *filters.get_mut(FilterField::Location) = self.location.clone();
        filters
    }
}

/// Settings of the dataset rebuild.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    pub source_url: String,
    pub app_token: String,
    pub record_limit: usize,
    pub nominatim_url: String,
    pub viewbox: String,
    pub user_agent: String,
    /// Pause after every geocoding request. Nominatim allows one per second.
    pub request_delay: Duration,
    pub max_retries: usize,
}

impl GeocodeConfig {
    pub fn new(app_token: String) -> Self {
        GeocodeConfig {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            app_token,
            record_limit: 3000,
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            viewbox: SF_VIEWBOX.to_string(),
            user_agent: format!("sfmoviemap/{}", env!("CARGO_PKG_VERSION")),
            request_delay: Duration::from_secs(1),
            max_retries: 5,
        }
    }

    /// Reads `APP_TOKEN` from the environment (`.env.local` and `.env` are
    /// loaded at startup).
    pub fn from_env() -> Result<Self> {
        match std::env::var("APP_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Ok(GeocodeConfig::new(token.trim().to_string())),
            _ => Err(Error::Config(
                "APP_TOKEN is not set, add it to .env.local or the environment".to_string(),
            )),
        }
    }
}

/// Loads `.env.local` first so it wins over `.env`.
pub fn load_env_files() {
    for file in [".env.local", ".env"] {
        match dotenvy::from_filename(file) {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Could not load {}: {}", file, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_command_with_filters() {
        let cli = Cli::parse_from([
            "sfmoviemap",
            "map",
            "--title",
            "vertigo",
            "--year",
            "1958",
            "-o",
            "vertigo.html",
        ]);

        match cli.command {
            Command::Map {
                data,
                filters,
                output,
            } => {
                assert_eq!(data.data, None);
                assert_eq!(output, PathBuf::from("vertigo.html"));
                let filters = filters.to_filters();
                assert_eq!(filters.title, "vertigo");
                assert_eq!(filters.year, "1958");
                assert_eq!(filters.location, "");
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::parse_from(["sfmoviemap", "browse", "--log-level", "debug"]);

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Browse { .. }));
    }

    #[test]
    fn default_geocode_settings() {
        let config = GeocodeConfig::new("token".to_string());

        assert_eq!(config.record_limit, 3000);
        assert_eq!(config.viewbox, SF_VIEWBOX);
        assert_eq!(config.request_delay, Duration::from_secs(1));
    }
}
