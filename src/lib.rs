use std::path::Path;

pub mod browser;
pub mod clients;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod filter;
pub mod map;
pub mod model;
pub mod persisters;

use browser::Session;
use config::{Cli, Command, FilterArgs, GeocodeConfig};
use error::Result;
use fetchers::geocoded_movies_fetcher::GeocodedMoviesFetcher;
use filter::{FilterEngine, FilterField};
use map::MapView;
use persisters::{csv_writer::CsvWriter, json_writer::JsonWriter, map_writer::MapWriter};

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Browse { data } => browse(data.data.as_deref()),
        Command::Map {
            data,
            filters,
            output,
        } => write_map(data.data.as_deref(), &filters, &output),
        Command::Export {
            data,
            filters,
            output,
        } => export_csv(data.data.as_deref(), &filters, &output),
        Command::Geocode { output, limit } => {
            geocode(GeocodeConfig::from_env()?, limit, &output).await
        }
    }
}

pub fn browse(data: Option<&Path>) -> Result<()> {
    let engine = FilterEngine::new(dataset::load(data)?);
    let stdin = std::io::stdin();
    let mut session = Session::new(engine, stdin.lock(), std::io::stdout());
    session.run()
}

/// Loads the dataset and applies `filters` as if they had been typed in.
pub fn filtered_engine(data: Option<&Path>, filters: &FilterArgs) -> Result<FilterEngine> {
    let mut engine = FilterEngine::new(dataset::load(data)?);
    let filters = filters.to_filters();
    for field in FilterField::ALL {
        let value = filters.get(field);
        if !value.is_empty() {
            engine.set_filter(field, value);
        }
    }
    log::info!("{}", engine.results_label());
    Ok(engine)
}

pub fn write_map(data: Option<&Path>, filters: &FilterArgs, output: &Path) -> Result<()> {
    let engine = filtered_engine(data, filters)?;
    MapWriter::save_map(&MapView::default(), engine.visible(), output)?;
    log::info!("Successfully generated map file: {}", output.display());
    Ok(())
}

pub fn export_csv(data: Option<&Path>, filters: &FilterArgs, output: &Path) -> Result<()> {
    let engine = filtered_engine(data, filters)?;
    let written = CsvWriter::save_movies_to_csv(engine.visible(), output)?;
    log::info!(
        "Successfully generated CSV file {} with {} movie locations",
        output.display(),
        written
    );
    Ok(())
}

pub async fn geocode(config: GeocodeConfig, limit: Option<usize>, output: &Path) -> Result<()> {
    let fetcher = GeocodedMoviesFetcher::new(&config)?;
    let movies = fetcher.fetch_geocoded_movies(limit).await?;

    JsonWriter::save_movies_to_json(&movies, output)?;
    log::info!("Geocoding completed. Results saved to {}", output.display());
    Ok(())
}
