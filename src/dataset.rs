use std::path::Path;

use crate::{
    error::{Error, Result},
    model::movie::Movie,
};

/// Geocoded SF film locations shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/geocoded_movies.json");

pub fn load_bundled() -> Result<Vec<Movie>> {
    parse(BUNDLED_DATASET)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadDataset {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// Loads `path` when given, the bundled dataset otherwise.
pub fn load(path: Option<&Path>) -> Result<Vec<Movie>> {
    let movies = match path {
        Some(path) => load_from_path(path)?,
        None => load_bundled()?,
    };
    log::info!("Loaded {} movie locations", movies.len());
    Ok(movies)
}

pub fn parse(json: &str) -> Result<Vec<Movie>> {
    Ok(serde_json::from_str(json)?)
}
