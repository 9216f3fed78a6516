use std::path::Path;

use crate::{
    error::{Error, Result},
    map::MapView,
    model::movie::Movie,
};

pub struct MapWriter {}

impl MapWriter {
    pub fn save_map<'a>(
        view: &MapView,
        movies: impl IntoIterator<Item = &'a Movie>,
        file_name: impl AsRef<Path>,
    ) -> Result<()> {
        let path = file_name.as_ref();
        let html = view.render(movies)?;

        std::fs::write(path, html).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_html_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        let movies = vec![Movie {
            title: Some("The Rock".to_string()),
            lat: Some("37.8267".to_string()),
            lng: Some("-122.4230".to_string()),
            ..Default::default()
        }];

        MapWriter::save_map(&MapView::default(), &movies, &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("The Rock"));
    }
}
