use serde_json::{json, Value};

use crate::model::movie::Movie;

use super::popup::Popup;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    pub popup: Popup,
}

impl Marker {
    /// `None` when the record has no usable position.
    pub fn from_movie(movie: &Movie) -> Option<Marker> {
        let (lat, lng) = movie.coordinates()?;
        Some(Marker {
            lat,
            lng,
            popup: Popup::for_movie(movie),
        })
    }

    /// GeoJSON point feature. Note the `[lng, lat]` coordinate order.
    pub fn to_feature(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.lng, self.lat],
            },
            "properties": {
                "popup": self.popup,
            },
        })
    }
}

/// Markers for a set of visible records.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    pub markers: Vec<Marker>,
    /// Records that were visible but had no usable position.
    pub skipped: usize,
}

impl MarkerLayer {
    pub fn build<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Self {
        let mut layer = MarkerLayer::default();

        for movie in movies {
            match Marker::from_movie(movie) {
                Some(marker) => layer.markers.push(marker),
                None => {
                    log::warn!(
                        "Skipping marker for {:?} at {:?}: unusable coordinates ({:?}, {:?})",
                        movie.title().unwrap_or_default(),
                        movie.locations().unwrap_or_default(),
                        movie.lat,
                        movie.lng
                    );
                    layer.skipped += 1;
                }
            }
        }

        layer
    }

    pub fn to_feature_collection(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.markers.iter().map(Marker::to_feature).collect::<Vec<_>>(),
        })
    }
}
