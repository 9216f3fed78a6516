use serde::Serialize;
use tera::{Context, Tera};

use crate::{error::Result, model::movie::Movie};

use super::marker::MarkerLayer;

const MAP_TEMPLATE: &str = include_str!("../../templates/map.html");

/// Configuration of the external map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapView {
    fn default() -> Self {
        MapView {
            center: (37.7749, -122.4194),
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

impl MapView {
    /// Renders a standalone HTML page showing `movies` as clustered markers.
    pub fn render<'a>(&self, movies: impl IntoIterator<Item = &'a Movie>) -> Result<String> {
        let layer = MarkerLayer::build(movies);
        if layer.skipped > 0 {
            log::warn!(
                "{} visible movie(s) have no usable position and are not on the map",
                layer.skipped
            );
        }
        self.render_layer(&layer)
    }

    pub fn render_layer(&self, layer: &MarkerLayer) -> Result<String> {
        let mut context = Context::new();
        context.insert("center_lat", &self.center.0);
        context.insert("center_lng", &self.center.1);
        context.insert("zoom", &self.zoom);
        context.insert("tile_url", &self.tile_url);
        context.insert("attribution", &serde_json::to_string(&self.attribution)?);
        context.insert("marker_count", &layer.markers.len());
        context.insert("markers", &script_safe_json(&layer.to_feature_collection())?);

        Ok(Tera::one_off(MAP_TEMPLATE, &context, true)?)
    }
}

// JSON embedded in a <script> element must not be able to close it.
fn script_safe_json(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
