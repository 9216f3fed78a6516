//! Map presentation of the visible records.
//!
//! Markers, clustering and tiles are drawn client-side by Leaflet and
//! Leaflet.markercluster; this module only prepares their input.

pub mod marker;
pub mod popup;
pub mod view;

pub use marker::{Marker, MarkerLayer};
pub use popup::{Popup, NO_DATA};
pub use view::MapView;
