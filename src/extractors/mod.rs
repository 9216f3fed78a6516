pub mod location_preprocessor;
